//! `rollcall list` against a fake randomuser.me server.
//!
//! The fake serves 5 users per page (see `TestWorld::with_endpoint`) with
//! deterministic names and countries; ids are `world-{page}-{index}`.

use anyhow::Result;
use rollcall_testing::{FakeRandomUser, TestWorld, assertions};

fn world(server: &FakeRandomUser) -> TestWorld {
    TestWorld::new().with_endpoint(&server.endpoint())
}

#[test]
fn test_list_shows_first_page_in_fetch_order() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_row_count(&json, 5)?;
    assert_eq!(
        assertions::row_ids(&json)?,
        vec!["world-1-0", "world-1-1", "world-1-2", "world-1-3", "world-1-4"]
    );
    assert_eq!(json["content"]["pages_loaded"], 1);
    assert_eq!(json["content"]["has_more"], true);
    assert_eq!(json["content"]["sort"], "none");

    Ok(())
}

#[test]
fn test_list_stops_after_fourth_page() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--pages", "10", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_row_count(&json, 20)?;
    assert_eq!(json["content"]["pages_loaded"], 4);
    assert_eq!(json["content"]["has_more"], false);

    Ok(())
}

#[test]
fn test_list_filters_country_case_insensitively() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--pages", "2", "--country", "SPA", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_rows_match_country(&json, "spa")?;
    assert_eq!(assertions::row_ids(&json)?, vec!["world-1-0", "world-2-3"]);
    assert_eq!(json["content"]["total"], 10);
    assert_eq!(json["content"]["filter"], "spa");

    Ok(())
}

#[test]
fn test_list_sorts_by_country_with_locale_collation() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--sort", "country", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(
        assertions::row_countries(&json)?,
        vec!["Åland", "France", "Norway", "Spain", "Zambia"]
    );

    Ok(())
}

#[test]
fn test_list_sorts_by_first_name() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--sort", "first", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(
        assertions::row_ids(&json)?,
        vec!["world-1-1", "world-1-0", "world-1-4", "world-1-3", "world-1-2"]
    );

    Ok(())
}

#[test]
fn test_list_delete_removes_rows_before_projection() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&[
        "list",
        "--delete",
        "world-1-0",
        "--delete",
        "world-1-3",
        "--format",
        "json",
    ])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(
        assertions::row_ids(&json)?,
        vec!["world-1-1", "world-1-2", "world-1-4"]
    );
    assert_eq!(json["content"]["fetched"], 5);
    assert_eq!(json["content"]["deleted"], 2);

    Ok(())
}

#[test]
fn test_list_first_page_failure_exits_nonzero() -> Result<()> {
    let server = FakeRandomUser::failing_from_page(1);
    let world = world(&server);

    let result = world.run(&["list", "--format", "json"])?;

    assert!(!result.success());
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("Error: Error fetching users"));

    Ok(())
}

#[test]
fn test_list_later_failure_keeps_earlier_rows() -> Result<()> {
    let server = FakeRandomUser::failing_from_page(2);
    let world = world(&server);

    let result = world.run(&["list", "--pages", "3", "--format", "json"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_row_count(&json, 5)?;
    assert_eq!(json["badge"]["level"], "warning");
    assert!(json["content"]["load_error"].as_str().is_some());
    assert_eq!(json["content"]["has_more"], true);

    Ok(())
}

#[test]
fn test_list_plain_table() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--color"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    let stdout = result.stdout();
    assert!(stdout.starts_with("ID "));
    assert!(stdout.contains("world-1-2"));
    assert!(stdout.contains("Showing 5 of 5 users | sort: none | filter: -"));
    // Piped output never carries row colors
    assert!(!stdout.contains('\u{1b}'));

    Ok(())
}

#[test]
fn test_list_quiet_prints_ids_only() -> Result<()> {
    let server = FakeRandomUser::start();
    let world = world(&server);

    let result = world.run(&["list", "--quiet", "--sort", "country"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "world-1-2\nworld-1-1\nworld-1-4\nworld-1-0\nworld-1-3\n"
    );

    Ok(())
}

#[test]
fn test_list_rejects_zero_pages() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["list", "--pages", "0"])?;

    assert!(!result.success());
    Ok(())
}
