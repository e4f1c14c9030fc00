use rollcall_engine::Projection;
use rollcall_runtime::Roster;
use rollcall_types::{User, ViewState};

use crate::presentation::view_models::{
    CommandResultViewModel, RosterListViewModel, StatusBadge, Tip, UserRowViewModel,
};

pub fn user_row(user: &User) -> UserRowViewModel {
    UserRowViewModel {
        id: user.id().to_string(),
        first_name: user.first_name().to_string(),
        last_name: user.last_name().to_string(),
        country: user.country().to_string(),
        thumbnail: user.thumbnail().to_string(),
    }
}

pub fn present_roster_list(
    roster: &Roster,
    projection: &Projection<'_>,
    view: &ViewState,
    paint_rows: bool,
) -> CommandResultViewModel<RosterListViewModel> {
    let fetched = roster.originals().len();
    let pages_loaded = roster.accumulator().pages_loaded();

    let content = RosterListViewModel {
        rows: projection.rows.iter().map(|user| user_row(user)).collect(),
        total: projection.total,
        fetched,
        deleted: fetched - roster.records().len(),
        sort: view.sort_key,
        filter: view.filter_text.clone(),
        color_rows: view.color_rows,
        pages_loaded,
        has_more: roster.has_next_page(),
        load_error: roster.last_error().map(str::to_string),
        paint_rows,
    };

    let mut result = CommandResultViewModel::new(content);

    if let Some(error) = roster.last_error() {
        result = result
            .with_badge(StatusBadge::Warning(format!(
                "Stopped after {} page(s): {}",
                pages_loaded, error
            )))
            .with_tip(Tip::new(
                "Rows fetched before the failure are shown; run again to retry",
                format!("rollcall list --pages {}", pages_loaded + 1),
            ));
    } else if roster.has_next_page() {
        result = result.with_tip(Tip::new(
            "Load another page",
            format!("rollcall list --pages {}", pages_loaded + 1),
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_engine::LocaleCollator;
    use rollcall_testing::ScriptedSource;
    use rollcall_testing::fixtures::page_users;
    use rollcall_types::{PageResult, PageToken, SortKey};

    #[tokio::test]
    async fn test_counts_reflect_deletions_and_filter() {
        let source = ScriptedSource::with_page_sizes(&[4, 4]);
        let (mut roster, _) = Roster::open(&source).await;
        roster.delete("p1-0");

        let collator = LocaleCollator::new("en").unwrap();
        let mut view = ViewState::new();
        view.set_sort(SortKey::LastName);
        let projection = roster.project(&view, &collator);

        let result = present_roster_list(&roster, &projection, &view, false);
        let content = &result.content;
        assert_eq!(content.fetched, 4);
        assert_eq!(content.total, 3);
        assert_eq!(content.deleted, 1);
        assert_eq!(content.shown(), 3);
        assert!(content.has_more);
        assert!(result.badge.is_none());
        assert_eq!(result.tips[0].command, "rollcall list --pages 2");
    }

    #[tokio::test]
    async fn test_failed_page_adds_warning_badge() {
        let source = ScriptedSource::new()
            .then_page(PageResult::new(page_users(1, 2), Some(PageToken::new(2))))
            .then_fail(503);
        let (mut roster, _) = Roster::open(&source).await;
        let _ = roster.load_next(&source).await;

        let collator = LocaleCollator::new("en").unwrap();
        let view = ViewState::new();
        let projection = roster.project(&view, &collator);

        let result = present_roster_list(&roster, &projection, &view, false);
        assert_eq!(result.content.shown(), 2);
        assert!(result.content.load_error.is_some());
        let badge = result.badge.expect("warning badge");
        assert!(matches!(badge, StatusBadge::Warning(_)));
        assert!(badge.label().starts_with("Stopped after 1 page(s)"));
    }
}
