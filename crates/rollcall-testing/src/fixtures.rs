//! Sample user records and pages.

use rollcall_types::{PageResult, PageToken, User};

/// Countries handed out by the fake server, chosen to exercise collation.
pub const SAMPLE_COUNTRIES: &[&str] = &[
    "Spain", "France", "Åland", "Zambia", "Norway", "spain", "Brazil", "Türkiye", "Chile", "Iran",
];

/// Build a user with a predictable thumbnail.
pub fn user(id: &str, first: &str, last: &str, country: &str) -> User {
    User::new(
        id,
        first,
        last,
        country,
        format!("https://example.test/thumb/{}.jpg", id),
    )
}

/// One user per country, ids `u0`, `u1`, ... in input order.
pub fn users_from_countries(countries: &[&str]) -> Vec<User> {
    countries
        .iter()
        .enumerate()
        .map(|(i, country)| {
            user(
                &format!("u{}", i),
                &format!("First{}", i),
                &format!("Last{}", i),
                country,
            )
        })
        .collect()
}

/// `count` users for page `page`, ids `p{page}-{i}`.
pub fn page_users(page: u32, count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            user(
                &format!("p{}-{}", page, i),
                &format!("First{}", i),
                &format!("Last{}", i),
                SAMPLE_COUNTRIES[i % SAMPLE_COUNTRIES.len()],
            )
        })
        .collect()
}

/// Pages with the given sizes, linked by consecutive tokens; the last one ends the stream.
pub fn linked_pages(sizes: &[usize]) -> Vec<PageResult> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            let page = i as u32 + 1;
            let next = if i + 1 < sizes.len() {
                Some(PageToken::new(page).next())
            } else {
                None
            };
            PageResult::new(page_users(page, size), next)
        })
        .collect()
}
