use rollcall_types::{SortKey, User, ViewState};
use serde::Serialize;

use crate::Collation;

// NOTE: Projection order
//
// Filter always runs before sort. Sorting a filtered slice can never bring a
// filtered-out record back, and `SortKey::None` leaves the filtered order
// exactly as accumulated.

/// Rows selected for display, borrowed from the accumulated records.
#[derive(Debug, Clone, Serialize)]
pub struct Projection<'a> {
    /// Records considered before filtering
    pub total: usize,
    pub rows: Vec<&'a User>,
}

impl<'a> Projection<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn hidden(&self) -> usize {
        self.total - self.rows.len()
    }
}

/// Keep records whose lower-cased country contains `filter_text`.
///
/// `filter_text` is expected to be lower-cased already; an empty filter keeps everything.
pub fn filter_by_country<'a, I>(records: I, filter_text: &str) -> Vec<&'a User>
where
    I: IntoIterator<Item = &'a User>,
{
    if filter_text.is_empty() {
        return records.into_iter().collect();
    }

    records
        .into_iter()
        .filter(|user| user.country().to_lowercase().contains(filter_text))
        .collect()
}

/// Stable ascending sort on the attribute selected by `key`.
pub fn sort_by_key<'a, C>(rows: Vec<&'a User>, key: SortKey, collator: &C) -> Vec<&'a User>
where
    C: Collation + ?Sized,
{
    let Some(extract) = key.extract() else {
        return rows;
    };

    let mut sorted = rows;
    sorted.sort_by(|a, b| collator.compare(extract(a), extract(b)));
    sorted
}

/// Derive the display rows: filter by country, then sort.
pub fn project<'a, C>(
    records: &'a [User],
    filter_text: &str,
    sort_key: SortKey,
    collator: &C,
) -> Projection<'a>
where
    C: Collation + ?Sized,
{
    let filtered = filter_by_country(records, filter_text);
    let rows = sort_by_key(filtered, sort_key, collator);

    tracing::trace!(
        total = records.len(),
        shown = rows.len(),
        sort = %sort_key,
        "projected rows"
    );

    Projection {
        total: records.len(),
        rows,
    }
}

/// Convenience wrapper reading the controls from a `ViewState`.
pub fn project_view<'a, C>(records: &'a [User], view: &ViewState, collator: &C) -> Projection<'a>
where
    C: Collation + ?Sized,
{
    project(records, &view.filter_text, view.sort_key, collator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocaleCollator;
    use rollcall_testing::fixtures::{user, users_from_countries};

    fn collator() -> LocaleCollator {
        LocaleCollator::new("en").unwrap()
    }

    fn ids(rows: &[&User]) -> Vec<String> {
        rows.iter().map(|u| u.id().to_string()).collect()
    }

    fn countries(rows: &[&User]) -> Vec<String> {
        rows.iter().map(|u| u.country().to_string()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = users_from_countries(&["Spain", "France", "spain"]);
        let rows = filter_by_country(&records, "spa");
        assert_eq!(ids(&rows), vec!["u0", "u2"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let records = users_from_countries(&["Spain", "France", "Chile"]);
        let rows = filter_by_country(&records, "");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = users_from_countries(&["Spain", "France", "spain", "Denmark", "Panama"]);
        for text in ["", "a", "spa", "an", "zz"] {
            let once = filter_by_country(&records, text);
            let twice = filter_by_country(once.iter().copied(), text);
            assert_eq!(ids(&once), ids(&twice), "filter {:?}", text);
        }
    }

    #[test]
    fn test_no_sort_preserves_filtered_order() {
        let records = users_from_countries(&["Zambia", "Spain", "France", "spain"]);
        let projection = project(&records, "spa", SortKey::None, &collator());
        assert_eq!(ids(&projection.rows), vec!["u1", "u3"]);
        assert_eq!(projection.total, 4);
        assert_eq!(projection.hidden(), 2);
    }

    #[test]
    fn test_sort_by_country_uses_locale_collation() {
        let records = users_from_countries(&["Zambia", "Åland", "France"]);
        let projection = project(&records, "", SortKey::Country, &collator());
        assert_eq!(countries(&projection.rows), vec!["Åland", "France", "Zambia"]);
    }

    #[test]
    fn test_sort_by_names() {
        let records = vec![
            user("a", "Émile", "Zola", "France"),
            user("b", "Ana", "Ortiz", "Spain"),
            user("c", "Zoe", "Álvarez", "Chile"),
        ];
        let c = collator();

        let by_first = project(&records, "", SortKey::FirstName, &c);
        assert_eq!(ids(&by_first.rows), vec!["b", "a", "c"]);

        let by_last = project(&records, "", SortKey::LastName, &c);
        assert_eq!(ids(&by_last.rows), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = users_from_countries(&["Peru", "Chile", "Peru", "Chile", "Peru"]);
        let projection = project(&records, "", SortKey::Country, &collator());
        assert_eq!(ids(&projection.rows), vec!["u1", "u3", "u0", "u2", "u4"]);
    }

    #[test]
    fn test_sort_is_a_permutation_of_filtered_rows() {
        let records = users_from_countries(&[
            "Norway", "Brazil", "Iran", "Ireland", "Netherlands", "Türkiye", "India",
        ]);
        let c = collator();

        for key in [SortKey::Country, SortKey::FirstName, SortKey::LastName] {
            let filtered = filter_by_country(&records, "i");
            let sorted = project(&records, "i", key, &c);

            let mut expected = ids(&filtered);
            let mut actual = ids(&sorted.rows);
            expected.sort();
            actual.sort();
            assert_eq!(expected, actual, "key {}", key);

            let extract = key.extract().unwrap();
            for pair in sorted.rows.windows(2) {
                assert_ne!(
                    c.compare(extract(pair[0]), extract(pair[1])),
                    std::cmp::Ordering::Greater,
                    "key {}",
                    key
                );
            }
        }
    }

    #[test]
    fn test_sort_never_reintroduces_filtered_records() {
        let records = users_from_countries(&["Spain", "France", "Germany"]);
        let projection = project(&records, "spain", SortKey::Country, &collator());
        assert_eq!(countries(&projection.rows), vec!["Spain"]);
    }

    #[test]
    fn test_projection_does_not_mutate_input() {
        let records = users_from_countries(&["Zambia", "Åland", "France"]);
        let before = records.clone();
        let _ = project(&records, "", SortKey::Country, &collator());
        assert_eq!(records, before);
    }

    #[test]
    fn test_project_view_ignores_color_toggle() {
        let records = users_from_countries(&["Zambia", "Åland", "France"]);
        let c = collator();
        let mut view = ViewState::new();
        view.set_sort(SortKey::Country);

        let plain = ids(&project_view(&records, &view, &c).rows);
        view.toggle_color_rows();
        let colored = ids(&project_view(&records, &view, &c).rows);
        assert_eq!(plain, colored);
    }
}
