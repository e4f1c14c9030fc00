use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;

use crate::{Error, Result};

pub const DEFAULT_LOCALE: &str = "en";

/// String ordering used when sorting rows.
pub trait Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Locale-aware collation backed by ICU4X compiled data.
///
/// Orders accented and non-Latin text the way a reader of `locale` expects,
/// so "Åland" sorts next to other A-names instead of after "Zambia".
pub struct LocaleCollator {
    locale: String,
    collator: Collator,
}

impl LocaleCollator {
    pub fn new(locale: &str) -> Result<Self> {
        let parsed: Locale = locale
            .parse()
            .map_err(|e| Error::InvalidLocale(format!("'{}': {}", locale, e)))?;

        let data_locale = (&parsed).into();
        let collator = Collator::try_new(&data_locale, CollatorOptions::new())
            .map_err(|e| Error::Collator(format!("'{}': {}", locale, e)))?;

        tracing::debug!(locale = %parsed, "collator ready");

        Ok(Self {
            locale: parsed.to_string(),
            collator,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Collation for LocaleCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl std::fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleCollator")
            .field("locale", &self.locale)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LocaleCollator {
        LocaleCollator::new(DEFAULT_LOCALE).unwrap()
    }

    #[test]
    fn test_accented_letter_sorts_with_base_letter() {
        let collator = english();
        assert_eq!(collator.compare("Åland", "Zambia"), Ordering::Less);
        assert_eq!(collator.compare("Åland", "France"), Ordering::Less);
    }

    #[test]
    fn test_case_is_secondary_to_letters() {
        let collator = english();
        assert_eq!(collator.compare("spain", "Sweden"), Ordering::Less);
        assert_eq!(collator.compare("Brazil", "canada"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        let collator = english();
        assert_eq!(collator.compare("Norway", "Norway"), Ordering::Equal);
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let err = LocaleCollator::new("not a locale!").unwrap_err();
        assert!(matches!(err, Error::InvalidLocale(_)));
    }

    #[test]
    fn test_locale_is_normalized() {
        let collator = LocaleCollator::new("es").unwrap();
        assert_eq!(collator.locale(), "es");
    }
}
