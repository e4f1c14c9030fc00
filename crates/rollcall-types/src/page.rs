use serde::{Deserialize, Serialize};
use std::fmt;

use crate::User;

/// Page number understood by the data source. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(u32);

pub const FIRST_PAGE: PageToken = PageToken(1);

impl PageToken {
    pub fn new(page: u32) -> Self {
        Self(page)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageToken {
    fn default() -> Self {
        FIRST_PAGE
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One normalized page of records.
///
/// `next_page_token == None` marks the end of the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub records: Vec<User>,
    pub next_page_token: Option<PageToken>,
}

impl PageResult {
    pub fn new(records: Vec<User>, next_page_token: Option<PageToken>) -> Self {
        Self {
            records,
            next_page_token,
        }
    }

    pub fn last(records: Vec<User>) -> Self {
        Self::new(records, None)
    }

    pub fn is_last(&self) -> bool {
        self.next_page_token.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token_is_first_page() {
        assert_eq!(PageToken::default(), FIRST_PAGE);
        assert_eq!(FIRST_PAGE.get(), 1);
    }

    #[test]
    fn test_next_is_monotonic() {
        let token = PageToken::new(3);
        assert!(token.next() > token);
        assert_eq!(token.next().get(), 4);
    }

    #[test]
    fn test_last_page_has_no_token() {
        assert!(PageResult::last(Vec::new()).is_last());
        assert!(!PageResult::new(Vec::new(), Some(PageToken::new(2))).is_last());
    }
}
