use rollcall_types::{PageResult, PageToken};
use std::future::Future;
use std::sync::Arc;

use crate::Result;

/// Anything that can hand out pages of user records.
pub trait PageSource {
    /// Fetch the page addressed by `token`. No caching happens at this layer.
    fn fetch_page(&self, token: PageToken) -> impl Future<Output = Result<PageResult>> + Send;
}

impl<S> PageSource for Arc<S>
where
    S: PageSource + Send + Sync,
{
    fn fetch_page(&self, token: PageToken) -> impl Future<Output = Result<PageResult>> + Send {
        self.as_ref().fetch_page(token)
    }
}
