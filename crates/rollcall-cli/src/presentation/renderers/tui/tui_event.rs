use rollcall_providers::FetchError;
use rollcall_types::PageResult;

/// Messages delivered to the browse loop from background work.
#[derive(Debug)]
pub enum TuiEvent {
    PageLoaded(Result<PageResult, FetchError>),
}
