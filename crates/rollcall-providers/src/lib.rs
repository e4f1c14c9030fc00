pub mod error;
pub mod randomuser;
pub mod source;

pub use error::{FetchError, Result};
pub use randomuser::{
    ClientOptions, DEFAULT_ENDPOINT, DEFAULT_RESULTS_PER_PAGE, DEFAULT_SEED, LAST_PAGE_INDEX,
    RandomUserClient, normalize_page,
};
pub use source::PageSource;
