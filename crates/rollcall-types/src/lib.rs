pub mod page;
pub mod user;
pub mod view;

pub use page::{FIRST_PAGE, PageResult, PageToken};
pub use user::{Location, Login, Name, Picture, User};
pub use view::{SortKey, ViewState};
