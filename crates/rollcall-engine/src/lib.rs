// Engine module - pure derivations over accumulated records
// This layer sits between the accumulated record set (runtime) and CLI presentation

pub mod collation;
pub mod error;
pub mod projection;

pub use collation::{Collation, LocaleCollator, DEFAULT_LOCALE};
pub use error::{Error, Result};
pub use projection::{Projection, filter_by_country, project, project_view, sort_by_key};
