pub mod text;

pub use text::{pad, truncate};
