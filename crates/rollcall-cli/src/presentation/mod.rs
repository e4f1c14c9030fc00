//! # Presentation Layer
//!
//! MVVM split used by every command:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! The interactive `browse` table does not go through the console renderer.
//! Its `AppState` owns the roster and the view controls, and components draw
//! the projection on every frame.
//!
//! ## Rules
//!
//! * ViewModels carry raw data (counts, ids, enum keys), never formatted text.
//! * `--format json` ignores `ViewMode` and always dumps the full ViewModel.
//! * `ViewMode` only controls text density:
//!   * **Minimal:** ids only, for pipes
//!   * **Compact:** name and country
//!   * **Standard:** adds ids and the summary line (default)
//!   * **Verbose:** adds thumbnail URLs

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsoleRenderer;
pub use view_models::{CommandResultViewModel, CreateView, ViewMode};
