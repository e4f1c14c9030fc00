//! Testing infrastructure for rollcall tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `fixtures`: Sample user records and pages
//! - `source`: Scripted in-memory `PageSource`
//! - `server`: Fake randomuser.me HTTP server on a background thread
//! - `TestWorld`: Isolated data directory and CLI invocation
//! - `assertions`: Checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod source;
pub mod world;

pub use server::FakeRandomUser;
pub use source::ScriptedSource;
pub use world::TestWorld;
