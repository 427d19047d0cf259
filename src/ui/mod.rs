//! Terminal UI

pub mod app;

pub use app::{App, InputAction};
