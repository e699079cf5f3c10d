//! Browser bindings for the shared sidebar
//!
//! Adapts `window.localStorage` and the DOM to the storage and surface traits
//! from `shared`, and exposes the few window queries the sidebar needs.

pub mod web;

pub use web::{BrowserStorage, DomSurface, current_path, viewport_width};
