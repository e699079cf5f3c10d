//! Sidebar navigation for the portfolio site.
//!
//! Everything here is independent of the browser: the frontend crate supplies
//! `localStorage` as a [`KeyValueStore`] and the DOM as a [`SidebarSurface`].

pub mod config;
pub mod markup;
pub mod menu;
pub mod paint;
pub mod sidebar;
pub mod state;
pub mod storage;

pub use config::{Branding, ConfigError, ContactKind, ContactLink, SidebarConfig};
pub use markup::SidebarMarkup;
pub use menu::{MenuEntry, active_entry, current_page};
pub use paint::{ClassToggle, MemorySurface, SidebarPaint, SidebarPart, SidebarSurface};
pub use sidebar::{Reconciliation, SidebarNav};
pub use state::{SidebarMode, SidebarState, ViewportClass};
pub use storage::{CollapsePreference, KeyValueStore, MemoryStore, StorageError};
