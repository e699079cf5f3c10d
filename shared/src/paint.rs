//! State → class set mapping and the surface it is painted on.
//!
//! The sidebar's visual state is carried entirely by CSS classes on four
//! elements. [`SidebarPaint`] is the pure description of which classes must be
//! present for a given [`SidebarState`]; a [`SidebarSurface`] is whatever owns
//! those elements (the browser DOM, or [`MemorySurface`] in tests).

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::state::SidebarState;

pub const COLLAPSED_CLASS: &str = "collapsed";
pub const OPEN_CLASS: &str = "open";
pub const WRAPPER_COLLAPSED_CLASS: &str = "sidebar-collapsed";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";

/// Elements whose classes carry sidebar state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SidebarPart {
    /// The `<nav>` panel itself.
    Sidebar,
    /// External page wrapper; may be absent.
    Wrapper,
    /// Hamburger control.
    Toggle,
    /// Backdrop behind the mobile drawer.
    Overlay,
}

/// Something the sidebar can read and write classes on.
///
/// Implementations skip parts that do not exist: `has_class` returns `false`
/// and `set_class` does nothing.
pub trait SidebarSurface {
    fn has_class(&self, part: SidebarPart, class: &str) -> bool;
    fn set_class(&mut self, part: SidebarPart, class: &str, enabled: bool);
}

/// A single class requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassToggle {
    pub part: SidebarPart,
    pub class: &'static str,
    pub enabled: bool,
}

impl ClassToggle {
    const fn new(part: SidebarPart, class: &'static str, enabled: bool) -> Self {
        Self {
            part,
            class,
            enabled,
        }
    }
}

/// Full class set required by a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarPaint {
    state: SidebarState,
}

impl SidebarPaint {
    pub fn for_state(state: SidebarState) -> Self {
        Self { state }
    }

    /// Classes driven by the persisted `collapsed` flag.
    pub fn collapse_toggles(&self) -> [ClassToggle; 3] {
        let collapsed = self.state.collapsed;
        [
            ClassToggle::new(SidebarPart::Sidebar, COLLAPSED_CLASS, collapsed),
            ClassToggle::new(SidebarPart::Wrapper, WRAPPER_COLLAPSED_CLASS, collapsed),
            ClassToggle::new(SidebarPart::Toggle, VISIBLE_CLASS, collapsed),
        ]
    }

    /// Classes driven by the transient `open` flag.
    pub fn drawer_toggles(&self) -> [ClassToggle; 3] {
        let open = self.state.open;
        [
            ClassToggle::new(SidebarPart::Sidebar, OPEN_CLASS, open),
            ClassToggle::new(SidebarPart::Overlay, ACTIVE_CLASS, open),
            ClassToggle::new(SidebarPart::Toggle, ACTIVE_CLASS, open),
        ]
    }

    pub fn toggles(&self) -> impl Iterator<Item = ClassToggle> {
        self.collapse_toggles()
            .into_iter()
            .chain(self.drawer_toggles())
    }

    /// Apply every class of the set in one pass.
    pub fn apply(&self, surface: &mut impl SidebarSurface) {
        apply_toggles(surface, self.toggles());
    }

    pub fn apply_collapse(&self, surface: &mut impl SidebarSurface) {
        apply_toggles(surface, self.collapse_toggles());
    }

    pub fn apply_drawer(&self, surface: &mut impl SidebarSurface) {
        apply_toggles(surface, self.drawer_toggles());
    }

    /// Whether the surface already shows this class set.
    pub fn is_painted_on(&self, surface: &impl SidebarSurface) -> bool {
        self.toggles()
            .all(|toggle| surface.has_class(toggle.part, toggle.class) == toggle.enabled)
    }
}

fn apply_toggles(surface: &mut impl SidebarSurface, toggles: impl IntoIterator<Item = ClassToggle>) {
    for toggle in toggles {
        surface.set_class(toggle.part, toggle.class, toggle.enabled);
    }
}

/// In-memory [`SidebarSurface`] for tests and headless tooling.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    classes: HashMap<SidebarPart, BTreeSet<String>>,
    missing: HashSet<SidebarPart>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose classes match what the given state renders.
    pub fn painted(state: SidebarState) -> Self {
        let mut surface = Self::new();
        SidebarPaint::for_state(state).apply(&mut surface);
        surface
    }

    /// Mark a part as not present in the document.
    pub fn without(mut self, part: SidebarPart) -> Self {
        self.classes.remove(&part);
        self.missing.insert(part);
        self
    }

    pub fn classes(&self, part: SidebarPart) -> Vec<&str> {
        self.classes
            .get(&part)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn exists(&self, part: SidebarPart) -> bool {
        !self.missing.contains(&part)
    }
}

impl SidebarSurface for MemorySurface {
    fn has_class(&self, part: SidebarPart, class: &str) -> bool {
        self.classes
            .get(&part)
            .is_some_and(|set| set.contains(class))
    }

    fn set_class(&mut self, part: SidebarPart, class: &str, enabled: bool) {
        if self.missing.contains(&part) {
            return;
        }
        let set = self.classes.entry(part).or_default();
        if enabled {
            set.insert(class.to_string());
        } else {
            set.remove(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_state_class_set() {
        let surface = MemorySurface::painted(SidebarState::with_collapsed(true));

        assert_eq!(surface.classes(SidebarPart::Sidebar), ["collapsed"]);
        assert_eq!(surface.classes(SidebarPart::Wrapper), ["sidebar-collapsed"]);
        assert_eq!(surface.classes(SidebarPart::Toggle), ["visible"]);
        assert!(surface.classes(SidebarPart::Overlay).is_empty());
    }

    #[test]
    fn test_open_state_class_set() {
        let state = SidebarState {
            collapsed: false,
            open: true,
        };
        let surface = MemorySurface::painted(state);

        assert_eq!(surface.classes(SidebarPart::Sidebar), ["open"]);
        assert_eq!(surface.classes(SidebarPart::Overlay), ["active"]);
        assert_eq!(surface.classes(SidebarPart::Toggle), ["active"]);
        assert!(surface.classes(SidebarPart::Wrapper).is_empty());
    }

    #[test]
    fn test_repaint_replaces_previous_classes() {
        let mut surface = MemorySurface::painted(SidebarState {
            collapsed: true,
            open: true,
        });
        let expanded = SidebarPaint::for_state(SidebarState::default());
        expanded.apply(&mut surface);

        assert!(expanded.is_painted_on(&surface));
        for part in [
            SidebarPart::Sidebar,
            SidebarPart::Wrapper,
            SidebarPart::Toggle,
            SidebarPart::Overlay,
        ] {
            assert!(surface.classes(part).is_empty(), "{part:?} kept classes");
        }
    }

    #[test]
    fn test_partial_paint_leaves_other_classes() {
        let mut surface = MemorySurface::painted(SidebarState {
            collapsed: false,
            open: true,
        });
        SidebarPaint::for_state(SidebarState::with_collapsed(true)).apply_collapse(&mut surface);

        assert!(surface.has_class(SidebarPart::Sidebar, "collapsed"));
        assert!(surface.has_class(SidebarPart::Sidebar, "open"));
        assert!(surface.has_class(SidebarPart::Overlay, "active"));
    }

    #[test]
    fn test_missing_part_is_skipped() {
        let mut surface = MemorySurface::new().without(SidebarPart::Wrapper);
        SidebarPaint::for_state(SidebarState::with_collapsed(true)).apply(&mut surface);

        assert!(!surface.exists(SidebarPart::Wrapper));
        assert!(!surface.has_class(SidebarPart::Wrapper, "sidebar-collapsed"));
        assert!(surface.has_class(SidebarPart::Sidebar, "collapsed"));
    }
}
