//! The sidebar navigation component.
//!
//! [`SidebarNav`] owns the sidebar's in-memory state, the persisted collapse
//! preference and the surface the state is painted on. Clicks arrive through
//! the `on_*` methods; lifecycle hooks call [`SidebarNav::reconcile`], which is
//! idempotent and safe to call at any time.

use crate::config::SidebarConfig;
use crate::markup::SidebarMarkup;
use crate::menu::active_entry;
use crate::paint::{COLLAPSED_CLASS, SidebarPaint, SidebarPart, SidebarSurface, WRAPPER_COLLAPSED_CLASS};
use crate::state::{SidebarMode, SidebarState, ViewportClass};
use crate::storage::{CollapsePreference, KeyValueStore};

/// Outcome of a reconciliation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// Mobile viewports hold nothing persisted, so there is nothing to check.
    SkippedMobile,
    AlreadyConsistent,
    /// The surface disagreed with the stored preference and was repainted.
    Corrected { collapsed: bool },
}

pub struct SidebarNav<S, D> {
    config: SidebarConfig,
    preference: CollapsePreference<S>,
    surface: D,
    state: SidebarState,
    active: Option<usize>,
}

impl<S, D> SidebarNav<S, D>
where
    S: KeyValueStore,
    D: SidebarSurface,
{
    /// Render and attach the sidebar.
    ///
    /// The stored preference is read before rendering so the markup handed to
    /// `attach` already carries the collapse classes. `attach` inserts the
    /// markup into the document and returns the surface over it. When the
    /// sidebar starts collapsed the page wrapper is marked as well.
    pub fn mount<F>(config: SidebarConfig, store: S, current_path: &str, attach: F) -> Self
    where
        F: FnOnce(&SidebarMarkup) -> D,
    {
        let preference = CollapsePreference::new(store, config.storage_key.clone());
        let state = SidebarState::with_collapsed(preference.load());
        let active = active_entry(&config.menu, current_path, &config.home_href);

        let markup = SidebarMarkup::render(&config, state, active);
        let mut surface = attach(&markup);

        if state.collapsed {
            surface.set_class(SidebarPart::Wrapper, WRAPPER_COLLAPSED_CLASS, true);
        }

        log::debug!(
            "Sidebar mounted: collapsed={}, active={:?}",
            state.collapsed,
            active.map(|index| config.menu[index].href.as_str())
        );

        Self {
            config,
            preference,
            surface,
            state,
            active,
        }
    }

    pub fn viewport_for(&self, width: f64) -> ViewportClass {
        ViewportClass::from_width(width, self.config.breakpoint)
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn mode(&self, viewport: ViewportClass) -> SidebarMode {
        self.state.mode(viewport)
    }

    pub fn active_entry(&self) -> Option<usize> {
        self.active
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn store(&self) -> &S {
        self.preference.store()
    }

    /// Dock the sidebar to the minimized rail and remember it.
    pub fn collapse(&mut self) {
        self.state.collapsed = true;
        SidebarPaint::for_state(self.state).apply_collapse(&mut self.surface);
        self.preference.save(true);
        log::debug!("Sidebar collapsed");
    }

    /// Restore the full sidebar and remember it.
    ///
    /// The drawer is closed as well: besides the toggle's `active` marker, the
    /// sidebar's `open` class and the overlay's `active` class are removed, so
    /// the whole class set matches an expanded, closed sidebar.
    pub fn expand(&mut self) {
        self.state = SidebarState::with_collapsed(false);
        SidebarPaint::for_state(self.state).apply(&mut self.surface);
        self.preference.save(false);
        log::debug!("Sidebar expanded");
    }

    /// Flip the mobile drawer. Never persisted.
    pub fn toggle_open(&mut self) {
        self.state.open = !self.state.open;
        SidebarPaint::for_state(self.state).apply_drawer(&mut self.surface);
        log::debug!("Sidebar drawer open={}", self.state.open);
    }

    /// Close the mobile drawer. Never persisted.
    pub fn close_open(&mut self) {
        self.state.open = false;
        SidebarPaint::for_state(self.state).apply_drawer(&mut self.surface);
    }

    pub fn on_collapse_click(&mut self) {
        self.collapse();
    }

    /// The hamburger control expands a collapsed desktop sidebar and toggles
    /// the drawer in every other configuration.
    pub fn on_toggle_click(&mut self, viewport: ViewportClass) {
        if self.state.toggle_expands(viewport) {
            self.expand();
        } else {
            self.toggle_open();
        }
    }

    pub fn on_overlay_click(&mut self) {
        self.close_open();
    }

    pub fn on_menu_link_click(&mut self, viewport: ViewportClass) {
        if viewport == ViewportClass::Mobile {
            self.close_open();
        }
    }

    /// Re-apply the stored preference if the surface drifted from it.
    ///
    /// Reads storage, never writes it. Only the collapse classes are touched.
    pub fn reconcile(&mut self, viewport: ViewportClass) -> Reconciliation {
        if viewport == ViewportClass::Mobile {
            return Reconciliation::SkippedMobile;
        }

        let stored = self.preference.load();
        let painted = self.surface.has_class(SidebarPart::Sidebar, COLLAPSED_CLASS);
        self.state.collapsed = stored;

        if stored == painted {
            return Reconciliation::AlreadyConsistent;
        }

        SidebarPaint::for_state(self.state).apply_collapse(&mut self.surface);
        log::info!("Sidebar reconciled with stored preference: collapsed={stored}");
        Reconciliation::Corrected { collapsed: stored }
    }
}
