// ===== VIEWPORT & STATE TYPES =====

/// Layout regime derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// Widths strictly above the breakpoint are desktop; the breakpoint itself is mobile.
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width > breakpoint {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }
}

/// The two flags the sidebar holds in memory.
///
/// `collapsed` only has a visual effect on desktop and is persisted; `open`
/// only has a visual effect on mobile and never leaves the page. They are
/// independent because they govern mutually exclusive regimes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub open: bool,
}

impl SidebarState {
    pub fn with_collapsed(collapsed: bool) -> Self {
        Self {
            collapsed,
            open: false,
        }
    }

    pub fn mode(&self, viewport: ViewportClass) -> SidebarMode {
        match (viewport, self.collapsed, self.open) {
            (ViewportClass::Desktop, true, _) => SidebarMode::DesktopCollapsed,
            (ViewportClass::Desktop, false, _) => SidebarMode::DesktopExpanded,
            (ViewportClass::Mobile, _, true) => SidebarMode::MobileOpen,
            (ViewportClass::Mobile, _, false) => SidebarMode::MobileClosed,
        }
    }

    /// Whether a click on the hamburger control should expand the docked rail
    /// rather than toggle the mobile drawer.
    pub fn toggle_expands(&self, viewport: ViewportClass) -> bool {
        viewport == ViewportClass::Desktop && self.collapsed
    }
}

/// What the user currently sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMode {
    DesktopExpanded,
    DesktopCollapsed,
    MobileClosed,
    MobileOpen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(ViewportClass::from_width(1025.0, 1024.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1024.0, 1024.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(375.0, 1024.0), ViewportClass::Mobile);
    }

    #[test]
    fn test_mode_ignores_flag_of_other_regime() {
        let state = SidebarState {
            collapsed: true,
            open: true,
        };
        assert_eq!(state.mode(ViewportClass::Desktop), SidebarMode::DesktopCollapsed);
        assert_eq!(state.mode(ViewportClass::Mobile), SidebarMode::MobileOpen);

        let state = SidebarState::default();
        assert_eq!(state.mode(ViewportClass::Desktop), SidebarMode::DesktopExpanded);
        assert_eq!(state.mode(ViewportClass::Mobile), SidebarMode::MobileClosed);
    }

    #[test]
    fn test_toggle_dispatch_key() {
        let collapsed = SidebarState::with_collapsed(true);
        let expanded = SidebarState::with_collapsed(false);

        assert!(collapsed.toggle_expands(ViewportClass::Desktop));
        assert!(!collapsed.toggle_expands(ViewportClass::Mobile));
        assert!(!expanded.toggle_expands(ViewportClass::Desktop));
        assert!(!expanded.toggle_expands(ViewportClass::Mobile));
    }
}
