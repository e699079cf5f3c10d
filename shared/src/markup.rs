use std::fmt::Write as _;

use crate::config::{ContactKind, SidebarConfig};
use crate::paint::{ACTIVE_CLASS, COLLAPSED_CLASS, VISIBLE_CLASS};
use crate::state::SidebarState;

// Element ids the stylesheet and the browser binding rely on.
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const OVERLAY_ID: &str = "sidebarOverlay";
pub const SIDEBAR_ID: &str = "sidebar-nav";
pub const COLLAPSE_BUTTON_ID: &str = "sidebarCollapseBtn";
pub const MENU_ITEM_CLASS: &str = "retro-menu-item";

const CHEVRON_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M15 18l-6-6 6-6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const EMAIL_ICON: &str = r#"<svg class="email-icon" width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M20 4H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 4l-8 5-8-5V6l8 5 8-5v2z" fill="currentColor"/></svg>"#;

const GITHUB_ICON: &str = r#"<svg class="github-icon" width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 2C6.477 2 2 6.477 2 12c0 4.42 2.865 8.17 6.839 9.49.5.092.682-.217.682-.482 0-.237-.008-.866-.013-1.7-2.782.603-3.369-1.34-3.369-1.34-.454-1.156-1.11-1.463-1.11-1.463-.908-.62.069-.608.069-.608 1.003.07 1.531 1.03 1.531 1.03.892 1.529 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.11-4.555-4.943 0-1.091.39-1.984 1.029-2.683-.103-.253-.446-1.27.098-2.647 0 0 .84-.269 2.75 1.025A9.578 9.578 0 0112 6.836c.85.004 1.705.114 2.504.336 1.909-1.294 2.747-1.025 2.747-1.025.546 1.377.203 2.394.1 2.647.64.699 1.028 1.592 1.028 2.683 0 3.842-2.339 4.687-4.566 4.935.359.309.678.919.678 1.852 0 1.336-.012 2.415-.012 2.743 0 .267.18.578.688.48C19.138 20.167 22 16.418 22 12c0-5.523-4.477-10-10-10z" fill="currentColor"/></svg>"#;

/// Rendered sidebar HTML plus the state baked into it.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarMarkup {
    html: String,
    state: SidebarState,
}

impl SidebarMarkup {
    /// Render the sidebar for `state`, highlighting the menu entry at `active`.
    ///
    /// The collapse classes are written straight into the markup so the first
    /// paint already shows the stored layout. Drawer classes are never rendered;
    /// the drawer always starts closed.
    pub fn render(config: &SidebarConfig, state: SidebarState, active: Option<usize>) -> Self {
        let state = SidebarState::with_collapsed(state.collapsed);
        let collapsed = state.collapsed;
        let mut html = String::with_capacity(4096);

        let _ = write!(
            html,
            r#"<div class="menu-toggle{}" id="{MENU_TOGGLE_ID}"><span></span><span></span><span></span></div>"#,
            class_suffix(collapsed, VISIBLE_CLASS),
        );
        let _ = write!(html, r#"<div class="sidebar-overlay" id="{OVERLAY_ID}"></div>"#);
        let _ = write!(
            html,
            r#"<nav id="{SIDEBAR_ID}" class="retro-sidebar{}">"#,
            class_suffix(collapsed, COLLAPSED_CLASS),
        );

        let _ = write!(
            html,
            r#"<div class="sidebar-header"><div class="retro-screen"><h1 class="sidebar-logo">{}</h1><div class="retro-divider"></div><h2 class="sidebar-slogan">{}</h2></div><button class="sidebar-collapse-btn" id="{COLLAPSE_BUTTON_ID}" title="Collapse Sidebar">{CHEVRON_ICON}</button></div>"#,
            escape_html(&config.branding.logo),
            escape_html(&config.branding.slogan),
        );

        html.push_str(r#"<ul class="retro-menu">"#);
        for (index, entry) in config.menu.iter().enumerate() {
            let _ = write!(
                html,
                r#"<li><a class="{MENU_ITEM_CLASS}{}" href="{}"><span class="menu-text">{}</span></a></li>"#,
                class_suffix(active == Some(index), ACTIVE_CLASS),
                escape_html(&entry.href),
                escape_html(&entry.label),
            );
        }
        html.push_str("</ul>");

        html.push_str(r#"<div class="sidebar-footer"><div class="sidebar-contact">"#);
        for contact in &config.contacts {
            let target = if contact.new_tab {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            let icon = match contact.kind {
                ContactKind::Email => EMAIL_ICON,
                ContactKind::GitHub => GITHUB_ICON,
            };
            let _ = write!(
                html,
                r#"<a href="{}"{target} class="sidebar-link {}">{icon}<span>{}</span></a>"#,
                escape_html(&contact.href),
                contact.kind.css_class(),
                escape_html(&contact.label),
            );
        }
        html.push_str("</div></div></nav>");

        Self { html, state }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// State whose collapse classes are present in the markup.
    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

fn class_suffix(enabled: bool, class: &str) -> String {
    if enabled {
        format!(" {class}")
    } else {
        String::new()
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
