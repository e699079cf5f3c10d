use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::menu::MenuEntry;

// ===== CONFIG TYPES =====

/// Sidebar configuration, normally loaded from `sidebar.toml`.
///
/// Every section has a default that reproduces the published portfolio, so a
/// partial TOML file only needs to name what it overrides.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SidebarConfig {
    /// Viewports strictly wider than this many logical pixels use the desktop layout.
    pub breakpoint: f64,
    pub storage_key: String,
    /// Id of the page wrapper that receives the `sidebar-collapsed` marker.
    pub wrapper_id: String,
    /// Entry selected when the current path has no final segment.
    pub home_href: String,
    pub branding: Branding,
    pub menu: Vec<MenuEntry>,
    pub contacts: Vec<ContactLink>,
}

impl SidebarConfig {
    pub const DEFAULT_BREAKPOINT: f64 = 1024.0;
    pub const DEFAULT_STORAGE_KEY: &'static str = "sidebarCollapsed";
    pub const DEFAULT_WRAPPER_ID: &'static str = "wrapper";

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SidebarConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoint.is_finite() || self.breakpoint <= 0.0 {
            return Err(ConfigError::InvalidBreakpoint(self.breakpoint));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if self.menu.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }

        let mut seen = HashSet::new();
        for entry in &self.menu {
            if !seen.insert(entry.href.as_str()) {
                return Err(ConfigError::DuplicateHref(entry.href.clone()));
            }
        }

        if !seen.contains(self.home_href.as_str()) {
            return Err(ConfigError::MissingHomeEntry(self.home_href.clone()));
        }
        Ok(())
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            breakpoint: Self::DEFAULT_BREAKPOINT,
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            wrapper_id: Self::DEFAULT_WRAPPER_ID.to_string(),
            home_href: "index.html".to_string(),
            branding: Branding::default(),
            menu: vec![
                MenuEntry::new("index.html", "Home"),
                MenuEntry::new("portfolio.html", "Portfolio"),
                MenuEntry::new("myskills.html", "Skills"),
                MenuEntry::new("contact.html", "Contact"),
            ],
            contacts: vec![
                ContactLink {
                    href: "mailto:panoskikas@protonmail.com".to_string(),
                    label: "panoskikas@protonmail.com".to_string(),
                    kind: ContactKind::Email,
                    new_tab: false,
                },
                ContactLink {
                    href: "https://github.com/PanosKikas".to_string(),
                    label: "GitHub".to_string(),
                    kind: ContactKind::GitHub,
                    new_tab: true,
                },
            ],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Branding {
    pub logo: String,
    pub slogan: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            logo: "PANOS KIKAS".to_string(),
            slogan: "GAME DEVELOPER".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContactLink {
    pub href: String,
    pub label: String,
    pub kind: ContactKind,
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    GitHub,
}

impl ContactKind {
    /// Modifier class on the footer link.
    pub fn css_class(self) -> &'static str {
        match self {
            ContactKind::Email => "sidebar-email",
            ContactKind::GitHub => "sidebar-github",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse sidebar config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize sidebar config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("breakpoint must be a positive number of pixels, got {0}")]
    InvalidBreakpoint(f64),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("menu must contain at least one entry")]
    EmptyMenu,
    #[error("menu contains '{0}' more than once")]
    DuplicateHref(String),
    #[error("home entry '{0}' is not part of the menu")]
    MissingHomeEntry(String),
}
