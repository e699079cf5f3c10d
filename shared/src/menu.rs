use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub href: String,
    pub label: String,
}

impl MenuEntry {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Final segment of a location path; `home_href` when the path ends in `/` or is empty.
pub fn current_page<'a>(path: &'a str, home_href: &'a str) -> &'a str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => home_href,
    }
}

/// Index of the entry matching the current page exactly, if any.
pub fn active_entry(entries: &[MenuEntry], path: &str, home_href: &str) -> Option<usize> {
    let page = current_page(path, home_href);
    entries.iter().position(|entry| entry.href == page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SidebarConfig;

    fn label_of(path: &str) -> Option<String> {
        let config = SidebarConfig::default();
        active_entry(&config.menu, path, &config.home_href).map(|index| config.menu[index].label.clone())
    }

    #[test]
    fn test_current_page_segments() {
        assert_eq!(current_page("/portfolio.html", "index.html"), "portfolio.html");
        assert_eq!(current_page("/site/contact.html", "index.html"), "contact.html");
        assert_eq!(current_page("/", "index.html"), "index.html");
        assert_eq!(current_page("", "index.html"), "index.html");
        assert_eq!(current_page("/projects/", "index.html"), "index.html");
    }

    #[test]
    fn test_known_page_is_active() {
        assert_eq!(label_of("/portfolio.html").as_deref(), Some("Portfolio"));
        assert_eq!(label_of("/myskills.html").as_deref(), Some("Skills"));
    }

    #[test]
    fn test_unknown_page_has_no_active_entry() {
        assert_eq!(label_of("/about.html"), None);
        // Matching is exact, not by prefix or case.
        assert_eq!(label_of("/Portfolio.html"), None);
        assert_eq!(label_of("/portfolio.html.bak"), None);
    }

    #[test]
    fn test_empty_path_selects_home() {
        assert_eq!(label_of("").as_deref(), Some("Home"));
        assert_eq!(label_of("/").as_deref(), Some("Home"));
    }
}
