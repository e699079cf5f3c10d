use shared::SidebarConfig;

const SIDEBAR_TOML: &str = include_str!("../sidebar.toml");

/// Load the embedded sidebar configuration, falling back to defaults.
pub fn load_sidebar_config() -> SidebarConfig {
    match SidebarConfig::from_toml_str(SIDEBAR_TOML) {
        Ok(config) => config,
        Err(error) => {
            zoon::eprintln!("⚠️ Invalid sidebar.toml, using built-in defaults: {}", error);
            SidebarConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SidebarConfig::from_toml_str(SIDEBAR_TOML).unwrap();
        assert_eq!(config, SidebarConfig::default());
    }
}
