//! Picker configuration.

use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds the track images.
pub const ASSETS_ENV: &str = "FLOEM_HSV_PICKER_ASSETS";

/// Settings shared by every selector built from the same config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerConfig {
    /// Directory containing `h.png`, `sv.png`, `crosshairs.png` and
    /// `position.png`. When unset, all track images are rasterized.
    pub assets_dir: Option<PathBuf>,
}

impl PickerConfig {
    /// Read the assets directory from [`ASSETS_ENV`], if set and non-empty.
    pub fn from_env() -> Self {
        let assets_dir = std::env::var_os(ASSETS_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { assets_dir }
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    pub fn asset_path(&self, file_name: &str) -> Option<PathBuf> {
        self.assets_dir.as_deref().map(|dir| dir.join(file_name))
    }

    pub fn assets_dir(&self) -> Option<&Path> {
        self.assets_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_assets() {
        let config = PickerConfig::default();
        assert!(config.assets_dir().is_none());
        assert!(config.asset_path("h.png").is_none());
    }

    #[test]
    fn test_asset_path_joins_base() {
        let config = PickerConfig::default().with_assets_dir("/srv/icons");
        assert_eq!(
            config.asset_path("sv.png"),
            Some(PathBuf::from("/srv/icons/sv.png"))
        );
    }

    #[test]
    fn test_from_env() {
        // The only test that touches this variable.
        std::env::set_var(ASSETS_ENV, "");
        assert_eq!(PickerConfig::from_env().assets_dir, None);

        std::env::set_var(ASSETS_ENV, "/opt/picker-assets");
        assert_eq!(
            PickerConfig::from_env().asset_path("h.png"),
            Some(PathBuf::from("/opt/picker-assets/h.png"))
        );

        std::env::remove_var(ASSETS_ENV);
        assert_eq!(PickerConfig::from_env(), PickerConfig::default());
    }
}
