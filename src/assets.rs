//! Embedded assets for Quiz-GUI
//!
//! Uses rust-embed to bundle images at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "images/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Images used by the screens
pub enum ImageName {
    /// Full-bleed welcome background
    WelcomeBackground,
}

impl ImageName {
    /// Get the asset path for this image
    pub fn path(self) -> &'static str {
        match self {
            ImageName::WelcomeBackground => "images/welcome-background.svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_background_is_embedded() {
        let path = ImageName::WelcomeBackground.path();
        assert!(Assets.load(path).expect("load").is_some());
    }

    #[test]
    fn missing_asset_is_an_error_not_a_panic() {
        assert!(Assets.load("images/does-not-exist.svg").is_err());
        assert!(Assets.load("").expect("empty path").is_none());
    }
}
