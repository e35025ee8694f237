use crate::target::{IconTarget, ScreenshotTarget};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

pub mod icon;
pub mod screenshot;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix of every generated file name.
    pub product: String,
    pub source: PathBuf,
    #[serde(rename = "output-dir", alias = "output_dir")]
    pub output_dir: PathBuf,
    pub parallel: bool,
    pub icons: Vec<icon::Icon>,
    pub screenshots: screenshot::Screenshots,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            product: "indira".to_owned(),
            source: PathBuf::from("assets/icons/app_icon.png"),
            output_dir: PathBuf::from("store-assets"),
            parallel: false,
            icons: icon::defaults(),
            screenshots: Default::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(String, #[source] eyre::Report),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] eyre::Report),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("the product name must not be empty")]
    EmptyProduct,
    #[error("icon '{0}' has a size of 0")]
    ZeroIconSize(String),
    #[error("device '{0}' has a zero width, height or icon size")]
    ZeroDeviceDimension(String),
    #[error("'{0}' is not a plain file name")]
    InvalidFileName(String),
    #[error("more than one target writes '{0}'")]
    DuplicateFileName(String),
}

impl Config {
    pub fn parse(s: &str) -> Result<Config, ConfigLoadError> {
        toml::from_str(s).map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))
    }

    pub fn parse_file(p: &Path) -> Result<Config, ConfigLoadError> {
        let config_string =
            std::fs::read_to_string(p).map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))
    }

    pub fn icon_source(&self) -> &Path {
        &self.source
    }

    pub fn screenshot_source(&self) -> &Path {
        self.screenshots.source.as_deref().unwrap_or(&self.source)
    }

    /// Icon targets in declared order.
    pub fn icon_targets(&self) -> Vec<IconTarget> {
        self.icons
            .iter()
            .map(|icon| icon.target(&self.product))
            .collect()
    }

    /// Screenshot targets in declared device order.
    pub fn screenshot_targets(&self) -> Vec<ScreenshotTarget> {
        self.screenshots
            .devices
            .iter()
            .flat_map(|device| device.targets(&self.product))
            .collect()
    }

    pub fn device(&self, name: &str) -> Option<&screenshot::Device> {
        self.screenshots.devices.iter().find(|d| d.name == name)
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.product.trim().is_empty() {
            return Err(InvalidConfig::EmptyProduct);
        }
        for icon in &self.icons {
            if icon.size == 0 {
                return Err(InvalidConfig::ZeroIconSize(icon.file_name(&self.product)));
            }
        }
        for device in &self.screenshots.devices {
            if device.width == 0 || device.height == 0 || device.icon_size == 0 {
                return Err(InvalidConfig::ZeroDeviceDimension(device.name.clone()));
            }
        }

        let icon_names = self.icon_targets().into_iter().map(|t| t.file_name);
        let screenshot_names = self
            .screenshot_targets()
            .into_iter()
            .map(|t| t.file_name);
        let mut seen = HashSet::new();
        for file_name in icon_names.chain(screenshot_names) {
            if !is_plain_file_name(&file_name) {
                return Err(InvalidConfig::InvalidFileName(file_name));
            }
            if !seen.insert(file_name.clone()) {
                return Err(InvalidConfig::DuplicateFileName(file_name));
            }
        }
        Ok(())
    }
}

fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    ) && !file_name.contains(|c: char| c == '/' || c == '\\')
}
