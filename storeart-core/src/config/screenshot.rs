use crate::{color::Color, target::ScreenshotTarget};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshots {
    /// Image centered on the screenshots; falls back to the top-level source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub background: Color,
    pub devices: Vec<Device>,
}

impl Default for Screenshots {
    fn default() -> Self {
        Screenshots {
            source: None,
            background: Color::rgb(168, 77, 54),
            devices: default_devices(),
        }
    }
}

/// A device class with its canvas size and the number of screenshots to create for it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "icon-size", alias = "icon_size")]
    pub icon_size: u32,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    2
}

impl Device {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// File name of the `index`th screenshot, counting from 1.
    pub fn file_name(&self, product: &str, index: u32) -> String {
        format!("{}_{}_screenshot_{}.png", product, self.name, index)
    }

    pub fn targets<'a>(&'a self, product: &'a str) -> impl Iterator<Item = ScreenshotTarget> + 'a {
        (1..=self.count).map(move |index| ScreenshotTarget {
            file_name: self.file_name(product, index),
            device: self.name.clone(),
            canvas_width: self.width,
            canvas_height: self.height,
            icon_size: self.icon_size,
        })
    }
}

fn device(name: &str, label: &str, width: u32, height: u32, icon_size: u32) -> Device {
    Device {
        name: name.to_owned(),
        label: Some(label.to_owned()),
        width,
        height,
        icon_size,
        count: default_count(),
    }
}

/// Portrait phone and tablet sizes accepted by the Play Console.
pub fn default_devices() -> Vec<Device> {
    vec![
        device("phone", "Phone", 1080, 1920, 800),
        device("7inch_tablet", "7-inch tablet", 1200, 1920, 900),
        device("10inch_tablet", "10-inch tablet", 1536, 2048, 1200),
    ]
}
