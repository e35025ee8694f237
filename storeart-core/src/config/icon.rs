use crate::target::IconTarget;
use serde::{Deserialize, Serialize};

/// One entry of the icon table.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Icon {
    pub size: u32,
    /// Density bucket or other suffix appended to the generated file name, e.g. `mdpi`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    /// Replaces the generated file name entirely.
    #[serde(
        default,
        rename = "file-name",
        alias = "file_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_name: Option<String>,
}

impl Icon {
    pub fn new(size: u32) -> Self {
        Icon {
            size,
            qualifier: None,
            file_name: None,
        }
    }

    pub fn with_qualifier(size: u32, qualifier: &str) -> Self {
        Icon {
            qualifier: Some(qualifier.to_owned()),
            ..Icon::new(size)
        }
    }

    pub fn file_name(&self, product: &str) -> String {
        if let Some(file_name) = &self.file_name {
            return file_name.clone();
        }
        let size = self.size;
        match &self.qualifier {
            Some(qualifier) => format!("{product}_app_icon_{size}x{size}_{qualifier}.png"),
            None => format!("{product}_app_icon_{size}x{size}.png"),
        }
    }

    pub fn target(&self, product: &str) -> IconTarget {
        IconTarget::new(self.file_name(product), self.size)
    }
}

/// Store listing icon, Android launcher densities, and the high-res store icon.
pub fn defaults() -> Vec<Icon> {
    vec![
        Icon::new(512),
        Icon::with_qualifier(48, "mdpi"),
        Icon::with_qualifier(72, "hdpi"),
        Icon::with_qualifier(96, "xhdpi"),
        Icon::with_qualifier(144, "xxhdpi"),
        Icon::with_qualifier(192, "xxxhdpi"),
        Icon::new(1024),
    ]
}
