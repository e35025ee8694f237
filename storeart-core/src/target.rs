//! Declarative descriptions of the artifacts to generate.

/// A single output file with fixed pixel dimensions.
pub trait Target {
    fn file_name(&self) -> &str;

    /// Width and height of the generated image.
    fn dimensions(&self) -> (u32, u32);
}

/// A square icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: String,
    pub size: u32,
}

impl IconTarget {
    pub fn new(file_name: impl Into<String>, size: u32) -> Self {
        IconTarget {
            file_name: file_name.into(),
            size,
        }
    }
}

impl Target for IconTarget {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.size, self.size)
    }
}

/// A solid canvas with the icon centered on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotTarget {
    pub file_name: String,
    /// Device class this screenshot belongs to; only used for reporting.
    pub device: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub icon_size: u32,
}

impl ScreenshotTarget {
    /// Top-left position of the icon on the canvas.
    pub fn icon_offset(&self) -> (i64, i64) {
        (
            center_offset(self.canvas_width, self.icon_size),
            center_offset(self.canvas_height, self.icon_size),
        )
    }
}

impl Target for ScreenshotTarget {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }
}

/// Offset that centers `inner` within `outer`, rounded towards negative infinity.
///
/// Negative when `inner` is larger than `outer`.
pub fn center_offset(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}
