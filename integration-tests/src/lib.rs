use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        Self { dir }
    }

    pub fn with_file(self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        std::fs::write(self.path().join(name), contents.as_ref()).unwrap();
        self
    }

    /// Writes a square RGBA source with a transparent border around an opaque disc.
    pub fn with_transparent_source(self, name: &str, size: u32) -> Self {
        let radius = (size / 3) as i64;
        let center = (size / 2) as i64;
        let image = RgbaImage::from_fn(size, size, |x, y| {
            let dx = x as i64 - center;
            let dy = y as i64 - center;
            if dx * dx + dy * dy <= radius * radius {
                Rgba([240, 240, 240, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        DynamicImage::ImageRgba8(image)
            .save(self.path().join(name))
            .unwrap();
        self
    }

    pub fn with_opaque_source(self, name: &str, width: u32, height: u32) -> Self {
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        DynamicImage::ImageRgb8(image)
            .save(self.path().join(name))
            .unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_file(&self) -> PathBuf {
        self.path().join("storeart.toml")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    /// Names of all files in the output directory; empty if it doesn't exist.
    pub fn output_files(&self) -> BTreeSet<String> {
        match std::fs::read_dir(self.output_dir()) {
            Ok(entries) => entries
                .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => BTreeSet::new(),
        }
    }

    pub fn output_image(&self, name: &str) -> DynamicImage {
        image::open(self.output_dir().join(name)).unwrap()
    }

    pub fn output_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.output_dir().join(name)).unwrap()
    }
}

impl Default for Workdir {
    fn default() -> Self {
        Self::new()
    }
}
