use crate::Error;
use image::{ColorType, DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};

/// The decoded input image every artifact is derived from.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceImage {
    /// Reads and decodes the image at `path`, guessing the format from its contents.
    pub fn open(path: impl AsRef<Path>) -> Result<SourceImage, Error> {
        let path = path.as_ref();
        let image = image::io::Reader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| Error::SourceOpen(path.to_owned(), e))?
            .decode()
            .map_err(|e| Error::SourceDecode(path.to_owned(), e))?;
        let source = SourceImage::from_image(path, image);
        tracing::info!(
            path = %path.display(),
            width = source.width(),
            height = source.height(),
            color = ?source.color(),
            "loaded source image"
        );
        Ok(source)
    }

    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> SourceImage {
        SourceImage {
            path: path.into(),
            image,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }
}
