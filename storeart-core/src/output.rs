use crate::Error;
use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    DynamicImage, GenericImageView, ImageEncoder,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// A file written by one of the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    /// Size of the encoded file.
    pub bytes: u64,
}

/// The directory generated artifacts are written to.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    /// Creates the directory and any missing parents.
    pub fn create(path: impl Into<PathBuf>) -> Result<OutputDir, Error> {
        let path = path.into();
        std::fs::create_dir_all(&path).map_err(|e| Error::OutputDir(path.clone(), e))?;
        Ok(OutputDir { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encodes `image` as a maximally compressed PNG named `file_name`, replacing any existing
    /// file.
    pub fn write_png(&self, file_name: &str, image: &DynamicImage) -> Result<Artifact, Error> {
        let path = self.path.join(file_name);
        let file = File::create(&path).map_err(|e| Error::OutputWrite(path.clone(), e))?;
        let mut writer = BufWriter::new(file);
        encode_png(&mut writer, image).map_err(|e| Error::Encode(path.clone(), e))?;
        writer
            .flush()
            .map_err(|e| Error::OutputWrite(path.clone(), e))?;
        let bytes = std::fs::metadata(&path)
            .map_err(|e| Error::OutputWrite(path.clone(), e))?
            .len();

        let (width, height) = image.dimensions();
        tracing::info!(path = %path.display(), width, height, bytes, "wrote artifact");
        Ok(Artifact {
            path,
            file_name: file_name.to_owned(),
            width,
            height,
            bytes,
        })
    }
}

pub fn encode_png(writer: impl Write, image: &DynamicImage) -> image::ImageResult<()> {
    PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive).write_image(
        image.as_bytes(),
        image.width(),
        image.height(),
        image.color(),
    )
}
