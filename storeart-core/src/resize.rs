use crate::source::SourceImage;
use image::{imageops::FilterType, DynamicImage};

/// Scales images to exact square dimensions.
///
/// Resampling uses Lanczos3. The color type of the source is preserved, so a source with an
/// alpha channel produces resized images with an alpha channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageResizer;

impl ImageResizer {
    const FILTER: FilterType = FilterType::Lanczos3;

    /// Produces a `size`×`size` copy of the source.
    pub fn resize_square(&self, source: &SourceImage, size: u32) -> DynamicImage {
        if source.dimensions() == (size, size) {
            tracing::debug!(size, "source already has the requested size");
            return source.image().clone();
        }
        tracing::debug!(
            from_width = source.width(),
            from_height = source.height(),
            size,
            filter = ?Self::FILTER,
            "resizing source"
        );
        source.image().resize_exact(size, size, Self::FILTER)
    }
}
