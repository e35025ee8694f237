use crate::color::Color;
use image::{imageops, DynamicImage, RgbImage, RgbaImage};

/// Places `icon` at `offset` on a `width`×`height` canvas filled with `background`.
///
/// Icons with an alpha channel are blended onto the canvas per pixel; the result never contains
/// transparency. Parts of the icon outside the canvas are clipped.
pub fn compose(
    background: Color,
    width: u32,
    height: u32,
    icon: &DynamicImage,
    offset: (i64, i64),
) -> RgbImage {
    let (x, y) = offset;
    if icon.color().has_alpha() {
        let mut canvas = RgbaImage::from_pixel(width, height, background.to_rgba());
        imageops::overlay(&mut canvas, &icon.to_rgba8(), x, y);
        DynamicImage::ImageRgba8(canvas).into_rgb8()
    } else {
        let mut canvas = RgbImage::from_pixel(width, height, background.to_rgb());
        imageops::replace(&mut canvas, &icon.to_rgb8(), x, y);
        canvas
    }
}
