use image::imageops::{self, FilterType};

use crate::types::{DisplayImage, PreviewImage, PREVIEW_TARGET_WIDTH};

/// Resizes a display image to the bounded preview width
///
/// Height follows from the original aspect ratio, rounded to the nearest
/// integer; nothing is cropped. The CatmullRom filter keeps the operation
/// deterministic for a given input.
pub fn resize_for_preview(img: &DisplayImage) -> PreviewImage {
    resize_to_width(img, PREVIEW_TARGET_WIDTH)
}

/// Same as [`resize_for_preview`] with an explicit target width
pub fn resize_to_width(img: &DisplayImage, target_width: u32) -> PreviewImage {
    let aspect_ratio = f64::from(img.width()) / f64::from(img.height());
    let target_height = (f64::from(target_width) / aspect_ratio).round().max(1.0) as u32;

    let resized = imageops::resize(
        img.as_rgb(),
        target_width,
        target_height,
        FilterType::CatmullRom,
    );
    PreviewImage::new(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn display(width: u32, height: u32) -> DisplayImage {
        DisplayImage::new(RgbImage::new(width, height))
    }

    #[test]
    fn test_downscale_preserves_aspect_ratio() {
        let preview = resize_for_preview(&display(1000, 500));
        assert_eq!(preview.width(), 500);
        assert_eq!(preview.height(), 250);
    }

    #[test]
    fn test_portrait_input() {
        let preview = resize_for_preview(&display(512, 1024));
        assert_eq!(preview.width(), 500);
        assert_eq!(preview.height(), 1000);
    }

    #[test]
    fn test_height_rounds_to_nearest() {
        // 500 / (640/480) = 375.0; 500 / (333/100) = 150.15 -> 150
        let preview = resize_for_preview(&display(640, 480));
        assert_eq!(preview.height(), 375);

        let preview = resize_for_preview(&display(333, 100));
        assert_eq!(preview.height(), 150);
    }

    #[test]
    fn test_upscale_small_input() {
        let preview = resize_for_preview(&display(100, 100));
        assert_eq!(preview.width(), 500);
        assert_eq!(preview.height(), 500);
    }

    #[test]
    fn test_resize_is_deterministic() {
        let mut img = RgbImage::new(40, 30);
        for (x, y, p) in img.enumerate_pixels_mut() {
            *p = image::Rgb([(x * 6) as u8, (y * 8) as u8, 0]);
        }
        let display = DisplayImage::new(img);

        let a = resize_to_width(&display, 20);
        let b = resize_to_width(&display, 20);
        assert_eq!(a.as_rgb().as_raw(), b.as_rgb().as_raw());
    }
}
