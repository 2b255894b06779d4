use image::RgbImage;

/// Target width for preview images, in pixels
pub const PREVIEW_TARGET_WIDTH: u32 = 500;

/// A dense 8-bit RGB raster produced by decoding or normalizing an upload
///
/// Single-channel sources are expanded to three channels before this type is
/// constructed, so every consumer sees the same layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayImage(RgbImage);

impl DisplayImage {
    pub fn new(inner: RgbImage) -> Self {
        Self(inner)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.0
    }

    pub fn into_rgb(self) -> RgbImage {
        self.0
    }
}

/// A [`DisplayImage`] resized to a bounded width, aspect ratio preserved
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage(RgbImage);

impl PreviewImage {
    pub(crate) fn new(inner: RgbImage) -> Self {
        Self(inner)
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.0
    }
}
