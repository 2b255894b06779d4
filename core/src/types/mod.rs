//! Core type definitions for the image analysis pipeline
//!
//! This module provides the fundamental types used throughout the corpuscan
//! library:
//! - [`RawUpload`] / [`UploadKind`]: an uploaded file and its container format
//! - [`DisplayImage`]: a dense 8-bit RGB raster ready for display
//! - [`PreviewImage`]: a display image resized to the bounded preview width

mod image;
mod upload;

pub use image::{DisplayImage, PreviewImage, PREVIEW_TARGET_WIDTH};
pub use upload::{RawUpload, UploadKind};
