use dicom_object::DefaultDicomObject;
use dicom_pixeldata::PixelDecoder;
use image::RgbImage;
use log::debug;

use crate::error::{CorpusError, Result};
use crate::types::DisplayImage;

/// Converts the pixel matrix of a DICOM dataset into a displayable image
///
/// The matrix is scaled by its maximum value into the full 8-bit range and
/// truncated to unsigned bytes. A constant all-zero matrix short-circuits to
/// an all-zero image instead of dividing by zero. Single-channel matrices
/// are expanded to three channels so every downstream consumer sees RGB.
///
/// Only the first frame of a multi-frame dataset is used.
///
/// # Errors
///
/// Returns [`CorpusError::DicomProcessing`] when pixel data is missing,
/// the transfer syntax is unsupported, or the matrix shape does not match
/// its declared dimensions.
pub fn to_display_image(obj: &DefaultDicomObject) -> Result<DisplayImage> {
    let decoded = obj
        .decode_pixel_data()
        .map_err(|e| CorpusError::DicomProcessing(format!("{}", e)))?;

    // NumberOfFrames x Rows x Cols x SamplesPerPixel
    let array = decoded
        .to_ndarray::<f32>()
        .map_err(|e| CorpusError::DicomProcessing(format!("{}", e)))?;

    let shape = array.shape().to_vec();
    if shape.len() != 4 {
        return Err(CorpusError::DicomProcessing(format!(
            "unexpected pixel array rank {}",
            shape.len()
        )));
    }
    let (rows, cols, samples) = (shape[1], shape[2], shape[3]);
    debug!(
        "pixel matrix: {} frame(s), {}x{}, {} sample(s) per pixel",
        shape[0], rows, cols, samples
    );

    // First frame occupies the leading rows*cols*samples values in row-major
    // order.
    let frame_len = rows * cols * samples;
    let values: Vec<f32> = array.iter().copied().take(frame_len).collect();
    if values.len() != frame_len {
        return Err(CorpusError::DicomProcessing(
            "pixel data shorter than declared dimensions".to_string(),
        ));
    }

    let scaled = normalize_to_u8(&values);

    let rgb = match samples {
        1 => {
            let mut buf = Vec::with_capacity(frame_len * 3);
            for v in &scaled {
                buf.extend_from_slice(&[*v, *v, *v]);
            }
            buf
        }
        3 => scaled,
        n => {
            return Err(CorpusError::DicomProcessing(format!(
                "unsupported samples per pixel: {}",
                n
            )))
        }
    };

    let image = RgbImage::from_raw(cols as u32, rows as u32, rgb).ok_or_else(|| {
        CorpusError::DicomProcessing("pixel buffer does not match dimensions".to_string())
    })?;
    Ok(DisplayImage::new(image))
}

/// Scales raw pixel values into [0, 255] by dividing by the matrix maximum
///
/// `max <= 0` (all-zero or fully negative input) yields an all-zero output;
/// negative values clamp to zero so the u8 truncation is well defined.
pub(crate) fn normalize_to_u8(values: &[f32]) -> Vec<u8> {
    let max = values.iter().fold(0.0f32, |acc, &v| acc.max(v));
    if max <= 0.0 {
        return vec![0; values.len()];
    }
    values
        .iter()
        .map(|&v| (v.max(0.0) / max * 255.0) as u8)
        .collect()
}
