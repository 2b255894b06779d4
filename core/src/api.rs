use crate::config::ModelConfig;
use crate::decode::decode;
use crate::dicom::AnonymizationReport;
use crate::error::Result;
use crate::preview::resize_for_preview;
use crate::request::{build_request, AnalysisRequest};
use crate::types::{DisplayImage, PreviewImage, RawUpload};

/// A fully prepared upload: displayable image, bounded preview, and the
/// anonymization report when the source was a DICOM file
#[derive(Debug)]
pub struct PreparedImage {
    pub display: DisplayImage,
    pub preview: PreviewImage,
    pub anonymization: Option<AnonymizationReport>,
}

/// High-level entry points for the ingestion pipeline
///
/// Both operations are pure per-invocation functions: every call works on
/// its own copies of image and dataset data, and nothing is shared between
/// requests or written to disk.
///
/// # Example
///
/// ```
/// use corpuscan_core::{ImagePipeline, RawUpload};
/// use image::{ImageFormat, RgbImage};
/// use std::io::Cursor;
///
/// // Encode a plain raster upload in memory
/// let mut png = Vec::new();
/// RgbImage::new(800, 400)
///     .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
///     .unwrap();
/// let upload = RawUpload::new(png, "scan.png", None);
///
/// let prepared = ImagePipeline::prepare(&upload).unwrap();
/// assert_eq!(prepared.preview.width(), 500);
/// assert_eq!(prepared.preview.height(), 250);
/// assert!(prepared.anonymization.is_none());
/// ```
pub struct ImagePipeline;

impl ImagePipeline {
    /// Decodes an upload and produces its bounded preview
    ///
    /// DICOM uploads are anonymized before pixel extraction; the report is
    /// returned so the caller can surface what was scrubbed.
    ///
    /// # Errors
    ///
    /// Any decode or pixel-processing failure stops the pipeline; no
    /// partial preview is produced.
    pub fn prepare(upload: &RawUpload) -> Result<PreparedImage> {
        let decoded = decode(upload)?;
        let preview = resize_for_preview(&decoded.display);
        Ok(PreparedImage {
            display: decoded.display,
            preview,
            anonymization: decoded.anonymization,
        })
    }

    /// Assembles the analysis request for a prepared upload
    pub fn assemble(
        prepared: &PreparedImage,
        context_text: &str,
        model_override: Option<&str>,
        config: &ModelConfig,
    ) -> Result<AnalysisRequest> {
        build_request(&prepared.preview, context_text, model_override, config)
    }
}
