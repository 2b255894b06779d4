use dicom_object::{from_reader, FileDicomObject, StandardDataDictionary};
use log::{debug, info};

use crate::dicom::{anonymize, to_display_image, AnonymizationReport};
use crate::error::{CorpusError, Result};
use crate::types::{DisplayImage, RawUpload, UploadKind};

/// A decoded upload: the displayable image plus, for DICOM inputs, the
/// anonymization report describing what was scrubbed before pixel extraction
#[derive(Debug)]
pub struct DecodedUpload {
    pub display: DisplayImage,
    pub anonymization: Option<AnonymizationReport>,
}

/// Turns raw uploaded bytes into a displayable 8-bit image
///
/// The container format is decided once from the upload's extension or MIME
/// hint. DICOM inputs are anonymized before the pixel matrix is extracted;
/// conventional rasters decode directly.
///
/// # Errors
///
/// Returns [`CorpusError::Decode`] for unsupported or malformed uploads and
/// [`CorpusError::DicomProcessing`] when a parsed DICOM file has no usable
/// pixel data. Callers must not show a partial preview on either path.
pub fn decode(upload: &RawUpload) -> Result<DecodedUpload> {
    let kind = upload.kind().ok_or_else(|| {
        CorpusError::Decode(format!(
            "unsupported upload format: {:?} (accepted: jpg, jpeg, png, dcm, dicom)",
            upload.filename()
        ))
    })?;
    debug!("decoding {:?} as {}", upload.filename(), kind);

    match kind {
        UploadKind::Raster => {
            let image = image::load_from_memory(upload.bytes())?;
            Ok(DecodedUpload {
                display: DisplayImage::new(image.to_rgb8()),
                anonymization: None,
            })
        }
        UploadKind::Dicom => {
            let obj = from_reader(dicom_stream(upload.bytes()))?;
            let anonymized = anonymize(&obj);
            info!(
                "anonymized dataset: {} attribute(s) cleared, {} removed, {} private element(s) dropped",
                anonymized.report.count(crate::dicom::AttributeOutcome::Cleared),
                anonymized.report.count(crate::dicom::AttributeOutcome::Removed),
                anonymized.report.private_elements_removed,
            );

            // Pixel extraction needs the file meta (transfer syntax), so the
            // anonymized dataset is rewrapped with the original meta table.
            let mut anon_obj = FileDicomObject::new_empty_with_dict_and_meta(
                StandardDataDictionary,
                obj.meta().clone(),
            );
            for elem in anonymized.dataset {
                anon_obj.put(elem);
            }

            let display = to_display_image(&anon_obj)?;
            Ok(DecodedUpload {
                display,
                anonymization: Some(anonymized.report),
            })
        }
    }
}

// DICOM files open with a 128-byte preamble before the "DICM" magic; the
// stream parser expects the magic first.
fn dicom_stream(bytes: &[u8]) -> &[u8] {
    if bytes.len() >= 132 && &bytes[128..132] == b"DICM" {
        return &bytes[128..];
    }
    bytes
}
