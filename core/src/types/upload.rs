use std::fmt;

/// Container format of an upload, decided once at the ingestion boundary
///
/// Downstream code branches on this tag instead of re-inspecting the
/// filename or MIME string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadKind {
    /// Conventional raster image (JPEG or PNG)
    Raster,
    /// DICOM file (`.dcm` / `.dicom`)
    Dicom,
}

impl UploadKind {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            UploadKind::Raster => "raster",
            UploadKind::Dicom => "dicom",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// A single uploaded file: byte buffer, declared filename, optional MIME hint
///
/// Created at the ingestion boundary and consumed once by the decoder.
#[derive(Debug, Clone)]
pub struct RawUpload {
    bytes: Vec<u8>,
    filename: String,
    mime_type: Option<String>,
}

impl RawUpload {
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, mime_type: Option<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            mime_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Classifies the upload from its extension or declared MIME type
    ///
    /// Accepted formats are JPEG, PNG and DICOM. Returns `None` for anything
    /// else; the decoder turns that into a typed error.
    pub fn kind(&self) -> Option<UploadKind> {
        if let Some(mime) = self.mime_type.as_deref() {
            match mime.to_ascii_lowercase().as_str() {
                "application/dicom" => return Some(UploadKind::Dicom),
                "image/jpeg" | "image/png" => return Some(UploadKind::Raster),
                _ => {}
            }
        }

        let extension = self
            .filename
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "dcm" | "dicom" => Some(UploadKind::Dicom),
            "jpg" | "jpeg" | "png" => Some(UploadKind::Raster),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("scan.dcm", None, Some(UploadKind::Dicom))]
    #[case("scan.DICOM", None, Some(UploadKind::Dicom))]
    #[case("xray.jpg", None, Some(UploadKind::Raster))]
    #[case("xray.jpeg", None, Some(UploadKind::Raster))]
    #[case("xray.PNG", None, Some(UploadKind::Raster))]
    #[case("notes.txt", None, None)]
    #[case("noextension", None, None)]
    fn classify_by_extension(
        #[case] filename: &str,
        #[case] mime: Option<&str>,
        #[case] expected: Option<UploadKind>,
    ) {
        let upload = RawUpload::new(vec![], filename, mime.map(String::from));
        assert_eq!(upload.kind(), expected);
    }

    #[rstest]
    #[case("upload.bin", "application/dicom", Some(UploadKind::Dicom))]
    #[case("upload.bin", "image/jpeg", Some(UploadKind::Raster))]
    #[case("upload.bin", "image/png", Some(UploadKind::Raster))]
    #[case("upload.bin", "text/plain", None)]
    fn classify_by_mime(
        #[case] filename: &str,
        #[case] mime: &str,
        #[case] expected: Option<UploadKind>,
    ) {
        let upload = RawUpload::new(vec![], filename, Some(mime.to_string()));
        assert_eq!(upload.kind(), expected);
    }

    #[test]
    fn mime_hint_wins_over_extension() {
        // A mislabeled extension defers to an explicit DICOM MIME type
        let upload = RawUpload::new(
            vec![],
            "export.png",
            Some("application/dicom".to_string()),
        );
        assert_eq!(upload.kind(), Some(UploadKind::Dicom));
    }
}
