use std::fmt;

use crate::dicom::anonymize::BURNED_IN_PIXEL_NOTE;
use crate::dicom::{AnonymizationReport, AttributeOutcome};

/// Text report formatter for anonymization results
pub struct TextReport<'a> {
    report: &'a AnonymizationReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a AnonymizationReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Anonymization Report")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Private elements removed: {}",
            self.report.private_elements_removed
        )?;
        writeln!(f)?;
        for attribute in &self.report.attributes {
            // Absent attributes add noise without information; keep the
            // report to what was actually touched.
            if attribute.outcome == AttributeOutcome::Absent {
                continue;
            }
            writeln!(f, "{:<28} {}", attribute.name, attribute.outcome)?;
        }
        if !self.report.is_complete() {
            writeln!(f)?;
            writeln!(
                f,
                "Some attributes could not be cleared; see the log for details."
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}", BURNED_IN_PIXEL_NOTE)?;
        Ok(())
    }
}
