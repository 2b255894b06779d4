use std::fmt;

use dicom_core::header::Header;
use dicom_core::value::PrimitiveValue;
use dicom_core::{DataElement, Tag, VR};
use dicom_object::InMemDicomObject;
use log::{debug, warn};

use super::tags::{IDENTIFYING_ATTRIBUTES, IDENTIFYING_SEQUENCES};

/// What happened to one identifying attribute during anonymization
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeOutcome {
    /// Value replaced with an empty value, element kept
    Cleared,
    /// Element removed because its value representation cannot hold an
    /// empty value
    Removed,
    /// Neither clearing nor removal succeeded; element left untouched
    Skipped,
    /// Element was not present in the dataset
    Absent,
}

impl AttributeOutcome {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            AttributeOutcome::Cleared => "cleared",
            AttributeOutcome::Removed => "removed",
            AttributeOutcome::Skipped => "skipped",
            AttributeOutcome::Absent => "absent",
        }
    }
}

impl fmt::Display for AttributeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// Per-attribute record in an [`AnonymizationReport`]
#[derive(Debug, Clone, serde::Serialize)]
pub struct AttributeRecord {
    pub name: &'static str,
    pub outcome: AttributeOutcome,
}

/// Outcome of one anonymization pass
///
/// Collects the per-attribute results instead of swallowing them, so callers
/// can show the user exactly what was scrubbed. Attribute anonymization
/// covers dataset attributes only: text burned into the pixel data is NOT
/// removed, and callers presenting the image must say so (see
/// [`BURNED_IN_PIXEL_NOTE`]).
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnonymizationReport {
    /// Number of private (odd-group) elements removed wholesale
    pub private_elements_removed: usize,
    /// One record per attribute in the identifying set
    pub attributes: Vec<AttributeRecord>,
}

impl AnonymizationReport {
    /// Count of attributes with the given outcome
    pub fn count(&self, outcome: AttributeOutcome) -> usize {
        self.attributes
            .iter()
            .filter(|a| a.outcome == outcome)
            .count()
    }

    /// Looks up the outcome recorded for an attribute name
    pub fn outcome_of(&self, name: &str) -> Option<AttributeOutcome> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.outcome)
    }

    /// True if no attribute had to be skipped
    pub fn is_complete(&self) -> bool {
        self.count(AttributeOutcome::Skipped) == 0
    }
}

/// User-facing limitation note, surfaced wherever the anonymized preview is
/// shown.
pub const BURNED_IN_PIXEL_NOTE: &str =
    "Anonymization clears DICOM attributes only. It does not remove identifying \
     text burned into the pixel data, if there is any.";

/// An anonymized copy of a dataset together with its report
#[derive(Debug, Clone)]
pub struct AnonymizedDataset {
    pub dataset: InMemDicomObject,
    pub report: AnonymizationReport,
}

// Value representations that accept an empty value in place
fn vr_holds_empty(vr: VR) -> bool {
    matches!(
        vr,
        VR::AE
            | VR::AS
            | VR::CS
            | VR::DA
            | VR::DS
            | VR::DT
            | VR::IS
            | VR::LO
            | VR::LT
            | VR::PN
            | VR::SH
            | VR::ST
            | VR::TM
            | VR::UC
            | VR::UI
            | VR::UR
            | VR::UT
    )
}

/// Produces an anonymized copy of a DICOM dataset
///
/// The input dataset is never mutated. Two phases:
/// 1. every private (odd-group) element is removed wholesale;
/// 2. each attribute of the fixed identifying set is cleared to an empty
///    value, falling back to removal when the value representation cannot
///    hold one, and to a recorded skip when even removal fails.
///
/// The pass is best-effort and non-fatal: one stubborn attribute never
/// aborts the rest. Absent attributes complete the pass normally.
pub fn anonymize(ds: &InMemDicomObject) -> AnonymizedDataset {
    let mut anon = ds.clone();

    // Phase 1: vendor/private extension attributes.
    // Collect first; removing while iterating would invalidate the borrow.
    let private_tags: Vec<Tag> = anon
        .iter()
        .map(|elem| elem.tag())
        .filter(|tag| tag.group() % 2 == 1)
        .collect();
    for tag in &private_tags {
        anon.remove_element(*tag);
    }
    debug!("removed {} private elements", private_tags.len());

    // Phase 2: the enumerated identifying attributes.
    let mut attributes = Vec::with_capacity(
        IDENTIFYING_ATTRIBUTES.len() + IDENTIFYING_SEQUENCES.len(),
    );

    for attribute in IDENTIFYING_ATTRIBUTES {
        let outcome = clear_or_remove(&mut anon, attribute.tag);
        match outcome {
            AttributeOutcome::Skipped => {
                warn!("could not anonymize {}; element left as-is", attribute.name)
            }
            _ => debug!("{}: {}", attribute.name, outcome),
        }
        attributes.push(AttributeRecord {
            name: attribute.name,
            outcome,
        });
    }

    for attribute in IDENTIFYING_SEQUENCES {
        let outcome = if anon.element(attribute.tag).is_ok() {
            if anon.remove_element(attribute.tag) {
                AttributeOutcome::Removed
            } else {
                AttributeOutcome::Skipped
            }
        } else {
            AttributeOutcome::Absent
        };
        debug!("{}: {}", attribute.name, outcome);
        attributes.push(AttributeRecord {
            name: attribute.name,
            outcome,
        });
    }

    AnonymizedDataset {
        dataset: anon,
        report: AnonymizationReport {
            private_elements_removed: private_tags.len(),
            attributes,
        },
    }
}

fn clear_or_remove(ds: &mut InMemDicomObject, tag: Tag) -> AttributeOutcome {
    let vr = match ds.element(tag) {
        Ok(elem) => elem.vr(),
        Err(_) => return AttributeOutcome::Absent,
    };

    if vr_holds_empty(vr) {
        ds.put(DataElement::new(tag, vr, PrimitiveValue::Empty));
        return AttributeOutcome::Cleared;
    }

    if ds.remove_element(tag) {
        AttributeOutcome::Removed
    } else {
        AttributeOutcome::Skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::value::DataSetSequence;
    use dicom_dictionary_std::tags;

    fn patient_dataset() -> InMemDicomObject {
        let mut ds = InMemDicomObject::new_empty();
        ds.put(DataElement::new(
            tags::PATIENT_NAME,
            VR::PN,
            PrimitiveValue::from("DOE^JANE"),
        ));
        ds.put(DataElement::new(
            tags::PATIENT_ID,
            VR::LO,
            PrimitiveValue::from("P-00042"),
        ));
        ds.put(DataElement::new(
            tags::PATIENT_BIRTH_DATE,
            VR::DA,
            PrimitiveValue::from("19701224"),
        ));
        ds.put(DataElement::new(
            tags::STUDY_DATE,
            VR::DA,
            PrimitiveValue::from("20240105"),
        ));
        ds.put(DataElement::new(
            tags::MODALITY,
            VR::CS,
            PrimitiveValue::from("CR"),
        ));
        ds
    }

    #[test]
    fn test_original_is_not_mutated() {
        let ds = patient_dataset();
        let _anon = anonymize(&ds);

        let name = ds.element(tags::PATIENT_NAME).unwrap().to_str().unwrap();
        assert_eq!(name, "DOE^JANE");
        let birth = ds
            .element(tags::PATIENT_BIRTH_DATE)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(birth, "19701224");
    }

    #[test]
    fn test_identifying_attributes_cleared() {
        let ds = patient_dataset();
        let anon = anonymize(&ds);

        let name = anon
            .dataset
            .element(tags::PATIENT_NAME)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(name, "");
        let date = anon
            .dataset
            .element(tags::STUDY_DATE)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(date, "");

        // Non-identifying attributes survive untouched
        let modality = anon
            .dataset
            .element(tags::MODALITY)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(modality, "CR");
    }

    #[test]
    fn test_absent_attributes_do_not_fail_the_pass() {
        // Only a patient name; every other listed attribute is missing
        let mut ds = InMemDicomObject::new_empty();
        ds.put(DataElement::new(
            tags::PATIENT_NAME,
            VR::PN,
            PrimitiveValue::from("ROE^RICHARD"),
        ));

        let anon = anonymize(&ds);

        assert_eq!(
            anon.report.outcome_of("PatientName"),
            Some(AttributeOutcome::Cleared)
        );
        assert_eq!(
            anon.report.outcome_of("PatientID"),
            Some(AttributeOutcome::Absent)
        );
        assert!(anon.report.is_complete());
    }

    #[test]
    fn test_private_elements_removed_wholesale() {
        let mut ds = patient_dataset();
        let private_tag = Tag(0x0009, 0x0010);
        ds.put(DataElement::new(
            private_tag,
            VR::LO,
            PrimitiveValue::from("ACME vendor block"),
        ));

        let anon = anonymize(&ds);

        assert!(anon.dataset.element(private_tag).is_err());
        assert_eq!(anon.report.private_elements_removed, 1);
        // The original still has it
        assert!(ds.element(private_tag).is_ok());
    }

    #[test]
    fn test_identifying_sequence_removed() {
        let mut ds = patient_dataset();
        let item = InMemDicomObject::from_element_iter([DataElement::new(
            tags::PATIENT_ID,
            VR::LO,
            PrimitiveValue::from("P-OTHER"),
        )]);
        ds.put(DataElement::new(
            tags::OTHER_PATIENT_I_DS_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(vec![item]),
        ));

        let anon = anonymize(&ds);

        assert!(anon
            .dataset
            .element(tags::OTHER_PATIENT_I_DS_SEQUENCE)
            .is_err());
        assert_eq!(
            anon.report.outcome_of("OtherPatientIDsSequence"),
            Some(AttributeOutcome::Removed)
        );
    }

    #[test]
    fn test_report_counts() {
        let ds = patient_dataset();
        let anon = anonymize(&ds);

        // 4 identifying attributes present and cleared, the rest absent
        assert_eq!(anon.report.count(AttributeOutcome::Cleared), 4);
        assert_eq!(anon.report.count(AttributeOutcome::Skipped), 0);
        assert_eq!(
            anon.report.count(AttributeOutcome::Absent),
            IDENTIFYING_ATTRIBUTES.len() + IDENTIFYING_SEQUENCES.len() - 4
        );
    }
}
