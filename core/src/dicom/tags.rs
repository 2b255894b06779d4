use dicom_core::Tag;
use dicom_dictionary_std::tags;
use dicom_object::InMemDicomObject;

/// An identifying attribute targeted by the anonymizer
#[derive(Debug, Clone, Copy)]
pub struct IdentifyingAttribute {
    pub name: &'static str,
    pub tag: Tag,
}

const fn attr(name: &'static str, tag: Tag) -> IdentifyingAttribute {
    IdentifyingAttribute { name, tag }
}

/// Attributes cleared (or removed when clearing is impossible) during
/// anonymization.
///
/// This is the fixed identifying set: direct patient identifiers, the people
/// and institutions involved in the study, and the study/series/acquisition
/// timestamps that narrow a patient down.
pub const IDENTIFYING_ATTRIBUTES: &[IdentifyingAttribute] = &[
    attr("PatientName", tags::PATIENT_NAME),
    attr("PatientID", tags::PATIENT_ID),
    attr("PatientBirthDate", tags::PATIENT_BIRTH_DATE),
    attr("PatientSex", tags::PATIENT_SEX),
    attr("PatientAge", tags::PATIENT_AGE),
    attr("PatientAddress", tags::PATIENT_ADDRESS),
    attr("PatientTelephoneNumbers", tags::PATIENT_TELEPHONE_NUMBERS),
    attr("AccessionNumber", tags::ACCESSION_NUMBER),
    attr("InstitutionName", tags::INSTITUTION_NAME),
    attr("InstitutionAddress", tags::INSTITUTION_ADDRESS),
    attr("ReferringPhysicianName", tags::REFERRING_PHYSICIAN_NAME),
    attr("PerformingPhysicianName", tags::PERFORMING_PHYSICIAN_NAME),
    attr("OperatorsName", tags::OPERATORS_NAME),
    attr("StudyID", tags::STUDY_ID),
    attr("StudyDate", tags::STUDY_DATE),
    attr("SeriesDate", tags::SERIES_DATE),
    attr("AcquisitionDate", tags::ACQUISITION_DATE),
    attr("StudyTime", tags::STUDY_TIME),
    attr("SeriesTime", tags::SERIES_TIME),
    attr("AcquisitionTime", tags::ACQUISITION_TIME),
];

/// Sequence-valued identifying attributes, removed outright when present
pub const IDENTIFYING_SEQUENCES: &[IdentifyingAttribute] = &[
    attr("OtherPatientIDsSequence", tags::OTHER_PATIENT_I_DS_SEQUENCE),
    attr("ReferencedPatientSequence", tags::REFERENCED_PATIENT_SEQUENCE),
];

/// Helper to get string value from a DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}
