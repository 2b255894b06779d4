pub mod anonymize;
pub mod pixels;
pub mod tags;

pub use anonymize::{anonymize, AnonymizationReport, AnonymizedDataset, AttributeOutcome};
pub use pixels::to_display_image;
pub use tags::{IDENTIFYING_ATTRIBUTES, IDENTIFYING_SEQUENCES};
