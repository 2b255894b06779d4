pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod decode;
pub mod dicom;
pub mod error;
pub mod preview;
pub mod request;
pub mod types;

pub use analysis::{AnalysisClient, AnalysisReport, OpenAiVisionClient, ANALYSIS_DISCLAIMER};
pub use api::{ImagePipeline, PreparedImage};
pub use cli::report::TextReport;
pub use config::{ModelConfig, DEFAULT_MODEL, MODEL_CATALOG};
pub use dicom::anonymize::BURNED_IN_PIXEL_NOTE;
pub use dicom::{AnonymizationReport, AttributeOutcome};
pub use error::{CorpusError, Result};
pub use request::{AnalysisRequest, PromptTemplate, DEFAULT_INSTRUCTION};
pub use types::*;
