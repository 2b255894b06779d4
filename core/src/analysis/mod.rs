//! Analysis client boundary.
//!
//! The remote image-understanding service is an opaque capability with one
//! operation: send an assembled request, get a report back. It is network
//! bound, non-deterministic and may be slow or unavailable; callers make
//! exactly one attempt per user action and treat failures as recoverable.

use async_trait::async_trait;

use crate::error::Result;
use crate::request::AnalysisRequest;

pub mod openai;

pub use openai::OpenAiVisionClient;

/// Caption shown under every analysis result
pub const ANALYSIS_DISCLAIMER: &str =
    "Note: This analysis is generated by AI and should be reviewed by a \
     qualified healthcare professional.";

/// Findings returned by the remote analyzer, treated as opaque markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    content: String,
}

impl AnalysisReport {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A remote image-understanding capability
///
/// Implementations must not retry on their own and must keep prompt text and
/// image bytes out of error values and logs.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Sends one analysis request and returns the findings
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport>;

    /// Human-readable provider name (e.g. "openai")
    fn name(&self) -> &str;
}
