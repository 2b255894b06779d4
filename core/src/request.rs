use std::io::Cursor;

use image::ImageFormat;
use log::debug;

use crate::config::{ModelConfig, DEFAULT_MODEL};
use crate::error::{CorpusError, Result};
use crate::types::PreviewImage;

/// Fixed instruction used when the caller provides no clinical context
pub const DEFAULT_INSTRUCTION: &str = "Analyze this medical image and provide detailed findings.\n\n\
     If you are not sure about the diagnosis, please provide a possible diagnosis.\n\n\
     Answer in the language of the user. If it is not given, answer English.";

/// Quick prompt templates offered alongside the free-text context field
///
/// The UI layer composes these into the context string; the pipeline itself
/// only ever sees the final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    AnswerInEnglish,
    AnswerInGerman,
    RadiologyReport,
    PatientFriendly,
    RedFlags,
    PatientContext,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 6] = [
        PromptTemplate::AnswerInEnglish,
        PromptTemplate::AnswerInGerman,
        PromptTemplate::RadiologyReport,
        PromptTemplate::PatientFriendly,
        PromptTemplate::RedFlags,
        PromptTemplate::PatientContext,
    ];

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            PromptTemplate::AnswerInEnglish => "Answer in English",
            PromptTemplate::AnswerInGerman => "Antworte auf Deutsch",
            PromptTemplate::RadiologyReport => "Radiology-style report",
            PromptTemplate::PatientFriendly => "Explain for patient",
            PromptTemplate::RedFlags => "Focus: red flags",
            PromptTemplate::PatientContext => "Add patient context",
        }
    }

    /// Template body inserted into the context field
    pub fn text(&self) -> &'static str {
        match self {
            PromptTemplate::AnswerInEnglish => "Answer in English.",
            PromptTemplate::AnswerInGerman => "Antworte auf Deutsch.",
            PromptTemplate::RadiologyReport => {
                "Provide a radiology-style report with:\n\
                 - Modality and study type (if apparent)\n\
                 - Key findings\n\
                 - Impression (most likely diagnosis + differential)\n\
                 - Recommended next steps\n\
                 Keep it concise."
            }
            PromptTemplate::PatientFriendly => {
                "Explain the findings in simple, patient-friendly language."
            }
            PromptTemplate::RedFlags => {
                "Focus on urgent findings / red flags and what to do next."
            }
            PromptTemplate::PatientContext => {
                "Patient context:\n\
                 - Age: \n\
                 - Sex: \n\
                 - Symptoms: \n\
                 - Relevant history: \n\
                 - Clinical question: \n"
            }
        }
    }

    /// Appends this template to an existing context string, separating
    /// blocks with a blank line
    pub fn append_to(&self, existing: &str) -> String {
        let existing = existing.trim();
        let addition = self.text().trim();
        if existing.is_empty() {
            addition.to_string()
        } else {
            format!("{}\n\n{}", existing, addition)
        }
    }
}

/// A bounded analysis request: preview bytes, prompt, model identifier
///
/// Assembled entirely in memory; nothing touches the filesystem.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub image_png: Vec<u8>,
    pub prompt: String,
    pub model: String,
}

/// Combines a preview image, optional context and a model choice into one
/// analysis request
///
/// The preview is re-encoded as PNG in memory. Non-empty context is wrapped
/// into the context-considering instruction; empty context substitutes the
/// fixed default instruction. The model identifier resolves caller override,
/// then persisted configuration, then the fallback constant, and is never
/// empty.
pub fn build_request(
    preview: &PreviewImage,
    context_text: &str,
    model_override: Option<&str>,
    config: &ModelConfig,
) -> Result<AnalysisRequest> {
    let image_png = encode_png(preview)?;
    let prompt = build_prompt(context_text);
    let model = resolve_model(model_override, config);
    debug!(
        "assembled request: {} byte PNG, model {}",
        image_png.len(),
        model
    );

    Ok(AnalysisRequest {
        image_png,
        prompt,
        model,
    })
}

/// Encodes a preview image as PNG without touching the filesystem
pub fn encode_png(preview: &PreviewImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    preview
        .as_rgb()
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| CorpusError::Decode(format!("PNG encoding failed: {}", e)))?;
    Ok(buf)
}

fn build_prompt(context_text: &str) -> String {
    let context = context_text.trim();
    if context.is_empty() {
        DEFAULT_INSTRUCTION.to_string()
    } else {
        format!(
            "Analyze this medical image considering the following context: {}",
            context
        )
    }
}

/// Resolves the model identifier: explicit override, persisted default,
/// fixed fallback
pub fn resolve_model(model_override: Option<&str>, config: &ModelConfig) -> String {
    if let Some(model) = model_override {
        if !model.trim().is_empty() {
            return model.trim().to_string();
        }
    }
    let configured = config.default_model.trim();
    if !configured.is_empty() {
        return configured.to_string();
    }
    DEFAULT_MODEL.to_string()
}
