//! Department classification models

use serde::{Deserialize, Serialize};

/// Department the report is filed under when classification is unavailable
pub const MANUAL_DEPARTMENT: &str = "Manual";

/// Shown when the classifier finds the photo and description unrelated
pub const MISMATCH_MESSAGE: &str = "The image and description do not match. \
     Please ensure your image accurately represents the issue described.";

/// Request body for `/ml/predict/`
#[derive(Debug, Clone, Serialize)]
pub struct MlPredictInput {
    /// Standard base64 of the image bytes, no data-URL prefix
    pub image_base64: String,
    pub title: String,
    pub description: String,
}

/// Classifier verdict for a photo and its description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub department: String,
    pub confidence: f64,
    /// False when the image does not depict the described issue
    pub is_valid: bool,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub image_result: Option<MlResult>,
    #[serde(default)]
    pub text_result: Option<MlTextResult>,
}

impl MlPrediction {
    /// Verdict used when the classifier cannot be reached
    pub fn manual() -> Self {
        Self {
            department: MANUAL_DEPARTMENT.to_string(),
            confidence: 0.0,
            is_valid: true,
            method: None,
            reason: Some("API_ERROR".to_string()),
            image_result: None,
            text_result: None,
        }
    }

    /// Message to show for an invalid verdict
    pub fn rejection_message(&self) -> &str {
        match self.reason.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => reason,
            _ => MISMATCH_MESSAGE,
        }
    }
}

/// Image-only classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlResult {
    pub department: String,
    pub confidence: f64,
}

/// Text-only classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlTextResult {
    pub department: String,
    pub confidence: f64,
    #[serde(default)]
    pub intent: Option<String>,
}
