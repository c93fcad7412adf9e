use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use thiserror::Error;

/// Error text of the 400 envelope.
pub const MISSING_FIELDS: &str = "Missing fields";
/// Error text of the 500 envelope.
pub const SEND_FAILED: &str = "Send failed";

/// Option list offered by the contact form. The dispatcher accepts plain
/// labels; this enum drives the checkboxes and the form controller.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    #[strum(serialize = "Website")]
    Website,
    #[strum(serialize = "Web App")]
    WebApp,
    #[strum(serialize = "Portfolio / Landing Page")]
    PortfolioLandingPage,
    #[strum(serialize = "Auth & Forms")]
    AuthForms,
    #[strum(serialize = "API Integration")]
    ApiIntegration,
    #[strum(serialize = "Dashboard / Analytics")]
    DashboardAnalytics,
    #[strum(serialize = "AI/ML Model Integration")]
    ModelIntegration,
    #[strum(serialize = "Chatbot (RAG)")]
    Chatbot,
    #[strum(serialize = "Data Pipeline")]
    DataPipeline,
    #[strum(serialize = "Inference API")]
    InferenceApi,
    #[strum(serialize = "Model Training / Tuning")]
    ModelTraining,
    Other,
}

/// Wire shape of a contact-form submission.
///
/// Absent or null text fields decode as empty; a `projectType` that is
/// not list-shaped decodes as an empty list. Anything else that fails to
/// decode is a parse error, owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "labels_or_empty")]
    pub project_type: Vec<String>,
}

fn labels_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(label) => Some(label),
            _ => None,
        })
        .collect())
}

impl SubmitPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        project_type: Vec<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
            project_type,
        }
    }

    /// The validation boundary: trims the text fields and produces a
    /// [`ContactSubmission`], or reports which contract failed.
    pub fn validate(self) -> Result<ContactSubmission, SubmissionError> {
        let name = self.name.unwrap_or_default().trim().to_owned();
        let email = self.email.unwrap_or_default().trim().to_owned();
        let message = self.message.unwrap_or_default().trim().to_owned();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }

        Ok(ContactSubmission {
            name,
            email,
            message,
            project_type: self.project_type,
        })
    }
}

/// A validated submission: all text fields non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub project_type: Vec<String>,
}

impl ContactSubmission {
    /// Comma-joined selection; empty when nothing was selected.
    pub fn selected(&self) -> String {
        self.project_type.join(", ")
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("name, email and message are required")]
    MissingFields,
}

/// Response envelope for `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitReply {
    pub fn sent(id: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: Some(id.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            error: Some(error.into()),
        }
    }
}
