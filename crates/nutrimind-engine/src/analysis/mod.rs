//! # Analysis Exchange
//!
//! Request and response bodies of the upstream analysis service, and the
//! glue that turns a successful response into the three rendered sections.
//!
//! Field names match the service's JSON exactly. Transport is not handled
//! here: callers send the request and hand the response body back as text.

pub mod page;

use serde::{Deserialize, Serialize};

use crate::{logistics, rendering::render_recommendation, triggers::render_triggers};

pub use page::render_page;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please enter your journal entry.")]
    EmptyJournal,
    #[error("{0}")]
    Failed(String),
    #[error("Malformed analysis response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Returns the single line shown to the user for a failure.
pub fn user_message(err: &AnalysisError) -> String {
    match err {
        AnalysisError::EmptyJournal => err.to_string(),
        _ => format!(
            "Unable to analyze your journal: {err}. Please make sure the server is running."
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub diet: String,
    pub allergies: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            diet: "No specific diet".to_string(),
            allergies: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthData {
    pub glucose_trend: String,
    pub energy_level: String,
}

impl Default for HealthData {
    fn default() -> Self {
        Self {
            glucose_trend: "Normal".to_string(),
            energy_level: "Normal".to_string(),
        }
    }
}

/// Body of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub journal_entry: String,
    pub user_profile: UserProfile,
    pub health_data: HealthData,
}

impl AnalysisRequest {
    /// Builds a request for the default user, rejecting an empty journal.
    pub fn new(journal: &str, diet: &str, energy_level: &str) -> Result<Self, AnalysisError> {
        let journal = journal.trim();
        if journal.is_empty() {
            return Err(AnalysisError::EmptyJournal);
        }

        Ok(Self {
            journal_entry: journal.to_string(),
            user_profile: UserProfile {
                diet: diet.to_string(),
                ..UserProfile::default()
            },
            health_data: HealthData {
                energy_level: energy_level.to_string(),
                ..HealthData::default()
            },
        })
    }

    pub fn to_json(&self) -> Result<String, AnalysisError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fields of a successful analysis. Missing fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResults {
    pub user_profile: Option<UserProfile>,
    pub detected_triggers: Vec<String>,
    pub final_plan: String,
    pub complete_response: String,
}

/// Body of an analysis response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Option<AnalysisResults>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisResponse {
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unwraps the results of a successful response.
    pub fn into_results(self) -> Result<AnalysisResults, AnalysisError> {
        match (self.success, self.results) {
            (true, Some(results)) => Ok(results),
            (true, None) => Ok(AnalysisResults::default()),
            (false, _) => Err(AnalysisError::Failed(
                self.error.unwrap_or_else(|| "Analysis failed".to_string()),
            )),
        }
    }
}

/// The three display fragments produced from one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResults {
    pub triggers: String,
    pub recommendation: String,
    pub logistics: String,
}

/// Renders all sections with the built-in logistics markers.
pub fn render_results(results: &AnalysisResults) -> RenderedResults {
    RenderedResults {
        triggers: render_triggers(&results.detected_triggers),
        recommendation: render_recommendation(&results.final_plan),
        logistics: logistics::render_logistics(&results.complete_response),
    }
}

/// Renders all sections, searching `markers` for the logistics section.
///
/// An empty marker list behaves like [`render_results`].
pub fn render_results_with_markers<S: AsRef<str>>(
    results: &AnalysisResults,
    markers: &[S],
) -> RenderedResults {
    if markers.is_empty() {
        return render_results(results);
    }

    RenderedResults {
        logistics: logistics::render_logistics_with_markers(&results.complete_response, markers),
        ..render_results(results)
    }
}
