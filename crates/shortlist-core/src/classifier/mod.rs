//! Text-safety classification.
//!
//! [`TextClassifier`] is selected once at construction: with an endpoint and
//! key it calls the hosted classifier, otherwise it falls back to the local
//! mock. Batch validation never fails as a whole; a per-message classifier
//! error becomes an unapproved verdict carrying the error reason.

pub mod error;
pub mod mock;
pub mod real;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ClassifierError;
pub use mock::MockClassifier;
pub use real::RealClassifier;
pub use types::{
    ClassifierMode, MessageVerdict, SEVERITY_APPROVAL_CUTOFF, SeverityScores, ValidationReport,
};

use tracing::{debug, warn};

/// Text-safety capability with a hosted and a local variant.
#[derive(Debug, Clone)]
pub enum TextClassifier {
    Real(RealClassifier),
    Mock(MockClassifier),
}

impl TextClassifier {
    /// Selects the variant from optional credentials, once, at construction.
    pub fn from_settings(
        endpoint: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self, ClassifierError> {
        match (endpoint, api_key) {
            (Some(endpoint), Some(api_key)) => {
                Ok(Self::Real(RealClassifier::new(endpoint, api_key)?))
            }
            _ => {
                warn!("Safety endpoint or key missing, running mock classification");
                Ok(Self::Mock(MockClassifier::new()))
            }
        }
    }

    pub fn mode(&self) -> ClassifierMode {
        match self {
            Self::Real(_) => ClassifierMode::Real,
            Self::Mock(_) => ClassifierMode::Mock,
        }
    }

    /// Analyzes one text.
    pub async fn analyze(&self, text: &str) -> Result<SeverityScores, ClassifierError> {
        match self {
            Self::Real(classifier) => classifier.analyze(text).await,
            Self::Mock(classifier) => classifier.analyze(text).await,
        }
    }

    /// Classifies each message and aggregates per-message verdicts.
    pub async fn validate_messages(&self, messages: &[String]) -> ValidationReport {
        let mut results = Vec::with_capacity(messages.len());

        for (message_id, text) in messages.iter().enumerate() {
            match self.analyze(text).await {
                Ok(categories) => {
                    let approved = categories.is_approved();
                    debug!(
                        message_id,
                        approved,
                        max_severity = categories.max_severity(),
                        "Message classified"
                    );
                    results.push(MessageVerdict {
                        message_id,
                        text: text.clone(),
                        approved,
                        reason: match self {
                            Self::Real(_) => "evaluated by content-safety classifier".to_string(),
                            Self::Mock(_) => "mock evaluation (no classifier configured)".to_string(),
                        },
                        confidence: 1.0,
                        categories: Some(categories),
                    });
                }
                Err(e) => {
                    warn!(message_id, error = %e, "Message classification failed");
                    results.push(MessageVerdict {
                        message_id,
                        text: text.clone(),
                        approved: false,
                        reason: format!("classifier error: {}", e),
                        confidence: 0.0,
                        categories: None,
                    });
                }
            }
        }

        ValidationReport {
            all_approved: results.iter().all(|v| v.approved),
            total_checked: results.len(),
            mode: self.mode(),
            results,
        }
    }
}
