use serde::{Deserialize, Serialize};

/// Per-category severity below which a message is considered acceptable.
pub const SEVERITY_APPROVAL_CUTOFF: u8 = 2;

/// Severity per harm category, as reported by the text-safety classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeverityScores {
    pub hate: u8,
    pub sexual: u8,
    pub violence: u8,
    pub self_harm: u8,
}

impl SeverityScores {
    /// Highest severity across categories.
    pub fn max_severity(&self) -> u8 {
        self.hate
            .max(self.sexual)
            .max(self.violence)
            .max(self.self_harm)
    }

    /// `true` when every category is below the approval cutoff.
    pub fn is_approved(&self) -> bool {
        self.max_severity() < SEVERITY_APPROVAL_CUTOFF
    }
}

/// Which classifier backend produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    Real,
    Mock,
}

/// Verdict for a single message in a validation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageVerdict {
    /// Index of the message within the submitted batch.
    pub message_id: usize,
    pub text: String,
    pub approved: bool,
    pub reason: String,
    pub confidence: f32,
    /// Absent when classification of this message failed.
    pub categories: Option<SeverityScores>,
}

/// Aggregated outcome of a validation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub results: Vec<MessageVerdict>,
    pub all_approved: bool,
    pub total_checked: usize,
    pub mode: ClassifierMode,
}
