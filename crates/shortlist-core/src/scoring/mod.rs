//! Vector similarity scoring.
//!
//! Pure functions; no side effects. Callers that treat a degenerate vector
//! as "no similarity" should map [`ScoringError::DegenerateVector`] to a
//! score of 0 instead of propagating it.

pub mod error;


pub use error::ScoringError;

/// Scale factor for the 4 decimal places kept in reported scores.
const SCORE_SCALE: f32 = 10_000.0;

/// Cosine similarity between two equal-length vectors, in `[-1, 1]`.
///
/// Fails with [`ScoringError::DimensionMismatch`] on unequal or empty inputs
/// and [`ScoringError::DegenerateVector`] when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoringError> {
    if a.len() != b.len() || a.is_empty() {
        return Err(ScoringError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(ScoringError::DegenerateVector);
    }

    Ok(dot_product / (norm_a * norm_b))
}

/// Rounds a similarity score to 4 decimal places for result assembly.
pub fn round_score(score: f32) -> f32 {
    (score * SCORE_SCALE).round() / SCORE_SCALE
}
