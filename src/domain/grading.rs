//! Score to grade-point mapping.
//!
//! The same thresholds are implemented server-side by the SQL function
//! `calculate_grade_point` (see `migrations/`). Both must stay identical;
//! `tests/grading_parity.rs` compares them on the boundary scores.

/// Lowest score that counts as a pass.
pub const PASSING_SCORE: f64 = 60.0;

/// Inclusive lower bounds of each tier, highest first.
const TIERS: [(f64, f64); 4] = [(90.0, 4.0), (80.0, 3.0), (70.0, 2.0), (PASSING_SCORE, 1.0)];

/// Returns the grade point for a score on the four-tier scale.
///
/// The function is total: anything below 60 (negative values and NaN
/// included) maps to `0.0`. Range checking belongs to the caller.
///
/// | Score   | Grade point |
/// |---------|-------------|
/// | >= 90   | 4.0 |
/// | 80..90  | 3.0 |
/// | 70..80  | 2.0 |
/// | 60..70  | 1.0 |
/// | < 60    | 0.0 |
pub fn grade_point(score: f64) -> f64 {
    TIERS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map(|(_, point)| *point)
        .unwrap_or(0.0)
}

/// Returns whether a score is a pass (`score >= 60`).
pub fn is_passed(score: f64) -> bool {
    score >= PASSING_SCORE
}
