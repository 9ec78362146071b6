mod config;
mod rules;

pub use config::ScoringConfig;

use super::domain::{Applicant, Job};
use serde::{Deserialize, Serialize};

/// Applies the scoring rules for an applicant's category against a job.
///
/// Scoring is pure: neither the applicant nor the job is touched, and the
/// same inputs always produce the same outcome.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: ScoringConfig,
}

impl EvaluationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, applicant: &Applicant, job: &Job) -> EvaluationOutcome {
        let (components, total_score) = rules::score_applicant(applicant, job, &self.config);

        EvaluationOutcome {
            total_score,
            components,
        }
    }
}

/// Fit score under the default weights.
pub fn evaluate(applicant: &Applicant, job: &Job) -> i64 {
    EvaluationEngine::default().score(applicant, job).total_score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Experience,
    SkillMatch,
    FieldOfStudy,
    Tenure,
}

/// One contribution to a fit score, kept so a score can be explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub total_score: i64,
    pub components: Vec<ScoreComponent>,
}
