use serde::{Deserialize, Serialize};

/// Weights and thresholds for the fit score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub experience_threshold_years: u32,
    pub experience_bonus: i64,
    pub java_software_bonus: i64,
    pub python_data_science_bonus: i64,
    pub technical_points_per_year: i64,
    pub marketing_business_bonus: i64,
    pub non_technical_points_per_year: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            experience_threshold_years: 2,
            experience_bonus: 20,
            java_software_bonus: 40,
            python_data_science_bonus: 30,
            technical_points_per_year: 5,
            marketing_business_bonus: 35,
            non_technical_points_per_year: 3,
        }
    }
}
