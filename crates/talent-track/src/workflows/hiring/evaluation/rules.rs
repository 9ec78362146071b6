use super::super::domain::{Applicant, ApplicantCategory, Job};
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_applicant(
    applicant: &Applicant,
    job: &Job,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, i64) {
    let mut components = Vec::new();
    let years = i64::from(applicant.years_of_experience);

    if applicant.years_of_experience >= config.experience_threshold_years {
        components.push(ScoreComponent {
            factor: ScoreFactor::Experience,
            score: config.experience_bonus,
            notes: format!(
                "{} years meets the {}-year experience threshold",
                applicant.years_of_experience, config.experience_threshold_years
            ),
        });
    }

    match &applicant.category {
        ApplicantCategory::Generic => {}
        ApplicantCategory::Technical { .. } => {
            let title = job.title.to_lowercase();

            if applicant.has_skill("Java") && title.contains("software") {
                components.push(ScoreComponent {
                    factor: ScoreFactor::SkillMatch,
                    score: config.java_software_bonus,
                    notes: format!("Java skill fits '{}'", job.title),
                });
            }
            if applicant.has_skill("Python") && title.contains("data science") {
                components.push(ScoreComponent {
                    factor: ScoreFactor::SkillMatch,
                    score: config.python_data_science_bonus,
                    notes: format!("Python skill fits '{}'", job.title),
                });
            }

            push_tenure(
                &mut components,
                years,
                config.technical_points_per_year,
                "technical",
            );
        }
        ApplicantCategory::NonTechnical { field_of_study } => {
            if job.department.eq_ignore_ascii_case("Marketing")
                && field_of_study.eq_ignore_ascii_case("Business")
            {
                components.push(ScoreComponent {
                    factor: ScoreFactor::FieldOfStudy,
                    score: config.marketing_business_bonus,
                    notes: format!("{field_of_study} background fits the Marketing department"),
                });
            }

            push_tenure(
                &mut components,
                years,
                config.non_technical_points_per_year,
                "non-technical",
            );
        }
    }

    let total_score = components.iter().map(|component| component.score).sum();
    (components, total_score)
}

fn push_tenure(components: &mut Vec<ScoreComponent>, years: i64, per_year: i64, kind: &str) {
    let score = years * per_year;
    if score == 0 {
        return;
    }
    components.push(ScoreComponent {
        factor: ScoreFactor::Tenure,
        score,
        notes: format!("{years} year(s) at {per_year} point(s) per {kind} year"),
    });
}
