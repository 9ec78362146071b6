use serde::{Deserialize, Serialize};

use super::domain::Applicant;

/// Applicant filters supported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum ApplicantQuery {
    /// Exact, case-sensitive membership in the skill list.
    Skill { skill: String },
    /// Inclusive lower bound on years of experience.
    MinimumExperience { min_years: u32 },
    /// Case-insensitive substring match on the field named by `field`
    /// (`name` or `email`). Any other field name matches nothing.
    Keyword { keyword: String, field: String },
}

impl ApplicantQuery {
    pub fn matches(&self, applicant: &Applicant) -> bool {
        match self {
            ApplicantQuery::Skill { skill } => applicant.has_skill(skill),
            ApplicantQuery::MinimumExperience { min_years } => {
                applicant.years_of_experience >= *min_years
            }
            ApplicantQuery::Keyword { keyword, field } => {
                let needle = keyword.to_lowercase();
                match KeywordField::parse(field) {
                    Some(KeywordField::Name) => applicant.name.to_lowercase().contains(&needle),
                    Some(KeywordField::Email) => applicant.email.to_lowercase().contains(&needle),
                    None => false,
                }
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ApplicantQuery::Skill { skill } => format!("skill '{skill}'"),
            ApplicantQuery::MinimumExperience { min_years } => {
                format!("at least {min_years} year(s) of experience")
            }
            ApplicantQuery::Keyword { keyword, field } => {
                format!("keyword '{keyword}' in {field}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeywordField {
    Name,
    Email,
}

impl KeywordField {
    fn parse(field: &str) -> Option<Self> {
        if field.eq_ignore_ascii_case("name") {
            Some(Self::Name)
        } else if field.eq_ignore_ascii_case("email") {
            Some(Self::Email)
        } else {
            None
        }
    }
}
