use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for posted jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for registered applicants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Identifier wrapper for applications linking an applicant to a job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a posting is still taking applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Closed => "Closed",
        }
    }
}

/// Caller-supplied details for a new posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub department: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
    pub posted_at: DateTime<Utc>,
}

/// Applicant kind plus the attributes only that kind carries.
///
/// The category is fixed once the applicant is registered and decides which
/// scoring rules apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ApplicantCategory {
    Generic,
    Technical { specialty: String },
    NonTechnical { field_of_study: String },
}

impl ApplicantCategory {
    pub const fn label(&self) -> &'static str {
        match self {
            ApplicantCategory::Generic => "generic",
            ApplicantCategory::Technical { .. } => "technical",
            ApplicantCategory::NonTechnical { .. } => "non_technical",
        }
    }
}

/// Caller-supplied profile for a new applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSubmission {
    pub name: String,
    pub email: String,
    pub years_of_experience: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub category: ApplicantCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub applicant_id: ApplicantId,
    pub name: String,
    pub email: String,
    pub years_of_experience: u32,
    pub skills: Vec<String>,
    pub category: ApplicantCategory,
}

impl Applicant {
    /// Exact, case-sensitive skill membership.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|candidate| candidate == skill)
    }
}

/// Position of an application in the hiring pipeline.
///
/// Stage advancement accepts any label; labels outside the four canonical
/// stages are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Offer,
    Other(String),
}

impl Stage {
    /// Canonical stages in pipeline order.
    pub const PIPELINE: [Stage; 4] = [
        Stage::Applied,
        Stage::Screening,
        Stage::Interview,
        Stage::Offer,
    ];

    pub fn parse(label: &str) -> Self {
        match label {
            "Applied" => Stage::Applied,
            "Screening" => Stage::Screening,
            "Interview" => Stage::Interview,
            "Offer" => Stage::Offer,
            other => Stage::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Stage::Applied => "Applied",
            Stage::Screening => "Screening",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
            Stage::Other(label) => label,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Stage::Other(_))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Stage {
    fn from(value: String) -> Self {
        Stage::parse(&value)
    }
}

impl From<&str> for Stage {
    fn from(value: &str) -> Self {
        Stage::parse(value)
    }
}

impl From<Stage> for String {
    fn from(value: Stage) -> Self {
        match value {
            Stage::Other(label) => label,
            canonical => canonical.label().to_string(),
        }
    }
}
