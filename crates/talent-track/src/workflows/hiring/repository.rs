use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Applicant, ApplicantId, ApplicationId, Job, JobId, Stage};
use super::evaluation::EvaluationOutcome;

/// Join record between one applicant and one job.
///
/// Applicant and job are referenced by identifier; the repository holds the
/// canonical records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub applicant_id: ApplicantId,
    pub job_id: JobId,
    pub stage: Stage,
    pub score: i64,
    pub remarks: String,
    pub evaluation: Option<EvaluationOutcome>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            applicant_id: self.applicant_id.clone(),
            job_id: self.job_id.clone(),
            stage: self.stage.label().to_string(),
            score: self.score,
            remarks: self.remarks.clone(),
        }
    }
}

/// Kind of record an identifier is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Job,
    Applicant,
    Application,
}

impl RecordKind {
    pub fn prefix(self) -> &'static str {
        match self {
            RecordKind::Job => "J",
            RecordKind::Applicant => "A",
            RecordKind::Application => "APP",
        }
    }

    /// Six-digit, zero-padded identifier such as `APP-000042`.
    pub fn format(self, sequence: u64) -> String {
        format!("{}-{sequence:06}", self.prefix())
    }
}

/// Storage abstraction so the hiring service can be exercised in isolation.
///
/// Listing methods return records in insertion order. Identifiers are issued by
/// the store, so every service sharing one store draws from the same sequences.
pub trait HiringRepository: Send + Sync {
    fn next_id(&self, kind: RecordKind) -> Result<String, RepositoryError>;

    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError>;
    fn update_job(&self, job: Job) -> Result<(), RepositoryError>;
    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    fn jobs(&self) -> Result<Vec<Job>, RepositoryError>;

    fn insert_applicant(&self, applicant: Applicant) -> Result<Applicant, RepositoryError>;
    fn update_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError>;
    fn fetch_applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError>;

    fn insert_application(
        &self,
        record: ApplicationRecord,
    ) -> Result<ApplicationRecord, RepositoryError>;
    /// Apply `change` to the stored record while holding the store's lock.
    /// `Ok(None)` when the identifier is unknown.
    fn modify_application<F>(
        &self,
        id: &ApplicationId,
        change: F,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord);
    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;

    fn applications_for_job(&self, id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self
            .applications()?
            .into_iter()
            .filter(|record| &record.job_id == id)
            .collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public projection of an application for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub applicant_id: ApplicantId,
    pub job_id: JobId,
    pub stage: String,
    pub score: i64,
    pub remarks: String,
}
