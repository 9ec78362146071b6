use std::cmp::Reverse;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::domain::{
    Applicant, ApplicantId, ApplicantSubmission, ApplicationId, Job, JobId, JobPosting, JobStatus,
    Stage,
};
use super::evaluation::{EvaluationEngine, ScoringConfig};
use super::memory::InMemoryHiringRepository;
use super::pipeline::{JobPipeline, PipelineEntry, StageGroup};
use super::repository::{ApplicationRecord, HiringRepository, RecordKind, RepositoryError};
use super::search::ApplicantQuery;

const INITIAL_REMARKS: &str = "Initial Application";

/// Registry owning jobs, applicants and applications, plus the scoring engine.
///
/// Identifiers come from the repository, so several services may share one store.
pub struct HiringService<R> {
    repository: Arc<R>,
    engine: Arc<EvaluationEngine>,
}

/// Result of an in-place change to an application.
///
/// An unknown identifier is reported, not raised: nothing is stored and the
/// caller decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationUpdate {
    Updated(ApplicationRecord),
    NotFound(ApplicationId),
}

impl ApplicationUpdate {
    pub fn record(&self) -> Option<&ApplicationRecord> {
        match self {
            ApplicationUpdate::Updated(record) => Some(record),
            ApplicationUpdate::NotFound(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationUpdate::NotFound(_))
    }
}

/// Partial contact change; `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl HiringService<InMemoryHiringRepository> {
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryHiringRepository::default()),
            ScoringConfig::default(),
        )
    }
}

impl<R> HiringService<R>
where
    R: HiringRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(EvaluationEngine::new(config)),
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Post a new job. Postings are not de-duplicated.
    pub fn post_job(&self, posting: JobPosting) -> Result<Job, HiringServiceError> {
        let job = Job {
            job_id: JobId(self.repository.next_id(RecordKind::Job)?),
            title: posting.title,
            department: posting.department,
            location: posting.location,
            status: JobStatus::Open,
            posted_at: Utc::now(),
        };

        let stored = self.repository.insert_job(job)?;
        info!(job_id = %stored.job_id, title = %stored.title, "job posted");
        Ok(stored)
    }

    pub fn update_job_status(
        &self,
        job_id: &JobId,
        status: JobStatus,
    ) -> Result<Job, HiringServiceError> {
        let mut job = self
            .repository
            .fetch_job(job_id)?
            .ok_or_else(|| HiringServiceError::JobNotFound(job_id.clone()))?;
        job.status = status;
        self.repository.update_job(job.clone())?;
        info!(job_id = %job.job_id, status = job.status.label(), "job status updated");
        Ok(job)
    }

    pub fn add_applicant(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<Applicant, HiringServiceError> {
        let applicant = Applicant {
            applicant_id: ApplicantId(self.repository.next_id(RecordKind::Applicant)?),
            name: submission.name,
            email: submission.email,
            years_of_experience: submission.years_of_experience,
            skills: submission.skills,
            category: submission.category,
        };

        let stored = self.repository.insert_applicant(applicant)?;
        info!(
            applicant_id = %stored.applicant_id,
            category = stored.category.label(),
            "applicant added"
        );
        Ok(stored)
    }

    pub fn update_applicant_contact(
        &self,
        applicant_id: &ApplicantId,
        update: ContactUpdate,
    ) -> Result<Applicant, HiringServiceError> {
        let mut applicant = self
            .repository
            .fetch_applicant(applicant_id)?
            .ok_or_else(|| HiringServiceError::ApplicantNotFound(applicant_id.clone()))?;

        if let Some(name) = update.name {
            applicant.name = name;
        }
        if let Some(email) = update.email {
            applicant.email = email;
        }

        self.repository.update_applicant(applicant.clone())?;
        Ok(applicant)
    }

    /// Record an application, move it to screening and store its automated score.
    ///
    /// There is no eligibility check and repeat applications for the same
    /// applicant and job are kept as separate records.
    pub fn accept_application(
        &self,
        applicant: &Applicant,
        job: &Job,
    ) -> Result<ApplicationRecord, HiringServiceError> {
        let now = Utc::now();
        let record = ApplicationRecord {
            application_id: ApplicationId(self.repository.next_id(RecordKind::Application)?),
            applicant_id: applicant.applicant_id.clone(),
            job_id: job.job_id.clone(),
            stage: Stage::Applied,
            score: 0,
            remarks: INITIAL_REMARKS.to_string(),
            evaluation: None,
            submitted_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert_application(record)?;
        info!(
            application_id = %stored.application_id,
            applicant_id = %applicant.applicant_id,
            job_id = %job.job_id,
            "application submitted"
        );

        // Screening and the automated score land in one locked write.
        let outcome = self.engine.score(applicant, job);
        let total_score = outcome.total_score;
        let record = self
            .repository
            .modify_application(&stored.application_id, move |record| {
                record.stage = Stage::Screening;
                record.score = total_score;
                record.remarks = format!("Initial automated score: {total_score}");
                record.evaluation = Some(outcome);
                record.updated_at = Utc::now();
            })?
            .ok_or_else(|| HiringServiceError::ApplicationNotFound(stored.application_id.clone()))?;

        debug!(
            application_id = %record.application_id,
            score = record.score,
            "automated evaluation stored"
        );
        Ok(record)
    }

    /// Identifier-based variant of [`accept_application`](Self::accept_application).
    pub fn apply(
        &self,
        applicant_id: &ApplicantId,
        job_id: &JobId,
    ) -> Result<ApplicationRecord, HiringServiceError> {
        let applicant = self
            .repository
            .fetch_applicant(applicant_id)?
            .ok_or_else(|| HiringServiceError::ApplicantNotFound(applicant_id.clone()))?;
        let job = self
            .repository
            .fetch_job(job_id)?
            .ok_or_else(|| HiringServiceError::JobNotFound(job_id.clone()))?;

        self.accept_application(&applicant, &job)
    }

    /// Overwrite the stage of an application.
    ///
    /// Transitions are not checked: moving backwards or to a label outside the
    /// canonical pipeline is accepted as given. Canonical labels wrapped in
    /// `Stage::Other` are stored as their canonical stage.
    pub fn advance_stage(
        &self,
        application_id: &ApplicationId,
        stage: Stage,
    ) -> Result<ApplicationUpdate, HiringServiceError> {
        let stage = Stage::parse(stage.label());
        let updated = self.repository.modify_application(application_id, |record| {
            record.stage = stage;
            record.updated_at = Utc::now();
        })?;

        let Some(record) = updated else {
            warn!(application_id = %application_id, "stage change for unknown application");
            return Ok(ApplicationUpdate::NotFound(application_id.clone()));
        };

        info!(
            application_id = %record.application_id,
            stage = %record.stage,
            "application stage advanced"
        );
        Ok(ApplicationUpdate::Updated(record))
    }

    /// Overwrite the score and remarks left by the automated evaluation.
    ///
    /// The automated breakdown no longer describes the score, so it is dropped.
    pub fn record_score(
        &self,
        application_id: &ApplicationId,
        score: i64,
        remarks: impl Into<String>,
    ) -> Result<ApplicationUpdate, HiringServiceError> {
        let remarks = remarks.into();
        let updated = self.repository.modify_application(application_id, |record| {
            record.score = score;
            record.remarks = remarks;
            record.evaluation = None;
            record.updated_at = Utc::now();
        })?;

        match updated {
            Some(record) => Ok(ApplicationUpdate::Updated(record)),
            None => {
                warn!(application_id = %application_id, "score change for unknown application");
                Ok(ApplicationUpdate::NotFound(application_id.clone()))
            }
        }
    }

    pub fn search_applicants(
        &self,
        query: &ApplicantQuery,
    ) -> Result<Vec<Applicant>, HiringServiceError> {
        debug!(query = %query.describe(), "searching applicants");
        Ok(self
            .repository
            .applicants()?
            .into_iter()
            .filter(|applicant| query.matches(applicant))
            .collect())
    }

    pub fn search_by_skill(&self, skill: &str) -> Result<Vec<Applicant>, HiringServiceError> {
        self.search_applicants(&ApplicantQuery::Skill {
            skill: skill.to_string(),
        })
    }

    pub fn search_by_experience(
        &self,
        min_years: u32,
    ) -> Result<Vec<Applicant>, HiringServiceError> {
        self.search_applicants(&ApplicantQuery::MinimumExperience { min_years })
    }

    pub fn search_by_keyword(
        &self,
        keyword: &str,
        field: &str,
    ) -> Result<Vec<Applicant>, HiringServiceError> {
        self.search_applicants(&ApplicantQuery::Keyword {
            keyword: keyword.to_string(),
            field: field.to_string(),
        })
    }

    /// Applications for a job, highest score first; ties keep submission order.
    /// An unknown job yields an empty list.
    pub fn rank_by_score(
        &self,
        job_id: &JobId,
    ) -> Result<Vec<ApplicationRecord>, HiringServiceError> {
        let mut ranked = self.repository.applications_for_job(job_id)?;
        ranked.sort_by_key(|record| Reverse(record.score));
        debug!(job_id = %job_id, count = ranked.len(), "ranked applications");
        Ok(ranked)
    }

    /// Group a job's applications by canonical stage. `None` when the job is unknown.
    pub fn job_pipeline(&self, job_id: &JobId) -> Result<Option<JobPipeline>, HiringServiceError> {
        let Some(job) = self.repository.fetch_job(job_id)? else {
            warn!(job_id = %job_id, "pipeline requested for unknown job");
            return Ok(None);
        };

        let applications = self.repository.applications_for_job(job_id)?;
        let mut stages = Vec::with_capacity(Stage::PIPELINE.len());
        for stage in Stage::PIPELINE {
            let entries = applications
                .iter()
                .filter(|record| record.stage == stage)
                .map(|record| self.pipeline_entry(record))
                .collect::<Result<Vec<_>, RepositoryError>>()?;
            stages.push(StageGroup { stage, entries });
        }

        Ok(Some(JobPipeline {
            job,
            total_applications: applications.len(),
            stages,
        }))
    }

    fn pipeline_entry(&self, record: &ApplicationRecord) -> Result<PipelineEntry, RepositoryError> {
        // Applications may reference applicants that were never registered.
        let applicant_name = match self.repository.fetch_applicant(&record.applicant_id)? {
            Some(applicant) => applicant.name,
            None => record.applicant_id.0.clone(),
        };

        Ok(PipelineEntry {
            application_id: record.application_id.clone(),
            applicant_name,
            score: record.score,
            remarks: record.remarks.clone(),
        })
    }

    pub fn job(&self, job_id: &JobId) -> Result<Option<Job>, HiringServiceError> {
        Ok(self.repository.fetch_job(job_id)?)
    }

    pub fn applicant(
        &self,
        applicant_id: &ApplicantId,
    ) -> Result<Option<Applicant>, HiringServiceError> {
        Ok(self.repository.fetch_applicant(applicant_id)?)
    }

    pub fn application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, HiringServiceError> {
        self.repository
            .fetch_application(application_id)?
            .ok_or_else(|| HiringServiceError::ApplicationNotFound(application_id.clone()))
    }

    pub fn jobs(&self) -> Result<Vec<Job>, HiringServiceError> {
        Ok(self.repository.jobs()?)
    }

    pub fn applicants(&self) -> Result<Vec<Applicant>, HiringServiceError> {
        Ok(self.repository.applicants()?)
    }

    pub fn applications(&self) -> Result<Vec<ApplicationRecord>, HiringServiceError> {
        Ok(self.repository.applications()?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HiringServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("applicant {0} not found")]
    ApplicantNotFound(ApplicantId),
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
}

impl HiringServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HiringServiceError::JobNotFound(_)
                | HiringServiceError::ApplicantNotFound(_)
                | HiringServiceError::ApplicationNotFound(_)
                | HiringServiceError::Repository(RepositoryError::NotFound)
        )
    }
}
