use std::sync::Arc;

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::workflows::hiring::domain::{
    Applicant, ApplicantCategory, ApplicantId, ApplicantSubmission, ApplicationId, Job, JobId,
    JobPosting, JobStatus,
};
use crate::workflows::hiring::evaluation::{EvaluationEngine, ScoringConfig};
use crate::workflows::hiring::memory::InMemoryHiringRepository;
use crate::workflows::hiring::repository::{
    ApplicationRecord, HiringRepository, RecordKind, RepositoryError,
};
use crate::workflows::hiring::{hiring_router, HiringService};

pub(super) fn job(title: &str, department: &str) -> Job {
    Job {
        job_id: JobId(format!("J-{}", title.to_lowercase().replace(' ', "-"))),
        title: title.to_string(),
        department: department.to_string(),
        location: "New York".to_string(),
        status: JobStatus::Open,
        posted_at: Utc::now(),
    }
}

pub(super) fn applicant(years: u32, skills: &[&str], category: ApplicantCategory) -> Applicant {
    Applicant {
        applicant_id: ApplicantId("A-fixture".to_string()),
        name: "Fixture".to_string(),
        email: "fixture@example.com".to_string(),
        years_of_experience: years,
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        category,
    }
}

pub(super) fn technical(specialty: &str) -> ApplicantCategory {
    ApplicantCategory::Technical {
        specialty: specialty.to_string(),
    }
}

pub(super) fn non_technical(field_of_study: &str) -> ApplicantCategory {
    ApplicantCategory::NonTechnical {
        field_of_study: field_of_study.to_string(),
    }
}

pub(super) fn software_posting() -> JobPosting {
    JobPosting {
        title: "Software Engineer".to_string(),
        department: "Engineering".to_string(),
        location: "New York".to_string(),
    }
}

pub(super) fn marketing_posting() -> JobPosting {
    JobPosting {
        title: "Marketing Manager".to_string(),
        department: "Marketing".to_string(),
        location: "London".to_string(),
    }
}

pub(super) fn alice() -> ApplicantSubmission {
    ApplicantSubmission {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        years_of_experience: 5,
        skills: vec![
            "Java".to_string(),
            "Spring".to_string(),
            "SQL".to_string(),
            "Cloud".to_string(),
        ],
        category: technical("Backend Development"),
    }
}

pub(super) fn bob() -> ApplicantSubmission {
    ApplicantSubmission {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        years_of_experience: 8,
        skills: vec![
            "Project Management".to_string(),
            "Strategy".to_string(),
            "Budgeting".to_string(),
        ],
        category: non_technical("Business"),
    }
}

pub(super) fn charlie() -> ApplicantSubmission {
    ApplicantSubmission {
        name: "Charlie".to_string(),
        email: "charlie@example.com".to_string(),
        years_of_experience: 2,
        skills: vec![
            "Python".to_string(),
            "Data Science".to_string(),
            "Machine Learning".to_string(),
        ],
        category: technical("Data Science"),
    }
}

pub(super) fn david() -> ApplicantSubmission {
    ApplicantSubmission {
        name: "David".to_string(),
        email: "david@example.com".to_string(),
        years_of_experience: 4,
        skills: vec!["Content Creation".to_string(), "Social Media".to_string()],
        category: non_technical("Communications"),
    }
}

pub(super) fn build_service() -> (
    HiringService<InMemoryHiringRepository>,
    Arc<InMemoryHiringRepository>,
) {
    let repository = Arc::new(InMemoryHiringRepository::default());
    let service = HiringService::new(repository.clone(), ScoringConfig::default());
    (service, repository)
}

pub(super) fn evaluation_engine() -> EvaluationEngine {
    EvaluationEngine::new(ScoringConfig::default())
}

pub(super) fn hiring_router_with_service(
    service: HiringService<InMemoryHiringRepository>,
) -> axum::Router {
    hiring_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) struct UnavailableRepository;

impl HiringRepository for UnavailableRepository {
    fn next_id(&self, _kind: RecordKind) -> Result<String, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_job(&self, _job: Job) -> Result<Job, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_job(&self, _job: Job) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_job(&self, _id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_applicant(&self, _applicant: Applicant) -> Result<Applicant, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_applicant(&self, _applicant: Applicant) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_applicant(&self, _id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_application(
        &self,
        _record: ApplicationRecord,
    ) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify_application<F>(
        &self,
        _id: &ApplicationId,
        _change: F,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord),
    {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_application(
        &self,
        _id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
