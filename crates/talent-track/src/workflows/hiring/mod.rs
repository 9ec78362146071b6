//! Job postings, applicant registry, scoring, and hiring pipeline tracking.

pub mod domain;
pub mod evaluation;
pub mod memory;
pub mod pipeline;
pub mod repository;
pub mod router;
pub mod search;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantCategory, ApplicantId, ApplicantSubmission, ApplicationId, Job, JobId,
    JobPosting, JobStatus, Stage,
};
pub use evaluation::{
    evaluate, EvaluationEngine, EvaluationOutcome, ScoreComponent, ScoreFactor, ScoringConfig,
};
pub use memory::InMemoryHiringRepository;
pub use pipeline::{JobPipeline, PipelineEntry, StageGroup};
pub use repository::{
    ApplicationRecord, ApplicationStatusView, HiringRepository, RecordKind, RepositoryError,
};
pub use router::hiring_router;
pub use search::ApplicantQuery;
pub use service::{ApplicationUpdate, ContactUpdate, HiringService, HiringServiceError};
