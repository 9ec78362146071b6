use std::fmt;

use serde::Serialize;

use super::domain::{ApplicationId, Job, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineEntry {
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub score: i64,
    pub remarks: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageGroup {
    pub stage: Stage,
    pub entries: Vec<PipelineEntry>,
}

/// A job's applications grouped under the canonical stages, in pipeline order.
///
/// Applications parked in a non-canonical stage count toward
/// `total_applications` but are not listed under any group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPipeline {
    pub job: Job,
    pub total_applications: usize,
    pub stages: Vec<StageGroup>,
}

impl JobPipeline {
    pub fn group(&self, stage: &Stage) -> Option<&StageGroup> {
        self.stages.iter().find(|group| &group.stage == stage)
    }

    pub fn listed_applications(&self) -> usize {
        self.stages.iter().map(|group| group.entries.len()).sum()
    }
}

impl fmt::Display for JobPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Job Pipeline for: {} ---", self.job.title)?;
        writeln!(f, "Total applications: {}", self.total_applications)?;

        for group in &self.stages {
            writeln!(f)?;
            writeln!(f, "--- Stage: {} ---", group.stage)?;
            if group.entries.is_empty() {
                writeln!(f, "  (No applicants in this stage)")?;
                continue;
            }
            for entry in &group.entries {
                writeln!(
                    f,
                    "  - {} (Score: {}, Remarks: {})",
                    entry.applicant_name, entry.score, entry.remarks
                )?;
            }
        }

        Ok(())
    }
}
