use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{Applicant, ApplicantId, ApplicationId, Job, JobId};
use super::repository::{ApplicationRecord, HiringRepository, RecordKind, RepositoryError};

/// Identifier index plus the order records were added in.
struct Collection<K, V> {
    order: Vec<K>,
    index: HashMap<K, V>,
}

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Collection<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn insert(&mut self, key: K, value: V) -> Result<(), RepositoryError> {
        if self.index.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        self.order.push(key.clone());
        self.index.insert(key, value);
        Ok(())
    }

    fn replace(&mut self, key: &K, value: V) -> Result<(), RepositoryError> {
        match self.index.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn modify<F>(&mut self, key: &K, change: F) -> Option<V>
    where
        F: FnOnce(&mut V),
    {
        let slot = self.index.get_mut(key)?;
        change(slot);
        Some(slot.clone())
    }

    fn get(&self, key: &K) -> Option<V> {
        self.index.get(key).cloned()
    }

    fn values(&self) -> Vec<V> {
        self.order
            .iter()
            .filter_map(|key| self.index.get(key).cloned())
            .collect()
    }
}

/// Last identifier issued per record kind.
#[derive(Default)]
struct Sequences {
    jobs: u64,
    applicants: u64,
    applications: u64,
}

impl Sequences {
    fn advance(&mut self, kind: RecordKind) -> u64 {
        let counter = match kind {
            RecordKind::Job => &mut self.jobs,
            RecordKind::Applicant => &mut self.applicants,
            RecordKind::Application => &mut self.applications,
        };
        *counter += 1;
        *counter
    }
}

#[derive(Default)]
struct Registry {
    sequences: Sequences,
    jobs: Collection<JobId, Job>,
    applicants: Collection<ApplicantId, Applicant>,
    applications: Collection<ApplicationId, ApplicationRecord>,
}

/// Process-local store; one mutex guards all three collections.
#[derive(Default, Clone)]
pub struct InMemoryHiringRepository {
    registry: Arc<Mutex<Registry>>,
}

impl InMemoryHiringRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Registry>, RepositoryError> {
        self.registry
            .lock()
            .map_err(|_| RepositoryError::Unavailable("registry mutex poisoned".to_string()))
    }
}

impl HiringRepository for InMemoryHiringRepository {
    fn next_id(&self, kind: RecordKind) -> Result<String, RepositoryError> {
        let sequence = self.lock()?.sequences.advance(kind);
        Ok(kind.format(sequence))
    }

    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError> {
        self.lock()?.jobs.insert(job.job_id.clone(), job.clone())?;
        Ok(job)
    }

    fn update_job(&self, job: Job) -> Result<(), RepositoryError> {
        let key = job.job_id.clone();
        self.lock()?.jobs.replace(&key, job)
    }

    fn fetch_job(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.lock()?.jobs.get(id))
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.lock()?.jobs.values())
    }

    fn insert_applicant(&self, applicant: Applicant) -> Result<Applicant, RepositoryError> {
        self.lock()?
            .applicants
            .insert(applicant.applicant_id.clone(), applicant.clone())?;
        Ok(applicant)
    }

    fn update_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError> {
        let key = applicant.applicant_id.clone();
        self.lock()?.applicants.replace(&key, applicant)
    }

    fn fetch_applicant(&self, id: &ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        Ok(self.lock()?.applicants.get(id))
    }

    fn applicants(&self) -> Result<Vec<Applicant>, RepositoryError> {
        Ok(self.lock()?.applicants.values())
    }

    fn insert_application(
        &self,
        record: ApplicationRecord,
    ) -> Result<ApplicationRecord, RepositoryError> {
        self.lock()?
            .applications
            .insert(record.application_id.clone(), record.clone())?;
        Ok(record)
    }

    fn modify_application<F>(
        &self,
        id: &ApplicationId,
        change: F,
    ) -> Result<Option<ApplicationRecord>, RepositoryError>
    where
        F: FnOnce(&mut ApplicationRecord),
    {
        Ok(self.lock()?.applications.modify(id, change))
    }

    fn fetch_application(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.applications.get(id))
    }

    fn applications(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.lock()?.applications.values())
    }
}
