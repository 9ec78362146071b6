use super::common::*;
use crate::workflows::hiring::domain::{ApplicationId, JobId, JobStatus, Stage};
use crate::workflows::hiring::repository::{HiringRepository, RepositoryError};
use crate::workflows::hiring::{
    ApplicantQuery, ApplicationUpdate, ContactUpdate, HiringService, HiringServiceError,
    ScoringConfig,
};
use std::sync::Arc;

#[test]
fn generated_identifiers_use_kind_prefixes() {
    let (service, _) = build_service();

    let job = service.post_job(software_posting()).expect("post job");
    let applicant = service.add_applicant(alice()).expect("add applicant");
    let record = service
        .accept_application(&applicant, &job)
        .expect("accept application");

    assert_eq!(job.job_id.0, "J-000001");
    assert_eq!(applicant.applicant_id.0, "A-000001");
    assert_eq!(record.application_id.0, "APP-000001");
    assert_eq!(job.status, JobStatus::Open);
}

#[test]
fn ranking_a_fresh_job_is_empty_until_someone_applies() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");

    assert!(service.rank_by_score(&job.job_id).expect("rank").is_empty());

    let applicant = service.add_applicant(alice()).expect("add applicant");
    service
        .accept_application(&applicant, &job)
        .expect("accept application");

    let ranked = service.rank_by_score(&job.job_id).expect("rank");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].stage, Stage::Screening);
    assert_eq!(ranked[0].score, 85);
    assert_eq!(ranked[0].remarks, "Initial automated score: 85");
    assert!(ranked[0].evaluation.is_some());
}

#[test]
fn ranking_sorts_descending_and_keeps_submission_order_for_ties() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");

    let mut ids = Vec::new();
    for submission in [david(), alice(), charlie(), bob()] {
        let applicant = service.add_applicant(submission).expect("add applicant");
        let record = service
            .accept_application(&applicant, &job)
            .expect("accept application");
        ids.push(record.application_id);
    }
    // Force a tie between David (first) and Charlie (third).
    let overridden = service
        .record_score(&ids[2], 32, "manual override")
        .expect("override score");
    let overridden = overridden.record().expect("record updated");
    assert_eq!(overridden.remarks, "manual override");
    assert!(
        overridden.evaluation.is_none(),
        "a manual score replaces the automated breakdown"
    );

    let ranked = service.rank_by_score(&job.job_id).expect("rank");
    let order: Vec<_> = ranked
        .iter()
        .map(|record| (record.application_id.clone(), record.score))
        .collect();

    assert_eq!(
        order,
        vec![
            (ids[1].clone(), 85),
            (ids[3].clone(), 44),
            (ids[0].clone(), 32),
            (ids[2].clone(), 32),
        ]
    );
}

#[test]
fn ranking_unknown_job_yields_empty_list() {
    let (service, _) = build_service();
    let ranked = service
        .rank_by_score(&JobId("J-missing".to_string()))
        .expect("rank");
    assert!(ranked.is_empty());
}

#[test]
fn advance_stage_on_unknown_id_changes_nothing() {
    let (service, repository) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let applicant = service.add_applicant(alice()).expect("add applicant");
    service
        .accept_application(&applicant, &job)
        .expect("accept application");
    let before = repository.applications().expect("list");

    let outcome = service
        .advance_stage(&ApplicationId("APP-unknown".to_string()), Stage::Offer)
        .expect("advance does not fail");

    assert_eq!(
        outcome,
        ApplicationUpdate::NotFound(ApplicationId("APP-unknown".to_string()))
    );
    assert!(outcome.is_not_found());
    assert_eq!(repository.applications().expect("list"), before);
}

#[test]
fn advance_stage_overwrites_without_ordering_checks() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let applicant = service.add_applicant(alice()).expect("add applicant");
    let record = service
        .accept_application(&applicant, &job)
        .expect("accept application");

    service
        .advance_stage(&record.application_id, Stage::Offer)
        .expect("advance");
    let update = service
        .advance_stage(&record.application_id, Stage::Applied)
        .expect("move back");

    let stored = update.record().expect("record updated");
    assert_eq!(stored.stage, Stage::Applied);
    assert_eq!(stored.score, 85, "stage changes keep the score");
}

#[test]
fn out_of_set_stage_is_stored_but_left_out_of_pipeline_groups() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let first = service.add_applicant(alice()).expect("add applicant");
    let second = service.add_applicant(david()).expect("add applicant");
    let parked = service
        .accept_application(&first, &job)
        .expect("accept application");
    service
        .accept_application(&second, &job)
        .expect("accept application");

    service
        .advance_stage(&parked.application_id, Stage::from("Rejected"))
        .expect("advance");

    let stored = service
        .application(&parked.application_id)
        .expect("application present");
    assert_eq!(stored.stage, Stage::Other("Rejected".to_string()));

    let pipeline = service
        .job_pipeline(&job.job_id)
        .expect("pipeline")
        .expect("job exists");
    assert_eq!(pipeline.total_applications, 2);
    assert_eq!(pipeline.listed_applications(), 1);
}

#[test]
fn canonical_label_wrapped_as_other_lands_in_its_stage() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let applicant = service.add_applicant(charlie()).expect("add applicant");
    let record = service
        .accept_application(&applicant, &job)
        .expect("accept application");

    let update = service
        .advance_stage(&record.application_id, Stage::Other("Offer".to_string()))
        .expect("advance");
    assert_eq!(update.record().expect("record updated").stage, Stage::Offer);

    let pipeline = service
        .job_pipeline(&job.job_id)
        .expect("pipeline")
        .expect("job exists");
    assert_eq!(pipeline.listed_applications(), 1);
    assert_eq!(
        pipeline.group(&Stage::Offer).expect("offer group").entries.len(),
        1
    );
}

#[test]
fn concurrent_stage_and_score_changes_are_both_kept() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let applicant = service.add_applicant(alice()).expect("add applicant");

    for _ in 0..25 {
        let record = service
            .accept_application(&applicant, &job)
            .expect("accept application");
        let id = record.application_id;

        std::thread::scope(|scope| {
            let scorer = scope.spawn(|| {
                for score in 0..500 {
                    service
                        .record_score(&id, score, "manual")
                        .expect("score update");
                }
            });
            service.advance_stage(&id, Stage::Offer).expect("advance");
            scorer.join().expect("scorer thread");
        });

        let stored = service.application(&id).expect("application present");
        assert_eq!(stored.stage, Stage::Offer);
        assert_eq!(stored.score, 499);
    }
}

#[test]
fn services_sharing_a_repository_draw_from_one_sequence() {
    let (first, repository) = build_service();
    let second = HiringService::new(repository.clone(), ScoringConfig::default());

    let one = first.post_job(software_posting()).expect("post job");
    let two = second.post_job(marketing_posting()).expect("post job");

    assert_eq!(one.job_id.0, "J-000001");
    assert_eq!(two.job_id.0, "J-000002");
    assert_eq!(second.jobs().expect("jobs").len(), 2);
}

#[test]
fn pipeline_groups_by_canonical_stage_order() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let alice = service.add_applicant(alice()).expect("add applicant");
    let charlie = service.add_applicant(charlie()).expect("add applicant");
    service
        .accept_application(&alice, &job)
        .expect("accept application");
    let charlie_app = service
        .accept_application(&charlie, &job)
        .expect("accept application");
    service
        .advance_stage(&charlie_app.application_id, Stage::Offer)
        .expect("advance");

    let pipeline = service
        .job_pipeline(&job.job_id)
        .expect("pipeline")
        .expect("job exists");

    let stages: Vec<_> = pipeline.stages.iter().map(|group| group.stage.clone()).collect();
    assert_eq!(stages, Stage::PIPELINE.to_vec());
    assert!(pipeline
        .group(&Stage::Applied)
        .expect("applied group")
        .entries
        .is_empty());
    let screening = pipeline.group(&Stage::Screening).expect("screening group");
    assert_eq!(screening.entries.len(), 1);
    assert_eq!(screening.entries[0].applicant_name, "Alice");
    let offer = pipeline.group(&Stage::Offer).expect("offer group");
    assert_eq!(offer.entries[0].applicant_name, "Charlie");
    assert_eq!(offer.entries[0].score, 30);

    let rendered = pipeline.to_string();
    assert!(rendered.contains("--- Job Pipeline for: Software Engineer ---"));
    assert!(rendered.contains("(No applicants in this stage)"));
    assert!(rendered.contains("Charlie (Score: 30, Remarks: Initial automated score: 30)"));
}

#[test]
fn pipeline_for_unknown_job_is_none() {
    let (service, _) = build_service();
    let pipeline = service
        .job_pipeline(&JobId("J-missing".to_string()))
        .expect("pipeline query succeeds");
    assert!(pipeline.is_none());
}

#[test]
fn pipeline_falls_back_to_id_for_unregistered_applicants() {
    let (service, _) = build_service();
    let posted = service.post_job(software_posting()).expect("post job");
    let walk_in = applicant(3, &["Java"], technical("Backend"));

    service
        .accept_application(&walk_in, &posted)
        .expect("accept application");

    let pipeline = service
        .job_pipeline(&posted.job_id)
        .expect("pipeline")
        .expect("job exists");
    let screening = pipeline.group(&Stage::Screening).expect("screening group");
    assert_eq!(screening.entries[0].applicant_name, "A-fixture");
}

#[test]
fn repeat_applications_are_kept_as_separate_records() {
    let (service, repository) = build_service();
    let job = service.post_job(software_posting()).expect("post job");
    let applicant = service.add_applicant(bob()).expect("add applicant");

    let first = service
        .accept_application(&applicant, &job)
        .expect("first application");
    let second = service
        .accept_application(&applicant, &job)
        .expect("second application");

    assert_ne!(first.application_id, second.application_id);
    assert_eq!(
        repository
            .applications_for_job(&job.job_id)
            .expect("list")
            .len(),
        2
    );
}

#[test]
fn searches_cover_skill_experience_and_keyword() {
    let (service, _) = build_service();
    for submission in [alice(), bob(), charlie(), david()] {
        service.add_applicant(submission).expect("add applicant");
    }

    let names = |applicants: Vec<crate::workflows::hiring::Applicant>| {
        applicants
            .into_iter()
            .map(|applicant| applicant.name)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        names(service.search_by_skill("Java").expect("search")),
        vec!["Alice"]
    );
    assert_eq!(
        names(service.search_by_experience(5).expect("search")),
        vec!["Alice", "Bob"]
    );
    assert_eq!(
        names(service.search_by_keyword("dav", "name").expect("search")),
        vec!["David"]
    );
    assert_eq!(
        names(service.search_by_keyword("EXAMPLE", "EMAIL").expect("search")).len(),
        4
    );
    assert!(service
        .search_by_keyword("alice", "phone")
        .expect("search")
        .is_empty());
}

#[test]
fn experience_search_is_inclusive_and_shrinks_as_threshold_grows() {
    let (service, _) = build_service();
    for submission in [alice(), bob(), charlie(), david()] {
        service.add_applicant(submission).expect("add applicant");
    }
    let all = service.applicants().expect("applicants");

    let mut previous = usize::MAX;
    for min_years in 0..=10 {
        let found = service
            .search_applicants(&ApplicantQuery::MinimumExperience { min_years })
            .expect("search");
        let expected: Vec<_> = all
            .iter()
            .filter(|applicant| applicant.years_of_experience >= min_years)
            .cloned()
            .collect();

        assert_eq!(found, expected, "min_years = {min_years}");
        assert!(found.len() <= previous);
        previous = found.len();
    }
}

#[test]
fn contact_and_status_mutators_persist() {
    let (service, repository) = build_service();
    let job = service.post_job(marketing_posting()).expect("post job");
    let applicant = service.add_applicant(bob()).expect("add applicant");

    service
        .update_job_status(&job.job_id, JobStatus::Closed)
        .expect("close job");
    service
        .update_applicant_contact(
            &applicant.applicant_id,
            ContactUpdate {
                name: None,
                email: Some("robert@example.com".to_string()),
            },
        )
        .expect("update contact");

    let stored_job = repository
        .fetch_job(&job.job_id)
        .expect("fetch")
        .expect("job present");
    let stored_applicant = repository
        .fetch_applicant(&applicant.applicant_id)
        .expect("fetch")
        .expect("applicant present");
    assert_eq!(stored_job.status, JobStatus::Closed);
    assert_eq!(stored_applicant.name, "Bob");
    assert_eq!(stored_applicant.email, "robert@example.com");
}

#[test]
fn closed_jobs_still_accept_applications() {
    let (service, _) = build_service();
    let job = service.post_job(marketing_posting()).expect("post job");
    let closed = service
        .update_job_status(&job.job_id, JobStatus::Closed)
        .expect("close job");
    let applicant = service.add_applicant(bob()).expect("add applicant");

    let record = service
        .accept_application(&applicant, &closed)
        .expect("accept application");
    assert_eq!(record.score, 79);
}

#[test]
fn apply_reports_unknown_references() {
    let (service, _) = build_service();
    let job = service.post_job(software_posting()).expect("post job");

    match service.apply(&crate::workflows::hiring::ApplicantId("A-404".to_string()), &job.job_id) {
        Err(HiringServiceError::ApplicantNotFound(id)) => assert_eq!(id.0, "A-404"),
        other => panic!("expected applicant not found, got {other:?}"),
    }

    let applicant = service.add_applicant(alice()).expect("add applicant");
    match service.apply(&applicant.applicant_id, &JobId("J-404".to_string())) {
        Err(HiringServiceError::JobNotFound(id)) => assert_eq!(id.0, "J-404"),
        other => panic!("expected job not found, got {other:?}"),
    }
}

#[test]
fn mutators_report_not_found() {
    let (service, _) = build_service();

    let status = service.update_job_status(&JobId("J-404".to_string()), JobStatus::Closed);
    assert!(matches!(status, Err(HiringServiceError::JobNotFound(_))));

    let score = service
        .record_score(&ApplicationId("APP-404".to_string()), 10, "n/a")
        .expect("score update does not fail");
    assert!(score.is_not_found());
}

#[test]
fn repository_failures_propagate() {
    let service = HiringService::new(Arc::new(UnavailableRepository), ScoringConfig::default());

    match service.post_job(software_posting()) {
        Err(HiringServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline")
        }
        other => panic!("expected repository failure, got {other:?}"),
    }
    assert!(service
        .rank_by_score(&JobId("J-000001".to_string()))
        .is_err());
}
