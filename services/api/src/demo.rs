use clap::Args;
use talent_track::error::AppError;
use talent_track::workflows::hiring::{
    Applicant, ApplicantCategory, ApplicantId, ApplicantSubmission, ApplicationUpdate,
    HiringRepository, HiringService, Job, JobPosting, Stage,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the applicant search portion of the demo.
    #[arg(long)]
    pub(crate) skip_search: bool,
    /// Print pipeline reports as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = HiringService::in_memory();

    println!("--- Posting Jobs ---");
    let software = post(&service, "Software Engineer", "Engineering", "New York")?;
    let marketing = post(&service, "Marketing Manager", "Marketing", "London")?;

    println!("\n--- Adding Applicants ---");
    let alice = register(
        &service,
        "Alice",
        5,
        &["Java", "Spring", "SQL", "Cloud"],
        ApplicantCategory::Technical {
            specialty: "Backend Development".to_string(),
        },
    )?;
    let bob = register(
        &service,
        "Bob",
        8,
        &["Project Management", "Strategy", "Budgeting"],
        ApplicantCategory::NonTechnical {
            field_of_study: "Business".to_string(),
        },
    )?;
    let charlie = register(
        &service,
        "Charlie",
        2,
        &["Python", "Data Science", "Machine Learning"],
        ApplicantCategory::Technical {
            specialty: "Data Science".to_string(),
        },
    )?;
    let david = register(
        &service,
        "David",
        4,
        &["Content Creation", "Social Media"],
        ApplicantCategory::NonTechnical {
            field_of_study: "Communications".to_string(),
        },
    )?;

    println!("\n--- Accepting Applications ---");
    for (applicant, job) in [
        (&alice, &software),
        (&david, &software),
        (&bob, &marketing),
        (&charlie, &software),
        (&bob, &software),
    ] {
        let record = service.accept_application(applicant, job)?;
        println!(
            "Application {} for {} -> {} ({})",
            record.application_id, applicant.name, job.title, record.remarks
        );
    }

    println!("\n--- Advancing Application Stages ---");
    let charlie_application = service
        .rank_by_score(&software.job_id)?
        .into_iter()
        .find(|record| record.applicant_id == charlie.applicant_id);
    if let Some(record) = charlie_application {
        for stage in [Stage::Interview, Stage::Offer] {
            match service.advance_stage(&record.application_id, stage)? {
                ApplicationUpdate::Updated(updated) => println!(
                    "Application for {} advanced to stage: {}",
                    charlie.name, updated.stage
                ),
                ApplicationUpdate::NotFound(id) => {
                    println!("Application with ID {id} not found.")
                }
            }
        }
    }

    for job in [&software, &marketing] {
        print_pipeline(&service, job, args.json)?;
    }

    println!("\n--- Ranking Candidates for {} ---", software.title);
    for record in service.rank_by_score(&software.job_id)? {
        let name = applicant_name(&service, &record.applicant_id)?;
        println!(
            "  - {} (Score: {}, Stage: {})",
            name, record.score, record.stage
        );
    }

    if args.skip_search {
        return Ok(());
    }

    println!("\n--- Searching Applicants ---");
    println!(
        "Applicants with 'Java' skill: {:?}",
        names(service.search_by_skill("Java")?)
    );
    println!(
        "Applicants with >= 5 years of experience: {:?}",
        names(service.search_by_experience(5)?)
    );
    println!(
        "Applicants with 'dav' in their name: {:?}",
        names(service.search_by_keyword("dav", "name")?)
    );

    Ok(())
}

fn post<R>(
    service: &HiringService<R>,
    title: &str,
    department: &str,
    location: &str,
) -> Result<Job, AppError>
where
    R: HiringRepository + 'static,
{
    let job = service.post_job(JobPosting {
        title: title.to_string(),
        department: department.to_string(),
        location: location.to_string(),
    })?;
    println!("Job '{}' posted as {}.", job.title, job.job_id);
    Ok(job)
}

fn register<R>(
    service: &HiringService<R>,
    name: &str,
    years_of_experience: u32,
    skills: &[&str],
    category: ApplicantCategory,
) -> Result<Applicant, AppError>
where
    R: HiringRepository + 'static,
{
    let applicant = service.add_applicant(ApplicantSubmission {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        years_of_experience,
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        category,
    })?;
    println!(
        "Applicant '{}' added as {} ({}).",
        applicant.name,
        applicant.applicant_id,
        applicant.category.label()
    );
    Ok(applicant)
}

fn print_pipeline<R>(service: &HiringService<R>, job: &Job, json: bool) -> Result<(), AppError>
where
    R: HiringRepository + 'static,
{
    let Some(pipeline) = service.job_pipeline(&job.job_id)? else {
        println!("Job not found.");
        return Ok(());
    };

    println!();
    if json {
        match serde_json::to_string_pretty(&pipeline) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Pipeline payload unavailable: {err}"),
        }
    } else {
        print!("{pipeline}");
    }
    Ok(())
}

fn applicant_name<R>(
    service: &HiringService<R>,
    applicant_id: &ApplicantId,
) -> Result<String, AppError>
where
    R: HiringRepository + 'static,
{
    Ok(service
        .applicant(applicant_id)?
        .map(|applicant| applicant.name)
        .unwrap_or_else(|| applicant_id.0.clone()))
}

fn names(applicants: Vec<Applicant>) -> Vec<String> {
    applicants
        .into_iter()
        .map(|applicant| applicant.name)
        .collect()
}
