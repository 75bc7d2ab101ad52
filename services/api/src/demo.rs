use chrono::{Duration, Local};
use clap::Args;
use easily::board::collaborators::{ApplicationReceipt, ConfirmationMailer};
use easily::board::{JobStore, NewApplicant, NewJob, NewUser, UserStore};
use easily::error::AppError;

use crate::infra::LogMailer;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of sample applications to submit against the demo posting
    #[arg(long, default_value_t = 2)]
    pub(crate) applicants: u32,
}

/// Walk the whole portal flow against fresh stores and print each step, the
/// way a stakeholder would click through the UI.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let users = UserStore::new();
    let jobs = JobStore::new();
    let mailer = LogMailer::default();

    println!("Easily job portal demo");

    let recruiter = users.save(NewUser {
        name: "Priya Sharma".to_string(),
        email: "priya@acme.example".to_string(),
        password: "demo-password".to_string(),
    });
    println!(
        "\nRegistered recruiter #{}: {} <{}>",
        recruiter.id, recruiter.name, recruiter.email
    );

    let job = jobs.save(NewJob {
        job_category: "IT".to_string(),
        job_designation: "Backend Engineer".to_string(),
        job_location: "Remote".to_string(),
        company_name: "Acme".to_string(),
        salary: 72_000.0,
        apply_by: (Local::now() + Duration::days(30)).date_naive(),
        skills_required: vec!["rust".to_string(), "sql".to_string()],
        number_of_opening: 2,
        recruiter_id: recruiter.id,
    });
    println!(
        "Posted job #{}: {} at {} ({}), apply by {}",
        job.id, job.job_designation, job.company_name, job.job_location, job.apply_by
    );

    for n in 1..=args.applicants {
        let name = format!("Applicant {n}");
        let email = format!("applicant{n}@seekers.example");
        let applicant = jobs
            .add_applicant(
                job.id,
                NewApplicant {
                    name: name.clone(),
                    email: email.clone(),
                    contact: "9876543210".to_string(),
                    resume_path: format!("/uploads/resume-demo-{n}.pdf"),
                },
            )
            .ok_or_else(|| AppError::Io(demo_store_error()))?;

        mailer.send(&ApplicationReceipt {
            applicant_name: applicant.name.clone(),
            applicant_email: applicant.email.clone(),
            job_designation: job.job_designation.clone(),
            company_name: job.company_name.clone(),
        })?;
        println!(
            "Application #{} received from {} ({})",
            applicant.id, applicant.name, applicant.email
        );
    }

    let stored = jobs
        .find_by_id(job.id)
        .ok_or_else(|| AppError::Io(demo_store_error()))?;
    println!(
        "\nApplicants for job #{} ({}):",
        stored.id, stored.job_designation
    );
    for applicant in &stored.applicants {
        println!(
            "- #{} {} | {} | {} | {}",
            applicant.id,
            applicant.name,
            applicant.email,
            applicant.contact,
            applicant.resume_path
        );
    }

    println!(
        "\nConfirmation mails recorded: {}",
        mailer.receipts().len()
    );

    Ok(())
}

fn demo_store_error() -> std::io::Error {
    std::io::Error::new(
        std::io::ErrorKind::Other,
        "demo job vanished from the store",
    )
}
