use chrono::NaiveDate;

use crate::board::domain::{NewApplicant, NewJob, NewUser};

pub(super) fn recruiter(email: &str) -> NewUser {
    NewUser {
        name: "Priya Sharma".to_string(),
        email: email.to_string(),
        password: "hunter2-but-longer".to_string(),
    }
}

pub(super) fn engineer_posting(recruiter_id: u64) -> NewJob {
    NewJob {
        job_category: "IT".to_string(),
        job_designation: "Engineer".to_string(),
        job_location: "Remote".to_string(),
        company_name: "Acme".to_string(),
        salary: 50_000.0,
        apply_by: NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid deadline"),
        skills_required: vec!["go".to_string(), "sql".to_string()],
        number_of_opening: 2,
        recruiter_id,
    }
}

pub(super) fn applicant(name: &str, email: &str) -> NewApplicant {
    NewApplicant {
        name: name.to_string(),
        email: email.to_string(),
        contact: "1234567890".to_string(),
        resume_path: format!("/uploads/resume-{name}.pdf"),
    }
}
