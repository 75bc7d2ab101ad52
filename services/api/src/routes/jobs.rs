use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use easily::board::collaborators::{
    ApplicationReceipt, ConfirmationMailer, ResumeStore, ResumeUpload,
};
use easily::board::{Job, JobPatch, NewApplicant, NewJob};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use validator::Validate;

use super::{authenticate, errors_response, validation_messages};
use crate::infra::Portal;

/// Posting form shared by create and update; `skillsRequired` arrives as the
/// portal's comma-separated string and `applyBy` as a YYYY-MM-DD date string.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobForm {
    #[validate(length(min = 1, message = "Job Category is required."))]
    pub(crate) job_category: String,
    #[validate(length(min = 1, message = "Job Designation is required."))]
    pub(crate) job_designation: String,
    #[validate(length(min = 1, message = "Job Location is required."))]
    pub(crate) job_location: String,
    #[validate(length(min = 1, message = "Company Name is required."))]
    pub(crate) company_name: String,
    #[validate(range(exclusive_min = 0.0, message = "Salary must be a positive number."))]
    pub(crate) salary: f64,
    pub(crate) apply_by: String,
    #[validate(length(min = 1, message = "Skills Required are required."))]
    pub(crate) skills_required: String,
    #[validate(range(min = 1, message = "Number of Openings must be a positive integer."))]
    pub(crate) number_of_opening: u32,
}

impl JobForm {
    /// Run field validation plus the date parse, exactly the set of checks
    /// the routing layer guarantees before the store is called.
    fn checked(&self) -> Result<(NaiveDate, Vec<String>), Vec<String>> {
        let mut messages = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_messages(&errors),
        };

        let apply_by = NaiveDate::parse_from_str(self.apply_by.trim(), "%Y-%m-%d");
        if apply_by.is_err() {
            messages.push("Apply By date must be a valid date.".to_string());
        }

        match apply_by {
            Ok(date) if messages.is_empty() => Ok((date, split_skills(&self.skills_required))),
            _ => Err(messages),
        }
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    pub(crate) search: Option<String>,
}

/// Keyword filter over the full listing; the store itself never filters.
fn matches_query(job: &Job, query: &str) -> bool {
    job.job_designation.to_lowercase().contains(query)
        || job.company_name.to_lowercase().contains(query)
        || job.job_location.to_lowercase().contains(query)
        || job
            .skills_required
            .iter()
            .any(|skill| skill.to_lowercase().contains(query))
}

pub(crate) async fn list_jobs_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    let search = params
        .search
        .map(|raw| raw.to_lowercase())
        .unwrap_or_default();

    let mut jobs = portal.jobs.find_all();
    if !search.is_empty() {
        jobs.retain(|job| matches_query(job, &search));
    }

    let body = json!({ "jobs": jobs, "searchQuery": search });
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn job_details_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Path(job_id): Path<u64>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    match portal.jobs.find_by_id(job_id) {
        Some(job) => (StatusCode::OK, Json(json!({ "job": job }))).into_response(),
        None => errors_response(StatusCode::NOT_FOUND, vec!["Job not found.".to_string()]),
    }
}

pub(crate) async fn create_job_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    headers: HeaderMap,
    Json(form): Json<JobForm>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    let recruiter = match authenticate(&portal, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let (apply_by, skills) = match form.checked() {
        Ok(parts) => parts,
        Err(messages) => return errors_response(StatusCode::UNPROCESSABLE_ENTITY, messages),
    };

    let job = portal.jobs.save(NewJob {
        job_category: form.job_category,
        job_designation: form.job_designation,
        job_location: form.job_location,
        company_name: form.company_name,
        salary: form.salary,
        apply_by,
        skills_required: skills,
        number_of_opening: form.number_of_opening,
        recruiter_id: recruiter.id,
    });

    let body = json!({ "success": "Job posted successfully!", "job": job });
    (StatusCode::CREATED, Json(body)).into_response()
}

pub(crate) async fn update_job_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Path(job_id): Path<u64>,
    headers: HeaderMap,
    Json(form): Json<JobForm>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    let recruiter = match authenticate(&portal, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let Some(existing) = portal.jobs.find_by_id(job_id) else {
        return errors_response(
            StatusCode::NOT_FOUND,
            vec!["Job not found for update.".to_string()],
        );
    };
    if existing.recruiter_id != recruiter.id {
        return errors_response(
            StatusCode::FORBIDDEN,
            vec!["You are not authorized to update this job.".to_string()],
        );
    }

    let (apply_by, skills) = match form.checked() {
        Ok(parts) => parts,
        Err(messages) => return errors_response(StatusCode::UNPROCESSABLE_ENTITY, messages),
    };

    // Full-form update: every field is replaced, the applicants list is
    // preserved by the store.
    let updated = portal.jobs.update(
        job_id,
        JobPatch {
            job_category: Some(form.job_category),
            job_designation: Some(form.job_designation),
            job_location: Some(form.job_location),
            company_name: Some(form.company_name),
            salary: Some(form.salary),
            apply_by: Some(apply_by),
            skills_required: Some(skills),
            number_of_opening: Some(form.number_of_opening),
        },
    );

    match updated {
        Some(job) => {
            let body = json!({ "success": "Job updated successfully!", "job": job });
            (StatusCode::OK, Json(body)).into_response()
        }
        None => errors_response(
            StatusCode::NOT_FOUND,
            vec!["Failed to update job.".to_string()],
        ),
    }
}

pub(crate) async fn delete_job_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Path(job_id): Path<u64>,
    headers: HeaderMap,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    let recruiter = match authenticate(&portal, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let Some(existing) = portal.jobs.find_by_id(job_id) else {
        return errors_response(
            StatusCode::NOT_FOUND,
            vec!["Job not found for deletion.".to_string()],
        );
    };
    if existing.recruiter_id != recruiter.id {
        return errors_response(
            StatusCode::FORBIDDEN,
            vec!["You are not authorized to delete this job.".to_string()],
        );
    }

    if portal.jobs.delete(job_id) {
        let body = json!({ "success": "Job deleted successfully!" });
        (StatusCode::OK, Json(body)).into_response()
    } else {
        errors_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            vec!["Failed to delete job.".to_string()],
        )
    }
}

pub(crate) async fn applicants_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Path(job_id): Path<u64>,
    headers: HeaderMap,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    let recruiter = match authenticate(&portal, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let Some(job) = portal.jobs.find_by_id(job_id) else {
        return errors_response(StatusCode::NOT_FOUND, vec!["Job not found.".to_string()]);
    };
    if job.recruiter_id != recruiter.id {
        return errors_response(
            StatusCode::FORBIDDEN,
            vec!["You are not authorized to view applicants for this job.".to_string()],
        );
    }

    let body = json!({ "applicants": job.applicants, "job": job });
    (StatusCode::OK, Json(body)).into_response()
}

/// Text fields of the application form; the resume file travels separately.
#[derive(Debug, Default, Validate)]
pub(crate) struct ApplyForm {
    #[validate(length(min = 1, message = "Name is required."))]
    pub(crate) name: String,
    #[validate(email(message = "Invalid email format."))]
    pub(crate) email: String,
    #[validate(length(min = 10, max = 15, message = "Contact must be 10-15 digits."))]
    pub(crate) contact: String,
}

pub(crate) async fn apply_handler<S, M>(
    State(portal): State<Arc<Portal<S, M>>>,
    Path(job_id): Path<u64>,
    mut multipart: Multipart,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    let mut form = ApplyForm::default();
    let mut resume: Option<ResumeUpload> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => {
                return errors_response(StatusCode::BAD_REQUEST, vec![err.to_string()]);
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "name" | "email" | "contact" => {
                let value = match field.text().await {
                    Ok(value) => value,
                    Err(err) => {
                        return errors_response(StatusCode::BAD_REQUEST, vec![err.to_string()]);
                    }
                };
                match name.as_str() {
                    "name" => form.name = value,
                    "email" => form.email = value,
                    _ => form.contact = value,
                }
            }
            "resume" => {
                let original_filename = field.file_name().unwrap_or_default().to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        return errors_response(StatusCode::BAD_REQUEST, vec![err.to_string()]);
                    }
                };
                resume = Some(ResumeUpload {
                    original_filename,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    submit_application(&portal, job_id, form, resume)
}

/// Everything after multipart decoding: validate, store the resume, commit
/// the applicant, then notify. Separated from the extractor so the flow can
/// be exercised directly.
pub(crate) fn submit_application<S, M>(
    portal: &Portal<S, M>,
    job_id: u64,
    form: ApplyForm,
    resume: Option<ResumeUpload>,
) -> Response
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    if let Err(errors) = form.validate() {
        return errors_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            validation_messages(&errors),
        );
    }

    let Some(upload) = resume else {
        return errors_response(
            StatusCode::BAD_REQUEST,
            vec!["Resume upload failed or no file selected.".to_string()],
        );
    };

    // The resume is persisted before the applicant record so a storage
    // failure leaves the job untouched.
    let resume_path = match portal.resumes.store(upload) {
        Ok(path) => path,
        Err(err) => return errors_response(StatusCode::BAD_REQUEST, vec![err.to_string()]),
    };

    let applicant = portal.jobs.add_applicant(
        job_id,
        NewApplicant {
            name: form.name,
            email: form.email,
            contact: form.contact,
            resume_path,
        },
    );

    let Some(applicant) = applicant else {
        return errors_response(
            StatusCode::NOT_FOUND,
            vec!["Failed to submit application. Job might not exist.".to_string()],
        );
    };

    // The applicant is committed at this point; a mail failure is logged and
    // never rolls it back.
    if let Some(job) = portal.jobs.find_by_id(job_id) {
        let receipt = ApplicationReceipt {
            applicant_name: applicant.name.clone(),
            applicant_email: applicant.email.clone(),
            job_designation: job.job_designation,
            company_name: job.company_name,
        };
        if let Err(err) = portal.mailer.send(&receipt) {
            warn!(job_id, applicant_id = applicant.id, %err, "confirmation mail failed");
        }
    }

    let body = json!({ "success": "Application submitted successfully!", "applicant": applicant });
    (StatusCode::CREATED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::tests_support::{body_json, test_portal, TestPortal};
    use crate::routes::portal_router;
    use axum::body::Body;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use axum::http::Request;
    use easily::board::NewUser;
    use tower::ServiceExt;

    fn recruiter_headers(portal: &Arc<TestPortal>, email: &str) -> HeaderMap {
        let user = portal.users.save(NewUser {
            name: "Priya".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
        });
        let token = portal.sessions.create(crate::infra::SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: "recruiter",
        });
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {token}").parse().expect("header value"),
        );
        headers
    }

    fn engineer_form() -> JobForm {
        JobForm {
            job_category: "IT".to_string(),
            job_designation: "Engineer".to_string(),
            job_location: "Remote".to_string(),
            company_name: "Acme".to_string(),
            salary: 50_000.0,
            apply_by: "2026-10-15".to_string(),
            skills_required: "go, sql".to_string(),
            number_of_opening: 2,
        }
    }

    fn apply_form(name: &str) -> ApplyForm {
        ApplyForm {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            contact: "1234567890".to_string(),
        }
    }

    fn resume(filename: &str) -> Option<ResumeUpload> {
        Some(ResumeUpload {
            original_filename: filename.to_string(),
            bytes: b"%PDF-1.4 minimal".to_vec(),
        })
    }

    async fn create_job(portal: &Arc<TestPortal>, headers: &HeaderMap) -> u64 {
        let response = create_job_handler(
            State(portal.clone()),
            headers.clone(),
            Json(engineer_form()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        body["job"]["_id"].as_u64().expect("job id")
    }

    #[tokio::test]
    async fn create_requires_a_recruiter_session() {
        let portal = test_portal();
        let response = create_job_handler(
            State(portal.clone()),
            HeaderMap::new(),
            Json(engineer_form()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_splits_comma_separated_skills() {
        let portal = test_portal();
        let headers = recruiter_headers(&portal, "r@easily.test");
        let job_id = create_job(&portal, &headers).await;

        let job = portal.jobs.find_by_id(job_id).expect("job stored");
        assert_eq!(job.skills_required, vec!["go", "sql"]);
        assert_eq!(job.recruiter_id, 1);
        assert!(job.applicants.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_invalid_form() {
        let portal = test_portal();
        let headers = recruiter_headers(&portal, "r@easily.test");
        let mut form = engineer_form();
        form.salary = 0.0;
        form.apply_by = "soon".to_string();

        let response = create_job_handler(State(portal.clone()), headers, Json(form)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        let messages: Vec<String> = body["errors"]
            .as_array()
            .expect("error array")
            .iter()
            .map(|err| err["msg"].as_str().expect("msg").to_string())
            .collect();
        assert!(messages.contains(&"Salary must be a positive number.".to_string()));
        assert!(messages.contains(&"Apply By date must be a valid date.".to_string()));
    }

    #[tokio::test]
    async fn listing_filters_by_keyword() {
        let portal = test_portal();
        let headers = recruiter_headers(&portal, "r@easily.test");
        create_job(&portal, &headers).await;
        let mut other = engineer_form();
        other.job_designation = "Designer".to_string();
        other.skills_required = "figma".to_string();
        other.company_name = "Globex".to_string();
        create_job_handler(State(portal.clone()), headers.clone(), Json(other)).await;

        let response = list_jobs_handler(
            State(portal.clone()),
            Query(ListParams {
                search: Some("SQL".to_string()),
            }),
        )
        .await;
        let body = body_json(response).await;
        let jobs = body["jobs"].as_array().expect("jobs array");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["jobDesignation"], "Engineer");
        assert_eq!(body["searchQuery"], "sql");
    }

    #[tokio::test]
    async fn details_return_sentinel_not_found() {
        let portal = test_portal();
        let response = job_details_handler(State(portal.clone()), Path(42)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["msg"], "Job not found.");
    }

    #[tokio::test]
    async fn update_is_owner_only_and_preserves_applicants() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;
        submit_application(&portal, job_id, apply_form("Asha"), resume("cv.pdf"));

        let intruder = recruiter_headers(&portal, "intruder@easily.test");
        let response = update_job_handler(
            State(portal.clone()),
            Path(job_id),
            intruder,
            Json(engineer_form()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let mut form = engineer_form();
        form.job_designation = "Senior Engineer".to_string();
        let response =
            update_job_handler(State(portal.clone()), Path(job_id), owner, Json(form)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["job"]["jobDesignation"], "Senior Engineer");
        assert_eq!(
            body["job"]["applicants"].as_array().expect("applicants").len(),
            1
        );
    }

    #[tokio::test]
    async fn delete_is_owner_only() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;

        let intruder = recruiter_headers(&portal, "intruder@easily.test");
        let response = delete_job_handler(State(portal.clone()), Path(job_id), intruder).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(portal.jobs.find_by_id(job_id).is_some());

        let response = delete_job_handler(State(portal.clone()), Path(job_id), owner).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(portal.jobs.find_by_id(job_id).is_none());
    }

    #[tokio::test]
    async fn applicants_view_is_owner_only() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;
        submit_application(&portal, job_id, apply_form("Asha"), resume("cv.pdf"));

        let response =
            applicants_handler(State(portal.clone()), Path(job_id), owner.clone()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(
            body["applicants"].as_array().expect("applicants").len(),
            1
        );

        let intruder = recruiter_headers(&portal, "intruder@easily.test");
        let response = applicants_handler(State(portal.clone()), Path(job_id), intruder).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn application_commits_and_sends_confirmation() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;

        let response = submit_application(&portal, job_id, apply_form("Asha"), resume("cv.pdf"));
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["applicant"]["_id"], 1);
        assert_eq!(body["applicant"]["resumePath"], "/uploads/cv.pdf");

        let receipts = portal.mailer.receipts();
        assert_eq!(receipts.len(), 1);
        assert_eq!(receipts[0].applicant_email, "asha@x.com");
        assert_eq!(receipts[0].job_designation, "Engineer");
        assert_eq!(receipts[0].company_name, "Acme");

        let second = submit_application(&portal, job_id, apply_form("Ben"), resume("cv.pdf"));
        let body = body_json(second).await;
        assert_eq!(body["applicant"]["_id"], 2);
    }

    #[tokio::test]
    async fn application_without_resume_is_rejected() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;

        let response = submit_application(&portal, job_id, apply_form("Asha"), None);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body["errors"][0]["msg"],
            "Resume upload failed or no file selected."
        );
        assert!(portal
            .jobs
            .find_by_id(job_id)
            .expect("job present")
            .applicants
            .is_empty());
    }

    #[tokio::test]
    async fn application_against_missing_job_is_rejected() {
        let portal = test_portal();
        let response = submit_application(&portal, 99, apply_form("Asha"), resume("cv.pdf"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(
            body["errors"][0]["msg"],
            "Failed to submit application. Job might not exist."
        );
        assert!(portal.mailer.receipts().is_empty());
    }

    #[tokio::test]
    async fn application_validates_contact_length() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;

        let mut form = apply_form("Asha");
        form.contact = "12345".to_string();
        let response = submit_application(&portal, job_id, form, resume("cv.pdf"));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["msg"], "Contact must be 10-15 digits.");
    }

    fn multipart_application(resume_bytes: &[u8]) -> (String, Vec<u8>) {
        let boundary = "easily-application-form";
        let mut body = Vec::new();
        for (name, value) in [
            ("name", "Asha"),
            ("email", "asha@x.com"),
            ("contact", "1234567890"),
        ] {
            body.extend_from_slice(
                format!(
                    "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"resume\"; \
                 filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(resume_bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={boundary}"), body)
    }

    // Drives the full route so the transport body limit applies, unlike the
    // tests above that call submit_application directly.
    #[tokio::test]
    async fn apply_route_accepts_resumes_above_two_megabytes() {
        let portal = test_portal();
        let owner = recruiter_headers(&portal, "owner@easily.test");
        let job_id = create_job(&portal, &owner).await;

        let (content_type, body) = multipart_application(&vec![b'a'; 3 * 1024 * 1024]);
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1/jobs/{job_id}/apply"))
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .expect("request builds");

        let response = portal_router(portal.clone())
            .oneshot(request)
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            portal
                .jobs
                .find_by_id(job_id)
                .expect("job present")
                .applicants
                .len(),
            1
        );
    }
}
