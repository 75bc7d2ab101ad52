use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Recruiter account record.
///
/// The store treats the password as an opaque string and compares it as given;
/// hashing is deliberately outside this system's scope. Email is a secondary
/// lookup key but uniqueness is a caller responsibility, not a store invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields supplied when registering a recruiter; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Shallow-merge patch for a recruiter record. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A job posting together with the applicants it owns.
///
/// The applicants list is a composition: no applicant outlives its job and
/// applicant ids are only meaningful within this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: u64,
    pub job_category: String,
    pub job_designation: String,
    pub job_location: String,
    pub company_name: String,
    pub salary: f64,
    pub apply_by: NaiveDate,
    pub skills_required: Vec<String>,
    pub number_of_opening: u32,
    pub job_posted: DateTime<Utc>,
    pub applicants: Vec<Applicant>,
    pub recruiter_id: u64,
}

/// Fields supplied when posting a job. The store assigns the id, stamps the
/// posting time, and starts the applicants list empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub job_category: String,
    pub job_designation: String,
    pub job_location: String,
    pub company_name: String,
    pub salary: f64,
    pub apply_by: NaiveDate,
    pub skills_required: Vec<String>,
    pub number_of_opening: u32,
    pub recruiter_id: u64,
}

/// Shallow-merge patch for a job posting.
///
/// Deliberately has no applicants field: updates through this path always
/// preserve the existing applicant list verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    pub job_category: Option<String>,
    pub job_designation: Option<String>,
    pub job_location: Option<String>,
    pub company_name: Option<String>,
    pub salary: Option<f64>,
    pub apply_by: Option<NaiveDate>,
    pub skills_required: Option<Vec<String>>,
    pub number_of_opening: Option<u32>,
}

/// An application submitted against one job.
///
/// Ids restart at 1 inside every job and follow a max+1 numbering policy, so a
/// freed highest number is reused while interior gaps are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub resume_path: String,
    pub applied_date: DateTime<Utc>,
}

/// Fields supplied when a job seeker applies. The resume path comes from the
/// upload collaborator and is carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub resume_path: String,
}

/// Shallow-merge patch for an applicant within one job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub resume_path: Option<String>,
}
