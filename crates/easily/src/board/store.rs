use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use super::domain::{
    Applicant, ApplicantPatch, Job, JobPatch, NewApplicant, NewJob, NewUser, User, UserPatch,
};

/// In-memory recruiter account store.
///
/// A mutex-guarded vector plus a monotonic id counter; every operation takes
/// the lock once, so callers get the single-threaded consistency the data
/// model assumes. Lookups signal absence with `None`, deletes with `false`,
/// and nothing in here ever panics or errors on an ordinary miss.
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<UserState>,
}

#[derive(Debug)]
struct UserState {
    users: Vec<User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(UserState {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in insertion order.
    pub fn find_all(&self) -> Vec<User> {
        let state = self.inner.lock().expect("user store mutex poisoned");
        state.users.clone()
    }

    pub fn find_by_id(&self, id: u64) -> Option<User> {
        let state = self.inner.lock().expect("user store mutex poisoned");
        state.users.iter().find(|user| user.id == id).cloned()
    }

    /// First user whose email matches exactly (case-sensitive, no trimming).
    ///
    /// Registration uses this as its duplicate pre-check; the store itself
    /// never enforces email uniqueness.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let state = self.inner.lock().expect("user store mutex poisoned");
        state.users.iter().find(|user| user.email == email).cloned()
    }

    /// Allocate the next id, append, and return the new record. Always
    /// succeeds; uniqueness is the caller's concern.
    pub fn save(&self, data: NewUser) -> User {
        let mut state = self.inner.lock().expect("user store mutex poisoned");
        let id = state.next_id;
        state.next_id += 1;

        let user = User {
            id,
            name: data.name,
            email: data.email,
            password: data.password,
        };
        debug!(user_id = user.id, "user saved");
        state.users.push(user.clone());
        user
    }

    /// Shallow-merge the patch into the matching record in place.
    pub fn update(&self, id: u64, patch: UserPatch) -> Option<User> {
        let mut state = self.inner.lock().expect("user store mutex poisoned");
        let user = state.users.iter_mut().find(|user| user.id == id)?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(password) = patch.password {
            user.password = password;
        }

        debug!(user_id = id, "user updated");
        Some(user.clone())
    }

    /// Remove the matching record; `true` when something was removed.
    pub fn delete(&self, id: u64) -> bool {
        let mut state = self.inner.lock().expect("user store mutex poisoned");
        let before = state.users.len();
        state.users.retain(|user| user.id != id);
        let removed = state.users.len() < before;
        debug!(user_id = id, removed, "user delete attempted");
        removed
    }
}

/// In-memory job posting store, including each posting's applicant list.
///
/// Job ids are assigned from a monotonic counter and never reused, even after
/// deletion. Applicant ids live inside one job only and follow a max+1 policy:
/// deleting the highest-numbered applicant frees that number for the next
/// submission, while interior gaps stay gaps.
#[derive(Debug)]
pub struct JobStore {
    inner: Mutex<JobState>,
}

#[derive(Debug)]
struct JobState {
    jobs: Vec<Job>,
    next_id: u64,
}

impl Default for JobStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(JobState {
                jobs: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All jobs in insertion order; deletions leave the remaining order
    /// untouched. Keyword filtering is layered on top by the caller.
    pub fn find_all(&self) -> Vec<Job> {
        let state = self.inner.lock().expect("job store mutex poisoned");
        state.jobs.clone()
    }

    pub fn find_by_id(&self, id: u64) -> Option<Job> {
        let state = self.inner.lock().expect("job store mutex poisoned");
        state.jobs.iter().find(|job| job.id == id).cloned()
    }

    /// Allocate the next id, stamp the posting time, start with no
    /// applicants, append, and return the new record.
    pub fn save(&self, data: NewJob) -> Job {
        let mut state = self.inner.lock().expect("job store mutex poisoned");
        let id = state.next_id;
        state.next_id += 1;

        let job = Job {
            id,
            job_category: data.job_category,
            job_designation: data.job_designation,
            job_location: data.job_location,
            company_name: data.company_name,
            salary: data.salary,
            apply_by: data.apply_by,
            skills_required: data.skills_required,
            number_of_opening: data.number_of_opening,
            job_posted: Utc::now(),
            applicants: Vec::new(),
            recruiter_id: data.recruiter_id,
        };
        debug!(job_id = job.id, recruiter_id = job.recruiter_id, "job saved");
        state.jobs.push(job.clone());
        job
    }

    /// Shallow-merge the patch into the matching job. The applicants list is
    /// always preserved verbatim; `JobPatch` has no way to touch it.
    pub fn update(&self, id: u64, patch: JobPatch) -> Option<Job> {
        let mut state = self.inner.lock().expect("job store mutex poisoned");
        let job = state.jobs.iter_mut().find(|job| job.id == id)?;

        if let Some(job_category) = patch.job_category {
            job.job_category = job_category;
        }
        if let Some(job_designation) = patch.job_designation {
            job.job_designation = job_designation;
        }
        if let Some(job_location) = patch.job_location {
            job.job_location = job_location;
        }
        if let Some(company_name) = patch.company_name {
            job.company_name = company_name;
        }
        if let Some(salary) = patch.salary {
            job.salary = salary;
        }
        if let Some(apply_by) = patch.apply_by {
            job.apply_by = apply_by;
        }
        if let Some(skills_required) = patch.skills_required {
            job.skills_required = skills_required;
        }
        if let Some(number_of_opening) = patch.number_of_opening {
            job.number_of_opening = number_of_opening;
        }

        debug!(job_id = id, "job updated");
        Some(job.clone())
    }

    /// Remove the job and, by composition, every applicant it owns.
    pub fn delete(&self, id: u64) -> bool {
        let mut state = self.inner.lock().expect("job store mutex poisoned");
        let before = state.jobs.len();
        state.jobs.retain(|job| job.id != id);
        let removed = state.jobs.len() < before;
        debug!(job_id = id, removed, "job delete attempted");
        removed
    }

    /// Append an applicant to the job, numbering it max existing id + 1
    /// (1 for an empty list). `None` means the job does not exist and the
    /// application must be treated as rejected; nothing is committed in that
    /// case.
    pub fn add_applicant(&self, job_id: u64, data: NewApplicant) -> Option<Applicant> {
        let mut state = self.inner.lock().expect("job store mutex poisoned");
        let job = state.jobs.iter_mut().find(|job| job.id == job_id)?;

        let next_id = job
            .applicants
            .iter()
            .map(|applicant| applicant.id)
            .max()
            .map_or(1, |max| max + 1);

        let applicant = Applicant {
            id: next_id,
            name: data.name,
            email: data.email,
            contact: data.contact,
            resume_path: data.resume_path,
            applied_date: Utc::now(),
        };
        debug!(job_id, applicant_id = applicant.id, "applicant added");
        job.applicants.push(applicant.clone());
        Some(applicant)
    }

    pub fn find_applicant_by_id(&self, job_id: u64, applicant_id: u64) -> Option<Applicant> {
        let state = self.inner.lock().expect("job store mutex poisoned");
        let job = state.jobs.iter().find(|job| job.id == job_id)?;
        job.applicants
            .iter()
            .find(|applicant| applicant.id == applicant_id)
            .cloned()
    }

    /// Shallow-merge the patch into one applicant of one job.
    pub fn update_applicant(
        &self,
        job_id: u64,
        applicant_id: u64,
        patch: ApplicantPatch,
    ) -> Option<Applicant> {
        let mut state = self.inner.lock().expect("job store mutex poisoned");
        let job = state.jobs.iter_mut().find(|job| job.id == job_id)?;
        let applicant = job
            .applicants
            .iter_mut()
            .find(|applicant| applicant.id == applicant_id)?;

        if let Some(name) = patch.name {
            applicant.name = name;
        }
        if let Some(email) = patch.email {
            applicant.email = email;
        }
        if let Some(contact) = patch.contact {
            applicant.contact = contact;
        }
        if let Some(resume_path) = patch.resume_path {
            applicant.resume_path = resume_path;
        }

        debug!(job_id, applicant_id, "applicant updated");
        Some(applicant.clone())
    }

    /// Remove one applicant from one job; `false` when the job or applicant
    /// is missing.
    pub fn delete_applicant(&self, job_id: u64, applicant_id: u64) -> bool {
        let mut state = self.inner.lock().expect("job store mutex poisoned");
        let Some(job) = state.jobs.iter_mut().find(|job| job.id == job_id) else {
            return false;
        };

        let before = job.applicants.len();
        job.applicants.retain(|applicant| applicant.id != applicant_id);
        let removed = job.applicants.len() < before;
        debug!(job_id, applicant_id, removed, "applicant delete attempted");
        removed
    }
}
