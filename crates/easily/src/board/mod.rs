//! Job board state layer: recruiter accounts, job postings, and the embedded
//! applicant records each posting owns.
//!
//! The two stores are the only stateful components in the system. Everything
//! around them (routing, validation, sessions, uploads, mail) is a collaborator
//! that either feeds data in or consumes the sentinel-or-entity results.

pub mod collaborators;
pub mod domain;
pub mod store;

#[cfg(test)]
mod tests;

pub use collaborators::{
    ApplicationReceipt, ConfirmationMailer, MailError, ResumeStore, ResumeUpload, UploadError,
};
pub use domain::{
    Applicant, ApplicantPatch, Job, JobPatch, NewApplicant, NewJob, NewUser, User, UserPatch,
};
pub use store::{JobStore, UserStore};
