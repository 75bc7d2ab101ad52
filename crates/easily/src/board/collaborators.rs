use serde::{Deserialize, Serialize};

/// Resume formats the portal accepts, matching the upload filter of the UI.
pub const ALLOWED_RESUME_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Upload size cap in bytes (5 MiB).
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Raw resume bytes handed over by the HTTP layer before any applicant record
/// exists.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

/// Trait turning an uploaded resume into an opaque path reference.
///
/// The stores never open or validate the file; whatever string an
/// implementation returns is carried verbatim on the applicant record.
pub trait ResumeStore: Send + Sync {
    fn store(&self, upload: ResumeUpload) -> Result<String, UploadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("only PDF, DOC, and DOCX files are allowed")]
    UnsupportedType,
    #[error("resume exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("resume upload failed or no file selected")]
    Missing,
    #[error("resume storage unavailable: {0}")]
    Storage(String),
}

/// Everything the confirmation message needs, captured read-only from the job
/// record after the applicant has been committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    pub applicant_name: String,
    pub applicant_email: String,
    pub job_designation: String,
    pub company_name: String,
}

/// Trait describing the outbound confirmation channel.
///
/// A send failure must never roll back the already-committed applicant; the
/// caller logs the error and moves on.
pub trait ConfirmationMailer: Send + Sync {
    fn send(&self, receipt: &ApplicationReceipt) -> Result<(), MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}
