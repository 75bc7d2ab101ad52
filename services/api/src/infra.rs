use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use easily::board::collaborators::{
    ApplicationReceipt, ConfirmationMailer, MailError, ResumeStore, ResumeUpload, UploadError,
    ALLOWED_RESUME_EXTENSIONS, MAX_RESUME_BYTES,
};
use easily::board::{JobStore, UserStore};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Readiness flag and metrics handle shared through an axum Extension.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Everything the route handlers touch: both stores, the session table, and
/// the upload/mail collaborators.
pub(crate) struct Portal<S, M> {
    pub(crate) users: Arc<UserStore>,
    pub(crate) jobs: Arc<JobStore>,
    pub(crate) sessions: Arc<SessionStore>,
    pub(crate) resumes: Arc<S>,
    pub(crate) mailer: Arc<M>,
}

impl<S, M> Portal<S, M>
where
    S: ResumeStore + 'static,
    M: ConfirmationMailer + 'static,
{
    pub(crate) fn new(sessions: Arc<SessionStore>, resumes: Arc<S>, mailer: Arc<M>) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            jobs: Arc::new(JobStore::new()),
            sessions,
            resumes,
            mailer,
        }
    }
}

/// The identity a session resolves to; the `_id` is the authority the
/// ownership checks compare against `recruiterId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionUser {
    #[serde(rename = "_id")]
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) role: &'static str,
}

#[derive(Debug, Clone)]
struct Session {
    user: SessionUser,
    expires_at: DateTime<Utc>,
}

/// Bearer-token session table with a fixed TTL. Expired entries are pruned
/// lazily on resolve.
pub(crate) struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub(crate) fn new(ttl_minutes: u64) -> Self {
        Self {
            ttl: Duration::minutes(ttl_minutes as i64),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn create(&self, user: SessionUser) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user,
            expires_at: Utc::now() + self.ttl,
        };
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(token.clone(), session);
        token
    }

    pub(crate) fn resolve(&self, token: &str) -> Option<SessionUser> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        let now = Utc::now();
        guard.retain(|_, session| session.expires_at > now);
        guard.get(token).map(|session| session.user.clone())
    }

    pub(crate) fn destroy(&self, token: &str) -> bool {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.remove(token).is_some()
    }
}

/// Writes resumes under the configured upload directory with unique
/// timestamped names, enforcing the portal's type and size policy before
/// touching disk.
pub(crate) struct DiskResumeStore {
    dir: PathBuf,
}

impl DiskResumeStore {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn accepted_extension(filename: &str) -> Option<String> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())?;

        if !ALLOWED_RESUME_EXTENSIONS.contains(&extension.as_str()) {
            return None;
        }

        // The extension and the guessed mime type must agree; a .pdf that
        // guesses to something other than application/pdf is rejected.
        let guess = mime_guess::from_ext(&extension).first()?;
        let essence = guess.essence_str();
        let known = essence == "application/pdf"
            || essence == "application/msword"
            || essence
                == "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
        known.then_some(extension)
    }
}

impl ResumeStore for DiskResumeStore {
    fn store(&self, upload: ResumeUpload) -> Result<String, UploadError> {
        if upload.bytes.is_empty() {
            return Err(UploadError::Missing);
        }
        if upload.bytes.len() > MAX_RESUME_BYTES {
            return Err(UploadError::TooLarge {
                limit: MAX_RESUME_BYTES,
            });
        }
        let extension = Self::accepted_extension(&upload.original_filename)
            .ok_or(UploadError::UnsupportedType)?;

        std::fs::create_dir_all(&self.dir)
            .map_err(|err| UploadError::Storage(err.to_string()))?;

        // Timestamp alone collides for uploads landing in the same
        // millisecond; the uuid keeps each resume its own file.
        let filename = format!(
            "resume-{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4(),
            extension
        );
        let target = self.dir.join(&filename);
        std::fs::write(&target, &upload.bytes)
            .map_err(|err| UploadError::Storage(err.to_string()))?;

        Ok(format!("/uploads/{filename}"))
    }
}

/// Confirmation channel that logs and records each receipt. The real SMTP
/// transport is an external collaborator; this adapter keeps the boundary
/// observable for the demo and the tests.
#[derive(Default)]
pub(crate) struct LogMailer {
    receipts: Mutex<Vec<ApplicationReceipt>>,
}

impl ConfirmationMailer for LogMailer {
    fn send(&self, receipt: &ApplicationReceipt) -> Result<(), MailError> {
        info!(
            applicant = %receipt.applicant_email,
            designation = %receipt.job_designation,
            company = %receipt.company_name,
            "application confirmation sent"
        );
        let mut guard = self.receipts.lock().expect("mailer mutex poisoned");
        guard.push(receipt.clone());
        Ok(())
    }
}

impl LogMailer {
    pub(crate) fn receipts(&self) -> Vec<ApplicationReceipt> {
        self.receipts.lock().expect("mailer mutex poisoned").clone()
    }
}
