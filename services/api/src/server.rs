use crate::cli::ServeArgs;
use crate::infra::{AppState, DiskResumeStore, LogMailer, Portal, SessionStore};
use crate::routes::portal_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use easily::config::AppConfig;
use easily::error::AppError;
use easily::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sessions = Arc::new(SessionStore::new(config.session.ttl_minutes));
    let resumes = Arc::new(DiskResumeStore::new(config.uploads.dir.clone()));
    let mailer = Arc::new(LogMailer::default());
    let portal = Arc::new(Portal::new(sessions, resumes, mailer));

    let app = portal_router(portal)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "easily job portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
