pub mod config;
pub mod views;

pub mod handlers {
    mod panel;
    pub use panel::panel_handler;
    mod ping;
    pub use ping::ping_handler;
    mod send_spoofed;
    pub use send_spoofed::send_spoofed_handler;
}

pub mod models {
    pub mod error;
    pub use error::{SubmitError, UpstreamError};

    pub mod group;
    pub use group::Group;

    pub mod report;

    pub mod spoof;
    pub use spoof::{SpoofForm, SpoofRequest, SpoofResponse};
}

mod services {
    pub mod groups;
    pub mod send_spoofed;
}

use axum::http::StatusCode;
use axum::routing::{get, post, Router};
use color_eyre::eyre::Result;
use handlers::{panel_handler, ping_handler, send_spoofed_handler};
use opentelemetry::KeyValue;
use opentelemetry_sdk::{trace, Resource};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

#[tracing::instrument]
#[allow(clippy::expect_used, clippy::redundant_pub_crate)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        info!("Ctrl-C received");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Signal is received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Starting graceful shutdown");
}

#[tracing::instrument]
async fn fallback(uri: axum::http::Uri) -> impl axum::response::IntoResponse {
    let status = StatusCode::NOT_FOUND;
    warn!(
        %status,
        %uri,
        "Failed to serve",
    );
    (status, format!("No route {uri}"))
}

/// Shared by every handler. The two page flows are independent; this carries
/// only the outbound client and where the upstream lives.
#[derive(Clone, Debug)]
pub struct State {
    pub reqwest_client: reqwest::Client,
    pub upstream_url: String,
}

#[allow(clippy::missing_errors_doc)]
pub fn setup_tracing() -> Result<()> {
    // Create env filter
    let env_filter = EnvFilter::try_from_default_env()
        .map_or_else(|_| EnvFilter::new("info"), |env_filter| env_filter);

    // Install a new OpenTelemetry trace pipeline
    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic())
        .with_trace_config(
            trace::config().with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                "spoofpanel",
            )])),
        )
        .install_batch(opentelemetry::runtime::Tokio)?;
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    Registry::default()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .with(ErrorLayer::default())
        .with(telemetry_layer)
        .init();

    info!("Initialized tracing and logging systems");

    Ok(())
}

#[tracing::instrument]
pub fn setup_app(settings: &spoofpanel_cfg::Config) -> Result<Router> {
    let reqwest_client = reqwest::Client::new();
    info!("Created reqwest client");

    let upstream_url = settings.upstream_url.trim_end_matches('/').to_owned();
    info!(%upstream_url, "Will relay to upstream");

    let state = State {
        reqwest_client,
        upstream_url,
    };

    Ok(Router::new()
        .fallback(fallback)
        .route("/", get(panel_handler))
        .route("/send", post(send_spoofed_handler))
        .route("/ping", get(ping_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
