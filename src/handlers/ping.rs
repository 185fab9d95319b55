use crate::models::report::Result;
use axum::response::IntoResponse;

/// Liveness probe: 200 with an empty body.
#[tracing::instrument]
pub async fn ping_handler() -> Result<impl IntoResponse> {
    Ok(())
}
