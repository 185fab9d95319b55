use crate::models::error::{SubmitError, UpstreamError};
use crate::models::spoof::{SpoofForm, SpoofResponse};
use tracing::{debug, info};

/// Runs one submission end to end: validate the form, relay the request to
/// the upstream, hand back the upstream's verdict text. Validation failures
/// short-circuit before any network use.
#[tracing::instrument(skip(client))]
pub async fn send_spoofed(
    client: &reqwest::Client,
    upstream_url: &str,
    form: SpoofForm,
) -> Result<String, SubmitError> {
    let request = form.into_request()?;
    debug!(chat_id = %request.chat_id, "Relaying spoofed reply");

    let url = format!("{upstream_url}/send-spoofed");
    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(UpstreamError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { status }.into());
    }

    let verdict: SpoofResponse = response.json().await.map_err(|err| UpstreamError::Payload {
        detail: err.to_string(),
    })?;
    info!(message = %verdict.message, "Upstream answered");

    Ok(verdict.message)
}
