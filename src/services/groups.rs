use crate::models::error::UpstreamError;
use crate::models::group::{parse_group_list, Group};
use tap::Tap;
use tracing::{debug, info};

/// Fetches the newline-delimited group listing from the upstream and parses
/// it. Transport failures, non-2xx answers, and unreadable bodies come back
/// as distinct variants so the caller can render them.
#[tracing::instrument(skip(client))]
pub async fn fetch_groups(
    client: &reqwest::Client,
    upstream_url: &str,
) -> Result<Vec<Group>, UpstreamError> {
    let url = format!("{upstream_url}/get-groups");
    debug!(%url, "Requesting group listing");

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { status });
    }

    let body = response
        .text()
        .await
        .map_err(|err| UpstreamError::Payload {
            detail: err.to_string(),
        })?;

    Ok(parse_group_list(&body).tap(|groups| info!(count = groups.len(), "Parsed group listing")))
}
