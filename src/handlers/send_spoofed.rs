use crate::models::SpoofForm;
use crate::services::send_spoofed::send_spoofed;
use crate::views;
use crate::State as PanelState;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use tracing::warn;

/// POST `/send`: one submission. Every outcome ends as a notice page — the
/// upstream's verdict on success, the failure class otherwise.
#[tracing::instrument(skip(state))]
pub async fn send_spoofed_handler(
    State(state): State<PanelState>,
    Form(form): Form<SpoofForm>,
) -> Html<String> {
    let message = match send_spoofed(&state.reqwest_client, &state.upstream_url, form).await {
        Ok(message) => message,
        Err(err) => {
            warn!(%err, "Submission did not go through");
            err.to_string()
        }
    };

    Html(views::notice_page(&message))
}
