use crate::services::groups::fetch_groups;
use crate::views;
use crate::State as PanelState;
use axum::extract::State;
use axum::response::Html;
use tracing::warn;

/// GET `/`: the panel page. The group container is filled server-side; when
/// the upstream cannot be read, the container shows the failure instead of
/// the page dying.
#[tracing::instrument(skip(state))]
pub async fn panel_handler(State(state): State<PanelState>) -> Html<String> {
    let listing = match fetch_groups(&state.reqwest_client, &state.upstream_url).await {
        Ok(groups) => views::group_list(&groups),
        Err(err) => {
            warn!(%err, "Could not load the group listing");
            views::group_list_error(&err)
        }
    };

    Html(views::panel_page(&listing))
}
