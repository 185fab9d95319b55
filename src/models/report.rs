use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::Report as EyreReport;
use tracing::error;

pub type Result<T, E = Report> = std::result::Result<T, E>;

/// Catch-all for handler failures that have no page of their own: the report
/// is logged in full and the client gets a bare 500.
pub struct Report(EyreReport);

impl From<EyreReport> for Report {
    fn from(err: EyreReport) -> Self {
        Self(err)
    }
}

impl IntoResponse for Report {
    fn into_response(self) -> Response {
        error!("{:?}", self.0);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
