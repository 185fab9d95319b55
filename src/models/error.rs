use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes for calls to the upstream demo server.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("could not reach the upstream server: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("the upstream server answered with status {status}")]
    Status { status: StatusCode },
    #[error("could not decode the upstream response: {detail}")]
    Payload { detail: String },
}

/// Outcome classes for one form submission. Every variant ends as a rendered
/// notice; the Display text is what the user sees.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("All fields are required")]
    MissingFields,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
