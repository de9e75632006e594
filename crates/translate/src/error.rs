use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("completion request failed: {0}")]
    Completion(#[source] bisub_completion_interface::Error),
}
