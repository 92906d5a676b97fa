use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}
