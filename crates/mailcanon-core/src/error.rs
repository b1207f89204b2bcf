use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("email must be a string")]
    InvalidArgument,
    #[error("cannot normalize an invalid email address")]
    InvalidEmail,
}
