pub mod domain;
pub mod error;
pub mod validator;

pub use domain::*;
pub use error::CoreError;
pub use validator::{normalize_email, validate_email, EmailValidator, MAX_LOCAL_PART_LEN};
