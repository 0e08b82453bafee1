//! Audio source module
//!
//! Raw user input (file or URL candidate) and the pre-flight validation
//! policy applied before any network call.

mod candidate;
mod validator;

pub use candidate::{FileCandidate, SourceCandidate};
pub use validator::{
    check_url_live, validate, SourceRejection, ALLOWED_DOMAINS, MAX_FILE_SIZE_BYTES,
    SUPPORTED_EXTENSIONS,
};
