pub mod canonicalization;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod types;

pub use canonicalization::emit_jcs;
pub use error::{ConfigError, ErrorCategory, StoreError, UserFriendlyError, VidflowError};
pub use exit_codes::ExitCode;
