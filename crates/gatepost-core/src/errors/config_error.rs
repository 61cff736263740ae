/// Configuration errors, raised at construction time and never during a scan.
///
/// No variant ever carries scanned content or a matched value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown pattern category: {name}")]
    UnknownCategory { name: String },

    #[error("builtin pattern for category '{category}' failed to compile")]
    PatternCompile { category: String },

    #[error("invalid custom pattern at index {index}: {reason}")]
    InvalidCustomPattern { index: usize, reason: String },

    #[error("failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed config file {path}: {reason}")]
    Parse { path: String, reason: String },
}
