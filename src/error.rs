use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellGuardError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("No files found matching types: {}", .extensions.join(", "))]
    NoFilesMatched { extensions: Vec<String> },

    #[error("Syntax validator '{program}' is not available")]
    ValidatorUnavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Formatter '{program}' is not available")]
    FormatterUnavailable { program: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ShellGuardError {
    /// Short category label used as the headline of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::PathNotFound(_) => "PathNotFound",
            Self::NoFilesMatched { .. } => "NoFilesMatched",
            Self::ValidatorUnavailable { .. } => "ValidatorUnavailable",
            Self::FormatterUnavailable { .. } => "FormatterUnavailable",
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Underlying cause, when one carries more information than the headline.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::ValidatorUnavailable { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the operator.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::PathNotFound(_) => Some("Check the --path argument".to_string()),
            Self::NoFilesMatched { .. } => Some(
                "Check the path and the --types filter, or pass --recursive to search subdirectories"
                    .to_string(),
            ),
            Self::ValidatorUnavailable { program, .. } => Some(format!(
                "Install '{program}', pass --shell to choose another shell, or use --no-syntax"
            )),
            Self::FormatterUnavailable { program } => Some(format!(
                "Install {program}: `go install mvdan.cc/sh/v3/cmd/shfmt@latest`, \
                 `brew install shfmt`, `apt install shfmt` or `pacman -S shfmt`"
            )),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the configuration file syntax".to_string())
            }
            Self::FileRead { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file exists".to_string()),
                std::io::ErrorKind::PermissionDenied => {
                    Some("Check file permissions".to_string())
                }
                _ => None,
            },
            Self::InvalidPattern { .. } => {
                Some("Check the glob syntax (e.g. `**/vendor/**`)".to_string())
            }
            Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Whether this error means "the checked corpus failed" rather than
    /// "the tool could not run".
    #[must_use]
    pub const fn is_check_failure(&self) -> bool {
        matches!(self, Self::PathNotFound(_) | Self::NoFilesMatched { .. })
    }
}

pub type Result<T> = std::result::Result<T, ShellGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
