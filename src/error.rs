use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Failed to resolve working directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error("Failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_read_message_names_path() {
        let err = LessonError::ConfigRead {
            path: PathBuf::from("/nope/lambda_lesson.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/lambda_lesson.toml"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_working_dir_message_does_not_mention_config() {
        let err = LessonError::WorkingDir(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to resolve working directory"));
        assert!(msg.contains("gone"));
        assert!(!msg.contains("config"));
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let err: LessonError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, LessonError::Output(_)));
    }
}
