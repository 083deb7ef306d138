//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: placement error (bad configuration, degenerate sprite)
//! - 11: I/O error (sprite source unreadable, canvas export failed)
//! - 12: input error (non-square dimensions, bad JSON params)
//! - 13: serialization error

use shape_scatter_core::ScatterError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A core error that is neither I/O nor caller input.
    Core(ScatterError),
    /// Reading sprites or writing canvases failed.
    Io(String),
    /// Invalid arguments.
    Input(String),
    /// JSON output failure.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<ScatterError> for CliError {
    fn from(e: ScatterError) -> Self {
        match e {
            ScatterError::SourceLoad { .. } | ScatterError::Export { .. } => {
                CliError::Io(e.to_string())
            }
            ScatterError::NonSquareCanvas { .. } | ScatterError::InvalidParam(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Core(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_exit_code_is_10() {
        let err = CliError::Core(ScatterError::InvalidDimensions);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad size".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn source_load_routes_to_io() {
        let err = CliError::from(ScatterError::SourceLoad {
            path: "in/cube_shape.png".into(),
            reason: "not found".into(),
        });
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("cube_shape.png"));
    }

    #[test]
    fn export_routes_to_io() {
        let err = CliError::from(ScatterError::Export {
            destination: "out".into(),
            reason: "denied".into(),
        });
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn non_square_routes_to_input() {
        let err = CliError::from(ScatterError::NonSquareCanvas {
            width: 10,
            height: 20,
        });
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn sprite_exceeds_canvas_routes_to_core() {
        let err = CliError::from(ScatterError::SpriteExceedsCanvas {
            sprite: 50,
            canvas: 10,
        });
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 13);
    }
}
