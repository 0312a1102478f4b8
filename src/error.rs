use thiserror::Error;

/// Everything that can go wrong while fitting a model or handling a viewer command.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Bounding box has zero extent, cannot normalize model scale")]
    DegenerateGeometry,

    #[error("Invalid arguments for '{method}': {reason}")]
    InvalidArgument { method: String, reason: String },

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error("No model is loaded")]
    ModelNotLoaded,

    #[error("No view factory registered for '{0}'")]
    UnknownViewType(String),

    #[error("A view factory is already registered for '{0}'")]
    DuplicateViewType(String),

    #[error("Failed to parse TOML: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Malformed command on line {line}: {source}")]
    Script {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ViewerError {
    pub fn invalid_argument(method: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            method: method.to_string(),
            reason: reason.into(),
        }
    }

    /// Error code reported back over the method channel.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DegenerateGeometry => "DEGENERATE_GEOMETRY",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::UnsupportedCommand(_) => "UNSUPPORTED_COMMAND",
            Self::ModelNotLoaded => "MODEL_NOT_LOADED",
            Self::UnknownViewType(_) | Self::DuplicateViewType(_) => "VIEW_TYPE",
            Self::Config(_) => "CONFIG",
            Self::Script { .. } => "SCRIPT",
            Self::Io(_) => "IO",
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
