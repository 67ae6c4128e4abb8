#[derive(Debug, thiserror::Error)]
pub enum PointsError {
    #[error("missing element `{element}` for {context}")]
    MissingElement { context: String, element: String },

    #[error("change watcher is already watching")]
    AlreadyWatching,

    #[error("invalid page path: {0}")]
    InvalidPath(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PointsError {
    pub fn missing(context: impl Into<String>, element: impl Into<String>) -> Self {
        PointsError::MissingElement {
            context: context.into(),
            element: element.into(),
        }
    }
}
