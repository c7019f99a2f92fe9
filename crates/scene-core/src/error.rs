use thiserror::Error;

/// Configuration and setup errors. All of these surface at composition time;
/// nothing in the per-frame path can fail.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unknown field kind `{0}`")]
    UnknownKind(String),

    #[error("invalid parameters for `{kind}`: {reason}")]
    InvalidParams { kind: &'static str, reason: String },

    #[error("malformed hex color `{0}` (expected #RRGGBB)")]
    BadHexColor(String),

    #[error("scene preset `{0}` has no layers")]
    EmptyScene(String),

    #[error("scroll source height must be positive, got {0}")]
    InvalidScrollHeight(f32),
}
