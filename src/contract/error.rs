use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema violation at '{path}': expected {expected}")]
    SchemaViolation { path: String, expected: String },

    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn violation(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Field path of a violation, `None` for malformed input.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::SchemaViolation { path, .. } => Some(path),
            Self::Malformed(_) => None,
        }
    }

    // the types validate without knowing where they sit in the payload,
    // the walker in `validate` fills the real path in afterwards
    pub(crate) fn at(self, path: &str) -> Self {
        match self {
            Self::SchemaViolation { expected, .. } => Self::SchemaViolation {
                path: path.to_string(),
                expected,
            },
            other => other,
        }
    }
}
