use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Serializing a well-formed model value failed. Callers should treat this as a bug.
    #[error("failed to encode {target}: {source}")]
    Encode {
        target: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to decode {target} at line {line}, column {column}: {source}")]
    Decode {
        target: &'static str,
        line: usize,
        column: usize,
        source: serde_json::Error,
    },
}

impl CodecError {
    pub(crate) fn encode(target: &'static str, source: serde_json::Error) -> Self {
        Self::Encode { target, source }
    }

    pub(crate) fn decode(target: &'static str, source: serde_json::Error) -> Self {
        Self::Decode {
            target,
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    /// The input was not well-formed JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self.category(), Some(Category::Syntax | Category::Eof))
    }

    /// The input was valid JSON but a value had the wrong type or shape.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.category(), Some(Category::Data))
    }

    fn category(&self) -> Option<Category> {
        match self {
            Self::Decode { source, .. } => Some(source.classify()),
            Self::Encode { .. } => None,
        }
    }
}
