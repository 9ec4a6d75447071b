use std::fmt;

use thiserror::Error;

/// The four page regions a problem is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Difficulty,
    Description,
    StarterCode,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Title => "title",
            Section::Difficulty => "difficulty",
            Section::Description => "description",
            Section::StarterCode => "starter code",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum GrabError {
    #[error("missing {0} section")]
    MissingSection(Section),

    #[error("malformed title '{0}': expected '<number>. <title>'")]
    MalformedTitle(String),

    #[error("starter code has no 'class Solution' line")]
    MissingBoundary,

    #[error("malformed method declaration '{0}'")]
    MalformedSignature(String),

    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
