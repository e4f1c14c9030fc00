use serde::Serialize;

/// Headline shown above a command's output.
///
/// Serializes as `{"level": "...", "label": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "label", rename_all = "lowercase")]
pub enum StatusBadge {
    /// Something was written
    Success(String),
    /// Nothing changed
    Info(String),
    /// Output is partial
    Warning(String),
}

impl StatusBadge {
    pub fn label(&self) -> &str {
        match self {
            StatusBadge::Success(label) | StatusBadge::Info(label) | StatusBadge::Warning(label) => {
                label
            }
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            StatusBadge::Success(_) => "✅",
            StatusBadge::Info(_) => "ℹ️",
            StatusBadge::Warning(_) => "⚠️",
        }
    }
}

/// A follow-up command worth running next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub description: String,
    pub command: String,
}

impl Tip {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}
