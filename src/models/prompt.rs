use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Nudge,
    Hydration,
    Movement,
    Gratitude,
    Diet,
    Goal,
    Stress,
    Sleep,
}

/// Contextual nudge. `id` is stable across recomputations so callers can diff lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderPrompt {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: PromptKind,
    pub message: String,
    pub icon: &'static str,
}

impl ReminderPrompt {
    pub(crate) fn new(id: &'static str, kind: PromptKind, message: impl Into<String>, icon: &'static str) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            icon,
        }
    }
}
