use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityKind {
    #[serde(rename = "scooped")]
    Scooped,
    #[serde(rename = "cleaned")]
    Cleaned,
    #[serde(rename = "scooped (auto)")]
    ScoopedAuto,
}

impl ActivityKind {
    /// Parse user-supplied input (CLI argument or deep-link parameter).
    /// Only the manual kinds are accepted; the auto kind is synthetic and
    /// can never be logged directly.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scooped" => Some(Self::Scooped),
            "cleaned" => Some(Self::Cleaned),
            _ => None,
        }
    }

    /// Wire string, identical to what gets persisted in the event list.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            ActivityKind::Scooped => "scooped",
            ActivityKind::Cleaned => "cleaned",
            ActivityKind::ScoopedAuto => "scooped (auto)",
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, ActivityKind::ScoopedAuto)
    }
}
