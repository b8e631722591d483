use serde::{Deserialize, Serialize};

/// Recipe difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty key. Returns `None` for anything that is not a
    /// known difficulty, so callers can fall back rather than fail.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One instruction in a recipe. Steps nest to arbitrary depth: a step is
/// either a plain instruction or an instruction with ordered substeps.
///
/// The untagged representation accepts both the flat form
/// (`"Boil pasta"`) and the nested form
/// (`{"text": "Prepare sauce", "substeps": [...]}`) in catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Leaf(String),
    Group { text: String, substeps: Vec<Step> },
}

impl Step {
    /// The instruction text, regardless of nesting.
    pub fn text(&self) -> &str {
        match self {
            Step::Leaf(text) => text,
            Step::Group { text, .. } => text,
        }
    }

    /// Child steps; empty for leaf instructions.
    pub fn substeps(&self) -> &[Step] {
        match self {
            Step::Leaf(_) => &[],
            Step::Group { substeps, .. } => substeps,
        }
    }
}

/// A single catalog entry. Immutable once loaded; the id is the stable
/// identity key used by the favorites ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub difficulty: Difficulty,
    /// Total time in minutes.
    pub time: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
}
