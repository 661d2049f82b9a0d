//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::images::ImageRef;

/// Domain model representing a savings goal.
///
/// The serialized field names are the stored wire format; history entries
/// keep the short `amt`/`at` names so existing blobs load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: u64,
    pub saved: u64,
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Newest first
    #[serde(default)]
    pub history: Vec<Contribution>,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    pub fn is_target_reached(&self) -> bool {
        self.saved >= self.target
    }
}

/// One recorded contribution toward a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contribution {
    #[serde(rename = "amt")]
    pub amount: u64,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "at")]
    pub timestamp: i64,
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target: u64,
    pub image: Option<ImageRef>,
}

impl NewGoal {
    pub fn new(name: impl Into<String>, target: u64) -> Self {
        Self {
            name: name.into(),
            target,
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

/// Result of a contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionOutcome {
    pub goal: Goal,
    /// True only on the contribution that first took `saved` to the target.
    pub completed_now: bool,
}
