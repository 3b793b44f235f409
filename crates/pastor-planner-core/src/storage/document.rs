//! Serializable snapshot of a session: `{ version, tasks, profile }`.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::task::Task;

pub const DOCUMENT_VERSION: u32 = 1;

/// Versioned snapshot of the tasks and profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDocument {
    pub version: u32,
    pub tasks: Vec<Task>,
    pub profile: UserProfile,
}

impl PlanDocument {
    pub fn new(tasks: Vec<Task>, profile: UserProfile) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            tasks,
            profile,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
