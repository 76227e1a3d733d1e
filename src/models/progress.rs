use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStage {
    Analyzing,
    Generating,
    Formatting,
    Creating,
    Complete,
}

/// Advisory progress milestone pushed to a session room. Never used for control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationProgress {
    pub stage: ProgressStage,
    pub progress: u8,
    pub message: String,
}

impl GenerationProgress {
    pub fn new(stage: ProgressStage, progress: u8, message: &str) -> Self {
        GenerationProgress {
            stage,
            progress,
            message: message.to_string(),
        }
    }
}
