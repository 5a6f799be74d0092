// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Instructional detail records keyed by exercise identifier.
//!
//! Lookups for unknown identifiers resolve to a shared generic record. That
//! fallback is a documented default of the content model, not an error path.

use serde::{Deserialize, Serialize};

/// Asset key of the shared fallback record.
pub const DEFAULT_INFO_KEY: &str = "default";

/// Coaching guideline block for an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseGuidelines {
    /// Recommended set range, free-form (e.g. "3-5 sets")
    pub sets: String,
    /// Recommended rep range, free-form (e.g. "8-12 reps")
    pub reps: String,
    /// Recommended rest interval, free-form
    pub rest: String,
    /// Coaching tips, in presentation order
    pub tips: Vec<String>,
}

/// Long-form instructional detail for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    /// Long-form description of the movement and target muscles
    pub description: String,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Set/rep/rest guidelines and tips
    pub guidelines: ExerciseGuidelines,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_deserialization_from_asset_shape() {
        let json = r#"{
            "description": "The bench press is a classic upper body exercise.",
            "instructions": [
                "Lie flat on a bench with your feet on the ground.",
                "Press the bar back up until your arms are fully extended."
            ],
            "guidelines": {
                "sets": "3-5 sets",
                "reps": "5-12 reps",
                "rest": "90-120 seconds between sets",
                "tips": ["Keep your back flat on the bench."]
            }
        }"#;

        let info: ExerciseInfo = serde_json::from_str(json).expect("deserialize info");
        assert_eq!(info.instructions.len(), 2);
        assert_eq!(info.guidelines.sets, "3-5 sets");
        assert_eq!(info.guidelines.tips.len(), 1);
    }
}
