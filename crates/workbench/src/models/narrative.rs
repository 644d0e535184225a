//! Narrative models — the structured output of a narrative generation run.

use serde::{Deserialize, Serialize};

/// One key experience translated three ways.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyExperience {
    /// Blunt, honest description of what was actually done and why.
    pub raw_truth: String,
    /// The same point rephrased into recruiter-facing language aligned
    /// with the target job description.
    pub corporate_framing: String,
    /// Commentary on the gap between the two framings, in the realist
    /// persona's voice.
    pub meta_commentary: String,
}

/// The recruiter-facing narrative: a polished summary plus a breakdown of
/// 2-3 key experiences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorporateNarrative {
    pub summary: String,
    pub key_experience_breakdown: Vec<KeyExperience>,
}

/// The two persona perspectives generated alongside the narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategicAnalysis {
    /// Empowering, big-picture reading of the user's path.
    pub strategist_perspective: String,
    /// Grounding, cynical reading of the corporate framing.
    pub realist_perspective: String,
}

/// Full output of one narrative generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeOutput {
    pub corporate_narrative: CorporateNarrative,
    pub strategic_analysis: StrategicAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_output_full_deserializes_correctly() {
        let json = r#"{
            "corporate_narrative": {
                "summary": "Self-directed engineer with a track record of shipping.",
                "key_experience_breakdown": [
                    {
                        "raw_truth": "Rewrote the build three times until it stopped breaking.",
                        "corporate_framing": "Iteratively hardened the build pipeline.",
                        "meta_commentary": "Three rewrites is now a pipeline."
                    }
                ]
            },
            "strategic_analysis": {
                "strategist_perspective": "Your non-linear path is the asset here.",
                "realist_perspective": "They want a keyword match. Give them one."
            }
        }"#;

        let parsed: NarrativeOutput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.corporate_narrative.key_experience_breakdown.len(), 1);
        assert!(parsed
            .corporate_narrative
            .key_experience_breakdown[0]
            .raw_truth
            .contains("Rewrote"));
        assert!(parsed
            .strategic_analysis
            .realist_perspective
            .contains("keyword"));
    }

    #[test]
    fn test_narrative_output_round_trips_through_serde() {
        let narrative = NarrativeOutput {
            corporate_narrative: CorporateNarrative {
                summary: "Summary".to_string(),
                key_experience_breakdown: vec![],
            },
            strategic_analysis: StrategicAnalysis {
                strategist_perspective: "A".to_string(),
                realist_perspective: "B".to_string(),
            },
        };

        let json = serde_json::to_string(&narrative).unwrap();
        let back: NarrativeOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.corporate_narrative.summary, "Summary");
        assert_eq!(back.strategic_analysis.strategist_perspective, "A");
    }
}
