use serde::{Deserialize, Serialize};

use super::deserialize_nullable_default;

/// A skill the candidate should pick up, with the reasoning and learning material
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpskillSuggestion {
    pub skill: String,
    pub reason: String,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub resources: Vec<String>,
}

/// AI-generated review of a resume
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LlmAnalysis {
    /// Score on a 1-10 scale
    #[serde(default)]
    pub resume_rating: Option<f64>,
    #[serde(default)]
    pub overall_feedback: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub strength_areas: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub improvement_areas: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub upskill_suggestions: Vec<UpskillSuggestion>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub suggested_keywords_for_ats: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_default")]
    pub potential_roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_deserialize() {
        let analysis: LlmAnalysis = serde_json::from_value(serde_json::json!({
            "resume_rating": 7.5,
            "overall_feedback": "Solid backend profile.",
            "strength_areas": ["Systems design"],
            "improvement_areas": ["Quantify impact"],
            "upskill_suggestions": [
                {"skill": "Kubernetes", "reason": "Common in target roles", "resources": ["k8s.io/docs"]}
            ],
            "suggested_keywords_for_ats": ["Rust", "gRPC"],
            "potential_roles": ["Platform Engineer"]
        }))
        .unwrap();

        assert_eq!(analysis.resume_rating, Some(7.5));
        assert_eq!(analysis.upskill_suggestions[0].skill, "Kubernetes");
        assert_eq!(analysis.upskill_suggestions[0].resources, vec!["k8s.io/docs"]);
        assert_eq!(analysis.suggested_keywords_for_ats, vec!["Rust", "gRPC"]);
    }

    #[test]
    fn test_analysis_partial() {
        let analysis: LlmAnalysis = serde_json::from_value(serde_json::json!({
            "resume_rating": null,
            "potential_roles": null
        }))
        .unwrap();
        assert!(analysis.resume_rating.is_none());
        assert!(analysis.potential_roles.is_empty());
        assert!(analysis.upskill_suggestions.is_empty());
    }
}
