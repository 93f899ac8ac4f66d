use serde::{Deserialize, Serialize};

pub const DEFAULT_STYLE_PREFERENCE: &str = "casual";

/// Personal and style attributes submitted to `/analyze`. Every field is optional
/// and values are used as given.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub celebrity: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub face_type: Option<String>,
    #[serde(default)]
    pub face_color: Option<String>,
    #[serde(default)]
    pub style_preference: Option<String>,
}

impl AnalysisRequest {
    pub fn style_preference(&self) -> &str {
        self.style_preference
            .as_deref()
            .unwrap_or(DEFAULT_STYLE_PREFERENCE)
    }

    pub fn analyzed_for(&self) -> AnalyzedFor {
        AnalyzedFor {
            gender: self.gender.clone(),
            season: self.season.clone(),
            location: self.country.clone(),
            inspiration: self.celebrity.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub recommendations: String,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMetadata {
    pub analyzed_for: AnalyzedFor,
}

/// Echo of the request fields the recommendations were produced for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedFor {
    pub gender: Option<String>,
    pub season: Option<String>,
    pub location: Option<String>,
    pub inspiration: Option<String>,
}
