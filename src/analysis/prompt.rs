use super::types::AnalysisRequest;
use std::fmt::Write;

/// System context sent with every analysis, and the opening block of the user prompt.
pub const FASHION_CONTEXT: &str = "
You are VogueRadar™, an AI fashion trend analyzer. Consider:
- Latest Fashion Week shows (New York, Paris, Milan, London)
- Current celebrity street styles and red carpet appearances
- Social media fashion trends
- Regional fashion preferences and cultural contexts
- Seasonal appropriateness
- Individual's physical characteristics
";

const UNSPECIFIED: &str = "not specified";

const RECOMMENDATION_INSTRUCTIONS: &str = "Provide detailed recommendations including:
1. Top/Upper body wear suggestions
2. Bottom wear recommendations
3. Footwear options
4. Accessory suggestions
5. Color palette recommendations
6. Specific designer pieces or affordable alternatives
7. Current Fashion Week references

Format the response in a structured way, citing specific Fashion Week collections
and celebrity style references. Include both high-end and accessible options.";

/// Assembles the user prompt. Field values are inserted verbatim.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or(UNSPECIFIED).to_owned();

    let profile = [
        ("Gender", field(&request.gender)),
        ("Current Season", field(&request.season)),
        ("Style Inspiration", field(&request.celebrity)),
        ("Location", field(&request.country)),
        ("Face Type", field(&request.face_type)),
        ("Skin Tone", field(&request.face_color)),
        ("Style Preference", request.style_preference().to_owned()),
    ];

    let mut prompt = String::with_capacity(
        FASHION_CONTEXT.len() + RECOMMENDATION_INSTRUCTIONS.len() + 256,
    );
    prompt.push_str(FASHION_CONTEXT);
    prompt.push_str("\n\nPlease provide personalized fashion recommendations for:\n");
    for (label, value) in &profile {
        // Writing into a String cannot fail.
        let _ = writeln!(prompt, "- {label}: {value}");
    }
    prompt.push('\n');
    prompt.push_str(RECOMMENDATION_INSTRUCTIONS);

    prompt
}
