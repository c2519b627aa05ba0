//! Interview scenario presets
//!
//! Each preset picks the models for query work and answer synthesis, the
//! synthesis temperature, and the guidance injected into the answer prompt.
//! Lookup never fails: unknown keys resolve to [`GENERAL`].

use serde::Serialize;

use crate::models::InterviewType;

const FAST_MODEL: &str = "llama-3.1-8b-instant";
const STRONG_MODEL: &str = "llama-3.1-70b-versatile";

/// Immutable tuning preset for one interview scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RagPreset {
    pub query_model: &'static str,
    pub response_model: &'static str,
    pub temperature: f32,
    pub focus_areas: &'static [&'static str],
    pub response_style: &'static str,
}

pub const TECHNICAL: RagPreset = RagPreset {
    query_model: FAST_MODEL,
    response_model: STRONG_MODEL,
    temperature: 0.3,
    focus_areas: &[
        "technical skills",
        "problem solving",
        "architecture",
        "code quality",
        "project implementation",
        "debugging",
    ],
    response_style: "detailed technical examples with metrics and specific technologies used",
};

pub const BEHAVIORAL: RagPreset = RagPreset {
    query_model: FAST_MODEL,
    response_model: STRONG_MODEL,
    temperature: 0.7,
    focus_areas: &[
        "leadership",
        "teamwork",
        "communication",
        "conflict resolution",
        "adaptability",
        "initiative",
    ],
    response_style: "STAR format stories with emotional intelligence and interpersonal skills",
};

pub const EXECUTIVE: RagPreset = RagPreset {
    query_model: STRONG_MODEL,
    response_model: STRONG_MODEL,
    temperature: 0.5,
    focus_areas: &[
        "strategic thinking",
        "business impact",
        "vision",
        "leadership at scale",
        "decision making",
        "organizational influence",
    ],
    response_style: "high-level strategic responses with business metrics and leadership impact",
};

pub const GENERAL: RagPreset = RagPreset {
    query_model: FAST_MODEL,
    response_model: STRONG_MODEL,
    temperature: 0.5,
    focus_areas: &[
        "professional background",
        "skills",
        "experience",
        "achievements",
        "goals",
    ],
    response_style: "balanced professional responses with concrete examples",
};

/// Preset for an interview type
pub const fn preset_for(interview_type: InterviewType) -> &'static RagPreset {
    match interview_type {
        InterviewType::Technical => &TECHNICAL,
        InterviewType::Behavioral => &BEHAVIORAL,
        InterviewType::Executive => &EXECUTIVE,
        InterviewType::General => &GENERAL,
    }
}

/// Look up a preset by scenario key
///
/// Accepts both `technical` and `technical_interview` spellings, ignoring case
/// and surrounding whitespace. Anything else yields the general preset.
pub fn get_config(key: &str) -> &'static RagPreset {
    let normalized = key.trim().to_ascii_lowercase();
    let scenario = normalized
        .strip_suffix("_interview")
        .unwrap_or(normalized.as_str());

    scenario
        .parse::<InterviewType>()
        .map_or(&GENERAL, preset_for)
}

/// All presets in display order
pub fn all_presets() -> [(InterviewType, &'static RagPreset); 4] {
    InterviewType::ALL.map(|t| (t, preset_for(t)))
}
