// Prompt text and response schemas for every model call.
// Schemas use the Gemini OpenAPI subset (upper-case type names).

use serde_json::{json, Value};
use crate::models::{Dimension, PersonInfo};
use crate::services::llm::StructuredPrompt;

pub const PROFILE_EXTRACTION_SYSTEM: &str = "\
Given what was found on the web about a person, extract the professional signals needed to \
compare them with a potential co-founder:
- current role and company
- location
- past roles and career progression
- education
- skills and endorsements
- industries involved
- notable keywords or patterns (founder, product, AI, ...)
- potential flags (frequent job changes, long gaps, ...)

Be as detailed as the sources allow and do not invent facts. Answer in English.";

pub const STARTUP_IDEAS_SYSTEM: &str = "\
You are the friend who always has wild startup ideas. Given the two profiles, come up with \
exactly three startup ideas they could build together. Make them sound cool, original and just \
the right amount of crazy. Keep each idea to at most 10 words. For each idea add a short reason \
grounded in their backgrounds explaining why this pair could pull it off (at most 100 words).";

/// What a card for each dimension must focus on
///
/// Cards are generated concurrently, so each focus is written to pull the
/// model away from generic compatibility text.
pub fn dimension_focus(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::SkillComplementarity => {
            "What can each of them do that the other cannot? Reward coverage of each other's gaps \
             (technical depth, commercial reach, operations) and penalize duplicated skill sets."
        }
        Dimension::IndustryExperienceAlignment => {
            "Compare the industries, markets and career stages they have worked in. Reward shared \
             domain context and seniority levels that let them speak the same language."
        }
        Dimension::ConflictProbability => {
            "Estimate how likely they are to clash: competing claims on the same role, mismatched \
             seniority, stubbornness signals, red flags such as frequent job changes. A HIGHER score \
             means conflict is MORE likely."
        }
        Dimension::GrowthCatalystPotential => {
            "Judge how much each would push the other to grow: what they could teach each other and \
             how their trajectories could accelerate together."
        }
        Dimension::CulturalFitIndex => {
            "Infer the company culture each would build from their backgrounds (company types, \
             locations, roles, education) and judge whether those cultures fit together."
        }
        Dimension::CritiqueOpenness => {
            "Judge how well they would give and take hard feedback from each other, using signals \
             such as mentoring, research, consulting, reviewing or leadership roles."
        }
    }
}

/// System instruction for one comparison card
pub fn card_system_prompt(dimension: Dimension) -> String {
    format!(
        "You are writing for a fun, addictive co-founder matchmaking app.\n\n\
         Given the two profiles, write a playful, witty and specific comparison card titled \
         \"{title}\".\n\n\
         Focus: {focus}\n\n\
         The card must include:\n\
         - score: an integer from 0 to 100 for how well they match on \"{title}\" only\n\
         - insight: one short, funny line, professional but in the tone of a dating app. \
         Do not mention the score.\n\n\
         Other cards covering other dimensions are written at the same time, so stay strictly on \
         \"{title}\" and do not reuse generic compatibility lines. Keep it light and human but \
         grounded in the profiles. Write in English.",
        title = dimension.title(),
        focus = dimension_focus(dimension),
    )
}

/// Plain-text rendering of a profile for comparison prompts
pub fn describe_profile(profile: &PersonInfo) -> String {
    format!(
        "Name: {}\nLocation: {}\nCurrent role: {}\nPast roles: {}\nEducation: {}\nSkills: {}\n\
         Industries: {}\nNotable keywords: {}\nPotential flags: {}",
        profile.name,
        profile.location,
        profile.current_role,
        profile.past_roles,
        profile.education,
        profile.skills,
        profile.industries,
        profile.notable_keywords,
        profile.potential_flags,
    )
}

fn comparison_message(a: &PersonInfo, b: &PersonInfo) -> String {
    format!(
        "Here are the profiles to compare.\n\n--- Profile 1 ---\n{}\n\n--- Profile 2 ---\n{}",
        describe_profile(a),
        describe_profile(b)
    )
}

pub fn profile_extraction_prompt(identifier: &str, search_text: &str) -> StructuredPrompt {
    StructuredPrompt {
        system: PROFILE_EXTRACTION_SYSTEM.to_string(),
        user: format!(
            "Here is the information I found on the internet about {}:\n\n{}",
            identifier, search_text
        ),
        schema: person_info_schema(),
    }
}

pub fn card_prompt(a: &PersonInfo, b: &PersonInfo, dimension: Dimension) -> StructuredPrompt {
    StructuredPrompt {
        system: card_system_prompt(dimension),
        user: comparison_message(a, b),
        schema: card_schema(),
    }
}

pub fn startup_ideas_prompt(a: &PersonInfo, b: &PersonInfo) -> StructuredPrompt {
    StructuredPrompt {
        system: STARTUP_IDEAS_SYSTEM.to_string(),
        user: comparison_message(a, b),
        schema: startup_ideas_schema(),
    }
}

fn string_object(fields: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> = fields
        .iter()
        .map(|f| (f.to_string(), json!({"type": "STRING"})))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": fields,
    })
}

pub fn person_info_schema() -> Value {
    string_object(&[
        "name",
        "location",
        "current_role",
        "past_roles",
        "education",
        "skills",
        "industries",
        "notable_keywords",
        "potential_flags",
    ])
}

pub fn card_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {"type": "INTEGER"},
            "insight": {"type": "STRING"}
        },
        "required": ["score", "insight"]
    })
}

pub fn startup_ideas_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "ideas": {
                "type": "ARRAY",
                "items": string_object(&["idea", "reason"])
            }
        },
        "required": ["ideas"]
    })
}
