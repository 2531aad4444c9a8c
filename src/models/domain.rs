use serde::{Deserialize, Serialize};
use crate::models::tags::{Interest, Skill, Strength, Value, Weakness, WorkStyle};

/// Professional profile extracted from search results by the language model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub location: String,
    pub current_role: String,
    pub past_roles: String,
    pub education: String,
    pub skills: String,
    pub industries: String,
    pub notable_keywords: String,
    pub potential_flags: String,
}

/// Synthetic co-founder profile used by the closed-form scorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoFounderProfile {
    pub name: String,
    pub skills: Vec<Skill>,
    pub experience_years: u8,
    pub previous_startups: u8,
    pub startup_interests: Vec<Interest>,
    pub strengths: Vec<Strength>,
    pub weaknesses: Vec<Weakness>,
    pub work_style: WorkStyle,
    pub values: Vec<Value>,
}

/// Compatibility dimension judged by the language model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Skill Complementarity")]
    SkillComplementarity,
    #[serde(rename = "Industry & Experience Alignment")]
    IndustryExperienceAlignment,
    #[serde(rename = "Conflict Probability")]
    ConflictProbability,
    #[serde(rename = "Growth Catalyst Potential")]
    GrowthCatalystPotential,
    #[serde(rename = "Cultural Fit Index")]
    CulturalFitIndex,
    #[serde(rename = "Critique Openness")]
    CritiqueOpenness,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::SkillComplementarity,
        Dimension::IndustryExperienceAlignment,
        Dimension::ConflictProbability,
        Dimension::GrowthCatalystPotential,
        Dimension::CulturalFitIndex,
        Dimension::CritiqueOpenness,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::SkillComplementarity => "Skill Complementarity",
            Dimension::IndustryExperienceAlignment => "Industry & Experience Alignment",
            Dimension::ConflictProbability => "Conflict Probability",
            Dimension::GrowthCatalystPotential => "Growth Catalyst Potential",
            Dimension::CulturalFitIndex => "Cultural Fit Index",
            Dimension::CritiqueOpenness => "Critique Openness",
        }
    }

    /// Lower scores are better on inverted dimensions
    pub fn is_inverted(&self) -> bool {
        matches!(self, Dimension::ConflictProbability)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// One scored dimension for a profile pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: Dimension,
    pub score: u8,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupIdea {
    pub idea: String,
    pub reason: String,
}

/// Full report for the model-backed match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_match_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub skill_complementarity: Card,
    pub industry_experience_alignment: Card,
    pub conflict_probability: Card,
    pub growth_catalyst_potential: Card,
    pub cultural_fit_index: Card,
    pub critique_openness: Card,
    pub startup_ideas: Vec<StartupIdea>,
}

impl MatchResult {
    pub fn card(&self, dimension: Dimension) -> &Card {
        match dimension {
            Dimension::SkillComplementarity => &self.skill_complementarity,
            Dimension::IndustryExperienceAlignment => &self.industry_experience_alignment,
            Dimension::ConflictProbability => &self.conflict_probability,
            Dimension::GrowthCatalystPotential => &self.growth_catalyst_potential,
            Dimension::CulturalFitIndex => &self.cultural_fit_index,
            Dimension::CritiqueOpenness => &self.critique_openness,
        }
    }
}

/// Closed-form compatibility category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SkillCapabilityCompatibility,
    VisionValuesAlignment,
    WorkingDynamic,
    GrowthPotential,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::SkillCapabilityCompatibility,
        Category::VisionValuesAlignment,
        Category::WorkingDynamic,
        Category::GrowthPotential,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::SkillCapabilityCompatibility => "Skill & Capability Compatibility",
            Category::VisionValuesAlignment => "Vision & Values Alignment",
            Category::WorkingDynamic => "Working Dynamic",
            Category::GrowthPotential => "Growth Potential",
        }
    }
}

/// Score (0-100, one decimal) with its explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub skill_capability_compatibility: CategoryScore,
    pub vision_values_alignment: CategoryScore,
    pub working_dynamic: CategoryScore,
    pub growth_potential: CategoryScore,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> &CategoryScore {
        match category {
            Category::SkillCapabilityCompatibility => &self.skill_capability_compatibility,
            Category::VisionValuesAlignment => &self.vision_values_alignment,
            Category::WorkingDynamic => &self.working_dynamic,
            Category::GrowthPotential => &self.growth_potential,
        }
    }
}

/// Full report for the closed-form match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub overall_match_score: f64,
    pub is_good_match: bool,
    pub scores: CategoryScores,
    pub match_insights: Vec<String>,
    pub potential_risks: Vec<String>,
}

/// Category weights for the closed-form overall score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill_capability: f64,
    pub vision_values: f64,
    pub working_dynamic: f64,
    pub growth_potential: f64,
}

impl ScoringWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::SkillCapabilityCompatibility => self.skill_capability,
            Category::VisionValuesAlignment => self.vision_values,
            Category::WorkingDynamic => self.working_dynamic,
            Category::GrowthPotential => self.growth_potential,
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_capability: 0.30,
            vision_values: 0.30,
            working_dynamic: 0.25,
            growth_potential: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_serializes_as_title() {
        for dimension in Dimension::ALL {
            let json = serde_json::to_string(&dimension).unwrap();
            assert_eq!(json, format!("\"{}\"", dimension.title()));
        }
    }

    #[test]
    fn test_only_conflict_is_inverted() {
        let inverted: Vec<_> = Dimension::ALL.iter().filter(|d| d.is_inverted()).collect();
        assert_eq!(inverted, vec![&Dimension::ConflictProbability]);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        let total: f64 = Category::ALL.iter().map(|c| weights.weight(*c)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
