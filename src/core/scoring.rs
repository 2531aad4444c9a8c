use std::fmt::Display;
use crate::core::similarity::{difference, intersection, symmetric_difference, PairMeasures};
use crate::models::{Category, CategoryScore, CoFounderProfile};

/// Calculate a closed-form category score (0-100, one decimal)
///
/// Scoring formulas:
/// skill_capability = 0.7 * skill_complementarity + 0.3 * experience_compatibility
/// vision_values    = 0.4 * interest_compatibility + 0.6 * values_alignment
/// working_dynamic  = 0.4 * strength_complementarity
///                  + 0.3 * weakness_complementarity
///                  + 0.3 * work_style_match
/// growth_potential = 0.3 * skill_complementarity + 0.2 * experience_compatibility
///                  + 0.3 * interest_compatibility + 0.2 * values_alignment
pub fn calculate_category_score(category: Category, m: &PairMeasures) -> f64 {
    let raw = match category {
        Category::SkillCapabilityCompatibility => {
            m.skill_complementarity * 0.7 + m.experience_compatibility * 0.3
        }
        Category::VisionValuesAlignment => {
            m.interest_compatibility * 0.4 + m.values_alignment * 0.6
        }
        Category::WorkingDynamic => {
            m.strength_complementarity * 0.4
                + m.weakness_complementarity * 0.3
                + m.work_style_match * 0.3
        }
        Category::GrowthPotential => {
            m.skill_complementarity * 0.3
                + m.experience_compatibility * 0.2
                + m.interest_compatibility * 0.3
                + m.values_alignment * 0.2
        }
    };

    round_one_decimal(raw * 100.0)
}

/// Score a category and explain it
pub fn score_category(
    category: Category,
    a: &CoFounderProfile,
    b: &CoFounderProfile,
    measures: &PairMeasures,
) -> CategoryScore {
    let description = match category {
        Category::SkillCapabilityCompatibility => describe_skill_capability(a, b, measures),
        Category::VisionValuesAlignment => describe_vision_values(a, b, measures),
        Category::WorkingDynamic => describe_working_dynamic(a, b, measures),
        Category::GrowthPotential => describe_growth_potential(a, b, measures),
    };

    CategoryScore {
        score: calculate_category_score(category, measures),
        description,
    }
}

#[inline]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn join_tags<T: Display>(tags: &[T]) -> String {
    tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", ")
}

fn describe_skill_capability(a: &CoFounderProfile, b: &CoFounderProfile, m: &PairMeasures) -> String {
    let complementarity_text = if m.skill_complementarity > 0.7 {
        "You have highly complementary skill sets, which is ideal for co-founders."
    } else if m.skill_complementarity > 0.4 {
        "You have moderately complementary skills with some overlap."
    } else {
        "You have significant skill overlap, which may lead to redundancies."
    };

    let experience_text = if m.experience_compatibility > 0.7 {
        "Your experience levels are well-matched."
    } else if m.experience_compatibility > 0.4 {
        "There's a moderate difference in your experience levels."
    } else {
        "There's a significant gap in your experience levels."
    };

    let mut detail = String::new();
    let shared = intersection(&a.skills, &b.skills);
    if !shared.is_empty() {
        detail.push_str(&format!("Shared skills: {}. ", join_tags(&shared)));
    }
    let unique_a = difference(&a.skills, &b.skills);
    if !unique_a.is_empty() {
        detail.push_str(&format!("{}'s unique skills: {}. ", a.name, join_tags(&unique_a)));
    }
    let unique_b = difference(&b.skills, &a.skills);
    if !unique_b.is_empty() {
        detail.push_str(&format!("{}'s unique skills: {}. ", b.name, join_tags(&unique_b)));
    }

    let years_gap = a.experience_years.abs_diff(b.experience_years);
    detail.push_str(&format!("Experience difference: {} years.", years_gap));

    format!("{} {} {}", complementarity_text, experience_text, detail)
}

fn describe_vision_values(a: &CoFounderProfile, b: &CoFounderProfile, m: &PairMeasures) -> String {
    let interest_text = if m.interest_compatibility > 0.7 {
        "You share strong interest in the same startup areas."
    } else if m.interest_compatibility > 0.3 {
        "You have some overlapping startup interests."
    } else {
        "You have very different startup interests."
    };

    let values_text = if m.values_alignment > 0.7 {
        "Your core values are strongly aligned."
    } else if m.values_alignment > 0.3 {
        "You share some important values."
    } else {
        "Your core values differ significantly."
    };

    let mut parts = Vec::new();
    let shared_interests = intersection(&a.startup_interests, &b.startup_interests);
    if !shared_interests.is_empty() {
        parts.push(format!("Shared interests: {}.", join_tags(&shared_interests)));
    }
    let different_interests = symmetric_difference(&a.startup_interests, &b.startup_interests);
    if !different_interests.is_empty() {
        parts.push(format!("Different interests: {}.", join_tags(&different_interests)));
    }
    let shared_values = intersection(&a.values, &b.values);
    if !shared_values.is_empty() {
        parts.push(format!("Shared values: {}.", join_tags(&shared_values)));
    }
    let different_values = symmetric_difference(&a.values, &b.values);
    if !different_values.is_empty() {
        parts.push(format!("Different values: {}.", join_tags(&different_values)));
    }

    join_sentences(&[interest_text.to_string(), values_text.to_string()], &parts)
}

fn describe_working_dynamic(a: &CoFounderProfile, b: &CoFounderProfile, m: &PairMeasures) -> String {
    let style_text = if a.work_style == b.work_style {
        format!("You both prefer a {} work style.", a.work_style)
    } else {
        format!(
            "{} prefers a {} work style, while {} prefers a {} work style.",
            a.name, a.work_style, b.name, b.work_style
        )
    };

    let strength_text = if m.strength_complementarity > 0.7 {
        "Your strengths complement each other well."
    } else {
        "You have some overlapping strengths."
    };

    let weakness_text = if m.weakness_complementarity > 0.7 {
        "Your weaknesses are different, which helps balance each other."
    } else {
        "You share some of the same weaknesses."
    };

    let mut parts = Vec::new();
    let shared_strengths = intersection(&a.strengths, &b.strengths);
    if !shared_strengths.is_empty() {
        parts.push(format!("Shared strengths: {}.", join_tags(&shared_strengths)));
    }
    let complementary_strengths = symmetric_difference(&a.strengths, &b.strengths);
    if !complementary_strengths.is_empty() {
        parts.push(format!("Complementary strengths: {}.", join_tags(&complementary_strengths)));
    }
    let shared_weaknesses = intersection(&a.weaknesses, &b.weaknesses);
    if !shared_weaknesses.is_empty() {
        parts.push(format!("Shared challenges: {}.", join_tags(&shared_weaknesses)));
    }

    join_sentences(
        &[style_text, strength_text.to_string(), weakness_text.to_string()],
        &parts,
    )
}

fn describe_growth_potential(a: &CoFounderProfile, b: &CoFounderProfile, m: &PairMeasures) -> String {
    let startup_experience = a.previous_startups as u16 + b.previous_startups as u16;
    let experience_text = if startup_experience > 3 {
        "Together you have significant startup experience."
    } else if startup_experience > 0 {
        "You have some startup experience between you."
    } else {
        "Neither of you has previous startup experience."
    };

    let skill = m.skill_complementarity;
    let interest = m.interest_compatibility;

    let synergy_text = if skill > 0.7 && interest > 0.5 {
        "Your complementary skills and shared interests create strong potential for innovation."
    } else if skill > 0.5 || interest > 0.5 {
        "There's moderate potential for innovation based on your skills and interests."
    } else {
        "You may face challenges innovating together due to overlapping skills or divergent interests."
    };

    let outlook_text = if skill > 0.7 && interest > 0.7 {
        "Your partnership shows excellent growth potential with complementary capabilities and aligned interests."
    } else if skill > 0.5 && interest > 0.5 {
        "Your partnership shows good growth potential, though you may need to work on aligning in some areas."
    } else {
        "Your growth potential may be limited without active effort to leverage complementary strengths."
    };

    format!("{} {} {}", experience_text, synergy_text, outlook_text)
}

fn join_sentences(lead: &[String], detail: &[String]) -> String {
    lead.iter().chain(detail.iter()).cloned().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interest, Skill, Strength, Value, Weakness, WorkStyle};

    fn create_test_profile(name: &str, skills: Vec<Skill>, years: u8) -> CoFounderProfile {
        CoFounderProfile {
            name: name.to_string(),
            skills,
            experience_years: years,
            previous_startups: 1,
            startup_interests: vec![Interest::Ai, Interest::Fintech],
            strengths: vec![Strength::Leadership, Strength::Execution],
            weaknesses: vec![Weakness::Impatience],
            work_style: WorkStyle::FastPaced,
            values: vec![Value::Innovation, Value::Impact],
        }
    }

    #[test]
    fn test_skill_capability_disjoint_skills_same_experience() {
        let a = create_test_profile("Ada", vec![Skill::Technical, Skill::Design], 5);
        let b = create_test_profile("Bo", vec![Skill::Sales, Skill::Marketing], 5);
        let measures = PairMeasures::between(&a, &b);

        assert_eq!(calculate_category_score(Category::SkillCapabilityCompatibility, &measures), 100.0);
    }

    #[test]
    fn test_working_dynamic_identical_profiles() {
        let a = create_test_profile("Ada", vec![Skill::Technical], 5);
        let measures = PairMeasures::between(&a, &a);

        assert_eq!(calculate_category_score(Category::WorkingDynamic, &measures), 30.0);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(67.04), 67.0);
        assert_eq!(round_one_decimal(67.06), 67.1);
        assert_eq!(round_one_decimal(30.000000000000004), 30.0);
    }

    #[test]
    fn test_skill_description_lists_unique_skills() {
        let a = create_test_profile("Ada", vec![Skill::Technical, Skill::Finance], 4);
        let b = create_test_profile("Bo", vec![Skill::Finance, Skill::Sales], 12);
        let measures = PairMeasures::between(&a, &b);

        let score = score_category(Category::SkillCapabilityCompatibility, &a, &b, &measures);

        assert!(score.description.contains("Shared skills: Finance."));
        assert!(score.description.contains("Ada's unique skills: Technical."));
        assert!(score.description.contains("Bo's unique skills: Sales."));
        assert!(score.description.contains("Experience difference: 8 years."));
        assert!(score.description.starts_with("You have moderately complementary skills"));
    }

    #[test]
    fn test_working_dynamic_description_for_shared_style() {
        let a = create_test_profile("Ada", vec![Skill::Technical], 5);
        let measures = PairMeasures::between(&a, &a);

        let score = score_category(Category::WorkingDynamic, &a, &a, &measures);

        assert!(score.description.starts_with("You both prefer a Fast-paced work style."));
        assert!(score.description.contains("Shared challenges: Impatience."));
        assert!(!score.description.contains("Complementary strengths"));
    }

    fn partially_aligned_pair() -> (CoFounderProfile, CoFounderProfile) {
        let mut a = create_test_profile("Ada", vec![Skill::Technical], 5);
        a.startup_interests = vec![Interest::Ai, Interest::Fintech];
        a.values = vec![Value::Impact, Value::Growth, Value::Ethics];

        let mut b = create_test_profile("Bo", vec![Skill::Technical, Skill::Sales], 7);
        b.startup_interests = vec![Interest::Ai];
        b.values = vec![Value::Impact, Value::Quality, Value::Growth];

        (a, b)
    }

    #[test]
    fn test_vision_and_growth_partial_overlap() {
        let (a, b) = partially_aligned_pair();
        let measures = PairMeasures::between(&a, &b);

        // interests 1/2, values 2/3, skills 0.5, experience 0.8
        assert_eq!(measures.interest_compatibility, 0.5);
        assert!((measures.values_alignment - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(measures.skill_complementarity, 0.5);
        assert!((measures.experience_compatibility - 0.8).abs() < 1e-9);

        // 0.4 * 0.5 + 0.6 * 0.667
        assert_eq!(calculate_category_score(Category::VisionValuesAlignment, &measures), 60.0);
        // 0.3 * 0.5 + 0.2 * 0.8 + 0.3 * 0.5 + 0.2 * 0.667
        assert_eq!(calculate_category_score(Category::GrowthPotential, &measures), 59.3);
    }

    #[test]
    fn test_vision_description_partial_overlap() {
        let (a, b) = partially_aligned_pair();
        let measures = PairMeasures::between(&a, &b);

        let score = score_category(Category::VisionValuesAlignment, &a, &b, &measures);

        assert_eq!(
            score.description,
            "You have some overlapping startup interests. You share some important values. \
             Shared interests: AI. Different interests: Fintech. \
             Shared values: Impact, Growth. Different values: Ethics, Quality."
        );
    }

    #[test]
    fn test_vision_description_extremes() {
        let a = create_test_profile("Ada", vec![Skill::Technical], 5);
        let measures = PairMeasures::between(&a, &a);
        let aligned = score_category(Category::VisionValuesAlignment, &a, &a, &measures);

        assert!(aligned.description.starts_with(
            "You share strong interest in the same startup areas. Your core values are strongly aligned."
        ));
        assert!(!aligned.description.contains("Different"));

        let mut b = create_test_profile("Bo", vec![Skill::Sales], 5);
        b.startup_interests = vec![Interest::Health];
        b.values = vec![Value::Balance];
        let measures = PairMeasures::between(&a, &b);
        let divergent = score_category(Category::VisionValuesAlignment, &a, &b, &measures);

        assert_eq!(divergent.score, 0.0);
        assert!(divergent.description.starts_with(
            "You have very different startup interests. Your core values differ significantly."
        ));
        assert!(!divergent.description.contains("Shared"));
    }

    #[test]
    fn test_growth_description_startup_experience_bands() {
        let (mut a, mut b) = partially_aligned_pair();
        let measures = PairMeasures::between(&a, &b);

        let some = score_category(Category::GrowthPotential, &a, &b, &measures);
        assert!(some.description.starts_with("You have some startup experience between you."));

        a.previous_startups = 3;
        b.previous_startups = 1;
        let significant = score_category(Category::GrowthPotential, &a, &b, &measures);
        assert!(significant
            .description
            .starts_with("Together you have significant startup experience."));
    }

    #[test]
    fn test_growth_description_without_startup_experience() {
        let mut a = create_test_profile("Ada", vec![Skill::Technical], 5);
        a.previous_startups = 0;
        let measures = PairMeasures::between(&a, &a);

        let score = score_category(Category::GrowthPotential, &a, &a, &measures);

        assert!(score.description.starts_with("Neither of you has previous startup experience."));
    }
}
