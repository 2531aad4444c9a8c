// Unit tests for Cofounder Match

use cofounder_match::core::{
    aggregate::{mean_with_inversion, weighted_overall},
    similarity::{complementarity, overlap_over_max, overlap_over_min, work_style_match, PairMeasures},
    scoring::calculate_category_score,
    CompatibilityMatcher, SyntheticProfileResolver,
};
use cofounder_match::models::{
    Card, Category, CategoryScore, CategoryScores, CoFounderProfile, Dimension, Interest,
    ScoringWeights, Skill, Strength, Value, Weakness, WorkStyle,
};

fn create_profile(skills: Vec<Skill>, strengths: Vec<Strength>, weaknesses: Vec<Weakness>) -> CoFounderProfile {
    CoFounderProfile {
        name: "Test Founder".to_string(),
        skills,
        experience_years: 8,
        previous_startups: 1,
        startup_interests: vec![Interest::Enterprise],
        strengths,
        weaknesses,
        work_style: WorkStyle::Collaborative,
        values: vec![Value::Growth, Value::Balance],
    }
}

fn cards(scores: &[(Dimension, u8)]) -> Vec<Card> {
    scores
        .iter()
        .map(|(title, score)| Card {
            title: *title,
            score: *score,
            insight: String::new(),
        })
        .collect()
}

fn full_card_set(skill: u8, conflict: u8) -> Vec<Card> {
    cards(&[
        (Dimension::SkillComplementarity, skill),
        (Dimension::IndustryExperienceAlignment, 55),
        (Dimension::ConflictProbability, conflict),
        (Dimension::GrowthCatalystPotential, 65),
        (Dimension::CulturalFitIndex, 45),
        (Dimension::CritiqueOpenness, 72),
    ])
}

#[test]
fn test_identical_profiles_have_zero_complementarity() {
    let resolver = SyntheticProfileResolver::new();
    let profile = resolver.resolve("https://www.linkedin.com/in/same-person");
    let measures = PairMeasures::between(&profile, &profile);

    assert_eq!(measures.skill_complementarity, 0.0);
    assert_eq!(measures.strength_complementarity, 0.0);
    assert_eq!(measures.weakness_complementarity, 0.0);
    assert_eq!(measures.work_style_match, 1.0);
}

#[test]
fn test_disjoint_profiles_are_fully_complementary() {
    let a = create_profile(
        vec![Skill::Technical, Skill::Design],
        vec![Strength::Creativity, Strength::Analysis],
        vec![Weakness::Perfectionism],
    );
    let b = create_profile(
        vec![Skill::Sales, Skill::Finance, Skill::Operations],
        vec![Strength::Leadership, Strength::Networking, Strength::Execution],
        vec![Weakness::Overconfidence, Weakness::Impatience],
    );
    let measures = PairMeasures::between(&a, &b);

    assert_eq!(measures.skill_complementarity, 1.0);
    assert_eq!(measures.strength_complementarity, 1.0);
    assert_eq!(measures.weakness_complementarity, 1.0);
}

#[test]
fn test_empty_skill_sets_do_not_fail() {
    let a = create_profile(vec![], vec![Strength::Analysis], vec![Weakness::Impatience]);
    let measures = PairMeasures::between(&a, &a);

    assert_eq!(measures.skill_complementarity, 0.0);
    assert_eq!(complementarity::<Skill>(&[], &[]), 0.0);
    assert_eq!(overlap_over_max::<Interest>(&[], &[]), 0.0);
    assert_eq!(overlap_over_min::<Value>(&[], &[Value::Impact]), 0.0);
}

#[test]
fn test_work_style_match_values() {
    assert_eq!(work_style_match(&WorkStyle::Methodical, &WorkStyle::Methodical), 1.0);
    assert_eq!(work_style_match(&WorkStyle::Methodical, &WorkStyle::FastPaced), 0.5);
}

#[test]
fn test_same_seed_working_dynamic_is_thirty() {
    let resolver = SyntheticProfileResolver::new();
    let a = resolver.resolve("abc123");
    let b = resolver.resolve("abc123");
    assert_eq!(a, b);

    let measures = PairMeasures::between(&a, &b);
    assert_eq!(calculate_category_score(Category::WorkingDynamic, &measures), 30.0);

    let report = CompatibilityMatcher::default().evaluate(&a, &b);
    assert_eq!(report.scores.working_dynamic.score, 30.0);
}

#[test]
fn test_synthetic_resolver_is_deterministic() {
    let resolver = SyntheticProfileResolver::new();
    for link in ["https://www.linkedin.com/in/ada", "bob", "https://x.test/in/charlie/"] {
        let first = serde_json::to_vec(&resolver.resolve(link)).unwrap();
        let second = serde_json::to_vec(&SyntheticProfileResolver::new().resolve(link)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_weighted_overall_example() {
    let score = |score| CategoryScore {
        score,
        description: String::new(),
    };
    let scores = CategoryScores {
        skill_capability_compatibility: score(80.0),
        vision_values_alignment: score(60.0),
        working_dynamic: score(70.0),
        growth_potential: score(50.0),
    };

    let overall = weighted_overall(&scores, &ScoringWeights::default());

    assert!((overall - 0.67).abs() < 1e-9);
    assert!(overall < 0.70);
}

#[test]
fn test_mean_with_inversion_example() {
    let scores = cards(&[
        (Dimension::SkillComplementarity, 90),
        (Dimension::IndustryExperienceAlignment, 80),
        (Dimension::ConflictProbability, 20),
        (Dimension::GrowthCatalystPotential, 70),
        (Dimension::CulturalFitIndex, 60),
    ]);

    assert_eq!(mean_with_inversion(&scores), 76);
}

#[test]
fn test_mean_is_monotonic_in_regular_dimensions() {
    let mut previous = 0;
    for skill in (0..=100).step_by(5) {
        let overall = mean_with_inversion(&full_card_set(skill, 40));
        assert!(overall >= previous, "overall dropped when skill rose to {}", skill);
        previous = overall;
    }
}

#[test]
fn test_mean_is_antitonic_in_conflict() {
    let mut previous = u8::MAX;
    for conflict in (0..=100).step_by(5) {
        let overall = mean_with_inversion(&full_card_set(60, conflict));
        assert!(overall <= previous, "overall rose when conflict rose to {}", conflict);
        previous = overall;
    }
}

#[test]
fn test_category_scores_stay_in_range() {
    let resolver = SyntheticProfileResolver::new();
    let matcher = CompatibilityMatcher::default();

    for i in 0..50 {
        let a = resolver.resolve(&format!("founder-{}", i));
        let b = resolver.resolve(&format!("founder-{}", i + 50));
        let report = matcher.evaluate(&a, &b);

        for category in Category::ALL {
            let score = report.scores.get(category).score;
            assert!((0.0..=100.0).contains(&score), "{:?} out of range: {}", category, score);
            assert_eq!(score, (score * 10.0).round() / 10.0);
        }
        assert!((0.0..=100.0).contains(&report.overall_match_score));
        if report.is_good_match {
            assert!(report.overall_match_score >= 70.0);
        }
    }
}
