use crate::models::{Card, Category, CategoryScores, ScoringWeights};

/// Score of a card with inverted dimensions flipped so higher is better
#[inline]
pub fn effective_score(card: &Card) -> u8 {
    if card.title.is_inverted() {
        100 - card.score.min(100)
    } else {
        card.score
    }
}

/// Truncated mean of card scores, with conflict inverted
///
/// overall = floor((skill + industry + (100 - conflict) + growth + culture + critique) / n)
pub fn mean_with_inversion(cards: &[Card]) -> u8 {
    if cards.is_empty() {
        return 0;
    }

    let total: u32 = cards.iter().map(|c| effective_score(c) as u32).sum();
    (total / cards.len() as u32) as u8
}

/// Weighted overall score on a 0-1 scale
///
/// overall = (skill * 0.3 + vision * 0.3 + dynamic * 0.25 + growth * 0.15) / 100
pub fn weighted_overall(scores: &CategoryScores, weights: &ScoringWeights) -> f64 {
    Category::ALL
        .iter()
        .map(|category| scores.get(*category).score * weights.weight(*category))
        .sum::<f64>()
        / 100.0
}

/// Insights (score > 70) and risks (score < 50) per category
pub fn insights_and_risks(scores: &CategoryScores) -> (Vec<String>, Vec<String>) {
    let mut insights = Vec::new();
    let mut risks = Vec::new();

    for category in Category::ALL {
        let score = scores.get(category).score;
        let (insight, risk) = match category {
            Category::SkillCapabilityCompatibility => {
                ("Strong skill complementarity", "Potential skill overlap or gaps")
            }
            Category::VisionValuesAlignment => {
                ("Aligned vision and values", "Differing goals and priorities")
            }
            Category::WorkingDynamic => {
                ("Compatible working styles", "Potential conflicts in how you work")
            }
            Category::GrowthPotential => {
                ("Strong foundation for growth", "Limited growth synergy")
            }
        };

        if score > 70.0 {
            insights.push(insight.to_string());
        } else if score < 50.0 {
            risks.push(risk.to_string());
        }
    }

    (insights, risks)
}

/// One-paragraph summary naming the strongest and weakest dimensions
pub fn summarize(cards: &[Card], overall: u8) -> Option<String> {
    let strongest = cards.iter().max_by_key(|c| effective_score(c))?;
    let weakest = cards.iter().min_by_key(|c| effective_score(c))?;

    let headline = if overall >= 75 {
        "This pairing shows strong co-founder potential."
    } else if overall >= 50 {
        "This pairing is promising but has areas to work through."
    } else {
        "This pairing faces real challenges as a founding team."
    };

    Some(format!(
        "{} Overall match: {}/100. Strongest signal: {}. Watch closely: {}.",
        headline,
        overall,
        strongest.title,
        weakest.title
    ))
}
