use std::collections::BTreeSet;
use crate::models::CoFounderProfile;

fn to_set<T: Ord + Copy>(items: &[T]) -> BTreeSet<T> {
    items.iter().copied().collect()
}

/// Tags present in both lists, in tag order
pub fn intersection<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
    to_set(a).intersection(&to_set(b)).copied().collect()
}

/// Tags in `a` that `b` does not have
pub fn difference<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
    to_set(a).difference(&to_set(b)).copied().collect()
}

/// Tags held by exactly one side
pub fn symmetric_difference<T: Ord + Copy>(a: &[T], b: &[T]) -> Vec<T> {
    to_set(a).symmetric_difference(&to_set(b)).copied().collect()
}

/// `1 - |a ∩ b| / |a ∪ b|`, or 0 when both sets are empty
#[inline]
pub fn complementarity<T: Ord + Copy>(a: &[T], b: &[T]) -> f64 {
    let a = to_set(a);
    let b = to_set(b);
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let overlap = a.intersection(&b).count();
    1.0 - overlap as f64 / union as f64
}

/// `|a ∩ b| / max(|a|, |b|)`, or 0 when both sets are empty
#[inline]
pub fn overlap_over_max<T: Ord + Copy>(a: &[T], b: &[T]) -> f64 {
    let a = to_set(a);
    let b = to_set(b);
    let denominator = a.len().max(b.len());
    if denominator == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / denominator as f64
}

/// `|a ∩ b| / min(|a|, |b|)`, or 0 when either set is empty
#[inline]
pub fn overlap_over_min<T: Ord + Copy>(a: &[T], b: &[T]) -> f64 {
    let a = to_set(a);
    let b = to_set(b);
    let denominator = a.len().min(b.len());
    if denominator == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / denominator as f64
}

/// Experience gap scaled over ten years, capped at 1
#[inline]
pub fn experience_compatibility(years_a: u8, years_b: u8) -> f64 {
    let gap = (years_a as f64 - years_b as f64).abs();
    1.0 - (gap / 10.0).min(1.0)
}

#[inline]
pub fn work_style_match<T: PartialEq>(a: &T, b: &T) -> f64 {
    if a == b { 1.0 } else { 0.5 }
}

/// Elementary measures for one profile pair, shared by every category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairMeasures {
    pub skill_complementarity: f64,
    pub experience_compatibility: f64,
    pub interest_compatibility: f64,
    pub strength_complementarity: f64,
    pub weakness_complementarity: f64,
    pub work_style_match: f64,
    pub values_alignment: f64,
}

impl PairMeasures {
    pub fn between(a: &CoFounderProfile, b: &CoFounderProfile) -> Self {
        Self {
            skill_complementarity: complementarity(&a.skills, &b.skills),
            experience_compatibility: experience_compatibility(a.experience_years, b.experience_years),
            interest_compatibility: overlap_over_max(&a.startup_interests, &b.startup_interests),
            strength_complementarity: complementarity(&a.strengths, &b.strengths),
            weakness_complementarity: complementarity(&a.weaknesses, &b.weaknesses),
            work_style_match: work_style_match(&a.work_style, &b.work_style),
            values_alignment: overlap_over_min(&a.values, &b.values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complementarity_identical_sets() {
        assert_eq!(complementarity(&[1, 2, 3], &[3, 2, 1]), 0.0);
    }

    #[test]
    fn test_complementarity_disjoint_sets() {
        assert_eq!(complementarity(&[1, 2], &[3, 4, 5]), 1.0);
    }

    #[test]
    fn test_complementarity_partial_overlap() {
        // 1 shared out of 4 distinct
        assert!((complementarity(&[1, 2], &[2, 3, 4]) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sets_degrade_to_zero() {
        let empty: [u8; 0] = [];
        assert_eq!(complementarity(&empty, &empty), 0.0);
        assert_eq!(overlap_over_max(&empty, &empty), 0.0);
        assert_eq!(overlap_over_min(&empty, &[1, 2]), 0.0);
    }

    #[test]
    fn test_overlap_ratios() {
        assert!((overlap_over_max(&[1, 2, 3], &[3]) - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(overlap_over_min(&[1, 2, 3], &[3]), 1.0);
    }

    #[test]
    fn test_experience_compatibility() {
        assert_eq!(experience_compatibility(5, 5), 1.0);
        assert!((experience_compatibility(2, 7) - 0.5).abs() < 1e-9);
        assert_eq!(experience_compatibility(2, 15), 0.0);
    }

    #[test]
    fn test_set_views_are_sorted() {
        assert_eq!(intersection(&[3, 1, 2], &[2, 3]), vec![2, 3]);
        assert_eq!(difference(&[3, 1, 2], &[2]), vec![1, 3]);
        assert_eq!(symmetric_difference(&[1, 2], &[2, 3]), vec![1, 3]);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        assert_eq!(complementarity(&[1, 1, 2], &[2, 2]), 0.5);
    }
}
