use std::collections::HashMap;

/// Every session starts from this score before any answer is applied.
pub const BASE_SCORE: f64 = 0.5;

fn business_type(key: &str) -> Option<f64> {
    let weight = match key {
        "technology" => 0.9,
        "healthcare" => 0.85,
        "services" => 0.8,
        "manufacturing" => 0.75,
        "retail" => 0.7,
        "wholesale" => 0.65,
        "construction" => 0.6,
        "education" => 0.7,
        "restaurants" => 0.5,
        "other" => 0.5,
        _ => return None,
    };
    Some(weight)
}

fn annual_revenue(key: &str) -> Option<f64> {
    let weight = match key {
        "less-187500" => 0.3,
        "187500-375000" => 0.4,
        "375000-937500" => 0.5,
        "937500-1875000" => 0.6,
        "1875000-3750000" => 0.7,
        "more-3750000" => 0.8,
        _ => return None,
    };
    Some(weight)
}

fn profit_margin(key: &str) -> Option<f64> {
    let weight = match key {
        "less-10" => 0.2,
        "10-20" => 0.4,
        "20-30" => 0.6,
        "30-40" => 0.8,
        "40-50" => 0.9,
        "more-50" => 1.0,
        _ => return None,
    };
    Some(weight)
}

fn company_age(key: &str) -> Option<f64> {
    let weight = match key {
        "less-1" => 0.3,
        "1-2" => 0.4,
        "3-5" => 0.6,
        "6-10" => 0.8,
        "11-20" => 0.9,
        "more-20" => 1.0,
        _ => return None,
    };
    Some(weight)
}

fn employee_count(key: &str) -> Option<f64> {
    let weight = match key {
        "1-5" => 0.4,
        "6-10" => 0.5,
        "11-25" => 0.6,
        "26-50" => 0.7,
        "51-100" => 0.8,
        "more-100" => 0.9,
        _ => return None,
    };
    Some(weight)
}

pub struct Dimension {
    pub field: &'static str,
    pub weight: f64,
    lookup: fn(&str) -> Option<f64>,
}

pub const DIMENSIONS: [Dimension; 5] = [
    Dimension { field: "businessType", weight: 0.2, lookup: business_type },
    Dimension { field: "annualRevenue", weight: 0.2, lookup: annual_revenue },
    Dimension { field: "profitMargin", weight: 0.2, lookup: profit_margin },
    Dimension { field: "companyAge", weight: 0.2, lookup: company_age },
    Dimension { field: "employees", weight: 0.1, lookup: employee_count },
];

/// Additive weighted heuristic over the categorical answers, clamped to
/// [0, 1]. The weights are marketing-qualification placeholders, not a
/// calibrated credit model; the output is not financial advice. Missing
/// or unrecognized keys contribute nothing.
pub fn compute_score(answers: &HashMap<String, String>) -> f64 {
    let mut score = BASE_SCORE;
    for dimension in &DIMENSIONS {
        if let Some(value) = answers
            .get(dimension.field)
            .and_then(|key| (dimension.lookup)(key))
        {
            score += value * dimension.weight;
        }
    }
    score.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Strong,
    Fair,
    Limited,
}

impl Tier {
    /// Buckets are inclusive on their lower bound: 80, 60 and 40 land in
    /// the higher tier.
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Tier::Excellent
        } else if percentage >= 60 {
            Tier::Strong
        } else if percentage >= 40 {
            Tier::Fair
        } else {
            Tier::Limited
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => {
                "Excellent! Your business qualifies for premium funding at highly competitive rates."
            }
            Tier::Strong => {
                "Very good! Your business qualifies for solid funding on reasonable terms."
            }
            Tier::Fair => {
                "Acceptable. Your business can obtain funding subject to some additional conditions."
            }
            Tier::Limited => {
                "Needs work. We recommend strengthening your financial position before applying."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EligibilityResult {
    pub score: f64,
    pub percentage: u32,
    pub tier: Tier,
}

pub fn evaluate(answers: &HashMap<String, String>) -> EligibilityResult {
    let score = compute_score(answers);
    let percentage = (score * 100.0).round() as u32;
    EligibilityResult {
        score,
        percentage,
        tier: Tier::for_percentage(percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(field, key)| (field.to_string(), key.to_string()))
            .collect()
    }

    #[test]
    fn best_answers_clamp_to_one() {
        let answers = answers(&[
            ("businessType", "technology"),
            ("annualRevenue", "more-3750000"),
            ("profitMargin", "more-50"),
            ("companyAge", "more-20"),
            ("employees", "more-100"),
        ]);
        // raw sum is 1.33, clamped
        assert_eq!(compute_score(&answers), 1.0);
        let result = evaluate(&answers);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.tier, Tier::Excellent);
    }

    #[test]
    fn no_answers_yield_base_score() {
        let empty = HashMap::new();
        assert_eq!(compute_score(&empty), BASE_SCORE);
        let result = evaluate(&empty);
        assert_eq!(result.percentage, 50);
        assert_eq!(result.tier, Tier::Fair);
    }

    #[test]
    fn unrecognized_keys_contribute_nothing() {
        let answers = answers(&[
            ("businessType", "piracy"),
            ("annualRevenue", ""),
            ("favouriteColor", "blue"),
        ]);
        assert_eq!(compute_score(&answers), BASE_SCORE);
    }

    #[test]
    fn partial_answers_add_their_weighted_value() {
        let answers = answers(&[("businessType", "technology")]);
        let score = compute_score(&answers);
        assert!((score - 0.68).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn score_is_deterministic() {
        let answers = answers(&[
            ("companyAge", "3-5"),
            ("employees", "11-25"),
            ("businessType", "retail"),
        ]);
        let first = compute_score(&answers);
        for _ in 0..10 {
            assert_eq!(compute_score(&answers), first);
        }
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::for_percentage(100), Tier::Excellent);
        assert_eq!(Tier::for_percentage(80), Tier::Excellent);
        assert_eq!(Tier::for_percentage(79), Tier::Strong);
        assert_eq!(Tier::for_percentage(60), Tier::Strong);
        assert_eq!(Tier::for_percentage(59), Tier::Fair);
        assert_eq!(Tier::for_percentage(40), Tier::Fair);
        assert_eq!(Tier::for_percentage(39), Tier::Limited);
        assert_eq!(Tier::for_percentage(0), Tier::Limited);
    }

    #[test]
    fn every_dimension_moves_the_score() {
        let mut acc = HashMap::new();
        let mut previous = compute_score(&acc);
        for (field, key) in [
            ("businessType", "healthcare"),
            ("annualRevenue", "375000-937500"),
            ("profitMargin", "20-30"),
            ("companyAge", "6-10"),
            ("employees", "26-50"),
        ] {
            acc.insert(field.to_string(), key.to_string());
            let next = compute_score(&acc);
            assert!(next > previous, "{field} did not raise the score");
            previous = next;
        }
    }
}
