use super::indicators::{
    CARBON_EMISSIONS, EMPLOYMENT, GDP_GROWTH, INNOVATION_INDEX, LITERACY, MSME_GROWTH,
};

/// Maps a raw indicator value onto the shared 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Share of a reference ceiling; the ceiling and anything above it score 100.
    Ceiling(f64),
    /// Lower is better: zero scores 100, the ceiling and anything above it score 0.
    Inverted(f64),
}

impl Normalization {
    pub fn apply(self, value: f64) -> f64 {
        let score = match self {
            Self::Ceiling(ceiling) => value / ceiling * 100.0,
            Self::Inverted(ceiling) => 100.0 - value / ceiling * 100.0,
        };
        // NaN lands on the floor
        score.max(0.0).min(100.0)
    }
}

/// Realistic range a projected value is held to after a policy perturbation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub const fn at_least(lower: f64) -> Self {
        Self {
            lower,
            upper: f64::INFINITY,
        }
    }

    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.lower).min(self.upper)
    }
}

/// Everything the scoring and impact models need to know about one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorProfile {
    pub key: &'static str,
    pub normalization: Normalization,
    /// Composite weight. Negative weights penalize the shortfall from a perfect score.
    pub weight: f64,
    pub bounds: Bounds,
}

impl IndicatorProfile {
    /// Share of the composite index this indicator accounts for at a given normalized score.
    pub fn contribution(&self, normalized: f64) -> f64 {
        if self.weight >= 0.0 {
            normalized * self.weight
        } else {
            (100.0 - normalized) * self.weight
        }
    }
}

/// Declarative per-indicator table. Adding an indicator to the index means adding a row.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: Vec<IndicatorProfile>,
}

impl ProfileTable {
    pub fn new(profiles: Vec<IndicatorProfile>) -> Self {
        Self { profiles }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            IndicatorProfile {
                key: GDP_GROWTH,
                normalization: Normalization::Ceiling(10.0),
                weight: 0.25,
                bounds: Bounds::new(-2.0, 15.0),
            },
            IndicatorProfile {
                key: EMPLOYMENT,
                normalization: Normalization::Ceiling(100.0),
                weight: 0.20,
                bounds: Bounds::new(85.0, 100.0),
            },
            IndicatorProfile {
                key: LITERACY,
                normalization: Normalization::Ceiling(100.0),
                weight: 0.15,
                bounds: Bounds::new(0.0, 100.0),
            },
            IndicatorProfile {
                key: CARBON_EMISSIONS,
                normalization: Normalization::Inverted(5.0),
                weight: -0.10,
                bounds: Bounds::at_least(0.5),
            },
            IndicatorProfile {
                key: INNOVATION_INDEX,
                normalization: Normalization::Ceiling(50.0),
                weight: 0.20,
                bounds: Bounds::new(0.0, 100.0),
            },
            IndicatorProfile {
                key: MSME_GROWTH,
                normalization: Normalization::Ceiling(20.0),
                weight: 0.20,
                bounds: Bounds::new(-5.0, 30.0),
            },
        ])
    }

    pub fn get(&self, key: &str) -> Option<&IndicatorProfile> {
        self.profiles.iter().find(|profile| profile.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorProfile> {
        self.profiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_normalization_caps_at_one_hundred() {
        let gdp = Normalization::Ceiling(10.0);
        assert!((gdp.apply(6.8) - 68.0).abs() < 1e-9);
        assert_eq!(gdp.apply(12.0), 100.0);
        assert_eq!(gdp.apply(-1.0), 0.0);
    }

    #[test]
    fn inverted_normalization_rewards_low_values() {
        let carbon = Normalization::Inverted(5.0);
        assert_eq!(carbon.apply(0.0), 100.0);
        assert!((carbon.apply(2.65) - 47.0).abs() < 1e-9);
        assert_eq!(carbon.apply(9.0), 0.0);
    }

    #[test]
    fn open_ended_bounds_only_enforce_the_floor() {
        let bounds = Bounds::at_least(0.5);
        assert_eq!(bounds.clamp(0.1), 0.5);
        assert_eq!(bounds.clamp(1.0e6), 1.0e6);
        assert_eq!(bounds.clamp(2.65), 2.65);
    }

    #[test]
    fn positive_weights_sum_to_one() {
        let table = ProfileTable::standard();
        let positive: f64 = table
            .iter()
            .map(|profile| profile.weight)
            .filter(|weight| *weight > 0.0)
            .sum();
        assert!((positive - 1.0).abs() < 1e-9);
        assert_eq!(table.get(CARBON_EMISSIONS).map(|p| p.weight), Some(-0.10));
    }

    #[test]
    fn negative_weight_penalizes_shortfall() {
        let table = ProfileTable::standard();
        let carbon = table.get(CARBON_EMISSIONS).expect("carbon profile");
        assert_eq!(carbon.contribution(100.0), 0.0);
        assert!((carbon.contribution(0.0) + 10.0).abs() < 1e-9);
    }
}
