use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const GDP_GROWTH: &str = "gdp_growth";
pub const EMPLOYMENT: &str = "employment";
pub const LITERACY: &str = "literacy";
pub const CARBON_EMISSIONS: &str = "carbon_emissions";
pub const INNOVATION_INDEX: &str = "innovation_index";
pub const MSME_GROWTH: &str = "msme_growth";

/// Socioeconomic metric tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    #[serde(skip)]
    pub key: &'static str,
    pub name: &'static str,
    pub unit: &'static str,
    pub current: f64,
    pub target: f64,
}

/// Fixed, display-ordered set of indicators the host reads current values from.
#[derive(Debug, Clone)]
pub struct IndicatorCatalog {
    indicators: Vec<Indicator>,
}

impl IndicatorCatalog {
    pub fn new(indicators: Vec<Indicator>) -> Self {
        Self { indicators }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Indicator {
                key: GDP_GROWTH,
                name: "GDP Growth Rate",
                unit: "%",
                current: 6.8,
                target: 8.0,
            },
            Indicator {
                key: EMPLOYMENT,
                name: "Employment Rate",
                unit: "%",
                current: 94.2,
                target: 96.0,
            },
            Indicator {
                key: LITERACY,
                name: "Literacy Rate",
                unit: "%",
                current: 77.7,
                target: 85.0,
            },
            Indicator {
                key: CARBON_EMISSIONS,
                name: "Carbon Emissions",
                unit: "MT CO2",
                current: 2.65,
                target: 2.0,
            },
            Indicator {
                key: INNOVATION_INDEX,
                name: "Innovation Index",
                unit: "Score",
                current: 36.8,
                target: 45.0,
            },
            Indicator {
                key: MSME_GROWTH,
                name: "MSME Growth",
                unit: "%",
                current: 12.5,
                target: 18.0,
            },
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.iter()
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Snapshot of every indicator's current value.
    pub fn current_values(&self) -> IndicatorSet {
        self.indicators
            .iter()
            .map(|indicator| (indicator.key, indicator.current))
            .collect()
    }

    /// Catalog keyed by identifier, the shape the JSON API exposes.
    pub fn by_key(&self) -> BTreeMap<&'static str, &Indicator> {
        self.indicators
            .iter()
            .map(|indicator| (indicator.key, indicator))
            .collect()
    }
}

/// Indicator values keyed by identifier.
///
/// The same shape carries current, projected and normalized values; keys the scoring
/// profile table does not know are carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSet(BTreeMap<String, f64>);

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut f64> {
        self.0.get_mut(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(key.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for IndicatorSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

impl IntoIterator for IndicatorSet {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
