use serde::Serialize;

use super::indicators::{
    CARBON_EMISSIONS, EMPLOYMENT, GDP_GROWTH, INNOVATION_INDEX, LITERACY, MSME_GROWTH,
};

pub const MSME_FUNDING: &str = "msme_funding";
pub const CARBON_TAX: &str = "carbon_tax";
pub const EDUCATION_INVESTMENT: &str = "education_investment";
pub const INFRASTRUCTURE: &str = "infrastructure";
pub const DIGITAL_TRANSFORMATION: &str = "digital_transformation";

/// Sensitivity of one indicator to a scenario, per unit of diminishing intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactFactor {
    pub indicator: &'static str,
    pub factor: f64,
}

const fn factor(indicator: &'static str, factor: f64) -> ImpactFactor {
    ImpactFactor { indicator, factor }
}

/// Named policy intervention.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub factors: Vec<ImpactFactor>,
}

impl Scenario {
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.key,
            name: self.name,
            description: self.description,
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Scenario {
                key: MSME_FUNDING,
                name: "MSME Funding Increase",
                description: "Increase funding allocation for Micro, Small & Medium Enterprises",
                icon: "fas fa-coins",
                factors: vec![
                    factor(GDP_GROWTH, 0.8),
                    factor(EMPLOYMENT, 1.2),
                    factor(MSME_GROWTH, 2.0),
                    factor(INNOVATION_INDEX, 0.6),
                    factor(LITERACY, 0.2),
                ],
            },
            Scenario {
                key: CARBON_TAX,
                name: "Carbon Tax Implementation",
                description: "Implement progressive carbon tax policy to reduce emissions",
                icon: "fas fa-leaf",
                factors: vec![
                    factor(CARBON_EMISSIONS, -1.5),
                    factor(GDP_GROWTH, -0.3),
                    factor(INNOVATION_INDEX, 0.4),
                    factor(EMPLOYMENT, -0.1),
                ],
            },
            Scenario {
                key: EDUCATION_INVESTMENT,
                name: "Education Investment",
                description: "Boost investment in education infrastructure and programs",
                icon: "fas fa-graduation-cap",
                factors: vec![
                    factor(LITERACY, 1.0),
                    factor(INNOVATION_INDEX, 0.8),
                    factor(EMPLOYMENT, 0.4),
                    factor(GDP_GROWTH, 0.3),
                ],
            },
            Scenario {
                key: INFRASTRUCTURE,
                name: "Infrastructure Development",
                description: "Accelerate infrastructure development projects",
                icon: "fas fa-road",
                factors: vec![
                    factor(GDP_GROWTH, 1.2),
                    factor(EMPLOYMENT, 0.8),
                    factor(MSME_GROWTH, 0.6),
                    factor(INNOVATION_INDEX, 0.3),
                ],
            },
            Scenario {
                key: DIGITAL_TRANSFORMATION,
                name: "Digital Transformation",
                description: "Accelerate digital adoption across sectors",
                icon: "fas fa-laptop-code",
                factors: vec![
                    factor(INNOVATION_INDEX, 1.5),
                    factor(MSME_GROWTH, 1.0),
                    factor(GDP_GROWTH, 0.6),
                    factor(EMPLOYMENT, 0.2),
                    factor(LITERACY, 0.3),
                ],
            },
        ])
    }

    pub fn get(&self, key: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn summaries(&self) -> Vec<ScenarioSummary> {
        self.scenarios.iter().map(Scenario::summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::profile::ProfileTable;

    #[test]
    fn standard_catalog_lists_five_scenarios() {
        let catalog = ScenarioCatalog::standard();
        assert_eq!(catalog.iter().count(), 5);
        assert!(catalog.get(CARBON_TAX).is_some());
        assert!(catalog.get("universal_basic_income").is_none());
    }

    #[test]
    fn every_factor_targets_a_profiled_indicator() {
        let catalog = ScenarioCatalog::standard();
        let table = ProfileTable::standard();
        for scenario in catalog.iter() {
            for impact in &scenario.factors {
                assert!(
                    table.get(impact.indicator).is_some(),
                    "{} references unprofiled indicator {}",
                    scenario.key,
                    impact.indicator
                );
            }
        }
    }

    #[test]
    fn carbon_tax_cuts_emissions() {
        let catalog = ScenarioCatalog::standard();
        let carbon_tax = catalog.get(CARBON_TAX).expect("carbon tax scenario");
        let carbon = carbon_tax
            .factors
            .iter()
            .find(|impact| impact.indicator == CARBON_EMISSIONS)
            .expect("carbon factor");
        assert_eq!(carbon.factor, -1.5);
        assert!(carbon_tax
            .factors
            .iter()
            .all(|impact| impact.indicator != LITERACY));
        assert_eq!(carbon_tax.summary().icon, "fas fa-leaf");
    }
}
