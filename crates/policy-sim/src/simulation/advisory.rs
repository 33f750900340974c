use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Qualitative caveats attached to every projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub factors: Vec<&'static str>,
}

impl RiskAssessment {
    pub fn standard() -> Self {
        Self {
            level: RiskLevel::Medium,
            factors: vec![
                "Implementation complexity",
                "Market volatility",
                "Regulatory changes",
            ],
        }
    }
}

pub fn recommendations() -> Vec<&'static str> {
    vec![
        "Monitor implementation progress closely",
        "Establish feedback mechanisms",
        "Prepare contingency plans",
    ]
}
