//! Initiative enum representing the 7 efficiency levers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Percentage, ValidationError};

/// Number of efficiency initiatives.
pub const INITIATIVE_COUNT: usize = 7;

/// The fixed set of efficiency initiatives an organization can adopt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initiative {
    ModernizationStudio,
    AiAutomation,
    N2sCarm,
    PreconfiguredEnvs,
    AutomatedTesting,
    Edcc,
    IntegrationCodeReuse,
}

impl Initiative {
    /// Returns all initiatives in canonical order.
    pub fn all() -> &'static [Initiative; INITIATIVE_COUNT] {
        &[
            Initiative::ModernizationStudio,
            Initiative::AiAutomation,
            Initiative::N2sCarm,
            Initiative::PreconfiguredEnvs,
            Initiative::AutomatedTesting,
            Initiative::Edcc,
            Initiative::IntegrationCodeReuse,
        ]
    }

    /// Returns the 0-based index of this initiative in the canonical order.
    pub fn order_index(&self) -> usize {
        *self as usize
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Initiative::ModernizationStudio => "Modernization Studio",
            Initiative::AiAutomation => "AI/Automation",
            Initiative::N2sCarm => "N2S CARM",
            Initiative::PreconfiguredEnvs => "Preconfigured Envs",
            Initiative::AutomatedTesting => "Automated Testing",
            Initiative::Edcc => "EDCC",
            Initiative::IntegrationCodeReuse => "Integration Code Reuse",
        }
    }

    /// Returns the snake_case key used in JSON and YAML documents.
    pub fn key(&self) -> &'static str {
        match self {
            Initiative::ModernizationStudio => "modernization_studio",
            Initiative::AiAutomation => "ai_automation",
            Initiative::N2sCarm => "n2s_carm",
            Initiative::PreconfiguredEnvs => "preconfigured_envs",
            Initiative::AutomatedTesting => "automated_testing",
            Initiative::Edcc => "edcc",
            Initiative::IntegrationCodeReuse => "integration_code_reuse",
        }
    }

    /// Returns what the initiative is.
    pub fn description(&self) -> &'static str {
        match self {
            Initiative::ModernizationStudio => "Ellucian's modern development platform and tooling",
            Initiative::AiAutomation => {
                "AI-powered code generation, automated workflows, and intelligent tooling"
            }
            Initiative::N2sCarm => "Navigate-to-SaaS Change and Release Management processes",
            Initiative::PreconfiguredEnvs => {
                "Pre-built development, testing, and deployment environments"
            }
            Initiative::AutomatedTesting => {
                "Automated unit, integration, and end-to-end testing frameworks"
            }
            Initiative::Edcc => "Ellucian Data Center Cloud infrastructure and services",
            Initiative::IntegrationCodeReuse => {
                "Standardized integration patterns, reusable components and APIs"
            }
        }
    }

    /// Descriptions for 0%, 25%, 50%, 75% and 100% adoption.
    pub fn maturity_descriptions(&self) -> [&'static str; 5] {
        match self {
            Initiative::ModernizationStudio => [
                "No use of Modernization Studio tools",
                "Basic setup, occasional use for simple tasks",
                "Regular use for standard development, some team training",
                "Well-integrated into workflow, most developers proficient",
                "Fully adopted, optimized workflows, advanced features used",
            ],
            Initiative::AiAutomation => [
                "No AI/automation tools in development process",
                "Basic AI code suggestions, simple automation scripts",
                "Regular use of AI coding assistants, some automated workflows",
                "Advanced AI integration, automated testing/deployment pipelines",
                "Full AI-driven development, comprehensive automation ecosystem",
            ],
            Initiative::N2sCarm => [
                "Traditional manual change management",
                "Basic N2S processes documented, limited adoption",
                "Standard N2S workflows in place, team partially trained",
                "Well-established processes, good compliance and metrics",
                "Optimized N2S CARM, full automation, continuous improvement",
            ],
            Initiative::PreconfiguredEnvs => [
                "Manual environment setup for each project",
                "Some standardized environments, mostly manual setup",
                "Standard pre-configured environments available and used",
                "Comprehensive environment library, automated provisioning",
                "Fully automated, optimized environments with instant deployment",
            ],
            Initiative::AutomatedTesting => [
                "Primarily manual testing processes",
                "Basic unit tests, some automation for critical paths",
                "Good test coverage, automated regression testing",
                "Comprehensive test automation, CI/CD integration",
                "Full test automation, AI-driven testing, performance optimization",
            ],
            Initiative::Edcc => [
                "On-premise infrastructure, manual deployments",
                "Basic cloud migration, some EDCC services adopted",
                "Standard EDCC deployment, cloud-native development",
                "Advanced EDCC features, optimized cloud architecture",
                "Full EDCC optimization, serverless, auto-scaling",
            ],
            Initiative::IntegrationCodeReuse => [
                "Custom integrations built from scratch each time",
                "Some common patterns documented, limited reuse",
                "Standard integration library, moderate component reuse",
                "Comprehensive reusable component library, good adoption",
                "Fully optimized integration platform, API-first, maximum reuse",
            ],
        }
    }

    /// Returns the description of the closest defined adoption level at or above `maturity`.
    pub fn maturity_description(&self, maturity: Percentage) -> &'static str {
        let descriptions = self.maturity_descriptions();
        let slot = match maturity.value() {
            v if v <= 0.0 => 0,
            v if v <= 25.0 => 1,
            v if v <= 50.0 => 2,
            v if v <= 75.0 => 3,
            _ => 4,
        };
        descriptions[slot]
    }
}

impl fmt::Display for Initiative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Initiative {
    type Err = ValidationError;

    /// Accepts either the snake_case key or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Initiative::all()
            .iter()
            .find(|i| i.key() == s || i.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("initiative", format!("unknown initiative '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_7_initiatives() {
        assert_eq!(Initiative::all().len(), 7);
        assert_eq!(Initiative::all()[4], Initiative::AutomatedTesting);
    }

    #[test]
    fn order_index_matches_position() {
        for (idx, initiative) in Initiative::all().iter().enumerate() {
            assert_eq!(initiative.order_index(), idx);
        }
    }

    #[test]
    fn maturity_description_picks_nearest_level_above() {
        let init = Initiative::AutomatedTesting;
        assert_eq!(init.maturity_description(Percentage::ZERO), "Primarily manual testing processes");
        assert_eq!(
            init.maturity_description(Percentage::new(10.0)),
            "Basic unit tests, some automation for critical paths"
        );
        assert_eq!(
            init.maturity_description(Percentage::new(50.0)),
            "Good test coverage, automated regression testing"
        );
        assert_eq!(
            init.maturity_description(Percentage::new(80.0)),
            "Full test automation, AI-driven testing, performance optimization"
        );
    }

    #[test]
    fn parses_keys_and_display_names() {
        assert_eq!("ai_automation".parse::<Initiative>().unwrap(), Initiative::AiAutomation);
        assert_eq!("AI/Automation".parse::<Initiative>().unwrap(), Initiative::AiAutomation);
        assert_eq!("EDCC".parse::<Initiative>().unwrap(), Initiative::Edcc);
        assert!("Blockchain".parse::<Initiative>().is_err());
    }

    #[test]
    fn keys_round_trip_through_serde() {
        for initiative in Initiative::all() {
            let json = serde_json::to_string(initiative).unwrap();
            assert_eq!(json, format!("\"{}\"", initiative.key()));
        }
    }
}
