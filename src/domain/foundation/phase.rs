//! Phase enum representing the 7 delivery project stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Number of project phases.
pub const PHASE_COUNT: usize = 7;

/// The 7 delivery phases, from discovery through post go-live support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Discover,
    Plan,
    Design,
    Build,
    Test,
    Deploy,
    PostGoLive,
}

/// Reference guidance for assigning a risk weight to a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseRiskProfile {
    pub description: &'static str,
    pub typical_risks: &'static [&'static str],
    pub low_risk: &'static str,
    pub high_risk: &'static str,
}

impl Phase {
    /// Returns all phases in canonical order.
    pub fn all() -> &'static [Phase; PHASE_COUNT] {
        &[
            Phase::Discover,
            Phase::Plan,
            Phase::Design,
            Phase::Build,
            Phase::Test,
            Phase::Deploy,
            Phase::PostGoLive,
        ]
    }

    /// Phases that count as development work (everything before go-live).
    pub fn development() -> &'static [Phase] {
        &Self::all()[..PHASE_COUNT - 1]
    }

    /// Returns the 0-based index of this phase in the canonical order.
    pub fn order_index(&self) -> usize {
        *self as usize
    }

    /// Returns true for the post-launch phase.
    pub fn is_post_launch(&self) -> bool {
        matches!(self, Phase::PostGoLive)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Discover => "Discover",
            Phase::Plan => "Plan",
            Phase::Design => "Design",
            Phase::Build => "Build",
            Phase::Test => "Test",
            Phase::Deploy => "Deploy",
            Phase::PostGoLive => "Post Go-Live",
        }
    }

    /// Returns the snake_case key used in JSON and YAML documents.
    pub fn key(&self) -> &'static str {
        match self {
            Phase::Discover => "discover",
            Phase::Plan => "plan",
            Phase::Design => "design",
            Phase::Build => "build",
            Phase::Test => "test",
            Phase::Deploy => "deploy",
            Phase::PostGoLive => "post_go_live",
        }
    }

    /// Risk guidance shown next to the phase risk weight input.
    pub fn risk_profile(&self) -> PhaseRiskProfile {
        match self {
            Phase::Discover => PhaseRiskProfile {
                description: "Requirements gathering, stakeholder alignment, scope definition",
                typical_risks: &[
                    "Unclear or changing requirements",
                    "Stakeholder availability and alignment",
                    "Scope creep potential",
                    "Business process complexity",
                ],
                low_risk: "Well-defined project with clear requirements",
                high_risk: "Complex business transformation with unclear scope",
            },
            Phase::Plan => PhaseRiskProfile {
                description: "Project planning, resource allocation, timeline development",
                typical_risks: &[
                    "Resource availability constraints",
                    "Dependency management complexity",
                    "Timeline optimization challenges",
                    "Cross-team coordination needs",
                ],
                low_risk: "Standard project with available resources",
                high_risk: "Multi-team project with resource constraints",
            },
            Phase::Design => PhaseRiskProfile {
                description: "Architecture design, technical specifications, UI/UX design",
                typical_risks: &[
                    "Technical architecture complexity",
                    "Integration design challenges",
                    "Performance requirements",
                    "Scalability considerations",
                ],
                low_risk: "Standard design patterns and proven architecture",
                high_risk: "New architecture or complex integration requirements",
            },
            Phase::Build => PhaseRiskProfile {
                description: "Code development, component creation, feature implementation",
                typical_risks: &[
                    "Technical implementation complexity",
                    "Third-party integration challenges",
                    "Code quality and maintainability",
                    "Team skill gaps",
                ],
                low_risk: "Standard development with experienced team",
                high_risk: "Complex features with new technology stack",
            },
            Phase::Test => PhaseRiskProfile {
                description: "Testing execution, defect resolution, quality assurance",
                typical_risks: &[
                    "Test environment stability",
                    "Complex test scenario coverage",
                    "Integration testing challenges",
                    "Performance testing complexity",
                ],
                low_risk: "Well-automated testing with stable environments",
                high_risk: "Complex integration testing with manual processes",
            },
            Phase::Deploy => PhaseRiskProfile {
                description: "Production deployment, release management, go-live activities",
                typical_risks: &[
                    "Production environment issues",
                    "Data migration complexity",
                    "Rollback procedure needs",
                    "User training and adoption",
                ],
                low_risk: "Standard deployment with proven processes",
                high_risk: "Complex migration with high business impact",
            },
            Phase::PostGoLive => PhaseRiskProfile {
                description: "Production support, issue resolution, user adoption",
                typical_risks: &[
                    "Production support complexity",
                    "User adoption challenges",
                    "Performance optimization needs",
                    "Ongoing maintenance requirements",
                ],
                low_risk: "Standard support for familiar system",
                high_risk: "Complex system with high support demands",
            },
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Phase {
    type Err = ValidationError;

    /// Accepts either the snake_case key or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::all()
            .iter()
            .find(|p| p.key() == s || p.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("phase", format!("unknown phase '{}'", s)))
    }
}
