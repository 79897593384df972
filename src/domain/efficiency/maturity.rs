//! Maturity Assessor - Scores the automation questionnaire into a 1-5 maturity level.
//!
//! Levels follow a CMMI-style ladder (Ad-hoc → Optimizing). The assessment
//! produces both a discrete level and a continuous realistic savings potential
//! that is fine-tuned by test coverage and CI/CD answers, then clamped into the
//! level's declared savings range.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

use crate::domain::foundation::ValidationError;

// ════════════════════════════════════════════════════════════════════════════════
// Maturity Levels
// ════════════════════════════════════════════════════════════════════════════════

/// Automation characteristics typical for a maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutomationCharacteristics {
    pub test_automation: &'static str,
    pub ci_cd: &'static str,
    pub code_reuse: &'static str,
    pub documentation: &'static str,
    pub environment_management: &'static str,
}

/// Static description of one maturity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaturityTier {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: AutomationCharacteristics,
    /// Realistic savings potential range `[min, max]` in percent.
    pub savings_range: [f64; 2],
    pub typical_savings: f64,
}

const TIERS: [MaturityTier; 5] = [
    MaturityTier {
        level: 1,
        name: "Ad-hoc/Manual",
        description: "Processes are unpredictable, poorly controlled, and reactive",
        characteristics: AutomationCharacteristics {
            test_automation: "0-20%",
            ci_cd: "Manual deployments",
            code_reuse: "0-10%",
            documentation: "Manual/inconsistent",
            environment_management: "Manual setup",
        },
        savings_range: [5.0, 8.0],
        typical_savings: 6.5,
    },
    MaturityTier {
        level: 2,
        name: "Repeatable",
        description: "Processes are characterized for projects and often reactive",
        characteristics: AutomationCharacteristics {
            test_automation: "20-40%",
            ci_cd: "Basic automated builds",
            code_reuse: "10-25%",
            documentation: "Templates used",
            environment_management: "Some standardization",
        },
        savings_range: [8.0, 12.0],
        typical_savings: 10.0,
    },
    MaturityTier {
        level: 3,
        name: "Defined",
        description: "Processes are characterized for organization and proactive",
        characteristics: AutomationCharacteristics {
            test_automation: "40-65%",
            ci_cd: "Automated testing in pipeline",
            code_reuse: "25-40%",
            documentation: "Standardized and automated",
            environment_management: "Standardized environments",
        },
        savings_range: [12.0, 18.0],
        typical_savings: 15.0,
    },
    MaturityTier {
        level: 4,
        name: "Managed",
        description: "Processes are measured and controlled",
        characteristics: AutomationCharacteristics {
            test_automation: "65-85%",
            ci_cd: "Full deployment automation",
            code_reuse: "40-60%",
            documentation: "Generated and maintained",
            environment_management: "Infrastructure as Code",
        },
        savings_range: [18.0, 25.0],
        typical_savings: 21.5,
    },
    MaturityTier {
        level: 5,
        name: "Optimizing",
        description: "Focus on continuous process improvement",
        characteristics: AutomationCharacteristics {
            test_automation: "85%+",
            ci_cd: "Self-healing pipelines",
            code_reuse: "60%+",
            documentation: "AI-assisted and self-updating",
            environment_management: "Fully automated and optimized",
        },
        savings_range: [25.0, 30.0],
        typical_savings: 27.5,
    },
];

/// Organizational maturity level, 1 (Ad-hoc) through 5 (Optimizing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MaturityLevel(u8);

impl MaturityLevel {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Creates a level, returning error outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "maturity_level",
                1.0,
                5.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Maps a normalized assessment score in `[0, 1]` to a level.
    pub fn from_score(score: f64) -> Self {
        let raw = (score * 4.0).floor() as i64 + 1;
        Self(raw.clamp(1, 5) as u8)
    }

    /// All levels, lowest first.
    pub fn all() -> impl Iterator<Item = MaturityLevel> {
        (1..=5).map(MaturityLevel)
    }

    /// Returns the numeric level.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the static tier description.
    pub fn tier(&self) -> &'static MaturityTier {
        &TIERS[usize::from(self.0 - 1)]
    }

    /// Returns the tier name.
    pub fn name(&self) -> &'static str {
        self.tier().name
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.0
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} - {}", self.0, self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Questionnaire
// ════════════════════════════════════════════════════════════════════════════════

/// Input style of an assessment question.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Slider { min: f64, max: f64, default: f64 },
    Select { options: &'static [&'static str], default: usize },
}

/// The automation maturity questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentQuestion {
    TestAutomationCoverage,
    CiCdMaturity,
    CodeReuseLevel,
    EnvironmentAutomation,
    DocumentationAutomation,
}

impl AssessmentQuestion {
    /// Returns all questions in canonical order.
    pub fn all() -> &'static [AssessmentQuestion] {
        &[
            AssessmentQuestion::TestAutomationCoverage,
            AssessmentQuestion::CiCdMaturity,
            AssessmentQuestion::CodeReuseLevel,
            AssessmentQuestion::EnvironmentAutomation,
            AssessmentQuestion::DocumentationAutomation,
        ]
    }

    /// Looks up a question by its response key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().find(|q| q.key() == key).copied()
    }

    /// Returns the response key.
    pub fn key(&self) -> &'static str {
        match self {
            AssessmentQuestion::TestAutomationCoverage => "test_automation_coverage",
            AssessmentQuestion::CiCdMaturity => "ci_cd_maturity",
            AssessmentQuestion::CodeReuseLevel => "code_reuse_level",
            AssessmentQuestion::EnvironmentAutomation => "environment_automation",
            AssessmentQuestion::DocumentationAutomation => "documentation_automation",
        }
    }

    /// Weight in the overall score; weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            AssessmentQuestion::TestAutomationCoverage => 0.30,
            AssessmentQuestion::CiCdMaturity => 0.25,
            AssessmentQuestion::CodeReuseLevel => 0.20,
            AssessmentQuestion::EnvironmentAutomation => 0.15,
            AssessmentQuestion::DocumentationAutomation => 0.10,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            AssessmentQuestion::TestAutomationCoverage => {
                "What percentage of your testing is currently automated?"
            }
            AssessmentQuestion::CiCdMaturity => "Current CI/CD automation level:",
            AssessmentQuestion::CodeReuseLevel => {
                "What percentage of code/components do you typically reuse across projects?"
            }
            AssessmentQuestion::EnvironmentAutomation => "Environment management maturity:",
            AssessmentQuestion::DocumentationAutomation => "Documentation and knowledge management:",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            AssessmentQuestion::TestAutomationCoverage => {
                "Include unit tests, integration tests, and regression testing"
            }
            AssessmentQuestion::CiCdMaturity => {
                "How automated is your build and deployment process?"
            }
            AssessmentQuestion::CodeReuseLevel => {
                "Shared libraries, components, APIs, and integration patterns"
            }
            AssessmentQuestion::EnvironmentAutomation => {
                "How are development, test, and production environments managed?"
            }
            AssessmentQuestion::DocumentationAutomation => {
                "How is project documentation created and maintained?"
            }
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            AssessmentQuestion::TestAutomationCoverage => QuestionKind::Slider {
                min: 0.0,
                max: 100.0,
                default: 30.0,
            },
            AssessmentQuestion::CiCdMaturity => QuestionKind::Select {
                options: &[
                    "Manual deployments",
                    "Basic build automation",
                    "Automated testing in pipeline",
                    "Full deployment automation",
                    "Self-healing pipelines",
                ],
                default: 1,
            },
            AssessmentQuestion::CodeReuseLevel => QuestionKind::Slider {
                min: 0.0,
                max: 80.0,
                default: 20.0,
            },
            AssessmentQuestion::EnvironmentAutomation => QuestionKind::Select {
                options: &[
                    "Manual environment setup",
                    "Some scripted setup",
                    "Standardized environments",
                    "Infrastructure as Code",
                    "Fully automated and optimized",
                ],
                default: 1,
            },
            AssessmentQuestion::DocumentationAutomation => QuestionKind::Select {
                options: &[
                    "Manual documentation",
                    "Template-based documentation",
                    "Some automated generation",
                    "Mostly automated documentation",
                    "AI-assisted and self-updating",
                ],
                default: 1,
            },
        }
    }

    /// Select options, empty for sliders.
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind() {
            QuestionKind::Select { options, .. } => options,
            QuestionKind::Slider { .. } => &[],
        }
    }

    /// True if `value` is a finite slider reading within the declared bounds.
    pub fn accepts_numeric(&self, value: f64) -> bool {
        match self.kind() {
            QuestionKind::Slider { min, max, .. } => value.is_finite() && (min..=max).contains(&value),
            QuestionKind::Select { .. } => false,
        }
    }

    /// Resolves an option label to its index.
    pub fn option_index(&self, label: &str) -> Option<usize> {
        self.options().iter().position(|o| *o == label)
    }

    /// The answer a fresh questionnaire starts with.
    pub fn default_answer(&self) -> Answer {
        match self.kind() {
            QuestionKind::Slider { default, .. } => Answer::Numeric(default),
            QuestionKind::Select { default, .. } => Answer::Choice(default),
        }
    }
}

impl fmt::Display for AssessmentQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A single questionnaire answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Slider value on the 0-100 scale.
    Numeric(f64),
    /// Zero-based index into the question's options.
    Choice(usize),
    /// A select label that matched none of the declared options.
    Unrecognized(String),
}

impl Answer {
    /// Builds an answer from a select label, keeping unknown labels visible.
    pub fn from_label(question: AssessmentQuestion, label: &str) -> Self {
        match question.option_index(label) {
            Some(index) => Answer::Choice(index),
            None => Answer::Unrecognized(label.to_string()),
        }
    }

    /// Builds an answer from a slider reading.
    ///
    /// Readings outside the question's bounds, or sent to a select question,
    /// become `Unrecognized` so they score 0 and are reported.
    pub fn from_number(question: AssessmentQuestion, value: f64) -> Self {
        if question.accepts_numeric(value) {
            Answer::Numeric(value)
        } else {
            Answer::Unrecognized(value.to_string())
        }
    }

    /// Normalized score in `[0, 1]`, or `None` when the answer does not fit the question.
    fn normalized(&self, question: AssessmentQuestion) -> Option<f64> {
        match (question.kind(), self) {
            (QuestionKind::Slider { .. }, Answer::Numeric(value)) if question.accepts_numeric(*value) => {
                Some(value / 100.0)
            }
            (QuestionKind::Select { options, .. }, Answer::Choice(index)) if *index < options.len() => {
                let max_index = options.len() - 1;
                if max_index == 0 {
                    Some(0.0)
                } else {
                    Some(*index as f64 / max_index as f64)
                }
            }
            _ => None,
        }
    }

    /// True if this answer marks the question as an improvement area.
    fn is_weak(&self, question: AssessmentQuestion) -> bool {
        match (question.kind(), self) {
            (QuestionKind::Slider { .. }, Answer::Numeric(value)) => {
                question.accepts_numeric(*value) && *value < 50.0
            }
            (QuestionKind::Select { options, .. }, Answer::Choice(index)) => {
                *index < options.len() && *index < 2
            }
            _ => false,
        }
    }
}

/// Questionnaire answers keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponses(BTreeMap<AssessmentQuestion, Answer>);

impl AssessmentResponses {
    /// Creates an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every question answered with its default.
    pub fn defaults() -> Self {
        AssessmentQuestion::all()
            .iter()
            .map(|q| (*q, q.default_answer()))
            .collect()
    }

    /// Records an answer, replacing any previous one.
    pub fn with(mut self, question: AssessmentQuestion, answer: Answer) -> Self {
        self.0.insert(question, answer);
        self
    }

    /// Records an answer.
    pub fn insert(&mut self, question: AssessmentQuestion, answer: Answer) {
        self.0.insert(question, answer);
    }

    pub fn get(&self, question: AssessmentQuestion) -> Option<&Answer> {
        self.0.get(&question)
    }

    /// Iterates answers in canonical question order.
    pub fn iter(&self) -> impl Iterator<Item = (AssessmentQuestion, &Answer)> {
        self.0.iter().map(|(q, a)| (*q, a))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(AssessmentQuestion, Answer)> for AssessmentResponses {
    fn from_iter<T: IntoIterator<Item = (AssessmentQuestion, Answer)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Assessment Result
// ════════════════════════════════════════════════════════════════════════════════

/// Current organizational maturity derived from the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentMaturity {
    pub level: MaturityLevel,
    pub name: &'static str,
    pub description: &'static str,
    pub characteristics: AutomationCharacteristics,
    /// Realistic savings potential in percent, clamped to `savings_range`.
    pub savings_potential: f64,
    pub savings_range: [f64; 2],
    /// Weighted normalized score in `[0, 1]`.
    pub assessment_score: f64,
    pub improvement_areas: Vec<AssessmentQuestion>,
    /// Questions whose answers matched no declared option and scored zero.
    pub unmapped_responses: Vec<AssessmentQuestion>,
}

impl CurrentMaturity {
    /// Builds a maturity result for a known level at its typical savings.
    pub fn at_level(level: MaturityLevel) -> Self {
        let tier = level.tier();
        Self {
            level,
            name: tier.name,
            description: tier.description,
            characteristics: tier.characteristics,
            savings_potential: tier.typical_savings,
            savings_range: tier.savings_range,
            assessment_score: f64::from(level.value() - 1) / 4.0,
            improvement_areas: Vec::new(),
            unmapped_responses: Vec::new(),
        }
    }

    /// Returns true if `question` was flagged as weak.
    pub fn needs_improvement(&self, question: AssessmentQuestion) -> bool {
        self.improvement_areas.contains(&question)
    }
}

/// Fallback test coverage for the savings boost when unanswered.
const BASELINE_TEST_COVERAGE: f64 = 30.0;
/// Fallback CI/CD option index for the savings boost when unanswered.
const BASELINE_CI_CD_INDEX: usize = 1;

/// Questionnaire scoring functions.
pub struct MaturityAssessor;

impl MaturityAssessor {
    /// Scores responses into a maturity level and realistic savings potential.
    ///
    /// # Edge Cases
    /// - No responses: score 0, level 1
    /// - Unrecognized select label: scores 0 for that question and is reported
    pub fn assess(responses: &AssessmentResponses) -> CurrentMaturity {
        let mut total_score = 0.0;
        let mut total_weight = 0.0;
        let mut unmapped = Vec::new();

        for (question, answer) in responses.iter() {
            let score = match answer.normalized(question) {
                Some(score) => score,
                None => {
                    warn!(question = %question, answer = ?answer, "Assessment answer matches no declared option; scoring 0");
                    unmapped.push(question);
                    0.0
                }
            };
            total_score += score * question.weight();
            total_weight += question.weight();
        }

        let assessment_score = if total_weight > 0.0 {
            total_score / total_weight
        } else {
            0.0
        };
        let level = MaturityLevel::from_score(assessment_score);
        let tier = level.tier();

        let [min_savings, max_savings] = tier.savings_range;
        let adjusted = tier.typical_savings
            + Self::test_coverage_boost(responses)
            + Self::ci_cd_boost(responses);
        let savings_potential = adjusted.max(min_savings).min(max_savings);

        CurrentMaturity {
            level,
            name: tier.name,
            description: tier.description,
            characteristics: tier.characteristics,
            savings_potential,
            savings_range: tier.savings_range,
            assessment_score,
            improvement_areas: Self::improvement_areas(responses),
            unmapped_responses: unmapped,
        }
    }

    /// Returns questions whose answers sit in the weak band.
    pub fn improvement_areas(responses: &AssessmentResponses) -> Vec<AssessmentQuestion> {
        responses
            .iter()
            .filter(|(question, answer)| answer.is_weak(*question))
            .map(|(question, _)| question)
            .collect()
    }

    /// (coverage − 30) × 0.1 percentage points.
    fn test_coverage_boost(responses: &AssessmentResponses) -> f64 {
        let question = AssessmentQuestion::TestAutomationCoverage;
        let coverage = match responses.get(question) {
            Some(Answer::Numeric(value)) if question.accepts_numeric(*value) => *value,
            _ => BASELINE_TEST_COVERAGE,
        };
        (coverage - BASELINE_TEST_COVERAGE) * 0.1
    }

    /// (ci_cd_index − 1) × 0.5 percentage points.
    fn ci_cd_boost(responses: &AssessmentResponses) -> f64 {
        let question = AssessmentQuestion::CiCdMaturity;
        let index = match responses.get(question) {
            Some(Answer::Choice(index)) if *index < question.options().len() => *index,
            _ => BASELINE_CI_CD_INDEX,
        };
        (index as f64 - BASELINE_CI_CD_INDEX as f64) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn question_weights_sum_to_one() {
        let total: f64 = AssessmentQuestion::all().iter().map(|q| q.weight()).sum();
        assert!(approx(total, 1.0));
    }

    #[test]
    fn level_from_score_boundaries() {
        assert_eq!(MaturityLevel::from_score(0.0).value(), 1);
        assert_eq!(MaturityLevel::from_score(0.249).value(), 1);
        assert_eq!(MaturityLevel::from_score(0.25).value(), 2);
        assert_eq!(MaturityLevel::from_score(0.5).value(), 3);
        assert_eq!(MaturityLevel::from_score(0.75).value(), 4);
        assert_eq!(MaturityLevel::from_score(1.0).value(), 5);
        assert_eq!(MaturityLevel::from_score(2.0).value(), 5);
    }

    #[test]
    fn maturity_level_rejects_out_of_range() {
        assert!(MaturityLevel::try_new(0).is_err());
        assert!(MaturityLevel::try_new(6).is_err());
        assert_eq!(MaturityLevel::try_new(3).unwrap().name(), "Defined");
    }

    #[test]
    fn tier_ranges_do_not_overlap() {
        let levels: Vec<_> = MaturityLevel::all().collect();
        for pair in levels.windows(2) {
            assert!(pair[0].tier().savings_range[1] <= pair[1].tier().savings_range[0]);
        }
    }

    #[test]
    fn default_responses_assess_to_repeatable() {
        let maturity = MaturityAssessor::assess(&AssessmentResponses::defaults());

        // 0.3*0.3 + 0.25*0.25 + 0.2*0.2 + 0.15*0.25 + 0.1*0.25
        assert!(approx(maturity.assessment_score, 0.255));
        assert_eq!(maturity.level.value(), 2);
        assert_eq!(maturity.name, "Repeatable");
        assert!(approx(maturity.savings_potential, 10.0));
        assert_eq!(maturity.savings_range, [8.0, 12.0]);
        assert!(maturity.unmapped_responses.is_empty());
    }

    #[test]
    fn empty_responses_score_zero_at_level_one() {
        let maturity = MaturityAssessor::assess(&AssessmentResponses::new());
        assert_eq!(maturity.assessment_score, 0.0);
        assert_eq!(maturity.level.value(), 1);
        assert!(approx(maturity.savings_potential, 6.5));
        assert!(maturity.improvement_areas.is_empty());
    }

    #[test]
    fn boosts_are_clamped_into_tier_range() {
        let responses = AssessmentResponses::new()
            .with(AssessmentQuestion::TestAutomationCoverage, Answer::Numeric(100.0))
            .with(AssessmentQuestion::CiCdMaturity, Answer::Choice(4))
            .with(AssessmentQuestion::CodeReuseLevel, Answer::Numeric(80.0))
            .with(AssessmentQuestion::EnvironmentAutomation, Answer::Choice(4))
            .with(AssessmentQuestion::DocumentationAutomation, Answer::Choice(4));

        let maturity = MaturityAssessor::assess(&responses);
        // score = 0.3 + 0.25 + 0.16 + 0.15 + 0.1 = 0.96
        assert_eq!(maturity.level.value(), 4);
        // 21.5 + 7.0 + 1.5 = 30.0, clamped to 25.0
        assert!(approx(maturity.savings_potential, 25.0));
    }

    #[test]
    fn low_coverage_pulls_potential_to_range_floor() {
        let responses = AssessmentResponses::defaults()
            .with(AssessmentQuestion::TestAutomationCoverage, Answer::Numeric(0.0));
        let maturity = MaturityAssessor::assess(&responses);
        // score = 0 + 0.0625 + 0.04 + 0.0375 + 0.025 = 0.165 -> level 1
        assert_eq!(maturity.level.value(), 1);
        // 6.5 - 3.0 = 3.5, clamped to 5.0
        assert!(approx(maturity.savings_potential, 5.0));
    }

    #[test]
    fn unrecognized_label_scores_zero_and_is_reported() {
        let question = AssessmentQuestion::CiCdMaturity;
        let responses = AssessmentResponses::new()
            .with(question, Answer::from_label(question, "Quantum pipelines"));

        let maturity = MaturityAssessor::assess(&responses);
        assert_eq!(maturity.assessment_score, 0.0);
        assert_eq!(maturity.unmapped_responses, vec![question]);
        assert!(!maturity.improvement_areas.contains(&question));
    }

    #[test]
    fn out_of_range_choice_is_treated_as_unmapped() {
        let responses = AssessmentResponses::new()
            .with(AssessmentQuestion::EnvironmentAutomation, Answer::Choice(9));
        let maturity = MaturityAssessor::assess(&responses);
        assert_eq!(maturity.unmapped_responses, vec![AssessmentQuestion::EnvironmentAutomation]);
    }

    #[test]
    fn slider_readings_outside_bounds_are_unmapped() {
        let coverage = AssessmentQuestion::TestAutomationCoverage;
        let reuse = AssessmentQuestion::CodeReuseLevel;
        assert_eq!(Answer::from_number(coverage, 500.0), Answer::Unrecognized("500".to_string()));
        assert_eq!(Answer::from_number(reuse, 85.0), Answer::Unrecognized("85".to_string()));
        assert_eq!(Answer::from_number(reuse, 80.0), Answer::Numeric(80.0));
        assert!(matches!(
            Answer::from_number(AssessmentQuestion::CiCdMaturity, 2.0),
            Answer::Unrecognized(_)
        ));

        let responses = AssessmentResponses::new()
            .with(coverage, Answer::from_number(coverage, 500.0))
            .with(reuse, Answer::from_number(reuse, -300.0));
        let maturity = MaturityAssessor::assess(&responses);

        assert_eq!(maturity.assessment_score, 0.0);
        assert_eq!(maturity.level.value(), 1);
        assert_eq!(maturity.unmapped_responses, vec![coverage, reuse]);
    }

    #[test]
    fn raw_numeric_outside_bounds_never_lifts_score() {
        let responses = AssessmentResponses::new()
            .with(AssessmentQuestion::TestAutomationCoverage, Answer::Numeric(500.0))
            .with(AssessmentQuestion::CodeReuseLevel, Answer::Numeric(f64::NAN));
        let maturity = MaturityAssessor::assess(&responses);

        assert!((0.0..=1.0).contains(&maturity.assessment_score));
        assert_eq!(maturity.level.value(), 1);
        assert!(approx(maturity.savings_potential, 6.5));
        assert!(maturity.improvement_areas.is_empty());
    }

    #[test]
    fn label_resolution_matches_declared_options() {
        let question = AssessmentQuestion::CiCdMaturity;
        assert_eq!(Answer::from_label(question, "Full deployment automation"), Answer::Choice(3));
    }

    #[test]
    fn improvement_areas_flag_low_sliders_and_bottom_two_options() {
        let responses = AssessmentResponses::new()
            .with(AssessmentQuestion::TestAutomationCoverage, Answer::Numeric(49.0))
            .with(AssessmentQuestion::CiCdMaturity, Answer::Choice(2))
            .with(AssessmentQuestion::CodeReuseLevel, Answer::Numeric(50.0))
            .with(AssessmentQuestion::EnvironmentAutomation, Answer::Choice(1))
            .with(AssessmentQuestion::DocumentationAutomation, Answer::Choice(0));

        let areas = MaturityAssessor::improvement_areas(&responses);
        assert_eq!(
            areas,
            vec![
                AssessmentQuestion::TestAutomationCoverage,
                AssessmentQuestion::EnvironmentAutomation,
                AssessmentQuestion::DocumentationAutomation,
            ]
        );
    }

    #[test]
    fn partial_responses_average_over_answered_weights() {
        let responses = AssessmentResponses::new()
            .with(AssessmentQuestion::TestAutomationCoverage, Answer::Numeric(60.0));
        let maturity = MaturityAssessor::assess(&responses);
        assert!(approx(maturity.assessment_score, 0.6));
        assert_eq!(maturity.level.value(), 3);
    }

    #[test]
    fn current_maturity_serializes_question_keys() {
        let maturity = MaturityAssessor::assess(&AssessmentResponses::defaults());
        let json = serde_json::to_value(&maturity).unwrap();
        assert_eq!(json["level"], 2);
        assert_eq!(json["improvement_areas"][0], "test_automation_coverage");
    }
}
