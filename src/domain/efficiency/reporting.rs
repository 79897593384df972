//! Reporting Aggregator - Phase rows, initiative rows and KPIs.

use serde::Serialize;

use super::costs::{AvoidanceProfile, CostResult};
use super::impact_matrix::{DeltaMatrix, ImpactMatrix};
use super::portfolio::InitiativePortfolio;
use super::projection::PhaseHours;
use crate::domain::foundation::{Initiative, Percentage, Phase, PhaseValues};

/// Default ceiling for a credible total cost reduction (35%).
pub const DEFAULT_MAX_CREDIBLE_COST_REDUCTION: f64 = 0.35;

/// One row of the phase summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseSummaryRow {
    pub phase: Phase,
    pub baseline_hours: f64,
    pub modeled_hours: f64,
    pub hour_variance: f64,
    pub hour_variance_pct: f64,
    pub baseline_cost: f64,
    pub modeled_cost: f64,
    pub cost_variance: f64,
    pub cost_variance_pct: f64,
    pub risk_adjusted_hours: f64,
}

/// Scalar rollups across all phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_baseline_hours: f64,
    pub total_modeled_hours: f64,
    pub total_hours_saved: f64,
    pub total_hours_saved_pct: f64,
    pub total_baseline_cost: f64,
    pub total_modeled_cost: f64,
    pub total_cost_savings: f64,
    pub total_cost_avoidance: f64,
    /// Always `total_cost_savings + total_cost_avoidance`.
    pub total_financial_benefit: f64,
}

/// Financial contribution of one initiative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitiativeImpactRow {
    pub initiative: Initiative,
    pub maturity: Percentage,
    /// Seed row sum at 100% maturity.
    pub baseline_hour_delta: f64,
    pub effective_hour_delta: f64,
    pub development_hours: f64,
    pub post_go_live_hours: f64,
    pub development_cost_impact: f64,
    /// Post-launch cost impact after subtracting this initiative's avoidance.
    pub post_go_live_cost_impact: f64,
    pub total_financial_impact: f64,
}

/// Non-fatal advisory raised when projected savings look implausible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredibilityWarning {
    pub cost_reduction: f64,
    pub limit: f64,
    pub message: String,
}

/// Result aggregation functions.
pub struct ReportAggregator;

impl ReportAggregator {
    /// Builds one summary row per phase in canonical order.
    ///
    /// # Edge Cases
    /// - Variance percentages are 0 when the baseline is 0.
    pub fn phase_summary(
        hours: &PhaseHours,
        costs: &CostResult,
        risk_adjusted_hours: &PhaseValues,
    ) -> Vec<PhaseSummaryRow> {
        Phase::all()
            .iter()
            .map(|&phase| {
                let baseline_hours = hours.baseline[phase];
                let modeled_hours = hours.modeled[phase];
                let baseline_cost = costs.baseline_cost[phase];
                let modeled_cost = costs.modeled_cost[phase];
                let hour_variance = modeled_hours - baseline_hours;
                let cost_variance = modeled_cost - baseline_cost;

                PhaseSummaryRow {
                    phase,
                    baseline_hours,
                    modeled_hours,
                    hour_variance,
                    hour_variance_pct: percent_of(hour_variance, baseline_hours),
                    baseline_cost,
                    modeled_cost,
                    cost_variance,
                    cost_variance_pct: percent_of(cost_variance, baseline_cost),
                    risk_adjusted_hours: risk_adjusted_hours[phase],
                }
            })
            .collect()
    }

    /// Sums hours and costs into headline figures.
    pub fn kpis(hours: &PhaseHours, costs: &CostResult) -> KpiSummary {
        let total_baseline_hours = hours.total_baseline();
        let total_modeled_hours = hours.total_modeled();
        let total_hours_saved = total_baseline_hours - total_modeled_hours;
        let total_cost_savings = costs.savings.sum();
        let total_cost_avoidance = costs.avoidance.sum();

        KpiSummary {
            total_baseline_hours,
            total_modeled_hours,
            total_hours_saved,
            total_hours_saved_pct: percent_of(total_hours_saved, total_baseline_hours),
            total_baseline_cost: costs.baseline_cost.sum(),
            total_modeled_cost: costs.modeled_cost.sum(),
            total_cost_savings,
            total_cost_avoidance,
            total_financial_benefit: total_cost_savings + total_cost_avoidance,
        }
    }

    /// Builds initiative rows, biggest savers first.
    ///
    /// Only initiatives with a nonzero effective maturity are listed. When an
    /// initiative's development cost impact is a saving, its share of
    /// avoidance is subtracted from the post-launch impact. Ties keep
    /// canonical initiative order.
    pub fn initiative_impact(
        matrix: &ImpactMatrix,
        effective: &DeltaMatrix,
        portfolio: &InitiativePortfolio,
        blended_rate: f64,
        profile: AvoidanceProfile,
    ) -> Vec<InitiativeImpactRow> {
        let mut rows: Vec<InitiativeImpactRow> = effective
            .rows()
            .filter(|(initiative, _)| !portfolio.maturity(*initiative).is_zero())
            .map(|(initiative, row)| {
                let development_hours = row.development_sum();
                let post_go_live_hours = row[Phase::PostGoLive];
                let development_cost_impact = development_hours * blended_rate;

                let mut post_go_live_cost_impact = post_go_live_hours * blended_rate;
                if development_cost_impact < 0.0 {
                    post_go_live_cost_impact -= development_cost_impact.abs()
                        * profile.ongoing_factor()
                        * profile.multiplier();
                }

                InitiativeImpactRow {
                    initiative,
                    maturity: portfolio.maturity(initiative),
                    baseline_hour_delta: matrix.row_total(initiative),
                    effective_hour_delta: row.sum(),
                    development_hours,
                    post_go_live_hours,
                    development_cost_impact,
                    post_go_live_cost_impact,
                    total_financial_impact: development_cost_impact + post_go_live_cost_impact,
                }
            })
            .collect();

        rows.sort_by(|a, b| a.total_financial_impact.total_cmp(&b.total_financial_impact));
        rows
    }

    /// Flags a total cost reduction above `limit` (a fraction).
    ///
    /// # Edge Cases
    /// - No warning when modeled cost is not below baseline cost.
    pub fn credibility_check(kpis: &KpiSummary, limit: f64) -> Option<CredibilityWarning> {
        if kpis.total_modeled_cost >= kpis.total_baseline_cost {
            return None;
        }

        let cost_reduction =
            (kpis.total_baseline_cost - kpis.total_modeled_cost) / kpis.total_baseline_cost;
        if cost_reduction <= limit {
            return None;
        }

        Some(CredibilityWarning {
            cost_reduction,
            limit,
            message: format!(
                "Total cost reduction of {} exceeds maximum credible limit of {}. \
                 Consider reducing maturity levels or choosing a more conservative scenario.",
                format_fraction(cost_reduction),
                format_fraction(limit)
            ),
        })
    }
}

/// `part / whole × 100`, or 0 when `whole` is not positive.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Formats a fraction as a percentage with one decimal, e.g. `0.353` as `35.3%`.
pub fn format_fraction(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::efficiency::costs::CostEngine;
    use crate::domain::efficiency::portfolio::{InitiativeSetting, MaturityScaler};

    fn kpis_with(baseline_cost: f64, modeled_cost: f64) -> KpiSummary {
        KpiSummary {
            total_baseline_hours: 0.0,
            total_modeled_hours: 0.0,
            total_hours_saved: 0.0,
            total_hours_saved_pct: 0.0,
            total_baseline_cost: baseline_cost,
            total_modeled_cost: modeled_cost,
            total_cost_savings: baseline_cost - modeled_cost,
            total_cost_avoidance: 0.0,
            total_financial_benefit: baseline_cost - modeled_cost,
        }
    }

    #[test]
    fn percent_of_guards_zero_baseline() {
        assert_eq!(percent_of(-10.0, 0.0), 0.0);
        assert_eq!(percent_of(-10.0, 200.0), -5.0);
    }

    #[test]
    fn format_fraction_uses_one_decimal() {
        assert_eq!(format_fraction(0.35), "35.0%");
        assert_eq!(format_fraction(0.4127), "41.3%");
    }

    #[test]
    fn phase_summary_has_one_row_per_phase() {
        let hours = PhaseHours {
            baseline: PhaseValues::new([100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 0.0]),
            modeled: PhaseValues::new([80.0, 80.0, 80.0, 80.0, 80.0, 80.0, 0.0]),
        };
        let costs = CostEngine::calculate(&hours, 10.0, AvoidanceProfile::None);
        let rows = ReportAggregator::phase_summary(&hours, &costs, &hours.modeled);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].phase, Phase::Discover);
        assert_eq!(rows[0].hour_variance, -20.0);
        assert_eq!(rows[0].hour_variance_pct, -20.0);
        assert_eq!(rows[0].cost_variance, -200.0);
        assert_eq!(rows[6].hour_variance_pct, 0.0);
        assert_eq!(rows[6].cost_variance_pct, 0.0);
    }

    #[test]
    fn kpi_benefit_is_savings_plus_avoidance() {
        let hours = PhaseHours {
            baseline: PhaseValues::splat(100.0),
            modeled: PhaseValues::splat(90.0),
        };
        let costs = CostEngine::calculate(&hours, 100.0, AvoidanceProfile::Moderate);
        let kpis = ReportAggregator::kpis(&hours, &costs);

        assert_eq!(kpis.total_hours_saved, 70.0);
        assert!((kpis.total_hours_saved_pct - 10.0).abs() < 1e-9);
        assert_eq!(
            kpis.total_financial_benefit,
            kpis.total_cost_savings + kpis.total_cost_avoidance
        );
    }

    #[test]
    fn initiative_rows_skip_zero_maturity_and_sort_ascending() {
        let seed = ImpactMatrix::seed();
        let portfolio = InitiativePortfolio::default()
            .with(Initiative::Edcc, InitiativeSetting::disabled());
        let effective = MaturityScaler::apply(&seed, &portfolio);
        let rows = ReportAggregator::initiative_impact(
            &seed,
            &effective,
            &portfolio,
            100.0,
            AvoidanceProfile::None,
        );

        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.initiative != Initiative::Edcc));
        for pair in rows.windows(2) {
            assert!(pair[0].total_financial_impact <= pair[1].total_financial_impact);
        }
        // Integration & Code Reuse has the largest seed row.
        assert_eq!(rows[0].initiative, Initiative::IntegrationCodeReuse);
    }

    #[test]
    fn initiative_row_subtracts_avoidance_for_development_savings() {
        let seed = ImpactMatrix::seed();
        let portfolio = InitiativePortfolio::uniform(Percentage::HUNDRED);
        let rows = ReportAggregator::initiative_impact(
            &seed,
            seed.deltas(),
            &portfolio,
            100.0,
            AvoidanceProfile::Moderate,
        );
        let row = rows
            .iter()
            .find(|r| r.initiative == Initiative::AutomatedTesting)
            .unwrap();

        // dev hours: -6 -10 -38 -128 -160 -32 = -374
        assert_eq!(row.development_hours, -374.0);
        assert_eq!(row.development_cost_impact, -37_400.0);
        let expected_post = -51.0 * 100.0 - 37_400.0 * 0.8 * 2.5;
        assert!((row.post_go_live_cost_impact - expected_post).abs() < 1e-6);
        assert_eq!(row.baseline_hour_delta, -425.0);
    }

    #[test]
    fn credibility_check_flags_large_reductions() {
        let warning = ReportAggregator::credibility_check(&kpis_with(100.0, 50.0), 0.35).unwrap();
        assert_eq!(warning.cost_reduction, 0.5);
        assert_eq!(
            warning.message,
            "Total cost reduction of 50.0% exceeds maximum credible limit of 35.0%. \
             Consider reducing maturity levels or choosing a more conservative scenario."
        );
    }

    #[test]
    fn credibility_check_accepts_moderate_or_negative_reductions() {
        assert!(ReportAggregator::credibility_check(&kpis_with(100.0, 70.0), 0.35).is_none());
        assert!(ReportAggregator::credibility_check(&kpis_with(100.0, 120.0), 0.35).is_none());
        assert!(ReportAggregator::credibility_check(&kpis_with(0.0, 0.0), 0.35).is_none());
    }
}
