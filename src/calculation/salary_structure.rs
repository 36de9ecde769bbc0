//! Salary structure calculation.
//!
//! Converts a percentage-based [`WageConfiguration`] into absolute component
//! amounts and back. The percentage bases are mixed and must not be
//! generalized:
//!
//! | Component          | Percentage of |
//! |--------------------|---------------|
//! | Basic              | wage          |
//! | HRA                | basic         |
//! | Standard allowance | wage          |
//! | Performance bonus  | basic         |
//! | LTA                | basic         |
//! | PF contribution    | basic         |
//!
//! The fixed allowance absorbs whatever is left of the wage and is floored at
//! zero. Professional tax is a flat pass-through.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use crate::models::{AuditStep, AuditWarning, SalaryStructure, WageConfiguration};

const HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Basic percentage reported when a structure has no earnings to divide by.
pub const DEFAULT_BASIC_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// HRA percentage reported when a structure has no basic salary.
pub const DEFAULT_HRA_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// PF percentage reported when a structure has no basic salary.
pub const DEFAULT_PF_PERCENT: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Warning code attached when components exceed the wage.
pub const OVER_ALLOCATED_WARNING: &str = "OVER_ALLOCATED";

/// A computed structure together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryBreakdown {
    /// The computed structure.
    pub structure: SalaryStructure,
    /// One audit step per component, in computation order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while computing (currently only over-allocation).
    pub warnings: Vec<AuditWarning>,
}

/// `percent`% of `base`, saturating at `Decimal::MAX` instead of overflowing.
fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    match base.checked_mul(percent) {
        Some(product) => product / HUNDRED,
        None => (base / HUNDRED).saturating_mul(percent),
    }
}

/// `part` as a percentage of `whole`, saturating at `Decimal::MAX`.
fn share_of(part: Decimal, whole: Decimal, fallback: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return fallback;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// Computes absolute salary component amounts from a wage configuration.
///
/// Negative inputs are treated as zero. No rounding happens here; use
/// [`round_for_display`] when presenting the amounts.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::compute_structure;
/// use hrms_engine::models::WageConfiguration;
/// use rust_decimal::Decimal;
///
/// let config = WageConfiguration {
///     monthly_wage: Decimal::new(50000, 0),
///     basic_percent: Decimal::new(50, 0),
///     hra_percent: Decimal::new(50, 0),
///     ..WageConfiguration::default()
/// };
///
/// let structure = compute_structure(&config);
/// assert_eq!(structure.basic_salary, Decimal::new(25000, 0));
/// assert_eq!(structure.hra, Decimal::new(12500, 0));
/// assert_eq!(structure.fixed_allowance(), Decimal::new(12500, 0));
/// ```
pub fn compute_structure(config: &WageConfiguration) -> SalaryStructure {
    let config = config.sanitized();
    let wage = config.monthly_wage;

    let basic_salary = percent_of(wage, config.basic_percent);

    SalaryStructure {
        monthly_wage: wage,
        basic_salary,
        hra: percent_of(basic_salary, config.hra_percent),
        standard_allowance: percent_of(wage, config.standard_allowance_percent),
        performance_bonus: percent_of(basic_salary, config.performance_bonus_percent),
        lta: percent_of(basic_salary, config.lta_percent),
        professional_tax: config.professional_tax,
        pf_contribution: percent_of(basic_salary, config.pf_percent),
    }
}

/// Recovers the percentage configuration that produces a stored structure.
///
/// The wage is taken to be the structure's total earnings. When there is
/// nothing to divide by, the editor defaults are reported instead: 50% basic,
/// 50% HRA, 12% PF and 0% for the rest.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::{compute_structure, derive_configuration};
/// use hrms_engine::models::WageConfiguration;
/// use rust_decimal::Decimal;
///
/// let config = WageConfiguration {
///     monthly_wage: Decimal::new(50000, 0),
///     basic_percent: Decimal::new(50, 0),
///     hra_percent: Decimal::new(50, 0),
///     pf_percent: Decimal::new(12, 0),
///     professional_tax: Decimal::new(200, 0),
///     ..WageConfiguration::default()
/// };
///
/// let derived = derive_configuration(&compute_structure(&config));
/// assert_eq!(derived.basic_percent, Decimal::new(50, 0));
/// assert_eq!(derived.hra_percent, Decimal::new(50, 0));
/// assert_eq!(derived.pf_percent, Decimal::new(12, 0));
/// ```
pub fn derive_configuration(structure: &SalaryStructure) -> WageConfiguration {
    let total = structure.total_earnings();
    let basic = structure.basic_salary;

    WageConfiguration {
        monthly_wage: total,
        basic_percent: share_of(basic, total, DEFAULT_BASIC_PERCENT),
        hra_percent: share_of(structure.hra, basic, DEFAULT_HRA_PERCENT),
        standard_allowance_percent: share_of(structure.standard_allowance, total, Decimal::ZERO),
        performance_bonus_percent: share_of(structure.performance_bonus, basic, Decimal::ZERO),
        lta_percent: share_of(structure.lta, basic, Decimal::ZERO),
        pf_percent: share_of(structure.pf_contribution, basic, DEFAULT_PF_PERCENT),
        professional_tax: structure.professional_tax,
    }
    .sanitized()
}

/// Rounds an amount to two decimal places for presentation.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::round_for_display;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_for_display(Decimal::new(2083335, 3)), Decimal::new(208334, 2));
/// ```
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn component_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    basis: &str,
    base: Decimal,
    percent: Decimal,
    amount: Decimal,
) -> AuditStep {
    let mut input = serde_json::Map::new();
    input.insert(basis.to_string(), base.normalize().to_string().into());
    input.insert("percent".to_string(), percent.normalize().to_string().into());

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        basis: basis.to_string(),
        input: serde_json::Value::Object(input),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}% of {} {} = {}",
            percent.normalize(),
            basis.replace('_', " "),
            base.normalize(),
            amount.normalize()
        ),
    }
}

/// Computes a salary structure and records how each component was derived.
///
/// Produces eight audit steps numbered from `step_number`, plus an
/// `OVER_ALLOCATED` warning when the percentage components exceed the wage
/// and the fixed allowance had to be clamped.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::explain_structure;
/// use hrms_engine::models::WageConfiguration;
/// use rust_decimal::Decimal;
///
/// let config = WageConfiguration {
///     monthly_wage: Decimal::new(50000, 0),
///     basic_percent: Decimal::new(100, 0),
///     hra_percent: Decimal::new(100, 0),
///     ..WageConfiguration::default()
/// };
///
/// let breakdown = explain_structure(&config, 1);
/// assert_eq!(breakdown.audit_steps.len(), 8);
/// assert_eq!(breakdown.warnings[0].code, "OVER_ALLOCATED");
/// assert_eq!(breakdown.structure.fixed_allowance(), Decimal::ZERO);
/// ```
pub fn explain_structure(config: &WageConfiguration, step_number: u32) -> SalaryBreakdown {
    let structure = compute_structure(config);
    let config = config.sanitized();
    let wage = structure.monthly_wage;
    let basic = structure.basic_salary;

    let mut audit_steps = vec![
        component_step(
            step_number,
            "basic_salary",
            "Basic Salary",
            "monthly_wage",
            wage,
            config.basic_percent,
            basic,
        ),
        component_step(
            step_number + 1,
            "hra",
            "House Rent Allowance",
            "basic_salary",
            basic,
            config.hra_percent,
            structure.hra,
        ),
        component_step(
            step_number + 2,
            "standard_allowance",
            "Standard Allowance",
            "monthly_wage",
            wage,
            config.standard_allowance_percent,
            structure.standard_allowance,
        ),
        component_step(
            step_number + 3,
            "performance_bonus",
            "Performance Bonus",
            "basic_salary",
            basic,
            config.performance_bonus_percent,
            structure.performance_bonus,
        ),
        component_step(
            step_number + 4,
            "lta",
            "Leave Travel Allowance",
            "basic_salary",
            basic,
            config.lta_percent,
            structure.lta,
        ),
    ];

    let allocated = structure.allocated();
    let fixed_allowance = structure.fixed_allowance();
    let fixed_reasoning = if structure.is_over_allocated() {
        format!(
            "Components total {} exceed wage {} by {}, fixed allowance clamped to 0",
            allocated.normalize(),
            wage.normalize(),
            structure.over_allocation().normalize()
        )
    } else {
        format!(
            "Wage {} - allocated {} = {}",
            wage.normalize(),
            allocated.normalize(),
            fixed_allowance.normalize()
        )
    };

    audit_steps.push(AuditStep {
        step_number: step_number + 5,
        rule_id: "fixed_allowance".to_string(),
        rule_name: "Fixed Allowance".to_string(),
        basis: "remainder".to_string(),
        input: serde_json::json!({
            "monthly_wage": wage.normalize().to_string(),
            "allocated": allocated.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": fixed_allowance.normalize().to_string(),
            "clamped": structure.is_over_allocated()
        }),
        reasoning: fixed_reasoning,
    });

    audit_steps.push(component_step(
        step_number + 6,
        "pf_contribution",
        "Provident Fund Contribution",
        "basic_salary",
        basic,
        config.pf_percent,
        structure.pf_contribution,
    ));

    audit_steps.push(AuditStep {
        step_number: step_number + 7,
        rule_id: "professional_tax".to_string(),
        rule_name: "Professional Tax".to_string(),
        basis: "flat".to_string(),
        input: serde_json::json!({
            "professional_tax": structure.professional_tax.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": structure.professional_tax.normalize().to_string()
        }),
        reasoning: format!(
            "Flat professional tax of {} passed through",
            structure.professional_tax.normalize()
        ),
    });

    let mut warnings = Vec::new();
    if structure.is_over_allocated() {
        warn!(
            monthly_wage = %wage,
            allocated = %allocated,
            over_allocation = %structure.over_allocation(),
            "Salary components exceed monthly wage; fixed allowance clamped to zero"
        );
        warnings.push(AuditWarning {
            code: OVER_ALLOCATED_WARNING.to_string(),
            message: format!(
                "Salary components exceed the monthly wage by {}; fixed allowance set to 0",
                structure.over_allocation().normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    SalaryBreakdown {
        structure,
        audit_steps,
        warnings,
    }
}
