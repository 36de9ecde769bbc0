//! Wage configuration and salary structure models.
//!
//! A [`WageConfiguration`] is what the salary editor works with: a monthly
//! wage plus percentages. A [`SalaryStructure`] is the set of absolute
//! component amounts derived from it. [`SalaryStructureRecord`] is the flat
//! shape the backend stores and returns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient::{self, non_negative};

/// Percentage-based configuration for a monthly salary.
///
/// Every field deserializes leniently: missing, blank, non-numeric and
/// negative values all become zero.
///
/// # Example
///
/// ```
/// use hrms_engine::models::WageConfiguration;
/// use rust_decimal::Decimal;
///
/// let config: WageConfiguration = serde_json::from_str(
///     r#"{"monthly_wage": "50000", "basic_percent": 50, "hra_percent": "oops"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.monthly_wage, Decimal::new(50000, 0));
/// assert_eq!(config.basic_percent, Decimal::new(50, 0));
/// assert_eq!(config.hra_percent, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageConfiguration {
    /// Total monthly compensation.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub monthly_wage: Decimal,
    /// Basic salary as a percentage of the monthly wage.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub basic_percent: Decimal,
    /// House Rent Allowance as a percentage of basic.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub hra_percent: Decimal,
    /// Standard allowance as a percentage of the monthly wage.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub standard_allowance_percent: Decimal,
    /// Performance bonus as a percentage of basic.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub performance_bonus_percent: Decimal,
    /// Leave Travel Allowance as a percentage of basic.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub lta_percent: Decimal,
    /// Provident fund contribution as a percentage of basic.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pf_percent: Decimal,
    /// Flat professional tax amount.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub professional_tax: Decimal,
}

impl WageConfiguration {
    /// Returns a copy with every negative field clamped to zero.
    ///
    /// Deserialized configurations are already clean; this covers values
    /// built directly in code.
    pub fn sanitized(&self) -> Self {
        Self {
            monthly_wage: non_negative(self.monthly_wage),
            basic_percent: non_negative(self.basic_percent),
            hra_percent: non_negative(self.hra_percent),
            standard_allowance_percent: non_negative(self.standard_allowance_percent),
            performance_bonus_percent: non_negative(self.performance_bonus_percent),
            lta_percent: non_negative(self.lta_percent),
            pf_percent: non_negative(self.pf_percent),
            professional_tax: non_negative(self.professional_tax),
        }
    }
}

/// Absolute salary component amounts for one monthly wage.
///
/// The fixed allowance is not stored: it is whatever remains of the wage
/// after the percentage-driven components, floored at zero, and is always
/// read through [`SalaryStructure::fixed_allowance`].
///
/// # Example
///
/// ```
/// use hrms_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure {
///     monthly_wage: Decimal::new(50000, 0),
///     basic_salary: Decimal::new(25000, 0),
///     hra: Decimal::new(12500, 0),
///     standard_allowance: Decimal::ZERO,
///     performance_bonus: Decimal::ZERO,
///     lta: Decimal::ZERO,
///     professional_tax: Decimal::new(200, 0),
///     pf_contribution: Decimal::new(3000, 0),
/// };
///
/// assert_eq!(structure.fixed_allowance(), Decimal::new(12500, 0));
/// assert_eq!(structure.total_earnings(), Decimal::new(50000, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructure {
    /// The wage the components were derived from.
    pub monthly_wage: Decimal,
    /// Basic salary.
    pub basic_salary: Decimal,
    /// House Rent Allowance.
    pub hra: Decimal,
    /// Standard allowance.
    pub standard_allowance: Decimal,
    /// Performance bonus.
    pub performance_bonus: Decimal,
    /// Leave Travel Allowance.
    pub lta: Decimal,
    /// Flat professional tax deduction.
    pub professional_tax: Decimal,
    /// Provident fund contribution deduction.
    pub pf_contribution: Decimal,
}

impl SalaryStructure {
    /// Sum of the percentage-driven earning components, saturating at
    /// `Decimal::MAX`.
    pub fn allocated(&self) -> Decimal {
        [self.hra, self.standard_allowance, self.performance_bonus, self.lta]
            .into_iter()
            .fold(self.basic_salary, Decimal::saturating_add)
    }

    /// The balancing remainder of the wage, never negative.
    pub fn fixed_allowance(&self) -> Decimal {
        (self.monthly_wage - self.allocated()).max(Decimal::ZERO)
    }

    /// Sum of all six earning components, fixed allowance included.
    ///
    /// Equals the monthly wage unless the structure is over-allocated.
    pub fn total_earnings(&self) -> Decimal {
        self.allocated().saturating_add(self.fixed_allowance())
    }

    /// How far the percentage-driven components exceed the wage.
    pub fn over_allocation(&self) -> Decimal {
        (self.allocated() - self.monthly_wage).max(Decimal::ZERO)
    }

    /// Returns true when the fixed allowance had to be clamped at zero.
    pub fn is_over_allocated(&self) -> bool {
        self.over_allocation() > Decimal::ZERO
    }

    /// Flattens the structure into its stored representation.
    pub fn to_record(&self) -> SalaryStructureRecord {
        SalaryStructureRecord {
            basic_salary: self.basic_salary,
            hra: self.hra,
            standard_allowance: self.standard_allowance,
            performance_bonus: self.performance_bonus,
            lta: self.lta,
            fixed_allowance: self.fixed_allowance(),
            professional_tax: self.professional_tax,
            pf_contribution: self.pf_contribution,
        }
    }
}

/// A salary structure as persisted by the backend.
///
/// Unlike [`SalaryStructure`] the record carries the fixed allowance
/// explicitly and has no wage; converting it back treats the total of its
/// earning components as the wage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStructureRecord {
    /// Basic salary.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub basic_salary: Decimal,
    /// House Rent Allowance.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub hra: Decimal,
    /// Standard allowance.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub standard_allowance: Decimal,
    /// Performance bonus.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub performance_bonus: Decimal,
    /// Leave Travel Allowance.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub lta: Decimal,
    /// Fixed allowance (balancing remainder).
    #[serde(default, deserialize_with = "lenient::amount")]
    pub fixed_allowance: Decimal,
    /// Flat professional tax deduction.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub professional_tax: Decimal,
    /// Provident fund contribution deduction.
    #[serde(default, deserialize_with = "lenient::amount")]
    pub pf_contribution: Decimal,
}

impl SalaryStructureRecord {
    /// Sum of all six earning components, saturating at `Decimal::MAX`.
    pub fn total_earnings(&self) -> Decimal {
        [
            self.hra,
            self.standard_allowance,
            self.performance_bonus,
            self.lta,
            self.fixed_allowance,
        ]
        .into_iter()
        .fold(self.basic_salary, Decimal::saturating_add)
    }

    /// Applies `round` to every amount, for presentation.
    pub fn map_amounts(&self, round: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            basic_salary: round(self.basic_salary),
            hra: round(self.hra),
            standard_allowance: round(self.standard_allowance),
            performance_bonus: round(self.performance_bonus),
            lta: round(self.lta),
            fixed_allowance: round(self.fixed_allowance),
            professional_tax: round(self.professional_tax),
            pf_contribution: round(self.pf_contribution),
        }
    }
}

impl From<SalaryStructureRecord> for SalaryStructure {
    fn from(record: SalaryStructureRecord) -> Self {
        SalaryStructure {
            monthly_wage: non_negative(record.total_earnings()),
            basic_salary: non_negative(record.basic_salary),
            hra: non_negative(record.hra),
            standard_allowance: non_negative(record.standard_allowance),
            performance_bonus: non_negative(record.performance_bonus),
            lta: non_negative(record.lta),
            professional_tax: non_negative(record.professional_tax),
            pf_contribution: non_negative(record.pf_contribution),
        }
    }
}
