//! Configuration types for the HRMS policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the policy YAML file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::WageConfiguration;

/// Metadata about the company the policy belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMetadata {
    /// The company's display name.
    pub name: String,
    /// ISO 4217 code of the currency wages are paid in (e.g., "INR").
    pub currency: String,
    /// The version or effective date of this policy.
    pub version: String,
}

/// Default percentages offered when HR sets up a new salary structure.
///
/// Bases follow the calculator: basic and standard allowance are
/// percentages of the wage; HRA, performance bonus, LTA and PF are
/// percentages of basic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDefaults {
    /// Percentage of the wage allocated to basic salary.
    pub basic_percent: Decimal,
    /// Percentage of basic allocated to house rent allowance.
    pub hra_percent: Decimal,
    /// Percentage of the wage allocated to the standard allowance.
    pub standard_allowance_percent: Decimal,
    /// Percentage of basic allocated to the performance bonus.
    pub performance_bonus_percent: Decimal,
    /// Percentage of basic allocated to leave travel allowance.
    pub lta_percent: Decimal,
    /// Percentage of basic contributed to the provident fund.
    pub pf_percent: Decimal,
    /// Flat monthly professional tax.
    pub professional_tax: Decimal,
}

impl SalaryDefaults {
    /// Builds a wage configuration for `monthly_wage` from these defaults.
    pub fn to_configuration(&self, monthly_wage: Decimal) -> WageConfiguration {
        WageConfiguration {
            monthly_wage,
            basic_percent: self.basic_percent,
            hra_percent: self.hra_percent,
            standard_allowance_percent: self.standard_allowance_percent,
            performance_bonus_percent: self.performance_bonus_percent,
            lta_percent: self.lta_percent,
            pf_percent: self.pf_percent,
            professional_tax: self.professional_tax,
        }
        .sanitized()
    }

    /// Every field with its policy path, for validation messages.
    pub(crate) fn fields(&self) -> [(&'static str, Decimal); 7] {
        [
            ("salary_defaults.basic_percent", self.basic_percent),
            ("salary_defaults.hra_percent", self.hra_percent),
            (
                "salary_defaults.standard_allowance_percent",
                self.standard_allowance_percent,
            ),
            (
                "salary_defaults.performance_bonus_percent",
                self.performance_bonus_percent,
            ),
            ("salary_defaults.lta_percent", self.lta_percent),
            ("salary_defaults.pf_percent", self.pf_percent),
            ("salary_defaults.professional_tax", self.professional_tax),
        ]
    }
}

/// The complete policy configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Company metadata.
    pub company: CompanyMetadata,
    /// Defaults for new salary structures.
    pub salary_defaults: SalaryDefaults,
}
