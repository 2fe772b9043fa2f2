//! Closed value sets used by several entities.

use serde::{Deserialize, Serialize};

/// Legal form of a counterparty or organization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompanyType {
    #[default]
    Legal,
    Entrepreneur,
    Individual,
}

/// Fiscal category of a sold item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentItemType {
    #[default]
    Good,
    Service,
    Work,
    Consignment,
    CommissionFee,
    AnotherPayment,
    PropertyRight,
    Excise,
    AgentCommission,
    CompositePaymentItem,
    AnotherCompositePaymentItem,
}

/// Marking scheme of a tracked product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingType {
    #[default]
    NotTracked,
    SerialNumbers,
    Tobacco,
    Shoes,
    LpClothes,
    LpLinens,
    Milk,
    Water,
    Otp,
}

/// Kind of a document status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StateType {
    #[default]
    Regular,
    Successful,
    Unsuccessful,
}

/// Taxation scheme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxSystem {
    GeneralTaxSystem,
    SimplifiedTaxSystemIncome,
    SimplifiedTaxSystemIncomeOutcome,
    UnifiedAgriculturalTax,
    PresumptiveTaxSystem,
    PatentBased,
    TaxSystemSameAsGroup,
}
