use crate::value_objects::period::DatePeriod;
use serde::{Deserialize, Serialize};

/// Commercial facet of a shipment, shaped exactly as the trade-cargo
/// service expects it on POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub source: String,
    pub vakt_id: String,
    pub buyer_etrm_id: String,
    pub seller_etrm_id: String,
    pub buyer: String,
    pub seller: String,
    pub deal_date: String,
    pub delivery_period: DatePeriod,
    pub payment_terms: PaymentTerms,
    pub price: f64,
    pub currency: String,
    pub price_unit: String,
    pub quantity: u64,
    pub delivery_terms: String,
    pub min_tolerance: f64,
    pub max_tolerance: f64,
    pub invoice_quantity: String,
    pub general_terms_and_conditions: String,
    pub laytime: String,
    pub demurrage_terms: String,
    pub law: String,
    pub required_documents: Vec<String>,
    pub credit_requirement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerms {
    pub event_base: String,
    pub when: String,
    pub time: u32,
    pub time_unit: String,
    pub day_type: String,
}
