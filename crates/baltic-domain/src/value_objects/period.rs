use serde::{Deserialize, Serialize};

/// A start/end date pair as the platform serializes it (YYYY-MM-DD).
///
/// Dates stay formatted strings throughout: the remote service owns
/// calendar validation, and a generated deal date may name a day the
/// month does not have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePeriod {
    pub start_date: String,
    pub end_date: String,
}

impl DatePeriod {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}
