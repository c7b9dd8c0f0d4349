//! Payment fraud scoring model for the `paymentFraud` endpoint.

use serde::{Deserialize, Serialize};

/// Fraud assessment of a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFraud {
    /// 0 (clean) to 100 (fraudulent).
    pub score: u32,

    /// Rules that matched the payment.
    #[serde(default)]
    pub rules: Vec<PaymentRule>,

    #[serde(rename = "rulesChecked", default)]
    pub rules_checked: u32,

    #[serde(rename = "rulesDetected", default)]
    pub rules_detected: u32,
}

impl PaymentFraud {
    /// Returns true if the score reaches `threshold`.
    pub fn is_risky(&self, threshold: u32) -> bool {
        self.score >= threshold
    }
}

/// A fraud rule that was triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRule {
    pub id: String,
    #[serde(default)]
    pub description: String,
}
