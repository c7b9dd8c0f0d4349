//! Payment fraud handler.

use std::collections::HashMap;

use axum::{extract::State, http::HeaderMap, response::Response, Json};
use serde_json::{Map, Value};

use super::{admit, failure, success, SharedState};
use crate::mock_server::state::MockState;
use crate::{PaymentFraud, PaymentRule};

/// Rules evaluated by the mock, with the score each adds.
const RULES: &[(&str, &str, u32)] = &[
    ("PF1001", "Customer IP is flagged by threat intelligence", 50),
    ("PF1002", "Customer email is missing or malformed", 30),
    ("PF1003", "Customer IP is missing", 20),
];

/// Score a payment against [`RULES`].
pub fn score_payment(state: &MockState, data: &Map<String, Value>) -> PaymentFraud {
    let field = |name: &str| data.get(name).and_then(Value::as_str).unwrap_or_default();

    let ip = field("customer_ip");
    let email = field("customer_email");

    let triggered = [
        !ip.is_empty() && state.get_lookup(ip).is_some_and(|l| l.is_threat()),
        super::email_problem(email).is_some(),
        ip.is_empty(),
    ];

    let mut fraud = PaymentFraud {
        rules_checked: u32::try_from(RULES.len()).unwrap_or(u32::MAX),
        ..Default::default()
    };
    for (&(id, description, weight), hit) in RULES.iter().zip(triggered) {
        if hit {
            fraud.score = (fraud.score + weight).min(100);
            fraud.rules.push(PaymentRule {
                id: id.to_string(),
                description: description.to_string(),
            });
        }
    }
    fraud.rules_detected = u32::try_from(fraud.rules.len()).unwrap_or(u32::MAX);
    fraud
}

/// POST /paymentFraud
pub async fn payment_fraud(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let query = HashMap::new();
    if let Some(rejection) = admit(&state, "paymentFraud", &headers, &query, Some(body.clone())).await
    {
        return rejection;
    }

    let Some(data) = body.get("data").and_then(Value::as_object) else {
        return failure("you must provide the `data` parameter");
    };

    let state = state.read().await;
    success(score_payment(&state, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_clean_payment() {
        let state = MockState::new();
        let fraud = score_payment(
            &state,
            &data(json!({"customer_ip": "1.1.1.1", "customer_email": "name@domain.com"})),
        );
        assert_eq!(fraud.score, 0);
        assert!(fraud.rules.is_empty());
        assert_eq!(fraud.rules_checked, 3);
    }

    #[test]
    fn test_tor_payment_with_bad_email() {
        let state = MockState::new().with_lookup(Fixtures::tor_exit_lookup("185.220.101.1"));
        let fraud = score_payment(
            &state,
            &data(json!({"customer_ip": "185.220.101.1", "customer_email": "nope"})),
        );
        assert_eq!(fraud.score, 80);
        assert_eq!(fraud.rules_detected, 2);
        assert_eq!(fraud.rules[0].id, "PF1001");
        assert_eq!(fraud.rules[1].id, "PF1002");
    }
}
