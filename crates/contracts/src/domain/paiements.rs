use serde::{Deserialize, Serialize};

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Pending => "pending",
        }
    }

    /// The fixed filter set offered by the payments screen.
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Success,
        PaymentStatus::Failed,
        PaymentStatus::Pending,
    ];
}

/// A payment record as returned by `GET /api/payment`. Read-only in this
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paiement {
    pub id_payments: i64,
    /// Name of the paying user.
    pub nom: String,
    /// Name of the subscription bought.
    pub name: String,
    pub amount: f64,
    pub payment_method: String,
    pub transaction_id: String,
    pub payment_date: Option<String>,
    pub status: PaymentStatus,
}

/// Body of `POST /api/payment/initiate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiatePaiement {
    pub id_utilisateur: i64,
    /// Subscription name.
    pub name: String,
    pub amount: f64,
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_values() {
        for status in PaymentStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: PaymentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn record_with_null_date_parses() {
        let p: Paiement = serde_json::from_str(
            r#"{"id_payments":1,"nom":"A. Mbarga","name":"Premium","amount":25.0,
                "payment_method":"orange_money","transaction_id":"TX-001",
                "payment_date":null,"status":"pending"}"#,
        )
        .unwrap();
        assert!(p.payment_date.is_none());
        assert_eq!(p.status, PaymentStatus::Pending);
    }
}
