use serde::{Deserialize, Serialize};

/// Shape of every `/count` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// One point of the payments time series (`GET /api/payment/stat`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: f64,
}

/// One point of the new-users time series (`GET /api/user/stat`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyUsers {
    pub month: String,
    pub users: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_response_parses() {
        let c: CountResponse = serde_json::from_str(r#"{"count":42}"#).unwrap();
        assert_eq!(c.count, 42);
    }

    #[test]
    fn series_parse() {
        let amounts: Vec<MonthlyAmount> =
            serde_json::from_str(r#"[{"month":"2026-01","amount":1250.5}]"#).unwrap();
        assert_eq!(amounts[0].month, "2026-01");
        assert_eq!(amounts[0].amount, 1250.5);

        let users: Vec<MonthlyUsers> =
            serde_json::from_str(r#"[{"month":"2026-01","users":17}]"#).unwrap();
        assert_eq!(users[0].users, 17);
    }
}
