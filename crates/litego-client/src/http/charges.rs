/*
[INPUT]:  Charge parameters, list filters, and a bearer auth token
[OUTPUT]: Charge records and charge pages as normalized API results
[POS]:    HTTP layer - charge endpoints (require auth token)
[UPDATE]: When adding new charge endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{ApiResult, LitegoClient, Result};
use crate::types::{Charge, ChargeFilter, Page};

const CHARGES_API_URL: &str = "/api/v1/charges";

impl LitegoClient {
    /// Create a new charge when a payment is required
    ///
    /// POST /api/v1/charges
    pub async fn create_charge(
        &self,
        auth_token: &str,
        description: &str,
        amount_satoshi: i64,
    ) -> Result<ApiResult<Charge>> {
        let body = serde_json::json!({
            "description": description,
            "amount_satoshi": amount_satoshi,
        });

        let builder = self
            .api_request_with_auth(Method::POST, CHARGES_API_URL, auth_token)?
            .json(&body);
        self.send(builder).await
    }

    /// List charges, newest first
    ///
    /// GET /api/v1/charges?page={page}&pageSize={pageSize}&paidOnly={paidOnly}
    pub async fn list_charges(
        &self,
        auth_token: &str,
        filter: &ChargeFilter,
    ) -> Result<ApiResult<Page<Charge>>> {
        let endpoint = format!("{}{}", CHARGES_API_URL, filter.to_query());
        let builder = self.api_request_with_auth(Method::GET, &endpoint, auth_token)?;
        self.send(builder).await
    }

    /// Get a single charge by its id
    ///
    /// GET /api/v1/charges/{id}
    pub async fn get_charge(&self, auth_token: &str, charge_id: &str) -> Result<ApiResult<Charge>> {
        let endpoint = format!("{}/{}", CHARGES_API_URL, charge_id);
        let builder = self.api_request_with_auth(Method::GET, &endpoint, auth_token)?;
        self.send(builder).await
    }
}
