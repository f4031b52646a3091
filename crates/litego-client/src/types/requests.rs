/*
[INPUT]:  Caller-supplied list filters
[OUTPUT]: URL query strings for GET list endpoints
[POS]:    Data layer - request parameter encoding
[UPDATE]: When list endpoints gain new filter parameters
*/

/// Filter for the charge list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargeFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub paid_only: Option<bool>,
}

impl ChargeFilter {
    /// Encode as a query-string suffix, empty when no filter is set
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(page_size) = self.page_size {
            params.push(format!("pageSize={}", page_size));
        }
        if let Some(paid_only) = self.paid_only {
            params.push(format!("paidOnly={}", paid_only));
        }
        join_params(params)
    }
}

/// Withdrawal transaction lifecycle states accepted as a list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Created,
    Performed,
    Confirmed,
}

impl WithdrawalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WithdrawalStatus::Created => "created",
            WithdrawalStatus::Performed => "performed",
            WithdrawalStatus::Confirmed => "confirmed",
        }
    }
}

/// Filter for the withdrawal list endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithdrawalFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub status: Option<WithdrawalStatus>,
}

impl WithdrawalFilter {
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(size) = self.size {
            params.push(format!("size={}", size));
        }
        if let Some(status) = self.status {
            params.push(format!("status={}", status.as_str()));
        }
        join_params(params)
    }
}

/// Plain pagination filter (webhook responses, referral payments)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageFilter {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageFilter {
    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(size) = self.size {
            params.push(format!("size={}", size));
        }
        join_params(params)
    }
}

fn join_params(params: Vec<String>) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}
