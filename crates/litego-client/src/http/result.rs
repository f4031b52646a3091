/*
[INPUT]:  HTTP status code and raw response body
[OUTPUT]: Uniform ApiResult (typed success payload or name/detail failure)
[POS]:    HTTP layer - response normalization shared by every endpoint
[UPDATE]: When the API error envelope or success discriminator changes
*/

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Status code of a successful response, the sole success discriminator
const SUCCESS_CODE: u16 = 200;

/// Failure code substituted when the transport reported no status
const DEFAULT_FAILURE_CODE: u16 = 400;

/// Uniform outcome of one API call.
///
/// `Success` iff the HTTP status was 200; everything else becomes a
/// `Failure` value carrying the server-reported `name`/`detail` pair.
/// Ordinary API failures are values, not errors, so callers can branch
/// on `code`/`error_name` without unwinding.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success {
        code: u16,
        value: T,
    },
    Failure {
        code: u16,
        error_name: String,
        error_message: String,
    },
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Status code of the response (or the 400 default for a silent transport)
    pub fn code(&self) -> u16 {
        match self {
            ApiResult::Success { code, .. } => *code,
            ApiResult::Failure { code, .. } => *code,
        }
    }

    /// Consume into the success value, if any
    pub fn into_value(self) -> Option<T> {
        match self {
            ApiResult::Success { value, .. } => Some(value),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Server-reported error name, if this is a failure
    pub fn error_name(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { error_name, .. } => Some(error_name),
        }
    }
}

/// Normalize a raw response into an `ApiResult`.
///
/// An empty or malformed body parses to `{}` so fields degrade to absent
/// values instead of failing the call; the status code alone decides
/// success. On 200 the body deserializes into `T`, whose fields all carry
/// serde defaults; on any other status the failure carries the `name` and
/// `detail` body fields verbatim (empty when absent).
pub(crate) fn normalize<T>(status: u16, raw: &str) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    let body = parse_permissive(raw);

    if status == SUCCESS_CODE {
        let value = serde_json::from_value(body).unwrap_or_default();
        ApiResult::Success {
            code: SUCCESS_CODE,
            value,
        }
    } else {
        let code = match status {
            0 => DEFAULT_FAILURE_CODE,
            other => other,
        };
        ApiResult::Failure {
            code,
            error_name: string_field(&body, "name"),
            error_message: string_field(&body, "detail"),
        }
    }
}

fn parse_permissive(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Object(Default::default());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Default::default()))
}

fn string_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
