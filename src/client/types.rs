use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::error::ApiError;

/// Response of the tenant token exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub tenant_access_token: Option<String>,
    /// Token lifetime in seconds, as reported by the server.
    pub expire: Option<i64>,
}

/// Generic `{code, msg, data}` envelope wrapping every table response.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// `code == 0` is success; anything else carries the remote message.
    pub fn into_data(self) -> Result<Option<T>, ApiError> {
        if self.code != 0 {
            return Err(ApiError::Remote {
                code: self.code,
                message: self.msg,
            });
        }
        Ok(self.data)
    }
}

/// One row of the remote table. Read-only snapshot held only for the
/// duration of one remap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalRecord {
    pub record_id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub created_time: Option<i64>,
    #[serde(default)]
    pub last_modified_time: Option<i64>,
}

/// One page of the record listing.
#[derive(Debug, Default, Deserialize)]
pub struct RecordPage {
    #[serde(default)]
    pub items: Vec<ExternalRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub page_token: String,
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct RecordHolder {
    pub record: ExternalRecord,
}

/// Field descriptors are proxied through untyped; this service never
/// interprets them.
#[derive(Debug, Default, Deserialize)]
pub struct FieldList {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteResult {
    #[serde(default)]
    pub deleted: bool,
}
