//! Response bodies of the informational endpoints. The `/query` payloads are
//! shared with clients and live in the library.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SchemaResponse {
    pub schema: String,
}
