use serde::{Deserialize, Serialize};

/// Request body for logging a pushup set.
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub count: i32,
}

/// Request body for editing a logged set.
#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    pub count: i32,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
