use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// A pushup set logged by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PushupRecord {
    pub id: i64,
    pub user_id: i64,
    pub count: i32,
    pub date: OffsetDateTime,
}
