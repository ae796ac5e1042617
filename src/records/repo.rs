use sqlx::PgPool;

use crate::records::repo_types::PushupRecord;

impl PushupRecord {
    pub async fn create(db: &PgPool, user_id: i64, count: i32) -> sqlx::Result<PushupRecord> {
        sqlx::query_as::<_, PushupRecord>(
            r#"
            INSERT INTO pushup_records (user_id, count)
            VALUES ($1, $2)
            RETURNING id, user_id, count, date
            "#,
        )
        .bind(user_id)
        .bind(count)
        .fetch_one(db)
        .await
    }

    /// All records for a user, newest first.
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<PushupRecord>> {
        sqlx::query_as::<_, PushupRecord>(
            r#"
            SELECT id, user_id, count, date
            FROM pushup_records
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Joint (id, owner) lookup; a foreign record reads as absent.
    pub async fn find_by_id(
        db: &PgPool,
        user_id: i64,
        id: i64,
    ) -> sqlx::Result<Option<PushupRecord>> {
        sqlx::query_as::<_, PushupRecord>(
            r#"
            SELECT id, user_id, count, date
            FROM pushup_records
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Owner-guarded update in one statement; `None` when no row matched.
    pub async fn update_count(
        db: &PgPool,
        user_id: i64,
        id: i64,
        count: i32,
    ) -> sqlx::Result<Option<PushupRecord>> {
        sqlx::query_as::<_, PushupRecord>(
            r#"
            UPDATE pushup_records
            SET count = $3
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, count, date
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(count)
        .fetch_optional(db)
        .await
    }

    /// Owner-guarded delete; returns the affected row count (0 or 1).
    pub async fn delete(db: &PgPool, user_id: i64, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM pushup_records
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
