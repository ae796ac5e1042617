use tracing::{info, warn};

use crate::error::AppError;
use crate::records::repo_types::PushupRecord;
use crate::state::AppState;

fn validate_count(count: i32) -> Result<(), AppError> {
    if count <= 0 {
        return Err(AppError::Validation(
            "Count must be a positive number".into(),
        ));
    }
    Ok(())
}

pub async fn create_record(
    state: &AppState,
    user_id: i64,
    count: i32,
) -> Result<PushupRecord, AppError> {
    validate_count(count)?;
    let record = PushupRecord::create(&state.db, user_id, count).await?;
    info!(user_id, record_id = record.id, count, "record created");
    Ok(record)
}

pub async fn list_records(state: &AppState, user_id: i64) -> Result<Vec<PushupRecord>, AppError> {
    Ok(PushupRecord::list_by_user(&state.db, user_id).await?)
}

pub async fn get_record(state: &AppState, user_id: i64, id: i64) -> Result<PushupRecord, AppError> {
    PushupRecord::find_by_id(&state.db, user_id, id)
        .await?
        .ok_or(AppError::RecordNotFound)
}

pub async fn update_record(
    state: &AppState,
    user_id: i64,
    id: i64,
    count: i32,
) -> Result<PushupRecord, AppError> {
    validate_count(count)?;
    // Zero matched rows covers both "absent" and "not yours"
    let updated = PushupRecord::update_count(&state.db, user_id, id, count)
        .await?
        .ok_or(AppError::RecordNotFound)?;
    info!(user_id, record_id = id, count, "record updated");
    Ok(updated)
}

pub async fn delete_record(state: &AppState, user_id: i64, id: i64) -> Result<(), AppError> {
    let affected = PushupRecord::delete(&state.db, user_id, id).await?;
    if affected == 0 {
        warn!(user_id, record_id = id, "delete on missing or foreign record");
        return Err(AppError::RecordNotFound);
    }
    info!(user_id, record_id = id, "record deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_is_rejected() {
        assert!(matches!(validate_count(0), Err(AppError::Validation(_))));
    }

    #[test]
    fn negative_count_is_rejected() {
        assert!(matches!(validate_count(-5), Err(AppError::Validation(_))));
    }

    #[test]
    fn positive_count_passes() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(250).is_ok());
    }
}
