//! Database operations for the `outreach_records` table.
//!
//! The table is append-only from the pipeline's perspective: one row per
//! accepted send, no updates, no deletes, no reads.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

/// Fields for one new outreach attempt.
#[derive(Debug, Clone)]
pub struct NewOutreachRecord {
    pub vendor_email: String,
    pub vendor_name: String,
    pub vendor_category: String,
    pub location: String,
    pub guide_user_id: String,
    pub retreat_id: Option<String>,
}

/// A row from the `outreach_records` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OutreachRecordRow {
    pub id: i64,
    pub vendor_email: String,
    pub vendor_name: String,
    pub vendor_category: String,
    pub location: String,
    pub guide_user_id: String,
    pub retreat_id: Option<String>,
    pub status: String,
    pub sent_at: DateTime<Utc>,
    pub opened_at: Option<DateTime<Utc>>,
    pub signed_up_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Insert a new outreach record and return its generated id.
///
/// `status` and `sent_at` take their column defaults (`'sent'`, `now()`);
/// the lifecycle timestamps start NULL.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_outreach_record(
    pool: &PgPool,
    record: &NewOutreachRecord,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO outreach_records \
             (vendor_email, vendor_name, vendor_category, location, guide_user_id, retreat_id) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id",
    )
    .bind(&record.vendor_email)
    .bind(&record.vendor_name)
    .bind(&record.vendor_category)
    .bind(&record.location)
    .bind(&record.guide_user_id)
    .bind(&record.retreat_id)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
