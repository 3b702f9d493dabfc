#[cfg(feature = "ssr")]
use chrono::NaiveDate;
#[cfg(feature = "ssr")]
use shared_types::AppointmentRecord;
#[cfg(feature = "ssr")]
use sqlx::{types::Json, Row};

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

/// Insert one appointment, returning its row id
#[cfg(feature = "ssr")]
pub async fn insert_appointment(record: &AppointmentRecord) -> DbResult<i64> {
    let pool = crate::db::pool::get_pool()?;

    let row = sqlx::query(
        "INSERT INTO appointments
            (submission_id, tracking_number, service, center, visa_type, appointment_date, appointment_time,
             applicant, addresses, documents, status, raw_payload)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
         RETURNING id",
    )
    .bind(record.submission_id)
    .bind(&record.tracking_number)
    .bind(Json(&record.service))
    .bind(&record.center)
    .bind(&record.visa_type)
    .bind(record.appointment_date)
    .bind(&record.appointment_time)
    .bind(Json(&record.applicant))
    .bind(Json(&record.addresses))
    .bind(Json(&record.documents))
    .bind(&record.status)
    .bind(Json(&record.raw_payload))
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("id"))
}

/// Calendar dates (UTC) that already carry an appointment within `[from, to]`
#[cfg(feature = "ssr")]
pub async fn reserved_dates_between(from: NaiveDate, to: NaiveDate) -> DbResult<Vec<NaiveDate>> {
    let pool = crate::db::pool::get_pool()?;

    let rows = sqlx::query(
        "SELECT DISTINCT (appointment_date AT TIME ZONE 'UTC')::date AS day
         FROM appointments
         WHERE appointment_date IS NOT NULL
           AND (appointment_date AT TIME ZONE 'UTC')::date BETWEEN $1 AND $2
         ORDER BY day",
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| row.try_get::<NaiveDate, _>("day"))
        .collect()
}
