//! Read-only PostgreSQL adapters for print jobs and payments.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    PaymentRepository, PaymentRepositoryError, PrintJobRepository, PrintJobRepositoryError,
};
use crate::domain::{
    CampusId, JobId, ParseEnumError, Payment, PaymentId, PrintJob, ShopId, UserId,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{PaymentRow, PrintJobRow};
use super::pool::DbPool;
use super::schema::{payments, print_jobs};

/// Diesel implementation of [`PrintJobRepository`].
#[derive(Clone)]
pub struct DieselPrintJobRepository {
    pool: DbPool,
}

impl DieselPrintJobRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_job(row: PrintJobRow) -> Result<PrintJob, ParseEnumError> {
    Ok(PrintJob {
        id: JobId::from_uuid(row.id),
        campus_id: CampusId::from_uuid(row.campus_id),
        shop_id: ShopId::from_uuid(row.shop_id),
        user_id: UserId::from_uuid(row.user_id),
        file_url: row.file_url,
        original_filename: row.original_filename,
        pages: row.pages,
        copies: row.copies,
        size: row.size.parse()?,
        color_mode: row.color_mode.parse()?,
        final_price: row.final_price,
        pricing_snapshot: row.pricing_snapshot,
        execution_mode_snapshot: row.execution_mode_snapshot.parse()?,
        payment_mode_snapshot: row.payment_mode_snapshot.parse()?,
        status: row.status.parse()?,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl PrintJobRepository for DieselPrintJobRepository {
    async fn list(&self) -> Result<Vec<PrintJob>, PrintJobRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PrintJobRepositoryError::connection))?;
        let rows: Vec<PrintJobRow> = print_jobs::table
            .order((print_jobs::created_at.asc(), print_jobs::id.asc()))
            .select(PrintJobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_diesel_error(
                    err,
                    PrintJobRepositoryError::query,
                    PrintJobRepositoryError::connection,
                )
            })?;
        rows.into_iter()
            .map(|row| {
                let id = row.id;
                row_to_job(row)
                    .map_err(|err| PrintJobRepositoryError::query(format!("job {id}: {err}")))
            })
            .collect()
    }
}

/// Diesel implementation of [`PaymentRepository`].
#[derive(Clone)]
pub struct DieselPaymentRepository {
    pool: DbPool,
}

impl DieselPaymentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn payment_diesel_error(error: diesel::result::Error) -> PaymentRepositoryError {
    map_diesel_error(
        error,
        PaymentRepositoryError::query,
        PaymentRepositoryError::connection,
    )
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: PaymentId::from_uuid(row.id),
            job_id: JobId::from_uuid(row.job_id),
            amount: row.amount,
            status: row.status,
            gateway_reference: row.gateway_reference,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PaymentRepository for DieselPaymentRepository {
    async fn list(&self) -> Result<Vec<Payment>, PaymentRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PaymentRepositoryError::connection))?;
        let rows: Vec<PaymentRow> = payments::table
            .order((payments::created_at.asc(), payments::id.asc()))
            .select(PaymentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(payment_diesel_error)?;
        Ok(rows.into_iter().map(Payment::from).collect())
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, PaymentRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, PaymentRepositoryError::connection))?;
        let row = payments::table
            .find(id.as_uuid())
            .select(PaymentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(payment_diesel_error)?;
        Ok(row.map(Payment::from))
    }
}
