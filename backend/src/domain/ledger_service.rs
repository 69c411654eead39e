//! Read-only services over print jobs and payments.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{PaymentRepository, PaymentsQuery, PrintJobRepository, PrintJobsQuery};
use super::{Error, Payment, PaymentId, PrintJob};

/// Service implementing [`PrintJobsQuery`].
#[derive(Clone)]
pub struct PrintJobsService<R> {
    job_repo: Arc<R>,
}

impl<R> PrintJobsService<R> {
    pub fn new(job_repo: Arc<R>) -> Self {
        Self { job_repo }
    }
}

#[async_trait]
impl<R> PrintJobsQuery for PrintJobsService<R>
where
    R: PrintJobRepository,
{
    async fn list_jobs(&self) -> Result<Vec<PrintJob>, Error> {
        Ok(self.job_repo.list().await?)
    }
}

/// Service implementing [`PaymentsQuery`].
#[derive(Clone)]
pub struct PaymentsService<R> {
    payment_repo: Arc<R>,
}

impl<R> PaymentsService<R> {
    pub fn new(payment_repo: Arc<R>) -> Self {
        Self { payment_repo }
    }
}

#[async_trait]
impl<R> PaymentsQuery for PaymentsService<R>
where
    R: PaymentRepository,
{
    async fn list_payments(&self) -> Result<Vec<Payment>, Error> {
        Ok(self.payment_repo.list().await?)
    }

    async fn get_payment(&self, id: PaymentId) -> Result<Payment, Error> {
        self.payment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Payment not found"))
    }
}
