//! Read-only driving ports for jobs and payments.

use async_trait::async_trait;

use crate::domain::{Error, Payment, PaymentId, PrintJob};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintJobsQuery: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<PrintJob>, Error>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentsQuery: Send + Sync {
    async fn list_payments(&self) -> Result<Vec<Payment>, Error>;

    /// `NotFound` when no payment has `id`.
    async fn get_payment(&self, id: PaymentId) -> Result<Payment, Error>;
}
