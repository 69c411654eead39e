//! Read-only driven port for print jobs.

use async_trait::async_trait;

use crate::domain::PrintJob;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised while reading print jobs.
    pub enum PrintJobRepositoryError {
        Connection { message: String } => "print job repository connection failed: {message}" as service_unavailable,
        /// Query failure, or a stored row that no longer maps onto the domain.
        Query { message: String } => "print job repository query failed: {message}" as internal,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintJobRepository: Send + Sync {
    /// All jobs, oldest first.
    async fn list(&self) -> Result<Vec<PrintJob>, PrintJobRepositoryError>;
}
