//! Read-only driven port for payments.

use async_trait::async_trait;

use crate::domain::{Payment, PaymentId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised while reading payments.
    pub enum PaymentRepositoryError {
        Connection { message: String } => "payment repository connection failed: {message}" as service_unavailable,
        Query { message: String } => "payment repository query failed: {message}" as internal,
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Payment>, PaymentRepositoryError>;

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>, PaymentRepositoryError>;
}
