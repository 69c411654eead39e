//! HTTP server configuration object.

use campus_print::outbound::persistence::DbPool;

/// Everything [`super::create_server`] needs besides the health flags.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, db_pool: DbPool) -> Self {
        Self {
            host: host.into(),
            port,
            cors_origins: Vec::new(),
            db_pool,
        }
    }

    /// Browser origins allowed to call the API with credentials.
    #[must_use]
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}
