//! HTTP server configuration object.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use dashboard::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) fixture_sign_in: bool,
}

impl ServerConfig {
    /// Construct a server configuration from session and binding settings.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            fixture_sign_in: false,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server keeps invoices in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Accept the built-in demo account at `/login`.
    ///
    /// Off by default; without it every sign-in is refused as a
    /// configuration error.
    #[must_use]
    pub fn with_fixture_sign_in(mut self, enabled: bool) -> Self {
        self.fixture_sign_in = enabled;
        self
    }
}
