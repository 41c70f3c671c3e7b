//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DASHBOARD_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::session_config::SessionToggles;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Configuration values for the dashboard server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD")]
pub struct AppSettings {
    /// Address to bind.
    pub host: Option<IpAddr>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL URL; invoices are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// File holding the session key material.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`.
    ///
    /// Boolean toggles stay off the command line: clap flags always report
    /// `false` when absent, which would mask the environment and file layers.
    #[ortho_config(skip_cli, default = true)]
    pub cookie_secure: bool,
    /// Let release builds fall back to a temporary session key.
    #[ortho_config(skip_cli, default = false)]
    pub allow_ephemeral_session_key: bool,
    /// Accept the built-in demo account at `/login`.
    #[ortho_config(skip_cli, default = false)]
    pub allow_fixture_sign_in: bool,
}

impl AppSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Database URL with surrounding whitespace removed, if one is set.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Session toggles for [`crate::inbound::http::session_config`].
    pub fn session_toggles(&self) -> SessionToggles {
        SessionToggles {
            key_file: self
                .session_key_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE)),
            cookie_secure: self.cookie_secure,
            allow_ephemeral: self.allow_ephemeral_session_key,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 8] = [
        "DASHBOARD_HOST",
        "DASHBOARD_PORT",
        "DASHBOARD_DATABASE_URL",
        "DASHBOARD_POOL_MAX_SIZE",
        "DASHBOARD_SESSION_KEY_FILE",
        "DASHBOARD_COOKIE_SECURE",
        "DASHBOARD_ALLOW_EPHEMERAL_SESSION_KEY",
        "DASHBOARD_ALLOW_FIXTURE_SIGN_IN",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("dashboard")]).expect("config should load")
    }

    fn env_with(overrides: &[(&str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_owned());
                (*name, value)
            })
            .collect()
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), None);
        assert!(settings.pool_max_size.is_none());
        let toggles = settings.session_toggles();
        assert_eq!(toggles.key_file, PathBuf::from(DEFAULT_SESSION_KEY_FILE));
        assert!(toggles.cookie_secure);
        assert!(!toggles.allow_ephemeral);
        assert!(!settings.allow_fixture_sign_in);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("DASHBOARD_HOST", "127.0.0.1"),
            ("DASHBOARD_PORT", "3000"),
            ("DASHBOARD_DATABASE_URL", "postgres://localhost/dashboard"),
            ("DASHBOARD_POOL_MAX_SIZE", "4"),
            ("DASHBOARD_SESSION_KEY_FILE", "/tmp/dashboard_key"),
            ("DASHBOARD_COOKIE_SECURE", "false"),
            ("DASHBOARD_ALLOW_EPHEMERAL_SESSION_KEY", "true"),
            ("DASHBOARD_ALLOW_FIXTURE_SIGN_IN", "true"),
        ]));

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), "127.0.0.1:3000".parse().expect("addr"));
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/dashboard")
        );
        assert_eq!(settings.pool_max_size, Some(4));
        let toggles = settings.session_toggles();
        assert_eq!(toggles.key_file, PathBuf::from("/tmp/dashboard_key"));
        assert!(!toggles.cookie_secure);
        assert!(toggles.allow_ephemeral);
        assert!(settings.allow_fixture_sign_in);
    }

    #[rstest]
    #[case(&[], true, false)]
    #[case(&[("DASHBOARD_ALLOW_EPHEMERAL_SESSION_KEY", "true")], true, true)]
    #[case(&[("DASHBOARD_COOKIE_SECURE", "false")], false, false)]
    fn session_toggles_follow_the_environment(
        #[case] overrides: &[(&str, &str)],
        #[case] cookie_secure: bool,
        #[case] allow_ephemeral: bool,
    ) {
        let _guard = lock_env(env_with(overrides));

        let toggles = load_from_empty_args().session_toggles();

        assert_eq!(toggles.cookie_secure, cookie_secure);
        assert_eq!(toggles.allow_ephemeral, allow_ephemeral);
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env(env_with(&[("DASHBOARD_DATABASE_URL", "   ")]));

        assert_eq!(load_from_empty_args().database_url(), None);
    }
}
