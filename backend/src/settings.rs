//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `UPM_*` environment variables, and config
//! files; anything left unset falls back to the defaults below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DATABASE_URL: &str = "postgres://127.0.0.1:5432/user-product-db";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values for the HTTP service and its record store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "UPM")]
pub struct ServiceSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Keep records in process memory instead of PostgreSQL.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl ServiceSettings {
    /// Listen interface, defaulting to `0.0.0.0`.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Listen port, defaulting to `3001`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Record store URL, defaulting to the local `user-product-db` database.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Pool size, defaulting to 10 connections.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        Ok(SocketAddr::new(self.host().parse()?, self.port()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for service settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "UPM_HOST",
        "UPM_PORT",
        "UPM_DATABASE_URL",
        "UPM_POOL_MAX_SIZE",
        "UPM_IN_MEMORY",
    ];

    fn load_from_args(args: &[&str]) -> ServiceSettings {
        let argv = std::iter::once(OsString::from("user-product-backend"))
            .chain(args.iter().map(OsString::from));
        ServiceSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), 3001);
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(!settings.in_memory);
        assert_eq!(
            settings.bind_addr().expect("valid address").to_string(),
            "0.0.0.0:3001"
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("UPM_HOST", Some("127.0.0.1".to_owned())),
            ("UPM_PORT", Some("8081".to_owned())),
            ("UPM_DATABASE_URL", Some("postgres://db:5432/other".to_owned())),
            ("UPM_POOL_MAX_SIZE", Some("3".to_owned())),
            ("UPM_IN_MEMORY", Some("true".to_owned())),
        ]);

        let settings = load_from_args(&[]);
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 8081);
        assert_eq!(settings.database_url(), "postgres://db:5432/other");
        assert_eq!(settings.pool_max_size(), 3);
        assert!(settings.in_memory);
    }

    #[rstest]
    fn cli_flags_override_defaults() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_args(&["--port", "9000"]);
        assert_eq!(settings.port(), 9000);
    }

    #[rstest]
    fn hostname_is_not_a_bind_address() {
        let _guard = lock_env([("UPM_HOST", Some("localhost".to_owned()))]);

        assert!(load_from_args(&[]).bind_addr().is_err());
    }
}
