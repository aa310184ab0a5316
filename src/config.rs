use crate::error::{BadEnvVarSnafu, ParsePortSnafu, RollbookResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use snafu::ResultExt;

/// Where the server should listen, overridable via `ROLLBOOK_SERVER_IP`.
pub fn server_address() -> String {
    env::var("ROLLBOOK_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

#[derive(Debug)]
pub struct DbConfig {
    user: String,
    password: SecretString,
    path: String,
    port: u16,
    database: String,
}

impl DbConfig {
    pub fn new() -> RollbookResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        Ok(Self {
            user: get_env_var("DB_USER")?,
            password: SecretString::from(get_env_var("DB_PASSWORD")?),
            path: get_env_var("DB_PATH")?,
            port: get_env_var("DB_PORT")?.parse().context(ParsePortSnafu)?,
            database: get_env_var("DB_NAME")?,
        })
    }

    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.path,
            self.port,
            self.database
        )
    }
}
