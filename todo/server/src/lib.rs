//! REST backend for the Todo Task Manager.
//!
//! Serves the `/api/tasks` endpoints the web client consumes, backed by a
//! single-table SQLite store.

pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Config {
        #[serde(default = "default_port")]
        pub port: u16,
        #[serde(default = "default_database_path")]
        pub database_path: String,
        #[serde(default = "default_allowed_origin")]
        pub allowed_origin: String,
    }

    impl Config {
        /// Loads configuration from environment variables, falling back to
        /// defaults that match the development setup of the web client.
        pub fn from_env() -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(config::Environment::default())
                .build()?;

            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                port: default_port(),
                database_path: default_database_path(),
                allowed_origin: default_allowed_origin(),
            }
        }
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_database_path() -> String {
        "todo.db".to_string()
    }

    fn default_allowed_origin() -> String {
        "http://localhost:3000".to_string()
    }
}

pub mod store;
pub mod web;
