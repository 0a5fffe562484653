use serde::Deserialize;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub filter: String,
}

impl ServerSettings {
    /// Host and port for binding; the host may be a name such as `localhost`
    pub fn listen_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Defaults, then `config/server.*` if present, then `DASHBOARD__*` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/server")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default("log.filter", DEFAULT_LOG_FILTER)?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = load_app_config_from("config/does-not-exist").unwrap();

        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("dashboards-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let config = load_app_config_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.log.filter, DEFAULT_LOG_FILTER);
    }

    #[tokio::test]
    async fn test_listen_address_accepts_host_names() {
        let server = ServerSettings {
            host: "localhost".to_string(),
            port: 0,
        };
        assert_eq!(server.listen_address(), ("localhost", 0));

        let listener = tokio::net::TcpListener::bind(server.listen_address()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
