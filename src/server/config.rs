use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// 0 disables the metrics listener.
    pub metrics_port: u16,
    /// Any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 5000,
            metrics_port: 9091,
            cors_allowed_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn metrics_bind_address(&self) -> Option<String> {
        match self.metrics_port {
            0 => None,
            port => Some(format!("0.0.0.0:{}", port)),
        }
    }
}
