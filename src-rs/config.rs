pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let cfg = ClientConfig::new("http://api.local:8080/");
        assert_eq!(cfg.endpoint("/tasks/list"), "http://api.local:8080/tasks/list");
        assert_eq!(cfg.endpoint("tasks"), "http://api.local:8080/tasks");
    }

    #[test]
    fn default_points_at_local_api_port() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8080");
    }
}
