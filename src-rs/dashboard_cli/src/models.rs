use idtask_dashboard::ClientConfig;

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub start_page: usize,
    pub verbose: bool,
}

impl CLIConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
    }
}
