use super::*;

pub struct SessionBuilder {
    client: Arc<dyn Client>,
    config: Option<Config>,
}

impl SessionBuilder {
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self {
            client,
            config: None,
        }
    }

    pub fn set_config(self, config: Config) -> Self {
        Self {
            config: Some(config),
            ..self
        }
    }

    pub fn build(self) -> Session {
        Session {
            client: self.client,
            config: self.config.unwrap_or_default(),
        }
    }
}
