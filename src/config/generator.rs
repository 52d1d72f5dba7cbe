use std::env;
use url::Url;

const DEFAULT_SERVICE_URL: &str = "http://backend:8000";
const DEFAULT_SERVICE_PATH: &str = "/generate-qr/";

/// Location of the external QR generation service.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub service_url: String,
    pub generate_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            generate_path: DEFAULT_SERVICE_PATH.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Full address the relay posts generation requests to.
    pub fn get_endpoint(&self) -> Result<Url, String> {
        let base = Url::parse(&self.service_url)
            .map_err(|e| format!("QR_SERVICE_URL is not a valid url: {}", e))?;
        base.join(&self.generate_path)
            .map_err(|e| format!("QR_SERVICE_PATH is not a valid path: {}", e))
    }

    pub fn init_from_env(&mut self) -> Result<(), String> {
        if let Ok(service_url) = env::var("QR_SERVICE_URL") {
            self.service_url = service_url;
        }
        if let Ok(path) = env::var("QR_SERVICE_PATH") {
            self.generate_path = path;
        }
        self.get_endpoint()?;

        Ok(())
    }
}
