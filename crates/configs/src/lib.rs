use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub email: Option<EmailConfig>,
    #[serde(default)]
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Hosted table-store endpoint the site reads and writes through.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GatewayConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

/// Transactional email provider credentials. The whole section is optional;
/// form submits are rejected with a "not configured" message when absent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,
}

fn default_email_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `config.toml` when present, otherwise start from defaults;
    /// either way fill gaps from the environment and validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // 归一化 gateway/email/admin（支持从环境变量填充缺省值）
        self.gateway.normalize_from_env();
        self.gateway.validate()?;
        if self.email.is_none() {
            self.email = EmailConfig::from_env();
        }
        self.admin.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl GatewayConfig {
    pub fn normalize_from_env(&mut self) {
        // 若 TOML 中未提供，则尝试从环境变量填充
        if self.base_url.trim().is_empty() {
            if let Ok(url) = std::env::var("STORE_API_URL") {
                self.base_url = url;
            }
        }
        if self.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("STORE_API_KEY") {
                self.api_key = key;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!("gateway.base_url is empty; set it in config.toml or STORE_API_URL"));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("gateway.base_url must start with http:// or https://"));
        }
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("gateway.api_key is empty; set it in config.toml or STORE_API_KEY"));
        }
        Ok(())
    }
}

impl EmailConfig {
    /// Build from `EMAILJS_SERVICE_ID` / `EMAILJS_TEMPLATE_ID` /
    /// `EMAILJS_PUBLIC_KEY`; all three must be present and non-blank.
    pub fn from_env() -> Option<Self> {
        let service_id = std::env::var("EMAILJS_SERVICE_ID").ok()?;
        let template_id = std::env::var("EMAILJS_TEMPLATE_ID").ok()?;
        let public_key = std::env::var("EMAILJS_PUBLIC_KEY").ok()?;
        if service_id.trim().is_empty() || template_id.trim().is_empty() || public_key.trim().is_empty() {
            return None;
        }
        let endpoint = std::env::var("EMAILJS_ENDPOINT").unwrap_or_else(|_| default_email_endpoint());
        Some(Self { service_id, template_id, public_key, endpoint })
    }
}

impl AdminConfig {
    pub fn normalize_from_env(&mut self) {
        if self.api_key.as_deref().map(str::trim).map_or(true, str::is_empty) {
            self.api_key = std::env::var("ADMIN_API_KEY").ok().filter(|k| !k.trim().is_empty());
        }
    }
}
