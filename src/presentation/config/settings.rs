use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    pub grammar: GrammarSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub backend: CacheBackend,
    pub redis_url: Option<String>,
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarSettings {
    pub provider: GrammarProvider,
    #[serde(default = "default_languagetool_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarProvider {
    LanguageTool,
    Mock,
}

/// Upload and text-input policy for the grammar-check endpoint. The lists
/// are configuration so the policy can be tuned without code changes; the
/// defaults reproduce the documented allow-lists exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: usize,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
    #[serde(default = "default_markdown_patterns")]
    pub markdown_patterns: Vec<String>,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            allowed_extensions: default_allowed_extensions(),
            allowed_mime_types: default_allowed_mime_types(),
            markdown_patterns: default_markdown_patterns(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            enable_json: false,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_ttl_seconds() -> u64 {
    300
}

fn default_languagetool_url() -> String {
    "http://localhost:8010".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_max_file_size_mb() -> usize {
    5
}

fn default_allowed_extensions() -> Vec<String> {
    vec![
        ".md".to_string(),
        ".markdown".to_string(),
        ".mdown".to_string(),
        ".mkdn".to_string(),
    ]
}

fn default_allowed_mime_types() -> Vec<String> {
    vec![
        "text/markdown".to_string(),
        "text/x-markdown".to_string(),
        "text/plain".to_string(),
    ]
}

/// One match is enough to call the input markdown: ATX heading, list
/// marker, link, inline code, bold or italic.
fn default_markdown_patterns() -> Vec<String> {
    vec![
        r"(?m)^#{1,6}\s".to_string(),
        r"(\*|-)\s".to_string(),
        r"\d+\.\s".to_string(),
        r"\[.*\]\(.*\)".to_string(),
        r"`.*?`".to_string(),
        r"\*\*.*?\*\*".to_string(),
        r"\*.*?\*".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}
