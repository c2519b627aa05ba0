use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// Environment variable holding the LLM API key
pub const ENV_LLM_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable holding the vector index REST URL
pub const ENV_VECTOR_URL: &str = "UPSTASH_VECTOR_REST_URL";
/// Environment variable holding the vector index REST token
pub const ENV_VECTOR_TOKEN: &str = "UPSTASH_VECTOR_REST_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible chat completions API
    pub endpoint: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: String::new(),
            request_timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub url: String,
    pub token: String,
    pub request_timeout_secs: u64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            request_timeout_secs: 30,
        }
    }
}

/// Model parameters for one LLM-backed pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageModelConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

fn default_enhancer() -> StageModelConfig {
    StageModelConfig {
        model: "llama-3.1-8b-instant".to_string(),
        temperature: 0.3,
        max_tokens: 150,
    }
}

fn default_synthesizer() -> StageModelConfig {
    StageModelConfig {
        model: "llama-3.1-70b-versatile".to_string(),
        temperature: 0.7,
        max_tokens: 500,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Documents retrieved on the enhanced path
    pub enhanced_top_k: usize,
    /// Documents retrieved on the basic path
    pub basic_top_k: usize,
    /// Deadline applied to every external call; unset means wait indefinitely
    pub stage_timeout_ms: Option<u64>,
    /// Name the synthesized answer speaks as
    pub candidate_name: String,
    pub enhancer: StageModelConfig,
    pub synthesizer: StageModelConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            enhanced_top_k: 5,
            basic_top_k: 3,
            stage_timeout_ms: None,
            candidate_name: "the candidate".to_string(),
            enhancer: default_enhancer(),
            synthesizer: default_synthesizer(),
        }
    }
}

impl PipelineConfig {
    pub fn stage_timeout(&self) -> Option<Duration> {
        self.stage_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            enable_cors: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub vector: VectorConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default file path, then apply environment overrides
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit path, or the default locations when `None`
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        // Explicit path, then config.toml, then config.example.toml, then built-in defaults
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new("config.toml").exists() {
            Self::from_file("config.toml")?
        } else if Path::new("config.example.toml").exists() {
            eprintln!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Override secrets and endpoints from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(ENV_LLM_API_KEY) {
            self.llm.api_key = key;
        }
        if let Some(url) = non_empty(ENV_VECTOR_URL) {
            self.vector.url = url;
        }
        if let Some(token) = non_empty(ENV_VECTOR_TOKEN) {
            self.vector.token = token;
        }
    }

    /// Check value ranges and endpoint syntax
    pub fn validate(&self) -> crate::Result<()> {
        url::Url::parse(&self.llm.endpoint).map_err(|e| {
            crate::InterviewRagError::ConfigError(format!(
                "Invalid LLM endpoint '{}': {e}",
                self.llm.endpoint
            ))
        })?;

        if !self.vector.url.is_empty() {
            url::Url::parse(&self.vector.url).map_err(|e| {
                crate::InterviewRagError::ConfigError(format!(
                    "Invalid vector index URL '{}': {e}",
                    self.vector.url
                ))
            })?;
        }

        for (stage, params) in [
            ("enhancer", &self.pipeline.enhancer),
            ("synthesizer", &self.pipeline.synthesizer),
        ] {
            if !(0.0..=1.0).contains(&params.temperature) {
                return Err(crate::InterviewRagError::ConfigError(format!(
                    "{stage} temperature must be within [0, 1], got {}",
                    params.temperature
                )));
            }
            if params.model.trim().is_empty() {
                return Err(crate::InterviewRagError::ConfigError(format!(
                    "{stage} model must not be empty"
                )));
            }
        }

        if self.pipeline.enhanced_top_k == 0 || self.pipeline.basic_top_k == 0 {
            return Err(crate::InterviewRagError::ConfigError(
                "top_k values must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Get LLM endpoint
    pub fn llm_endpoint(&self) -> &str {
        &self.llm.endpoint
    }

    /// Get vector index URL
    pub fn vector_url(&self) -> &str {
        &self.vector.url
    }

    /// Get per-stage deadline
    pub fn stage_timeout(&self) -> Option<Duration> {
        self.pipeline.stage_timeout()
    }
}
