use crate::foundation::error::{CardError, CardResult};

/// Service backend with static endpoint defaults.
///
/// All three speak the OpenAI-compatible chat-completions dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Google Gemini through its OpenAI-compatible endpoint.
    #[default]
    Gemini,
    /// OpenAI.
    Openai,
    /// xAI Grok.
    Grok,
}

/// Static defaults for one [`Provider`].
#[derive(Clone, Copy, Debug)]
pub struct ProviderDefaults {
    pub api_url: &'static str,
    pub model: &'static str,
}

impl Provider {
    pub fn defaults(self) -> ProviderDefaults {
        match self {
            Provider::Gemini => ProviderDefaults {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-2.5-flash",
            },
            Provider::Openai => ProviderDefaults {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-4o-mini",
            },
            Provider::Grok => ProviderDefaults {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-3-mini",
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Openai => "OpenAI",
            Provider::Grok => "Grok",
        }
    }

    /// Parse a provider name as accepted by `VIRALCARD_PROVIDER` and the CLI.
    pub fn parse(s: &str) -> CardResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::Openai),
            "grok" | "xai" => Ok(Provider::Grok),
            other => Err(CardError::validation(format!("unknown provider \"{other}\""))),
        }
    }
}

pub const ENV_API_KEY: &str = "VIRALCARD_API_KEY";
pub const ENV_API_URL: &str = "VIRALCARD_API_URL";
pub const ENV_MODEL: &str = "VIRALCARD_MODEL";
pub const ENV_PROVIDER: &str = "VIRALCARD_PROVIDER";

/// Connection settings for [`crate::HttpGateway`].
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayConfig {
    pub provider: Provider,
    /// Chat-completions endpoint.
    pub api_url: String,
    pub model: String,
    /// Bearer credential; may be empty until the credential step completes.
    pub api_key: String,
    pub temperature: f32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::for_provider(Provider::default())
    }
}

impl GatewayConfig {
    /// Defaults for `provider` with no credential.
    pub fn for_provider(provider: Provider) -> Self {
        let d = provider.defaults();
        Self {
            provider,
            api_url: d.api_url.to_string(),
            model: d.model.to_string(),
            api_key: String::new(),
            temperature: 0.7,
        }
    }

    /// Build from `VIRALCARD_*` environment variables.
    ///
    /// A missing key is not an error here; the wizard starts at the credential step instead.
    pub fn from_env() -> CardResult<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`Self::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CardResult<Self> {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        let provider = match non_empty(ENV_PROVIDER) {
            Some(p) => Provider::parse(&p)?,
            None => Provider::default(),
        };
        let mut cfg = Self::for_provider(provider);
        if let Some(url) = non_empty(ENV_API_URL) {
            cfg.api_url = url;
        }
        if let Some(model) = non_empty(ENV_MODEL) {
            cfg.model = model;
        }
        if let Some(key) = non_empty(ENV_API_KEY) {
            cfg.api_key = key.trim().to_string();
        }
        Ok(cfg)
    }

    /// `true` when a non-blank credential is configured.
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gateway/config.rs"]
mod tests;
