//! Async translation client with shared token refresh

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use tracing::{debug, error, info};

use crate::core::auth::{fetch_token, AuthToken, TokenCache};
use crate::core::config::{TranslatorConfig, API_VERSION};
use crate::core::errors::{Result, TranslationError};
use crate::core::lang::LanguageTable;
use crate::core::models::{
    TargetLanguages, TextInput, TranslateOptions, TranslateRequest, TranslationResult,
};

/// Source-language sentinel that leaves detection to the service
pub const AUTO_DETECT: &str = "auto-detect";

/// Target used when the caller gives none
pub const DEFAULT_TARGET: &str = "en";

/// Async translation client.
///
/// Clones share the HTTP connection pool and the token cache.
#[derive(Debug, Clone)]
pub struct AsyncTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
    tokens: Arc<TokenCache>,
    languages: LanguageTable,
}

impl AsyncTranslator {
    /// Create a new async translator with its own token cache
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let tokens = Arc::new(TokenCache::with_margin(config.token_refresh_margin_ms));
        Self::with_token_cache(config, tokens)
    }

    /// Create a translator that draws tokens from an existing cache
    pub fn with_token_cache(config: TranslatorConfig, tokens: Arc<TokenCache>) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
            tokens,
            languages: LanguageTable::builtin(),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Configuration this translator was built from
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Token cache, shareable with other translators
    pub fn token_cache(&self) -> &Arc<TokenCache> {
        &self.tokens
    }

    /// Language table used to resolve identifiers
    pub fn languages(&self) -> LanguageTable {
        self.languages
    }

    /// Translate `text` from `from` (or auto-detected) into every language of `to`.
    ///
    /// Returns one result per input segment, in input order. Empty text is a
    /// no-op that returns no results and makes no request.
    pub async fn translate(
        &self,
        text: impl Into<TextInput>,
        from: Option<&str>,
        to: impl Into<TargetLanguages>,
        options: &TranslateOptions,
    ) -> Result<Vec<TranslationResult>> {
        let text = text.into();
        if text.is_empty() {
            debug!("Nothing to translate");
            return Ok(Vec::new());
        }

        let request = self.prepare_request(text, from, to.into())?;

        let token = match options.authentication_headers {
            Some(_) => None,
            None => Some(self.ensure_token(options).await?),
        };

        let headers = self.build_headers(options, token.as_ref())?;

        self.send(&request, headers, options).await.map_err(|e| {
            error!("Failed to translate: {}", e);
            e
        })
    }

    /// Resolve languages and normalize text, without touching the network.
    ///
    /// Every identifier that fails to resolve is reported in a single
    /// `UnsupportedLanguage` error.
    pub fn prepare_request(
        &self,
        text: TextInput,
        from: Option<&str>,
        to: TargetLanguages,
    ) -> Result<TranslateRequest> {
        let mut unsupported = Vec::new();

        let from = from
            .filter(|id| !id.is_empty() && !id.eq_ignore_ascii_case(AUTO_DETECT))
            .and_then(|id| match self.languages.resolve(Some(id)) {
                Some(code) => Some(code.to_string()),
                None => {
                    unsupported.push(id.to_string());
                    None
                }
            });

        let mut targets = Vec::with_capacity(to.0.len());
        for id in to.0 {
            match self.languages.resolve(Some(&id)) {
                Some(code) => targets.push(code.to_string()),
                None => unsupported.push(id),
            }
        }

        if !unsupported.is_empty() {
            return Err(TranslationError::UnsupportedLanguage {
                languages: unsupported,
            });
        }

        if targets.is_empty() {
            targets.push(DEFAULT_TARGET.to_string());
        }

        Ok(TranslateRequest {
            from,
            to: targets,
            segments: text.into_segments(),
        })
    }

    async fn ensure_token(&self, options: &TranslateOptions) -> Result<AuthToken> {
        let client = self.client.clone();
        let auth_url = self.config.auth_url.clone();
        let user_agent = options
            .user_agent
            .clone()
            .unwrap_or_else(|| self.config.user_agent.clone());

        self.tokens
            .ensure_fresh(move || fetch_token(client.clone(), auth_url.clone(), user_agent.clone()))
            .await
    }

    /// Defaults, then authentication, then caller overrides
    fn build_headers(
        &self,
        options: &TranslateOptions,
        token: Option<&AuthToken>,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let user_agent = options
            .user_agent
            .as_deref()
            .unwrap_or(&self.config.user_agent);
        headers.insert(USER_AGENT, header_value("User-Agent", user_agent)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match (&options.authentication_headers, token) {
            (Some(auth), _) => {
                for (name, value) in auth {
                    insert_header(&mut headers, name, value)?;
                }
            }
            (None, Some(token)) => {
                headers.insert(AUTHORIZATION, header_value("Authorization", &token.bearer())?);
            }
            (None, None) => {}
        }

        for (name, value) in &options.request.headers {
            insert_header(&mut headers, name, value)?;
        }

        Ok(headers)
    }

    /// Send actual HTTP request
    async fn send(
        &self,
        request: &TranslateRequest,
        headers: HeaderMap,
        options: &TranslateOptions,
    ) -> Result<Vec<TranslationResult>> {
        let query = request.query(API_VERSION, &options.translate_options);
        debug!(
            "Translating {} segment(s) from {:?} to {:?}",
            request.segments.len(),
            request.from,
            request.to
        );

        let mut builder = self
            .client
            .post(&self.config.translate_url)
            .query(&query)
            .headers(headers)
            .body(serde_json::to_vec(&request.body())?);

        if let Some(timeout) = options.request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            return Err(request_failed(response).await);
        }

        let bytes = response.bytes().await?;
        let results: Vec<TranslationResult> = serde_json::from_slice(&bytes)?;
        Ok(results)
    }

    /// Fetch the provider's list of translation languages as `(code, English name)`
    /// pairs, in the order the provider returns them
    pub async fn fetch_languages(&self) -> Result<Vec<(String, String)>> {
        let response = self
            .client
            .get(&self.config.languages_url)
            .query(&[("api-version", API_VERSION), ("scope", "translation")])
            .header(ACCEPT_LANGUAGE, "en-US,en")
            .header(USER_AGENT, header_value("User-Agent", &self.config.user_agent)?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(request_failed(response).await);
        }

        let bytes = response.bytes().await?;
        let payload: serde_json::Value = serde_json::from_slice(&bytes)?;

        let table = payload
            .get("translation")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| TranslationError::InvalidResponseError {
                message: "No translation table in response".to_string(),
            })?;

        let languages = table
            .iter()
            .map(|(code, item)| {
                item.get("name")
                    .and_then(serde_json::Value::as_str)
                    .map(|name| (code.clone(), name.to_string()))
                    .ok_or_else(|| TranslationError::InvalidResponseError {
                        message: format!("Language '{}' has no name", code),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Fetched {} translation languages", languages.len());
        Ok(languages)
    }
}

/// Turn a non-success response into an error carrying its status and body
async fn request_failed(response: reqwest::Response) -> TranslationError {
    let status = response.status();
    let raw = match response.text().await {
        Ok(raw) => raw,
        Err(e) => return TranslationError::HttpError(e),
    };

    let body = serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .unwrap_or(raw);

    TranslationError::RequestFailed {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| TranslationError::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| TranslationError::InvalidHeader {
            name: name.to_string(),
            message: e.to_string(),
        })?;
    headers.insert(header_name, header_value(name, value)?);
    Ok(())
}
