//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Text to translate: one string or an ordered list of segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    /// A single piece of text
    Single(String),
    /// Several segments, translated together and answered in order
    Many(Vec<String>),
}

impl TextInput {
    /// Nothing to translate
    pub fn is_empty(&self) -> bool {
        match self {
            TextInput::Single(text) => text.is_empty(),
            TextInput::Many(segments) => segments.is_empty(),
        }
    }

    /// Segments in input order
    pub fn into_segments(self) -> Vec<String> {
        match self {
            TextInput::Single(text) => vec![text],
            TextInput::Many(segments) => segments,
        }
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::Single(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::Single(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(segments: Vec<String>) -> Self {
        TextInput::Many(segments)
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(segments: Vec<&str>) -> Self {
        TextInput::Many(segments.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for TextInput {
    fn from(segments: &[&str]) -> Self {
        TextInput::Many(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TextInput {
    fn from(segments: [&str; N]) -> Self {
        TextInput::Many(segments.iter().map(|s| s.to_string()).collect())
    }
}

/// Target language identifiers, as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetLanguages(pub Vec<String>);

impl TargetLanguages {
    /// Identifiers in caller order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for TargetLanguages {
    fn from(lang: &str) -> Self {
        Self(vec![lang.to_string()])
    }
}

impl From<String> for TargetLanguages {
    fn from(lang: String) -> Self {
        Self(vec![lang])
    }
}

impl From<Vec<String>> for TargetLanguages {
    fn from(langs: Vec<String>) -> Self {
        Self(langs)
    }
}

impl From<Vec<&str>> for TargetLanguages {
    fn from(langs: Vec<&str>) -> Self {
        Self(langs.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for TargetLanguages {
    fn from(langs: &[&str]) -> Self {
        Self(langs.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TargetLanguages {
    fn from(langs: [&str; N]) -> Self {
        Self(langs.iter().map(|s| s.to_string()).collect())
    }
}

/// Transport-level overrides for a single call
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers merged last, overriding everything else
    pub headers: BTreeMap<String, String>,
    /// Per-request timeout, on top of the client-wide one
    pub timeout: Option<Duration>,
}

/// Per-call options for `translate`
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Extra query parameters (e.g. `textType=html`); null or empty values are dropped
    pub translate_options: BTreeMap<String, serde_json::Value>,
    /// When set, these headers replace the bearer token entirely
    pub authentication_headers: Option<BTreeMap<String, String>>,
    /// User agent for the auth fetch and the translate request
    pub user_agent: Option<String>,
    /// Transport overrides
    pub request: RequestOptions,
}

impl TranslateOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extra query parameter
    pub fn with_translate_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.translate_options.insert(key.into(), value.into());
        self
    }

    /// Add a header that replaces the bearer token
    pub fn with_authentication_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.authentication_headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the user agent for this call
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Add a request header override
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.headers.insert(name.into(), value.into());
        self
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request.timeout = Some(timeout);
        self
    }
}

/// One element of the translate request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextItem {
    /// Segment text
    #[serde(rename = "Text")]
    pub text: String,
}

/// Validated request, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    /// Canonical source code, `None` for auto-detection
    pub from: Option<String>,
    /// Canonical target codes, never empty
    pub to: Vec<String>,
    /// Text segments in input order
    pub segments: Vec<String>,
}

impl TranslateRequest {
    /// JSON body: one `{"Text": ...}` per segment, in order
    pub fn body(&self) -> Vec<TextItem> {
        self.segments
            .iter()
            .map(|text| TextItem { text: text.clone() })
            .collect()
    }

    /// Query string pairs.
    ///
    /// `api-version` and `from` come first, then one `to` per target, then
    /// the caller's extras. An extra named like a base parameter replaces it
    /// in place. Null and empty values are left out.
    pub fn query(
        &self,
        api_version: &str,
        extra: &BTreeMap<String, serde_json::Value>,
    ) -> Vec<(String, String)> {
        let mut base: Vec<(String, Option<String>)> = vec![
            ("api-version".to_string(), Some(api_version.to_string())),
            ("from".to_string(), self.from.clone()),
        ];
        let mut rest = Vec::new();

        for (key, value) in extra {
            let value = query_value(value);
            match base.iter_mut().find(|(name, _)| name == key) {
                Some(slot) => slot.1 = value,
                None => rest.push((key.clone(), value)),
            }
        }

        let present = |(key, value): (String, Option<String>)| {
            value.filter(|v| !v.is_empty()).map(|v| (key, v))
        };

        let mut pairs: Vec<(String, String)> = base.into_iter().filter_map(present).collect();
        pairs.extend(self.to.iter().map(|lang| ("to".to_string(), lang.clone())));
        pairs.extend(rest.into_iter().filter_map(present));
        pairs
    }
}

fn query_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Result for one input segment, as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// One entry per target language
    pub translations: Vec<Translation>,
    /// Present when the source was auto-detected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<DetectedLanguage>,
}

/// Translated text for one target language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Translated text
    pub text: String,
    /// Target language code
    pub to: String,
    /// Sentence lengths, when `includeSentenceLength` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_len: Option<SentenceLengths>,
    /// Transliteration, when `toScript` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<Transliteration>,
    /// Word alignment, when `includeAlignment` was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<serde_json::Value>,
}

/// Sentence boundaries in source and translated text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentenceLengths {
    /// Sentence lengths of the source text
    pub src_sent_len: Vec<u32>,
    /// Sentence lengths of the translated text
    pub trans_sent_len: Vec<u32>,
}

/// Translated text rendered in another script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transliteration {
    /// Script code
    pub script: String,
    /// Transliterated text
    pub text: String,
}

/// Source language detected by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectedLanguage {
    /// Detected language code
    pub language: String,
    /// Confidence between 0 and 1
    pub score: f64,
}
