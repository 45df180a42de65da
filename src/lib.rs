//! Edge Translator - async client for the Microsoft Edge translation API
//!
//! This library resolves loosely-specified language names to provider codes,
//! keeps a bearer token fresh with a single shared refresh, and issues
//! translation requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use crate::core::{
    auth::{AuthToken, TokenCache},
    client::AsyncTranslator,
    config::TranslatorConfig,
    errors::{AuthFetchError, TranslationError},
    lang::{is_supported, resolve, Language, LanguageTable},
    languages::LANGUAGES,
    models::{TargetLanguages, TextInput, TranslateOptions, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
