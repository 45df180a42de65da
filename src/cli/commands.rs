//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::AsyncTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::lang::{render_table_source, LanguageTable};
use crate::core::models::TranslateOptions;

/// Commands for Edge Translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text
    Translate {
        /// Source language (auto-detect if not specified)
        #[arg(short, long)]
        from: Option<String>,

        /// Target language, repeatable (default: en)
        #[arg(short, long = "to", default_value = "en")]
        to: Vec<String>,

        /// Input text type: plain or html
        #[arg(long)]
        text_type: Option<String>,

        /// Extra query parameter as KEY=VALUE, repeatable
        #[arg(long = "option", value_parser = parse_key_val)]
        options: Vec<(String, String)>,

        /// Print the raw JSON results
        #[arg(long)]
        json: bool,

        /// Text segments to translate
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List supported languages
    Langs {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve language codes or names to provider codes
    Resolve {
        /// Codes or English names, e.g. "zh-hans" or "Chinese (Literary)"
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// Regenerate the language table from the provider's language list
    GenerateLangs {
        /// Output Rust source file
        #[arg(short, long, default_value = "src/core/languages.rs")]
        output: PathBuf,
    },
}

/// Parse a `KEY=VALUE` pair
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))
}

/// Load configuration from a file if given, otherwise from the environment
pub fn load_config(path: Option<PathBuf>) -> anyhow::Result<TranslatorConfig> {
    let config = match path {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::from_env()?,
    };
    Ok(config)
}

/// Handle translate command
pub async fn handle_translate(
    config: TranslatorConfig,
    from: Option<String>,
    to: Vec<String>,
    text_type: Option<String>,
    extra: Vec<(String, String)>,
    json: bool,
    text: Vec<String>,
) -> anyhow::Result<()> {
    let translator = AsyncTranslator::new(config)?;

    let mut options = TranslateOptions::new();
    if let Some(text_type) = text_type {
        options = options.with_translate_option("textType", text_type);
    }
    for (key, value) in extra {
        options = options.with_translate_option(key, value);
    }

    info!("Translating {} segment(s) to {:?}", text.len(), to);

    let results = translator
        .translate(text, from.as_deref(), to, &options)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        if let Some(detected) = &result.detected_language {
            println!("# detected: {} ({:.2})", detected.language, detected.score);
        }
        for translation in &result.translations {
            println!("[{}] {}", translation.to, translation.text);
        }
    }

    Ok(())
}

/// Handle langs command
pub fn handle_langs(json: bool) -> anyhow::Result<()> {
    let table = LanguageTable::builtin();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = table
            .iter()
            .map(|l| (l.code.to_string(), serde_json::Value::from(l.name)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for lang in table.iter() {
        println!("{:<10} {}", lang.code, lang.name);
    }
    println!("\n{} languages", table.len());

    Ok(())
}

/// Handle resolve command
pub fn handle_resolve(identifiers: Vec<String>) -> anyhow::Result<()> {
    let table = LanguageTable::builtin();
    let mut unsupported = Vec::new();

    for id in &identifiers {
        match table.resolve(Some(id)) {
            Some(code) => println!("{} -> {}", id, code),
            None => {
                println!("{} -> unsupported", id);
                unsupported.push(id.as_str());
            }
        }
    }

    if !unsupported.is_empty() {
        anyhow::bail!("Unsupported language(s): {}", unsupported.join(", "));
    }

    Ok(())
}

/// Handle generate-langs command
pub async fn handle_generate_langs(config: TranslatorConfig, output: PathBuf) -> anyhow::Result<()> {
    let translator = AsyncTranslator::new(config)?;
    let languages = translator.fetch_languages().await?;

    if languages.is_empty() {
        anyhow::bail!("Provider returned no languages");
    }

    std::fs::write(&output, render_table_source(&languages))?;

    println!("✅ Language table written to {}", output.display());
    println!("   Languages: {}", languages.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("textType=html").unwrap(),
            ("textType".to_string(), "html".to_string())
        );
        assert_eq!(
            parse_key_val("category=a=b").unwrap(),
            ("category".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=x").is_err());
    }

    #[test]
    fn test_handle_resolve_fails_on_unknown() {
        assert!(handle_resolve(vec!["French".to_string()]).is_ok());
        assert!(handle_resolve(vec!["fr".to_string(), "xx-invalid".to_string()]).is_err());
    }
}
