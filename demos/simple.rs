//! Simple end-to-end translation against the live service

use dotenvy::dotenv;
use edge_translator::{AsyncTranslator, TranslateOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    println!("=== Simple translation ===");

    let translator = AsyncTranslator::from_env()?;

    let results = translator
        .translate("Hello World!", None, "Chinese (Literary)", &TranslateOptions::new())
        .await?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    let html = r#"<div class="notranslate">This will not be translated.</div><div>This will be translated.</div>"#;
    let options = TranslateOptions::new().with_translate_option("textType", "html");
    let results = translator.translate(html, None, "zh-Hans", &options).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    println!("\n=== Done ===");
    Ok(())
}
