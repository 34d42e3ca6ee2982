//! Translation providers used by `add` to fill in values for other locales.
//!
//! A provider never fails: any problem talking to the service degrades to
//! the source text, with the reason kept for verbose output.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

const DEEPL_FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
const DEEPL_PRO_ENDPOINT: &str = "https://api.deepl.com/v2/translate";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationStatus {
    Translated,
    /// No credential configured; the source text is used as is.
    Disabled,
    /// The service could not be used; the source text is used as is.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub status: TranslationStatus,
}

impl Translation {
    pub fn fallback(text: &str, status: TranslationStatus) -> Self {
        Self {
            text: text.to_string(),
            status,
        }
    }
}

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` into the language of `target_locale` (a locale folder
    /// name such as `tr` or `pt`).
    async fn translate(&self, text: &str, target_locale: &str) -> Translation;
}

/// Pass-through provider used when no credential is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

#[async_trait]
impl TranslationProvider for IdentityTranslator {
    async fn translate(&self, text: &str, _target_locale: &str) -> Translation {
        Translation::fallback(text, TranslationStatus::Disabled)
    }
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    text: String,
}

/// DeepL REST API provider.
pub struct DeepLTranslator {
    api_key: String,
    endpoint: String,
    client: Client,
}

impl DeepLTranslator {
    /// Free-tier keys (suffix `:fx`) are routed to the free API host.
    pub fn new(api_key: String) -> Result<Self> {
        let endpoint = if api_key.ends_with(":fx") {
            DEEPL_FREE_ENDPOINT
        } else {
            DEEPL_PRO_ENDPOINT
        };
        Self::with_endpoint(api_key, endpoint.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            api_key,
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, text: &str, target_locale: &str) -> Result<String> {
        let body = TranslateRequest {
            text: [text],
            target_lang: target_language(target_locale),
        };
        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("DeepL-Auth-Key {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("DeepL request failed")?
            .error_for_status()
            .context("DeepL rejected the request")?;

        let parsed: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse DeepL response")?;
        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .context("DeepL returned no translations")
    }
}

#[async_trait]
impl TranslationProvider for DeepLTranslator {
    async fn translate(&self, text: &str, target_locale: &str) -> Translation {
        match self.request(text, target_locale).await {
            Ok(text) => Translation {
                text,
                status: TranslationStatus::Translated,
            },
            Err(e) => Translation::fallback(text, TranslationStatus::Failed(format!("{:#}", e))),
        }
    }
}

/// Map a locale folder name to a DeepL target language code.
///
/// DeepL wants a regional variant for English and Portuguese.
pub fn target_language(locale: &str) -> String {
    match locale.to_ascii_lowercase().as_str() {
        "en" => "EN-US".to_string(),
        "pt" => "PT-BR".to_string(),
        other => other.to_ascii_uppercase(),
    }
}

/// Pick the provider for an optional credential.
pub fn provider_for(api_key: Option<String>) -> Result<Box<dyn TranslationProvider>> {
    Ok(match api_key {
        Some(key) => Box::new(DeepLTranslator::new(key)?),
        None => Box::new(IdentityTranslator),
    })
}
