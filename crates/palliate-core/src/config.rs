use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::types::Document;

/// Top-level configuration for Palliate.
///
/// Loaded from `~/.palliate/config.toml` by default. The rule table and the
/// document corpus are authored content: they are read once at startup and
/// never reloaded. Empty `rules`/`faq` or `documents` lists mean "use the
/// built-in content".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PalliateConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

impl PalliateConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PalliateConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Offline assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// First assistant turn of every conversation.
    pub greeting: String,
    /// Answer returned when no rule matches.
    pub fallback: FallbackConfig,
    /// Question/answer pairs, consulted before `rules`.
    pub faq: Vec<FaqConfig>,
    /// Topic rules, in priority order.
    pub rules: Vec<RuleConfig>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            greeting: "สวัสดีค่ะ ฉันคือผู้ช่วย AI สำหรับผู้ดูแล ถามมาได้เลยค่ะ".to_string(),
            fallback: FallbackConfig::default(),
            faq: Vec::new(),
            rules: Vec::new(),
        }
    }
}

impl AssistantConfig {
    /// Whether the config supplies its own rule table.
    pub fn has_custom_rules(&self) -> bool {
        !self.faq.is_empty() || !self.rules.is_empty()
    }
}

/// The fixed "no match" answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub text: String,
    /// Label of the external reference link. Ignored without `link_url`.
    pub link_label: String,
    /// Where the user can get an answer the assistant cannot give.
    pub link_url: Option<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            text: "ขออภัย คำถามนี้เฉพาะเจาะจงกว่าที่ผู้ช่วยออฟไลน์ตอบได้ 🙏 หากต้องการข้อมูลเพิ่มเติมจาก ChatGPT"
                .to_string(),
            link_label: "คลิก".to_string(),
            link_url: Some("https://chatgpt.com/".to_string()),
        }
    }
}

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqConfig {
    pub question: String,
    pub answer: String,
}

/// How a rule's pattern is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Substring of the normalized utterance.
    Literal,
    /// Case-insensitive, unanchored regular expression.
    Regex,
}

/// One topic rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub kind: TriggerKind,
    pub pattern: String,
    pub answer: String,
}

/// Knowledge search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Where documents without their own URL are opened.
    pub document_store_url: String,
    /// The corpus, in display order.
    pub documents: Vec<Document>,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            document_store_url:
                "https://drive.google.com/drive/folders/1TO2h4480YVcI_x4UdNyyXeOukBdgS2LP?usp=sharing"
                    .to_string(),
            documents: Vec::new(),
        }
    }
}
