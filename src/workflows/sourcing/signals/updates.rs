use super::normalizer::capitalize_first;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Sourcing methods recognised in daily updates. Declaration order decides the
/// primary method, so keep it stable.
pub(crate) const SOURCING_METHODS: &[&str] = &[
    "juicebox",
    "hubspot",
    "linkedin",
    "crunchbase",
    "github",
    "google",
    "x-ray",
    "deep research",
    "keyword search",
    "quota",
    "startup",
    "donor",
];

pub(crate) const NO_METHOD: &str = "None";

static JUICEBOX_RE: OnceLock<Regex> = OnceLock::new();
static SALES_NAV_RE: OnceLock<Regex> = OnceLock::new();
static REPO_RE: OnceLock<Regex> = OnceLock::new();

fn juicebox_pattern() -> &'static Regex {
    JUICEBOX_RE.get_or_init(|| Regex::new(r"(?i)\bjuicebox\b").unwrap())
}

fn sales_nav_pattern() -> &'static Regex {
    // "SalesNav", "Sales Nav", "Sales Navigator"
    SALES_NAV_RE.get_or_init(|| Regex::new(r"(?i)\bsales\s?nav(?:igator)?\b").unwrap())
}

fn repo_pattern() -> &'static Regex {
    REPO_RE.get_or_init(|| Regex::new(r"(?i)\brepos?\b").unwrap())
}

/// Whole-word, case-insensitive mentions of the AI sourcing tool.
pub(crate) fn juicebox_mentions(text: &str) -> usize {
    juicebox_pattern().find_iter(text).count()
}

/// Per-tool mention counts. Informational; only the Juicebox count feeds a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMentions {
    pub juicebox: usize,
    pub sales_nav: usize,
    pub repo: usize,
}

impl ToolMentions {
    pub fn count(text: &str) -> Self {
        Self {
            juicebox: juicebox_mentions(text),
            sales_nav: sales_nav_pattern().find_iter(text).count(),
            repo: repo_pattern().find_iter(text).count(),
        }
    }
}

/// Signals derived from end-of-day updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSignals {
    pub method_count: usize,
    pub primary_method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods_found: Vec<String>,
    #[serde(default)]
    pub tool_mentions: ToolMentions,
    #[serde(skip)]
    pub raw_text: String,
}

impl Default for UpdateSignals {
    fn default() -> Self {
        Self {
            method_count: 0,
            primary_method: NO_METHOD.to_string(),
            methods_found: Vec::new(),
            tool_mentions: ToolMentions::default(),
            raw_text: String::new(),
        }
    }
}

impl UpdateSignals {
    /// Vocabulary entries absent from the update text, in declared order.
    pub fn missing_methods(&self) -> Vec<String> {
        SOURCING_METHODS
            .iter()
            .filter(|method| !self.methods_found.iter().any(|found| found == *method))
            .map(|method| capitalize_first(method))
            .collect()
    }
}

pub fn extract_update_signals(text: &str) -> UpdateSignals {
    let lowered = text.to_lowercase();
    let methods_found: Vec<String> = SOURCING_METHODS
        .iter()
        .filter(|method| lowered.contains(*method))
        .map(|method| method.to_string())
        .collect();

    let primary_method = methods_found
        .first()
        .map(|method| capitalize_first(method))
        .unwrap_or_else(|| NO_METHOD.to_string());

    UpdateSignals {
        method_count: methods_found.len(),
        primary_method,
        methods_found,
        tool_mentions: ToolMentions::count(text),
        raw_text: text.to_string(),
    }
}
