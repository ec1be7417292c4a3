use super::super::domain::{CompanyStage, SearchIntent, SeniorityBias};
use super::normalizer::decode_search_text;
use serde::{Deserialize, Serialize};

const SENIOR_TERMS: &[&str] = &["senior", "staff", "principal", "lead", "founding", "head"];
const JUNIOR_TERMS: &[&str] = &["junior", "associate", "entry", "intern"];
const STARTUP_TERMS: &[&str] = &["seed", "series", "founding", "early"];
const ENTERPRISE_TERMS: &[&str] = &["enterprise", "public", "fortune"];

/// Sales Navigator filter type emitted for "current company" searches.
const CURRENT_COMPANY_FILTER: &str = "CURRENT_COMPANY";

const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "director",
    "lead",
    "designer",
    "analyst",
    "architect",
    "specialist",
    "consultant",
];

/// Signals derived from saved search links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSignals {
    pub seniority_bias: SeniorityBias,
    pub company_stage: CompanyStage,
    pub search_intent: SearchIntent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Default for SearchSignals {
    fn default() -> Self {
        Self {
            seniority_bias: SeniorityBias::MidLevel,
            company_stage: CompanyStage::General,
            search_intent: SearchIntent::KeywordSearch,
            keywords: Vec::new(),
        }
    }
}

pub fn extract_search_signals(text: &str) -> SearchSignals {
    let decoded = decode_search_text(text);

    let seniority_bias = if contains_any(&decoded, SENIOR_TERMS) {
        SeniorityBias::Senior
    } else if contains_any(&decoded, JUNIOR_TERMS) {
        SeniorityBias::Junior
    } else {
        SeniorityBias::MidLevel
    };

    let company_stage = if contains_any(&decoded, STARTUP_TERMS) {
        CompanyStage::Startup
    } else if contains_any(&decoded, ENTERPRISE_TERMS) {
        CompanyStage::Enterprise
    } else {
        CompanyStage::General
    };

    let search_intent = if text.contains(CURRENT_COMPANY_FILTER) {
        SearchIntent::CurrentRole
    } else {
        SearchIntent::KeywordSearch
    };

    SearchSignals {
        seniority_bias,
        company_stage,
        search_intent,
        keywords: role_keywords(&decoded),
    }
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}

fn role_keywords(decoded: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for word in decoded.split(|c: char| !c.is_ascii_alphabetic()) {
        if word.len() > 2 && ROLE_KEYWORDS.contains(&word) && !found.iter().any(|k| k == word) {
            found.push(word.to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        assert_eq!(extract_search_signals(""), SearchSignals::default());
    }

    #[test]
    fn senior_terms_take_priority_over_junior_terms() {
        let signals = extract_search_signals("keywords%3Ajunior%20OR%20staff%20engineer");
        assert_eq!(signals.seniority_bias, SeniorityBias::Senior);
    }

    #[test]
    fn junior_terms_classify_when_no_senior_term() {
        let signals = extract_search_signals("keywords%3AAssociate%20Analyst");
        assert_eq!(signals.seniority_bias, SeniorityBias::Junior);
        assert_eq!(signals.keywords, vec!["analyst".to_string()]);
    }

    #[test]
    fn startup_terms_take_priority_over_enterprise_terms() {
        let signals = extract_search_signals("Series%20B%20or%20Fortune%20500");
        assert_eq!(signals.company_stage, CompanyStage::Startup);

        let signals = extract_search_signals("publicly%20traded");
        assert_eq!(signals.company_stage, CompanyStage::Enterprise);
    }

    #[test]
    fn founding_counts_for_both_seniority_and_stage() {
        let signals = extract_search_signals("founding engineer");
        assert_eq!(signals.seniority_bias, SeniorityBias::Senior);
        assert_eq!(signals.company_stage, CompanyStage::Startup);
    }

    #[test]
    fn current_company_filter_is_read_from_raw_text() {
        let raw = "query=(filters%3AList((type%3ACURRENT_COMPANY%2Cvalues%3AList(1))))";
        assert_eq!(
            extract_search_signals(raw).search_intent,
            SearchIntent::CurrentRole
        );

        // Lower-cased mentions are not the filter parameter.
        let lowered = "current_company";
        assert_eq!(
            extract_search_signals(lowered).search_intent,
            SearchIntent::KeywordSearch
        );
    }

    #[test]
    fn role_keywords_are_distinct_and_in_text_order() {
        let signals = extract_search_signals("Lead%20Developer%2C%20developer%20and%20engineer");
        assert_eq!(signals.keywords, vec!["lead", "developer", "engineer"]);
    }
}
