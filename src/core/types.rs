//! Core data types for the resource hub.
//!
//! Authored content (topics, sections, FAQs and the static display
//! resources) plus the derived search entry. Everything here is
//! immutable once loaded.

use serde::{Deserialize, Deserializer, Serialize};

/// A top-level content topic, shown as one tab of the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic identifier (e.g. "prep-guide")
    pub key: String,

    /// Display name
    pub label: String,

    /// Ordered content sections
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sections: Vec<Section>,

    /// Ordered question/answer pairs
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub faqs: Vec<Faq>,
}

impl Topic {
    /// Topic with sections only
    pub fn with_sections(key: &str, label: &str, sections: Vec<Section>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sections,
            faqs: Vec::new(),
        }
    }

    /// Topic with FAQs only
    pub fn with_faqs(key: &str, label: &str, faqs: Vec<Faq>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sections: Vec::new(),
            faqs,
        }
    }

    /// Number of search entries this topic flattens into
    pub fn entry_count(&self) -> usize {
        self.sections.len() + self.faqs.len()
    }
}

/// Read an explicit `null` list as empty (not populated)
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A headed block of paragraphs within a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,

    /// Paragraph text in display order (never empty once validated)
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl Section {
    pub fn new(heading: &str, paragraphs: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Searchable record derived from one section or FAQ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// "<topic label> — <section heading or FAQ question>"
    pub title: String,

    /// Joined paragraph text or FAQ answer
    pub text: String,

    /// Key of the owning topic (lookup only)
    pub topic_key: String,
}

/// Short highlighted fact shown under the hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickFact {
    pub tag: String,
    pub title: String,
    pub body: String,
}

/// Partner organisation listed on the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    pub note: String,
}

/// Downloadable material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub name: String,
    pub href: String,
    pub size: String,
}

/// Club or classroom session outline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub note: String,
}

/// "Ask an expert" form description. The form never submits anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertForm {
    /// Field prompts in display order
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub response_note: String,
}

/// Page footer copy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub sdg_alignment: Vec<String>,
    #[serde(default)]
    pub contact: String,
}

/// Read-only display data carried beside the catalog. Never searched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub quick_facts: Vec<QuickFact>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub downloads: Vec<Download>,
    #[serde(default)]
    pub session_plan: SessionPlan,
    #[serde(default)]
    pub expert_form: ExpertForm,
    #[serde(default)]
    pub footer: Footer,
}
