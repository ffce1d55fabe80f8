// Shared models - Boost vocabulary presets
use serde::{Deserialize, Serialize};

use super::options::{parse_boost_words, TranscriptionOptions};

/// A named group of related vocabulary terms inside an extraction result.
///
/// Field names stay snake_case on the wire; this is the shape the
/// document-extraction service returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCategory {
    pub name: String,
    pub terms: Vec<String>,
}

/// Vocabulary pulled out of a reference document, grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedVocabulary {
    pub categories: Vec<ExtractedCategory>,
    pub suggested_name: String,
}

impl ExtractedVocabulary {
    /// All terms across categories, first occurrence wins.
    pub fn flatten_terms(&self) -> Vec<String> {
        collect_terms(&self.categories)
    }
}

/// A saved, user-selectable set of boost vocabulary.
///
/// Referenced from `TranscriptionOptions::selected_presets` by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyPreset {
    pub id: String,
    pub name: String,
    pub categories: Vec<ExtractedCategory>,
    pub created_at: String,
}

impl VocabularyPreset {
    /// Store an extraction result as a selectable preset.
    pub fn from_extraction(extraction: ExtractedVocabulary) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: extraction.suggested_name,
            categories: extraction.categories,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Every term in this preset, deduped, category order preserved.
    pub fn terms(&self) -> Vec<String> {
        collect_terms(&self.categories)
    }
}

fn collect_terms(categories: &[ExtractedCategory]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for category in categories {
        for term in &category.terms {
            if !terms.iter().any(|t| t == term) {
                terms.push(term.clone());
            }
        }
    }
    terms
}

/// The full boost word list for a request: words parsed from the raw input
/// plus the terms of every selected preset, deduped in order of appearance.
/// Selected ids with no matching preset are skipped.
pub fn resolve_boost_words(
    options: &TranscriptionOptions,
    presets: &[VocabularyPreset],
) -> Vec<String> {
    let mut words = parse_boost_words(&options.boost_words_input);
    for id in &options.selected_presets {
        match presets.iter().find(|preset| &preset.id == id) {
            Some(preset) => {
                for term in preset.terms() {
                    if !words.iter().any(|w| w == &term) {
                        words.push(term);
                    }
                }
            }
            None => log::warn!("Unknown vocabulary preset id: {}", id),
        }
    }
    words
}
