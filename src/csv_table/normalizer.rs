//! Correction rules for CSV parameter records.
//!
//! Rules run in a fixed order, each reading the previous rule's output and
//! producing a new record. Every rule's trigger is removed by its own
//! correction, so running the chain twice changes nothing the second time.

use crate::constants::{
    DIMENSIONLESS_ALIASES, DIMENSIONLESS_UNIT, SPELLING_CORRECTIONS, VERTICAL_REFERENCE_SUFFIXES,
};
use crate::models::ParameterRecord;
use tracing::trace;

/// A single correction applied to parameter records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizationRule {
    /// Move a trailing ` MSL`/` AGL` from the unit to the description
    VerticalReferenceSuffix,
    /// Map `non-dim` and `flag` units to `dimensionless`
    DimensionlessUnit,
    /// Fix known misspellings in name and description
    SpellingCorrection,
}

impl NormalizationRule {
    /// The standard chain, in application order
    pub const CHAIN: [NormalizationRule; 3] = [
        NormalizationRule::VerticalReferenceSuffix,
        NormalizationRule::DimensionlessUnit,
        NormalizationRule::SpellingCorrection,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NormalizationRule::VerticalReferenceSuffix => "vertical_reference_suffix",
            NormalizationRule::DimensionlessUnit => "dimensionless_unit",
            NormalizationRule::SpellingCorrection => "spelling_correction",
        }
    }

    /// Apply the rule, returning a corrected copy only when the rule fires
    pub fn apply(&self, record: &ParameterRecord) -> Option<ParameterRecord> {
        match self {
            NormalizationRule::VerticalReferenceSuffix => {
                let (unit, moved) = split_vertical_reference(&record.unit)?;
                Some(
                    record
                        .with_unit(unit)
                        .with_description(format!("{}{}", record.description, moved)),
                )
            }
            NormalizationRule::DimensionlessUnit => DIMENSIONLESS_ALIASES
                .iter()
                .any(|alias| *alias == record.unit)
                .then(|| record.with_unit(DIMENSIONLESS_UNIT)),
            NormalizationRule::SpellingCorrection => {
                let name = correct_spelling(&record.name);
                let description = correct_spelling(&record.description);
                if name.is_none() && description.is_none() {
                    return None;
                }
                let mut corrected = record.clone();
                if let Some(name) = name {
                    corrected = corrected.with_name(name);
                }
                if let Some(description) = description {
                    corrected = corrected.with_description(description);
                }
                Some(corrected)
            }
        }
    }
}

/// Strip every trailing vertical reference suffix from a unit.
///
/// Returns the bare unit and the stripped text in its original order, or
/// `None` if the unit carries no suffix.
fn split_vertical_reference(unit: &str) -> Option<(&str, String)> {
    let mut bare = unit;
    let mut moved = Vec::new();

    while let Some(suffix) = VERTICAL_REFERENCE_SUFFIXES
        .iter()
        .find(|suffix| bare.ends_with(*suffix))
    {
        bare = &bare[..bare.len() - suffix.len()];
        moved.push(*suffix);
    }

    if moved.is_empty() {
        return None;
    }
    moved.reverse();
    Some((bare, moved.concat()))
}

fn correct_spelling(text: &str) -> Option<String> {
    let mut corrected: Option<String> = None;
    for (wrong, right) in SPELLING_CORRECTIONS {
        let current = corrected.as_deref().unwrap_or(text);
        if current.contains(wrong) {
            corrected = Some(current.replace(wrong, right));
        }
    }
    corrected
}

/// A normalized record with the rules that changed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub record: ParameterRecord,
    pub applied: Vec<&'static str>,
}

/// Ordered rule chain applied to every CSV record
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<NormalizationRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            rules: NormalizationRule::CHAIN.to_vec(),
        }
    }
}

impl Normalizer {
    /// Build a normalizer with a custom rule order
    pub fn with_rules(rules: Vec<NormalizationRule>) -> Self {
        Self { rules }
    }

    pub fn normalize(&self, record: ParameterRecord) -> Normalized {
        let mut current = record;
        let mut applied = Vec::new();

        for rule in &self.rules {
            if let Some(next) = rule.apply(&current) {
                trace!("Rule {} fired for parameter {}", rule.name(), next.name);
                applied.push(rule.name());
                current = next;
            }
        }

        Normalized {
            record: current,
            applied,
        }
    }
}
