//! Reference records and the read-only table they live in.

use crate::error::BotError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six reference classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Background,
    Class,
    Item,
    Race,
    Rule,
    Spell,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Background,
            Category::Class,
            Category::Item,
            Category::Race,
            Category::Rule,
            Category::Spell,
        ]
    }

    /// The lowercase label used in command names and data file names.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Background => "background",
            Category::Class => "class",
            Category::Item => "item",
            Category::Race => "race",
            Category::Rule => "rule",
            Category::Spell => "spell",
        }
    }

    /// Parse a label back into a category (case-insensitive).
    pub fn from_label(label: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One entry parsed from the reference data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub category: Category,
    pub page: String,
    pub source: String,
}

/// The table of every record loaded at startup.
///
/// Built once, read-only for the rest of the process lifetime. Names are not
/// unique; the same name may appear within or across categories.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records whose category matches exactly, in load order.
    pub fn of_category(&self, category: Category) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .collect()
    }

    /// Draw one record uniformly from the given category.
    ///
    /// Registry gating keeps this unreachable for an empty category; if it
    /// happens anyway the error is an internal one, not a user-facing reply.
    pub fn pick_random<R: Rng>(
        &self,
        category: Category,
        rng: &mut R,
    ) -> Result<&Record, BotError> {
        let candidates = self.of_category(category);
        if candidates.is_empty() {
            return Err(BotError::EmptyCategory(category));
        }
        Ok(candidates[rng.gen_range(0..candidates.len())])
    }
}
