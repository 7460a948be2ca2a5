//! Note record and supporting vocabularies.
//!
//! # Responsibility
//! - Define the `Note` read model returned by storage and service layers.
//! - Define `Category` (fixed five-value set) and `SortOrder` policies.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a note and never reused.
//! - `updated_at >= created_at` for every persisted note.
//! - `word_count` equals [`count_words`] of `content` as of the last write.

use serde::{Deserialize, Serialize};

/// Stable row identifier assigned by the storage engine at creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Canonical persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier, assigned once at creation.
    pub id: NoteId,
    /// Title text. Length is service-enforced; storage has no limit.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Creation instant in epoch milliseconds. Never mutated.
    pub created_at: i64,
    /// Last-write instant in epoch milliseconds.
    pub updated_at: i64,
    /// Pin flag, stored as 0/1.
    pub is_pinned: bool,
    /// Comma-separated tag list. May be empty; tags may repeat.
    pub tags: String,
    /// Category text as supplied by the caller.
    pub category: String,
    /// Space-delimited token count of `content`, see [`count_words`].
    pub word_count: i64,
}

/// Fixed category vocabulary enforced at the service boundary.
///
/// Storage keeps the caller-provided text; this enum is the canonical set
/// that UI boundaries normalize display labels against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Personal,
    Study,
    Ideas,
    Work,
    Other,
}

impl Category {
    /// All valid categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Study,
        Category::Ideas,
        Category::Work,
        Category::Other,
    ];

    /// Canonical name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Study => "Study",
            Category::Ideas => "Ideas",
            Category::Work => "Work",
            Category::Other => "Other",
        }
    }

    /// Parses a possibly decorated label into a canonical category.
    ///
    /// Display labels may carry a decorative suffix after the name (for
    /// example `"Work 💼"`); everything from the first whitespace onward is
    /// ignored before matching. Returns `None` for anything outside the
    /// fixed set, including the empty string.
    pub fn from_label(label: &str) -> Option<Category> {
        let bare = label.split_whitespace().next().unwrap_or("");
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == bare)
    }
}

/// Ordering policy for note listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Pinned first, then most recently updated. The default.
    #[default]
    Updated,
    /// Title ascending.
    Alphabetical,
    /// Pinned first, then most recently updated.
    Pinned,
}

impl SortOrder {
    /// Maps a caller-provided sort key to a policy.
    ///
    /// Unknown keys fall back to the default (`Updated`).
    pub fn from_key(key: &str) -> SortOrder {
        match key {
            "alphabetical" => SortOrder::Alphabetical,
            "pinned" => SortOrder::Pinned,
            _ => SortOrder::Updated,
        }
    }
}

/// Counts space-delimited tokens in `content`.
///
/// Splits on the space character only: tokens glued by other whitespace
/// (`"treats\n-"`) count once. Runs of spaces and empty content contribute
/// nothing. This is the sole definition of `word_count`; storage recomputes
/// it on every create/update.
pub fn count_words(content: &str) -> i64 {
    content.split(' ').filter(|token| !token.is_empty()).count() as i64
}
