//! Input validation for note mutations.
//!
//! # Responsibility
//! - Check title/content/category/tags constraints before any write.
//! - Produce typed, human-readable rejections.
//!
//! # Invariants
//! - Validators are stateless and side-effect free.
//! - Validators reject only; they never normalize or return corrected input.
//! - Reads are never validated (absence and empty results are valid data).

use crate::model::note::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum trimmed title length in characters.
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum content length in characters.
pub const MAX_CONTENT_CHARS: usize = 100_000;
/// Maximum number of tags per note.
pub const MAX_TAGS: usize = 20;
/// Maximum length of a single tag in characters.
pub const MAX_TAG_CHARS: usize = 30;

/// Typed rejection raised by the validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Trimmed title exceeds [`MAX_TITLE_CHARS`].
    TitleTooLong(usize),
    /// Content exceeds [`MAX_CONTENT_CHARS`].
    ContentTooLong(usize),
    /// Category is not a member of the fixed set.
    UnknownCategory(String),
    /// More than [`MAX_TAGS`] tags supplied.
    TooManyTags(usize),
    /// A single tag exceeds [`MAX_TAG_CHARS`].
    TagTooLong(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooLong(len) => {
                write!(f, "title must be at most {MAX_TITLE_CHARS} characters, got {len}")
            }
            Self::ContentTooLong(len) => {
                write!(f, "content must be at most {MAX_CONTENT_CHARS} characters, got {len}")
            }
            Self::UnknownCategory(value) => {
                let allowed = Category::ALL.map(Category::as_str).join(", ");
                write!(f, "category `{value}` is not one of: {allowed}")
            }
            Self::TooManyTags(count) => {
                write!(f, "at most {MAX_TAGS} tags allowed, got {count}")
            }
            Self::TagTooLong(tag) => {
                write!(f, "tag `{tag}` exceeds {MAX_TAG_CHARS} characters")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks the trimmed title length. Empty titles pass; the "Untitled Note"
/// substitution is a UI concern, upstream of validation.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.trim().chars().count();
    if len > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong(len));
    }
    Ok(())
}

/// Checks the content length.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    let len = content.chars().count();
    if len > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong(len));
    }
    Ok(())
}

/// Checks category membership in the fixed five-value set.
///
/// Decorated display labels are accepted: everything from the first
/// whitespace onward is ignored before matching, so `"Work 💼"` passes.
/// The empty string fails.
pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if Category::from_label(category).is_none() {
        return Err(ValidationError::UnknownCategory(category.to_string()));
    }
    Ok(())
}

/// Checks the comma-separated tag list. Tags are optional: empty or blank
/// input passes. Blank entries between commas are ignored.
pub fn validate_tags(tags: &str) -> Result<(), ValidationError> {
    if tags.trim().is_empty() {
        return Ok(());
    }

    let entries: Vec<&str> = tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();
    if entries.len() > MAX_TAGS {
        return Err(ValidationError::TooManyTags(entries.len()));
    }
    for tag in entries {
        if tag.chars().count() > MAX_TAG_CHARS {
            return Err(ValidationError::TagTooLong(tag.to_string()));
        }
    }
    Ok(())
}
