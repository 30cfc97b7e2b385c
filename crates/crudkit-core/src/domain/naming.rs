//! Model naming: the [`ModelName`] value object and case/inflection helpers.
//!
//! # Design
//!
//! Every generated artifact derives its identifiers from a single validated
//! [`ModelName`]. The derivations are computed once at construction:
//!
//! | Accessor          | Example (`blog_post`) | Used for                       |
//! |-------------------|-----------------------|--------------------------------|
//! | `class_name`      | `BlogPost`            | class names, file names        |
//! | `table_name`      | `blog_posts`          | migrations, views, route URIs  |
//! | `variable_name`   | `blog_post`           | controller local variables     |
//!
//! The inflection rules are deliberately small (the common English cases the
//! target schema DSL expects), not a full linguistics engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// A validated model name with its derived naming variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelName {
    raw: String,
    class_name: String,
    table_name: String,
    variable_name: String,
}

impl ModelName {
    /// Validate a raw model argument and derive its naming variants.
    ///
    /// Accepts `Task`, `blog_post`, `blog-post`, `blogPost` — anything that
    /// splits into identifier words. Rejects empty input, names that do not
    /// start with a letter, and names containing path separators.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(DomainError::InvalidModelName {
                name: raw,
                reason: "name cannot be empty".into(),
            });
        }
        if !raw.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidModelName {
                name: raw,
                reason: "name must start with a letter".into(),
            });
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(DomainError::InvalidModelName {
                name: raw,
                reason: "name cannot contain path separators".into(),
            });
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(DomainError::InvalidModelName {
                name: raw,
                reason: "name may only contain letters, digits, '_' and '-'".into(),
            });
        }

        let class_name = to_studly_case(&raw);
        let singular_snake = to_snake_case(&raw);
        let table_name = pluralize(&singular_snake);

        Ok(Self {
            raw,
            class_name,
            table_name,
            variable_name: singular_snake,
        })
    }

    /// Original argument as the user typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// StudlyCase class name, e.g. `BlogPost`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// snake_case plural table name, e.g. `blog_posts`.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// snake_case singular variable name, e.g. `blog_post`.
    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

/// Convert a string to snake_case.
///
/// | Input | Output |
/// |-------|--------|
/// | "MyPost" | "my_post" |
/// | "my-post" | "my_post" |
/// | "HTTPRequest" | "http_request" |
pub(crate) fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert a string to StudlyCase (PascalCase).
///
/// | Input | Output |
/// |-------|--------|
/// | "blog_post" | "BlogPost" |
/// | "HTTPRequest" | "HttpRequest" |
pub(crate) fn to_studly_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Pluralize a snake_case English noun.
///
/// Covers the cases the schema DSL actually meets: `task` → `tasks`,
/// `category` → `categories`, `status` → `statuses`, `box` → `boxes`.
pub(crate) fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if let Some(stem) = word.strip_suffix('y') {
        // "day" -> "days" but "category" -> "categories"
        let vowel_before = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if !vowel_before {
            return format!("{stem}ies");
        }
    }

    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Singularize a snake_case English noun. Inverse of [`pluralize`].
pub(crate) fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }

    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            // keep the consonant, drop only "es"
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }

    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Split a string into lowercase words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
///    (detected by `Upper Upper Lower` pattern)
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    // Peekable allows looking ahead for boundary detection without consuming
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        // Rule 1: Explicit separators always end the current word
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        // Rule 2: camelCase transition (lowercase -> uppercase)
        // "myPost" -> "my" + "Post"
        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // Rule 3: acronym boundary "HTTPRequest" -> "HTTP" + "Request"
            if c.is_uppercase() && next.is_uppercase() {
                // look one further ahead for the Upper Upper Lower pattern
                let mut ahead = chars.clone();
                ahead.next();
                if ahead.peek().is_some_and(|c2| c2.is_lowercase()) {
                    current.push(c);
                    words.push(current.to_lowercase());
                    current.clear();
                    continue;
                }
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

/// StudlyCase the singular of a relation name: `comments` → `Comment`.
///
/// Used by the model renderer to point a relation method at its related
/// class.
pub(crate) fn related_class_name(relation_name: &str) -> String {
    to_studly_case(&singularize(&to_snake_case(relation_name)))
}
