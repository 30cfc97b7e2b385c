//! Relation specifications: the `--relations` grammar and relation kinds.
//!
//! Tokens share the field grammar (`name:kind`, comma-separated). Each
//! parsed [`RelationSpec`] renders to one model method that calls the ORM
//! relation builder against the studly-cased singular of the relation name
//! (`comments:hasMany` → `return $this->hasMany(Comment::class);`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::naming::related_class_name;

/// A parsed description of one inter-model relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSpec {
    pub name: String,
    pub kind: RelationKind,
}

impl RelationSpec {
    /// The class name of the related model, e.g. `comments` → `Comment`.
    pub fn related_class(&self) -> String {
        related_class_name(&self.name)
    }

    /// Render the relation as a model method body.
    ///
    /// Indented one level, ready to be joined into the model class block:
    ///
    /// ```php
    ///     public function user()
    ///     {
    ///         return $this->belongsTo(User::class);
    ///     }
    /// ```
    pub fn method_source(&self) -> String {
        format!(
            "    public function {}()\n    {{\n        return $this->{}({}::class);\n    }}\n",
            self.name,
            self.kind.builder_method(),
            self.related_class(),
        )
    }
}

/// The supported relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    HasMany,
    HasOne,
    BelongsTo,
    BelongsToMany,
}

impl RelationKind {
    /// The ORM relation-builder method name, camelCased as the target
    /// framework expects.
    pub const fn builder_method(&self) -> &'static str {
        match self {
            Self::HasMany => "hasMany",
            Self::HasOne => "hasOne",
            Self::BelongsTo => "belongsTo",
            Self::BelongsToMany => "belongsToMany",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builder_method())
    }
}

impl FromStr for RelationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hasmany" | "has_many" => Ok(Self::HasMany),
            "hasone" | "has_one" => Ok(Self::HasOne),
            "belongsto" | "belongs_to" => Ok(Self::BelongsTo),
            "belongstomany" | "belongs_to_many" => Ok(Self::BelongsToMany),
            other => Err(DomainError::UnknownRelationKind { kind: other.into() }),
        }
    }
}

/// Parse a raw `--relations` value into an ordered sequence of
/// [`RelationSpec`]. Empty or absent input yields an empty sequence and no
/// relation code is rendered.
pub fn parse_relations(input: &str) -> Result<Vec<RelationSpec>, DomainError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut specs = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let Some((name, kind_str)) = token.split_once(':') else {
            debug!(token, "skipping relation token without ':'");
            continue;
        };

        specs.push(RelationSpec {
            name: name.trim().to_string(),
            kind: kind_str.parse()?,
        });
    }

    Ok(specs)
}
