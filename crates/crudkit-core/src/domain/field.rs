//! Field specifications: the `--fields` grammar and the closed kind set.
//!
//! # Grammar
//!
//! ```text
//! fields    := token ("," token)*
//! token     := name ":" kind
//! kind      := ident | "enum(" value ("," value)* ")"
//! ```
//!
//! The top-level comma split is parenthesis-aware, so
//! `title:string,status:enum(open,closed)` produces exactly two tokens.
//! Tokens without a `:` are skipped silently (a debug event is emitted);
//! unknown kind identifiers are rejected with a descriptive error rather
//! than passed through into generated code.
//!
//! # The closed kind set
//!
//! Each [`FieldKind`] maps explicitly to its schema-column form and its
//! validation-rule form. Adding a kind means adding a variant here plus a
//! row in [`KIND_CATALOG`] — nothing else changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::domain::error::DomainError;

/// A parsed description of one model attribute.
///
/// Created by [`parse_fields`]; immutable once parsed; consumed by every
/// renderer in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// One schema-definition line for the migration body.
    ///
    /// Enum kinds emit an enumerated-values column with the captured values
    /// quoted and comma-joined; every other kind emits the generic
    /// `$table->type('name');` form.
    pub fn migration_line(&self) -> String {
        match &self.kind {
            FieldKind::Enum(values) => {
                let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
                format!("$table->enum('{}', [{}]);", self.name, quoted.join(", "))
            }
            other => format!("$table->{}('{}');", other.column_method(), self.name),
        }
    }

    /// One validation-rule line for the request body, e.g.
    /// `'title' => 'required|string|max:255',`.
    pub fn validation_line(&self) -> String {
        format!("'{}' => '{}',", self.name, self.kind.validation_rule())
    }
}

/// The closed set of supported field kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Text,
    Integer,
    BigInteger,
    Boolean,
    Date,
    DateTime,
    Decimal,
    Float,
    Json,
    Uuid,
    /// Enumerated column; values are captured verbatim from the input
    /// (no emptiness or uniqueness validation).
    Enum(Vec<String>),
}

impl FieldKind {
    /// Parse a kind token, e.g. `string` or `enum(open,closed)`.
    ///
    /// Aliases follow common schema-DSL spellings (`int`, `bool`,
    /// `timestamp`, ...). Unknown identifiers are an error — the generator
    /// never emits a column type it does not understand.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        if let Some(inner) = s.strip_prefix("enum(").and_then(|r| r.strip_suffix(')')) {
            return Ok(Self::Enum(
                inner.split(',').map(|v| v.trim().to_string()).collect(),
            ));
        }
        if s.eq_ignore_ascii_case("enum") {
            return Err(DomainError::EnumMissingValues);
        }

        match s.to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "integer" | "int" => Ok(Self::Integer),
            "biginteger" | "big_integer" | "bigint" => Ok(Self::BigInteger),
            "boolean" | "bool" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "datetime" | "date_time" | "timestamp" => Ok(Self::DateTime),
            "decimal" => Ok(Self::Decimal),
            "float" | "double" => Ok(Self::Float),
            "json" => Ok(Self::Json),
            "uuid" => Ok(Self::Uuid),
            other => Err(DomainError::UnknownFieldKind { kind: other.into() }),
        }
    }

    /// The schema-builder method name for this kind.
    pub fn column_method(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::BigInteger => "bigInteger",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Json => "json",
            Self::Uuid => "uuid",
            Self::Enum(_) => "enum",
        }
    }

    /// The validation-rule string for this kind.
    ///
    /// `text` is the one optional kind; everything else is required. Enum
    /// rules list the captured values verbatim.
    pub fn validation_rule(&self) -> String {
        match self {
            Self::String => "required|string|max:255".into(),
            Self::Text => "nullable|string".into(),
            Self::Integer | Self::BigInteger => "required|integer".into(),
            Self::Boolean => "required|boolean".into(),
            Self::Date | Self::DateTime => "required|date".into(),
            Self::Decimal | Self::Float => "required|numeric".into(),
            Self::Json => "required|array".into(),
            Self::Uuid => "required|uuid".into(),
            Self::Enum(values) => format!("required|in:{}", values.join(",")),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(values) => write!(f, "enum({})", values.join(",")),
            other => f.write_str(other.column_method()),
        }
    }
}

/// Catalog row describing one non-enum field kind, for help output and
/// error suggestions.
#[derive(Debug, Clone, Copy)]
pub struct KindInfo {
    pub name: &'static str,
    pub column: &'static str,
    pub rule: &'static str,
}

/// All supported non-enum kinds, in display order. Enum is documented
/// separately because its column and rule forms depend on its values.
pub const KIND_CATALOG: &[KindInfo] = &[
    KindInfo { name: "string", column: "string", rule: "required|string|max:255" },
    KindInfo { name: "text", column: "text", rule: "nullable|string" },
    KindInfo { name: "integer", column: "integer", rule: "required|integer" },
    KindInfo { name: "bigInteger", column: "bigInteger", rule: "required|integer" },
    KindInfo { name: "boolean", column: "boolean", rule: "required|boolean" },
    KindInfo { name: "date", column: "date", rule: "required|date" },
    KindInfo { name: "dateTime", column: "dateTime", rule: "required|date" },
    KindInfo { name: "decimal", column: "decimal", rule: "required|numeric" },
    KindInfo { name: "float", column: "float", rule: "required|numeric" },
    KindInfo { name: "json", column: "json", rule: "required|array" },
    KindInfo { name: "uuid", column: "uuid", rule: "required|uuid" },
];

/// Parse a raw `--fields` value into an ordered sequence of [`FieldSpec`].
///
/// Empty or absent input yields an empty sequence. The comma split is
/// parenthesis-aware so enum value lists survive intact.
pub fn parse_fields(input: &str) -> Result<Vec<FieldSpec>, DomainError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut specs = Vec::new();
    for token in split_top_level(input) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let Some((name, kind_str)) = token.split_once(':') else {
            debug!(token, "skipping field token without ':'");
            continue;
        };

        specs.push(FieldSpec {
            name: name.trim().to_string(),
            kind: FieldKind::parse(kind_str)?,
        });
    }

    Ok(specs)
}

/// Split on commas that are not nested inside parentheses.
///
/// `"a:string,b:enum(x,y)"` → `["a:string", "b:enum(x,y)"]`.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                tokens.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    tokens.push(&input[start..]);

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_token_has_no_enum_values() {
        let fields = parse_fields("title:string").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[0].kind, FieldKind::String);
    }

    #[test]
    fn enum_token_captures_values_in_order() {
        let fields = parse_fields("status:enum(open,closed)").unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "status");
        assert_eq!(
            fields[0].kind,
            FieldKind::Enum(vec!["open".into(), "closed".into()])
        );
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(parse_fields("").unwrap().is_empty());
        assert!(parse_fields("   ").unwrap().is_empty());
    }

    #[test]
    fn token_without_colon_is_skipped() {
        let fields = parse_fields("title:string,garbage,done:boolean").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[1].name, "done");
    }

    #[test]
    fn order_is_preserved() {
        let fields = parse_fields("a:string,b:integer,c:text").unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn commas_inside_enum_do_not_split_tokens() {
        let fields = parse_fields("status:enum(open,in_progress,closed),title:string").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields[0].kind,
            FieldKind::Enum(vec!["open".into(), "in_progress".into(), "closed".into()])
        );
        assert_eq!(fields[1].name, "title");
    }

    #[test]
    fn whitespace_around_tokens_is_trimmed() {
        let fields = parse_fields(" title:string , body:text ").unwrap();
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[1].name, "body");
    }

    #[test]
    fn unknown_kind_is_rejected_with_name() {
        let err = parse_fields("title:varchar").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownFieldKind { kind: "varchar".into() }
        );
    }

    #[test]
    fn bare_enum_without_values_is_rejected() {
        assert_eq!(
            parse_fields("status:enum").unwrap_err(),
            DomainError::EnumMissingValues
        );
    }

    #[test]
    fn kind_aliases_parse() {
        assert_eq!(FieldKind::parse("int").unwrap(), FieldKind::Integer);
        assert_eq!(FieldKind::parse("bool").unwrap(), FieldKind::Boolean);
        assert_eq!(FieldKind::parse("timestamp").unwrap(), FieldKind::DateTime);
        assert_eq!(FieldKind::parse("bigint").unwrap(), FieldKind::BigInteger);
    }

    #[test]
    fn enum_values_kept_verbatim_even_when_odd() {
        // No emptiness or uniqueness validation by design.
        let kind = FieldKind::parse("enum(a,,a)").unwrap();
        assert_eq!(
            kind,
            FieldKind::Enum(vec!["a".into(), String::new(), "a".into()])
        );
    }

    #[test]
    fn migration_line_for_plain_kind() {
        let field = FieldSpec { name: "title".into(), kind: FieldKind::String };
        assert_eq!(field.migration_line(), "$table->string('title');");
    }

    #[test]
    fn migration_line_quotes_enum_values() {
        let field = FieldSpec {
            name: "status".into(),
            kind: FieldKind::Enum(vec!["open".into(), "closed".into()]),
        };
        assert_eq!(
            field.migration_line(),
            "$table->enum('status', ['open', 'closed']);"
        );
    }

    #[test]
    fn migration_line_uses_camel_case_column_methods() {
        let field = FieldSpec { name: "count".into(), kind: FieldKind::BigInteger };
        assert_eq!(field.migration_line(), "$table->bigInteger('count');");
    }

    #[test]
    fn validation_rules_follow_kind_mapping() {
        let title = FieldSpec { name: "title".into(), kind: FieldKind::String };
        let bio = FieldSpec { name: "bio".into(), kind: FieldKind::Text };
        let status = FieldSpec {
            name: "status".into(),
            kind: FieldKind::Enum(vec!["open".into(), "closed".into()]),
        };

        assert_eq!(title.validation_line(), "'title' => 'required|string|max:255',");
        assert_eq!(bio.validation_line(), "'bio' => 'nullable|string',");
        assert_eq!(status.validation_line(), "'status' => 'required|in:open,closed',");
    }

    #[test]
    fn catalog_and_parser_agree() {
        for info in KIND_CATALOG {
            let kind = FieldKind::parse(info.name).unwrap();
            assert_eq!(kind.column_method(), info.column, "column for {}", info.name);
            assert_eq!(kind.validation_rule(), info.rule, "rule for {}", info.name);
        }
    }
}
