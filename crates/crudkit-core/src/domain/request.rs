//! The generation request: one command invocation's parsed input.

use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::domain::field::FieldSpec;
use crate::domain::naming::ModelName;
use crate::domain::relation::RelationSpec;

/// Everything one `make` invocation needs, already parsed and validated.
///
/// The timestamp is captured here (not read from the clock during planning)
/// so plans are deterministic and tests can pin it.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: ModelName,
    pub fields: Vec<FieldSpec>,
    pub relations: Vec<RelationSpec>,
    /// Application root all output paths are resolved against.
    pub root: PathBuf,
    pub timestamp: NaiveDateTime,
}

impl GenerateRequest {
    /// Build a request stamped with the current local time.
    pub fn new(
        model: ModelName,
        fields: Vec<FieldSpec>,
        relations: Vec<RelationSpec>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            model,
            fields,
            relations,
            root: root.into(),
            timestamp: chrono::Local::now().naive_local(),
        }
    }

    /// Pin the timestamp (tests, reproducible runs).
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The migration filename fragment, e.g. `2026_08_27_143000`.
    pub fn migration_prefix(&self) -> String {
        self.timestamp.format("%Y_%m_%d_%H%M%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn migration_prefix_formats_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2026, 8, 27)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let request = GenerateRequest::new(
            ModelName::new("Task").unwrap(),
            Vec::new(),
            Vec::new(),
            ".",
        )
        .with_timestamp(ts);

        assert_eq!(request.migration_prefix(), "2026_08_27_143000");
    }
}
