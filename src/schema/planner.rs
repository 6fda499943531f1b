//! Output schema planning.
//!
//! The planner runs once when a stream is opened. It merges the passthrough
//! input columns with one derived column per key field and extraction setting:
//!
//! ```text
//! input:    [id:long, text:string]
//! keys:     [text]
//! settings: [{suffix: "_sf"}, {suffix: "_base", type: array}]
//!
//! output:   [id:long, text:string, text_sf:string, text_base:json]
//! ```
//!
//! Names are kept in an insertion-ordered map. Declaring an existing name again
//! replaces its type but keeps its original position, so a setting with an empty
//! suffix takes over the passthrough column of its key field, and two settings
//! with the same suffix collapse into one column typed by the later one.

use indexmap::IndexMap;

use crate::config::{ExtractionSetting, FilterConfig};
use crate::error::{FilterError, Result};
use crate::schema::column::ColumnType;
use crate::schema::schema::Schema;

/// Computes the output schema of the filter for an input schema.
#[derive(Debug, Clone)]
pub struct SchemaPlanner<'a> {
    keep_input: bool,
    key_names: &'a [String],
    settings: &'a [ExtractionSetting],
}

impl<'a> SchemaPlanner<'a> {
    /// Create a planner over key fields and settings.
    pub fn new(
        keep_input: bool,
        key_names: &'a [String],
        settings: &'a [ExtractionSetting],
    ) -> Self {
        SchemaPlanner {
            keep_input,
            key_names,
            settings,
        }
    }

    /// Create a planner from a filter configuration.
    pub fn from_config(config: &'a FilterConfig) -> Self {
        Self::new(config.keep_input, &config.key_names, &config.settings)
    }

    /// Compute the output schema.
    ///
    /// Fails if a key field is absent from `input`, listed twice, or not a
    /// STRING column.
    pub fn plan(&self, input: &Schema) -> Result<Schema> {
        self.validate_key_fields(input)?;

        let mut merged: IndexMap<String, ColumnType> = IndexMap::new();

        if self.keep_input {
            for column in input.columns() {
                merged.insert(column.name.clone(), column.column_type);
            }
        }

        for key_name in self.key_names {
            for setting in self.settings {
                merged.insert(setting.output_name(key_name), setting.column_type());
            }
        }

        Schema::from_columns(merged)
    }

    /// Resolve the positions the transformer reads and writes.
    ///
    /// `output` must be the schema returned by [`plan`](Self::plan) for the same
    /// input; any name that cannot be found is a configuration error.
    pub fn resolve(&self, input: &Schema, output: &Schema) -> Result<OutputPlan> {
        self.validate_key_fields(input)?;

        let mut passthrough = Vec::new();
        if self.keep_input {
            for column in input.columns() {
                let target = output.require(&column.name)?;
                passthrough.push((column.position, target.position));
            }
        }

        let mut key_fields = Vec::with_capacity(self.key_names.len());
        for key_name in self.key_names {
            let source = input.require(key_name)?;
            let mut outputs = Vec::with_capacity(self.settings.len());
            for setting in self.settings {
                let name = setting.output_name(key_name);
                let target = output.lookup(&name).ok_or_else(|| {
                    FilterError::configuration(format!(
                        "Output column '{name}' is missing from the planned schema"
                    ))
                })?;
                outputs.push(target.position);
            }
            key_fields.push(KeyFieldPlan {
                name: key_name.clone(),
                input_position: source.position,
                outputs,
            });
        }

        Ok(OutputPlan {
            passthrough,
            key_fields,
        })
    }

    fn validate_key_fields(&self, input: &Schema) -> Result<()> {
        for (i, key_name) in self.key_names.iter().enumerate() {
            if self.key_names[..i].contains(key_name) {
                return Err(FilterError::configuration(format!(
                    "Key field '{key_name}' is listed more than once"
                )));
            }

            let column = input.lookup(key_name).ok_or_else(|| {
                FilterError::configuration(format!(
                    "Key field '{key_name}' does not exist in the input schema"
                ))
            })?;
            if column.column_type != ColumnType::String {
                return Err(FilterError::configuration(format!(
                    "Key field '{key_name}' must be a string column, found {}",
                    column.column_type
                )));
            }
        }
        Ok(())
    }
}

/// Positions resolved once per stream and reused for every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// `(input position, output position)` for each passthrough column
    pub passthrough: Vec<(usize, usize)>,
    /// Key fields in processing order
    pub key_fields: Vec<KeyFieldPlan>,
}

/// Where one key field is read from and where each setting writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFieldPlan {
    /// Key field name
    pub name: String,
    /// Position of the key field in the input schema
    pub input_position: usize,
    /// Output position for each setting, in settings order
    pub outputs: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Method;

    fn input_schema() -> Schema {
        Schema::from_columns([
            ("id", ColumnType::Long),
            ("text", ColumnType::String),
            ("note", ColumnType::String),
        ])
        .unwrap()
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn plan_names(schema: &Schema) -> Vec<(String, ColumnType)> {
        schema
            .columns()
            .iter()
            .map(|c| (c.name.clone(), c.column_type))
            .collect()
    }

    #[test]
    fn test_keep_input_appends_derived_columns() {
        let key_names = keys(&["text"]);
        let settings = vec![
            ExtractionSetting::new(Method::SurfaceForm).with_suffix("_sf"),
            ExtractionSetting::new(Method::BaseForm)
                .with_suffix("_base")
                .as_list(),
        ];

        let output = SchemaPlanner::new(true, &key_names, &settings)
            .plan(&input_schema())
            .unwrap();

        assert_eq!(
            plan_names(&output),
            vec![
                ("id".to_string(), ColumnType::Long),
                ("text".to_string(), ColumnType::String),
                ("note".to_string(), ColumnType::String),
                ("text_sf".to_string(), ColumnType::String),
                ("text_base".to_string(), ColumnType::Json),
            ]
        );
        for (i, column) in output.columns().iter().enumerate() {
            assert_eq!(column.position, i);
        }
    }

    #[test]
    fn test_empty_suffix_overwrites_passthrough_in_place() {
        let key_names = keys(&["text"]);
        let settings = vec![ExtractionSetting::new(Method::Reading).as_list()];

        let output = SchemaPlanner::new(true, &key_names, &settings)
            .plan(&input_schema())
            .unwrap();

        assert_eq!(output.len(), 3);
        let text = output.lookup("text").unwrap();
        assert_eq!(text.position, 1);
        assert_eq!(text.column_type, ColumnType::Json);
    }

    #[test]
    fn test_without_input_only_derived_columns() {
        let key_names = keys(&["text", "note"]);
        let settings = vec![
            ExtractionSetting::new(Method::SurfaceForm).with_suffix("_a"),
            ExtractionSetting::new(Method::Reading).with_suffix("_b"),
        ];

        let output = SchemaPlanner::new(false, &key_names, &settings)
            .plan(&input_schema())
            .unwrap();

        assert_eq!(
            output.names().collect::<Vec<_>>(),
            vec!["text_a", "text_b", "note_a", "note_b"]
        );
    }

    #[test]
    fn test_same_suffix_collapses_last_type_wins() {
        let key_names = keys(&["text"]);
        let settings = vec![
            ExtractionSetting::new(Method::SurfaceForm),
            ExtractionSetting::new(Method::BaseForm).as_list(),
        ];

        let output = SchemaPlanner::new(false, &key_names, &settings)
            .plan(&input_schema())
            .unwrap();

        assert_eq!(output.len(), 1);
        assert_eq!(output.lookup("text").unwrap().column_type, ColumnType::Json);
    }

    #[test]
    fn test_missing_key_field() {
        let key_names = keys(&["body"]);
        let settings = vec![ExtractionSetting::new(Method::SurfaceForm)];

        let err = SchemaPlanner::new(true, &key_names, &settings)
            .plan(&input_schema())
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_duplicate_key_field() {
        let key_names = keys(&["text", "text"]);
        let settings = vec![ExtractionSetting::new(Method::SurfaceForm)];

        let err = SchemaPlanner::new(true, &key_names, &settings)
            .plan(&input_schema())
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_non_string_key_field() {
        let key_names = keys(&["id"]);
        let settings = vec![ExtractionSetting::new(Method::SurfaceForm)];

        let err = SchemaPlanner::new(true, &key_names, &settings)
            .plan(&input_schema())
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_resolve_positions() {
        let key_names = keys(&["note", "text"]);
        let settings = vec![
            ExtractionSetting::new(Method::SurfaceForm).with_suffix("_sf"),
            ExtractionSetting::new(Method::SurfaceForm),
        ];
        let planner = SchemaPlanner::new(true, &key_names, &settings);
        let input = input_schema();
        let output = planner.plan(&input).unwrap();
        let plan = planner.resolve(&input, &output).unwrap();

        assert_eq!(plan.passthrough, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(plan.key_fields.len(), 2);
        assert_eq!(plan.key_fields[0].name, "note");
        assert_eq!(plan.key_fields[0].input_position, 2);
        assert_eq!(
            plan.key_fields[0].outputs,
            vec![output.lookup("note_sf").unwrap().position, 2]
        );
        assert_eq!(plan.key_fields[1].input_position, 1);
        assert_eq!(
            plan.key_fields[1].outputs,
            vec![output.lookup("text_sf").unwrap().position, 1]
        );
    }

    #[test]
    fn test_resolve_against_foreign_schema_fails() {
        let key_names = keys(&["text"]);
        let settings = vec![ExtractionSetting::new(Method::SurfaceForm).with_suffix("_sf")];
        let planner = SchemaPlanner::new(false, &key_names, &settings);
        let input = input_schema();

        let err = planner.resolve(&input, &input).unwrap_err();
        assert!(err.is_configuration());
    }
}
