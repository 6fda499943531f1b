//! The morphological record filter.
//!
//! [`MorphFilter`] negotiates the output schema and opens [`FilterStream`]s.
//! A stream is bound to one input schema: key field and output positions are
//! resolved and the tokenizer backend is built once, at open time, so any
//! configuration problem is reported before the first record is read.
//!
//! Per record, a stream:
//!
//! 1. copies the input values into their output columns when `keep_input` is set
//! 2. tokenizes every key field (null or empty text yields no tokens)
//! 3. for every extraction setting, filters tokens by part of speech when the
//!    backend leaves that to the caller, extracts the configured attribute and
//!    aggregates the result into a joined string or a JSON array
//!
//! Writes to the same output column are applied in order, so the last
//! setting that targets a column determines its value.

use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::token_filter::part_of_speech::PartOfSpeechFilter;
use crate::analysis::tokenizer::{PartOfSpeechStage, Tokenizer, build_tokenizer};
use crate::config::{ExtractionSetting, FilterConfig};
use crate::error::{FilterError, Result};
use crate::observe::{StreamEvent, StreamObserver};
use crate::record::{Page, Record, Value};
use crate::schema::{OutputPlan, Schema, SchemaPlanner};

/// Entry point for hosts: schema negotiation and stream construction.
#[derive(Debug, Clone)]
pub struct MorphFilter {
    config: FilterConfig,
}

impl MorphFilter {
    /// Create a filter from a validated configuration.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(MorphFilter { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Compute the output schema for `input`.
    pub fn plan(&self, input: &Schema) -> Result<Schema> {
        SchemaPlanner::from_config(&self.config).plan(input)
    }

    /// Open a stream over `input`, building the configured backend.
    pub fn open(&self, input: &Schema, observer: Arc<dyn StreamObserver>) -> Result<FilterStream> {
        // Plan first so schema errors win over dictionary errors.
        let (output, plan) = self.plan_and_resolve(input)?;
        let tokenizer = build_tokenizer(&self.config)?;
        Ok(self.open_stream(input, output, plan, tokenizer, observer))
    }

    /// Open a stream over `input` with a caller-supplied backend.
    pub fn open_with_tokenizer(
        &self,
        input: &Schema,
        tokenizer: Arc<dyn Tokenizer>,
        observer: Arc<dyn StreamObserver>,
    ) -> Result<FilterStream> {
        let (output, plan) = self.plan_and_resolve(input)?;
        Ok(self.open_stream(input, output, plan, tokenizer, observer))
    }

    fn plan_and_resolve(&self, input: &Schema) -> Result<(Schema, OutputPlan)> {
        let planner = SchemaPlanner::from_config(&self.config);
        let output = planner.plan(input)?;
        let plan = planner.resolve(input, &output)?;
        Ok((output, plan))
    }

    fn open_stream(
        &self,
        input: &Schema,
        output: Schema,
        plan: OutputPlan,
        tokenizer: Arc<dyn Tokenizer>,
        observer: Arc<dyn StreamObserver>,
    ) -> FilterStream {
        let aggregation_filter = match tokenizer.part_of_speech_stage() {
            PartOfSpeechStage::Aggregation(policy) => Some(PartOfSpeechFilter::new(
                self.config.ok_parts_of_speech.clone(),
                policy,
            )),
            PartOfSpeechStage::Tokenization => None,
        };

        observer.on_event(&StreamEvent::Opened {
            backend: tokenizer.name(),
            input,
            output: &output,
        });

        FilterStream {
            input_schema: input.clone(),
            output_schema: output,
            plan,
            settings: self.config.settings.clone(),
            tokenizer,
            aggregation_filter,
            observer,
            records: 0,
        }
    }
}

/// One open stream: transforms records of a fixed input schema.
pub struct FilterStream {
    input_schema: Schema,
    output_schema: Schema,
    plan: OutputPlan,
    settings: Vec<ExtractionSetting>,
    tokenizer: Arc<dyn Tokenizer>,
    aggregation_filter: Option<PartOfSpeechFilter>,
    observer: Arc<dyn StreamObserver>,
    records: u64,
}

impl FilterStream {
    /// Get the input schema this stream was opened with.
    pub fn input_schema(&self) -> &Schema {
        &self.input_schema
    }

    /// Get the output schema.
    pub fn output_schema(&self) -> &Schema {
        &self.output_schema
    }

    /// Get the resolved positions.
    pub fn plan(&self) -> &OutputPlan {
        &self.plan
    }

    /// Get the number of records processed so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Transform a page of records.
    pub fn process(&mut self, page: &Page) -> Result<Page> {
        let mut output = Page::with_capacity(page.len());
        for record in page.records() {
            output.push(self.transform(record)?);
        }

        self.records += page.len() as u64;
        self.observer.on_event(&StreamEvent::PageProcessed {
            records: page.len(),
        });

        Ok(output)
    }

    /// Transform a single record.
    pub fn transform(&self, record: &Record) -> Result<Record> {
        if record.len() != self.input_schema.len() {
            return Err(FilterError::configuration(format!(
                "Record has {} values but the input schema has {} columns",
                record.len(),
                self.input_schema.len()
            )));
        }

        let mut output = Record::nulls(self.output_schema.len());

        for &(source, target) in &self.plan.passthrough {
            let value = &record.values()[source];
            let column = &self.input_schema.columns()[source];
            if !value.matches(column.column_type) {
                return Err(FilterError::configuration(format!(
                    "Column '{}' is declared {} but holds a {} value",
                    column.name,
                    column.column_type,
                    value.column_type().map(|t| t.name()).unwrap_or("null")
                )));
            }
            output.set(target, value.clone());
        }

        for key_field in &self.plan.key_fields {
            let text = match &record.values()[key_field.input_position] {
                Value::Null => "",
                Value::String(text) => text.as_str(),
                other => {
                    return Err(FilterError::configuration(format!(
                        "Key field '{}' holds a {} value",
                        key_field.name,
                        other.column_type().map(|t| t.name()).unwrap_or("null")
                    )));
                }
            };

            let tokens = self.tokenize(&key_field.name, text)?;

            for (setting, &target) in self.settings.iter().zip(&key_field.outputs) {
                output.set(target, self.aggregate(setting, &tokens));
            }
        }

        Ok(output)
    }

    /// Close the stream and return the number of records processed.
    pub fn finish(self) -> u64 {
        self.observer.on_event(&StreamEvent::Finished {
            records: self.records,
        });
        self.records
    }

    fn tokenize(&self, field: &str, text: &str) -> Result<Vec<Token>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();
        self.observer.on_event(&StreamEvent::Tokenized {
            field,
            source: text,
            tokens: &tokens,
        });
        Ok(tokens)
    }

    fn aggregate(&self, setting: &ExtractionSetting, tokens: &[Token]) -> Value {
        let extracted = tokens
            .iter()
            .filter(|token| {
                self.aggregation_filter
                    .as_ref()
                    .is_none_or(|filter| filter.allows(token))
            })
            .filter_map(|token| setting.method.extract(token))
            .filter(|attribute| !attribute.is_empty());

        if setting.output_is_list() {
            Value::Json(serde_json::Value::Array(
                extracted
                    .map(|attribute| serde_json::Value::String(attribute.to_string()))
                    .collect(),
            ))
        } else {
            Value::String(extracted.collect::<Vec<_>>().join(setting.delimiter()))
        }
    }
}

impl std::fmt::Debug for FilterStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStream")
            .field("tokenizer", &self.tokenizer.name())
            .field("output_schema", &self.output_schema)
            .field("records", &self.records)
            .finish()
    }
}
