//! Per-stream observability.
//!
//! A [`FilterStream`](crate::filter::FilterStream) owns the observer it was
//! opened with and reports what it does as [`StreamEvent`]s. Nothing in the
//! data path writes to a global logger directly; [`LogObserver`] is the sink
//! that forwards events to the `log` facade when the host wants that.

use log::{debug, info, trace};

use crate::analysis::token::Token;
use crate::schema::schema::Schema;

/// Something a stream did.
#[derive(Debug, Clone, Copy)]
pub enum StreamEvent<'a> {
    /// The stream was opened and its backend built.
    Opened {
        /// Name of the tokenizer backend
        backend: &'static str,
        /// Schema the stream reads
        input: &'a Schema,
        /// Schema the stream writes
        output: &'a Schema,
    },
    /// One key field of one record was tokenized.
    Tokenized {
        /// Key field name
        field: &'a str,
        /// Text that was tokenized
        source: &'a str,
        /// Tokens returned by the backend
        tokens: &'a [Token],
    },
    /// A page was transformed.
    PageProcessed {
        /// Number of records in the page
        records: usize,
    },
    /// The stream was closed.
    Finished {
        /// Total number of records processed
        records: u64,
    },
}

/// Receives the events of one stream.
pub trait StreamObserver: Send + Sync {
    /// Handle one event.
    fn on_event(&self, event: &StreamEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StreamObserver for NoopObserver {
    fn on_event(&self, _event: &StreamEvent<'_>) {}
}

/// Forwards events to the `log` facade.
///
/// Lifecycle events go to `info`, pages to `debug` and individual
/// tokenizations to `trace`.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
}

impl LogObserver {
    /// Create an observer that prefixes every message with `label`.
    pub fn new<S: Into<String>>(label: S) -> Self {
        LogObserver {
            label: label.into(),
        }
    }

    /// Get the message prefix.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("morph-filter")
    }
}

impl StreamObserver for LogObserver {
    fn on_event(&self, event: &StreamEvent<'_>) {
        match event {
            StreamEvent::Opened {
                backend,
                input,
                output,
            } => {
                info!(
                    "[{}] opened with {backend} backend: {} input columns -> {} output columns",
                    self.label,
                    input.len(),
                    output.len()
                );
                debug!(
                    "[{}] output columns: {}",
                    self.label,
                    output.names().collect::<Vec<_>>().join(", ")
                );
            }
            StreamEvent::Tokenized {
                field,
                source,
                tokens,
            } => {
                trace!(
                    "[{}] {field}: {source:?} -> [{}]",
                    self.label,
                    tokens
                        .iter()
                        .map(|t| t.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            StreamEvent::PageProcessed { records } => {
                debug!("[{}] processed page of {records} records", self.label);
            }
            StreamEvent::Finished { records } => {
                info!("[{}] finished after {records} records", self.label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl StreamObserver for Recorder {
        fn on_event(&self, event: &StreamEvent<'_>) {
            let name = match event {
                StreamEvent::Opened { .. } => "opened",
                StreamEvent::Tokenized { .. } => "tokenized",
                StreamEvent::PageProcessed { .. } => "page",
                StreamEvent::Finished { .. } => "finished",
            };
            self.0.lock().unwrap().push(name.to_string());
        }
    }

    #[test]
    fn test_observer_receives_events() {
        let recorder = Recorder::default();
        let schema = Schema::new();

        recorder.on_event(&StreamEvent::Opened {
            backend: "kuromoji",
            input: &schema,
            output: &schema,
        });
        recorder.on_event(&StreamEvent::Finished { records: 3 });

        assert_eq!(*recorder.0.lock().unwrap(), vec!["opened", "finished"]);
    }

    #[test]
    fn test_log_observer_accepts_all_events() {
        let observer = LogObserver::new("test");
        let schema = Schema::new();
        let tokens = vec![Token::new("東京", 0)];

        observer.on_event(&StreamEvent::Opened {
            backend: "kuromoji",
            input: &schema,
            output: &schema,
        });
        observer.on_event(&StreamEvent::Tokenized {
            field: "text",
            source: "東京",
            tokens: &tokens,
        });
        observer.on_event(&StreamEvent::PageProcessed { records: 1 });
        observer.on_event(&StreamEvent::Finished { records: 1 });

        assert_eq!(observer.label(), "test");
        assert_eq!(LogObserver::default().label(), "morph-filter");
    }
}
