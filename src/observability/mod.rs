//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → JsonFileExporter → OTLP JSON lines
//! ```
//!
//! Spans land in `<data_dir>/joke-sorter-otlp.json`, rotated at 10 MB with
//! three backups. The filter level comes from the `trace_level` plugin
//! option and defaults to `info`.
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `tracer`: tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
