//! Analyzers chain a morphological engine with token filters.

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;
