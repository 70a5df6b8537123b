pub mod app;
pub mod code_spans;
pub mod config;
pub mod hooks;
pub mod mapping;
pub mod matcher;
pub mod pipeline;
pub mod substitute;
