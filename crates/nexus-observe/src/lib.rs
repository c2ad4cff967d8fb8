//! Observability setup shared by the `nexus` binary.

pub mod tracing_setup;
