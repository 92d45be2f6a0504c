//! Observability for cvelint.
//! `tracing` crate with `EnvFilter`, logs on stderr so stdout carries only the report.

pub mod setup;

pub use setup::init_tracing;
