//! Observability: tracing subscriber setup.
//!
//! The crate instruments its controllers and event handler with `tracing`
//! spans and events. Hosts that want to see them call
//! [`init_tracing`](init::init_tracing) once at startup; embedding without it
//! is fine — the macros become no-ops under no subscriber.

pub mod init;

pub use init::init_tracing;
