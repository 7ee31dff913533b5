//! Logging setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host. `BOILERPLATE_LOG` takes any `EnvFilter` directive and wins
//! over `-v` flags.
//!
//! ```ignore
//! use boilerplate::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing(cli.verbose);
//! }
//! ```

pub mod subscriber;

pub use subscriber::{init_tracing, verbosity_filter, LOG_ENV_VAR};
