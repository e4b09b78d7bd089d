//! Weft command-line front end.
//!
//! Loads a JSON specification tree, binds it with `weft_types` and reports
//! the result. The binary in `main.rs` only dispatches; everything it runs
//! lives here so it can be tested without spawning processes.

mod args;
mod commands;
mod dump;
mod load;
mod tracing_setup;

pub use args::{parse_args, ArgsError, Invocation};
pub use commands::{check, dump, CommandError};
pub use dump::DumpView;
pub use load::{load_spec, parse_spec, LoadError};
pub use tracing_setup::init_tracing;
