//! Tracing subscriber for the CLI.
//!
//! Enabled only when `WEFT_LOG` or `RUST_LOG` is set. `WEFT_LOG` takes
//! precedence and uses the same filter syntax:
//!
//! ```bash
//! WEFT_LOG=debug weft check api.json
//! WEFT_LOG="weft_types::symbols=trace" weft dump api.json
//! ```
//!
//! Output is an indented span tree on stderr, so it never mixes with the
//! text the commands print.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static TRACING_INIT: Once = Once::new();

fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var("WEFT_LOG") {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = build_filter() else {
            return;
        };
        let tree = tracing_tree::HierarchicalLayer::default()
            .with_writer(std::io::stderr)
            .with_indent_amount(2)
            .with_indent_lines(true)
            .with_targets(true);
        Registry::default().with(filter).with(tree).init();
    });
}
