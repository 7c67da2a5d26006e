//! Resource Hub CLI - terminal front end for the HIVST & PrEP hub
//!
//! # Examples
//!
//! ```bash
//! # Search all topic content
//! resource-hub search "prep"
//!
//! # Interactive search box
//! resource-hub browse
//!
//! # Read a topic
//! resource-hub show-topic hivst-basics
//!
//! # Check authored content before deploying it
//! resource-hub validate-catalog ./hub.toml
//! ```

use clap::Parser;
use resource_hub::cli::{init_logging, output, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
