//! Standalone CLI for the Fabric collections config generator.
//!
//! Reads seven numeric answers from stdin (empty input accepts each
//! default) and writes `collections_config.json` to the working
//! directory, replacing any prior content.

use std::io::{stdin, stdout};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::debug;

use fabric_collections_gen_core::{run, OUTPUT_FILE};

/// Generate collections_config.json for a Fabric network from a few
/// interactively entered counts.
#[derive(Debug, Parser)]
#[command(name = "fabric-collections-gen", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let Cli {} = Cli::parse();
    debug!("writing {OUTPUT_FILE} in the working directory");

    let mut input = stdin().lock();
    let mut output = stdout().lock();
    run(&mut input, &mut output, Path::new(OUTPUT_FILE))
        .with_context(|| format!("failed to generate {OUTPUT_FILE}"))
}
