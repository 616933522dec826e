use std::io;

use anyhow::Context;
use clap::Parser;

use stockroom_cli::{CliArgs, Shell};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    stockroom_observability::init(args.log_format);

    let mut inventory = Inventory::new();
    if args.load {
        match inventory.load_from_file(&args.data_file) {
            Ok(count) => println!("Loaded {count} product(s) from {}.", args.data_file.display()),
            Err(e) => {
                tracing::warn!(error = %e, "starting with an empty inventory");
                eprintln!("Could not load {}: {e}", args.data_file.display());
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), args.data_file);
    shell
        .run(&mut inventory)
        .context("interactive session aborted")
}
