// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use financeflow::{cli, commands, db, ledger::ExpenseLedger};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = db::SqliteStore::open_or_init()?;
    let mut ledger = ExpenseLedger::load(store);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", db::db_path()?.display());
        }
        Some(("expense", sub)) => commands::expenses::handle(&mut ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
