// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("financeflow")
        .about("Personal expense tracking, category insights, and trend reports")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(
            Command::new("expense")
                .about("Record and manage expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD the expense occurred, default today"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive title substring"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Category name, or All"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace an expense by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived views over the full collection")
                .subcommand(
                    Command::new("summary")
                        .about("All-time, this-month and today totals")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Reference date, default today"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("breakdown")
                        .about("Spending per category")
                        .arg(
                            Arg::new("top")
                                .long("top")
                                .value_parser(value_parser!(usize))
                                .help("Largest N categories only"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("trend")
                        .about("Monthly spending over a trailing window")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Reference date, default today"),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export all expenses as CSV")
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Output path, default expenses_<date>.csv"),
                ),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print one JSON object per line")
}
