// Copyright (c) 2025 Outgo Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn range_arg() -> Arg {
    Arg::new("range")
        .long("range")
        .default_value("month")
        .value_parser(["month", "last-month", "year", "last-year"])
        .help("Period to report on")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Reference date YYYY-MM-DD (defaults to today)")
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record and manage transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("income|expense"),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("YYYY-MM-DD (defaults to today)"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .required(true)
                        .help("Category id or name"),
                )
                .arg(Arg::new("desc").long("desc").default_value("")),
        )
        .subcommand(with_json_flags(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(Arg::new("type").long("type").help("income|expense"))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .action(ArgAction::Append)
                        .help("Category id or name (repeatable)"),
                )
                .arg(Arg::new("from").long("from").help("Start date YYYY-MM-DD"))
                .arg(Arg::new("to").long("to").help("End date YYYY-MM-DD"))
                .arg(
                    Arg::new("min")
                        .long("min")
                        .value_parser(value_parser!(f64))
                        .help("Minimum amount"),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .value_parser(value_parser!(f64))
                        .help("Maximum amount"),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Match against descriptions"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("update")
                .about("Update fields on a transaction")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("type").long("type").help("income|expense"))
                .arg(Arg::new("amount").long("amount"))
                .arg(Arg::new("date").long("date"))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("desc").long("desc")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete all transactions")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .action(ArgAction::SetTrue)
                        .help("Skip the safety check"),
                ),
        )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage categories")
        .subcommand(with_json_flags(
            Command::new("list")
                .about("List categories")
                .arg(Arg::new("type").long("type").help("income|expense")),
        ))
        .subcommand(
            Command::new("add")
                .about("Add a user-defined category")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .help("income|expense"),
                )
                .arg(Arg::new("icon").long("icon").default_value("🏷️"))
                .arg(Arg::new("color").long("color").default_value("#6B7280")),
        )
        .subcommand(
            Command::new("update")
                .about("Update a user-defined category")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("type").long("type").help("income|expense"))
                .arg(Arg::new("icon").long("icon"))
                .arg(Arg::new("color").long("color")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a user-defined category")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(Command::new("reset").about("Restore the default category set"))
}

fn stat_cmd() -> Command {
    Command::new("stat")
        .about("Statistics over a period")
        .subcommand(with_json_flags(
            Command::new("summary")
                .about("Totals with period-over-period change")
                .arg(range_arg())
                .arg(date_arg()),
        ))
        .subcommand(with_json_flags(
            Command::new("categories")
                .about("Expense breakdown by category")
                .arg(range_arg())
                .arg(date_arg()),
        ))
        .subcommand(with_json_flags(
            Command::new("trend")
                .about("Monthly income/expense series")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(value_parser!(usize))
                        .default_value("6"),
                )
                .arg(date_arg()),
        ))
}

fn export_cmd() -> Command {
    Command::new("export").about("Export stored data").subcommand(
        Command::new("transactions")
            .about("Write the transaction list to a file")
            .arg(
                Arg::new("format")
                    .long("format")
                    .default_value("json")
                    .help("json|csv"),
            )
            .arg(Arg::new("out").long("out").required(true)),
    )
}

pub fn build_cli() -> Command {
    Command::new("outgo")
        .version(clap::crate_version!())
        .about("Personal income/expense tracking with category breakdowns and trend reports")
        .subcommand(Command::new("init").about("Initialize the local store"))
        .subcommand(tx_cmd())
        .subcommand(category_cmd())
        .subcommand(stat_cmd())
        .subcommand(with_json_flags(
            Command::new("overview")
                .about("Current month at a glance")
                .arg(date_arg()),
        ))
        .subcommand(export_cmd())
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
