//! Command-line definition

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use commission_report::ReportFormat;
use commission_schema::SectionId;

#[must_use]
pub fn build_cli() -> Command {
    Command::new("commission")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heat pump commissioning records: validate, replay and report")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(value_parser!(ReportFormat))
                .help("Output format: text or json (overrides config)"),
        )
        .subcommand(
            Command::new("run")
                .about("Replay a session script and print the summary")
                .arg(
                    Arg::new("script")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("YAML or JSON script of session actions"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the final report here; requires every section"),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the aggregate record snapshot as JSON"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate raw values for one section")
                .arg(
                    Arg::new("section")
                        .long("section")
                        .required(true)
                        .value_parser(value_parser!(SectionId))
                        .help("Section id, e.g. equipment"),
                )
                .arg(
                    Arg::new("values")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("YAML or JSON map of field values"),
                ),
        )
        .subcommand(
            Command::new("fields")
                .about("List declared fields")
                .arg(
                    Arg::new("section")
                        .long("section")
                        .value_parser(value_parser!(SectionId))
                        .help("Only this section"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Render a saved aggregate record snapshot")
                .arg(
                    Arg::new("snapshot")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Snapshot written by `run --save`"),
                )
                .arg(
                    Arg::new("require-complete")
                        .long("require-complete")
                        .action(ArgAction::SetTrue)
                        .help("Fail unless every section holds data"),
                ),
        )
}
