use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgMatches;
use commission_cli::{
    build_cli, list_fields, logging, render_snapshot, run_script, validate_values, Config,
    ReportSettings, Status,
};
use commission_report::ReportFormat;
use commission_schema::SectionId;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<Status> {
    let config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    logging::init(&config.logging)?;

    let format = matches
        .get_one::<ReportFormat>("format")
        .copied()
        .unwrap_or(config.report.format);
    let settings = ReportSettings {
        format,
        require_complete: config.report.require_complete,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let status = match matches.subcommand() {
        Some(("run", args)) => run_script(
            required_path(args, "script")?,
            args.get_one::<PathBuf>("out").map(PathBuf::as_path),
            args.get_one::<PathBuf>("save").map(PathBuf::as_path),
            settings,
            &mut out,
        )?,
        Some(("validate", args)) => {
            let section = args
                .get_one::<SectionId>("section")
                .copied()
                .ok_or_else(|| anyhow::anyhow!("--section is required"))?;
            validate_values(section, required_path(args, "values")?, format, &mut out)?
        }
        Some(("fields", args)) => {
            list_fields(args.get_one::<SectionId>("section").copied(), format, &mut out)?
        }
        Some(("report", args)) => {
            let settings = ReportSettings {
                require_complete: settings.require_complete || args.get_flag("require-complete"),
                ..settings
            };
            render_snapshot(required_path(args, "snapshot")?, settings, &mut out)?
        }
        _ => anyhow::bail!("Unknown subcommand"),
    };
    out.flush()?;
    Ok(status)
}

fn required_path<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a std::path::Path> {
    args.get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .ok_or_else(|| anyhow::anyhow!("missing <{name}>"))
}
