use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};
use knapbench::{
    chart::render_charts, export_csv, load_csv, load_settings, report, ExperimentRunner,
    ExperimentSettings, SeedPolicy,
};
use knapbench_utils::jsonify;
use log::info;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("knapbench")
        .about("Compares greedy and dynamic programming solvers for the 0/1 knapsack")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Runs the experiments and exports the results table")
                .arg(
                    arg!([SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--sizes <SIZES> "Comma separated instance sizes")
                        .value_parser(clap::value_parser!(usize))
                        .value_delimiter(','),
                )
                .arg(arg!(--seed <SEED> "Base seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--"seed-policy" <POLICY> "How each size picks its seed")
                        .value_parser(["per_size", "fixed", "stream"]),
                )
                .arg(
                    arg!(--output <PATH> "Path of the exported csv file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--"max-table-cells" <CELLS> "Largest DP table to allocate")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--charts <DIR> "Also render charts into this directory")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(arg!(--quiet "Skip the console report and informational logs")),
        )
        .subcommand(
            Command::new("chart")
                .about("Renders comparison charts from an exported csv file")
                .arg(arg!(<CSV> "Path to the results csv").value_parser(clap::value_parser!(PathBuf)))
                .arg(
                    arg!(--"out-dir" <DIR> "Directory for the svg files")
                        .value_parser(clap::value_parser!(PathBuf))
                        .default_value("."),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();
    let quiet = matches
        .subcommand_matches("run")
        .is_some_and(|sub_m| sub_m.get_flag("quiet"));
    let default_filter = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = match matches.subcommand() {
        Some(("run", sub_m)) => run(sub_m),
        Some(("chart", sub_m)) => chart(
            sub_m.get_one::<PathBuf>("CSV").unwrap().clone(),
            sub_m.get_one::<PathBuf>("out-dir").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn settings_from_args(sub_m: &ArgMatches) -> Result<ExperimentSettings> {
    let mut settings = match sub_m.get_one::<String>("SETTINGS") {
        Some(settings) => load_settings(settings)?,
        None => ExperimentSettings::default(),
    };
    if let Some(sizes) = sub_m.get_many::<usize>("sizes") {
        settings.sizes = sizes.cloned().collect();
    }
    if let Some(seed) = sub_m.get_one::<u64>("seed") {
        settings.seed = *seed;
    }
    if let Some(policy) = sub_m.get_one::<String>("seed-policy") {
        settings.seed_policy = policy.parse::<SeedPolicy>()?;
    }
    if let Some(output) = sub_m.get_one::<PathBuf>("output") {
        settings.output = output.clone();
    }
    if let Some(max_table_cells) = sub_m.get_one::<u64>("max-table-cells") {
        settings.max_table_cells = *max_table_cells;
    }
    Ok(settings)
}

fn run(sub_m: &ArgMatches) -> Result<()> {
    let settings = settings_from_args(sub_m)?;
    let quiet = sub_m.get_flag("quiet");
    info!("Settings: {}", jsonify(&settings)?);

    if !quiet {
        report::print_banner(&settings);
    }
    let mut runner = ExperimentRunner::from_settings(&settings);
    let records = runner.run_batch(&settings, |record| {
        if !quiet {
            report::print_experiment(record);
        }
    })?;
    if !quiet {
        report::print_summary(&records);
    }

    export_csv(&settings.output, &records)?;
    if let Some(dir) = sub_m.get_one::<PathBuf>("charts") {
        render_charts(&records, dir)?;
    }
    info!("Experiments finished");
    Ok(())
}

fn chart(csv_path: PathBuf, out_dir: PathBuf) -> Result<()> {
    let records = load_csv(&csv_path)?;
    let paths = render_charts(&records, &out_dir)?;
    for path in paths {
        println!("Chart saved: {}", path.display());
    }
    Ok(())
}
