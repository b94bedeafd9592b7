//! A command line interface to *EV route planner*.

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

mod commands;

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}

mod cli {
    use super::commands::plan::{get_plan_app, run_plan};
    use super::commands::stations::{get_stations_app, run_stations};
    use super::commands::create_write_buffer;
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("EV Route Planner")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to plan electric vehicle trips with charging stops")
            .subcommand(get_plan_app())
            .subcommand(get_stations_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        let result = match arg_matches.subcommand() {
            Some(("plan", plan_matches)) => run_plan(plan_matches, create_write_buffer),
            Some(("stations", stations_matches)) => run_stations(stations_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        };

        if let Err(err) = result {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
