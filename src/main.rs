use std::process;

use clap::{Arg, ArgMatches, Command};
use colored::*;

use tempo_cli::commands;
use tempo_cli::config::load_config;
use tempo_cli::error::TempoResult;
use tempo_cli::logging::{init_logging, log_error};

async fn handle_log(matches: &ArgMatches) -> TempoResult<String> {
    let config = load_config()?;
    let preset = matches
        .get_one::<String>("preset")
        .map(String::as_str)
        .unwrap_or_default();
    let date = matches.get_one::<String>("date").map(String::as_str);
    let description = matches.get_one::<String>("description").map(String::as_str);
    let force = matches.get_flag("force");
    let person = matches
        .get_one::<String>("person")
        .map(String::as_str)
        .unwrap_or("");

    commands::log::run(&config, preset, date, description, force, person).await
}

async fn handle_workload(matches: &ArgMatches) -> TempoResult<String> {
    let config = load_config()?;
    let date = matches.get_one::<String>("date").map(String::as_str);
    let person = matches
        .get_one::<String>("person")
        .map(String::as_str)
        .unwrap_or("");

    commands::workload::run(&config, date, person).await
}

fn handle_config() -> TempoResult<String> {
    // The config command renders its own setup help on load failure.
    Ok(commands::config::run(load_config()))
}

async fn handle_search_user(matches: &ArgMatches) -> TempoResult<String> {
    let config = load_config()?;
    let name = matches
        .get_one::<String>("name")
        .map(String::as_str)
        .unwrap_or_default();

    commands::search::run(&config, name).await
}

#[tokio::main]
async fn main() {
    let _ = init_logging();

    let app = Command::new("tempo")
        .about("Tempo CLI - log time to Tempo with percentage-split presets")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("log")
                .about("Log a day's hours using a named preset")
                .arg(
                    Arg::new("preset")
                        .value_name("PRESET")
                        .help("Preset name (e.g. usual, sick, vacation)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .value_name("DATE")
                        .help("Date to log for: today, yesterday, or YYYY-MM-DD")
                        .default_value("today"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('m')
                        .value_name("TEXT")
                        .help("Override the default description for all entries"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Log even on weekends/holidays or when entries already exist")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("person")
                        .long("person")
                        .short('p')
                        .value_name("WHO")
                        .help("Log for someone else: a display name or account id"),
                ),
        )
        .subcommand(
            Command::new("workload")
                .about("Show logged time vs expected hours for a date")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .value_name("DATE")
                        .help("Date to check: today, yesterday, or YYYY-MM-DD")
                        .default_value("today"),
                )
                .arg(
                    Arg::new("person")
                        .long("person")
                        .short('p')
                        .value_name("WHO")
                        .help("Check someone else: a display name or account id"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show current configuration (token redacted)"),
        )
        .subcommand(
            Command::new("search-user")
                .about("Search Jira users by display name")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Display name to search for")
                        .required(true)
                        .index(1),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("log", sub_matches)) => handle_log(sub_matches).await,
        Some(("workload", sub_matches)) => handle_workload(sub_matches).await,
        Some(("config", _)) => handle_config(),
        Some(("search-user", sub_matches)) => handle_search_user(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'tempo --help' for available commands.");
            process::exit(1);
        }
    };

    match result {
        Ok(text) => println!("{}", text),
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("{}", e.render().red());
            process::exit(1);
        }
    }
}
