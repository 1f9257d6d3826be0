//! keepcell-greet: a greeting form backed by a persistent cell.
//!
//! The form has one field. Its value lives in a cell bound to a file store,
//! so it survives between runs:
//!
//! ```text
//! $ keepcell-greet show
//! Hello 123
//! $ keepcell-greet type bob
//! Hello bob
//! $ keepcell-greet clear
//! Please type your name
//! $ keepcell-greet move name:v2
//! ```

mod greeting;
mod parse;

use std::process;

use clap::{Arg, ArgAction, Command};
use keepcell::{FileStore, StoreOptions};
use tracing::Level;

use greeting::Greeting;
use parse::{matches_to_action, FormAction};

fn build_cli() -> Command {
    Command::new("keepcell-greet")
        .about("Greeting form whose state persists between runs")
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .default_value(".keepcell.json")
                .help("Store file"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .value_name("KEY")
                .default_value("name")
                .help("Store key for the form"),
        )
        .arg(
            Arg::new("default")
                .long("default")
                .value_name("TEXT")
                .default_value("123")
                .help("Initial name when nothing is stored"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log store traffic to stderr"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("show").about("Print the greeting"))
        .subcommand(
            Command::new("type")
                .about("Type into the name field")
                .arg(Arg::new("text").required(true).num_args(1..)),
        )
        .subcommand(Command::new("clear").about("Empty the name field"))
        .subcommand(
            Command::new("move")
                .about("Move the form to another store key")
                .arg(Arg::new("new_key").required(true)),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let action = matches_to_action(matches)?;

    let path = matches
        .get_one::<String>("store")
        .map(String::as_str)
        .unwrap_or(".keepcell.json");
    let store = FileStore::open_with(path, StoreOptions::new().browser_quota())?;

    let key = matches
        .get_one::<String>("key")
        .cloned()
        .unwrap_or_else(|| "name".to_string());
    let default = matches
        .get_one::<String>("default")
        .cloned()
        .unwrap_or_default();

    let mut form = Greeting::open(&store, key, default)?;
    form.apply(action)?;
    println!("{}", form.render());
    Ok(())
}
