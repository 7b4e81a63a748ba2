use anyhow::Result;

use xc_team_dashboard::cli::Command;
use xc_team_dashboard::{
    handle_ingest, handle_meet, handle_prs, handle_season, handle_week, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Ingest => handle_ingest(),
        Command::Season => handle_season(),
        Command::Week { tab } => handle_week(tab),
        Command::Prs {
            sort_by,
            order,
            filter,
        } => handle_prs(sort_by.as_deref(), order, filter.as_deref()),
        Command::Meet { name, results } => handle_meet(name.as_deref(), results),
    }
}
