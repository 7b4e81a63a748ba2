use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "distance-team dashboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch every sheet tab and store it in the local cache
    Ingest,
    /// Season-long mileage and attendance report
    Season,
    /// Weekly mileage table for one week tab
    Week {
        /// Tab title, e.g. "Week 3"
        tab: String,
    },
    /// Personal records table
    Prs {
        /// Event column to sort by: 800, 1600 or 3200
        #[arg(short, long)]
        sort_by: Option<String>,
        /// Sort direction (asc or desc)
        #[arg(short, long, default_value = "asc")]
        order: String,
        /// Case-insensitive name filter
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Race results for one meet
    Meet {
        /// Meet name (defaults to the most recent meet)
        name: Option<String>,
        /// Result subset to show (individual or relay)
        #[arg(short, long, default_value = "individual")]
        results: String,
    },
}
