pub mod analytics;
pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod records;
pub mod render;
pub mod reports;
pub mod services;
pub mod values;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::config::SheetSchema;
use crate::records::PrEvent;
use crate::reports::MeetTab;
use crate::services::ingestion::IngestionService;
use crate::services::reporting::ReportingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_ingest() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = IngestionService::new(AppConfig::new(), SheetSchema::current())?;
        service.run().await
    })
}

pub fn handle_season() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportingService::new(AppConfig::new(), SheetSchema::current())?;
        service.season().await
    })
}

pub fn handle_week(tab: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportingService::new(AppConfig::new(), SheetSchema::current())?;
        service.week(tab).await
    })
}

pub fn handle_prs(sort_by: Option<&str>, order: &str, filter: Option<&str>) -> Result<()> {
    let sort_by = match sort_by {
        Some(raw) => Some(
            PrEvent::parse(raw)
                .ok_or_else(|| anyhow::anyhow!("Unknown event '{}'; expected 800, 1600 or 3200", raw))?,
        ),
        None => None,
    };
    let descending = order.eq_ignore_ascii_case("desc");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportingService::new(AppConfig::new(), SheetSchema::current())?;
        service.prs(sort_by, descending, filter).await
    })
}

pub fn handle_meet(name: Option<&str>, results: &str) -> Result<()> {
    let tab = match results.to_lowercase().as_str() {
        "relay" => MeetTab::Relay,
        _ => MeetTab::Individual,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ReportingService::new(AppConfig::new(), SheetSchema::current())?;
        service.meet(name, tab).await
    })
}
