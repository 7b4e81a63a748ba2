use colored::Colorize;

use crate::analytics::{SeasonReport, SeasonTotal};
use crate::records::{PR_EVENT_LABELS, PrRecord};
use crate::reports::leaderboard::GroupLeader;
use crate::reports::meet::{MeetSummary, MeetTab, MeetView};
use crate::reports::pr_table::SortState;
use crate::reports::weekly::{WEEKDAY_LABELS, WeeklyEntry, WeeklyTable};

const NAME_WIDTH: usize = 24;
const CELL_WIDTH: usize = 8;

pub fn print_season(report: &SeasonReport, ranked: &[&SeasonTotal], leaders: &[GroupLeader<'_>]) {
    println!("{}", "Season Overview".bold().underline());
    println!(
        "  {} weeks · {:.1} team miles · {} absences · {} active athlete-days",
        report.weeks_processed, report.team_miles, report.total_absences, report.total_active_days
    );
    println!(
        "  attendance health: {}",
        format!("{:.1}%", report.attendance_health()).green().bold()
    );
    println!("  generated {}\n", report.generated_at.format("%Y-%m-%d %H:%M UTC"));

    println!("{}", "Leaderboard".bold());
    println!(
        "  {:>4} {:<name$} {:<12} {:>8} {:>4} {:>4} {:>4}",
        "#",
        "Athlete",
        "Group",
        "Miles",
        "A",
        "XA",
        "INJ",
        name = NAME_WIDTH
    );
    for (rank, athlete) in ranked.iter().enumerate() {
        println!(
            "  {:>4} {:<name$} {:<12} {:>8.1} {:>4} {:>4} {:>4}",
            rank + 1,
            athlete.display_name,
            athlete.group,
            athlete.miles,
            athlete.absent,
            athlete.excused,
            athlete.injured,
            name = NAME_WIDTH
        );
    }

    println!("\n{}", "Group Leaders".bold());
    for leader in leaders {
        println!(
            "  {:<7} {:<12} {:<name$} {:>8.1} mi",
            leader.gender.label(),
            leader.group,
            leader.athlete.display_name,
            leader.athlete.miles,
            name = NAME_WIDTH
        );
    }
}

pub fn print_weekly(tab: &str, table: &WeeklyTable) {
    println!("{}", tab.bold().underline());
    print!("  {:<name$}", "Athlete", name = NAME_WIDTH);
    for (day, label) in WEEKDAY_LABELS.iter().enumerate() {
        let header = if table.active[day] {
            label.to_string()
        } else {
            format!("({})", label)
        };
        print!(" {:>cell$}", header, cell = CELL_WIDTH);
    }
    println!(" {:>cell$}", "Total", cell = CELL_WIDTH);

    for entry in &table.entries {
        match entry {
            WeeklyEntry::Section { gender, group } => {
                println!(
                    "  {}",
                    format!("[{} - {}]", gender.label(), group).cyan().bold()
                );
            }
            WeeklyEntry::Athlete(row) => {
                print!("  {:<name$}", row.display_name, name = NAME_WIDTH);
                for cell in &row.day_cells {
                    print!(" {:>cell$}", cell, cell = CELL_WIDTH);
                }
                println!(" {:>cell$.1}", row.total_miles, cell = CELL_WIDTH);
            }
        }
    }
}

pub fn print_pr_table(rows: &[&PrRecord], sort: &SortState) {
    println!("{}", "Personal Records".bold().underline());

    print!("  {:<name$}", "Athlete", name = NAME_WIDTH);
    for (idx, label) in PR_EVENT_LABELS.iter().enumerate() {
        let marker = match sort.column {
            Some(event) if event.index() == idx => {
                if sort.ascending { " ↑" } else { " ↓" }
            }
            _ => "",
        };
        print!(" {:>cell$}", format!("{}{}", label, marker), cell = CELL_WIDTH + 2);
    }
    println!();

    for record in rows {
        print!("  {:<name$}", record.display_name(), name = NAME_WIDTH);
        for time in &record.times {
            let shown = if time.trim().is_empty() { "--" } else { time.trim() };
            print!(" {:>cell$}", shown, cell = CELL_WIDTH + 2);
        }
        println!();
    }
}

pub fn print_meet(view: &MeetView, known_meets: &[String]) {
    println!("{}", view.meet.bold().underline());

    match view.tab {
        MeetTab::Individual => {
            print!("  {:<name$}", "Athlete", name = NAME_WIDTH);
            for label in PR_EVENT_LABELS {
                print!(" {:>cell$}", label, cell = CELL_WIDTH + 10);
            }
            println!();

            for row in &view.individual {
                print!("  {:<name$}", row.display_name, name = NAME_WIDTH);
                for cell in &row.cells {
                    let shown = if cell.time.is_empty() {
                        String::new()
                    } else if cell.is_pr {
                        format!("{} * {}", cell.time, cell.improvement)
                    } else {
                        cell.time.clone()
                    };
                    let padded = format!("{:>cell$}", shown, cell = CELL_WIDTH + 10);
                    if cell.is_pr {
                        print!(" {}", padded.yellow().bold());
                    } else {
                        print!(" {}", padded);
                    }
                }
                println!();
            }
        }
        MeetTab::Relay => {
            for row in &view.relay {
                print!("  {:<name$}", row.display_name, name = NAME_WIDTH);
                for leg in &row.legs {
                    print!(" {:>8} {:<6}", leg.time, leg.event);
                }
                println!();
            }
        }
    }

    match &view.summary {
        MeetSummary::Individual {
            prs,
            valid_performances,
            pr_rate,
        } => {
            println!(
                "\n  {} PRs across {} valid performances ({})",
                prs,
                valid_performances,
                format!("{:.1}%", pr_rate).green().bold()
            );
        }
        MeetSummary::Relay {
            participations,
            distinct_teams,
        } => {
            println!(
                "\n  {} athlete-leg participations · {} distinct relay teams",
                participations, distinct_teams
            );
        }
    }

    if known_meets.len() > 1 {
        println!(
            "  {}",
            format!("other meets: {}", known_meets.join(", ")).dimmed()
        );
    }
}
