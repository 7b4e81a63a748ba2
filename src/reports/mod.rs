pub mod leaderboard;
pub mod meet;
pub mod pr_table;
pub mod weekly;

pub use leaderboard::{GroupLeader, group_leaders, season_leaderboard};
pub use meet::{MeetSummary, MeetTab, MeetView, meet_names, meet_view};
pub use pr_table::{SortState, pr_table_view};
pub use weekly::{WeeklyEntry, WeeklyRow, WeeklyTable, weekly_table};
