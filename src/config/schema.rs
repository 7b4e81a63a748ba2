/// Where a weekly row's total mileage comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsMode {
    /// The sheet carries a "Total" column at this index.
    TotalColumn(usize),
    /// No total column; sum the parsed weekday cells.
    SumOfDays,
}

/// Column layout of one spreadsheet revision.
///
/// The sheet has been through several near-identical revisions that moved
/// columns around (a group column appeared, relay data split into two legs).
/// All index knowledge lives here so nothing downstream hard-codes offsets.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    // Week tabs
    pub last_name_col: usize,
    pub first_name_col: usize,
    pub group_col: Option<usize>,
    pub day_cols: [usize; 6],
    pub totals: TotalsMode,
    pub attendance_range: &'static str,

    // PRs tab
    pub pr_name_col: usize,
    pub pr_event_cols: [usize; 3],
    pub pr_range: &'static str,

    // Race results tab
    pub race_name_col: usize,
    pub race_meet_col: usize,
    pub race_event_cols: [usize; 3],
    /// (time column, event-label column) per relay leg.
    pub relay_leg_cols: Vec<(usize, usize)>,
    pub race_range: &'static str,
}

impl SheetSchema {
    /// Layout of the current sheet revision: training-group column present,
    /// relay results split into two legs.
    pub fn current() -> Self {
        Self {
            last_name_col: 0,
            first_name_col: 1,
            group_col: Some(2),
            day_cols: [3, 4, 5, 6, 7, 8],
            totals: TotalsMode::TotalColumn(9),
            attendance_range: "A2:J100",

            pr_name_col: 0,
            pr_event_cols: [1, 2, 3],
            pr_range: "A1:D100",

            race_name_col: 0,
            race_meet_col: 1,
            race_event_cols: [2, 3, 4],
            relay_leg_cols: vec![(5, 6), (7, 8)],
            race_range: "A2:I300",
        }
    }

    /// Layout of the first sheet revision: no group column, totals computed
    /// client-side, a single relay column pair.
    pub fn legacy() -> Self {
        Self {
            last_name_col: 0,
            first_name_col: 1,
            group_col: None,
            day_cols: [2, 3, 4, 5, 6, 7],
            totals: TotalsMode::SumOfDays,
            attendance_range: "A2:H100",

            pr_name_col: 0,
            pr_event_cols: [1, 2, 3],
            pr_range: "A1:D100",

            race_name_col: 0,
            race_meet_col: 1,
            race_event_cols: [2, 3, 4],
            relay_leg_cols: vec![(5, 6)],
            race_range: "A2:G300",
        }
    }
}

impl Default for SheetSchema {
    fn default() -> Self {
        Self::current()
    }
}
