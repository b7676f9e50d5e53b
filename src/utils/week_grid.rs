use serde::Serialize;
use utoipa::ToSchema;

use crate::model::course::CourseSchedule;

/// Where a schedule block sits inside the weekly calendar grid.
///
/// The grid has one header row, an hour-label gutter in column 1, and one
/// row per clock hour starting at the configured first displayed hour.
/// `row_end` is the exclusive grid line, CSS-grid style. Partial hours are
/// expressed as pixel margins inside the edge cells (one pixel per minute,
/// cells are 60px tall), never as fractional rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GridPlacement {
    pub column: u32,
    pub row_start: u32,
    pub row_end: u32,
    pub margin_top_px: u32,
    pub margin_bottom_px: u32,
}

/// Compute the grid placement for one weekly schedule entry.
///
/// Returns `None` for a day outside Sunday..=Saturday or a window starting
/// before the first displayed hour; such entries are skipped rather than
/// drawn out of bounds. Overlapping blocks are not resolved here, callers
/// layer them in the order given.
pub fn place(schedule: &CourseSchedule, grid_first_hour: u32) -> Option<GridPlacement> {
    if schedule.day_of_week > 6 {
        return None;
    }

    let row_start = schedule.start_hour.checked_sub(grid_first_hour)? + 2;
    let mut row_end = schedule.end_hour.checked_sub(grid_first_hour)? + 2;
    // a block ending mid-hour spills into the end hour's row
    if schedule.end_min > 0 {
        row_end += 1;
    }

    Some(GridPlacement {
        column: u32::from(schedule.day_of_week) + 2,
        row_start,
        row_end,
        margin_top_px: schedule.start_min,
        margin_bottom_px: if schedule.end_min > 0 {
            60 - schedule.end_min
        } else {
            0
        },
    })
}
