//! Pure coordinate conversion for the weekly time grid.
//!
//! Maps grid-local pixel positions to calendar instants and back for a
//! 7-column (days) by 24-hour surface. Stateless apart from the displayed
//! week and grid width, so gesture math stays testable without a UI.

use chrono::{DateTime, Local, NaiveDate, Timelike};

use crate::utils::date::at_hm;

/// Pixel height of one hour row.
pub const HOUR_HEIGHT: f32 = 72.0;
/// Snap granularity for gesture positions, in minutes.
pub const SNAP_MINUTES: i64 = 15;
/// Number of day columns.
pub const DAYS_SHOWN: usize = 7;

/// Geometry of the currently displayed week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// First (leftmost) displayed day.
    pub week_start: NaiveDate,
    /// Total width of the seven day columns, in pixels.
    pub grid_width: f32,
}

impl GridGeometry {
    pub fn new(week_start: NaiveDate, grid_width: f32) -> Self {
        Self {
            week_start,
            grid_width,
        }
    }

    /// Vertical offset of an instant within its day column.
    pub fn time_to_offset(instant: DateTime<Local>) -> f32 {
        let minutes = instant.time().hour() * 60 + instant.time().minute();
        minutes as f32 / 60.0 * HOUR_HEIGHT
    }

    /// Vertical offset for a whole-minutes-of-day value.
    pub fn minutes_to_offset(minutes: i64) -> f32 {
        minutes as f32 / 60.0 * HOUR_HEIGHT
    }

    /// Convert a vertical offset in day column `day_index` into an instant.
    ///
    /// With `snap`, the position rounds to the nearest 15-minute boundary.
    /// The hour component clamps to [0, 23] either way, so any offset maps
    /// to an instant within the column's day.
    pub fn offset_to_time(&self, y: f32, day_index: usize, snap: bool) -> DateTime<Local> {
        let raw_minutes = y / HOUR_HEIGHT * 60.0;
        let minutes = if snap {
            let step = SNAP_MINUTES as f32;
            ((raw_minutes / step).round() * step) as i64
        } else {
            raw_minutes.round() as i64
        };

        let minutes = minutes.max(0);
        let hour = (minutes / 60).min(23) as u32;
        let minute = (minutes % 60) as u32;

        at_hm(self.day(day_index), hour, minute)
    }

    /// Day column at a horizontal offset, clamped to [0, 6].
    pub fn day_index_at(&self, x: f32) -> usize {
        let column = (x / (self.grid_width / DAYS_SHOWN as f32)).floor() as isize;
        column.clamp(0, DAYS_SHOWN as isize - 1) as usize
    }

    /// The calendar date of a day column.
    pub fn day(&self, day_index: usize) -> NaiveDate {
        self.week_start + chrono::Duration::days(day_index as i64)
    }

    /// The column index of a date within the displayed week, if visible.
    pub fn day_index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.week_start).num_days();
        (0..DAYS_SHOWN as i64)
            .contains(&offset)
            .then_some(offset as usize)
    }

    /// Width of one day column.
    pub fn column_width(&self) -> f32 {
        self.grid_width / DAYS_SHOWN as f32
    }

    /// Left and right pixel bounds of a day column.
    pub fn day_x_range(&self, day_index: usize) -> (f32, f32) {
        let left = day_index as f32 * self.column_width();
        (left, left + self.column_width())
    }
}
