use chrono::{Datelike, NaiveDate};

use crate::core::LinearScale;
use crate::error::{TimelineError, TimelineResult};

/// Horizontal scale mapping a calendar date to a column pixel offset.
///
/// The domain is back-shifted by one day relative to the dataset span,
/// `[first_date - 1 day, last_date]`, mirroring the hidden first tick of the
/// day axis; [`DayScale::column_origin`] applies the matching one-day shift to
/// its input so column `i` lands at `i * column_width`. Dates outside the
/// span extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayScale {
    column_width: f64,
    column_count: usize,
    scale: LinearScale,
}

impl DayScale {
    pub fn new(
        first_date: NaiveDate,
        last_date: NaiveDate,
        column_width: f64,
        column_count: usize,
    ) -> TimelineResult<Self> {
        if !column_width.is_finite() || column_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "column width must be finite and > 0".to_owned(),
            ));
        }
        if column_count == 0 {
            return Err(TimelineError::InvalidData(
                "day scale requires at least one column".to_owned(),
            ));
        }

        let domain_start = day_number(first_date) - 1.0;
        let domain_end = day_number(last_date);
        let scale = LinearScale::new(
            domain_start,
            domain_end,
            0.0,
            column_width * column_count as f64,
        )?;

        Ok(Self {
            column_width,
            column_count,
            scale,
        })
    }

    #[must_use]
    pub fn column_width(self) -> f64 {
        self.column_width
    }

    #[must_use]
    pub fn column_count(self) -> usize {
        self.column_count
    }

    /// Total pixel width spanned by all columns.
    #[must_use]
    pub fn content_width(self) -> f64 {
        self.column_width * self.column_count as f64
    }

    /// Raw scale position of a date; used for day-axis tick placement.
    #[must_use]
    pub fn date_to_pixel(self, date: NaiveDate) -> f64 {
        self.scale.map(day_number(date))
    }

    /// Left edge of the column holding `date` (one-day back-shift applied).
    #[must_use]
    pub fn column_origin(self, date: NaiveDate) -> f64 {
        self.scale.map(day_number(date) - 1.0)
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
