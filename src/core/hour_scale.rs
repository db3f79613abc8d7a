use chrono::{NaiveDateTime, Timelike};

use crate::core::LinearScale;
use crate::error::{TimelineError, TimelineResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Vertical scale mapping time-of-day to a pixel offset.
///
/// The domain is fixed to one civil day, `[00:00, 24:00]`, regardless of the
/// dates carried by the dataset: only the time-of-day component of an event
/// participates. Both domain endpoints fall on exact hour boundaries, so hour
/// ticks line up without further rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourScale {
    row_height_per_hour: f64,
    scale: LinearScale,
}

impl HourScale {
    pub fn new(row_height_per_hour: f64) -> TimelineResult<Self> {
        if !row_height_per_hour.is_finite() || row_height_per_hour <= 0.0 {
            return Err(TimelineError::InvalidData(
                "row height per hour must be finite and > 0".to_owned(),
            ));
        }

        let scale = LinearScale::new(0.0, SECONDS_PER_DAY, 0.0, row_height_per_hour * 24.0)?;
        Ok(Self {
            row_height_per_hour,
            scale,
        })
    }

    #[must_use]
    pub fn row_height_per_hour(self) -> f64 {
        self.row_height_per_hour
    }

    /// Total pixel height of the 24-hour body.
    #[must_use]
    pub fn body_height(self) -> f64 {
        self.row_height_per_hour * 24.0
    }

    /// Pixel offset for the time-of-day of `time` (date part ignored).
    #[must_use]
    pub fn time_to_pixel(self, time: NaiveDateTime) -> f64 {
        let seconds = f64::from(time.num_seconds_from_midnight())
            + f64::from(time.nanosecond()) / 1_000_000_000.0;
        self.scale.map(seconds)
    }

    /// Pixel offset for a whole hour boundary; `hour` may be 24 (end of day).
    #[must_use]
    pub fn hour_to_pixel(self, hour: u32) -> f64 {
        self.scale.map(f64::from(hour) * 3_600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::HourScale;
    use chrono::NaiveDate;

    #[test]
    fn noon_maps_to_half_body_height() {
        let scale = HourScale::new(75.0).expect("valid scale");
        let noon = NaiveDate::from_ymd_opt(2024, 5, 6)
            .expect("valid date")
            .and_hms_opt(12, 0, 0)
            .expect("valid time");

        assert_eq!(scale.time_to_pixel(noon), 75.0 * 12.0);
        assert_eq!(scale.body_height(), 75.0 * 24.0);
    }

    #[test]
    fn date_component_does_not_shift_mapping() {
        let scale = HourScale::new(75.0).expect("valid scale");
        let a = NaiveDate::from_ymd_opt(2020, 1, 1)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time");
        let b = NaiveDate::from_ymd_opt(2031, 12, 31)
            .expect("valid date")
            .and_hms_opt(9, 30, 0)
            .expect("valid time");

        assert_eq!(scale.time_to_pixel(a), scale.time_to_pixel(b));
    }

    #[test]
    fn rejects_non_positive_row_height() {
        assert!(HourScale::new(0.0).is_err());
        assert!(HourScale::new(-3.0).is_err());
    }
}
