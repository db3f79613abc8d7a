use crate::api::TimelineConfig;
use crate::core::{Dataset, LayoutMode};
use crate::error::{TimelineError, TimelineResult};

/// Rejects a dataset that mixes the two column payload shapes.
///
/// The shape of the first column sets the layout mode for the whole dataset;
/// any later column with the other shape is a caller contract violation.
pub fn validate_dataset(dataset: &Dataset) -> TimelineResult<()> {
    let Some(mode) = dataset.mode() else {
        return Ok(());
    };

    for (column_index, column) in dataset.columns.iter().enumerate() {
        if column.shape() != mode {
            return Err(TimelineError::MixedColumnShapes { column_index });
        }
    }

    Ok(())
}

/// Checks that the configured paddings leave horizontal room for columns.
///
/// A zero or negative content width would produce NaN/degenerate scale
/// geometry, so it is rejected up front with a descriptive error.
pub fn validate_content_width(config: &TimelineConfig) -> TimelineResult<f64> {
    let content_width =
        f64::from(config.viewport.width) - config.x_left_padding - config.x_right_padding;
    if content_width <= 0.0 {
        return Err(TimelineError::InvalidData(format!(
            "horizontal paddings ({} + {}) leave no room in a {}px viewport",
            config.x_left_padding, config.x_right_padding, config.viewport.width
        )));
    }
    Ok(content_width)
}

/// Layout mode to apply for a dataset; empty datasets fall back to the
/// multi-event edge rules.
#[must_use]
pub fn effective_mode(dataset: &Dataset) -> LayoutMode {
    dataset.mode().unwrap_or(LayoutMode::MultiEvent)
}

#[cfg(test)]
mod tests {
    use super::{validate_content_width, validate_dataset};
    use crate::api::TimelineConfig;
    use crate::core::{DayColumn, Dataset, Event, Viewport};
    use crate::error::TimelineError;
    use crate::render::Color;
    use chrono::NaiveDate;

    fn event(day: u32) -> Event {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date");
        Event::new(
            date.and_hms_opt(9, 0, 0).expect("valid time"),
            date.and_hms_opt(10, 0, 0).expect("valid time"),
            Color::rgb(0.5, 0.5, 0.5),
        )
    }

    #[test]
    fn mixed_shapes_are_rejected_with_the_offending_index() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 5, d).expect("valid date");
        let dataset = Dataset::new(vec![
            DayColumn::interval(date(6), event(6)),
            DayColumn::events(date(7), vec![event(7)]),
        ]);

        let err = validate_dataset(&dataset).expect_err("mixed shapes");
        assert!(matches!(
            err,
            TimelineError::MixedColumnShapes { column_index: 1 }
        ));
    }

    #[test]
    fn uniform_and_empty_datasets_pass() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 5, d).expect("valid date");
        let uniform = Dataset::new(vec![
            DayColumn::interval(date(6), event(6)),
            DayColumn::interval(date(7), event(7)),
        ]);
        assert!(validate_dataset(&uniform).is_ok());
        assert!(validate_dataset(&Dataset::default()).is_ok());
    }

    #[test]
    fn oversized_paddings_are_rejected() {
        let config = TimelineConfig::new(Viewport::new(100, 400)).with_x_padding(80.0, 40.0);
        assert!(validate_content_width(&config).is_err());

        let roomy = TimelineConfig::new(Viewport::new(800, 400));
        let width = validate_content_width(&roomy).expect("content width");
        assert!((width - 750.0).abs() < 1e-9);
    }
}
