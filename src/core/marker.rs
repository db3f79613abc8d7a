use chrono::NaiveDateTime;

use crate::core::{Dataset, DayScale, HourScale};
use crate::render::Color;

/// Fixed current-time color, distinct from any event color.
pub const CURRENT_TIME_COLOR: Color = Color::rgb(234.0 / 255.0, 67.0 / 255.0, 52.0 / 255.0);

/// Current-time indicator geometry, in content-space pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowMarker {
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dot_cx: f64,
    pub dot_cy: f64,
    pub dot_radius: f64,
    pub color: Color,
}

/// Sizing inputs for the marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NowMarkerParams {
    pub height: f64,
    pub dot_radius: f64,
    pub x_left_padding: f64,
}

/// Builds the marker for the column whose date matches `now`.
///
/// Returns `None` when no column is dated today; that is a normal state, not
/// an error. The marker is recomputed on every render pass and is accurate
/// only as of that pass: the engine never schedules its own clock tick.
#[must_use]
pub fn build_now_marker(
    dataset: &Dataset,
    hour_scale: HourScale,
    day_scale: DayScale,
    now: NaiveDateTime,
    params: NowMarkerParams,
) -> Option<NowMarker> {
    let today = now.date();
    let (column, matched) = dataset
        .columns
        .iter()
        .enumerate()
        .find(|(_, column)| column.date == today)?;

    let x = day_scale.column_origin(matched.date);
    let y = hour_scale.time_to_pixel(now);
    let width = day_scale.column_width() - params.x_left_padding / dataset.column_count() as f64;

    Some(NowMarker {
        column,
        x,
        y,
        width,
        height: params.height,
        dot_cx: x,
        dot_cy: y + params.height / 2.0,
        dot_radius: params.dot_radius,
        color: CURRENT_TIME_COLOR,
    })
}
