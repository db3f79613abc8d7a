use chrono::NaiveDate;

use crate::core::{Dataset, DayScale, HourScale, LayoutMode};

/// One hourly tick on the vertical axis, in content-space pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct HourTick {
    pub hour: u32,
    pub y: f64,
    pub label: String,
    pub label_visible: bool,
    pub grid_visible: bool,
}

/// Vertical axis: 25 hourly tick positions (0..=24) with gridlines.
#[derive(Debug, Clone, PartialEq)]
pub struct HourAxis {
    pub ticks: Vec<HourTick>,
}

/// Builds hour ticks with the edge-suppression rules of each layout mode.
///
/// The topmost (midnight) gridline and label are always hidden; it marks the
/// zero-height edge of the day. Single-interval charts additionally hide the
/// closing midnight label at the bottom of the label set.
#[must_use]
pub fn build_hour_axis(hour_scale: HourScale, mode: LayoutMode) -> HourAxis {
    let ticks = (0..=24u32)
        .map(|hour| {
            let last = hour == 24;
            let label_visible = match mode {
                LayoutMode::SingleInterval => hour != 0 && !last,
                LayoutMode::MultiEvent => hour != 0,
            };
            HourTick {
                hour,
                y: hour_scale.hour_to_pixel(hour),
                label: format!("{:02}:00", hour % 24),
                label_visible,
                grid_visible: hour != 0,
            }
        })
        .collect();

    HourAxis { ticks }
}

/// One labeled day tick, centered over its column.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTick {
    pub date: NaiveDate,
    pub center_x: f64,
    pub day_name: String,
    pub day_number: String,
}

/// One vertical column-boundary gridline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayGridline {
    pub x: f64,
    pub visible: bool,
}

/// Sizing inputs for the day-axis header block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAxisParams {
    pub tick_size: f64,
    pub tick_padding: f64,
    pub day_number_font_size_px: f64,
    pub day_name_font_size_px: f64,
    pub day_name_offset: f64,
}

/// Horizontal axis: per-column labels, boundary gridlines and the header
/// block height that offsets the scrollable body.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAxis {
    pub ticks: Vec<DayTick>,
    pub gridlines: Vec<DayGridline>,
    pub header_height: f64,
}

/// Builds day ticks pinned to each column's exact date.
///
/// Tick values are never interpolated, so gridlines always align with column
/// boundaries. The first boundary gridline is hidden; the domain was
/// back-shifted by one day and that line sits on the chart's left edge.
/// `header_height` must be known before the scrollable body's visible height
/// is finalized, so it is part of this builder's output.
#[must_use]
pub fn build_day_axis(dataset: &Dataset, day_scale: DayScale, params: DayAxisParams) -> DayAxis {
    let column_width = day_scale.column_width();

    let ticks = dataset
        .columns
        .iter()
        .map(|column| DayTick {
            date: column.date,
            center_x: day_scale.date_to_pixel(column.date) - column_width / 2.0,
            day_name: column.date.format("%a").to_string(),
            day_number: column.date.format("%d").to_string(),
        })
        .collect();

    let gridlines = (0..=dataset.column_count())
        .map(|boundary| DayGridline {
            x: boundary as f64 * column_width,
            visible: boundary != 0,
        })
        .collect();

    DayAxis {
        ticks,
        gridlines,
        header_height: header_height(params),
    }
}

/// Header block height for an empty dataset (labels absent, block kept so the
/// body offset stays stable across dataset swaps).
#[must_use]
pub fn empty_day_axis(params: DayAxisParams) -> DayAxis {
    DayAxis {
        ticks: Vec::new(),
        gridlines: Vec::new(),
        header_height: header_height(params),
    }
}

fn header_height(params: DayAxisParams) -> f64 {
    params.day_name_offset
        + params.day_number_font_size_px
        + params.tick_size
        + params.tick_padding
}
