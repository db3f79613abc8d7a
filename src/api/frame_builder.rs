use chrono::NaiveDateTime;

use crate::api::validation::{effective_mode, validate_content_width, validate_dataset};
use crate::api::TimelineConfig;
use crate::core::axis::{build_day_axis, build_hour_axis, empty_day_axis};
use crate::core::layout::build_bar_layouts;
use crate::core::marker::build_now_marker;
use crate::core::text::TextMeasurer;
use crate::core::{
    BarLayout, BarLayoutParams, Dataset, DayAxis, DayAxisParams, DayScale, HourAxis, HourScale,
    LayoutMode, NowMarker, NowMarkerParams,
};
use crate::error::TimelineResult;
use crate::interaction::{GrowAnimation, HoverController};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

const GRID_COLOR: Color = Color::rgb(0.88, 0.88, 0.88);
const AXIS_LABEL_COLOR: Color = Color::rgb(0.33, 0.33, 0.33);
const BAR_LABEL_COLOR: Color = Color::WHITE;
const BAR_BORDER_COLOR: Color = Color::WHITE;
const BAR_BORDER_WIDTH: f64 = 1.0;
const STROKE_WIDTH: f64 = 1.0;

/// Fixed tick-to-label gaps on each axis.
const HOUR_TICK_PADDING_PX: f64 = 10.0;
const DAY_TICK_PADDING_PX: f64 = 15.0;

/// Baseline shift applied to hour labels so they center on their gridline.
const AXIS_BASELINE_SHIFT_EM: f64 = 0.32;

/// All geometry computed by one layout pass.
///
/// Bar, axis and marker coordinates are content-space: x is measured from the
/// left edge of the column area, y from the top of the 24-hour body. The
/// `origin_x`/`body_origin_y` offsets place that content inside the viewport;
/// [`build_frame`] applies them when emitting primitives.
///
/// Rebuilt from scratch on every render; nothing here survives a dataset,
/// config or viewport change.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub mode: LayoutMode,
    pub column_width: f64,
    pub content_width: f64,
    pub body_height: f64,
    pub origin_x: f64,
    pub body_origin_y: f64,
    /// Visible height budget for the scrollable body below the header.
    pub body_max_height: f64,
    pub hour_axis: HourAxis,
    pub day_axis: DayAxis,
    pub bars: Vec<BarLayout>,
    pub marker: Option<NowMarker>,
}

/// Runs one full layout pass: scales, axes, bars, marker.
///
/// The pass is atomic with respect to its caller: all geometry is computed
/// before anything observable changes, and an empty dataset degrades to an
/// axes-only layout rather than an error.
pub fn build_layout(
    dataset: &Dataset,
    config: &TimelineConfig,
    now: NaiveDateTime,
    measurer: &dyn TextMeasurer,
) -> TimelineResult<FrameLayout> {
    config.validate()?;
    validate_dataset(dataset)?;
    let content_width = validate_content_width(config)?;

    let mode = effective_mode(dataset);
    let hour_scale = HourScale::new(config.row_height_per_hour)?;
    let hour_axis = build_hour_axis(hour_scale, mode);

    let day_axis_params = DayAxisParams {
        tick_size: config.x_axis_tick_size,
        tick_padding: DAY_TICK_PADDING_PX,
        day_number_font_size_px: config.day_number_font_size_px,
        day_name_font_size_px: config.day_name_font_size_px,
        day_name_offset: config.day_name_offset,
    };

    let (column_width, day_axis, bars, marker) = match dataset.date_span() {
        None => (content_width, empty_day_axis(day_axis_params), Vec::new(), None),
        Some((first_date, last_date)) => {
            let column_count = dataset.column_count();
            let column_width = content_width / column_count as f64;
            let day_scale = DayScale::new(first_date, last_date, column_width, column_count)?;

            let bars = build_bar_layouts(
                dataset,
                hour_scale,
                day_scale,
                BarLayoutParams {
                    mode,
                    bar_width_fraction: config.x_bar_width_percentage,
                    corner_radius: config.bar_border_radius,
                    label_font_size_px: config.bar_label_font_size_px,
                },
                measurer,
            );

            let marker = build_now_marker(
                dataset,
                hour_scale,
                day_scale,
                now,
                NowMarkerParams {
                    height: config.current_marker_height,
                    dot_radius: config.current_marker_circle_radius,
                    x_left_padding: config.x_left_padding,
                },
            );

            let day_axis = build_day_axis(dataset, day_scale, day_axis_params);
            (column_width, day_axis, bars, marker)
        }
    };

    let body_origin_y = day_axis.header_height + config.y_top_padding;
    let body_max_height = (f64::from(config.viewport.height)
        - day_axis.header_height
        - config.y_top_padding
        - config.y_bottom_padding)
        .max(0.0);

    Ok(FrameLayout {
        mode,
        column_width,
        content_width,
        body_height: hour_scale.body_height(),
        origin_x: config.x_left_padding,
        body_origin_y,
        body_max_height,
        hour_axis,
        day_axis,
        bars,
        marker,
    })
}

/// Emits the draw scene for a layout plus the current interaction state.
///
/// Draw order: hour axis, day axis, current-time marker, then bars with
/// their labels on top.
#[must_use]
pub fn build_frame(
    layout: &FrameLayout,
    config: &TimelineConfig,
    hover: &HoverController,
    animation: &GrowAnimation,
) -> RenderFrame {
    let mut frame = RenderFrame::new(config.viewport);
    let origin_x = layout.origin_x;
    let body_y = layout.body_origin_y;

    for tick in &layout.hour_axis.ticks {
        let y = body_y + tick.y;
        if tick.grid_visible {
            frame.lines.push(LinePrimitive::new(
                origin_x,
                y,
                origin_x + layout.content_width,
                y,
                STROKE_WIDTH,
                GRID_COLOR,
            ));
        }
        frame.lines.push(LinePrimitive::new(
            origin_x - config.y_axis_tick_size,
            y,
            origin_x,
            y,
            STROKE_WIDTH,
            AXIS_LABEL_COLOR,
        ));
        if tick.label_visible {
            frame.texts.push(TextPrimitive::new(
                tick.label.clone(),
                origin_x - config.y_axis_tick_size - HOUR_TICK_PADDING_PX,
                y + config.hour_label_font_size_px * AXIS_BASELINE_SHIFT_EM,
                config.hour_label_font_size_px,
                AXIS_LABEL_COLOR,
                TextHAlign::Right,
            ));
        }
    }

    for gridline in &layout.day_axis.gridlines {
        if !gridline.visible {
            continue;
        }
        let x = origin_x + gridline.x;
        frame.lines.push(LinePrimitive::new(
            x,
            body_y,
            x,
            body_y + layout.body_height,
            STROKE_WIDTH,
            GRID_COLOR,
        ));
    }

    let header_height = layout.day_axis.header_height;
    let number_baseline = header_height - config.x_axis_tick_size - DAY_TICK_PADDING_PX;
    let name_baseline = number_baseline - config.day_number_font_size_px;
    for tick in &layout.day_axis.ticks {
        let center_x = origin_x + tick.center_x;
        let boundary_x = center_x + layout.column_width / 2.0;

        frame.lines.push(LinePrimitive::new(
            boundary_x,
            header_height - config.x_axis_tick_size,
            boundary_x,
            header_height,
            STROKE_WIDTH,
            AXIS_LABEL_COLOR,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.day_number.clone(),
            center_x,
            number_baseline,
            config.day_number_font_size_px,
            AXIS_LABEL_COLOR,
            TextHAlign::Center,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.day_name.clone(),
            center_x,
            name_baseline,
            config.day_name_font_size_px,
            AXIS_LABEL_COLOR,
            TextHAlign::Center,
        ));
    }

    if let Some(marker) = layout.marker {
        frame.rects.push(RectPrimitive::new(
            origin_x + marker.x,
            body_y + marker.y,
            marker.width,
            marker.height,
            marker.color,
        ));
        frame.circles.push(CirclePrimitive::new(
            origin_x + marker.dot_cx,
            body_y + marker.dot_cy,
            marker.dot_radius,
            marker.color,
        ));
    }

    let growth = animation.progress();
    for bar in &layout.bars {
        let opacity = hover.opacity_of(&bar.id);
        frame.rects.push(
            RectPrimitive::new(
                origin_x + bar.x,
                body_y + bar.y,
                bar.width,
                bar.height * growth,
                bar.color,
            )
            .with_corner_radius(bar.corner_radius)
            .with_border(BAR_BORDER_WIDTH, BAR_BORDER_COLOR)
            .with_opacity(opacity),
        );

        if let Some(label) = &bar.label {
            frame.texts.push(
                TextPrimitive::new(
                    label.text.clone(),
                    origin_x + label.x,
                    body_y + label.y,
                    label.font_size_px,
                    BAR_LABEL_COLOR,
                    TextHAlign::Left,
                )
                .with_opacity(opacity),
            );
        }
    }

    frame
}
