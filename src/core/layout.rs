use smallvec::SmallVec;

use crate::core::text::{TextMeasurer, fit_label};
use crate::core::{ColumnEvents, Dataset, DayScale, Event, HourScale, LayoutMode};
use crate::render::Color;

/// Events lasting this many minutes or less are suppressed entirely in
/// multi-event mode: no bar, no label.
pub const MIN_EVENT_DURATION_MINUTES: f64 = 15.0;

/// Multi-event bars at or under this duration compress the label offset so
/// text stays inside the bar.
pub const SHORT_BAR_LABEL_MINUTES: f64 = 30.0;

/// Horizontal label inset from the bar's left edge.
pub const LABEL_INSET_PX: f64 = 5.0;

/// Width margin reserved when fitting label text (inset on both sides).
pub const LABEL_FIT_MARGIN_PX: f64 = 2.0 * LABEL_INSET_PX;

const SHORT_BAR_LABEL_OFFSET_FACTOR: f64 = 0.85;

/// Fitted label placement inside a bar, in content-space pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
}

/// Computed geometry for one event bar, in content-space pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub id: String,
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub color: Color,
    pub label: Option<BarLabel>,
}

/// Geometry constants feeding one bar layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayoutParams {
    pub mode: LayoutMode,
    pub bar_width_fraction: f64,
    pub corner_radius: f64,
    pub label_font_size_px: f64,
}

/// Computes bar rectangles and label placement for every visible event.
///
/// Bars are inset toward the left quarter of the slack space left by
/// `bar_width_fraction`, not centered; this placement is part of the chart's
/// visual contract.
#[must_use]
pub fn build_bar_layouts(
    dataset: &Dataset,
    hour_scale: HourScale,
    day_scale: DayScale,
    params: BarLayoutParams,
    measurer: &dyn TextMeasurer,
) -> Vec<BarLayout> {
    let column_width = day_scale.column_width();
    let bar_width = column_width * params.bar_width_fraction;
    let slack_inset = (1.0 - params.bar_width_fraction) * column_width * 0.25;

    let mut bars = Vec::new();
    for (column_index, column) in dataset.columns.iter().enumerate() {
        let bar_x = day_scale.column_origin(column.date) + slack_inset;

        let visible: SmallVec<[(usize, &Event); 4]> = match &column.events {
            ColumnEvents::Interval(event) => SmallVec::from_iter([(0, event)]),
            ColumnEvents::Events(events) => events
                .iter()
                .enumerate()
                .filter(|(_, event)| event.duration_minutes() > MIN_EVENT_DURATION_MINUTES)
                .collect(),
        };

        for (event_index, event) in visible {
            bars.push(layout_bar(
                event,
                column_index,
                event_index,
                bar_x,
                bar_width,
                hour_scale,
                params,
                measurer,
            ));
        }
    }

    bars
}

fn layout_bar(
    event: &Event,
    column_index: usize,
    event_index: usize,
    bar_x: f64,
    bar_width: f64,
    hour_scale: HourScale,
    params: BarLayoutParams,
    measurer: &dyn TextMeasurer,
) -> BarLayout {
    let (start, _end) = event.normalized_span();
    let y = hour_scale.time_to_pixel(start);
    let height = hour_scale.row_height_per_hour() * event.duration_hours();

    let text = label_text(event);
    let fitted = fit_label(
        measurer,
        &text,
        params.label_font_size_px,
        bar_width - LABEL_FIT_MARGIN_PX,
    );
    let label = (!fitted.is_empty()).then(|| {
        let line_height = measurer.line_height(params.label_font_size_px);
        let offset_factor = if params.mode == LayoutMode::MultiEvent
            && event.duration_minutes() <= SHORT_BAR_LABEL_MINUTES
        {
            SHORT_BAR_LABEL_OFFSET_FACTOR
        } else {
            1.0
        };

        BarLabel {
            text: fitted,
            x: bar_x + LABEL_INSET_PX,
            y: y + line_height * offset_factor,
            font_size_px: params.label_font_size_px,
        }
    });

    BarLayout {
        id: bar_id(event, column_index, event_index),
        column: column_index,
        x: bar_x,
        y,
        width: bar_width,
        height,
        corner_radius: params.corner_radius,
        color: event.color,
        label,
    }
}

fn bar_id(event: &Event, column_index: usize, event_index: usize) -> String {
    event
        .id
        .clone()
        .unwrap_or_else(|| format!("bar-{column_index}-{event_index}"))
}

/// Label text: the supplied title, or a synthesized time-span string.
#[must_use]
pub fn label_text(event: &Event) -> String {
    if let Some(title) = &event.title
        && !title.is_empty()
    {
        return title.clone();
    }

    let (start, end) = event.normalized_span();
    let task = event.id.as_deref().unwrap_or("task");
    format!(
        "{} - {} - {}",
        start.format("%H:%M"),
        end.format("%H:%M"),
        task
    )
}

#[cfg(test)]
mod tests {
    use super::{BarLayoutParams, build_bar_layouts, label_text};
    use crate::core::text::CharWidthMeasurer;
    use crate::core::{DayColumn, Dataset, DayScale, Event, HourScale, LayoutMode};
    use crate::render::Color;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date")
    }

    fn event(day: u32, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            date(day).and_hms_opt(start.0, start.1, 0).expect("valid time"),
            date(day).and_hms_opt(end.0, end.1, 0).expect("valid time"),
            Color::rgb(0.1, 0.5, 0.9),
        )
    }

    fn params(mode: LayoutMode) -> BarLayoutParams {
        BarLayoutParams {
            mode,
            bar_width_fraction: 0.8,
            corner_radius: 5.0,
            label_font_size_px: 12.0,
        }
    }

    #[test]
    fn bar_is_inset_toward_left_quarter_of_slack() {
        let dataset = Dataset::new(vec![DayColumn::interval(date(6), event(6, (9, 0), (10, 0)))]);
        let hour = HourScale::new(75.0).expect("hour scale");
        let day = DayScale::new(date(6), date(6), 100.0, 1).expect("day scale");

        let bars = build_bar_layouts(
            &dataset,
            hour,
            day,
            params(LayoutMode::SingleInterval),
            &CharWidthMeasurer::default(),
        );

        assert_eq!(bars.len(), 1);
        // slack = (1 - 0.8) * 100 = 20 px, of which a quarter lands left of the bar.
        assert!((bars[0].x - 5.0).abs() < 1e-9);
        assert!((bars[0].width - 80.0).abs() < 1e-9);
        assert!((bars[0].y - 9.0 * 75.0).abs() < 1e-9);
        assert!((bars[0].height - 75.0).abs() < 1e-9);
    }

    #[test]
    fn fifteen_minute_event_is_filtered_sixteen_is_kept() {
        let columns = vec![DayColumn::events(
            date(6),
            vec![
                event(6, (9, 0), (9, 15)),
                event(6, (10, 0), (10, 16)),
            ],
        )];
        let dataset = Dataset::new(columns);
        let hour = HourScale::new(75.0).expect("hour scale");
        let day = DayScale::new(date(6), date(6), 100.0, 1).expect("day scale");

        let bars = build_bar_layouts(
            &dataset,
            hour,
            day,
            params(LayoutMode::MultiEvent),
            &CharWidthMeasurer::default(),
        );

        assert_eq!(bars.len(), 1);
        assert!((bars[0].y - 10.0 * 75.0).abs() < 1e-9);
    }

    #[test]
    fn single_interval_mode_never_filters_short_events() {
        let dataset = Dataset::new(vec![DayColumn::interval(date(6), event(6, (9, 0), (9, 10)))]);
        let hour = HourScale::new(75.0).expect("hour scale");
        let day = DayScale::new(date(6), date(6), 100.0, 1).expect("day scale");

        let bars = build_bar_layouts(
            &dataset,
            hour,
            day,
            params(LayoutMode::SingleInterval),
            &CharWidthMeasurer::default(),
        );
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn short_multi_event_bar_compresses_label_offset() {
        let tall = event(6, (9, 0), (11, 0)).with_title("long meeting");
        let short = event(6, (12, 0), (12, 25)).with_title("sync");
        let dataset = Dataset::new(vec![DayColumn::events(date(6), vec![tall, short])]);
        let hour = HourScale::new(75.0).expect("hour scale");
        let day = DayScale::new(date(6), date(6), 200.0, 1).expect("day scale");
        let measurer = CharWidthMeasurer::default();

        let bars = build_bar_layouts(
            &dataset,
            hour,
            day,
            params(LayoutMode::MultiEvent),
            &measurer,
        );

        let line_height = 12.0 * 1.2;
        let tall_label = bars[0].label.as_ref().expect("tall label");
        let short_label = bars[1].label.as_ref().expect("short label");
        assert!((tall_label.y - (bars[0].y + line_height)).abs() < 1e-9);
        assert!((short_label.y - (bars[1].y + line_height * 0.85)).abs() < 1e-9);
    }

    #[test]
    fn synthesized_label_includes_time_span() {
        let untitled = event(6, (9, 0), (10, 30));
        assert_eq!(label_text(&untitled), "09:00 - 10:30 - task");

        let with_id = event(6, (9, 0), (10, 30)).with_id("deploy");
        assert_eq!(label_text(&with_id), "09:00 - 10:30 - deploy");
    }
}
