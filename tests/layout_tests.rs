use chrono::NaiveDate;
use timegrid::core::layout::{MIN_EVENT_DURATION_MINUTES, build_bar_layouts};
use timegrid::core::text::CharWidthMeasurer;
use timegrid::core::{
    BarLayoutParams, DayColumn, Dataset, DayScale, Event, HourScale, LayoutMode,
};
use timegrid::render::Color;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date")
}

fn event(day: u32, start: (u32, u32), end: (u32, u32)) -> Event {
    Event::new(
        date(day).and_hms_opt(start.0, start.1, 0).expect("valid time"),
        date(day).and_hms_opt(end.0, end.1, 0).expect("valid time"),
        Color::rgb(0.1, 0.4, 0.8),
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
fn bar_height_tracks_event_duration() {
    let dataset = Dataset::new(vec![DayColumn::events(
        date(6),
        vec![event(6, (9, 0), (10, 30)), event(6, (13, 0), (17, 0))],
    )]);
    let hour = HourScale::new(75.0).expect("hour scale");
    let day = DayScale::new(date(6), date(6), 150.0, 1).expect("day scale");

    let bars = build_bar_layouts(
        &dataset,
        hour,
        day,
        params(LayoutMode::MultiEvent),
        &CharWidthMeasurer::default(),
    );

    assert_eq!(bars.len(), 2);
    assert!((bars[0].height - 1.5 * 75.0).abs() <= 1e-9);
    assert!((bars[1].height - 4.0 * 75.0).abs() <= 1e-9);
}

#[test]
fn minimum_duration_boundary_is_exclusive_at_fifteen_minutes() {
    let dataset = Dataset::new(vec![DayColumn::events(
        date(6),
        vec![
            event(6, (9, 0), (9, 15)),
            event(6, (10, 0), (10, 16)),
            event(6, (11, 0), (11, 5)),
        ],
    )]);
    let hour = HourScale::new(75.0).expect("hour scale");
    let day = DayScale::new(date(6), date(6), 150.0, 1).expect("day scale");

    let bars = build_bar_layouts(
        &dataset,
        hour,
        day,
        params(LayoutMode::MultiEvent),
        &CharWidthMeasurer::default(),
    );

    assert_eq!(MIN_EVENT_DURATION_MINUTES, 15.0);
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].id, "bar-0-1");
}

#[test]
fn reversed_events_are_normalized_not_rejected() {
    let mut reversed = event(6, (10, 0), (12, 0));
    std::mem::swap(&mut reversed.start, &mut reversed.end);
    let dataset = Dataset::new(vec![DayColumn::interval(date(6), reversed)]);
    let hour = HourScale::new(75.0).expect("hour scale");
    let day = DayScale::new(date(6), date(6), 150.0, 1).expect("day scale");

    let bars = build_bar_layouts(
        &dataset,
        hour,
        day,
        params(LayoutMode::SingleInterval),
        &CharWidthMeasurer::default(),
    );

    assert_eq!(bars.len(), 1);
    assert!((bars[0].y - 10.0 * 75.0).abs() <= 1e-9);
    assert!((bars[0].height - 2.0 * 75.0).abs() <= 1e-9);
}

#[test]
fn bars_share_one_width_per_render_pass() {
    let columns = (0..7)
        .map(|i| DayColumn::interval(date(6 + i), event(6 + i, (8, 0), (9, 0))))
        .collect();
    let dataset = Dataset::new(columns);
    let hour = HourScale::new(75.0).expect("hour scale");
    let day = DayScale::new(date(6), date(12), 100.0, 7).expect("day scale");

    let bars = build_bar_layouts(
        &dataset,
        hour,
        day,
        params(LayoutMode::SingleInterval),
        &CharWidthMeasurer::default(),
    );

    assert_eq!(bars.len(), 7);
    for bar in &bars {
        assert!((bar.width - 80.0).abs() <= 1e-9);
    }
}

#[test]
fn out_of_span_column_dates_extrapolate() {
    let dataset = Dataset::new(vec![
        DayColumn::interval(date(6), event(6, (9, 0), (10, 0))),
        DayColumn::interval(date(20), event(20, (9, 0), (10, 0))),
    ]);
    let hour = HourScale::new(75.0).expect("hour scale");
    // Scale deliberately built for a narrower span than the dataset uses.
    let day = DayScale::new(date(6), date(7), 100.0, 2).expect("day scale");

    let bars = build_bar_layouts(
        &dataset,
        hour,
        day,
        params(LayoutMode::SingleInterval),
        &CharWidthMeasurer::default(),
    );

    // Column dated the 20th sits 14 days past the first: linear, unclamped.
    assert!((bars[1].x - (14.0 * 100.0 + 5.0)).abs() <= 1e-9);
}

#[test]
fn explicit_event_ids_win_over_synthesized_ones() {
    let dataset = Dataset::new(vec![DayColumn::events(
        date(6),
        vec![event(6, (9, 0), (10, 0)).with_id("standup")],
    )]);
    let hour = HourScale::new(75.0).expect("hour scale");
    let day = DayScale::new(date(6), date(6), 150.0, 1).expect("day scale");

    let bars = build_bar_layouts(
        &dataset,
        hour,
        day,
        params(LayoutMode::MultiEvent),
        &CharWidthMeasurer::default(),
    );

    assert_eq!(bars[0].id, "standup");
}
