use chrono::{NaiveDate, NaiveDateTime};
use timegrid::api::{TimelineConfig, TimelineEngine};
use timegrid::core::{DayColumn, Dataset, Event, FixedClock, Viewport};
use timegrid::render::{Color, NullRenderer};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date")
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    date(day).and_hms_opt(hour, 0, 0).expect("valid time")
}

fn dataset() -> Dataset {
    Dataset::new(vec![DayColumn::interval(
        date(6),
        Event::new(at(6, 9), at(6, 13), Color::rgb(0.3, 0.6, 0.2)).with_id("block"),
    )])
}

fn bar_height(engine: &TimelineEngine<NullRenderer>) -> f64 {
    let frame = engine.current_frame().expect("frame");
    frame.rects.last().expect("bar rect").height
}

#[test]
fn animated_bars_start_at_zero_height_and_grow() {
    let config = TimelineConfig::new(Viewport::new(800, 600)).with_animate(true);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_dataset(dataset()).expect("set dataset");
    let clock = FixedClock(at(20, 12));

    engine.render(&clock).expect("render");
    assert_eq!(bar_height(&engine), 0.0);

    engine.tick(500.0, &clock).expect("tick");
    assert!((bar_height(&engine) - 0.5 * 4.0 * 75.0).abs() <= 1e-9);

    engine.tick(500.0, &clock).expect("tick");
    assert!((bar_height(&engine) - 4.0 * 75.0).abs() <= 1e-9);

    // The transition is one-shot; further ticks change nothing.
    let repainted = engine.tick(500.0, &clock).expect("tick");
    assert!(!repainted);
}

#[test]
fn re_render_restarts_the_grow_transition() {
    let config = TimelineConfig::new(Viewport::new(800, 600)).with_animate(true);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_dataset(dataset()).expect("set dataset");
    let clock = FixedClock(at(20, 12));

    engine.render(&clock).expect("render");
    engine.tick(1_000.0, &clock).expect("tick");
    assert!((bar_height(&engine) - 300.0).abs() <= 1e-9);

    engine.render(&clock).expect("re-render");
    assert_eq!(bar_height(&engine), 0.0);
}

#[test]
fn disabled_animation_paints_final_height_immediately() {
    let config = TimelineConfig::new(Viewport::new(800, 600));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_dataset(dataset()).expect("set dataset");

    engine.render(&FixedClock(at(20, 12))).expect("render");
    assert!((bar_height(&engine) - 300.0).abs() <= 1e-9);
}

#[test]
fn labels_are_placed_at_final_position_while_bars_grow() {
    let config = TimelineConfig::new(Viewport::new(800, 600)).with_animate(true);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_dataset(dataset()).expect("set dataset");
    let clock = FixedClock(at(20, 12));

    engine.render(&clock).expect("render");
    let collapsed = engine.current_frame().expect("frame");
    engine.tick(1_000.0, &clock).expect("tick");
    let grown = engine.current_frame().expect("frame");

    assert_eq!(collapsed.texts, grown.texts);
}
