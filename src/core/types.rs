use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One time-bounded entry inside a day column.
///
/// `start` and `end` carry a full date-time, but only the time-of-day part
/// participates in vertical placement. A reversed pair (`end < start`) is
/// tolerated and normalized on read, never reported as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub title: Option<String>,
    pub color: Color,
}

impl Event {
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, color: Color) -> Self {
        Self {
            id: None,
            start,
            end,
            title: None,
            color,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Time span with a reversed pair swapped into `start <= end` order.
    #[must_use]
    pub fn normalized_span(&self) -> (NaiveDateTime, NaiveDateTime) {
        if self.end < self.start {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        let (start, end) = self.normalized_span();
        (end - start).num_milliseconds() as f64 / 3_600_000.0
    }

    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        let (start, end) = self.normalized_span();
        (end - start).num_milliseconds() as f64 / 60_000.0
    }
}

/// The two supported column payload shapes.
///
/// A dataset must use one shape consistently; mixing them is rejected at the
/// engine boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnEvents {
    /// One min/max interval for the whole day.
    Interval(Event),
    /// Ordered list of events within the day.
    Events(Vec<Event>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    SingleInterval,
    MultiEvent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub events: ColumnEvents,
}

impl DayColumn {
    #[must_use]
    pub fn interval(date: NaiveDate, event: Event) -> Self {
        Self {
            date,
            events: ColumnEvents::Interval(event),
        }
    }

    #[must_use]
    pub fn events(date: NaiveDate, events: Vec<Event>) -> Self {
        Self {
            date,
            events: ColumnEvents::Events(events),
        }
    }

    #[must_use]
    pub fn shape(&self) -> LayoutMode {
        match self.events {
            ColumnEvents::Interval(_) => LayoutMode::SingleInterval,
            ColumnEvents::Events(_) => LayoutMode::MultiEvent,
        }
    }
}

/// Ordered sequence of day columns; one per visible period.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub columns: Vec<DayColumn>,
}

impl Dataset {
    #[must_use]
    pub fn new(columns: Vec<DayColumn>) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Layout mode implied by the first column; `None` for an empty dataset.
    #[must_use]
    pub fn mode(&self) -> Option<LayoutMode> {
        self.columns.first().map(DayColumn::shape)
    }

    /// First and last column dates, in dataset order.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.columns.first()?.date;
        let last = self.columns.last()?.date;
        Some((first, last))
    }
}

/// Injected wall-clock capability.
///
/// "Today" and the current-time marker derive from this; the engine never
/// reads an ambient global clock, so tests can pin time deterministically.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Host-local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Fixed clock for deterministic layout and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, DayColumn, Dataset, Event, LayoutMode};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date")
    }

    fn event(start_h: u32, end_h: u32) -> Event {
        let day = date(6);
        Event::new(
            day.and_hms_opt(start_h, 0, 0).expect("valid time"),
            day.and_hms_opt(end_h, 0, 0).expect("valid time"),
            Color::rgb(0.2, 0.4, 0.6),
        )
    }

    #[test]
    fn reversed_span_is_swapped_on_read() {
        let mut reversed = event(9, 11);
        std::mem::swap(&mut reversed.start, &mut reversed.end);

        let (start, end) = reversed.normalized_span();
        assert!(start <= end);
        assert!((reversed.duration_hours() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn dataset_mode_follows_first_column() {
        let single = Dataset::new(vec![DayColumn::interval(date(6), event(9, 10))]);
        assert_eq!(single.mode(), Some(LayoutMode::SingleInterval));

        let multi = Dataset::new(vec![DayColumn::events(date(6), vec![event(9, 10)])]);
        assert_eq!(multi.mode(), Some(LayoutMode::MultiEvent));

        assert_eq!(Dataset::default().mode(), None);
    }
}
