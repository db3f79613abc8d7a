pub mod axis;
pub mod day_scale;
pub mod hour_scale;
pub mod layout;
pub mod marker;
pub mod scale;
pub mod text;
pub mod types;

pub use axis::{DayAxis, DayAxisParams, DayGridline, DayTick, HourAxis, HourTick};
pub use day_scale::DayScale;
pub use hour_scale::HourScale;
pub use layout::{BarLabel, BarLayout, BarLayoutParams};
pub use marker::{NowMarker, NowMarkerParams};
pub use scale::LinearScale;
pub use text::{CharWidthMeasurer, TextMeasurer};
pub use types::{
    Clock, ColumnEvents, Dataset, DayColumn, Event, FixedClock, LayoutMode, SystemClock, Viewport,
};
