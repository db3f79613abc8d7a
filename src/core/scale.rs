use crate::error::{TimelineError, TimelineResult};

/// Linear domain-to-pixel mapping with an explicit pixel range.
///
/// Values outside the domain extrapolate linearly; clamping is never applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> TimelineResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }

        if domain_start == domain_end {
            return Err(TimelineError::InvalidData(
                "scale domain must not be degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
