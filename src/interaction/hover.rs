use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tuning for the hover-isolation fade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverFadeConfig {
    /// Opacity non-hovered bars settle at while a bar is active.
    pub hide_opacity: f64,
    /// Fade duration in host time units.
    pub fade_duration: f64,
}

impl Default for HoverFadeConfig {
    fn default() -> Self {
        Self {
            hide_opacity: 0.25,
            fade_duration: 1_000.0,
        }
    }
}

/// One bar's opacity transition.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f64,
    target: f64,
    elapsed: f64,
}

impl Fade {
    fn settled(opacity: f64) -> Self {
        Self {
            from: opacity,
            target: opacity,
            elapsed: 0.0,
        }
    }

    fn current(self, duration: f64) -> f64 {
        if duration <= 0.0 || self.elapsed >= duration {
            return self.target;
        }
        let t = (self.elapsed / duration).clamp(0.0, 1.0);
        self.from + (self.target - self.from) * t
    }

    fn retarget(&mut self, target: f64, duration: f64) {
        let current = self.current(duration);
        self.from = current;
        self.target = target;
        self.elapsed = 0.0;
    }
}

/// Hover isolation state machine.
///
/// Each rendered bar is `idle` or `active`. Pointer-enter makes the target
/// bar active and fades every other bar down to `hide_opacity`; pointer-leave
/// fades non-active bars back to full opacity and returns the bar to idle.
/// At most one bar is active at a time; enter/leave events arrive serialized
/// from the host's single-threaded dispatch, so no extra locking exists.
///
/// When hover isolation is disabled the controller attaches no state and all
/// bars report full opacity permanently.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverController {
    enabled: bool,
    config: HoverFadeConfig,
    bars: IndexMap<String, Fade>,
    active: Option<String>,
}

impl HoverController {
    #[must_use]
    pub fn new(enabled: bool, config: HoverFadeConfig) -> Self {
        Self {
            enabled,
            config,
            bars: IndexMap::new(),
            active: None,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Rebinds the controller to a fresh layout's bars.
    ///
    /// The hovered id resets to none; every bar starts idle at full opacity.
    pub fn attach(&mut self, bar_ids: impl IntoIterator<Item = String>) {
        self.active = None;
        self.bars.clear();
        if !self.enabled {
            return;
        }
        for id in bar_ids {
            self.bars.insert(id, Fade::settled(1.0));
        }
    }

    pub fn pointer_enter(&mut self, bar_id: &str) {
        if !self.enabled || !self.bars.contains_key(bar_id) {
            return;
        }

        self.active = Some(bar_id.to_owned());
        let duration = self.config.fade_duration;
        let hide = self.config.hide_opacity;
        for (id, fade) in &mut self.bars {
            let target = if id.as_str() == bar_id { 1.0 } else { hide };
            fade.retarget(target, duration);
        }
    }

    pub fn pointer_leave(&mut self, bar_id: &str) {
        if !self.enabled || !self.bars.contains_key(bar_id) {
            return;
        }

        let duration = self.config.fade_duration;
        let active = self.active.clone();
        for (id, fade) in &mut self.bars {
            if active.as_deref() != Some(id.as_str()) {
                fade.retarget(1.0, duration);
            }
        }
        if self.active.as_deref() == Some(bar_id) {
            self.active = None;
            if let Some(fade) = self.bars.get_mut(bar_id) {
                fade.retarget(1.0, duration);
            }
        }
    }

    /// Advances all fades; returns `true` while any opacity is still moving.
    pub fn step(&mut self, delta: f64) -> bool {
        if !self.enabled || delta <= 0.0 {
            return false;
        }

        let duration = self.config.fade_duration;
        let mut moving = false;
        for fade in self.bars.values_mut() {
            if fade.current(duration) != fade.target {
                moving = true;
            }
            fade.elapsed += delta;
        }
        moving
    }

    /// Current opacity of a bar; unknown ids and disabled hover report 1.0.
    #[must_use]
    pub fn opacity_of(&self, bar_id: &str) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        self.bars
            .get(bar_id)
            .map_or(1.0, |fade| fade.current(self.config.fade_duration))
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        let duration = self.config.fade_duration;
        self.bars
            .values()
            .all(|fade| fade.current(duration) == fade.target)
    }

    /// Releases all per-bar state and the active id.
    pub fn dispose(&mut self) {
        self.bars.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverController, HoverFadeConfig};

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("bar-{i}")).collect()
    }

    fn controller() -> HoverController {
        let mut hover = HoverController::new(true, HoverFadeConfig::default());
        hover.attach(ids(4));
        hover
    }

    #[test]
    fn enter_dims_all_but_the_active_bar() {
        let mut hover = controller();
        hover.pointer_enter("bar-1");
        hover.step(1_000.0);

        assert!(hover.is_settled());
        assert_eq!(hover.opacity_of("bar-1"), 1.0);
        for other in ["bar-0", "bar-2", "bar-3"] {
            assert_eq!(hover.opacity_of(other), 0.25);
        }
    }

    #[test]
    fn leave_restores_full_opacity() {
        let mut hover = controller();
        hover.pointer_enter("bar-1");
        hover.step(1_000.0);
        hover.pointer_leave("bar-1");
        hover.step(1_000.0);

        assert!(hover.active_id().is_none());
        for id in ids(4) {
            assert_eq!(hover.opacity_of(&id), 1.0);
        }
    }

    #[test]
    fn fade_is_gradual_before_it_settles() {
        let mut hover = controller();
        hover.pointer_enter("bar-0");
        hover.step(500.0);

        let mid = hover.opacity_of("bar-2");
        assert!(mid > 0.25 && mid < 1.0);
        assert!(!hover.is_settled());
    }

    #[test]
    fn entering_a_new_bar_supersedes_the_previous_active() {
        let mut hover = controller();
        hover.pointer_enter("bar-0");
        hover.step(1_000.0);
        hover.pointer_leave("bar-0");
        hover.pointer_enter("bar-2");
        hover.step(1_000.0);

        assert_eq!(hover.active_id(), Some("bar-2"));
        assert_eq!(hover.opacity_of("bar-2"), 1.0);
        assert_eq!(hover.opacity_of("bar-0"), 0.25);
    }

    #[test]
    fn disabled_hover_attaches_nothing_and_stays_opaque() {
        let mut hover = HoverController::new(false, HoverFadeConfig::default());
        hover.attach(ids(3));
        hover.pointer_enter("bar-0");
        hover.step(1_000.0);

        for id in ids(3) {
            assert_eq!(hover.opacity_of(&id), 1.0);
        }
        assert!(hover.active_id().is_none());
    }

    #[test]
    fn attach_resets_hovered_id_and_opacity() {
        let mut hover = controller();
        hover.pointer_enter("bar-1");
        hover.step(1_000.0);
        hover.attach(ids(4));

        assert!(hover.active_id().is_none());
        for id in ids(4) {
            assert_eq!(hover.opacity_of(&id), 1.0);
        }
    }
}
