use tracing::{debug, trace};

use crate::api::frame_builder::{FrameLayout, build_frame, build_layout};
use crate::api::validation::validate_dataset;
use crate::api::TimelineConfig;
use crate::core::text::{CharWidthMeasurer, TextMeasurer};
use crate::core::{Clock, Dataset};
use crate::error::TimelineResult;
use crate::interaction::{GrowAnimation, HoverController, HoverFadeConfig, ReflowController};
use crate::render::{RenderFrame, Renderer};

/// Day-column timeline engine.
///
/// Owns the renderer, the current dataset and the interaction controllers.
/// Rendering is synchronous and fire-and-forget: [`TimelineEngine::render`]
/// replaces the whole scene and returns nothing beyond success. The clock is
/// injected per call so "today" and the current-time marker stay
/// deterministic under test.
pub struct TimelineEngine<R: Renderer> {
    renderer: R,
    config: TimelineConfig,
    dataset: Dataset,
    measurer: Box<dyn TextMeasurer>,
    hover: HoverController,
    animation: GrowAnimation,
    reflow: ReflowController,
    layout: Option<FrameLayout>,
}

impl<R: Renderer> TimelineEngine<R> {
    pub fn new(renderer: R, config: TimelineConfig) -> TimelineResult<Self> {
        config.validate()?;

        Ok(Self {
            renderer,
            dataset: Dataset::default(),
            measurer: Box::new(CharWidthMeasurer::default()),
            hover: HoverController::new(
                config.hide_on_hover,
                HoverFadeConfig {
                    hide_opacity: config.hide_opacity,
                    fade_duration: config.hover_fade_duration,
                },
            ),
            animation: GrowAnimation::new(config.animate, config.grow_duration),
            reflow: ReflowController::new(config.reflow_debounce),
            layout: None,
            config,
        })
    }

    /// Swaps in a host-provided text measurer (for example one backed by the
    /// render surface's real font machinery).
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Replaces the configuration and rebuilds the interaction controllers.
    pub fn set_config(&mut self, config: TimelineConfig) -> TimelineResult<()> {
        config.validate()?;
        self.config = config;
        self.hover = HoverController::new(
            config.hide_on_hover,
            HoverFadeConfig {
                hide_opacity: config.hide_opacity,
                fade_duration: config.hover_fade_duration,
            },
        );
        self.animation = GrowAnimation::new(config.animate, config.grow_duration);
        self.reflow = ReflowController::new(config.reflow_debounce);
        self.layout = None;
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Replaces the dataset; rejects mixed column shapes at the boundary.
    pub fn set_dataset(&mut self, dataset: Dataset) -> TimelineResult<()> {
        validate_dataset(&dataset)?;
        self.dataset = dataset;
        self.layout = None;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn hover(&self) -> &HoverController {
        &self.hover
    }

    #[must_use]
    pub fn layout(&self) -> Option<&FrameLayout> {
        self.layout.as_ref()
    }

    /// Runs a full render pass: layout, hover rebind, animation restart,
    /// paint.
    ///
    /// Identical dataset, config, viewport and clock reading produce an
    /// identical frame; the pass clears and redraws rather than diffing.
    pub fn render(&mut self, clock: &dyn Clock) -> TimelineResult<()> {
        let now = clock.now();
        let layout = build_layout(&self.dataset, &self.config, now, self.measurer.as_ref())?;

        debug!(
            columns = self.dataset.column_count(),
            bars = layout.bars.len(),
            marker = layout.marker.is_some(),
            "layout pass"
        );

        self.hover.attach(layout.bars.iter().map(|bar| bar.id.clone()));
        self.animation.restart();

        let frame = build_frame(&layout, &self.config, &self.hover, &self.animation);
        self.renderer.render(&frame)?;
        self.layout = Some(layout);
        Ok(())
    }

    /// Builds the frame for the current layout and interaction state without
    /// re-running layout. Returns `None` before the first render.
    #[must_use]
    pub fn current_frame(&self) -> Option<RenderFrame> {
        self.layout
            .as_ref()
            .map(|layout| build_frame(layout, &self.config, &self.hover, &self.animation))
    }

    /// Pointer entered the bar with the given id.
    pub fn pointer_enter(&mut self, bar_id: &str) {
        self.hover.pointer_enter(bar_id);
    }

    /// Pointer left the bar with the given id.
    pub fn pointer_leave(&mut self, bar_id: &str) {
        self.hover.pointer_leave(bar_id);
    }

    /// Raw container width change; debounced by the reflow controller.
    pub fn notify_resize(&mut self, width: u32) {
        self.reflow.notify_resize(width);
    }

    /// Advances timers by `delta` and repaints if anything moved.
    ///
    /// A debounce expiry adopts the settled width and re-runs the full layout
    /// pass; hover fades and the grow transition only repaint the cached
    /// layout. Returns `true` when a paint happened.
    pub fn tick(&mut self, delta: f64, clock: &dyn Clock) -> TimelineResult<bool> {
        if let Some(width) = self.reflow.step(delta) {
            trace!(width, "debounced reflow");
            self.config.viewport.width = width;
            self.render(clock)?;
            return Ok(true);
        }

        let animating = self.animation.step(delta);
        let fading = self.hover.step(delta);
        if !animating && !fading {
            return Ok(false);
        }

        if let Some(frame) = self.current_frame() {
            self.renderer.render(&frame)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Releases interaction state and pending timers.
    ///
    /// Hosts must call this at teardown; pending debounce/fade timers and the
    /// hovered id do not outlive it.
    pub fn dispose(&mut self) {
        self.hover.dispose();
        self.reflow.dispose();
        self.layout = None;
    }
}
