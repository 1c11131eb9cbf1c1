use std::rc::Rc;

use snapdeck_animation::SnapAnimator;
use snapdeck_core::{HapticFeedback, NoHaptics, RuntimeHandle};
use snapdeck_foundation::{
    decide_commit, rubber_band, AxisDirection, CommitDecision, DragTracker, PointerEvent,
    PointerEventKind, PointerInputTarget,
};

use super::appearance::{item_appearance, ItemAppearance};
use super::config::CarouselConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// No usable container measurement yet.
    Measuring,
    /// Measured, but there are no items.
    Empty,
    Idle,
    Dragging,
    Settling,
}

/// Completion events reported by the carousel's animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    SettleComplete(usize),
}

/// Snapshot of the carousel's gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub raw_delta: f32,
    /// Track offset relative to the current index's resting offset.
    pub displayed_delta: f32,
    pub is_dragging: bool,
    pub is_animating: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    /// Vertical translation of the whole track.
    pub offset: f32,
    pub item_extent: f32,
    /// Trailing spacer so the last item can scroll fully into place.
    pub spacer_extent: f32,
    pub items: Vec<ItemAppearance>,
    pub indicator: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselView {
    /// Container not measured yet; show a loading placeholder.
    Placeholder,
    /// Nothing to show; static, non-interactive.
    Empty,
    Track(TrackView),
}

/// Drag-to-snap vertical carousel.
///
/// Items are stacked vertically, each `container * (1 - peek)` tall so the
/// top of the next item peeks in below the current one. A vertical drag
/// moves the track; on release the carousel settles on the current, next or
/// previous item. The authoritative index only changes once a settle has
/// completed.
pub struct CarouselController {
    config: CarouselConfig,
    item_count: usize,
    current_index: usize,
    container_extent: f32,
    phase: CarouselPhase,
    tracker: DragTracker,
    raw_delta: f32,
    displayed_delta: f32,
    /// Offset, relative to rest, inherited from an interrupted settle.
    drag_base: f32,
    settle_target: Option<usize>,
    animator: SnapAnimator<f32, CarouselEvent>,
    haptics: Rc<dyn HapticFeedback>,
    on_index_change: Option<Box<dyn FnMut(usize)>>,
}

impl CarouselController {
    pub fn new(runtime: RuntimeHandle, item_count: usize, config: CarouselConfig) -> Self {
        let current_index = config.initial_index.min(item_count.saturating_sub(1));
        Self {
            config,
            item_count,
            current_index,
            container_extent: 0.0,
            phase: CarouselPhase::Measuring,
            tracker: DragTracker::new(),
            raw_delta: 0.0,
            displayed_delta: 0.0,
            drag_base: 0.0,
            settle_target: None,
            animator: SnapAnimator::new(0.0, runtime),
            haptics: Rc::new(NoHaptics),
            on_index_change: None,
        }
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn with_on_index_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.set_on_index_change(callback);
        self
    }

    /// Called once per settled index change, after the settle animation.
    pub fn set_on_index_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_index_change = Some(Box::new(callback));
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_measured(&self) -> bool {
        self.container_extent > 0.0
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self.phase, CarouselPhase::Measuring | CarouselPhase::Empty)
    }

    pub fn item_extent(&self) -> f32 {
        self.container_extent * (1.0 - self.config.peek_amount)
    }

    pub fn peek_extent(&self) -> f32 {
        self.container_extent * self.config.peek_amount
    }

    /// Height of the whole track including the trailing spacer.
    pub fn content_extent(&self) -> f32 {
        self.item_count as f32 * self.item_extent() + self.peek_extent()
    }

    /// Track offset at which `index` rests.
    pub fn rest_offset(&self, index: usize) -> f32 {
        -(index as f32) * self.item_extent()
    }

    /// Current track offset.
    pub fn offset(&self) -> f32 {
        match self.phase {
            CarouselPhase::Measuring | CarouselPhase::Empty => 0.0,
            CarouselPhase::Idle => self.rest_offset(self.current_index),
            CarouselPhase::Dragging => {
                self.rest_offset(self.current_index) + self.drag_base + self.displayed_delta
            }
            CarouselPhase::Settling => self.animator.value(),
        }
    }

    pub fn state(&self) -> CarouselState {
        let displayed_delta = match self.phase {
            CarouselPhase::Dragging | CarouselPhase::Settling => {
                self.offset() - self.rest_offset(self.current_index)
            }
            _ => 0.0,
        };
        CarouselState {
            current_index: self.current_index,
            raw_delta: self.raw_delta,
            displayed_delta,
            is_dragging: self.phase == CarouselPhase::Dragging,
            is_animating: self.phase == CarouselPhase::Settling,
        }
    }

    /// Position indicator, e.g. `"2 / 5"`.
    pub fn indicator_text(&self) -> String {
        format!(
            "{} / {}",
            (self.current_index + 1).min(self.item_count),
            self.item_count
        )
    }

    pub fn item_appearance(&self, index: usize) -> ItemAppearance {
        item_appearance(
            index,
            self.current_index,
            self.phase == CarouselPhase::Dragging,
            self.item_extent(),
        )
    }

    pub fn view(&self) -> CarouselView {
        match self.phase {
            CarouselPhase::Measuring => CarouselView::Placeholder,
            CarouselPhase::Empty => CarouselView::Empty,
            _ => CarouselView::Track(TrackView {
                offset: self.offset(),
                item_extent: self.item_extent(),
                spacer_extent: self.peek_extent(),
                items: (0..self.item_count)
                    .map(|index| self.item_appearance(index))
                    .collect(),
                indicator: self.indicator_text(),
            }),
        }
    }

    /// Reports the container height. Zero, negative or non-finite values
    /// mean the container is not laid out yet.
    pub fn measure(&mut self, container_extent: f32) {
        if !(container_extent.is_finite() && container_extent > 0.0) {
            if !container_extent.is_finite() || container_extent < 0.0 {
                log::warn!("ignoring invalid carousel measurement {}", container_extent);
            }
            if self.phase != CarouselPhase::Measuring {
                self.tracker.reset();
                self.animator.interrupt();
                self.clear_drag();
                self.settle_target = None;
            }
            self.container_extent = 0.0;
            self.phase = CarouselPhase::Measuring;
            return;
        }

        self.container_extent = container_extent;
        match self.phase {
            CarouselPhase::Measuring | CarouselPhase::Empty | CarouselPhase::Idle => {
                self.phase = if self.item_count == 0 {
                    CarouselPhase::Empty
                } else {
                    CarouselPhase::Idle
                };
                self.animator.jump_to(self.rest_offset(self.current_index));
            }
            CarouselPhase::Settling => {
                if let Some(target) = self.settle_target {
                    let from = self.animator.value();
                    self.start_settle(from, target, 0.0);
                }
            }
            CarouselPhase::Dragging => {}
        }
        log::debug!(
            "carousel measured {}px, item extent {}px",
            container_extent,
            self.item_extent()
        );
    }

    /// Swaps in a collection of `item_count` items, clamping the index.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if item_count == 0 {
            self.tracker.reset();
            self.animator.interrupt();
            self.clear_drag();
            self.settle_target = None;
            self.current_index = 0;
            self.phase = if self.is_measured() {
                CarouselPhase::Empty
            } else {
                CarouselPhase::Measuring
            };
            return;
        }

        let last = item_count - 1;
        self.current_index = self.current_index.min(last);
        match self.phase {
            CarouselPhase::Empty | CarouselPhase::Idle => {
                self.phase = CarouselPhase::Idle;
                self.animator.jump_to(self.rest_offset(self.current_index));
            }
            CarouselPhase::Settling => {
                let target = self.settle_target.unwrap_or(self.current_index).min(last);
                let from = self.animator.value();
                self.start_settle(from, target, 0.0);
            }
            CarouselPhase::Measuring | CarouselPhase::Dragging => {}
        }
    }

    /// Moves to `index` programmatically. Returns `false` while measuring,
    /// empty or dragging.
    ///
    /// An animated move completes like a gesture settle; an immediate one
    /// applies the index change (haptic and notification included) at once.
    pub fn snap_to_index(&mut self, index: usize, animated: bool) -> bool {
        if !matches!(self.phase, CarouselPhase::Idle | CarouselPhase::Settling) {
            return false;
        }
        let target = index.min(self.item_count.saturating_sub(1));
        let from = self.offset();
        if animated {
            self.start_settle(from, target, 0.0);
        } else {
            self.animator.jump_to(self.rest_offset(target));
            self.finish_settle(target);
        }
        true
    }

    fn clear_drag(&mut self) {
        self.raw_delta = 0.0;
        self.displayed_delta = 0.0;
        self.drag_base = 0.0;
    }

    /// Raw delta to displayed delta. Whatever part of the drag would carry
    /// the track past the first or last item rubber-bands; the rest follows
    /// the configured resistance.
    fn resist(&self, raw: f32) -> f32 {
        let linear = self.config.drag_resistance().apply(raw);
        let start = self.rest_offset(self.current_index) + self.drag_base;
        // A drag that starts out of bounds (a grabbed overshoot) is only
        // resisted beyond where it started.
        let upper = start.max(0.0);
        let lower = start.min(self.rest_offset(self.item_count.saturating_sub(1)));
        let position = start + linear;
        if position > upper {
            let overshoot = position - upper;
            linear - overshoot + rubber_band(overshoot)
        } else if position < lower {
            let overshoot = position - lower;
            linear - overshoot + rubber_band(overshoot)
        } else {
            linear
        }
    }

    fn start_settle(&mut self, from: f32, target: usize, velocity: f32) {
        let to = self.rest_offset(target);
        let toward_target = if to > from {
            velocity
        } else if to < from {
            -velocity
        } else {
            0.0
        };
        self.animator.jump_to(from);
        self.animator.settle(
            to,
            self.config.settle,
            toward_target,
            CarouselEvent::SettleComplete(target),
        );
        self.clear_drag();
        self.settle_target = Some(target);
        self.phase = CarouselPhase::Settling;
        log::debug!(
            "carousel settling {} -> {} (offset {} -> {})",
            self.current_index,
            target,
            from,
            to
        );
    }

    fn finish_settle(&mut self, target: usize) {
        self.phase = CarouselPhase::Idle;
        self.settle_target = None;
        let changed = target != self.current_index;
        self.current_index = target;
        if changed {
            log::debug!("carousel index changed to {}", target);
            self.haptics.pulse(self.config.haptic_ms);
            if let Some(callback) = self.on_index_change.as_mut() {
                callback(target);
            }
        }
    }

    fn process_completions(&mut self) {
        for event in self.animator.drain_completed() {
            match event {
                CarouselEvent::SettleComplete(target) => {
                    if self.phase == CarouselPhase::Settling
                        && self.settle_target == Some(target)
                    {
                        self.finish_settle(target);
                    }
                }
            }
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        self.process_completions();
        if !matches!(self.phase, CarouselPhase::Idle | CarouselPhase::Settling) {
            return false;
        }
        if !self.tracker.on_down(event) {
            return false;
        }
        self.clear_drag();
        if self.phase == CarouselPhase::Settling {
            let interrupted = self.animator.interrupt();
            self.drag_base = interrupted - self.rest_offset(self.current_index);
            self.settle_target = None;
            log::debug!("carousel settle interrupted at {}", interrupted);
        }
        self.phase = CarouselPhase::Dragging;
        true
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        if self.phase != CarouselPhase::Dragging {
            return false;
        }
        let Some(delta) = self.tracker.on_move(event) else {
            return false;
        };
        self.raw_delta = delta.y;
        self.displayed_delta = self.resist(delta.y);
        log::trace!(
            "carousel drag raw {} displayed {}",
            self.raw_delta,
            self.displayed_delta
        );
        true
    }

    fn on_release(&mut self, event: &PointerEvent) -> bool {
        if self.phase != CarouselPhase::Dragging {
            return false;
        }
        let release = if event.kind == PointerEventKind::Cancel {
            self.tracker.on_cancel(event)
        } else {
            self.tracker.on_up(event)
        };
        let Some(release) = release else {
            return false;
        };

        self.raw_delta = release.delta.y;
        self.displayed_delta = self.resist(release.delta.y);
        let effective = self.drag_base + self.displayed_delta;
        let velocity = release.velocity.y;
        let last = self.item_count.saturating_sub(1);
        let target = match decide_commit(effective, velocity, &self.config.thresholds()) {
            CommitDecision::Commit(AxisDirection::Negative) => (self.current_index + 1).min(last),
            CommitDecision::Commit(AxisDirection::Positive) => self.current_index.saturating_sub(1),
            CommitDecision::SnapBack => self.current_index,
        };
        log::debug!(
            "carousel release: delta {} velocity {} cancelled {} -> target {}",
            effective,
            velocity,
            release.cancelled,
            target
        );

        let from = self.rest_offset(self.current_index) + effective;
        self.start_settle(from, target, velocity);
        true
    }
}

impl PointerInputTarget for CarouselController {
    fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_release(event),
        }
    }

    fn on_frame(&mut self) {
        self.process_completions();
    }

    fn is_idle(&self) -> bool {
        !matches!(
            self.phase,
            CarouselPhase::Dragging | CarouselPhase::Settling
        )
    }
}

impl std::fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("item_count", &self.item_count)
            .field("container_extent", &self.container_extent)
            .field("offset", &self.offset())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/carousel_tests.rs"]
mod tests;
