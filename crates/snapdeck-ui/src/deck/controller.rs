use std::cell::Cell;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;
use snapdeck_animation::SnapAnimator;
use snapdeck_core::{FrameBarrier, FrameClock, HapticFeedback, NoHaptics, RuntimeHandle};
use snapdeck_foundation::{
    decide_commit, saturating, AxisDirection, CommitDecision, DragTracker, PointerEvent,
    PointerEventKind, PointerInputTarget,
};
use snapdeck_ui_graphics::Point;

use super::appearance::{card_appearance, progress_text, CardAppearance, NextCardAppearance};
use super::config::DeckConfig;
use super::review::{Decision, ReviewItem, Selection};
use crate::error::DeckError;

/// Frames the settle transition stays disabled after a card leaves, so the
/// next card appears in place instead of animating in.
pub const TRANSITION_SUPPRESS_FRAMES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn decision(self) -> Decision {
        match self {
            SwipeDirection::Right => Decision::Accepted,
            SwipeDirection::Left => Decision::Rejected,
        }
    }

    fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

impl From<AxisDirection> for SwipeDirection {
    fn from(direction: AxisDirection) -> Self {
        match direction {
            AxisDirection::Negative => SwipeDirection::Left,
            AxisDirection::Positive => SwipeDirection::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    /// Top card at rest, or springing back after a short drag.
    Showing,
    Dragging,
    Exiting(SwipeDirection),
    /// Every card swiped; the review list is available.
    Exhausted,
    Confirmed,
}

/// Completion events reported by the deck's animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    ExitComplete(SwipeDirection),
    SnapBackComplete,
}

/// Swipe-to-triage card deck.
///
/// The top card follows horizontal drags (with a saturating curve) and a
/// little vertical drift. Releasing past the direction's threshold flies the
/// card off-screen: right accepts, left rejects. Once every card is swiped
/// the deck is exhausted and exposes a review list whose decisions can be
/// toggled before confirming.
pub struct TriageDeck<Id>
where
    Id: Clone + Eq + Hash + Debug + 'static,
{
    config: DeckConfig,
    items: Vec<Id>,
    current_index: usize,
    statuses: IndexMap<Id, Decision>,
    phase: DeckPhase,
    tracker: DragTracker,
    raw_delta: Point,
    /// Offset inherited from an interrupted snap-back.
    drag_base: Point,
    threshold_haptic_fired: bool,
    viewport_width: f32,
    animator: SnapAnimator<Point, DeckEvent>,
    clock: FrameClock,
    transition_suppressed: Rc<Cell<bool>>,
    suppress_barrier: Option<FrameBarrier>,
    haptics: Rc<dyn HapticFeedback>,
}

impl<Id> TriageDeck<Id>
where
    Id: Clone + Eq + Hash + Debug + 'static,
{
    pub fn new(runtime: RuntimeHandle, items: Vec<Id>, config: DeckConfig) -> Self {
        let phase = if items.is_empty() {
            DeckPhase::Exhausted
        } else {
            DeckPhase::Showing
        };
        Self {
            config,
            items,
            current_index: 0,
            statuses: IndexMap::new(),
            phase,
            tracker: DragTracker::new(),
            raw_delta: Point::ZERO,
            drag_base: Point::ZERO,
            threshold_haptic_fired: false,
            viewport_width: 0.0,
            animator: SnapAnimator::new(Point::ZERO, runtime.clone()),
            clock: runtime.frame_clock(),
            transition_suppressed: Rc::new(Cell::new(false)),
            suppress_barrier: None,
            haptics: Rc::new(NoHaptics),
        }
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.set_viewport_width(width);
        self
    }

    /// Width used to compute how far a card flies. Invalid values count as 0.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.phase, DeckPhase::Exhausted | DeckPhase::Confirmed)
    }

    pub fn current_item(&self) -> Option<&Id> {
        self.items.get(self.current_index)
    }

    pub fn next_item(&self) -> Option<&Id> {
        self.items.get(self.current_index + 1)
    }

    /// Decision recorded for `id`, if it has been swiped or toggled.
    pub fn status(&self, id: &Id) -> Option<Decision> {
        self.statuses.get(id).copied()
    }

    pub fn raw_delta(&self) -> Point {
        self.raw_delta
    }

    /// Where the top card is drawn, relative to its resting position.
    pub fn displayed_offset(&self) -> Point {
        match self.phase {
            DeckPhase::Dragging => self.drag_base + self.resist(self.raw_delta),
            _ => self.animator.value(),
        }
    }

    pub fn exit_direction(&self) -> Option<SwipeDirection> {
        match self.phase {
            DeckPhase::Exiting(direction) => Some(direction),
            _ => None,
        }
    }

    /// False while dragging and for the frame right after a card left.
    pub fn transition_enabled(&self) -> bool {
        self.phase != DeckPhase::Dragging && !self.transition_suppressed.get()
    }

    /// Appearance of the top card; `None` once exhausted.
    pub fn card_appearance(&self) -> Option<CardAppearance> {
        self.current_item()?;
        Some(card_appearance(
            self.displayed_offset(),
            self.exit_direction().is_some(),
            self.transition_enabled(),
            &self.config,
        ))
    }

    /// Appearance of the card behind the top one, if there is one.
    pub fn next_card_appearance(&self) -> Option<NextCardAppearance> {
        self.next_item().map(|_| NextCardAppearance::default())
    }

    pub fn progress_text(&self) -> String {
        progress_text(self.current_index, self.items.len())
    }

    /// Every card in deck order with its decision; unswiped or untouched
    /// cards read as rejected.
    pub fn review_list(&self) -> Result<Vec<ReviewItem<Id>>, DeckError> {
        self.ensure_reviewable()?;
        Ok(self
            .items
            .iter()
            .map(|id| ReviewItem {
                id: id.clone(),
                decision: self.status(id).unwrap_or(Decision::Rejected),
            })
            .collect())
    }

    /// Flips the decision for `id` and returns the new one. The index does
    /// not move.
    pub fn toggle(&mut self, id: &Id) -> Result<Decision, DeckError> {
        self.ensure_reviewable()?;
        if !self.items.contains(id) {
            return Err(DeckError::UnknownItem {
                id: format!("{id:?}"),
            });
        }
        let decision = self
            .statuses
            .entry(id.clone())
            .or_insert(Decision::Rejected);
        *decision = decision.toggled();
        log::debug!("review toggled {:?} to {:?}", id, decision);
        Ok(*decision)
    }

    /// Finalizes the review and returns the selection.
    pub fn confirm(&mut self) -> Result<Selection<Id>, DeckError> {
        let list = self.review_list()?;
        self.phase = DeckPhase::Confirmed;
        let (accepted, rejected): (Vec<_>, Vec<_>) = list
            .into_iter()
            .partition(|item| item.decision.is_accepted());
        let selection = Selection {
            accepted: accepted.into_iter().map(|item| item.id).collect(),
            rejected: rejected.into_iter().map(|item| item.id).collect(),
        };
        log::info!(
            "deck confirmed: {} accepted, {} rejected",
            selection.accepted.len(),
            selection.rejected.len()
        );
        Ok(selection)
    }

    fn ensure_reviewable(&self) -> Result<(), DeckError> {
        match self.phase {
            DeckPhase::Exhausted => Ok(()),
            DeckPhase::Confirmed => Err(DeckError::AlreadyConfirmed),
            _ => Err(DeckError::NotExhausted {
                index: self.current_index,
                count: self.items.len(),
            }),
        }
    }

    fn resist(&self, raw: Point) -> Point {
        let vertical = (raw.y * self.config.vertical_scale)
            .clamp(-self.config.vertical_limit, self.config.vertical_limit);
        Point::new(saturating(raw.x, self.config.saturation), vertical)
    }

    fn exit_distance(&self) -> f32 {
        self.viewport_width + self.config.exit_margin
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        self.process_completions();
        if self.phase != DeckPhase::Showing {
            return false;
        }
        if !self.tracker.on_down(event) {
            return false;
        }
        self.drag_base = if self.animator.is_animating() {
            self.animator.interrupt()
        } else {
            Point::ZERO
        };
        self.raw_delta = Point::ZERO;
        self.threshold_haptic_fired = false;
        self.phase = DeckPhase::Dragging;
        true
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        if self.phase != DeckPhase::Dragging {
            return false;
        }
        let Some(delta) = self.tracker.on_move(event) else {
            return false;
        };
        self.raw_delta = delta;
        let displayed_x = self.displayed_offset().x;
        if !self.threshold_haptic_fired
            && displayed_x != 0.0
            && displayed_x.abs() >= self.config.threshold_for(displayed_x)
        {
            self.haptics.pulse(self.config.haptic_ms);
            self.threshold_haptic_fired = true;
        }
        true
    }

    fn on_release(&mut self, event: &PointerEvent) -> bool {
        if self.phase != DeckPhase::Dragging {
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
        self.raw_delta = release.delta;
        let displayed = self.displayed_offset();

        match decide_commit(displayed.x, release.velocity.x, &self.config.thresholds()) {
            CommitDecision::Commit(direction) => {
                let direction = SwipeDirection::from(direction);
                let off_screen = Point::new(direction.sign() * self.exit_distance(), displayed.y);
                log::debug!(
                    "card {} leaving {:?} from {:?}",
                    self.current_index,
                    direction,
                    displayed
                );
                self.animator.exit(
                    displayed,
                    off_screen,
                    self.config.exit,
                    DeckEvent::ExitComplete(direction),
                );
                self.phase = DeckPhase::Exiting(direction);
            }
            CommitDecision::SnapBack => {
                log::debug!("card {} snapping back from {:?}", self.current_index, displayed);
                self.animator.jump_to(displayed);
                self.animator.settle(
                    Point::ZERO,
                    self.config.snap_back,
                    0.0,
                    DeckEvent::SnapBackComplete,
                );
                self.phase = DeckPhase::Showing;
            }
        }
        self.drag_base = Point::ZERO;
        true
    }

    fn process_completions(&mut self) {
        for event in self.animator.drain_completed() {
            match event {
                DeckEvent::ExitComplete(direction) => self.finish_exit(direction),
                DeckEvent::SnapBackComplete => {
                    log::trace!("card {} back at rest", self.current_index);
                }
            }
        }
    }

    fn finish_exit(&mut self, direction: SwipeDirection) {
        if self.phase != DeckPhase::Exiting(direction) {
            return;
        }
        let Some(id) = self.items.get(self.current_index).cloned() else {
            return;
        };
        let decision = direction.decision();
        log::debug!("card {:?} {:?}", id, decision);
        self.statuses.insert(id, decision);
        self.current_index += 1;
        self.raw_delta = Point::ZERO;
        self.threshold_haptic_fired = false;
        self.animator.jump_to(Point::ZERO);

        self.transition_suppressed.set(true);
        let suppressed = Rc::clone(&self.transition_suppressed);
        self.suppress_barrier = Some(
            self.clock
                .with_frame_barrier(TRANSITION_SUPPRESS_FRAMES, move |_| suppressed.set(false)),
        );

        self.phase = if self.current_index >= self.items.len() {
            log::info!("deck exhausted after {} cards", self.items.len());
            DeckPhase::Exhausted
        } else {
            DeckPhase::Showing
        };
    }
}

impl<Id> PointerInputTarget for TriageDeck<Id>
where
    Id: Clone + Eq + Hash + Debug + 'static,
{
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
        !matches!(self.phase, DeckPhase::Dragging | DeckPhase::Exiting(_))
            && !self.animator.is_animating()
            && !self.transition_suppressed.get()
    }
}

impl<Id> std::fmt::Debug for TriageDeck<Id>
where
    Id: Clone + Eq + Hash + Debug + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageDeck")
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("len", &self.items.len())
            .field("statuses", &self.statuses)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/deck_tests.rs"]
mod tests;
