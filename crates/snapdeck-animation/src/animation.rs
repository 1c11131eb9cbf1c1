//! Time-based animations with easing curves and spring physics.

use std::cell::RefCell;
use std::rc::Rc;

use snapdeck_core::{FrameCallbackRegistration, RuntimeHandle};
use snapdeck_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

/// Values an [`Animatable`] can drive.
///
/// Springs integrate in progress space (0 = start, 1 = target); `distance`
/// converts that progress back into value units for the rest thresholds and
/// for initial velocities.
pub trait AnimationValue: Lerp + Clone {
    fn distance(&self, other: &Self) -> f32;
}

impl AnimationValue for f32 {
    fn distance(&self, other: &Self) -> f32 {
        (other - self).abs()
    }
}

impl AnimationValue for f64 {
    fn distance(&self, other: &Self) -> f32 {
        (other - self).abs() as f32
    }
}

impl AnimationValue for Point {
    fn distance(&self, other: &Self) -> f32 {
        (*other - *self).length()
    }
}

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// CSS `ease`: cubic-bezier(0.25, 0.1, 0.25, 1).
    Ease,
    /// CSS `ease-in`: cubic-bezier(0.42, 0, 1, 1).
    EaseIn,
    /// CSS `ease-out`: cubic-bezier(0, 0, 0.58, 1).
    EaseOut,
    /// CSS `ease-in-out`: cubic-bezier(0.42, 0, 0.58, 1).
    EaseInOut,
    /// Material standard curve: cubic-bezier(0.4, 0, 0.2, 1).
    FastOutSlowInEasing,
    /// Material decelerate curve: cubic-bezier(0, 0, 0.2, 1).
    LinearOutSlowInEasing,
    /// Material accelerate curve: cubic-bezier(0.4, 0, 1, 1).
    FastOutLinearEasing,
    /// Arbitrary CSS-style cubic bezier with control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, fraction),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching x; bisection if the
    // derivative flattens out.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..24 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
///
/// Mass is folded into `stiffness` (which is stiffness per unit mass) and
/// `damping_ratio`; use [`SpringSpec::physical`] to build one from
/// stiffness / damping / mass triples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity (units/s) below which the spring may come to rest.
    pub velocity_threshold: f32,
    /// Distance (units) from the target below which the spring may come to rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped, medium stiffness.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Create a bouncy spring.
    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    /// Create a stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// Spring described the physical way: `F = -k·x - c·v` acting on `mass`.
    pub fn physical(stiffness: f32, damping: f32, mass: f32) -> Self {
        let mass = if mass > 0.0 { mass } else { 1.0 };
        let stiffness = stiffness.max(f32::EPSILON);
        Self {
            damping_ratio: damping.max(0.0) / (2.0 * (stiffness * mass).sqrt()),
            stiffness: stiffness / mass,
            velocity_threshold: 0.01,
            position_threshold: 0.01,
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Integration step for springs. Frames are split into steps of at most this
/// many seconds.
const SPRING_TIMESTEP: f32 = 1.0 / 240.0;

/// Longest frame gap a spring integrates in one go; longer stalls are
/// treated as this long.
const MAX_SPRING_FRAME_SECONDS: f32 = 0.25;

/// Generic animatable value holder.
///
/// Cloning shares the underlying animation. Starting a new animation,
/// snapping or stopping cancels the running one; a cancelled animation never
/// invokes its completion hook.
pub struct Animatable<T: AnimationValue + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: AnimationValue + 'static> {
    runtime: RuntimeHandle,
    current: T,
    start: T,
    target: T,
    /// Position in progress space: 0.0 at `start`, 1.0 at `target`.
    progress: f32,
    /// Progress units per second (springs only).
    velocity: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    run_id: u64,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
    on_finished: Option<Box<dyn FnOnce(T)>>,
}

impl<T: AnimationValue + 'static> AnimatableInner<T> {
    fn cancel_run(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        self.run_id = self.run_id.wrapping_add(1);
        self.running = false;
        self.on_finished = None;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }

    fn settle_at_target(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.progress = 1.0;
        self.velocity = 0.0;
        self.running = false;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }

    /// Returns true when the animation reached its target on this frame.
    fn step_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis * 1_000_000;
        if elapsed_nanos < delay_nanos {
            return false;
        }

        let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        self.progress = spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, self.progress);
        linear_progress >= 1.0
    }

    /// Semi-implicit Euler integration of a damped oscillator in progress
    /// space, from the previous frame to this one.
    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        let distance = self.start.distance(&self.target);
        if distance <= f32::EPSILON {
            return true;
        }

        let Some(last) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return false;
        };
        let dt = (frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0)
            .min(MAX_SPRING_FRAME_SECONDS);

        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let mut elapsed = 0.0f32;
        while elapsed < dt {
            let step = SPRING_TIMESTEP.min(dt - elapsed);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress = (self.progress + self.velocity * step).clamp(-1.0, 2.0);
            elapsed += step;
        }
        self.current = self.start.lerp(&self.target, self.progress);

        let at_rest = (self.velocity * distance).abs() < spec.velocity_threshold;
        let near_target = ((1.0 - self.progress) * distance).abs() < spec.position_threshold;
        at_rest && near_target
    }
}

impl<T: AnimationValue + 'static> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            runtime,
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            progress: 1.0,
            velocity: 0.0,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            run_id: 0,
            running: false,
            registration: None,
            on_finished: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate to the target value using the specified animation.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        self.animate(target, animation, 0.0, |_| {});
    }

    /// Animate to `target`, invoking `on_finished` with the final value once
    /// the target is reached.
    ///
    /// `initial_velocity` is in value units per second, measured along the
    /// direction from the current value toward `target` (positive = already
    /// moving toward it). Tweens ignore it.
    pub fn animate(
        &mut self,
        target: T,
        animation: AnimationType,
        initial_velocity: f32,
        on_finished: impl FnOnce(T) + 'static,
    ) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_run();

            inner.start = inner.current.clone();
            inner.target = target;
            inner.progress = 0.0;
            let distance = inner.start.distance(&inner.target);
            inner.velocity = if distance > f32::EPSILON && initial_velocity.is_finite() {
                initial_velocity / distance
            } else {
                0.0
            };
            inner.animation_type = animation;
            inner.running = true;
            inner.on_finished = Some(Box::new(on_finished));
        }

        Self::schedule_frame(&self.inner);
    }

    /// Current animated value.
    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    /// Return the animation spec currently driving this animatable.
    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&mut self, value: T) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_run();
        inner.target = value;
        inner.settle_at_target();
    }

    /// Stop any running animation where it is and return the value it had
    /// reached. The stopped animation's completion hook is discarded.
    pub fn stop(&mut self) -> T {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_run();
        let current = inner.current.clone();
        inner.target = current.clone();
        inner.start = current.clone();
        inner.progress = 1.0;
        current
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (runtime, run_id) = {
            let inner = this.borrow();
            if inner.registration.is_some() || !inner.running {
                return;
            }
            (inner.runtime.clone(), inner.run_id)
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time, run_id);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64, run_id: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            if inner.run_id != run_id || !inner.running {
                return;
            }
            inner.registration = None;

            let done = match inner.animation_type {
                AnimationType::Tween(spec) => inner.step_tween(spec, frame_time_nanos),
                AnimationType::Spring(spec) => inner.step_spring(spec, frame_time_nanos),
            };

            if done {
                inner.settle_at_target();
                let value = inner.current.clone();
                inner.on_finished.take().map(|hook| (hook, value))
            } else {
                None
            }
        };

        match finished {
            Some((hook, value)) => hook(value),
            None => Self::schedule_frame(this),
        }
    }
}

impl<T: AnimationValue + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: AnimationValue + std::fmt::Debug + 'static> std::fmt::Debug for Animatable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Animatable")
            .field("current", &inner.current)
            .field("target", &inner.target)
            .field("running", &inner.running)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
