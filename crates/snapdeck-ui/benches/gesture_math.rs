use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snapdeck_core::Runtime;
use snapdeck_foundation::{rubber_band, saturating, PointerEvent, PointerInputTarget, VelocityTracker};
use snapdeck_ui::{CarouselConfig, CarouselController, DeckConfig, TriageDeck};
use snapdeck_ui_graphics::Point;

const MOVES_PER_DRAG: usize = 60;
const SAMPLE_COUNTS: &[usize] = &[8, 32, 128];

fn bench_resistance(c: &mut Criterion) {
    c.bench_function("saturating_and_rubber_band", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for step in -200..200 {
                let d = black_box(step as f32 * 2.5);
                sum += saturating(d, 500.0) + rubber_band(d);
            }
            black_box(sum)
        })
    });
}

fn bench_velocity(c: &mut Criterion) {
    let mut group = c.benchmark_group("velocity_tracker");
    for &samples in SAMPLE_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &samples| {
            b.iter(|| {
                let mut tracker = VelocityTracker::new();
                for i in 0..samples {
                    tracker.add_position(i as u64 * 8, Point::new(i as f32 * 3.0, i as f32));
                }
                black_box(tracker.calculate_velocity())
            })
        });
    }
    group.finish();
}

fn bench_carousel_drag(c: &mut Criterion) {
    c.bench_function("carousel_drag_moves", |b| {
        let runtime = Runtime::default();
        let mut carousel =
            CarouselController::new(runtime.handle(), 5, CarouselConfig::default());
        carousel.measure(800.0);
        b.iter(|| {
            carousel.on_pointer_event(&PointerEvent::down(Point::new(200.0, 500.0), 0));
            for step in 1..=MOVES_PER_DRAG {
                let y = 500.0 - step as f32;
                carousel.on_pointer_event(&PointerEvent::moved(Point::new(200.0, y), step as u64 * 4));
                black_box(carousel.offset());
            }
            // Cancel via a reset measurement so each iteration starts idle.
            carousel.measure(0.0);
            carousel.measure(800.0);
        })
    });
}

fn bench_deck_drag(c: &mut Criterion) {
    c.bench_function("deck_drag_moves", |b| {
        let runtime = Runtime::default();
        let items: Vec<u32> = (0..10).collect();
        let mut deck = TriageDeck::new(runtime.handle(), items, DeckConfig::default());
        b.iter(|| {
            deck.on_pointer_event(&PointerEvent::down(Point::new(200.0, 400.0), 0));
            for step in 1..=MOVES_PER_DRAG {
                let x = 200.0 + step as f32 * 0.5;
                deck.on_pointer_event(&PointerEvent::moved(Point::new(x, 400.0), step as u64 * 4));
                black_box(deck.card_appearance());
            }
            deck.on_pointer_event(&PointerEvent::up(Point::new(230.0, 400.0), 300));
            runtime.drain_frame_callbacks(0);
        })
    });
}

criterion_group!(
    gesture_math,
    bench_resistance,
    bench_velocity,
    bench_carousel_drag,
    bench_deck_drag
);
criterion_main!(gesture_math);
