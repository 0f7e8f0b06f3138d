//! Benchmarks for camera capture and sprite playback.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image::Rgba;

use spritecam::{
    animation::AnimatedSprite,
    camera::{Camera, CameraBehavior},
    surface::{Rect, Size, Surface},
};

fn bench_camera_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_update");

    for size in [128, 256, 512, 1024] {
        let mut camera = Camera::with_behavior(
            Size::new(size * 2, size * 2),
            Size::new(size, size),
            Size::new(size / 2, size / 2),
            CameraBehavior::Center,
        );
        camera
            .source_surface_mut()
            .fill(Rgba([40, 120, 200, 255]));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut camera).update();
                });
            },
        );
    }

    group.finish();
}

fn bench_camera_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_scroll");

    for behavior in [CameraBehavior::Bounded, CameraBehavior::Center] {
        let mut camera = Camera::with_behavior(
            Size::new(1024, 1024),
            Size::new(512, 512),
            Size::new(256, 256),
            behavior,
        );
        let mut step = 0i32;

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", behavior)),
            &behavior,
            |b, _| {
                b.iter(|| {
                    step = (step + 7) % 700;
                    let focus = Rect::new(step, step / 2, 16, 16);
                    let _ = camera.scroll_to(black_box(focus));
                });
            },
        );
    }

    group.finish();
}

fn bench_sprite_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprite_advance");

    for frames in [2, 16, 128] {
        let images = (0..frames).map(|i| {
            let shade = (i * 255 / frames) as u8;
            (Surface::filled(Size::new(32, 32), Rgba([shade, 0, 0, 255])), 40)
        });
        let mut sprite = AnimatedSprite::from_durations(images).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(frames), &frames, |b, _| {
            b.iter(|| {
                sprite.advance(black_box(17));
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_camera_update,
    bench_camera_scroll,
    bench_sprite_advance
);
criterion_main!(benches);
