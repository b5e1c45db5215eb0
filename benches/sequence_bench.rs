use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use glam::Vec3;
use myth_motion::action::CameraActionBuilder;
use myth_motion::runner::{ParallelRunner, Runner, SequenceRunner};
use myth_motion::target::{self, Camera};

fn build_shot(children: usize) -> SequenceRunner {
    let camera = target::shared(Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 100.0));
    let step = CameraActionBuilder::new()
        .translate_view(Vec3::X)
        .orbit(Vec3::Y, 0.1)
        .build()
        .unwrap();

    let mut sequence = SequenceRunner::new(children as f32).unwrap();
    for _ in 0..children {
        sequence
            .add_action_with_target(step, camera.clone(), 1.0)
            .unwrap();
    }
    sequence
}

fn bench_sequence(c: &mut Criterion) {
    let mut g = c.benchmark_group("sequence_update");

    for children in [4usize, 64, 512] {
        g.bench_function(format!("{children}_children_60fps"), |b| {
            b.iter_batched(
                || build_shot(children),
                |mut shot| {
                    while !shot.is_complete() {
                        shot.update(black_box(1.0 / 60.0));
                    }
                    shot
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    g.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let camera = target::shared(Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 100.0));
    let zoom = CameraActionBuilder::new()
        .field_of_view(0.01)
        .build_perspective()
        .unwrap();

    c.bench_function("parallel_update_32_children", |b| {
        b.iter_batched(
            || {
                let mut parallel = ParallelRunner::new(1.0).unwrap();
                for _ in 0..32 {
                    parallel
                        .add_action_with_target(zoom, camera.clone(), 1.0)
                        .unwrap();
                }
                parallel
            },
            |mut parallel| {
                parallel.update(black_box(0.5));
                parallel
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_sequence, bench_parallel);
criterion_main!(benches);
