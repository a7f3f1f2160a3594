use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glam::{IVec2, Vec2};

use rollmap::config::MapConfig;

fn bench_translate(c: &mut Criterion) {
    let map = MapConfig::default().build().unwrap();

    c.bench_function("global_map_translate_one_cell", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                map.translate(black_box(IVec2::new(-1, -1)));
                black_box(map);
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("global_map_translate_full_width", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                map.translate(black_box(IVec2::new(101, 101)));
                black_box(map);
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("global_map_apply_pose_delta", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                map.apply_pose_delta(black_box(Vec2::new(-10.0, -10.0)))
                    .unwrap();
                black_box(map);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_translate);
criterion_main!(benches);
