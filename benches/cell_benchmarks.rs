use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use locus::cells::{cell_id_for, cell_walk, grid_neighbors};

fn benchmark_cell_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_walk");

    group.bench_function("cell_id_for", |b| {
        b.iter(|| cell_id_for(black_box(40.7128), black_box(-74.0060)))
    });

    for radius in [1usize, 10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("both_directions", radius),
            &radius,
            |b, &radius| {
                b.iter(|| {
                    cell_walk(
                        black_box(40.7128),
                        black_box(-74.0060),
                        black_box(radius),
                        true,
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("one_sided", radius),
            &radius,
            |b, &radius| {
                b.iter(|| {
                    cell_walk(
                        black_box(40.7128),
                        black_box(-74.0060),
                        black_box(radius),
                        false,
                    )
                })
            },
        );
    }

    group.finish();
}

fn benchmark_grid_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_neighbors");

    let origin = cell_id_for(40.7128, -74.0060);

    for radius in [1u32, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(radius),
            &radius,
            |b, &radius| b.iter(|| grid_neighbors(black_box(origin), black_box(radius))),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_cell_walk, benchmark_grid_neighbors);
criterion_main!(benches);
