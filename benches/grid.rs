//! Occupancy grid hot-path benchmarks: one frame's sensor sweep plus
//! frontier growth on the canonical 50x50 grid.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use autoval_nav::{OccupancyGrid, Point2};

fn bench_sweep_and_frontier(c: &mut Criterion) {
    c.bench_function("mark_area_clear_500", |b| {
        let mut grid = OccupancyGrid::new(500.0, 10.0, &[]).unwrap();
        b.iter(|| {
            grid.mark_area_clear(black_box(Point2::new(250.0, 250.0)), black_box(50.0));
            grid.take_deltas();
        });
    });

    c.bench_function("update_frontier_500", |b| {
        let mut grid = OccupancyGrid::new(500.0, 10.0, &[]).unwrap();
        grid.mark_area_clear(Point2::new(250.0, 250.0), 100.0);
        b.iter(|| {
            grid.update_frontier();
            grid.take_deltas();
        });
    });

    c.bench_function("full_frame_grid_update", |b| {
        let mut grid = OccupancyGrid::new(500.0, 10.0, &[]).unwrap();
        let mut x = 10.0;
        b.iter(|| {
            x = if x >= 480.0 { 10.0 } else { x + 10.0 };
            grid.mark_area_clear(Point2::new(x, 250.0), 50.0);
            grid.update_frontier();
            black_box(grid.take_deltas());
        });
    });
}

criterion_group!(benches, bench_sweep_and_frontier);
criterion_main!(benches);
