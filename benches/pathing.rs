use criterion::{criterion_group, criterion_main, Criterion};
use rand::{SeedableRng, XorShiftRng};
use topomaze::{
    coordinates::GridCoordinate,
    generators,
    maze::Maze,
    pathing::{shortest_path, Distances},
    topology::Topology,
    units::{Height, Width},
};

fn rng() -> XorShiftRng {
    XorShiftRng::from_seed([0x0123_4567, 0x89ab_cdef, 0xfedc_ba98, 0x7654_3210])
}

fn bench_distances_flood_32(c: &mut Criterion) {
    let mut maze = Maze::new(Topology::Square, Width(32), Height(32));
    generators::hunt_and_kill(&mut maze, &mut rng()).unwrap();
    c.bench_function("distances_flood_32", move |b| {
        b.iter(|| Distances::<u32>::new(&maze, GridCoordinate::new(0, 0)).unwrap().max())
    });
}

fn bench_shortest_path_32(c: &mut Criterion) {
    let mut maze = Maze::new(Topology::Square, Width(32), Height(32));
    generators::hunt_and_kill(&mut maze, &mut rng()).unwrap();
    c.bench_function("shortest_path_32", move |b| {
        b.iter(|| {
            shortest_path(&maze,
                          GridCoordinate::new(0, 0),
                          GridCoordinate::new(31, 31))
                .unwrap()
                .len()
        })
    });
}

criterion_group!(benches, bench_distances_flood_32, bench_shortest_path_32);
criterion_main!(benches);
