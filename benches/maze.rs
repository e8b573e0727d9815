use criterion::{criterion_group, criterion_main, Criterion};
use rand::{SeedableRng, XorShiftRng};
use topomaze::{
    braid::{braid, BraidTarget},
    generators,
    maze::Maze,
    topology::Topology,
    units::{Height, Width},
};

fn rng() -> XorShiftRng {
    XorShiftRng::from_seed([0x9e37_79b9, 0x7f4a_7c15, 0xf39c_c060, 0x5ced_c834])
}

fn bench_neighbour_queries_32(c: &mut Criterion) {
    let maze = Maze::new(Topology::OctagonSquare, Width(32), Height(32));
    c.bench_function("neighbour_queries_octagon_32", move |b| {
        b.iter(|| {
            maze.iter()
                .map(|coord| maze.neighbours(coord).len())
                .sum::<usize>()
        })
    });
}

fn bench_is_perfect_32(c: &mut Criterion) {
    let mut maze = Maze::new(Topology::Square, Width(32), Height(32));
    generators::recursive_backtracker(&mut maze, &mut rng()).unwrap();
    c.bench_function("is_perfect_32", move |b| b.iter(|| maze.is_perfect()));
}

fn bench_full_braid_32(c: &mut Criterion) {
    let mut rng = rng();
    c.bench_function("full_braid_32", move |b| {
        b.iter(|| {
            let mut maze = Maze::new(Topology::Square, Width(32), Height(32));
            generators::recursive_backtracker(&mut maze, &mut rng).unwrap();
            braid(&mut maze, &mut rng, BraidTarget::Fraction(1.0)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_neighbour_queries_32,
    bench_is_perfect_32,
    bench_full_braid_32
);
criterion_main!(benches);
