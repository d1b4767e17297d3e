//! Benchmarks for Hexad classification and lattice construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hexad_core::{classify_atom, AtomSpace, Lattice, LatticeRules, RealmId, Tetrad};

fn bench_classify_all(c: &mut Criterion) {
    c.bench_function("classify_all_atoms", |b| {
        b.iter(|| {
            for atom in AtomSpace::all() {
                black_box(classify_atom(black_box(atom)));
            }
        })
    });
}

fn bench_tetrads(c: &mut Criterion) {
    c.bench_function("build_all_tetrads", |b| b.iter(|| black_box(Tetrad::all())));
}

fn bench_lattices(c: &mut Criterion) {
    let tetrads = Tetrad::all();
    let rules = LatticeRules::default();
    let buckets: Vec<(RealmId, Vec<Tetrad>)> = RealmId::all()
        .map(|realm| {
            let members = tetrads.iter().filter(|t| t.realm == realm).cloned().collect();
            (realm, members)
        })
        .collect();

    c.bench_function("build_all_lattices", |b| {
        b.iter(|| {
            for (realm, members) in &buckets {
                black_box(Lattice::build(*realm, members, &rules));
            }
        })
    });
}

criterion_group!(benches, bench_classify_all, bench_tetrads, bench_lattices);
criterion_main!(benches);
