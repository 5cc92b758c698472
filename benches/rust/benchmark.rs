//! Character-table and symmetrization benchmarks
//!
//! Benchmarks for table generation across the axial families, decomposition,
//! and the two symmetrizers.

use criterion::{Criterion, criterion_group, criterion_main};
use ptsym_core::{
    EquivalenceSet, GroupType, OperationKind, Orientation, SymmetryOperation, Thresholds, Vec3,
    decompose, generate_character_table, symmetrize_molecule,
};
use std::hint::black_box;

fn op(kind: OperationKind, order: u32, power: i32, axis: Vec3, orientation: Orientation, class: usize) -> SymmetryOperation {
    let mut sop = SymmetryOperation::new(kind, order, power, axis, orientation);
    sop.class = class;
    sop
}

fn c6v_ops() -> Vec<SymmetryOperation> {
    let z = Vec3::new(0.0, 0.0, 1.0);
    vec![
        op(OperationKind::Identity, 1, 1, z, Orientation::Horizontal, 0),
        op(OperationKind::ProperRotation, 6, 1, z, Orientation::Horizontal, 1),
        op(OperationKind::ProperRotation, 6, 5, z, Orientation::Horizontal, 1),
        op(OperationKind::ProperRotation, 3, 1, z, Orientation::Horizontal, 2),
        op(OperationKind::ProperRotation, 3, 2, z, Orientation::Horizontal, 2),
        op(OperationKind::ProperRotation, 2, 1, z, Orientation::Horizontal, 3),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Vertical, 4),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Vertical, 4),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Vertical, 4),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Dihedral, 5),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Dihedral, 5),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Dihedral, 5),
    ]
}

fn c3v_ops() -> Vec<SymmetryOperation> {
    let z = Vec3::new(0.0, 0.0, 1.0);
    vec![
        op(OperationKind::Identity, 1, 1, z, Orientation::Horizontal, 0),
        op(OperationKind::ProperRotation, 3, 1, z, Orientation::Horizontal, 1),
        op(OperationKind::ProperRotation, 3, 2, z, Orientation::Horizontal, 1),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Vertical, 2),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Vertical, 2),
        op(OperationKind::Reflection, 1, 1, z, Orientation::Vertical, 2),
    ]
}

fn bench_table_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_generation");

    group.bench_function("c3v", |b| {
        b.iter(|| generate_character_table(GroupType::Cnv, black_box(3), &c3v_ops(), None))
    });

    group.bench_function("c6v", |b| {
        b.iter(|| generate_character_table(GroupType::Cnv, black_box(6), &c6v_ops(), None))
    });

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let ct = generate_character_table(GroupType::Cnv, 3, &c3v_ops(), None).unwrap();
    let rspan = vec![6.0, 0.0, 0.0];

    c.bench_function("decompose_c3v", |b| {
        b.iter(|| decompose(black_box(&ct), black_box(&rspan)))
    });
}

fn bench_symmetrize_molecule(c: &mut Criterion) {
    let ops = c3v_ops();

    c.bench_function("symmetrize_molecule_c3v_triangle", |b| {
        b.iter_batched(
            || {
                vec![EquivalenceSet {
                    positions: vec![
                        Vec3::new(1.0, 0.01, 0.0),
                        Vec3::new(-0.49, 0.87, 0.0),
                        Vec3::new(-0.49, -0.85, 0.0),
                    ],
                    permutations: vec![vec![0, 1, 2], vec![1, 2, 0], vec![2, 0, 1], vec![0, 2, 1], vec![2, 1, 0], vec![1, 0, 2]],
                }]
            },
            |mut sets| symmetrize_molecule(black_box(&ops), black_box(&mut sets), Thresholds { zero: 1e-12 }),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_table_generation, bench_decompose, bench_symmetrize_molecule);
criterion_main!(benches);
