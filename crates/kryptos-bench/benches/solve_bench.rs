//! Feasibility oracle benchmarks: the "microseconds per query" claim of
//! spec.md §1/§5.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kryptos_core::CipherFamily;
use kryptos_core::anchors::{Anchor, canonical_anchors};
use kryptos_core::schedule::ScheduleShape;
use kryptos_core::wheel::WheelShape;

fn sample_ciphertext() -> Vec<u8> {
    (0..97u32).map(|i| (i % 26) as u8).collect()
}

fn sample_shape() -> ScheduleShape {
    ScheduleShape::new(std::array::from_fn(|_| WheelShape {
        family: CipherFamily::Vigenere,
        l: 17,
        phase: 0,
    }))
}

fn bench_feasible(c: &mut Criterion) {
    let ciphertext = sample_ciphertext();
    let anchors = canonical_anchors();
    let shape = sample_shape();

    c.bench_function("feasible/canonical_anchors", |b| {
        b.iter(|| {
            let verdict = kryptos_verify::feasible(black_box(&ciphertext), black_box(&anchors), black_box(&shape));
            black_box(verdict);
        });
    });
}

fn bench_feasible_with_collision(c: &mut Criterion) {
    let ciphertext = sample_ciphertext();
    let mut anchors = canonical_anchors();
    anchors.push(Anchor::from_str(21, "XAST").unwrap());
    let shape = sample_shape();

    c.bench_function("feasible/detects_collision", |b| {
        b.iter(|| {
            let verdict = kryptos_verify::feasible(black_box(&ciphertext), black_box(&anchors), black_box(&shape));
            black_box(verdict);
        });
    });
}

criterion_group!(benches, bench_feasible, bench_feasible_with_collision);
criterion_main!(benches);
