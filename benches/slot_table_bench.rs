//! Benchmarks for slot table claim/release and party formation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use dungeon_queue::core::{form_units, SlotTable};

// ============================================================================
// Slot Table
// ============================================================================

fn bench_claim_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_table");

    for capacity in [1usize, 8, 64] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("claim_release", capacity),
            &capacity,
            |b, &capacity| {
                let table = SlotTable::new(capacity).unwrap();
                // Keep all but the last slot busy so every claim scans the table
                for id in 0..capacity - 1 {
                    table.claim_free_slot(id as u64, || 1).unwrap().unwrap();
                }
                let mut id = capacity as u64;
                b.iter(|| {
                    let assignment = table.claim_free_slot(id, || 1).unwrap().unwrap();
                    black_box(table.release(assignment.slot).unwrap());
                    id += 1;
                });
            },
        );
    }

    group.finish();
}

fn bench_contended_claims(c: &mut Criterion) {
    c.bench_function("slot_table/contended_4_threads", |b| {
        b.iter(|| {
            let table = Arc::new(SlotTable::new(4).unwrap());
            let handles: Vec<_> = (0..4u64)
                .map(|t| {
                    let table = Arc::clone(&table);
                    thread::spawn(move || {
                        for i in 0..250 {
                            let id = t * 1_000 + i;
                            if let Some(a) = table.claim_free_slot(id, || 1).unwrap() {
                                table.finish(a.slot, id).unwrap();
                            }
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
            black_box(table.statistics())
        });
    });
}

// ============================================================================
// Party Formation
// ============================================================================

fn bench_form_units(c: &mut Criterion) {
    c.bench_function("form_units", |b| {
        b.iter(|| form_units(black_box(10_000), black_box(9_000), black_box(30_000)));
    });
}

criterion_group!(benches, bench_claim_release, bench_contended_claims, bench_form_units);
criterion_main!(benches);
