//! Benchmarks for Rollcall search passes
//!
//! Run with: cargo bench -p rollcall-core
//!
//! Every keystroke runs a full pass over every card, so these establish the
//! per-keystroke cost for directory sizes well above a real roster.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rollcall_core::memory::{MemoryCard, MemoryMedia};
use rollcall_core::{matches, CardAttributes, DataKeys, Engine, LegalName, MemberRecord, SearchTerm};

fn directory(size: usize) -> Vec<MemoryCard> {
    (0..size)
        .map(|i| {
            let record = MemberRecord::new(
                format!("Member {}", i),
                "🥁",
                LegalName::new(format!("First{}", i), format!("Last{}", i)).with_middle("Middle"),
            )
            .with_years(vec![2000 + (i % 25) as i32, 2001 + (i % 25) as i32]);
            MemoryCard::from_record(&record).expect("record serializes")
        })
        .collect()
}

// ============================================================================
// Matcher Benchmarks
// ============================================================================

fn bench_matches(c: &mut Criterion) {
    let attrs = CardAttributes::new(
        "Alice Stone",
        "🥁",
        LegalName::new("Alice", "Stone").with_middle("Marie"),
        "2019, 2020",
    );
    let mut group = c.benchmark_group("matches");

    group.bench_function("first_clause_hit", |b| {
        let term = SearchTerm::new("alice");
        b.iter(|| black_box(matches(&term, &attrs)))
    });

    group.bench_function("miss_all_clauses", |b| {
        let term = SearchTerm::new("zzz");
        b.iter(|| black_box(matches(&term, &attrs)))
    });

    group.finish();
}

// ============================================================================
// Pass Benchmarks
// ============================================================================

fn bench_on_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("on_input");

    for size in [100usize, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        // Alternating terms force every card to flip on each pass.
        group.bench_with_input(BenchmarkId::new("alternating", size), &size, |b, &size| {
            let mut engine =
                Engine::attach(directory(size), Some(MemoryMedia::default()), &DataKeys::default())
                    .expect("bench cards parse");
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                black_box(engine.on_input(if flip { "member" } else { "zzz" }))
            })
        });

        group.bench_with_input(BenchmarkId::new("steady", size), &size, |b, &size| {
            let mut engine =
                Engine::attach(directory(size), Some(MemoryMedia::default()), &DataKeys::default())
                    .expect("bench cards parse");
            b.iter(|| black_box(engine.on_input("member 1")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matches, bench_on_input);
criterion_main!(benches);
