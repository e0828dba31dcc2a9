//! Performance benchmarks for folio
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use folio::corpus::{Catalog, Corpus, SHAKESPEARE_TITLES};
use folio::index::{SuffixArrayBuilder, SuffixArrayConfig};
use folio::query::{Searcher, SearcherOptions};
use std::sync::Arc;

/// Contents listing followed by every title's document, `lines` lines each
fn synthetic_corpus(lines: usize) -> String {
    let mut text = String::from("Contents\n\n");
    for title in SHAKESPEARE_TITLES {
        text.push_str(&format!("    {title}\n"));
    }
    text.push_str("\n\n");

    for title in SHAKESPEARE_TITLES {
        text.push_str(title);
        text.push_str("\n\n");
        for i in 0..lines {
            text.push_str(&format!(
                "Line {i}: now is the winter of our discontent made glorious summer.\n"
            ));
        }
        text.push_str("\n\n");
    }
    text
}

fn searcher(lines: usize) -> Searcher {
    let catalog = Catalog::new(SHAKESPEARE_TITLES, Vec::new()).expect("valid catalog");
    Searcher::new(
        Corpus::new(synthetic_corpus(lines)),
        catalog,
        &SearcherOptions::default(),
    )
    .expect("searcher builds")
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    group.sample_size(10);

    for lines in [100, 1_000] {
        let text: Arc<str> = synthetic_corpus(lines).into();

        group.bench_with_input(BenchmarkId::new("parallel", lines), &text, |b, text| {
            let builder = SuffixArrayBuilder::with_defaults();
            b.iter(|| builder.build(Arc::clone(text)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("serial", lines), &text, |b, text| {
            let builder = SuffixArrayBuilder::new(SuffixArrayConfig {
                parallel_threshold: usize::MAX,
                ..Default::default()
            });
            b.iter(|| builder.build(Arc::clone(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let searcher = searcher(1_000);
    let index = searcher.index();

    let mut group = c.benchmark_group("lookup");
    for pattern in ["MACBETH", "KING HENRY", "winter", "zzz-absent"] {
        group.bench_with_input(BenchmarkId::from_parameter(pattern), &pattern, |b, p| {
            b.iter(|| index.lookup(black_box(p.as_bytes()), None))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let searcher = searcher(1_000);

    let mut group = c.benchmark_group("search");
    for query in ["hamlet", "henry the sixth", "venus", "no such play"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, q| {
            b.iter(|| searcher.search(black_box(q)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_lookup, bench_search);
criterion_main!(benches);
