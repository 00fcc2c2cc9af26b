//! Benchmarks for corpusprep cleaning throughput.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic manual pages with the usual noise
//! (copyright lines, dotted leaders, page footers, tables).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use corpusprep::{DocumentProcessor, Page, ProcessOptions, RawTable};

/// Creates the text of one synthetic manual page.
fn create_page_text(page: usize) -> String {
    let mut text = String::new();
    for i in 0..20 {
        text.push_str(&format!(
            "Section {}.{} describes how $.Name is resolved for each workload.\n",
            page, i
        ));
        if i % 5 == 0 {
            text.push_str("\n\n\n");
        }
    }
    text.push_str("Copyright © 2024 Amazon Web Services, Inc. All rights reserved.\n");
    text.push_str(&format!("Operational Excellence {}", page));
    text
}

/// Creates a synthetic document with the given number of pages.
fn create_test_pages(page_count: usize) -> Vec<Page> {
    (0..page_count)
        .map(|i| {
            let table = RawTable::from_strings(
                std::iter::once(vec!["Name".to_string(), "Limit".to_string()]).chain(
                    (0..10).map(|r| vec![format!("resource-{}", r), (r * 10).to_string()]),
                ),
            );
            Page::new(i as u32 + 1)
                .with_text(create_page_text(i + 1))
                .with_table(table)
        })
        .collect()
}

/// Benchmark text cleaning of a single page.
fn bench_clean(c: &mut Criterion) {
    let text = create_page_text(1);
    let toc = "Table of Contents\n".to_string() + &"Chapter.......... 3\n".repeat(30);

    c.bench_function("clean_page", |b| {
        b.iter(|| corpusprep::clean(black_box(&text)));
    });

    c.bench_function("noise_check", |b| {
        b.iter(|| corpusprep::is_noise(black_box(&toc)));
    });
}

/// Benchmark table normalization.
fn bench_table(c: &mut Criterion) {
    let table = create_test_pages(1).remove(0).tables.remove(0);

    c.bench_function("normalize_table", |b| {
        b.iter(|| corpusprep::normalize_table(black_box(&table)));
    });
}

/// Benchmark page orchestration at various sizes.
fn bench_process_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_pages");
    let processor = DocumentProcessor::new(ProcessOptions::new("Benchmark"));

    for page_count in [1, 10, 50].iter() {
        let pages = create_test_pages(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| processor.process_pages("bench.pdf", black_box(pages.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_clean, bench_table, bench_process_pages);
criterion_main!(benches);
