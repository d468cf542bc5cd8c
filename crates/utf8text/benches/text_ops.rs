//! Benchmark: ASCII fast path against the decode/encode path.
#![allow(missing_docs)]

use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utf8text::{Backend, ManualBackend, NativeBackend, PadSide, TextEngine};

/// Deterministic text of exactly `chars` code points. `mixed` interleaves
/// two-, three- and four-byte characters with ASCII.
fn make_text(chars: usize, mixed: bool) -> String {
    const ASCII: &[char] = &['l', 'o', 'r', 'e', 'm', ' ', 'i', 'p', 's', 'u'];
    const MIXED: &[char] = &['l', '\u{e9}', 'r', '\u{3a9}', 'm', ' ', '\u{20ac}', 'p', '\u{1f600}', 'u'];
    let alphabet = if mixed { MIXED } else { ASCII };
    alphabet.iter().copied().cycle().take(chars).collect()
}

fn run_ops<B: Backend>(text: &TextEngine<B>, s: &str) -> usize {
    let mut work = text.length(s);
    work += text.substring(s, 17, Some(64)).len();
    work += text.to_upper(s).map_or(0, |u| u.len());
    work += text.reverse(s).map_or(0, |r| r.len());
    work += text.pad(s, text.length(s) + 8, "-", PadSide::Both).len();
    work += text.split(s, NonZeroUsize::MIN.saturating_add(15)).count();
    work += text.case_insensitive_replace(s, "M", "n").map_or(0, |(_, n)| n);
    work
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_ops");
    for &chars in &[64usize, 4_096] {
        for (label, mixed) in [("ascii", false), ("mixed", true)] {
            let s = make_text(chars, mixed);
            group.throughput(Throughput::Bytes(s.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("manual_{label}"), chars),
                &s,
                |b, s| {
                    let text = TextEngine::new(ManualBackend);
                    b.iter(|| black_box(run_ops(&text, black_box(s))));
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("native_{label}"), chars),
                &s,
                |b, s| {
                    let text = TextEngine::new(NativeBackend);
                    b.iter(|| black_box(run_ops(&text, black_box(s))));
                },
            );
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let s = make_text(16_384, true);
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(s.len() as u64));
    group.bench_function("manual", |b| {
        b.iter(|| ManualBackend.decode(black_box(s.as_bytes())));
    });
    group.bench_function("native", |b| {
        b.iter(|| NativeBackend.decode(black_box(s.as_bytes())));
    });
    group.finish();
}

criterion_group!(benches, bench_ops, bench_decode);
criterion_main!(benches);
