use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use emojify::{decode, encode, render};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for repeats in [1, 16, 64, 256].iter() {
        let text = "a :smile: in the :sparkles: with plain text around ".repeat(*repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| render(black_box(text)));
        });
    }
    group.finish();
}

fn bench_render_no_shortcodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_no_shortcodes");

    for repeats in [1, 16, 64, 256].iter() {
        let text = "plain prose without any markers in it at all ".repeat(*repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| render(black_box(text)));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for repeats in [1, 16, 64, 256].iter() {
        let text = "emoji 💖 heavy 🚀 line 🎉 ".repeat(*repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| encode(black_box(text)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for repeats in [1, 16, 64, 256].iter() {
        let text = encode(&"emoji 💖 heavy 🚀 line 🎉 ".repeat(*repeats)).into_owned();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| decode(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_render,
    bench_render_no_shortcodes,
    bench_encode,
    bench_decode,
);
criterion_main!(benches);
