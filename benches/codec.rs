//! Benchmarks for the byte codecs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ordbytes::{ByteCodec, CompactCodec, GroupCodec, SortOrder};

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for len in [16, 256, 4096] {
        let data = payload(len);
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("group_asc", len), &data, |bench, data| {
            let codec = GroupCodec::new();
            bench.iter(|| {
                let mut buf = Vec::new();
                codec.encode(&mut buf, black_box(data));
                buf
            })
        });
        group.bench_with_input(BenchmarkId::new("group_desc", len), &data, |bench, data| {
            let codec = GroupCodec::with_order(SortOrder::Descending);
            bench.iter(|| {
                let mut buf = Vec::new();
                codec.encode(&mut buf, black_box(data));
                buf
            })
        });
        group.bench_with_input(BenchmarkId::new("compact", len), &data, |bench, data| {
            bench.iter(|| {
                let mut buf = Vec::new();
                CompactCodec.encode(&mut buf, black_box(data));
                buf
            })
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for len in [16, 256, 4096] {
        let data = payload(len);
        group.throughput(Throughput::Bytes(len as u64));

        let asc = GroupCodec::new();
        let mut asc_buf = Vec::new();
        asc.encode(&mut asc_buf, &data);
        group.bench_with_input(BenchmarkId::new("group_asc", len), &asc_buf, |bench, buf| {
            bench.iter(|| asc.decode(black_box(buf)).unwrap())
        });

        let desc = GroupCodec::with_order(SortOrder::Descending);
        let mut desc_buf = Vec::new();
        desc.encode(&mut desc_buf, &data);
        group.bench_with_input(
            BenchmarkId::new("group_desc", len),
            &desc_buf,
            |bench, buf| bench.iter(|| desc.decode(black_box(buf)).unwrap()),
        );

        let mut compact_buf = Vec::new();
        CompactCodec.encode(&mut compact_buf, &data);
        group.bench_with_input(
            BenchmarkId::new("compact", len),
            &compact_buf,
            |bench, buf| bench.iter(|| CompactCodec.decode(black_box(buf)).unwrap()),
        );
    }

    group.finish();
}

fn bench_complement(c: &mut Criterion) {
    let mut group = c.benchmark_group("complement_bytes");

    for len in [9, 4096] {
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, &len| {
            let mut buf = payload(len);
            bench.iter(|| ordbytes::complement_bytes(black_box(&mut buf)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_complement);
criterion_main!(benches);
