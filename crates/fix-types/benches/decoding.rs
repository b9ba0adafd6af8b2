//! Benchmarks for FIX line decoding
//!
//! Run with: cargo bench --bench decoding

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fix_types::{decode_line, Decoder};

/// New Order Single rendered with caret delimiters
const ORDER_CARET: &str = "2024-01-02 09:30:00.000 OUT:8=FIX.4.2^A9=154^A35=D^A49=CLIENT^A56=BROKER^A34=12^A52=20240102-09:30:00.000^A11=ORD-000123^A21=1^A55=XYZ^A54=1^A60=20240102-09:30:00.000^A38=100^A40=2^A44=10.50^A59=0^A10=128^A";

/// Fully-filled Execution Report rendered with caret delimiters
const EXEC_CARET: &str = "2024-01-02 09:30:01.250 IN:8=FIX.4.2^A9=201^A35=8^A49=BROKER^A56=CLIENT^A34=57^A52=20240102-09:30:01.250^A37=BRK-9^A17=EX-1^A11=ORD-000123^A150=2^A39=2^A40=2^A55=XYZ^A54=1^A38=100^A14=100^A151=0^A6=10.40^A31=10.40^A32=100^A30=NYSE^A60=20240102-09:30:01.250^A10=077^A";

fn bench_decode_caret(c: &mut Criterion) {
    c.bench_function("decode_order_caret", |b| {
        b.iter(|| {
            let result = decode_line(black_box(ORDER_CARET));
            black_box(result)
        })
    });
}

fn bench_decode_soh(c: &mut Criterion) {
    let line = EXEC_CARET.replace("^A", "\u{1}");

    let mut group = c.benchmark_group("decode_execution_report");
    group.throughput(Throughput::Bytes(line.len() as u64));

    group.bench_function("soh", |b| {
        b.iter(|| {
            let result = decode_line(black_box(&line));
            black_box(result)
        })
    });

    group.bench_function("caret", |b| {
        b.iter(|| {
            let result = decode_line(black_box(EXEC_CARET));
            black_box(result)
        })
    });

    group.finish();
}

fn bench_decode_with_diagnostics(c: &mut Criterion) {
    let decoder = Decoder::new();
    let noisy = format!("{}junk^Amore-junk^A", EXEC_CARET);

    c.bench_function("decode_with_diagnostics", |b| {
        b.iter(|| {
            let result = decoder.decode_with_diagnostics(black_box(&noisy));
            black_box(result)
        })
    });
}

criterion_group!(
    benches,
    bench_decode_caret,
    bench_decode_soh,
    bench_decode_with_diagnostics,
);
criterion_main!(benches);
