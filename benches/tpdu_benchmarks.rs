// ABOUTME: Benchmark suite for TPDU marshalling, unmarshalling and septet packing
// ABOUTME: Measures the codec paths a modem-facing application exercises per message

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::io::Cursor;
use std::time::Duration;
use tpdu::codec::{Direction, Marshal, Unmarshal};
use tpdu::gsm7::{self, Lang};
use tpdu::tpdu::{Address, Deliver, Submit, Timestamp, Tpdu};

fn sample_submit(text: &str) -> Submit {
    Submit {
        mr: 1,
        da: Address::international("46708251358"),
        ud: gsm7::encode(text, Lang::Default.charset()).unwrap(),
        ..Submit::default()
    }
}

fn sample_deliver() -> Deliver {
    use chrono::{FixedOffset, TimeZone};
    let zone = FixedOffset::east_opt(2 * 3600).unwrap();
    let mut deliver = Deliver::new(
        Address::international("31641600986"),
        Timestamp(zone.with_ymd_and_hms(2024, 8, 26, 19, 37, 41).unwrap()),
    );
    deliver.ud = gsm7::encode("How are you?", Lang::Default.charset()).unwrap();
    deliver
}

fn bench_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("marshal");
    group.measurement_time(Duration::from_secs(10));

    let submit = sample_submit("Hello World");
    group.bench_function("submit", |b| b.iter(|| black_box(&submit).to_bytes()));

    let deliver = sample_deliver();
    group.bench_function("deliver", |b| b.iter(|| black_box(&deliver).to_bytes()));

    group.finish();
}

fn bench_unmarshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("unmarshal");
    group.measurement_time(Duration::from_secs(10));

    let submit_octets = sample_submit("Hello World").to_bytes().unwrap();
    group.bench_function("submit", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(submit_octets.as_ref()));
            Submit::unmarshal(&mut cursor).unwrap()
        })
    });

    let deliver_octets = sample_deliver().to_bytes().unwrap();
    group.bench_function("deliver_dispatched", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(deliver_octets.as_ref()));
            Tpdu::unmarshal(&mut cursor, Direction::Mt).unwrap()
        })
    });

    group.finish();
}

fn bench_message_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_sizes");
    group.measurement_time(Duration::from_secs(10));

    for &size in &[10usize, 50, 100, 160] {
        let octets = sample_submit(&"A".repeat(size)).to_bytes().unwrap();
        group.bench_with_input(
            BenchmarkId::new("submit_unmarshal", size),
            &octets,
            |b, octets| {
                b.iter(|| {
                    let mut cursor = Cursor::new(black_box(octets.as_ref()));
                    Submit::unmarshal(&mut cursor).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_gsm7_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("gsm7");
    group.measurement_time(Duration::from_secs(10));

    let text = "The quick brown fox jumps over the lazy dog".repeat(3);
    let septets = gsm7::encode(&text, Lang::Default.charset()).unwrap();
    let packed = gsm7::pack(&septets, 0);

    group.bench_function("encode", |b| {
        b.iter(|| gsm7::encode(black_box(&text), Lang::Default.charset()))
    });
    group.bench_function("pack", |b| b.iter(|| gsm7::pack(black_box(&septets), 0)));
    group.bench_function("unpack", |b| {
        b.iter(|| gsm7::unpack(black_box(&packed), septets.len(), 0))
    });
    group.bench_function("decode", |b| {
        b.iter(|| gsm7::decode(black_box(&septets), Lang::Default.charset()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_marshal,
    bench_unmarshal,
    bench_message_sizes,
    bench_gsm7_packing
);
criterion_main!(benches);
