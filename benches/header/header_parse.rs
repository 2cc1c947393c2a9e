use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tcphdr::*;

static HEADER_BYTES: [u8; 20] = [
    0x40, 0x9c, 0x50, 0x00, 0xff, 0xff, 0xff, 0xff, 0x44, 0x33, 0x22, 0x11, 0x50, 0x3f, 0x20, 0x00,
    0xab, 0xcd, 0x00, 0x00,
];

fn header_fields(buf: &[u8]) {
    let header = TcpHeader::new(buf).unwrap();
    assert!(header.src_port() == 40000);
    assert!(header.dst_port() == 80);
    assert!(header.seq_number() == u32::MAX);
    assert!(header.ack_number() == 0x11223344);
    assert!(header.syn());
}

fn header_decode(buf: &[u8]) {
    let decoded = decode(buf).unwrap();
    assert!(decoded.active_flags.len() == 6);
}

fn b1(c: &mut Criterion) {
    c.bench_function("header_fields", |b| {
        b.iter(|| {
            header_fields(black_box(&HEADER_BYTES[..]));
        })
    });
}

fn b2(c: &mut Criterion) {
    c.bench_function("header_decode", |b| {
        b.iter(|| {
            header_decode(black_box(&HEADER_BYTES[..]));
        })
    });
}

criterion_group!(benches, b1, b2);
criterion_main!(benches);
