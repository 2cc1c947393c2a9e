use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tcphdr::*;

static HEADER_BYTES: [u8; 20] = [
    0x40, 0x9c, 0x50, 0x00, 0xff, 0xff, 0xff, 0xff, 0x44, 0x33, 0x22, 0x11, 0x50, 0x02, 0x20, 0x00,
    0xab, 0xcd, 0x00, 0x00,
];

fn header_respond(buf: &[u8]) {
    let response = respond(buf).unwrap();
    assert!(response[13] == 0x12);
}

fn header_edit_flags(buf: &mut [u8; 20]) {
    let mut header = TcpHeader::new_unchecked(&mut buf[..]);
    header.edit_flags(true, false);
    header.edit_flags(false, true);
}

fn b1(c: &mut Criterion) {
    c.bench_function("header_respond", |b| {
        b.iter(|| {
            header_respond(black_box(&HEADER_BYTES[..]));
        })
    });
}

fn b2(c: &mut Criterion) {
    let mut buf = HEADER_BYTES;
    c.bench_function("header_edit_flags", |b| {
        b.iter(|| {
            header_edit_flags(black_box(&mut buf));
        })
    });
}

criterion_group!(benches, b1, b2);
criterion_main!(benches);
