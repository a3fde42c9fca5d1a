use criterion::{black_box, criterion_group, criterion_main, Criterion};

use parsimony::{schema::DOCUMENT, try_decode, Cursor};
use std::sync::Arc;

/// Builds a well-formed document buffer: start marker, `count` generic
/// segments each carrying `payload` bytes, then the terminal segment.
fn segment_buffer(count: usize, payload: usize) -> Vec<u8> {
    let length = (payload + 2) as u16;
    let mut buf = vec![0xff, 0xd8];
    for _ in 0..count {
        buf.extend_from_slice(&[0xff, 0xe0]);
        buf.extend_from_slice(&length.to_be_bytes());
        buf.extend(std::iter::repeat(0xaa).take(payload));
    }
    buf.extend_from_slice(&[0xff, 0xda, 0x00, 0x02]);
    buf
}

fn document_bench(c: &mut Criterion) {
    let bytes: Arc<[u8]> = segment_buffer(64, 30).into();
    c.bench_function("document_apply", |b| {
        b.iter(|| black_box(DOCUMENT.apply(Cursor::new(Arc::clone(&bytes)))))
    });
}

fn decode_bench(c: &mut Criterion) {
    let bytes: Arc<[u8]> = segment_buffer(64, 30).into();
    c.bench_function("document_try_decode", |b| {
        b.iter(|| black_box(try_decode(Arc::clone(&bytes))))
    });
}

criterion_group! {
    name = parser_benches;
    config = Criterion::default();
    targets = document_bench, decode_bench
}

criterion_main!(parser_benches);
