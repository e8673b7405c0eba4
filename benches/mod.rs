use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::client::bench_write_request,
    http::client::bench_scan_with_body,
    http::client::bench_scan_discard_body
);
criterion_main!(benches);
