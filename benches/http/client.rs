use criterion::{Criterion, Throughput};
use librest::http::request::{Method, RequestSpec, write_request};
use librest::http::response::scan;
use librest::transport::Transport;

/// A replay transport for benchmarking: serves a canned reply and
/// swallows writes.
struct ReplayTransport {
    reply: Vec<u8>,
    pos: usize,
}

impl ReplayTransport {
    fn new(reply: Vec<u8>) -> Self {
        Self { reply, pos: 0 }
    }
}

impl Transport for ReplayTransport {
    type Error = ();

    fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.pos < self.reply.len()
    }

    fn has_data(&mut self) -> bool {
        self.pos < self.reply.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.reply.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    fn write_all(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn close(&mut self) {}
}

fn canned_reply(body_len: usize) -> Vec<u8> {
    let mut reply = Vec::new();
    reply.extend_from_slice(b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\n\r\n");
    reply.extend(std::iter::repeat_n(b'x', body_len));
    reply
}

pub fn bench_write_request(c: &mut Criterion) {
    let body = vec![b'x'; 256];
    let header: librest::http::HeaderLine =
        heapless::String::try_from("X-Api-Key: 0123456789abcdef").unwrap();
    let headers = [header];

    let mut group = c.benchmark_group("write_request");
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("post_256b", |b| {
        b.iter(|| {
            let mut transport = ReplayTransport::new(Vec::new());
            let spec = RequestSpec {
                method: Method::Post,
                path: "/api/telemetry",
                host: "example.com",
                headers: &headers,
                body: Some(&body),
                content_type: "application/octet-stream",
            };
            write_request(&mut transport, &spec).unwrap();
        })
    });
    group.finish();
}

pub fn bench_scan_with_body(c: &mut Criterion) {
    let reply = canned_reply(4096);

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(reply.len() as u64));
    group.bench_function("body_4k", |b| {
        b.iter(|| {
            let mut transport = ReplayTransport::new(reply.clone());
            let mut body: heapless::Vec<u8, 4096> = heapless::Vec::new();
            scan(&mut transport, Some(&mut body), None).unwrap()
        })
    });
    group.finish();
}

pub fn bench_scan_discard_body(c: &mut Criterion) {
    let reply = canned_reply(4096);

    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(reply.len() as u64));
    group.bench_function("discard_4k", |b| {
        b.iter(|| {
            let mut transport = ReplayTransport::new(reply.clone());
            scan::<_, 0>(&mut transport, None, None).unwrap()
        })
    });
    group.finish();
}
