use chatwire::chat::{Command, Envelope, Kind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_envelope_to_json(c: &mut Criterion) {
    let envelope = Envelope::new(Kind::P2p)
        .with_sender("104729", "ferris")
        .with_target("482913")
        .with_content("the quick brown fox jumps over the lazy dog");

    c.bench_function("envelope_to_json", |b| {
        b.iter(|| black_box(&envelope).to_json().unwrap())
    });
}

fn benchmark_envelope_from_json(c: &mut Criterion) {
    let json = concat!(
        r#"{"type":"p2p","user_id":"104729","sender":"ferris","#,
        r#""content":"the quick brown fox jumps over the lazy dog","#,
        r#""target":"482913","timestamp":"2024-06-01T12:00:00Z"}"#
    );

    c.bench_function("envelope_from_json", |b| {
        b.iter(|| Envelope::from_json(black_box(json)).unwrap())
    });
}

fn benchmark_command_parse(c: &mut Criterion) {
    c.bench_function("command_parse", |b| {
        b.iter(|| {
            black_box(Command::parse("--send-p2p-482913 the quick brown fox"));
            black_box(Command::parse("--sys-groups"));
            black_box(Command::parse("not a command at all"));
        })
    });
}

criterion_group!(
    benches,
    benchmark_envelope_to_json,
    benchmark_envelope_from_json,
    benchmark_command_parse
);
criterion_main!(benches);
