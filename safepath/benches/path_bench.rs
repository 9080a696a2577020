use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use safepath::path::PathRelationship;
use safepath::spec::{UNIX, WINDOWS};
use safepath::Path;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("unix_short", |b| {
        b.iter(|| Path::parse(black_box("/etc/ssh"), &UNIX));
    });

    group.bench_function("unix_deep", |b| {
        b.iter(|| Path::parse(black_box("/var/www/app/upload/user1/docs/2024/report.pdf"), &UNIX));
    });

    group.bench_function("windows", |b| {
        b.iter(|| Path::parse(black_box("C:\\Users\\alice\\Documents\\report.pdf"), &WINDOWS));
    });

    // Rejected input should fail fast
    group.bench_function("invalid_element", |b| {
        b.iter(|| Path::parse(black_box("/var/www/../../etc/passwd"), &UNIX));
    });

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    let base = Path::parse("/var/www/app", &UNIX).unwrap();

    group.bench_function("segment", |b| {
        b.iter(|| base.join(black_box("upload/user1/obj1")));
    });

    group.bench_function("elements", |b| {
        b.iter(|| base.join(black_box(&["upload", "user1", "obj1"])));
    });

    group.bench_function("to_string", |b| {
        let path = base.join("upload/user1/obj1").unwrap();
        b.iter(|| black_box(&path).to_string());
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_relative");

    let base = Path::parse("/var/www/app/upload/user1", &UNIX).unwrap();
    let start = base.join("obj1").unwrap();

    for (name, input) in [
        ("sibling", "../obj2"),
        ("noisy", "./a//b/./../c"),
        ("escape", "../../obj2"),
        ("deep_escape", "../../../../../../../../etc/passwd"),
        ("invalid", "../a;b"),
    ] {
        group.bench_with_input(BenchmarkId::new("path_base", name), &input, |b, &input| {
            b.iter(|| {
                let mut path = start.clone();
                let _ = path.resolve_relative(black_box(input), &base);
            });
        });
    }

    // String bases are parsed on every call
    group.bench_function("string_base", |b| {
        b.iter(|| {
            let mut path = start.clone();
            let _ = path.resolve_relative(black_box("../obj2"), "/var/www/app/upload/user1");
        });
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = Path::parse("/users/test/projects/safepath", &UNIX).unwrap();
    let descendant = Path::parse("/users/test/projects/safepath/src/path", &UNIX).unwrap();
    let unrelated = Path::parse("/users/test/projects/other", &UNIX).unwrap();

    group.bench_function("contains", |b| {
        b.iter(|| black_box(&ancestor).contains(black_box(&descendant)));
    });

    group.bench_function("ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(&ancestor), black_box(&descendant)));
    });

    group.bench_function("unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(&ancestor), black_box(&unrelated)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_append,
    bench_resolve,
    bench_relationship
);
criterion_main!(benches);
