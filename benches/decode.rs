use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_ean::decoder::{candidate_digits, solve};
use rust_ean::encoder::{RenderOptions, render_pixmap};
use rust_ean::signal::extract_row;
use rust_ean::{decode_barcode, parse_pixmap};

fn bench_decode(c: &mut Criterion) {
    let payload = [9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7];

    let clean = render_pixmap(&payload, &RenderOptions::default());
    let noisy = render_pixmap(
        &payload,
        &RenderOptions {
            luma_jitter: 15,
            edge_jitter: true,
            seed: 42,
            ..Default::default()
        },
    );

    c.bench_function("decode_clean", |b| {
        b.iter(|| decode_barcode(black_box(&clean)).unwrap())
    });

    c.bench_function("decode_noisy", |b| {
        b.iter(|| decode_barcode(black_box(&noisy)).unwrap())
    });
}

fn bench_stages(c: &mut Criterion) {
    let payload = [9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7];
    let buf = render_pixmap(&payload, &RenderOptions::default());
    let pixmap = parse_pixmap(&buf).unwrap();
    let row = pixmap.height() / 2;
    let runs = extract_row(&pixmap, row);

    // Align on the leading guard: skip the quiet-zone run
    let aligned = &runs[1..];
    let groups = candidate_digits(aligned).unwrap();

    c.bench_function("parse_pixmap", |b| {
        b.iter(|| parse_pixmap(black_box(&buf)).unwrap())
    });

    c.bench_function("extract_row", |b| {
        b.iter(|| extract_row(black_box(&pixmap), black_box(row)))
    });

    c.bench_function("candidate_digits", |b| {
        b.iter(|| candidate_digits(black_box(aligned)).unwrap())
    });

    c.bench_function("solve", |b| b.iter(|| solve(black_box(&groups)).unwrap()));
}

criterion_group!(benches, bench_decode, bench_stages);
criterion_main!(benches);
