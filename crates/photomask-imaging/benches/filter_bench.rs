// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the photomask-imaging filters. Each benchmark runs
// one processor operation on a 128x128 synthetic panel image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::Luma;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use photomask_core::{EdgeDirection, MorphOp};
use photomask_imaging::{FloatImage, ImageProcessor};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Dark background with a grid of bright cells, loosely resembling a solar
/// panel seen from above.
fn panel_image() -> FloatImage {
    let mut image = FloatImage::from_pixel(128, 128, Luma([0.15]));
    for row in 0..4 {
        for col in 0..4 {
            let rect = Rect::at(4 + col * 31, 4 + row * 31).of_size(27, 27);
            draw_filled_rect_mut(&mut image, rect, Luma([0.85]));
        }
    }
    image
}

fn processor(image: &FloatImage) -> ImageProcessor {
    ImageProcessor::from_float_image(image.clone()).unwrap_or_else(|err| panic!("fixture: {err}"))
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_median(c: &mut Criterion) {
    let image = panel_image();
    for kernel_size in [3u32, 5] {
        c.bench_function(&format!("median_filter k={kernel_size} (128x128)"), |b| {
            b.iter(|| {
                let mut p = processor(&image);
                p.perform_median_filtering(black_box(kernel_size))
                    .unwrap_or_else(|err| panic!("median k={kernel_size}: {err}"));
                black_box(p.into_image());
            });
        });
    }
}

fn bench_morphology(c: &mut Criterion) {
    let image = panel_image();
    c.bench_function("dilate x3 (128x128)", |b| {
        b.iter(|| {
            let mut p = processor(&image);
            p.perform_morphological_operation(MorphOp::Dilate, black_box(3), 0.5);
            black_box(p.into_image());
        });
    });
    c.bench_function("morphological gradient (128x128)", |b| {
        b.iter(|| {
            let mut p = processor(&image);
            p.perform_morphological_operation(MorphOp::Gradient, 1, black_box(0.5));
            black_box(p.into_image());
        });
    });
}

fn bench_edges_and_adaptive(c: &mut Criterion) {
    let image = panel_image();
    c.bench_function("sobel both (128x128)", |b| {
        b.iter(|| {
            let mut p = processor(&image);
            p.perform_sobel_edge_detection(black_box(EdgeDirection::Both));
            black_box(p.into_image());
        });
    });
    c.bench_function("adaptive threshold (128x128)", |b| {
        b.iter(|| {
            let mut p = processor(&image);
            p.perform_locally_adaptive_threshold(black_box(1.0));
            black_box(p.into_image());
        });
    });
}

criterion_group!(benches, bench_median, bench_morphology, bench_edges_and_adaptive);
criterion_main!(benches);
