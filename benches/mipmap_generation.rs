use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use texture_viewer::core::actions::generate_mipmaps::generate_mip_chain;
use texture_viewer::core::actions::plan_texture_slices::plan_texture_slices;
use texture_viewer::core::data::rgba_image::RgbaImage;

fn gradient(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for (i, texel) in image.buffer_mut().chunks_exact_mut(4).enumerate() {
        let x = (i as u32 % width) as u8;
        let y = (i as u32 / width) as u8;
        texel.copy_from_slice(&[x, y, x ^ y, 255]);
    }
    image
}

fn bench_mip_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("mip_chain");

    for &(width, height) in &[(512, 512), (1920, 1080), (4096, 4096)] {
        let base = gradient(width, height);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &base,
            |b, base| b.iter(|| generate_mip_chain(black_box(base.clone()))),
        );
    }

    group.finish();
}

fn bench_slice_plan(c: &mut Criterion) {
    c.bench_function("plan_texture_slices_32k", |b| {
        b.iter(|| plan_texture_slices(black_box(32_768), black_box(20_000), black_box(8192)))
    });
}

criterion_group!(benches, bench_mip_chain, bench_slice_plan);
criterion_main!(benches);
