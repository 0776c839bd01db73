use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use picblur_image::{ColorMode, Picture, PixelGrid};
use picblur_imgproc::{
    filter::{blur_with_options, convolve_with_options, kernels, BlurOptions, ConvolveOptions},
    parallel::ExecutionStrategy,
};

fn bench_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gaussian Blur");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        for radius in [3, 5, 9, 17].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *radius) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, radius);

            // input picture
            let image_data = (0..width * height * 3)
                .map(|i| (i % 256) as f64)
                .collect::<Vec<_>>();
            let image_size = [*width, *height].into();
            let pixels = PixelGrid::new(image_size, 3, image_data).unwrap();
            let picture = Picture::new(pixels, ColorMode::Rgb).unwrap();
            let kernel = kernels::gaussian_kernel_2d(*radius).unwrap();

            for (name, strategy) in [
                ("serial", ExecutionStrategy::Serial),
                ("parallel", ExecutionStrategy::Parallel),
            ] {
                group.bench_with_input(
                    BenchmarkId::new(format!("convolve_{name}"), &parameter_string),
                    &picture,
                    |b, i| {
                        let options = ConvolveOptions {
                            strategy,
                            ..Default::default()
                        };
                        b.iter(|| {
                            black_box(convolve_with_options(
                                i.pixels(),
                                &kernel,
                                i.mode(),
                                &options,
                            ))
                        })
                    },
                );
            }

            group.bench_with_input(
                BenchmarkId::new("blur_auto", &parameter_string),
                &picture,
                |b, i| {
                    let options = BlurOptions::default();
                    b.iter(|| black_box(blur_with_options(i, *radius, &options)))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_blur);
criterion_main!(benches);
