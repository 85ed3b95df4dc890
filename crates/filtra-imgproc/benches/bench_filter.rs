use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use filtra_image::{Image, ImageSize};
use filtra_imgproc::filter::{filter_2d, kernels};
use filtra_imgproc::parallel::ExecutionStrategy;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convolve3x3");

    for (width, height) in [(320, 240), (640, 480), (1280, 720)] {
        group.throughput(Throughput::Elements((width * height) as u64));
        let parameter_string = format!("{width}x{height}");

        let size = ImageSize { width, height };
        let mut rng = StdRng::seed_from_u64(0);
        let data = (0..width * height * 3).map(|_| rng.random()).collect();
        let image = Image::<u8, 3>::new(size, data).unwrap();
        let mut output = Image::from_size_val(size, 0).unwrap();
        let kernel = kernels::lookup("gaussian").unwrap();

        for (name, strategy) in [
            ("serial", ExecutionStrategy::Serial),
            ("fixed4", ExecutionStrategy::Fixed(4)),
            ("dynamic", ExecutionStrategy::Dynamic),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &strategy,
                |b, &strategy| {
                    b.iter(|| {
                        filter_2d(
                            black_box(&image),
                            black_box(&mut output),
                            black_box(&kernel),
                            strategy,
                        )
                        .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_convolve);
criterion_main!(benches);
