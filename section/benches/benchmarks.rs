use criterion::{criterion_group, criterion_main, Criterion};
use section::{MapScale, Profile, SampleSet};

fn ridge_samples() -> SampleSet {
    let pixel_distances: Vec<f64> = (0..24).map(|i| f64::from(i) * 40.0).collect();
    let altitudes_m: Vec<f64> = (0..24)
        .map(|i| 600.0 + 40.0 * (f64::from(i) * 0.7).sin())
        .collect();
    SampleSet::new(pixel_distances, altitudes_m).unwrap()
}

fn profile_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Section Profile");

    let samples = ridge_samples();
    let scale = MapScale::new(25_000);

    group.bench_with_input("24 knots", &(samples, scale), |b, (samples, scale)| {
        b.iter(|| {
            Profile::builder()
                .samples(samples.clone())
                .scale(*scale)
                .build()
                .unwrap()
        })
    });
}

criterion_group!(benches, profile_build);
criterion_main!(benches);
