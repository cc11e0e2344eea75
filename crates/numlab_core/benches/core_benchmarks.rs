//! Criterion benchmarks for numlab_core sampling, integration and search.
//!
//! Measures throughput of the uniform source and variate generators across
//! sample sizes, and the cost of each integrator and solver at fixed settings.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numlab_core::integration::{CrudeMonteCarloIntegrator, HitOrMissIntegrator, IntegrationConfig};
use numlab_core::math::solvers::{BisectionSolver, GoldenSectionSolver, SearchConfig};
use numlab_core::rng::UniformSource;
use numlab_core::variates::{
    clt_mean_sigma_sequence, exponential_inverse, poisson_inverse, rejection_box_sequence,
    SamplingBox, DEFAULT_CLT_TERMS,
};

/// Benchmark uniform filling and the variate generators built on it.
fn bench_variates(c: &mut Criterion) {
    let mut group = c.benchmark_group("variates");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("uniform_fill", size), &size, |b, &n| {
            let mut source = UniformSource::from_seed(1);
            let mut buffer = vec![0.0; n];
            b.iter(|| source.fill_uniform(black_box(&mut buffer)));
        });

        group.bench_with_input(BenchmarkId::new("clt_mean_sigma", size), &size, |b, &n| {
            let mut source = UniformSource::from_seed(2);
            b.iter(|| clt_mean_sigma_sequence(&mut source, 0.0, 1.0, n, DEFAULT_CLT_TERMS, None));
        });

        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, &n| {
            let mut source = UniformSource::from_seed(3);
            b.iter(|| exponential_inverse(&mut source, black_box(2.0), n, None));
        });

        group.bench_with_input(BenchmarkId::new("poisson", size), &size, |b, &n| {
            let mut source = UniformSource::from_seed(4);
            b.iter(|| poisson_inverse(&mut source, black_box(5.0), n, None));
        });

        // Acceptance rate 2 / π for sin(x) in [0, π] x [0, 1]
        let bounds = SamplingBox::with_zero_floor(0.0, std::f64::consts::PI, 1.0);
        group.bench_with_input(BenchmarkId::new("rejection_sine", size), &size, |b, &n| {
            let mut source = UniformSource::from_seed(5);
            b.iter(|| rejection_box_sequence(&mut source, f64::sin, bounds, n, None));
        });
    }

    group.finish();
}

/// Benchmark both integrators on the same integrand and event count.
fn bench_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration");
    let f = |x: f64| x.sin() * x.sin();

    for n_evt in [10_000, 100_000] {
        let config = IntegrationConfig::builder()
            .n_evt(n_evt)
            .seed(42)
            .build()
            .unwrap();

        let hit_or_miss = HitOrMissIntegrator::new(config);
        group.bench_with_input(BenchmarkId::new("hit_or_miss", n_evt), &hit_or_miss, |b, integrator| {
            let mut source = UniformSource::from_seed(0);
            b.iter(|| integrator.integrate(&mut source, f, 0.0, black_box(3.0), 1.0));
        });

        let crude = CrudeMonteCarloIntegrator::new(config);
        group.bench_with_input(BenchmarkId::new("crude", n_evt), &crude, |b, integrator| {
            let mut source = UniformSource::from_seed(0);
            b.iter(|| integrator.integrate(&mut source, f, 0.0, black_box(3.0)));
        });
    }

    group.finish();
}

/// Benchmark bisection and golden-section search across precisions.
fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");

    for precision in [1e-4, 1e-8, 1e-12] {
        let config = SearchConfig::with_precision(precision);

        let bisection = BisectionSolver::new(config);
        group.bench_with_input(
            BenchmarkId::new("bisection", precision),
            &bisection,
            |b, solver| {
                b.iter(|| solver.find_root(|x: f64| x.cos() - x, black_box(0.0), 1.0).unwrap());
            },
        );

        let golden = GoldenSectionSolver::new(config);
        group.bench_with_input(BenchmarkId::new("golden", precision), &golden, |b, solver| {
            b.iter(|| {
                solver
                    .find_extremum(|x: f64| (x - 2.0).powi(2), black_box(-10.0), 10.0, true)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_variates, bench_integration, bench_solvers);
criterion_main!(benches);
