//! Synthesis benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagekit_codegen::{SynthesisRequest, Synthesizer};
use pagekit_core::{Archetype, Target};

fn synthesize_all(c: &mut Criterion) {
    let synthesizer = Synthesizer::new();
    let mut group = c.benchmark_group("synthesize");
    for target in Target::ALL {
        for archetype in Archetype::ALL {
            let request = SynthesisRequest::new(archetype.as_str(), target.as_str());
            group.bench_with_input(
                BenchmarkId::new(target.as_str(), archetype.as_str()),
                &request,
                |b, request| b.iter(|| synthesizer.synthesize(black_box(request))),
            );
        }
    }
    group.finish();
}

fn construct(c: &mut Criterion) {
    c.bench_function("synthesizer_new", |b| b.iter(Synthesizer::new));
}

criterion_group!(benches, synthesize_all, construct);
criterion_main!(benches);
