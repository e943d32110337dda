use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pattern_sense_core::Sequence;
use pattern_sense_detector::{
    ArithmeticDetector, DetectionContext, GeometricDetector, SequenceClassifier,
    SequenceDetector, ShapeAnalyzer, SymmetryDetector, TrendDetector,
};

/// Representative five-element inputs
fn sample_sequences() -> Vec<(&'static str, Sequence)> {
    vec![
        ("arithmetic", Sequence::from([2, 4, 6, 8, 10])),
        ("geometric", Sequence::from([2, 4, 8, 16, 32])),
        ("symmetric", Sequence::from([1, 2, 3, 2, 1])),
        ("constant", Sequence::from([7, 7, 7, 7, 7])),
        ("fluctuating", Sequence::from([3, -1, 4, 1, -5])),
    ]
}

fn bench_full_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = SequenceClassifier::new();

    for (name, sequence) in sample_sequences() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &sequence, |b, s| {
            b.iter(|| {
                let result = classifier.classify(black_box(s));
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_long_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_long");
    let classifier = SequenceClassifier::new();

    for len in [16usize, 256, 4096] {
        let sequence = Sequence::new((0..len as i32).map(|i| i * 3).collect());
        group.bench_with_input(BenchmarkId::from_parameter(len), &sequence, |b, s| {
            b.iter(|| {
                let result = classifier.classify(black_box(s));
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_detectors(c: &mut Criterion) {
    let sequence = Sequence::from([2, 4, 8, 16, 32]);
    let context = DetectionContext::default();

    let detectors: Vec<Box<dyn SequenceDetector>> = vec![
        Box::new(ArithmeticDetector::new()),
        Box::new(GeometricDetector::new()),
        Box::new(SymmetryDetector::new()),
        Box::new(TrendDetector::new()),
    ];

    for detector in &detectors {
        c.bench_function(&format!("{}_detector", detector.name()), |b| {
            b.iter(|| {
                let detection = detector.detect(black_box(&sequence), black_box(&context));
                black_box(detection);
            });
        });
    }
}

fn bench_shape_analyzer(c: &mut Criterion) {
    let sequence = Sequence::from([3, 1, 2, 2, 2]);
    let analyzer = ShapeAnalyzer::new();

    c.bench_function("shape_analyzer", |b| {
        b.iter(|| {
            let shape = analyzer.analyze(black_box(&sequence));
            black_box(shape);
        });
    });
}

criterion_group!(
    benches,
    bench_full_classification,
    bench_long_sequences,
    bench_detectors,
    bench_shape_analyzer
);
criterion_main!(benches);
