//! Prediction throughput against a generated corpus.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use verity_classify::TruthEngine;
use verity_core::config::VerityConfig;
use verity_core::errors::VerityResult;
use verity_core::models::StatementRecord;
use verity_core::traits::IDatasetSource;
use verity_dataset::CorpusGenerator;

struct GeneratedSource(Vec<StatementRecord>);

impl IDatasetSource for GeneratedSource {
    fn load(&self) -> VerityResult<Vec<StatementRecord>> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "generated"
    }
}

fn trained_engine() -> TruthEngine {
    let mut generator = CorpusGenerator::new();
    generator.generate_all(250);
    let source = GeneratedSource(generator.into_records());
    let mut engine = TruthEngine::new(VerityConfig::default(), Box::new(source));
    engine.train().expect("training succeeds");
    engine
}

fn bench_predict(c: &mut Criterion) {
    let engine = trained_engine();

    c.bench_function("predict_known_fact", |b| {
        b.iter(|| engine.predict(black_box("Madrid is the capital of Spain")))
    });

    c.bench_function("predict_arithmetic", |b| {
        b.iter(|| engine.predict(black_box("17 + 5 = 22")))
    });

    c.bench_function("predict_unknown_text", |b| {
        b.iter(|| engine.predict(black_box("entirely novel wording with no overlap")))
    });
}

fn bench_train(c: &mut Criterion) {
    let mut generator = CorpusGenerator::new();
    generator.generate_all(100);
    let records = generator.into_records();

    c.bench_function("train_generated_corpus", |b| {
        b.iter(|| {
            let source = GeneratedSource(records.clone());
            let mut engine = TruthEngine::new(VerityConfig::default(), Box::new(source));
            engine.train().expect("training succeeds");
            black_box(engine.is_trained())
        })
    });
}

criterion_group!(benches, bench_predict, bench_train);
criterion_main!(benches);
