use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stepline::{ContextData, Pipeline, PipelineControl, PipelineRegistry, PipelineResult, StepDef, StepError};
use tokio::runtime::Runtime;

#[derive(Clone, Debug, Default)]
struct BenchContext {
  counter: u64,
}

fn build_pipeline(num_steps: usize, iterations: u64) -> Pipeline<BenchContext, StepError> {
  let mut pipeline =
    Pipeline::from_steps((0..num_steps).map(|i| StepDef::required(format!("step_{}", i)))).expect("unique step names");
  for i in 0..num_steps {
    pipeline
      .on(&format!("step_{}", i), move |ctx: ContextData<BenchContext>| async move {
        let mut data = ctx.write();
        for _ in 0..iterations {
          data.counter = data.counter.wrapping_add(1);
        }
        Ok::<_, StepError>(PipelineControl::Continue)
      })
      .expect("step exists");
  }
  pipeline
}

fn bench_pipeline_run(c: &mut Criterion) {
  let mut group = c.benchmark_group("PipelineRun");
  let rt = Runtime::new().expect("tokio runtime");

  for num_steps in [1usize, 5, 10] {
    for iterations in [1u64, 100] {
      let pipeline = build_pipeline(num_steps, iterations);
      group.bench_with_input(
        BenchmarkId::new(format!("steps_{}", num_steps), iterations),
        &iterations,
        |b, _| {
          b.to_async(&rt).iter(|| async {
            let ctx = ContextData::new(BenchContext::default());
            let result = pipeline.run(ctx).await.expect("pipeline run");
            assert_eq!(result, PipelineResult::Completed);
          })
        },
      );
    }
  }
  group.finish();
}

fn bench_registry_dispatch(c: &mut Criterion) {
  let rt = Runtime::new().expect("tokio runtime");
  let registry = PipelineRegistry::<StepError>::new();
  registry.register(build_pipeline(3, 1));

  c.bench_function("RegistryDispatch/3_steps", |b| {
    b.to_async(&rt).iter(|| async {
      let ctx = ContextData::new(BenchContext::default());
      registry.run(ctx).await.expect("registry run");
    })
  });
}

criterion_group!(benches, bench_pipeline_run, bench_registry_dispatch);
criterion_main!(benches);
