// tests/pipeline_execution_tests.rs
mod common;

use common::*;
use serial_test::serial;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use stepline::{ContextData, Pipeline, PipelineControl, PipelineResult, StepDef, StepError};

#[tokio::test]
#[serial]
async fn test_pipeline_runs_steps_in_order() {
  setup_tracing();
  let mut pipeline =
    Pipeline::<TestContext, TestError>::new(&[("step1", false, None), ("step2", false, None), ("step3", false, None)])
      .unwrap();

  pipeline.on("step1", create_simple_handler("step1", " S1")).unwrap();
  pipeline.on("step2", create_simple_handler("step2", " S2")).unwrap();
  pipeline.on("step3", create_simple_handler("step3", " S3")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Completed);
  let guard = ctx.read();
  assert_eq!(guard.counter, 3);
  assert_eq!(guard.message, " S1 S2 S3");
  assert_eq!(guard.steps_executed, vec!["step1", "step2", "step3"]);
}

#[tokio::test]
#[serial]
async fn test_pipeline_stops_on_pipeline_control_stop() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[
    ("stepA", false, None),
    ("stopStep", false, None),
    ("stepC", false, None),
  ])
  .unwrap();

  pipeline.on("stepA", create_simple_handler("stepA", "A")).unwrap();
  pipeline
    .on("stopStep", |ctx: ContextData<TestContext>| async move {
      ctx.write().steps_executed.push("stopStep".to_string());
      Ok::<_, StepError>(PipelineControl::Stop)
    })
    .unwrap();
  pipeline.on("stepC", create_simple_handler("stepC", "C")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Stopped);
  let guard = ctx.read();
  assert_eq!(guard.counter, 1);
  assert_eq!(guard.message, "A");
  assert_eq!(guard.steps_executed, vec!["stepA", "stopStep"]);
}

#[tokio::test]
#[serial]
async fn test_stop_in_before_phase_skips_on_and_after() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("guarded", false, None)]).unwrap();
  pipeline.before("guarded", create_simple_handler("guard", "G")).unwrap();
  pipeline.on("guarded", create_simple_handler("main", "M")).unwrap();
  pipeline.after("guarded", create_simple_handler("tail", "T")).unwrap();

  let ctx = ContextData::new(TestContext {
    should_stop_at: Some("guard".to_string()),
    ..Default::default()
  });
  let result = pipeline.run(ctx.clone()).await.unwrap();

  assert_eq!(result, PipelineResult::Stopped);
  assert_eq!(ctx.read().steps_executed, vec!["guard"]);
}

#[tokio::test]
#[serial]
async fn test_pipeline_propagates_handler_error() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[
    ("good_step", false, None),
    ("bad_step", false, None),
    ("another_step", false, None),
  ])
  .unwrap();

  pipeline.on("good_step", create_simple_handler("good_step", "Good")).unwrap();
  pipeline.on("bad_step", create_failing_handler("bad_step", "I am a bad step!")).unwrap();
  pipeline.on("another_step", create_simple_handler("another_step", "NeverRun")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap_err(), TestError::Handler("I am a bad step!".to_string()));
  let guard = ctx.read();
  assert_eq!(guard.counter, 1);
  assert_eq!(guard.message, "Good");
  assert_eq!(guard.steps_executed, vec!["good_step", "bad_step"]);
}

#[tokio::test]
#[serial]
async fn test_pipeline_skips_step_if_condition_met() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[
    ("step1", false, None),
    (
      "step_to_skip",
      false,
      Some(Arc::new(|ctx: ContextData<TestContext>| ctx.read().counter > 0)),
    ),
    ("step3", false, None),
  ])
  .unwrap();

  pipeline.on("step1", create_simple_handler("step1", " S1")).unwrap();
  pipeline.on("step_to_skip", create_simple_handler("step_to_skip", " SKIPPED")).unwrap();
  pipeline.on("step3", create_simple_handler("step3", " S3")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), PipelineResult::Completed);
  let guard = ctx.read();
  assert_eq!(guard.counter, 2);
  assert_eq!(guard.message, " S1 S3");
  assert_eq!(guard.steps_executed, vec!["step1", "step3"]);
}

#[tokio::test]
#[serial]
async fn test_step_def_builder_skip_condition() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::from_steps([
    StepDef::required("first"),
    StepDef::required("never").skip_if(|_| true),
  ])
  .unwrap();
  pipeline.on("first", create_simple_handler("first", "1")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let result = pipeline.run(ctx.clone()).await.unwrap();

  assert!(result.is_completed());
  assert_eq!(ctx.read().steps_executed, vec!["first"]);
}

#[tokio::test]
#[serial]
async fn test_optional_step_missing_handler_succeeds() {
  setup_tracing();
  let pipeline = Pipeline::<TestContext, TestError>::new(&[("optional_step_no_handler", true, None)]).unwrap();

  let ctx = ContextData::new(TestContext::default());
  assert_eq!(pipeline.run(ctx).await.unwrap(), PipelineResult::Completed);
}

#[tokio::test]
#[serial]
async fn test_before_on_after_execution_order() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("main_step", false, None)]).unwrap();

  pipeline.after("main_step", create_simple_handler("after_main", "After;")).unwrap();
  pipeline.on("main_step", create_simple_handler("on_main", "On;")).unwrap();
  pipeline.before("main_step", create_simple_handler("before_main", "Before;")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  pipeline.run(ctx.clone()).await.unwrap();

  let guard = ctx.read();
  assert_eq!(guard.counter, 3);
  assert_eq!(guard.message, "Before;On;After;");
  assert_eq!(guard.steps_executed, vec!["before_main", "on_main", "after_main"]);
}

#[tokio::test]
#[serial]
async fn test_multiple_on_handlers_run_in_registration_order() {
  setup_tracing();
  reset_counters();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("fanout", false, None)]).unwrap();
  for label in ["first", "second", "third"] {
    pipeline
      .on("fanout", move |ctx: ContextData<TestContext>| async move {
        HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
        ctx.write().steps_executed.push(label.to_string());
        Ok::<_, TestError>(PipelineControl::Continue)
      })
      .unwrap();
  }

  let ctx = ContextData::new(TestContext::default());
  pipeline.run(ctx.clone()).await.unwrap();

  assert_eq!(HANDLER_EXEC_COUNTER.load(Ordering::SeqCst), 3);
  assert_eq!(ctx.read().steps_executed, vec!["first", "second", "third"]);
}

#[tokio::test]
#[serial]
async fn test_handler_awaits_between_lock_scopes() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestContext, TestError>::new(&[("slow", false, None)]).unwrap();
  pipeline
    .on("slow", |ctx: ContextData<TestContext>| async move {
      let before = { ctx.read().counter };
      tokio::time::sleep(std::time::Duration::from_millis(5)).await;
      ctx.write().counter = before + 10;
      Ok::<_, TestError>(PipelineControl::Continue)
    })
    .unwrap();

  let ctx = ContextData::new(TestContext::default());
  pipeline.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().counter, 10);
}
