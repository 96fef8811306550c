// stepline/examples/basic_pipeline.rs

use stepline::{ContextData, Pipeline, PipelineControl, PipelineRegistry, StepError};
use tracing::info;

#[derive(Clone, Debug, Default)]
struct SignupContext {
  raw_email: String,
  email: Option<String>,
  saved: bool,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
  #[error("invalid email: {0}")]
  InvalidEmail(String),
  #[error(transparent)]
  Engine(#[from] StepError),
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let mut pipeline = Pipeline::<SignupContext, DemoError>::new(&[
    ("sanitize", false, None),
    ("validate", false, None),
    ("persist", false, None),
  ])?;

  pipeline.on("sanitize", |ctx: ContextData<SignupContext>| async move {
    let mut data = ctx.write();
    data.email = Some(data.raw_email.trim().to_lowercase());
    Ok::<_, DemoError>(PipelineControl::Continue)
  })?;

  pipeline.on("validate", |ctx: ContextData<SignupContext>| async move {
    let email = ctx.read().email.clone().unwrap_or_default();
    if !email.contains('@') {
      return Err(DemoError::InvalidEmail(email));
    }
    Ok(PipelineControl::Continue)
  })?;

  pipeline.on("persist", |ctx: ContextData<SignupContext>| async move {
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    ctx.write().saved = true;
    Ok::<_, DemoError>(PipelineControl::Continue)
  })?;

  let registry = PipelineRegistry::<DemoError>::new();
  registry.register(pipeline);

  let ctx = ContextData::new(SignupContext {
    raw_email: "  Ada@Example.COM ".to_string(),
    ..Default::default()
  });
  let result = registry.run(ctx.clone()).await?;

  let final_state = ctx.snapshot();
  info!(?result, email = ?final_state.email, saved = final_state.saved, "Signup pipeline finished.");
  Ok(())
}
