use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gen_lessons::{config, manifest};

fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gen_lessons=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let root = config::load_content_root();

  match manifest::generate(&root) {
    Ok(summary) => {
      manifest::report(&summary);
      ExitCode::SUCCESS
    }
    Err(e) => {
      tracing::error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
