use anyhow::Result;
use clap::Parser;
use eolnorm::{cmd, version};

#[derive(Parser)]
#[command(name = "eolnorm")]
#[command(about = "Normalizes CRLF line endings to LF across a source tree")]
#[command(version = Box::leak(version::version_string().into_boxed_str()) as &'static str)]
struct Cli {}

fn main() -> Result<()> {
   tracing_subscriber::fmt()
      .with_env_filter(
         tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::WARN.into()),
      )
      .init();

   let _cli = Cli::parse();

   cmd::normalize::execute()?;
   Ok(())
}
