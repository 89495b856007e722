mod app;
mod input;

fn main() -> anyhow::Result<()>
{
  // RUST_LOG overrides the default filter, e.g. RUST_LOG=strider_core=trace
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,strider_core=debug")).init();

  app::run()
}
