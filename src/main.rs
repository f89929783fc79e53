use arc_distance_field::{
  error::{self, Result},
  pipeline,
  profile
};

fn run() -> Result<()> {
  profile!("total", pipeline::generate_default())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  if let Err(e) = run() {
    error::display(&e);
    std::process::exit(1);
  }
}
