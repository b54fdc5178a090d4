#![allow(non_snake_case)]
mod app;
mod components;
mod hooks;

fn main() {
  let default_log_level = "info";
  let env = env_logger::Env::default().filter_or("RUST_LOG", default_log_level);
  env_logger::init_from_env(env);

  log::info!("starting isogrid keyboard");
  dioxus::launch(app::App);
}
