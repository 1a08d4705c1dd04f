use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or("BARES_LOG", "warn")).init();
    bares::cli::run();
}
