mod cli;
mod config;
mod dist;
mod styles;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}
