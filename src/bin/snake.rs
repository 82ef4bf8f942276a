use battlesnake_wallflower::{config::Config, server};
use color_eyre::Result;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let config = Config::from_env()?;
    info!("running {} at http://{}", server::SERVER, config.addr());

    warp::serve(server::routes()).run(config.addr()).await;

    Ok(())
}
