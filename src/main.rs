use impulse::{
    feeds::{Feed, Historical},
    Config, Error, ImpulseMacd,
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting impulse.");

    if let Err(err) = run().await {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let mut impulse = ImpulseMacd::new(config.length_ma, config.length_signal)?;

    let values = Historical::new(&config.bars).run(&mut impulse).await?;
    for value in &values {
        println!("{}", value);
    }

    if let Some(latest) = impulse.latest() {
        log::info!("Processed {} bars, latest: {}", values.len(), latest);
    } else {
        log::info!("No bars in {}", config.bars.display());
    }

    Ok(())
}
