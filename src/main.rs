use vc_companion::{
    bot, config::Config, data::channel_meta::ChannelMetaStore, error::AppError, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;
    let store = ChannelMetaStore::new();

    let client = bot::start::init_bot(&config, store).await?;

    // Closing the gateway is the only cleanup; open companion channels are left as-is
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        startup::wait_for_shutdown().await;
        shard_manager.shutdown_all().await;
    });

    bot::start::start_bot(client).await
}
