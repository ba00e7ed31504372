mod matcher;
mod responder;

use poise::serenity_prelude::GatewayIntents;
use std::env;
use tracing::info;

use crate::responder::{Data, Error};

#[tokio::main]
async fn main() {
    // This will load the environment variables located at `./.env`, relative
    // to the CWD, if such a file exists. See `./.env.example` for an example
    // on how to structure this.
    dotenv::dotenv().ok();

    // Initialize the logger to use environment variables.
    //
    // In this case, a good default is setting the environment variable
    // `RUST_LOG` to `debug`.
    tracing_subscriber::fmt::init();

    // Compile the command pattern now; a broken pattern is a startup
    // failure, not a first-message one.
    matcher::init();

    let token = env::var("DISCORD_TOKEN").expect("Expected a token in the environment");

    let gateway_intents = GatewayIntents::non_privileged()
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions::<Data, Error> {
            event_handler: |ctx, event, _framework, _data| {
                Box::pin(async move {
                    if let poise::Event::Message { new_message } = event {
                        responder::handle_message(ctx, new_message).await?;
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .token(token)
        .intents(gateway_intents)
        .setup(|_ctx, ready, _framework| {
            Box::pin(async move {
                info!(username = %ready.user.name, "Connected to Discord");
                Ok(Data {})
            })
        })
        .build()
        .await
        .expect("Error creating client");

    let shard_manager = framework.shard_manager().clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Error listening for the shutdown signal");
        info!("Shutting down");
        shard_manager.lock().await.shutdown_all().await;
    });

    framework.start().await.expect("Error connecting to Discord");
}
