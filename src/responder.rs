use std::future::Future;

use poise::serenity_prelude::{Context, GuildId, Message, UserId};
use tracing::{debug, error, info};

use crate::matcher;

pub(crate) struct Data {}

pub(crate) type Error = Box<dyn std::error::Error + Send + Sync>;

/// A user explicitly mentioned in the triggering message.
pub(crate) struct Mention {
    pub id: UserId,
    pub username: String,
}

/// Decides how to react to a message.
///
/// Returns the reply to send back to the channel, or `None` to stay silent.
/// `rename` is the remote nickname change; it is only invoked when the
/// message is a well-formed command addressed to exactly one user. Its
/// failure ends up in the reply text, never anywhere worse.
pub(crate) async fn decide<F, Fut>(
    sender_id: UserId,
    bot_id: UserId,
    content: &str,
    guild_id: GuildId,
    mentions: &[Mention],
    rename: F,
) -> Option<String>
where
    F: FnOnce(GuildId, UserId, String) -> Fut,
    Fut: Future<Output = Result<(), Error>>,
{
    if sender_id == bot_id {
        return None;
    }

    let command = matcher::parse(content)?;

    match mentions {
        // A command that addresses nobody is dropped without comment,
        // unlike the many-mentions case below which gets an error reply.
        [] => None,
        [subject] => {
            debug!(?command, subject = %subject.username, "matched rename command");
            match rename(guild_id, subject.id, command.new_nick.clone()).await {
                Ok(()) => Some(format!("Renamed {} to {}", subject.username, command.new_nick)),
                Err(e) => {
                    error!(
                        subject = %subject.username,
                        new_nick = %command.new_nick,
                        error = %e,
                        "Error renaming user"
                    );
                    Some(format!(
                        "Error: Could not rename {} to {}: {}",
                        subject.username, command.new_nick, e
                    ))
                }
            }
        }
        many => Some(format!(
            "Error: You mentioned {} users instead of 1",
            many.len()
        )),
    }
}

/// Glue from a gateway message event to [`decide`] and back.
pub(crate) async fn handle_message(ctx: &Context, msg: &Message) -> Result<(), Error> {
    // No guild, no member to rename.
    let guild_id = match msg.guild_id {
        Some(guild_id) => guild_id,
        None => return Ok(()),
    };

    let bot_id = ctx.cache.current_user_id();
    let mentions: Vec<Mention> = msg
        .mentions
        .iter()
        .map(|user| Mention {
            id: user.id,
            username: user.name.clone(),
        })
        .collect();

    let reply = decide(
        msg.author.id,
        bot_id,
        &msg.content,
        guild_id,
        &mentions,
        |guild_id, user_id, new_nick| async move {
            guild_id
                .edit_member(&ctx.http, user_id, |member| member.nickname(new_nick))
                .await?;
            Ok(())
        },
    )
    .await;

    if let Some(text) = reply {
        info!(
            in_user = %msg.author.name,
            in_msg = %msg.content,
            message = %text,
            "replying"
        );
        msg.channel_id.say(&ctx.http, text).await?;
    }

    Ok(())
}
