use anyhow::Result;
use clap::Args;
use shared::client::DeskmateClient;
use shared::session::ChatSession;
use uuid::Uuid;

use super::{api_failure, format_item};

#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[arg(long, help = "Chat whose history to print (UUID)")]
    pub chat: Uuid,
}

pub async fn run(client: DeskmateClient, args: HistoryArgs) -> Result<()> {
    let mut session = ChatSession::with_chat(client, args.chat);
    session
        .load_history()
        .await
        .map_err(|err| api_failure(err, format!("load history of chat {}", args.chat)))?;

    let timeline = session.history().timeline();
    if timeline.is_empty() {
        println!("No messages yet.");
    }
    for item in &timeline {
        println!("{}\n", format_item(item));
    }
    Ok(())
}
