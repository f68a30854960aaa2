use anyhow::{Result, bail};
use clap::Args;
use shared::client::DeskmateClient;
use shared::session::ChatSession;
use tracing::info;
use uuid::Uuid;

use super::report_outcome;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    #[arg(help = "The question to ask (quote it to keep spaces)")]
    pub question: String,

    /// Chat to ask in; a new chat is created when omitted
    #[arg(long, help = "Chat to ask in (UUID). A new chat is created when omitted.")]
    pub chat: Option<Uuid>,
}

pub async fn run(client: DeskmateClient, args: AskArgs) -> Result<()> {
    let mut session = match args.chat {
        Some(chat_id) => ChatSession::with_chat(client, chat_id),
        None => ChatSession::new(client),
    };

    let outcome = match session.add_question(&args.question).await {
        Ok(outcome) => outcome,
        Err(toast) => bail!("{}", toast.text),
    };
    info!(chat_id = %outcome.chat_id, answered = outcome.is_answered(), "question sent");
    report_outcome(&outcome)
}
