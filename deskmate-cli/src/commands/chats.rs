use anyhow::Result;
use clap::{Args, Subcommand};
use shared::chats::ChatList;
use shared::client::DeskmateClient;
use shared::models::ChatEntity;
use uuid::Uuid;

use super::api_failure;

#[derive(Subcommand, Debug)]
pub enum ChatsCommand {
    /// List chats, newest first
    List,
    /// Rename a chat
    Rename(RenameArgs),
    /// Delete a chat and its history
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct RenameArgs {
    #[arg(long, help = "Chat to rename (UUID)")]
    pub chat: Uuid,

    #[arg(help = "New name for the chat")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[arg(long, help = "Chat to delete (UUID)")]
    pub chat: Uuid,
}

pub async fn run(client: &DeskmateClient, command: ChatsCommand) -> Result<()> {
    let mut chats = ChatList::default();
    match command {
        ChatsCommand::List => {
            chats
                .refresh(client)
                .await
                .map_err(|err| api_failure(err, "list chats"))?;
            if chats.is_empty() {
                println!("No chats yet.");
            }
            for chat in chats.iter() {
                println!("{}", format_chat(chat));
            }
        }
        ChatsCommand::Rename(args) => {
            let chat = chats
                .rename_chat(client, args.chat, &args.name)
                .await
                .map_err(|err| api_failure(err, format!("rename chat {}", args.chat)))?;
            println!("{}", format_chat(&chat));
        }
        ChatsCommand::Delete(args) => {
            chats
                .delete_chat(client, args.chat)
                .await
                .map_err(|err| api_failure(err, format!("delete chat {}", args.chat)))?;
            println!("Deleted chat {}", args.chat);
        }
    }
    Ok(())
}

fn format_chat(chat: &ChatEntity) -> String {
    let created = if chat.creation_time.is_empty() {
        "-"
    } else {
        chat.creation_time.as_str()
    };
    format!("{}  {}  {}", chat.chat_id, created, chat.chat_name)
}
