use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use shared::client::{DeskmateClient, OnboardingApi};
use shared::models::{OnboardingUpdate, QuestionId};
use shared::onboarding::{OnboardingState, ask_onboarding_question, question_text};
use shared::session::ChatSession;
use uuid::Uuid;

use super::{api_failure, report_outcome};

#[derive(Subcommand, Debug)]
pub enum OnboardingCommand {
    /// Print the greeting and the quick questions
    Show,
    /// Ask one of the quick questions
    Ask(OnboardingAskArgs),
    /// Mark every onboarding step as done
    Complete,
}

#[derive(Args, Debug)]
pub struct OnboardingAskArgs {
    #[arg(help = "Quick question to ask (b1, b2 or b3)")]
    pub question: QuestionId,

    #[arg(long, help = "Chat to ask in (UUID). A new chat is created when omitted.")]
    pub chat: Option<Uuid>,
}

pub async fn run(client: DeskmateClient, command: OnboardingCommand) -> Result<()> {
    match command {
        OnboardingCommand::Show => {
            let data = client
                .get_onboarding_data()
                .await
                .map_err(|err| api_failure(err, "fetch onboarding content"))?;
            println!("{}\n", data.greeting);
            for id in QuestionId::ALL {
                println!("{}: {}", short_name(id), question_text(&data, id));
            }
        }
        OnboardingCommand::Ask(args) => {
            let mut session = match args.chat {
                Some(chat_id) => ChatSession::with_chat(client, chat_id),
                None => ChatSession::new(client),
            };
            let outcome = match ask_onboarding_question(&mut session, args.question).await {
                Ok(outcome) => outcome,
                Err(toast) => bail!("{}", toast.text),
            };
            report_outcome(&outcome)?;
        }
        OnboardingCommand::Complete => {
            let mut state = OnboardingState::always_on();
            state
                .update_onboarding(&client, &OnboardingUpdate::complete())
                .await
                .map_err(|err| api_failure(err, "update onboarding"))?;
            if state.is_onboarding() {
                println!("Onboarding still has open steps.");
            } else {
                println!("Onboarding complete.");
            }
        }
    }
    Ok(())
}

fn short_name(id: QuestionId) -> &'static str {
    id.as_str().trim_start_matches("onboarding_")
}
