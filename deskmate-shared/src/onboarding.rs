//! Onboarding: the greeting and quick questions shown before regular chat.

use tracing::{info, warn};

use crate::client::{ApiError, ChatApi, OnboardingApi};
use crate::models::{Onboarding, OnboardingData, OnboardingUpdate, QuestionId};
use crate::placeholder::generate_timestamped_placeholder;
use crate::session::{ChatSession, QuestionOutcome, begin_question, ensure_chat};
use crate::toast::Toast;

/// Which onboarding steps the UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingState {
    flags: Onboarding,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::always_on()
    }
}

impl OnboardingState {
    /// Every step enabled. Onboarding is always shown before the first chat.
    #[must_use]
    pub const fn always_on() -> Self {
        Self {
            flags: Onboarding {
                onboarding_a: true,
                onboarding_b1: true,
                onboarding_b2: true,
                onboarding_b3: true,
            },
        }
    }

    #[must_use]
    pub const fn from_flags(flags: Onboarding) -> Self {
        Self { flags }
    }

    #[must_use]
    pub const fn flags(&self) -> Onboarding {
        self.flags
    }

    #[must_use]
    pub const fn is_onboarding(&self) -> bool {
        self.flags.onboarding_a
            || self.flags.onboarding_b1
            || self.flags.onboarding_b2
            || self.flags.onboarding_b3
    }

    #[must_use]
    pub const fn should_display_welcome_chat(&self) -> bool {
        self.flags.onboarding_a
    }

    #[must_use]
    pub const fn should_display_onboarding_a_instructions(&self) -> bool {
        self.flags.onboarding_a
    }

    /// Sends `update` and adopts the flags the server returns.
    ///
    /// # Errors
    /// Propagates the API failure; local flags are left unchanged.
    pub async fn update_onboarding<A: OnboardingApi + ?Sized>(
        &mut self,
        api: &A,
        update: &OnboardingUpdate,
    ) -> Result<Onboarding, ApiError> {
        let flags = api.update_onboarding(update).await?;
        info!(?flags, "onboarding updated");
        self.flags = flags;
        Ok(flags)
    }
}

/// Text of quick question `id`.
#[must_use]
pub fn question_text(data: &OnboardingData, id: QuestionId) -> &str {
    data.question(id)
}

/// Fetches the onboarding content and returns the text of question `id`.
///
/// # Errors
/// Returns a danger toast if the content cannot be fetched.
pub async fn fetch_question<A: OnboardingApi + ?Sized>(
    api: &A,
    id: QuestionId,
) -> Result<String, Toast> {
    let data = api.get_onboarding_data().await.map_err(|err| {
        warn!(error = %err, question = %id, "failed to fetch onboarding data");
        Toast::danger(err.to_string())
    })?;
    Ok(question_text(&data, id).to_string())
}

/// Asks onboarding question `id` in the session's chat, creating the chat
/// first when there is none.
///
/// # Errors
/// Returns a danger toast when the content cannot be fetched, the question
/// has no text, or the chat cannot be created. Posting failures are reported
/// in the outcome.
pub async fn ask_onboarding_question<A>(
    session: &mut ChatSession<A>,
    id: QuestionId,
) -> Result<QuestionOutcome, Toast>
where
    A: ChatApi + OnboardingApi,
{
    let text = fetch_question(session.api(), id).await?;
    let question = begin_question(&text)?;
    let (chat_id, chat_created) = ensure_chat(session.api(), session.chat_id(), question).await?;
    session.set_chat_id(Some(chat_id));

    let pending = generate_timestamped_placeholder(chat_id, question);
    Ok(session.send(chat_id, chat_created, pending).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FAKE_ANSWER, FakeApi};
    use crate::toast::ASK;
    use reqwest::StatusCode;
    use uuid::Uuid;

    #[test]
    fn always_on_shows_everything() {
        let state = OnboardingState::always_on();
        assert!(state.is_onboarding());
        assert!(state.should_display_welcome_chat());
        assert!(state.should_display_onboarding_a_instructions());
        assert_eq!(state, OnboardingState::default());
    }

    #[test]
    fn any_remaining_step_keeps_onboarding() {
        let state = OnboardingState::from_flags(Onboarding {
            onboarding_b3: true,
            ..Onboarding::default()
        });
        assert!(state.is_onboarding());
        assert!(!state.should_display_welcome_chat());

        assert!(!OnboardingState::from_flags(Onboarding::default()).is_onboarding());
    }

    #[tokio::test]
    async fn update_adopts_server_flags() {
        let api = FakeApi::default();
        let mut state = OnboardingState::always_on();

        state
            .update_onboarding(&api, &OnboardingUpdate::complete())
            .await
            .unwrap();

        assert!(!state.is_onboarding());
        assert_eq!(api.calls(), ["update_onboarding"]);
    }

    #[tokio::test]
    async fn onboarding_question_opens_chat_and_gets_answer() {
        let mut session = ChatSession::new(FakeApi::default());

        let outcome = ask_onboarding_question(&mut session, QuestionId::OnboardingB2)
            .await
            .unwrap();

        assert!(outcome.chat_created);
        assert_eq!(outcome.message.user_message, "Where is my order?");
        assert_eq!(outcome.message.assistant, FAKE_ANSWER);
        assert!(outcome.message.message_id.parse::<i64>().is_ok());
        assert_eq!(
            session.api().calls()[..2],
            ["get_onboarding_data", "create_chat:Where is my order?"]
        );
    }

    #[tokio::test]
    async fn onboarding_question_reuses_existing_chat() {
        let chat_id = Uuid::new_v4();
        let mut session = ChatSession::with_chat(FakeApi::default(), chat_id);

        let outcome = ask_onboarding_question(&mut session, QuestionId::OnboardingB1)
            .await
            .unwrap();

        assert_eq!(outcome.chat_id, chat_id);
        assert!(!outcome.chat_created);
        assert!(
            session
                .api()
                .calls()
                .iter()
                .all(|call| !call.starts_with("create_chat"))
        );
    }

    #[tokio::test]
    async fn onboarding_question_surfaces_creation_failure() {
        let api = FakeApi::default();
        api.create_chat_status.set(Some(StatusCode::TOO_MANY_REQUESTS));
        let mut session = ChatSession::new(api);

        let toast = ask_onboarding_question(&mut session, QuestionId::OnboardingB3)
            .await
            .unwrap_err();
        assert!(toast.is_danger());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn blank_onboarding_question_asks_for_input() {
        let api = FakeApi::default();
        *api.onboarding_data.borrow_mut() = OnboardingData::default();
        let mut session = ChatSession::new(api);

        let toast = ask_onboarding_question(&mut session, QuestionId::OnboardingB1)
            .await
            .unwrap_err();

        assert_eq!(toast, Toast::danger(ASK));
        assert_eq!(session.api().calls(), ["get_onboarding_data"]);
        assert_eq!(session.chat_id(), None);
        assert!(session.history().is_empty());
    }

    #[test]
    fn question_text_picks_matching_field() {
        let data = OnboardingData {
            onboarding_b3: "Close account?".into(),
            ..OnboardingData::default()
        };
        assert_eq!(question_text(&data, QuestionId::OnboardingB3), "Close account?");
        assert_eq!(question_text(&data, QuestionId::OnboardingB1), "");
    }
}
