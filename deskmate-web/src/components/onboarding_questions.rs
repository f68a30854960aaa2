use shared::models::QuestionId;
use yew::{Callback, Html, Properties, function_component, html};

use crate::hooks::use_onboarding_question;

#[derive(Properties, PartialEq)]
pub struct OnboardingQuestionProps {
    pub question_id: QuestionId,
}

#[function_component(OnboardingQuestion)]
pub fn onboarding_question(props: &OnboardingQuestionProps) -> Html {
    let question = use_onboarding_question(props.question_id);
    if question.question.is_empty() {
        return Html::default();
    }

    let onclick = {
        let handle_click = question.handle_click.clone();
        Callback::from(move |_| handle_click.emit(()))
    };

    html! {
        <button class="btn btn-outline btn-sm justify-start normal-case" type="button" {onclick}>
            { question.question.clone() }
        </button>
    }
}

#[function_component(OnboardingQuestions)]
pub fn onboarding_questions() -> Html {
    html! {
        <div class="flex flex-col gap-2">
            { for QuestionId::ALL.into_iter().map(|question_id| html! {
                <OnboardingQuestion key={question_id.as_str()} {question_id} />
            })}
        </div>
    }
}
