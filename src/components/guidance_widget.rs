use yew::prelude::*;
use web_sys::HtmlTextAreaElement;
use wasm_bindgen_futures::spawn_local;

use crate::api::client;
use crate::api::models::Feature;
use crate::components::lead_gate::LeadGate;
use crate::components::usage_counter::UsageCounter;
use crate::content::{whatsapp_link, EXAMPLE_QUESTIONS};
use crate::reading::{
    question_len, settle, truncate_question, usage_for, Phase, GUIDANCE_FALLBACK_ERROR,
    MAX_QUESTION_CHARS,
};
use crate::session::{Session, SessionContext};

/// Whether a question may be sent right now.
pub fn can_ask(question: &str, phase: &Phase, session: &Session) -> bool {
    !question.trim().is_empty() && !phase.is_loading() && session.can_use(Feature::Guidance)
}

#[function_component(GuidanceWidget)]
pub fn guidance_widget() -> Html {
    let session = use_context::<SessionContext>().expect("GuidanceWidget rendered outside SessionProvider");
    let question = use_state(String::new);
    let phase = use_state(Phase::default);

    let ask = {
        let session = session.clone();
        let question = question.clone();
        let phase = phase.clone();
        Callback::from(move |_: ()| {
            if !can_ask(&question, &phase, &session) {
                return;
            }
            phase.set(Phase::Loading);
            log::info!("asking for guidance");

            let session = session.clone();
            let phase = phase.clone();
            let text = (*question).clone();
            spawn_local(async move {
                let next = settle(client::ask_guidance(&text).await, GUIDANCE_FALLBACK_ERROR);
                if let Some(action) = usage_for(Feature::Guidance, &next) {
                    session.dispatch(action);
                }
                phase.set(next);
            });
        })
    };

    let on_input = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            question.set(truncate_question(&input.value()));
        })
    };

    let on_keydown = {
        let ask = ask.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && (e.ctrl_key() || e.meta_key()) {
                ask.emit(());
            }
        })
    };

    let reset = {
        let question = question.clone();
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            question.set(String::new());
            phase.set(Phase::Idle);
        })
    };

    let limit_reached = session.limit_reached(Feature::Guidance);
    let disabled = !can_ask(&question, &phase, &session);

    html! {
        <div class="guidance-section">
            <div class="guidance-orb-badge">{"⭐ Powered by Gemini AI · Vedic Astrology"}</div>

            <LeadGate feature={Feature::Guidance} />
            <UsageCounter feature={Feature::Guidance} />

            <textarea
                class="guidance-textarea"
                placeholder="Ask your astrology question... e.g. 'I was born on 4th January 1982 at 8 AM in Delhi. What does my chart say about my career?' Be specific for better guidance!"
                value={(*question).clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            <div class="char-counter">{format!("{}/{}", question_len(&question), MAX_QUESTION_CHARS)}</div>

            <div class="guidance-examples">
                { for EXAMPLE_QUESTIONS.iter().map(|&q| {
                    let question = question.clone();
                    let onclick = Callback::from(move |_: MouseEvent| question.set(truncate_question(q)));
                    html! { <span class="guidance-example-chip" {onclick}>{q}</span> }
                }) }
            </div>

            <button class="guidance-submit-btn" onclick={ask.reform(|_: MouseEvent| ())} {disabled}>
                {
                    if phase.is_loading() {
                        html! { <><span class="loading-star">{"✦"}</span>{" Consulting the Stars..."}</> }
                    } else if limit_reached {
                        html! { {"🔒 Free Limit Reached"} }
                    } else {
                        html! { {"🔮 Get Astrology Guidance"} }
                    }
                }
            </button>

            if let Some(message) = phase.error() {
                <div class="guidance-error-box">{format!("⚠️ {}", message)}</div>
            }

            if let Some(text) = phase.text() {
                <div class="guidance-response-box">
                    <div class="guidance-response-header">
                        <span>{"🌟"}</span>
                        <span>{"Your Cosmic Guidance"}</span>
                    </div>
                    <div class="guidance-response-text">{text.to_string()}</div>
                    <div class="result-cta">
                        <a
                            href={whatsapp_link(Some("Hi, I would like a detailed consultation"))}
                            class="btn btn-primary"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Book Full Consultation"}
                        </a>
                        <button class="btn btn-secondary" onclick={reset}>
                            {"Ask Another Question"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FEATURE_LIMIT;

    fn unlocked(uses: u32) -> Session {
        Session {
            lead_submitted: true,
            guidance_uses: uses,
            ..Session::default()
        }
    }

    #[test]
    fn blank_question_cannot_be_sent() {
        assert!(!can_ask("   ", &Phase::Idle, &unlocked(0)));
    }

    #[test]
    fn locked_session_cannot_ask() {
        assert!(!can_ask("When will I marry?", &Phase::Idle, &Session::default()));
    }

    #[test]
    fn no_resubmission_while_loading() {
        assert!(!can_ask("When will I marry?", &Phase::Loading, &unlocked(0)));
    }

    #[test]
    fn third_call_is_not_dispatched() {
        assert!(can_ask("Career?", &Phase::Idle, &unlocked(FEATURE_LIMIT - 1)));
        assert!(!can_ask("Career?", &Phase::Idle, &unlocked(FEATURE_LIMIT)));
    }

    #[test]
    fn a_failed_attempt_can_be_retried_by_hand() {
        let failed = Phase::Failure("Unable to get guidance. Please try again.".to_string());
        assert!(can_ask("Career?", &failed, &unlocked(1)));
    }
}
