use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::api::client;
use crate::api::models::Feature;
use crate::lead::{submit_gate, GateOutcome, PHONE_INPUT_MAX_LEN};
use crate::session::SessionContext;

#[derive(Properties, PartialEq)]
pub struct LeadGateProps {
    pub feature: Feature,
}

/// Name/phone form shown above an AI widget until the visit is unlocked.
#[function_component(LeadGate)]
pub fn lead_gate(props: &LeadGateProps) -> Html {
    let session = use_context::<SessionContext>().expect("LeadGate rendered outside SessionProvider");
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let error = use_state(|| None::<String>);

    let submit = {
        let session = session.clone();
        let name = name.clone();
        let phone = phone.clone();
        let error = error.clone();
        let feature = props.feature;
        Callback::from(move |_: ()| {
            let outcome = submit_gate(&name, &phone, feature);
            if let Some(action) = outcome.session_action() {
                // Unlock first; the save below never decides access.
                session.dispatch(action);
                error.set(None);
                log::info!("lead captured from {} widget", feature.as_str());
            }
            if let Some(lead) = outcome.lead_to_save().cloned() {
                spawn_local(async move {
                    match client::save_lead(&lead).await {
                        Ok(reply) if !reply.success => {
                            log::warn!(
                                "lead not saved: {}",
                                reply.error.unwrap_or_else(|| "no reason given".to_string())
                            );
                        }
                        Ok(_) => {}
                        Err(e) => log::warn!("background lead save failed: {}", e),
                    }
                });
            }
            if let GateOutcome::Rejected(message) = outcome {
                error.set(Some(message));
            }
        })
    };

    if session.lead_submitted {
        return html! {};
    }

    let on_enter = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    html! {
        <div class="inline-lead-form">
            <div class="inline-lead-inputs">
                <input
                    type="text"
                    class="inline-lead-input"
                    placeholder="Your Name"
                    value={(*name).clone()}
                    oninput={{
                        let name = name.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        })
                    }}
                    onkeydown={on_enter.clone()}
                />
                <input
                    type="tel"
                    class="inline-lead-input"
                    placeholder="Phone Number"
                    maxlength={PHONE_INPUT_MAX_LEN.to_string()}
                    value={(*phone).clone()}
                    oninput={{
                        let phone = phone.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            phone.set(input.value());
                        })
                    }}
                    onkeydown={on_enter}
                />
                <button class="inline-lead-btn" onclick={submit.reform(|_: MouseEvent| ())}>
                    {"Continue"}
                </button>
            </div>
            if let Some(message) = (*error).as_ref() {
                <p class="inline-lead-error">{format!("⚠️ {}", message)}</p>
            }
            <p class="inline-lead-note">
                {"We capture your Name and Phone Number for future campaign communication."}
            </p>
        </div>
    }
}
