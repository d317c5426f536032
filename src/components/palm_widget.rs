use yew::prelude::*;
use web_sys::{File, HtmlInputElement, Url};
use wasm_bindgen_futures::spawn_local;

use crate::api::client;
use crate::api::models::{Feature, PalmStyle};
use crate::components::lead_gate::LeadGate;
use crate::components::usage_counter::UsageCounter;
use crate::content::{whatsapp_link, PALM_TIPS};
use crate::reading::{settle, usage_for, validate_image, Phase, PALM_FALLBACK_ERROR};
use crate::session::{Session, SessionContext};

/// An accepted palm photo and the object URL backing its preview.
#[derive(Clone)]
struct SelectedImage {
    file: File,
    preview_url: String,
}

/// The object URL that must be revoked once this image stops being shown.
fn revocable_url(image: Option<&SelectedImage>) -> Option<String> {
    image.and_then(|image| owned_preview(&image.preview_url))
}

fn owned_preview(url: &str) -> Option<String> {
    (!url.is_empty()).then(|| url.to_string())
}

pub fn can_scan(has_image: bool, phase: &Phase, session: &Session) -> bool {
    has_image && !phase.is_loading() && session.can_use(Feature::Palm)
}

#[function_component(PalmWidget)]
pub fn palm_widget() -> Html {
    let session = use_context::<SessionContext>().expect("PalmWidget rendered outside SessionProvider");
    let image = use_state(|| None::<SelectedImage>);
    let style = use_state(PalmStyle::default);
    let phase = use_state(Phase::default);
    let drag_over = use_state(|| false);

    // Revoked when the image is replaced, cleared or the widget unmounts.
    use_effect_with_deps(
        |url: &Option<String>| {
            let url = url.clone();
            move || {
                if let Some(url) = url {
                    let _ = Url::revoke_object_url(&url);
                }
            }
        },
        revocable_url((*image).as_ref()),
    );

    let select_image = {
        let image = image.clone();
        let phase = phase.clone();
        Callback::from(move |file: File| {
            if let Err(e) = validate_image(&file.type_(), file.size()) {
                phase.set(Phase::Failure(e.to_string()));
                return;
            }
            let preview_url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(_) => {
                    log::error!("could not create a preview for the palm photo");
                    String::new()
                }
            };
            image.set(Some(SelectedImage { file, preview_url }));
            phase.set(Phase::Idle);
        })
    };

    let clear_image = {
        let image = image.clone();
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            image.set(None);
            phase.set(Phase::Idle);
        })
    };

    let scan = {
        let session = session.clone();
        let image = image.clone();
        let style = style.clone();
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(selected) = (*image).clone() else {
                return;
            };
            if !can_scan(true, &phase, &session) {
                return;
            }
            phase.set(Phase::Loading);
            let chosen = *style;
            log::info!("requesting {} palm reading", chosen.as_str());

            let session = session.clone();
            let phase = phase.clone();
            spawn_local(async move {
                let next = settle(client::palm_reading(&selected.file, chosen).await, PALM_FALLBACK_ERROR);
                if let Some(action) = usage_for(Feature::Palm, &next) {
                    session.dispatch(action);
                }
                phase.set(next);
            });
        })
    };

    let on_file_change = {
        let select_image = select_image.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                select_image.emit(file);
            }
            // Allow picking the same file again after "Change".
            input.set_value("");
        })
    };

    let on_drag_over = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(true);
        })
    };

    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |_: DragEvent| drag_over.set(false))
    };

    let on_drop = {
        let drag_over = drag_over.clone();
        let select_image = select_image.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(false);
            if let Some(file) = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            {
                select_image.emit(file);
            }
        })
    };

    let limit_reached = session.limit_reached(Feature::Palm);
    let disabled = !can_scan(image.is_some(), &phase, &session);

    html! {
        <div class="palm-section-wrap">
            <div class="palm-badge">{"✦ AI Powered · Vedic Palmistry · Instant Reading"}</div>

            <LeadGate feature={Feature::Palm} />
            <UsageCounter feature={Feature::Palm} />

            <div class="palm-style-row">
                { for PalmStyle::ALL.iter().map(|&option| {
                    let style = style.clone();
                    let active = *style == option;
                    let onclick = Callback::from(move |_: MouseEvent| style.set(option));
                    html! {
                        <button class={classes!("palm-style-btn", active.then(|| "active"))} {onclick}>
                            <span class="palm-style-label">{option.label()}</span>
                            <span class="palm-style-desc">{option.description()}</span>
                        </button>
                    }
                }) }
            </div>

            {
                match (*image).as_ref() {
                    None => html! {
                        <div
                            class={classes!("palm-drop-zone", (*drag_over).then(|| "drag-active"))}
                            ondragover={on_drag_over}
                            ondragleave={on_drag_leave}
                            ondrop={on_drop}
                        >
                            <input type="file" accept="image/*" onchange={on_file_change} />
                            <span class="palm-drop-icon">{"🖐"}</span>
                            <p class="palm-drop-text">{"Upload your palm photo"}</p>
                            <p class="palm-drop-hint">{"Drag & drop or click to browse · JPG, PNG up to 5MB"}</p>
                        </div>
                    },
                    Some(selected) => html! {
                        <div class="palm-preview-wrap">
                            <img src={selected.preview_url.clone()} alt="Your palm" />
                            <button class="palm-change-btn" onclick={clear_image.clone()}>{"✕ Change"}</button>
                        </div>
                    },
                }
            }

            <div class="palm-tips">
                <h4>{"📸 Tips for best results:"}</h4>
                <ul>
                    { for PALM_TIPS.iter().map(|tip| html! { <li>{*tip}</li> }) }
                </ul>
            </div>

            <button class="palm-scan-btn" onclick={scan} {disabled}>
                {
                    if phase.is_loading() {
                        html! { <><span class="loading-star">{"✦"}</span>{" Reading Your Palm Lines..."}</> }
                    } else if limit_reached {
                        html! { {"🔒 Free Limit Reached"} }
                    } else {
                        html! { {"🔮 Scan My Palm"} }
                    }
                }
            </button>

            if let Some(message) = phase.error() {
                <div class="guidance-error-box">{format!("⚠️ {}", message)}</div>
            }

            if let Some(text) = phase.text() {
                <div class="palm-reading-box">
                    <div class="palm-reading-header">
                        <span>{"🖐"}</span>
                        <span>{"Your Palm Reading"}</span>
                    </div>
                    <div class="palm-reading-text">{text.to_string()}</div>
                    <div class="result-cta">
                        <a
                            href={whatsapp_link(Some("Hi, I would like a detailed palm reading consultation"))}
                            class="btn btn-primary"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Book Full Consultation"}
                        </a>
                        <button class="btn btn-secondary" onclick={clear_image}>
                            {"Scan Another Palm"}
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
            palm_uses: uses,
            ..Session::default()
        }
    }

    #[test]
    fn scanning_needs_an_image() {
        assert!(!can_scan(false, &Phase::Idle, &unlocked(0)));
        assert!(can_scan(true, &Phase::Idle, &unlocked(0)));
    }

    #[test]
    fn scanning_needs_the_gate() {
        assert!(!can_scan(true, &Phase::Idle, &Session::default()));
    }

    #[test]
    fn scanning_stops_at_the_limit() {
        assert!(!can_scan(true, &Phase::Idle, &unlocked(FEATURE_LIMIT)));
    }

    #[test]
    fn palm_limit_ignores_guidance_usage() {
        let session = Session {
            lead_submitted: true,
            guidance_uses: FEATURE_LIMIT,
            palm_uses: 0,
        };
        assert!(can_scan(true, &Phase::Idle, &session));
    }

    #[test]
    fn only_created_previews_are_revoked() {
        assert_eq!(
            owned_preview("blob:http://localhost/4f1c"),
            Some("blob:http://localhost/4f1c".to_string())
        );
        assert_eq!(owned_preview(""), None);
    }

    #[test]
    fn no_double_scan_while_loading() {
        assert!(!can_scan(true, &Phase::Loading, &unlocked(0)));
    }
}
