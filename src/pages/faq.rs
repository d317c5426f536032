use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::content::FAQS;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    html! {
        <section id="faq">
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>
            <p class="section-subtitle">{"Everything you need to know about Vedic astrology"}</p>
            <div class="faq-container">
                { for FAQS.iter().map(|faq| html! {
                    <FaqItem question={faq.question}>
                        <p>{faq.answer}</p>
                    </FaqItem>
                }) }
            </div>

            <style>
                {r#"
                .faq-container {
                    max-width: 860px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: rgba(26, 16, 51, 0.85);
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(212, 175, 55, 0.5);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.4rem 1.5rem;
                    background: none;
                    border: none;
                    color: #FFD700;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 1.5rem 1.5rem;
                }

                .faq-answer p {
                    color: #E0E0E0;
                    line-height: 1.7;
                }
                "#}
            </style>
        </section>
    }
}
