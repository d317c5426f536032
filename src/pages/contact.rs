use yew::prelude::*;

use crate::config;
use crate::content::{CONSULTATION_TYPES, SOCIAL_LINKS};

pub const CONTACT_ACKNOWLEDGEMENT: &str = "Form submitted! We will contact you soon.";

/// Contact details and the consultation request form.
///
/// The form is never sent anywhere; submitting only shows a local
/// acknowledgement.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let acknowledged = use_state(|| false);

    let on_submit = {
        let acknowledged = acknowledged.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("consultation form acknowledged locally");
            acknowledged.set(true);
        })
    };

    html! {
        <section id="contact">
            <h2 class="section-title">{"Get In Touch"}</h2>
            <p class="section-subtitle">{"Ready to unlock your cosmic potential? Reach out today"}</p>
            <div class="contact-grid">
                <div class="contact-info">
                    <div class="contact-item">
                        <span class="contact-icon">{"📞"}</span>
                        <div class="contact-details">
                            <h3>{"Phone"}</h3>
                            <p><a href={config::TEL_LINK}>{config::DISPLAY_PHONE}</a></p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <span class="contact-icon">{"✉️"}</span>
                        <div class="contact-details">
                            <h3>{"Email"}</h3>
                            <p><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></p>
                        </div>
                    </div>
                    <div class="contact-item">
                        <span class="contact-icon">{"📍"}</span>
                        <div class="contact-details">
                            <h3>{"Location"}</h3>
                            <p>{"Serving clients across India and worldwide"}</p>
                        </div>
                    </div>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} class="social-link" target="_blank" rel="noopener noreferrer" aria-label={*name}>
                                {name.chars().next().map(String::from).unwrap_or_default()}
                            </a>
                        }) }
                    </div>
                </div>

                <div class="contact-form">
                    <div class="birth-details-note">
                        <strong>{"📋 Important:"}</strong>
                        {" Accurate birth details (date, time, place) are essential for precise astrological predictions. If birth time is unknown, mention it in the message."}
                    </div>
                    if *acknowledged {
                        <div class="contact-ack">{CONTACT_ACKNOWLEDGEMENT}</div>
                    }
                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="name">{"Your Name *"}</label>
                            <input type="text" id="name" required=true placeholder="Enter your full name" />
                        </div>
                        <div class="form-group">
                            <label for="email">{"Email *"}</label>
                            <input type="email" id="email" required=true placeholder="your.email@example.com" />
                        </div>
                        <div class="form-group">
                            <label for="phone">{"Phone *"}</label>
                            <input type="tel" id="phone" required=true placeholder="+91 XXXXX XXXXX" />
                        </div>
                        <div class="form-group">
                            <label for="dob">{"Date of Birth *"}</label>
                            <input type="date" id="dob" required=true />
                        </div>
                        <div class="form-group">
                            <label for="tob">{"Time of Birth *"}</label>
                            <input type="time" id="tob" required=true />
                        </div>
                        <div class="form-group">
                            <label for="pob">{"Place of Birth *"}</label>
                            <input type="text" id="pob" required=true placeholder="City, State, Country" />
                        </div>
                        <div class="form-group">
                            <label for="consultation">{"Consultation Type *"}</label>
                            <select id="consultation" required=true>
                                <option value="">{"Select service..."}</option>
                                { for CONSULTATION_TYPES.iter().map(|(value, label)| html! {
                                    <option value={*value}>{*label}</option>
                                }) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="message">{"Message / Specific Questions"}</label>
                            <textarea id="message" placeholder="Describe your concerns or questions..." />
                        </div>
                        <button type="submit" class="btn btn-primary full-width">
                            {"Submit Consultation Request"}
                        </button>
                    </form>
                </div>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .contact-item {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .contact-icon {
                    font-size: 1.5rem;
                }

                .contact-details h3 {
                    color: #FFD700;
                    margin-bottom: 0.3rem;
                }

                .contact-details a {
                    color: #E0E0E0;
                }

                .social-links {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    width: 42px;
                    height: 42px;
                    border-radius: 50%;
                    border: 1px solid rgba(212, 175, 55, 0.4);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #FFD700;
                    text-decoration: none;
                }

                .birth-details-note {
                    background: rgba(212, 175, 55, 0.1);
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 10px;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 0.9rem;
                    color: #E0E0E0;
                }

                .birth-details-note strong {
                    color: #FFD700;
                }

                .contact-ack {
                    background: rgba(37, 211, 102, 0.12);
                    border: 1px solid rgba(37, 211, 102, 0.4);
                    border-radius: 10px;
                    padding: 0.8rem 1rem;
                    margin-bottom: 1rem;
                }

                .form-group {
                    margin-bottom: 1.2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    background: rgba(255, 255, 255, 0.05);
                    color: #F5F5F5;
                }

                .form-group textarea {
                    min-height: 120px;
                }

                .full-width {
                    width: 100%;
                }

                @media (max-width: 900px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
