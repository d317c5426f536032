use chrono::Datelike;
use yew::prelude::*;

use crate::components::{
    guidance_widget::GuidanceWidget, palm_widget::PalmWidget, service_status::ServiceStatus,
    testimonials::Testimonials,
};
use crate::config;
use crate::content::{whatsapp_link, EXPERTISE, FOOTER_LINKS, SERVICES};
use crate::pages::{contact::ContactSection, faq::FaqSection};
use crate::scroll_to_section;
use crate::session::SessionProvider;

fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

fn section_link(id: &'static str, label: &'static str, class: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    });
    html! { <button {class} {onclick}>{label}</button> }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <SessionProvider>
        <div class="astro-site">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Find Clarity in Career, Love, Business & Destiny"}</h1>
                    <p class="hero-subtitle">
                        {"Consult Astrologer Ruchi Bhardwaj for accurate predictions and powerful analysis"}
                    </p>
                    <div class="hero-highlight">
                        <span class="hero-highlight-icon">{"✨"}</span>
                        {"No costly gemstones or rituals recommended — learn powerful manifestation, gratitude, visualization, and mindful intention practices as part of your consultation."}
                    </div>
                    <div class="cta-buttons">
                        <a href={whatsapp_link(None)} class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                            {"💬 Chat on WhatsApp"}
                        </a>
                        { section_link("booking", "📅 Book Appointment", "btn btn-secondary") }
                    </div>
                </div>
            </section>

            <section id="services">
                <h2 class="section-title">{"Our Services"}</h2>
                <p class="section-subtitle">{"Comprehensive Vedic astrology guidance for all aspects of your life"}</p>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class="service-card" style={format!("animation-delay: {:.1}s", i as f32 * 0.1)}>
                            <span class="service-icon">{service.icon}</span>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="palm">
                <h2 class="section-title">{"🖐 AI Palm Reading"}</h2>
                <p class="section-subtitle">
                    {"Upload a clear photo of your palm and receive an instant reading powered by Vedic palmistry wisdom"}
                </p>
                <ServiceStatus />
                <PalmWidget />
            </section>

            <section id="guidance">
                <h2 class="section-title">{"✨ AI Astrology Guidance"}</h2>
                <p class="section-subtitle">
                    {"Ask any astrology question and receive instant cosmic wisdom powered by Vedic knowledge"}
                </p>
                <GuidanceWidget />
            </section>

            <section id="about">
                <h2 class="section-title">{"About Ruchi Bhardwaj"}</h2>
                <p class="section-subtitle">{"Your trusted guide to cosmic wisdom and spiritual clarity"}</p>
                <div class="about-content">
                    <div class="about-image">
                        <img src="/Ruchi_Bhardwaj.jpeg" alt="Astrologer Ruchi Bhardwaj - Best Astrologer in India" />
                    </div>
                    <div class="about-text">
                        <h3>{"Ruchi Bhardwaj"}</h3>
                        <h4>{"Vedic Astrologer & Spiritual Guide"}</h4>
                        <p>
                            {"With deep knowledge of Vedic astrology and years of experience guiding thousands of clients, Ruchi Bhardwaj combines ancient wisdom with modern understanding to provide accurate predictions and practical analysis."}
                        </p>
                        <p>
                            {"Her unique approach blends spiritual insight with analytical precision, offering clarity on career decisions, relationships, business ventures, financial investments, and life's most important choices. Known for her compassionate guidance and accurate timing predictions, she has helped countless individuals transform their lives."}
                        </p>
                        <div class="expertise-list">
                            { for EXPERTISE.iter().map(|item| html! {
                                <div class="expertise-item">
                                    <span class="star">{"★"}</span>
                                    <span>{*item}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section id="booking">
                <div class="booking-section">
                    <h2>{"Book Your Consultation"}</h2>
                    <p>{"Get personalized guidance from Ruchi Bhardwaj"}</p>
                    <div class="slots-notice">{"⏰ Limited slots available - Book your session today"}</div>
                    <div class="cta-buttons">
                        <a
                            href={whatsapp_link(Some("Hi, I would like to book an astrology consultation"))}
                            class="btn btn-primary"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"💬 Book via WhatsApp"}
                        </a>
                        <a href={config::TEL_LINK} class="btn btn-secondary">{"📞 Call Now"}</a>
                    </div>
                </div>
            </section>

            <section id="testimonials">
                <h2 class="section-title">{"Client Testimonials"}</h2>
                <p class="section-subtitle">{"Hear from those whose lives have been transformed"}</p>
                <Testimonials />
            </section>

            <FaqSection />
            <ContactSection />

            <footer>
                <div class="footer-content">
                    <div class="footer-section">
                        <h3>{"Dia Astro"}</h3>
                        <p>
                            {"Your trusted partner in navigating life's journey through the wisdom of Vedic astrology. Empowering you with clarity, guidance, and cosmic insights."}
                        </p>
                    </div>
                    <div class="footer-section">
                        <h3>{"Quick Links"}</h3>
                        { for FOOTER_LINKS.iter().map(|&(id, label)| section_link(id, label, "footer-link")) }
                    </div>
                    <div class="footer-section">
                        <h3>{"Services"}</h3>
                        <span class="footer-text">{"Career Astrology"}</span>
                        <span class="footer-text">{"Share Market Guidance"}</span>
                        <span class="footer-text">{"Marriage Compatibility"}</span>
                        <span class="footer-text">{"Birth Chart Analysis"}</span>
                        <span class="footer-text">{"Karma Dosh Analysis"}</span>
                    </div>
                    <div class="footer-section">
                        <h3>{"Contact Info"}</h3>
                        <p>{"Phone: "}<a href={config::TEL_LINK}>{config::DISPLAY_PHONE}</a></p>
                        <p>{"Email: "}<a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></p>
                        <p>{format!("Domain: {}", config::DOMAIN)}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} Dia Astro. All rights reserved. | Designed with cosmic wisdom", copyright_year())}</p>
                </div>
            </footer>

            <a
                href={whatsapp_link(Some("Hi, I would like to consult with Ruchi Bhardwaj"))}
                class="whatsapp-float"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat on WhatsApp"
            >
                {"💬"}
            </a>

            <style>
                {r#"
                @import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700;900&family=Poppins:wght@300;400;500;600;700&family=Cinzel:wght@400;600;700&display=swap');

                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                body {
                    overflow-x: hidden;
                    background: linear-gradient(180deg, #0B0420 0%, #1A1033 50%, #0B0420 100%);
                }

                .astro-site {
                    font-family: 'Poppins', sans-serif;
                    color: #F5F5F5;
                }

                section {
                    padding: 6rem 2rem;
                }

                .section-title {
                    font-family: 'Cinzel', serif;
                    font-size: 2.6rem;
                    text-align: center;
                    color: #FFD700;
                    margin-bottom: 1rem;
                }

                .section-subtitle {
                    text-align: center;
                    color: #C9C9C9;
                    max-width: 680px;
                    margin: 0 auto 3rem;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2.2rem;
                    border-radius: 50px;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    border: none;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .btn-primary {
                    background: linear-gradient(135deg, #FFD700, #D4AF37);
                    color: #1A1033;
                }

                .btn-secondary {
                    background: transparent;
                    color: #FFD700;
                    border: 2px solid #FFD700;
                }

                .btn:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(212, 175, 55, 0.3);
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }

                .hero-content {
                    max-width: 900px;
                }

                .hero h1 {
                    font-family: 'Playfair Display', serif;
                    font-size: 3.4rem;
                    background: linear-gradient(45deg, #FFD700, #FFF4C2);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #E0E0E0;
                    margin-bottom: 2rem;
                }

                .hero-highlight {
                    background: rgba(212, 175, 55, 0.1);
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 12px;
                    padding: 1rem 1.5rem;
                    margin-bottom: 2rem;
                }

                .cta-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .service-card {
                    background: rgba(26, 16, 51, 0.8);
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    border-radius: 16px;
                    padding: 2rem;
                    opacity: 0;
                    animation: fadeInUp 0.6s ease-out forwards;
                }

                .service-icon {
                    font-size: 2.5rem;
                }

                .service-card h3 {
                    color: #FFD700;
                    margin: 1rem 0 0.5rem;
                }

                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .palm-section-wrap,
                .guidance-section {
                    max-width: 820px;
                    margin: 0 auto;
                    background: rgba(26, 16, 51, 0.85);
                    border: 1px solid rgba(212, 175, 55, 0.25);
                    border-radius: 20px;
                    padding: 2.5rem;
                }

                .palm-badge,
                .guidance-orb-badge {
                    text-align: center;
                    color: #FFD700;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }

                .service-status {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.85rem;
                    color: #C9C9C9;
                    margin-bottom: 1.5rem;
                }

                .service-status-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #888;
                }

                .service-status.online .service-status-dot { background: #25D366; }
                .service-status.degraded .service-status-dot { background: #FFB020; }
                .service-status.offline .service-status-dot { background: #FF5A5A; }

                .inline-lead-form {
                    margin-bottom: 1.5rem;
                }

                .inline-lead-inputs {
                    display: flex;
                    gap: 0.8rem;
                    flex-wrap: wrap;
                }

                .inline-lead-input {
                    flex: 1;
                    min-width: 180px;
                    padding: 0.8rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(212, 175, 55, 0.35);
                    background: rgba(255, 255, 255, 0.05);
                    color: #F5F5F5;
                }

                .inline-lead-btn {
                    padding: 0.8rem 1.8rem;
                    border-radius: 10px;
                    border: none;
                    background: linear-gradient(135deg, #FFD700, #D4AF37);
                    color: #1A1033;
                    font-weight: 600;
                    cursor: pointer;
                }

                .inline-lead-error {
                    color: #FF8A8A;
                    margin-top: 0.6rem;
                }

                .inline-lead-note {
                    color: #999;
                    font-size: 0.8rem;
                    margin-top: 0.6rem;
                }

                .usage-counter {
                    text-align: center;
                    color: #FFD700;
                    margin-bottom: 1.2rem;
                }

                .usage-counter.last-use { color: #FFB020; }
                .usage-counter.used-up { color: #FF8A8A; }

                .palm-style-row {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.8rem;
                    margin-bottom: 1.5rem;
                }

                .palm-style-btn {
                    display: flex;
                    flex-direction: column;
                    gap: 0.3rem;
                    padding: 0.9rem;
                    border-radius: 12px;
                    border: 1px solid rgba(212, 175, 55, 0.25);
                    background: transparent;
                    color: #F5F5F5;
                    cursor: pointer;
                }

                .palm-style-btn.active {
                    border-color: #FFD700;
                    background: rgba(212, 175, 55, 0.12);
                }

                .palm-style-desc {
                    font-size: 0.75rem;
                    color: #AAA;
                }

                .palm-drop-zone {
                    position: relative;
                    border: 2px dashed rgba(212, 175, 55, 0.4);
                    border-radius: 16px;
                    padding: 3rem 1rem;
                    text-align: center;
                    cursor: pointer;
                }

                .palm-drop-zone.drag-active {
                    border-color: #FFD700;
                    background: rgba(212, 175, 55, 0.08);
                }

                .palm-drop-zone input[type="file"] {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    cursor: pointer;
                }

                .palm-drop-icon {
                    font-size: 3rem;
                }

                .palm-preview-wrap {
                    position: relative;
                    text-align: center;
                }

                .palm-preview-wrap img {
                    max-width: 100%;
                    max-height: 360px;
                    border-radius: 16px;
                }

                .palm-change-btn {
                    position: absolute;
                    top: 0.8rem;
                    right: 0.8rem;
                    background: rgba(0, 0, 0, 0.6);
                    color: #fff;
                    border: none;
                    border-radius: 20px;
                    padding: 0.4rem 0.9rem;
                    cursor: pointer;
                }

                .palm-tips {
                    margin: 1.5rem 0;
                    color: #C9C9C9;
                    font-size: 0.9rem;
                }

                .palm-tips ul {
                    padding-left: 1.2rem;
                }

                .guidance-textarea {
                    width: 100%;
                    min-height: 140px;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(212, 175, 55, 0.35);
                    background: rgba(255, 255, 255, 0.05);
                    color: #F5F5F5;
                    font-family: inherit;
                    resize: vertical;
                }

                .char-counter {
                    text-align: right;
                    color: #999;
                    font-size: 0.8rem;
                    margin: 0.3rem 0 1rem;
                }

                .guidance-examples {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }

                .guidance-example-chip {
                    padding: 0.4rem 0.9rem;
                    border-radius: 20px;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    font-size: 0.8rem;
                    cursor: pointer;
                }

                .palm-scan-btn,
                .guidance-submit-btn {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 50px;
                    border: none;
                    background: linear-gradient(135deg, #FFD700, #D4AF37);
                    color: #1A1033;
                    font-weight: 700;
                    font-size: 1.05rem;
                    cursor: pointer;
                }

                .palm-scan-btn:disabled,
                .guidance-submit-btn:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .loading-star {
                    display: inline-block;
                    animation: spin 1.2s linear infinite;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                .guidance-error-box {
                    margin-top: 1.2rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: rgba(255, 90, 90, 0.1);
                    border: 1px solid rgba(255, 90, 90, 0.35);
                    color: #FFB3B3;
                }

                .palm-reading-box,
                .guidance-response-box {
                    margin-top: 1.5rem;
                    padding: 1.8rem;
                    border-radius: 16px;
                    background: rgba(212, 175, 55, 0.08);
                    border: 1px solid rgba(212, 175, 55, 0.35);
                }

                .palm-reading-header,
                .guidance-response-header {
                    display: flex;
                    gap: 0.6rem;
                    color: #FFD700;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .palm-reading-text,
                .guidance-response-text {
                    white-space: pre-wrap;
                    line-height: 1.7;
                }

                .result-cta {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-top: 1.5rem;
                }

                .result-cta .btn {
                    padding: 0.7rem 1.8rem;
                    font-size: 0.95rem;
                }

                .about-content {
                    display: grid;
                    grid-template-columns: 1fr 1.5fr;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    align-items: center;
                }

                .about-image img {
                    width: 100%;
                    border-radius: 20px;
                }

                .about-text h3 {
                    font-family: 'Playfair Display', serif;
                    color: #FFD700;
                    font-size: 2rem;
                }

                .about-text p {
                    line-height: 1.8;
                    margin: 1rem 0;
                }

                .expertise-list {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.8rem;
                }

                .star {
                    color: #FFD700;
                }

                .booking-section {
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                    padding: 3.5rem 2rem;
                    border-radius: 24px;
                    background: linear-gradient(135deg, rgba(212, 175, 55, 0.15), rgba(26, 16, 51, 0.9));
                    border: 1px solid rgba(212, 175, 55, 0.3);
                }

                .slots-notice {
                    margin: 1.5rem 0;
                    color: #FFD700;
                }

                .testimonials-container {
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }

                .testimonial-text {
                    font-size: 1.2rem;
                    font-style: italic;
                    line-height: 1.8;
                    margin-bottom: 1rem;
                }

                .testimonial-author {
                    color: #FFD700;
                    font-weight: 600;
                    margin-top: 1rem;
                }

                .testimonial-location {
                    color: #999;
                }

                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-top: 2rem;
                }

                .dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    background: rgba(212, 175, 55, 0.3);
                    cursor: pointer;
                }

                .dot.active {
                    background: #FFD700;
                }

                footer {
                    padding: 4rem 2rem 2rem;
                    border-top: 1px solid rgba(212, 175, 55, 0.2);
                }

                .footer-content {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .footer-section h3 {
                    color: #FFD700;
                    margin-bottom: 1rem;
                }

                .footer-link,
                .footer-text {
                    display: block;
                    background: none;
                    border: none;
                    color: #C9C9C9;
                    text-align: left;
                    padding: 0.25rem 0;
                    cursor: pointer;
                    font-family: inherit;
                }

                .footer-section a {
                    color: #C9C9C9;
                }

                .footer-bottom {
                    text-align: center;
                    color: #888;
                    margin-top: 3rem;
                    font-size: 0.85rem;
                }

                .whatsapp-float {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 60px;
                    height: 60px;
                    border-radius: 50%;
                    background: #25D366;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                    text-decoration: none;
                    box-shadow: 0 6px 20px rgba(37, 211, 102, 0.4);
                    z-index: 1000;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }

                    .about-content {
                        grid-template-columns: 1fr;
                    }

                    .palm-style-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
        </SessionProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_year_is_current() {
        assert!(copyright_year() >= 2025);
    }
}
