use crate::config;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Section anchors in page order, with the label used in the nav bar.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("palm", "Palm Reading"),
    ("guidance", "AI Guidance"),
    ("about", "About"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("services", "Services"),
    ("palm", "Palm Reading"),
    ("about", "About Us"),
    ("testimonials", "Testimonials"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "💼",
        title: "Career & Job Security",
        description: "Navigate your professional path with clarity. Get insights on job changes, promotions, career transitions, and optimal timing for new opportunities.",
    },
    Service {
        icon: "📈",
        title: "Business and Finance Analysis",
        description: "Harness planetary wisdom for investment decisions. Learn auspicious timings for trading, business launches, and financial ventures aligned with cosmic energy.",
    },
    Service {
        icon: "💕",
        title: "Love & Marriage Clarity",
        description: "Find harmony in relationships. Understand compatibility, resolve conflicts, and discover the right timing for marriage and commitment decisions.",
    },
    Service {
        icon: "🤝",
        title: "Marriage Compatibility",
        description: "Deep horoscope matching for lifelong partnership. Analyze Kundli compatibility, doshas, and planetary influences for marital success.",
    },
    Service {
        icon: "🏥",
        title: "Health & Wealth Predictions",
        description: "Preventive insights for wellbeing and prosperity. Identify health risks, financial opportunities, and analysis for lasting abundance.",
    },
    Service {
        icon: "🌟",
        title: "Birth Chart Analysis",
        description: "Comprehensive Kundli reading revealing your life's blueprint. Understand your strengths, challenges, karmic patterns, and soul's purpose.",
    },
    Service {
        icon: "🔮",
        title: "Karma Dosh Analysis",
        description: "Identify and resolve karmic debts. Specialized analysis for Mangal Dosh, Kaal Sarp Dosh, Pitra Dosh, and ancestral karma.",
    },
    Service {
        icon: "📅",
        title: "Auspicious Muhurat Selection",
        description: "Choose perfect timings for life events. Muhurat for marriage, business launch, property purchase, travel, and important ceremonies.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        location: "Delhi",
        text: "Ruchi ji's guidance helped me secure my dream job at the exact time she predicted. Her career astrology predictions were spot-on!",
        rating: 5,
    },
    Testimonial {
        name: "Rajesh Gupta",
        location: "Mumbai",
        text: "I was skeptical about share market astrology, but following Ruchi ji's timing advice, I made significant profits. Truly grateful!",
        rating: 5,
    },
    Testimonial {
        name: "Anita & Vikram",
        location: "Bangalore",
        text: "Our marriage was on the rocks. Ruchi ji's analysis and counseling saved our relationship. We're happier than ever!",
        rating: 5,
    },
    Testimonial {
        name: "Suresh Kumar",
        location: "Pune",
        text: "Facing a difficult legal case, Ruchi ji suggested the right muhurat for court appearances. We won! Her legal astrology is phenomenal.",
        rating: 5,
    },
    Testimonial {
        name: "Neha Kapoor",
        location: "Chandigarh",
        text: "My business was struggling. After Ruchi ji's karma dosh analysis and timing guidance, revenue increased by 300% in 6 months!",
        rating: 5,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How accurate is Vedic astrology?",
        answer: "Vedic astrology is an ancient science based on precise planetary calculations and time-tested principles. When analyzed by an experienced astrologer with accurate birth details (date, time, place), predictions can be remarkably accurate. However, astrology shows tendencies and probabilities, not absolute certainties. It empowers you with knowledge to make informed decisions.",
    },
    Faq {
        question: "How does a birth chart work?",
        answer: "A birth chart (Kundli) is a snapshot of planetary positions at your exact birth moment. Each planet, house, and zodiac sign represents different life areas. The unique combination of these factors reveals your personality, strengths, challenges, career path, relationships, health tendencies, and life timing. It's your cosmic blueprint.",
    },
    Faq {
        question: "Can astrology really predict share market trends?",
        answer: "Share market astrology analyzes planetary transits, especially Jupiter, Saturn, Rahu, and Ketu movements. Specific planetary combinations indicate bullish or bearish trends. While not a replacement for financial analysis, astrology provides timing insights - when to enter, hold, or exit positions for optimal results.",
    },
    Faq {
        question: "What is Karma Dosh and how to resolve it?",
        answer: "Karma Dosh refers to karmic debts from past actions (this life or previous lives) manifesting as obstacles. Common types include Mangal Dosh (affecting marriage), Kaal Sarp Dosh (blocking progress), and Pitra Dosh (ancestral karma). Analysis include specific mantras, gemstones, rituals, charity, and lifestyle corrections based on your unique chart.",
    },
    Faq {
        question: "How to choose the right muhurat?",
        answer: "Muhurat is the auspicious timing for important activities. It's calculated by analyzing: Tithi (lunar day), Nakshatra (constellation), Yoga, Karana, and planetary positions. For marriage, business, property, or travel, we select times when benefic planets are strong and malefics are subdued, ensuring success and minimal obstacles.",
    },
    Faq {
        question: "What information do I need for an accurate reading?",
        answer: "For precise predictions, provide: exact date of birth, accurate time of birth (check birth certificate), and place of birth. Even a few minutes' difference in birth time can change predictions. If time is unknown, we use Prashna Kundli (question chart) methods, though slightly less detailed.",
    },
];

pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "What does my birth chart reveal about my career prospects?",
    "When would be auspicious to start a new business?",
    "How can I resolve the Mangal Dosh in my horoscope?",
    "What planetary influences are affecting my relationships right now?",
    "Can you help me understand my financial prospects this year?",
];

pub const EXPERTISE: &[&str] = &[
    "Birth Chart Analysis",
    "Share Market Timing",
    "Marriage Compatibility",
    "Career Guidance",
    "Karma Dosh Analysis",
    "Muhurat Selection",
];

pub const PALM_TIPS: &[&str] = &[
    "Use good lighting — natural daylight works best",
    "Keep your palm flat and fully open",
    "Use your dominant hand (right for right-handed)",
    "Make sure the entire palm is visible in the frame",
];

/// (value, label) pairs for the consultation type select.
pub const CONSULTATION_TYPES: &[(&str, &str)] = &[
    ("career", "Career & Job Security"),
    ("sharemarket", "Share Market & Business"),
    ("love", "Love & Marriage"),
    ("compatibility", "Marriage Compatibility"),
    ("health", "Health & Wealth"),
    ("birthchart", "Birth Chart Analysis"),
    ("legal", "Legal Case Astrology"),
    ("karma", "Karma Dosh Analysis"),
    ("muhurat", "Muhurat Selection"),
    ("other", "Other/General"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("Twitter", "https://twitter.com"),
    ("LinkedIn", "https://linkedin.com"),
];

/// wa.me chat link, optionally with a pre-filled message.
pub fn whatsapp_link(message: Option<&str>) -> String {
    match message {
        Some(text) => format!(
            "https://wa.me/{}?text={}",
            config::WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        None => format!("https://wa.me/{}", config::WHATSAPP_NUMBER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_whatsapp_link() {
        assert_eq!(whatsapp_link(None), "https://wa.me/918625815099");
    }

    #[test]
    fn whatsapp_message_is_encoded() {
        assert_eq!(
            whatsapp_link(Some("Hi, I would like a detailed consultation")),
            "https://wa.me/918625815099?text=Hi%2C%20I%20would%20like%20a%20detailed%20consultation"
        );
    }

    #[test]
    fn five_testimonials_rotate() {
        assert_eq!(TESTIMONIALS.len(), 5);
        assert!(TESTIMONIALS.iter().all(|t| t.rating <= 5));
    }

    #[test]
    fn every_nav_anchor_is_unique() {
        let mut ids: Vec<&str> = NAV_SECTIONS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
    }
}
