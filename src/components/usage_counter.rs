use yew::prelude::*;

use crate::api::models::Feature;
use crate::session::{SessionContext, UsageStatus};

pub const USED_UP_MESSAGE: &str =
    "✦ You have reached the maximum free usage limit. Please contact us to continue.";

/// Counter copy for a usage state; `None` while the feature is still locked.
pub fn usage_message(status: UsageStatus) -> Option<(String, &'static str)> {
    match status {
        UsageStatus::Locked => None,
        UsageStatus::Remaining(left) => Some((
            format!("✦ {} free {} remaining", left, if left == 1 { "use" } else { "uses" }),
            "usage-counter",
        )),
        UsageStatus::LastUse => Some((
            "✦ 1 free use remaining".to_string(),
            "usage-counter last-use",
        )),
        UsageStatus::UsedUp => Some((USED_UP_MESSAGE.to_string(), "usage-counter used-up")),
    }
}

#[derive(Properties, PartialEq)]
pub struct UsageCounterProps {
    pub feature: Feature,
}

#[function_component(UsageCounter)]
pub fn usage_counter(props: &UsageCounterProps) -> Html {
    let session = use_context::<SessionContext>().expect("UsageCounter rendered outside SessionProvider");

    match usage_message(session.usage_status(props.feature)) {
        Some((text, class)) => html! { <div class={class}>{text}</div> },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn locked_feature_shows_nothing() {
        assert_eq!(usage_message(UsageStatus::Locked), None);
    }

    #[test]
    fn one_successful_call_leaves_one_use() {
        let session = Session {
            lead_submitted: true,
            guidance_uses: 1,
            ..Session::default()
        };
        let (text, class) = usage_message(session.usage_status(Feature::Guidance)).unwrap();
        assert_eq!(text, "✦ 1 free use remaining");
        assert_eq!(class, "usage-counter last-use");
    }

    #[test]
    fn fresh_unlock_shows_plural() {
        let (text, _) = usage_message(UsageStatus::Remaining(2)).unwrap();
        assert_eq!(text, "✦ 2 free uses remaining");
    }

    #[test]
    fn used_up_copy() {
        let (text, class) = usage_message(UsageStatus::UsedUp).unwrap();
        assert_eq!(text, USED_UP_MESSAGE);
        assert!(class.ends_with("used-up"));
    }
}
