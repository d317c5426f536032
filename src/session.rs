//! Per-visit state shared by both AI widgets: the unlock flag set by the
//! lead gate and one usage counter per feature.
//!
//! The unlock is client-trusted. Saving the lead to the backend is
//! best-effort telemetry and never decides access. Limits are advisory and
//! reset on reload.

use std::rc::Rc;

use yew::prelude::*;

use crate::api::models::Feature;

pub const FEATURE_LIMIT: u32 = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub lead_submitted: bool,
    pub palm_uses: u32,
    pub guidance_uses: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Unlock,
    RecordUse(Feature),
}

/// What the usage counter for one feature should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageStatus {
    Locked,
    Remaining(u32),
    LastUse,
    UsedUp,
}

impl Session {
    pub fn uses(&self, feature: Feature) -> u32 {
        match feature {
            Feature::Palm => self.palm_uses,
            Feature::Guidance => self.guidance_uses,
        }
    }

    pub fn limit_reached(&self, feature: Feature) -> bool {
        self.uses(feature) >= FEATURE_LIMIT
    }

    pub fn can_use(&self, feature: Feature) -> bool {
        self.lead_submitted && !self.limit_reached(feature)
    }

    pub fn usage_status(&self, feature: Feature) -> UsageStatus {
        let used = self.uses(feature);
        if !self.lead_submitted {
            UsageStatus::Locked
        } else if used >= FEATURE_LIMIT {
            UsageStatus::UsedUp
        } else if used == FEATURE_LIMIT - 1 {
            UsageStatus::LastUse
        } else {
            UsageStatus::Remaining(FEATURE_LIMIT - used)
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Unlock => {
                if self.lead_submitted {
                    return self;
                }
                Rc::new(Session {
                    lead_submitted: true,
                    ..(*self).clone()
                })
            }
            SessionAction::RecordUse(feature) => {
                if self.limit_reached(feature) {
                    return self;
                }
                let mut next = (*self).clone();
                match feature {
                    Feature::Palm => next.palm_uses += 1,
                    Feature::Guidance => next.guidance_uses += 1,
                }
                Rc::new(next)
            }
        }
    }
}

pub type SessionContext = UseReducerHandle<Session>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);

    html! {
        <ContextProvider<SessionContext> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(session: Session, actions: Vec<SessionAction>) -> Session {
        let mut state = Rc::new(session);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn starts_locked() {
        let session = Session::default();
        assert!(!session.can_use(Feature::Palm));
        assert!(!session.can_use(Feature::Guidance));
        assert_eq!(session.usage_status(Feature::Guidance), UsageStatus::Locked);
    }

    #[test]
    fn one_unlock_opens_both_features() {
        let session = apply(Session::default(), vec![SessionAction::Unlock]);
        assert!(session.can_use(Feature::Palm));
        assert!(session.can_use(Feature::Guidance));
    }

    #[test]
    fn unlock_never_reverts() {
        let session = apply(
            Session::default(),
            vec![
                SessionAction::Unlock,
                SessionAction::Unlock,
                SessionAction::RecordUse(Feature::Palm),
                SessionAction::Unlock,
            ],
        );
        assert!(session.lead_submitted);
        assert_eq!(session.palm_uses, 1);
    }

    #[test]
    fn counters_move_through_the_three_states() {
        let mut session = apply(Session::default(), vec![SessionAction::Unlock]);
        assert_eq!(session.usage_status(Feature::Guidance), UsageStatus::Remaining(2));

        session = apply(session, vec![SessionAction::RecordUse(Feature::Guidance)]);
        assert_eq!(session.usage_status(Feature::Guidance), UsageStatus::LastUse);

        session = apply(session, vec![SessionAction::RecordUse(Feature::Guidance)]);
        assert_eq!(session.usage_status(Feature::Guidance), UsageStatus::UsedUp);
        assert!(!session.can_use(Feature::Guidance));
    }

    #[test]
    fn counter_is_capped_at_the_limit() {
        let session = apply(
            Session::default(),
            (0..5).map(|_| SessionAction::RecordUse(Feature::Palm)).collect(),
        );
        assert_eq!(session.palm_uses, FEATURE_LIMIT);
    }

    #[test]
    fn features_count_independently() {
        let session = apply(
            Session::default(),
            vec![
                SessionAction::Unlock,
                SessionAction::RecordUse(Feature::Palm),
                SessionAction::RecordUse(Feature::Palm),
            ],
        );
        assert!(!session.can_use(Feature::Palm));
        assert!(session.can_use(Feature::Guidance));
        assert_eq!(session.usage_status(Feature::Guidance), UsageStatus::Remaining(2));
    }
}
