use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::client;
use crate::api::models::HealthResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceHealth {
    Checking,
    Online,
    Degraded,
    Unreachable,
}

impl ServiceHealth {
    pub fn from_reply(reply: &HealthResponse) -> Self {
        if reply.is_ready() {
            ServiceHealth::Online
        } else {
            ServiceHealth::Degraded
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceHealth::Checking => "Checking the stars...",
            ServiceHealth::Online => "AI guide online",
            ServiceHealth::Degraded => "AI guide busy",
            ServiceHealth::Unreachable => "AI guide offline",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ServiceHealth::Checking => "checking",
            ServiceHealth::Online => "online",
            ServiceHealth::Degraded => "degraded",
            ServiceHealth::Unreachable => "offline",
        }
    }
}

/// Informational badge fed by GET /health once per mount. Gates nothing.
#[function_component(ServiceStatus)]
pub fn service_status() -> Html {
    let health = use_state(|| ServiceHealth::Checking);

    {
        let health = health.clone();
        use_mount(move || {
            spawn_local(async move {
                match client::health_check().await {
                    Ok(reply) => {
                        gloo_console::log!(format!(
                            "health: status={} agent_available={}",
                            reply.status, reply.agent_available
                        ));
                        health.set(ServiceHealth::from_reply(&reply));
                    }
                    Err(e) => {
                        log::warn!("health check failed: {}", e);
                        health.set(ServiceHealth::Unreachable);
                    }
                }
            });
        });
    }

    html! {
        <div class={classes!("service-status", health.class())}>
            <span class="service-status-dot"></span>
            <span>{health.label()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_reply_reads_online() {
        let reply = HealthResponse {
            status: "ok".to_string(),
            agent_available: true,
        };
        assert_eq!(ServiceHealth::from_reply(&reply), ServiceHealth::Online);
    }

    #[test]
    fn missing_agent_reads_degraded() {
        let reply = HealthResponse {
            status: "ok".to_string(),
            agent_available: false,
        };
        assert_eq!(ServiceHealth::from_reply(&reply), ServiceHealth::Degraded);
        assert_eq!(ServiceHealth::Degraded.label(), "AI guide busy");
    }
}
