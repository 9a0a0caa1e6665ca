use leptos::*;
use leptos_router::*;

use crate::api::{provide_api_client, ApiClient};
use crate::components::AppRoutes;
use crate::config::AppConfig;
use crate::routes::route_tree;
use crate::state::{provide_notice_context, provide_session_context, provide_theme_context};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let client = ApiClient::with_config(&config);

    // Provide shared state at the app root
    let notices = provide_notice_context();
    provide_theme_context(notices, config.theme_notice_delay_ms);
    provide_api_client(client.clone());
    provide_session_context(client);

    view! {
        <Router>
            <AppRoutes tree=route_tree() />
        </Router>
    }
}
