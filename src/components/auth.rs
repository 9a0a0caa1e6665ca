use leptos::*;
use leptos_router::*;

use super::layout::ThemeToggle;
use crate::api::use_api_client;
use crate::state::session::{sanitize_return_to, take_return_to};
use crate::state::{use_session, SessionQuery};

#[component]
pub fn SignIn() -> impl IntoView {
    let login_url = use_api_client().login_url();

    view! {
        <div class="auth-card">
            <div class="auth-card-header">
                <h2>"Sign In"</h2>
                <ThemeToggle />
            </div>
            <a href=login_url class="button">"Continue with Google"</a>
            <p>
                "Don't have an account? "
                <A href="/sign-up">"Sign up"</A>
            </p>
        </div>
    }
}

#[component]
pub fn SignUp() -> impl IntoView {
    let login_url = use_api_client().login_url();

    view! {
        <div class="auth-card">
            <div class="auth-card-header">
                <h2>"Create Account"</h2>
                <ThemeToggle />
            </div>
            <a href=login_url class="button">"Sign up with Google"</a>
            <p>
                "Already have an account? "
                <A href="/sign-in">"Sign in"</A>
            </p>
        </div>
    }
}

/// Landing page after the backend completes sign-in.
/// Refreshes the session, then resumes the remembered destination.
#[component]
pub fn LoginSuccess() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let target = sanitize_return_to(take_return_to().as_deref());

    session.invalidate();

    create_effect(move |done: Option<bool>| {
        if done == Some(true) {
            return true;
        }
        match session.query() {
            SessionQuery::Resolved(_) => {
                log::info!("Signed in, continuing to {}", target);
                navigate(&target, Default::default());
                true
            }
            SessionQuery::Pending => false,
        }
    });

    view! { <div class="loading">"Signing you in..."</div> }
}
