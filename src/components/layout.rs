use leptos::*;
use leptos_router::*;

use super::pages::ErrorPage;
use crate::api::use_api_client;
use crate::routes::HOME_PATH;
use crate::state::{use_notices, use_session, use_theme, Session, Theme};

/// Layout component with navbar, content and notices.
/// Render failures anywhere below are contained to the content area.
#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                <ErrorBoundary fallback=|errors| view! { <ErrorPage errors=errors /> }>
                    <Outlet />
                </ErrorBoundary>
            </main>
            <NoticeHost />
        </div>
    }
}

/// Navbar with tabs, account actions and theme toggle
#[component]
fn Navbar() -> impl IntoView {
    let location = use_location();
    let session = use_session();

    // Check if a path is active
    let is_active = move |path: &str| location.pathname.get().starts_with(path);
    let tab_class = move |path: &'static str| {
        move || if is_active(path) { "tab active" } else { "tab" }
    };

    let account = move || match session.session() {
        Some(Session::Authenticated(user)) => {
            let name = user.display_name().to_string();
            view! {
                {user.is_admin().then(|| view! {
                    <A href="/dashboard" class=tab_class("/dashboard")>"Dashboard"</A>
                })}
                <A href="/profile" class=tab_class("/profile")>{name}</A>
                <SignOutButton />
            }
            .into_view()
        }
        Some(Session::Anonymous) => view! {
            <A href="/sign-in" class=tab_class("/sign-in")>"Sign in"</A>
        }
        .into_view(),
        None => ().into_view(),
    };

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <A href="/" class="navbar-title">"Storefront"</A>
                <div class="navbar-tabs">
                    <A href="/shop" class=tab_class("/shop")>"Shop"</A>
                    <A href="/search" class=tab_class("/search")>"Search"</A>
                    <A href="/cart" class=tab_class("/cart")>"Cart"</A>
                </div>
                <div class="navbar-actions">
                    {account}
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

#[component]
fn SignOutButton() -> impl IntoView {
    let session = use_session();
    let client = use_api_client();
    let navigate = use_navigate();

    let sign_out = create_action(move |_: &()| {
        let client = client.clone();
        async move {
            if let Err(e) = client.logout().await {
                log::warn!("Logout failed: {}", e);
            }
        }
    });

    // Whatever the backend said, ask the oracle again
    create_effect(move |_| {
        if sign_out.value().get().is_some() {
            session.invalidate();
            navigate(HOME_PATH, Default::default());
        }
    });

    view! {
        <button
            class="tab"
            disabled=move || sign_out.pending().get()
            on:click=move |_| sign_out.dispatch(())
        >
            "Sign out"
        </button>
    }
}

/// Theme toggle button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme();

    let icon = move || {
        match theme_ctx.theme.get() {
            Theme::Light => "Dark", // Show what clicking will do
            Theme::Dark => "Light",
        }
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme_ctx.toggle()
        >
            {icon}
        </button>
    }
}

/// Stack of keyed toast notices
#[component]
fn NoticeHost() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-host" aria-live="polite">
            <For
                each=move || notices.items()
                key=|(id, _)| *id
                children=|(_, notice)| {
                    view! {
                        <div class=format!("notice notice-{}", notice.kind.as_str())>
                            {notice.content}
                        </div>
                    }
                }
            />
        </div>
    }
}
