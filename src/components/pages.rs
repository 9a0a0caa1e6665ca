use leptos::*;
use leptos_router::*;

use super::admin::AdminDashboard;
use super::auth::{LoginSuccess, SignIn, SignUp};
use crate::routes::{Page, Params};

/// Leaf page of a matched route. Bad route parameters surface as an
/// error for the enclosing `ErrorBoundary`.
#[component]
pub fn PageView(page: Page) -> impl IntoView {
    // The router hands over percent-decoded values
    let route_params = use_params_map();

    move || {
        let params = route_params.with(|map| {
            Params::collect(page.required_params(), |name| map.get(name).cloned())
        });
        page.check_params(&params).map(|()| render_page(page, params))
    }
}

fn render_page(page: Page, params: Params) -> View {
    match page {
        Page::Home => view! { <Home /> }.into_view(),
        Page::LoginSuccess => view! { <LoginSuccess /> }.into_view(),
        Page::Search => view! { <Search /> }.into_view(),
        Page::AdminDashboard => view! { <AdminDashboard /> }.into_view(),
        Page::SignIn => view! { <SignIn /> }.into_view(),
        Page::SignUp => view! { <SignUp /> }.into_view(),
        Page::NotFound => view! { <NotFound /> }.into_view(),
        other => view! { <PlaceholderPage title=other.title() params=params /> }.into_view(),
    }
}

/// Title plus captured route parameters
#[component]
pub fn PlaceholderPage(title: String, #[prop(optional)] params: Params) -> impl IntoView {
    let details = (!params.is_empty()).then(|| {
        let rows = params
            .iter()
            .map(|(name, value)| {
                view! {
                    <dt>{name.to_string()}</dt>
                    <dd>{value.to_string()}</dd>
                }
            })
            .collect_view();
        view! { <dl class="route-params">{rows}</dl> }
    });

    view! {
        <section class="page">
            <h2>{title}</h2>
            {details}
        </section>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <section class="page home">
            <h2>"Find clothes that match your style"</h2>
            <A href="/shop" class="button">"Shop now"</A>
        </section>
    }
}

#[component]
fn Search() -> impl IntoView {
    let query = use_query_map();
    let term = move || query.with(|q| q.get("q").cloned().unwrap_or_default());

    view! {
        <section class="page">
            <h2>"Search"</h2>
            <p class="placeholder-text">"Results for: " {term}</p>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h2>"404"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" class="button">"Back home"</A>
        </section>
    }
}

/// Fallback for the tree-level error boundary
#[component]
pub fn ErrorPage(errors: RwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| {
                log::error!("Render failed: {}", e);
                view! { <li>{e.to_string()}</li> }
            })
            .collect_view()
    };

    view! {
        <div class="error-banner">
            <strong>"Something went wrong."</strong>
            <ul>{messages}</ul>
            <A href="/" class="button">"Back home"</A>
        </div>
    }
}
