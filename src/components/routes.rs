//! Mounts the declarative route tree as nested `leptos_router` routes.
//!
//! Layouts and guards become routes rendering an `<Outlet/>`; the router
//! alone decides which branch matches a location.

use leptos::*;
use leptos_router::*;

use super::admin::AdminLayout;
use super::layout::MainLayout;
use super::pages::PageView;
use super::profile::ProfileLayout;
use crate::routes::{Element, Guard, GuardOutcome, Layout, RouteNode};
use crate::state::session::remember_return_to;
use crate::state::use_session;

#[component]
pub fn AppRoutes(tree: RouteNode) -> impl IntoView {
    for pattern in tree.duplicate_patterns() {
        log::warn!("Route pattern {} is registered more than once", pattern);
    }

    let root = route_definition(&tree);
    view! { <Routes>{root}</Routes> }
}

/// One `<Route>` per node. Children are passed as a flat fragment so the
/// router sees every nested route definition directly.
fn route_definition(node: &RouteNode) -> View {
    let element = node.element;
    let view = move || element_view(element);
    let props = RouteProps::<View, _, &'static str>::builder()
        .path(node.path)
        .view(view);

    if node.children.is_empty() {
        Route(props.build()).into_view()
    } else {
        let children: Vec<View> = node.children.iter().map(route_definition).collect();
        let children: Children = Box::new(move || Fragment::new(children));
        Route(props.children(children).build()).into_view()
    }
}

fn element_view(element: Element) -> View {
    match element {
        Element::Layout(Layout::Main) => view! { <MainLayout /> }.into_view(),
        Element::Layout(Layout::Profile) => view! { <ProfileLayout /> }.into_view(),
        Element::Layout(Layout::Admin) => view! { <AdminLayout /> }.into_view(),
        Element::Guard(guard) => view! { <GuardOutlet guard=guard /> }.into_view(),
        Element::Page(page) => view! { <PageView page=page /> }.into_view(),
    }
}

/// Pathless route gating its nested routes on the session
#[component]
pub fn GuardOutlet(guard: Guard) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    // Re-evaluated on navigation and whenever the session query changes
    let outcome = create_memo(move |_| {
        let intended = location_href(&location.pathname.get(), &location.search.get());
        guard.evaluate(&session.query(), &intended)
    });

    move || match outcome.get() {
        GuardOutcome::Allow => view! { <Outlet /> }.into_view(),
        GuardOutcome::Pending => view! { <GuardPlaceholder /> }.into_view(),
        GuardOutcome::Redirect(target) => {
            if let Some(path) = &target.return_to {
                remember_return_to(path);
            }
            view! { <Redirect path=target.to /> }.into_view()
        }
    }
}

fn location_href(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, search)
    }
}

/// Shown while a guard waits on the session
#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="guard-pending">
            <div class="loading">"Loading..."</div>
        </div>
    }
}
