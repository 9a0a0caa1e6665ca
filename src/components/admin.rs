use leptos::*;
use leptos_router::*;

use crate::routes::{AdminAction, AdminResource};

fn admin_href(resource: AdminResource, action: AdminAction) -> String {
    format!("/dashboard/{}", resource.path(action))
}

/// Admin area with a sidebar of collections
#[component]
pub fn AdminLayout() -> impl IntoView {
    let links = AdminResource::ALL
        .into_iter()
        .map(|resource| {
            view! {
                <li>
                    <A href=admin_href(resource, AdminAction::List)>{resource.label()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="admin-layout">
            <aside class="side-nav">
                <A href="/dashboard" exact=true>"Dashboard"</A>
                <ul>{links}</ul>
            </aside>
            <section class="admin-content"><Outlet /></section>
        </div>
    }
}

/// Admin landing page with shortcuts to every collection
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let cards = AdminResource::ALL
        .into_iter()
        .map(|resource| {
            view! {
                <div class="card">
                    <h3>{resource.label()}</h3>
                    <A href=admin_href(resource, AdminAction::List)>"View all"</A>
                    " "
                    <A href=admin_href(resource, AdminAction::Add)>"Add new"</A>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>
            <div class="dashboard-grid">{cards}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{route_tree, Page};

    #[test]
    fn test_sidebar_links_point_at_list_pages() {
        let branches = route_tree().branches();
        for resource in AdminResource::ALL {
            let href = admin_href(resource, AdminAction::List);
            let branch = branches.iter().find(|b| b.pattern == href).unwrap();
            assert_eq!(branch.page, Page::Admin(resource, AdminAction::List));
        }
    }
}
