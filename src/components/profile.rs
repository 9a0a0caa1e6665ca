use leptos::*;
use leptos_router::*;

/// Account section with side navigation
#[component]
pub fn ProfileLayout() -> impl IntoView {
    let location = use_location();
    let link_class = move |path: &'static str| {
        move || {
            if location.pathname.get() == path {
                "side-link active"
            } else {
                "side-link"
            }
        }
    };

    view! {
        <div class="profile-layout">
            <aside class="side-nav">
                <A href="/profile/my-orders" class=link_class("/profile/my-orders")>"My Orders"</A>
                <A href="/profile/my-wishlist" class=link_class("/profile/my-wishlist")>
                    "My Wishlist"
                </A>
                <A href="/profile/my-info" class=link_class("/profile/my-info")>"My Info"</A>
            </aside>
            <section class="profile-content"><Outlet /></section>
        </div>
    }
}
