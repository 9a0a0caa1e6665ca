//! Declarative route tree for the storefront.
//!
//! The tree is plain data. `components::routes` mounts it as nested
//! `leptos_router` routes, which own path matching; here it can only be
//! walked into root-to-leaf branches.

use std::collections::HashMap;

use super::guard::Guard;
use super::page::{AdminAction, AdminResource, Page};

/// Wrapping layouts that render their nested content
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Layout {
    Main,
    Profile,
    Admin,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Element {
    Layout(Layout),
    Guard(Guard),
    Page(Page),
}

#[derive(Clone, Debug)]
pub struct RouteNode {
    /// Pattern relative to the parent; empty for pathless and index nodes
    pub path: &'static str,
    pub element: Element,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    pub fn layout(path: &'static str, layout: Layout, children: Vec<RouteNode>) -> Self {
        Self {
            path,
            element: Element::Layout(layout),
            children,
        }
    }

    /// Pathless node gating its children
    pub fn guard(guard: Guard, children: Vec<RouteNode>) -> Self {
        Self {
            path: "",
            element: Element::Guard(guard),
            children,
        }
    }

    pub fn page(path: &'static str, page: Page) -> Self {
        Self {
            path,
            element: Element::Page(page),
            children: Vec::new(),
        }
    }

    /// Page rendered at its parent's own path
    pub fn index(page: Page) -> Self {
        Self::page("", page)
    }

    /// Every root-to-leaf branch, in declaration order
    pub fn branches(&self) -> Vec<Branch> {
        let mut out = Vec::new();
        flatten(self, "/", &mut Vec::new(), &mut out);
        out
    }

    /// Full patterns that more than one branch registers
    pub fn duplicate_patterns(&self) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for branch in self.branches() {
            *counts.entry(branch.pattern).or_default() += 1;
        }
        let mut dupes: Vec<String> = counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(p, _)| p)
            .collect();
        dupes.sort_unstable();
        dupes
    }
}

/// One root-to-leaf path through the tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    /// Full pattern as the router sees it, e.g. `/product/:productId`
    pub pattern: String,
    /// Layouts and guards from the root down, in render order
    pub chain: Vec<Element>,
    pub page: Page,
}

impl Branch {
    pub fn guards(&self) -> impl Iterator<Item = Guard> + '_ {
        self.chain.iter().filter_map(|e| match e {
            Element::Guard(g) => Some(*g),
            _ => None,
        })
    }

    pub fn layouts(&self) -> impl Iterator<Item = Layout> + '_ {
        self.chain.iter().filter_map(|e| match e {
            Element::Layout(l) => Some(*l),
            _ => None,
        })
    }
}

/// Concatenate a parent pattern and a relative child pattern
pub fn join(parent: &str, child: &str) -> String {
    let parent = parent.trim_end_matches('/');
    let child = child.trim_matches('/');
    match (parent.is_empty(), child.is_empty()) {
        (true, true) => "/".to_string(),
        (_, true) => parent.to_string(),
        _ => format!("{}/{}", parent, child),
    }
}

fn flatten(node: &RouteNode, base: &str, chain: &mut Vec<Element>, out: &mut Vec<Branch>) {
    let pattern = join(base, node.path);

    match node.element {
        Element::Page(page) => out.push(Branch {
            pattern,
            chain: chain.clone(),
            page,
        }),
        element => {
            chain.push(element);
            for child in &node.children {
                flatten(child, &pattern, chain, out);
            }
            chain.pop();
        }
    }
}

fn admin_routes() -> Vec<RouteNode> {
    let mut routes = vec![RouteNode::index(Page::AdminDashboard)];
    for resource in AdminResource::ALL {
        for action in AdminAction::ALL {
            routes.push(RouteNode::page(
                resource.path(action),
                Page::Admin(resource, action),
            ));
        }
    }
    routes
}

/// The storefront route tree
pub fn route_tree() -> RouteNode {
    RouteNode::layout(
        "/",
        Layout::Main,
        vec![
            // public
            RouteNode::index(Page::Home),
            RouteNode::page("auth/login/success", Page::LoginSuccess),
            RouteNode::page("shop", Page::Shop),
            RouteNode::page("product/:productId", Page::ProductDetails),
            RouteNode::page("search", Page::Search),
            RouteNode::guard(
                Guard::Private,
                vec![
                    RouteNode::page("forgot-password", Page::ForgotPassword),
                    RouteNode::page("cart", Page::Cart),
                    RouteNode::layout(
                        "profile",
                        Layout::Profile,
                        vec![
                            RouteNode::index(Page::MyInfo),
                            RouteNode::page("my-orders", Page::MyOrders),
                            RouteNode::page("order-details/:id", Page::MyOrderDetails),
                            RouteNode::page("my-wishlist", Page::MyWishlist),
                            RouteNode::page("my-info", Page::MyInfo),
                        ],
                    ),
                    RouteNode::page("reset-password/:resetToken", Page::ResetPassword),
                    RouteNode::page("checkout", Page::Checkout),
                    RouteNode::page("order-confirmed", Page::OrderConfirmed),
                ],
            ),
            RouteNode::guard(
                Guard::AdminOnly,
                vec![RouteNode::layout("dashboard", Layout::Admin, admin_routes())],
            ),
            RouteNode::guard(
                Guard::GuestOnly,
                vec![
                    RouteNode::page("sign-up", Page::SignUp),
                    RouteNode::page("sign-in", Page::SignIn),
                ],
            ),
            RouteNode::page("*any", Page::NotFound),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(pattern: &str) -> Branch {
        route_tree()
            .branches()
            .into_iter()
            .find(|b| b.pattern == pattern)
            .unwrap_or_else(|| panic!("no branch for {}", pattern))
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", ""), "/");
        assert_eq!(join("/", "shop"), "/shop");
        assert_eq!(join("/profile", ""), "/profile");
        assert_eq!(
            join("/dashboard", "orders/edit-order/:id"),
            "/dashboard/orders/edit-order/:id"
        );
    }

    #[test]
    fn test_storefront_has_no_duplicate_patterns() {
        assert!(route_tree().duplicate_patterns().is_empty());
    }

    #[test]
    fn test_duplicates_are_flagged() {
        let tree = RouteNode::layout(
            "/",
            Layout::Main,
            vec![
                RouteNode::page("orders", Page::MyOrders),
                RouteNode::guard(
                    Guard::Private,
                    vec![RouteNode::page("orders", Page::MyOrderDetails)],
                ),
            ],
        );
        assert_eq!(tree.duplicate_patterns(), vec!["/orders".to_string()]);
    }

    #[test]
    fn test_profile_branch_chain() {
        let b = branch("/profile/my-orders");
        assert_eq!(b.page, Page::MyOrders);
        assert_eq!(
            b.chain,
            vec![
                Element::Layout(Layout::Main),
                Element::Guard(Guard::Private),
                Element::Layout(Layout::Profile),
            ]
        );
    }

    #[test]
    fn test_index_routes() {
        assert_eq!(branch("/").page, Page::Home);
        assert_eq!(branch("/profile").page, Page::MyInfo);
        assert_eq!(branch("/dashboard").page, Page::AdminDashboard);
    }

    #[test]
    fn test_admin_routes_have_their_own_pages() {
        assert_eq!(
            branch("/dashboard/orders/order-details/:id").page,
            Page::Admin(AdminResource::Orders, AdminAction::Details)
        );
        assert_eq!(
            branch("/dashboard/orders/edit-order/:id").page,
            Page::Admin(AdminResource::Orders, AdminAction::Edit)
        );
        let admin = branch("/dashboard/users/all-users-list");
        assert_eq!(admin.layouts().collect::<Vec<_>>(), vec![Layout::Main, Layout::Admin]);
    }

    #[test]
    fn test_every_branch_sits_under_main_layout() {
        for branch in route_tree().branches() {
            assert_eq!(branch.chain.first(), Some(&Element::Layout(Layout::Main)));
        }
    }

    #[test]
    fn test_not_found_is_the_unguarded_wildcard() {
        let b = branch("/*any");
        assert_eq!(b.page, Page::NotFound);
        assert_eq!(b.guards().count(), 0);
    }
}
