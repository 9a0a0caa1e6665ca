pub mod guard;
pub mod page;
pub mod tree;

pub use guard::{Guard, GuardOutcome, RedirectTarget, HOME_PATH, SIGN_IN_PATH};
pub use page::{AdminAction, AdminResource, Page, PageError, Params};
pub use tree::{route_tree, Branch, Element, Layout, RouteNode};
