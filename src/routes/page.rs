use thiserror::Error;

/// Render-time page failure, caught by the tree-level error boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("missing route parameter `{0}`")]
    MissingParam(&'static str),
    #[error("invalid value {value:?} for route parameter `{name}`")]
    InvalidParam { name: &'static str, value: String },
}

/// Route parameters a page needs, as decoded by the router
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    /// Look up each of `names`; missing ones are left out
    pub fn collect(
        names: &[&'static str],
        mut lookup: impl FnMut(&str) -> Option<String>,
    ) -> Self {
        Self(
            names
                .iter()
                .filter_map(|&name| lookup(name).map(|value| (name, value)))
                .collect(),
        )
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Admin-managed collections
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AdminResource {
    Orders,
    Users,
    Products,
    Categories,
    DressStyles,
}

/// Screen kinds available for each admin collection
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum AdminAction {
    List,
    Add,
    Edit,
    Details,
}

impl AdminResource {
    pub const ALL: [AdminResource; 5] = [
        AdminResource::Orders,
        AdminResource::Users,
        AdminResource::Products,
        AdminResource::Categories,
        AdminResource::DressStyles,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminResource::Orders => "Orders",
            AdminResource::Users => "Users",
            AdminResource::Products => "Products",
            AdminResource::Categories => "Categories",
            AdminResource::DressStyles => "Dress Styles",
        }
    }

    /// Path relative to `/dashboard`
    pub fn path(&self, action: AdminAction) -> &'static str {
        use AdminAction::*;
        use AdminResource::*;

        match (self, action) {
            (Orders, List) => "orders/orders-list",
            (Orders, Add) => "orders/add-order",
            (Orders, Edit) => "orders/edit-order/:id",
            (Orders, Details) => "orders/order-details/:id",
            (Users, List) => "users/all-users-list",
            (Users, Add) => "users/add-user",
            (Users, Edit) => "users/edit-user/:id",
            (Users, Details) => "users/details/:id",
            (Products, List) => "products/products-list",
            (Products, Add) => "products/add-product",
            (Products, Edit) => "products/edit-product/:id",
            (Products, Details) => "products/product-details/:id",
            (Categories, List) => "categories/categories-list",
            (Categories, Add) => "categories/add-category",
            (Categories, Edit) => "categories/edit-category/:id",
            (Categories, Details) => "categories/category-details/:id",
            (DressStyles, List) => "dress-styles/dress-styles-list",
            (DressStyles, Add) => "dress-styles/add-dress-style",
            (DressStyles, Edit) => "dress-styles/edit-dress-style/:id",
            (DressStyles, Details) => "dress-styles/dress-style-details/:id",
        }
    }
}

impl AdminAction {
    pub const ALL: [AdminAction; 4] = [
        AdminAction::List,
        AdminAction::Add,
        AdminAction::Edit,
        AdminAction::Details,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminAction::List => "All",
            AdminAction::Add => "Add",
            AdminAction::Edit => "Edit",
            AdminAction::Details => "Details",
        }
    }
}

/// Leaf screens of the route tree
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Page {
    Home,
    LoginSuccess,
    Shop,
    ProductDetails,
    Search,
    ForgotPassword,
    ResetPassword,
    Cart,
    Checkout,
    OrderConfirmed,
    MyOrders,
    MyOrderDetails,
    MyWishlist,
    MyInfo,
    AdminDashboard,
    Admin(AdminResource, AdminAction),
    SignUp,
    SignIn,
    NotFound,
}

impl Page {
    pub fn title(&self) -> String {
        match self {
            Page::Home => "Home".into(),
            Page::LoginSuccess => "Signing you in".into(),
            Page::Shop => "Shop".into(),
            Page::ProductDetails => "Product".into(),
            Page::Search => "Search".into(),
            Page::ForgotPassword => "Change Password".into(),
            Page::ResetPassword => "New Password".into(),
            Page::Cart => "Cart".into(),
            Page::Checkout => "Checkout".into(),
            Page::OrderConfirmed => "Order Confirmed".into(),
            Page::MyOrders => "My Orders".into(),
            Page::MyOrderDetails => "Order Details".into(),
            Page::MyWishlist => "My Wishlist".into(),
            Page::MyInfo => "My Info".into(),
            Page::AdminDashboard => "Dashboard".into(),
            Page::Admin(resource, action) => format!("{} {}", action.label(), resource.label()),
            Page::SignUp => "Sign Up".into(),
            Page::SignIn => "Sign In".into(),
            Page::NotFound => "Page Not Found".into(),
        }
    }

    /// Route parameters the page cannot render without
    pub fn required_params(&self) -> &'static [&'static str] {
        match self {
            Page::ProductDetails => &["productId"],
            Page::ResetPassword => &["resetToken"],
            Page::MyOrderDetails => &["id"],
            Page::Admin(_, AdminAction::Edit | AdminAction::Details) => &["id"],
            _ => &[],
        }
    }

    /// Validate route parameters before rendering
    pub fn check_params(&self, params: &Params) -> Result<(), PageError> {
        for &name in self.required_params() {
            let value = params.get(name).ok_or(PageError::MissingParam(name))?;
            if !is_usable(value) {
                return Err(PageError::InvalidParam {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Decoded values may hold any printable text, but not only whitespace
fn is_usable(value: &str) -> bool {
    !value.trim().is_empty() && !value.chars().any(char::is_control)
}
