/// Client-side destinations the domain layer can ask the UI to navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Dashboard,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Dashboard => "/dashboard",
        }
    }
}

/// Where the root route sends every visitor.
pub const LANDING_REDIRECT: Redirect = Redirect::Dashboard;
