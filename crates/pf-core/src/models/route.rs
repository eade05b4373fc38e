use std::fmt;

/// Destinations the profile screen can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page, outside the authenticated area.
    Root,
    /// Detailed view of the user's own profile.
    ProfileView,
    /// Interest selection, reached from the profile screen.
    Interest,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::ProfileView => "/profile/view",
            Self::Interest => "/interest",
        }
    }

    /// Navigation state passed along so the target can return here.
    pub fn origin(&self) -> Option<&'static str> {
        match self {
            Self::Interest => Some("profile"),
            Self::Root | Self::ProfileView => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
