/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Route {
    Companies,
    Catalog,
    Quotes,
    Services,
    Reports,
    AuditLogs,
    Migrations,
    MyCompany,
    Settings,
    Account,
    Messages,
    Docs,
}

impl Route {
    pub(crate) const ALL: [Self; 12] = [
        Self::Companies,
        Self::Catalog,
        Self::Quotes,
        Self::Services,
        Self::Reports,
        Self::AuditLogs,
        Self::Migrations,
        Self::MyCompany,
        Self::Settings,
        Self::Account,
        Self::Messages,
        Self::Docs,
    ];

    // Sidebar navigation, top to bottom. `MyCompany` is listed separately.
    pub(crate) const NAVIGATION: [Self; 7] = [
        Self::Companies,
        Self::Catalog,
        Self::Quotes,
        Self::Services,
        Self::Reports,
        Self::AuditLogs,
        Self::Migrations,
    ];

    #[must_use]
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Companies => "Companies",
            Self::Catalog => "Catalog",
            Self::Quotes => "Quotes",
            Self::Services => "Services",
            Self::Reports => "Reports",
            Self::AuditLogs => "Audit Logs",
            Self::Migrations => "Migrations",
            Self::MyCompany => "My Company",
            Self::Settings => "Settings",
            Self::Account => "My Account",
            Self::Messages => "Messages",
            Self::Docs => "Docs",
        }
    }

    /// Path of the page below the deployment base path.
    #[must_use]
    pub(crate) const fn path(self) -> &'static str {
        match self {
            Self::Companies => "/",
            Self::Catalog => "/catalog",
            Self::Quotes => "/quotes",
            Self::Services => "/services",
            Self::Reports => "/reports",
            Self::AuditLogs => "/audit-logs",
            Self::Migrations => "/migrations",
            Self::MyCompany => "/my-company",
            Self::Settings => "/settings",
            Self::Account => "/account",
            Self::Messages => "/messages",
            Self::Docs => "/docs",
        }
    }

    /// Finds the page for a path below the deployment base path.
    ///
    /// A trailing slash is ignored, and an empty path is the home page.
    #[must_use]
    pub(crate) fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// A tab of the settings page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SettingsTab {
    Profile,
    #[default]
    Notifications,
    Security,
    Billing,
}

impl SettingsTab {
    pub(crate) const ALL: [Self; 4] = [
        Self::Profile,
        Self::Notifications,
        Self::Security,
        Self::Billing,
    ];

    #[must_use]
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
            Self::Billing => "Billing",
        }
    }
}
