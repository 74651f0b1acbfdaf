pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod home_screen;
pub(crate) mod icon;
pub(crate) mod notification_settings;
pub(crate) mod page;
pub(crate) mod placeholder;
pub(crate) mod settings_screen;
pub(crate) mod sidebar;
pub(crate) mod toasts;
