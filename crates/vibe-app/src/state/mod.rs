pub(crate) use self::{app_state::*, route::*, ui_state::*};

mod app_state;
mod route;
mod ui_state;
