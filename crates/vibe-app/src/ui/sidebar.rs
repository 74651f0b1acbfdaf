use eframe::egui::{Align, Button, Frame, Layout, RichText, Ui, vec2};

use crate::{
    action::{ActionRequestQueue, NavigationAction, UiAction},
    state::Route,
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel {
    active: Route,
    collapsed: bool,
    version: String,
}

impl SidebarViewModel {
    #[must_use]
    pub(crate) fn new(active: Route, collapsed: bool, version: String) -> Self {
        Self {
            active,
            collapsed,
            version,
        }
    }

    #[must_use]
    pub(crate) fn active(&self) -> Route {
        self.active
    }

    #[must_use]
    pub(crate) fn collapsed(&self) -> bool {
        self.collapsed
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        brand_mark(ui);
        if !vm.collapsed {
            ui.label(RichText::new("VIBE").strong());
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let (glyph, hover) = if vm.collapsed {
                (icon::CHEVRON_RIGHT, "Expand sidebar")
            } else {
                (icon::CHEVRON_LEFT, "Collapse sidebar")
            };
            if ui.small_button(glyph).on_hover_text(hover).clicked() {
                action_queue.request(UiAction::ToggleSidebar.into());
            }
        });
    });
    ui.separator();

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        if !vm.collapsed {
            ui.add_space(4.0);
            ui.small(format!("Version {}", vm.version));
            ui.separator();
        }
        nav_item(ui, vm, Route::MyCompany, action_queue);
        ui.separator();

        ui.with_layout(Layout::top_down(Align::Min), |ui| {
            for route in Route::NAVIGATION {
                nav_item(ui, vm, route, action_queue);
            }
        });
    });
}

fn brand_mark(ui: &mut Ui) {
    Frame::new()
        .fill(ui.visuals().error_fg_color)
        .corner_radius(4.0)
        .inner_margin(vec2(8.0, 4.0))
        .show(ui, |ui| {
            ui.label(RichText::new("V").strong().color(ui.visuals().strong_text_color()));
        });
}

fn nav_item(
    ui: &mut Ui,
    vm: &SidebarViewModel,
    route: Route,
    action_queue: &mut ActionRequestQueue,
) {
    let glyph = icon::route(route);
    let text = if vm.collapsed {
        glyph.to_owned()
    } else {
        format!("{glyph}  {}", route.title())
    };
    let button = Button::selectable(vm.active() == route, text)
        .min_size(vec2(ui.available_width(), 28.0));
    let mut response = ui.add(button);
    if vm.collapsed {
        response = response.on_hover_text(route.title());
    }
    if response.clicked() {
        action_queue.request(NavigationAction::Navigate(route).into());
    }
}
