use eframe::egui::{
    Align, Align2, Area, Color32, Context, Frame, Id, Layout, Order, RichText, Ui, Visuals, vec2,
};
use vibe_toast::{Toast, ToastVariant};

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::icon,
};

const TOAST_WIDTH: f32 = 320.0;

#[derive(Debug, Clone)]
pub(crate) struct ToastsViewModel<'a> {
    pub(crate) toasts: &'a [Toast],
}

pub(crate) fn show(ctx: &Context, vm: &ToastsViewModel, action_queue: &mut ActionRequestQueue) {
    if vm.toasts.is_empty() {
        return;
    }
    Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_TOP, vec2(-16.0, 64.0))
        .order(Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for toast in vm.toasts {
                show_toast(ui, toast, action_queue);
                ui.add_space(8.0);
            }
        });
}

fn show_toast(ui: &mut Ui, toast: &Toast, action_queue: &mut ActionRequestQueue) {
    let accent = variant_color(ui.visuals(), toast.variant);
    Frame::popup(ui.style()).stroke((1.0, accent)).show(ui, |ui| {
        ui.set_width(TOAST_WIDTH);
        ui.horizontal(|ui| {
            let glyph = variant_icon(toast.variant);
            ui.label(RichText::new(format!("{glyph} {}", toast.title)).strong().color(accent));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button(icon::CLOSE).on_hover_text("Dismiss").clicked() {
                    action_queue.request(UiAction::DismissToast(toast.id).into());
                }
            });
        });
        if let Some(description) = &toast.description {
            ui.label(description);
        }
    });
}

fn variant_color(visuals: &Visuals, variant: ToastVariant) -> Color32 {
    match variant {
        ToastVariant::Default => visuals.strong_text_color(),
        ToastVariant::Success => Color32::from_rgb(34, 160, 90),
        ToastVariant::Info => visuals.hyperlink_color,
        ToastVariant::Error => visuals.error_fg_color,
    }
}

fn variant_icon(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => icon::BELL,
        ToastVariant::Success => icon::CHECK,
        ToastVariant::Info => icon::INFO,
        ToastVariant::Error => icon::WARNING,
    }
}
