use eframe::egui::{Align, Button, Key, Layout, RichText, TextEdit, Ui};

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::{icon, placeholder},
};

#[derive(Debug, Clone)]
pub(crate) struct HomeScreenViewModel<'a> {
    waitlist_email: &'a str,
}

impl<'a> HomeScreenViewModel<'a> {
    #[must_use]
    pub(crate) fn new(waitlist_email: &'a str) -> Self {
        Self { waitlist_email }
    }

    #[must_use]
    pub(crate) fn can_join(&self) -> bool {
        !self.waitlist_email.trim().is_empty()
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &HomeScreenViewModel, action_queue: &mut ActionRequestQueue) {
    ui.heading("Companies");
    ui.add_space(12.0);

    placeholder::card(ui, |ui| {
        ui.label(RichText::new("Welcome to VIBE").strong().size(16.0));
        ui.label(RichText::new("A clean base layout powered by eframe and egui.").weak());
        ui.add_space(12.0);

        ui.label("Join the waitlist");
        let mut email = vm.waitlist_email.to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut email)
                .hint_text("you@example.com")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            action_queue.request(UiAction::UpdateWaitlistEmail(email).into());
        }
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        ui.add_space(8.0);
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            let button = ui.add_enabled(
                vm.can_join(),
                Button::new(format!("{} Get notified", icon::MAIL)),
            );
            if button.clicked() || (submitted && vm.can_join()) {
                action_queue.request(UiAction::JoinWaitlist.into());
            }
        });
    });
}
