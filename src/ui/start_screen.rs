//! Main menu and tutorial screens.

use super::style;
use super::UiActions;
use crate::constants::*;

/// Render the title screen
pub fn draw_main_menu(ctx: &egui::Context, actions: &mut UiActions) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(style::colors::PANEL_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(130.0);

                ui.heading(
                    egui::RichText::new(WINDOW_TITLE)
                        .size(48.0)
                        .color(style::colors::ARENA_GOLD),
                );

                ui.add_space(60.0);

                let start = egui::Button::new(
                    egui::RichText::new("Start Game")
                        .size(24.0)
                        .color(egui::Color32::WHITE),
                )
                .min_size(egui::vec2(200.0, 50.0))
                .fill(style::colors::ARENA_GREEN);
                if ui.add(start).clicked() {
                    actions.start_game = true;
                }

                ui.add_space(16.0);

                let tutorial = egui::Button::new(egui::RichText::new("Tutorial").size(24.0))
                    .min_size(egui::vec2(200.0, 50.0));
                if ui.add(tutorial).clicked() {
                    actions.show_tutorial = true;
                }
            });
        });
}

const TUTORIAL_LINES: [&str; 6] = [
    "1. Click on an enemy to target it.",
    "2. Press Attack to damage the enemy.",
    "3. Press Heal to restore health.",
    "4. After each wave, you can upgrade one of your stats.",
    "5. Every four waves, one additional enemy will be added to each wave.",
    "6. Survive as many waves of enemies as you can!",
];

/// Render the how-to-play screen
pub fn draw_tutorial(ctx: &egui::Context, actions: &mut UiActions) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(style::colors::PANEL_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);

                ui.heading(
                    egui::RichText::new("Tutorial")
                        .size(32.0)
                        .color(style::colors::ARENA_GOLD),
                );

                ui.add_space(30.0);

                for line in TUTORIAL_LINES {
                    ui.label(egui::RichText::new(line).size(16.0));
                    ui.add_space(6.0);
                }

                ui.add_space(30.0);

                let back = egui::Button::new(egui::RichText::new("Back").size(20.0))
                    .min_size(egui::vec2(160.0, 44.0));
                if ui.add(back).clicked() {
                    actions.back_to_menu = true;
                }
            });
        });
}
