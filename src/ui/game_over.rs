//! End-of-run summary screen.

use super::style;
use super::UiActions;
use crate::engine::SessionStats;

/// Render the game over screen with the run statistics
pub fn draw_game_over(ctx: &egui::Context, stats: &SessionStats, actions: &mut UiActions) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(style::colors::PANEL_BG))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(110.0);

                ui.heading(
                    egui::RichText::new("Game Over")
                        .size(48.0)
                        .color(style::colors::ARENA_RED),
                );

                ui.add_space(40.0);

                let lines = [
                    format!("Waves Cleared: {}", stats.waves_cleared),
                    format!("Enemies Killed: {}", stats.enemies_killed),
                    format!("Damage Dealt: {}", stats.damage_dealt),
                    format!("Healing Received: {}", stats.healing_received),
                ];
                for line in lines {
                    ui.label(egui::RichText::new(line).size(18.0));
                    ui.add_space(6.0);
                }

                ui.add_space(40.0);

                let back = egui::Button::new(
                    egui::RichText::new("Return to Main Menu").size(20.0),
                )
                .min_size(egui::vec2(240.0, 50.0));
                if ui.add(back).clicked() {
                    actions.back_to_menu = true;
                }
            });
        });
}
