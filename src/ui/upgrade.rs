//! Stat upgrade prompt shown after clearing a wave.
//!
//! Modal in spirit: the action buttons are already locked while the
//! prompt is up, so the only way forward is picking a stat.

use super::style;
use super::UiActions;
use crate::constants::*;
use crate::engine::StatUpgrade;

/// Render the upgrade prompt in the middle of the screen
pub fn draw_upgrade_prompt(ctx: &egui::Context, actions: &mut UiActions) {
    let center = ctx.screen_rect().center();
    let width = 260.0;
    let height = 190.0;

    egui::Window::new("upgrade")
        .fixed_pos([center.x - width / 2.0, center.y - height / 2.0])
        .fixed_size([width, height])
        .title_bar(false)
        .frame(style::arena_window_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.heading(
                    egui::RichText::new("Wave Cleared!")
                        .size(24.0)
                        .color(style::colors::ARENA_GOLD),
                );
                ui.add_space(6.0);
                ui.label("Choose a stat to upgrade:");
                ui.add_space(10.0);

                let full_width = egui::vec2(ui.available_width(), 30.0);

                let health = egui::Button::new(format!("Health +{}", UPGRADE_HEALTH_AMOUNT))
                    .min_size(full_width);
                if ui.add(health).clicked() {
                    actions.upgrade = Some(StatUpgrade::Health);
                }

                let damage = egui::Button::new(format!("Damage +{}", UPGRADE_DAMAGE_AMOUNT))
                    .min_size(full_width);
                if ui.add(damage).clicked() {
                    actions.upgrade = Some(StatUpgrade::Damage);
                }

                let healing = egui::Button::new(format!("Healing +{}", UPGRADE_HEALING_AMOUNT))
                    .min_size(full_width);
                if ui.add(healing).clicked() {
                    actions.upgrade = Some(StatUpgrade::Healing);
                }
            });
        });
}
