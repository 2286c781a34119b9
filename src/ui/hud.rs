//! Player panel UI component.
//!
//! Displays player health, combat stats, the current target, and the
//! action buttons along the bottom of the screen.

use super::icons::SheetIcons;
use super::style;
use super::UiActions;
use crate::constants::*;
use crate::engine::Session;

/// Data needed to render the player panel
pub struct PlayerPanelData {
    pub health_current: i32,
    pub health_max: i32,
    pub damage: i32,
    pub healing_power: i32,
    /// Roster index of the current target
    pub selected_enemy: usize,
    pub buttons_enabled: bool,
}

/// Extract player panel data from the session
pub fn get_player_panel_data(session: &Session) -> PlayerPanelData {
    PlayerPanelData {
        health_current: session.player.stats.current_health,
        health_max: session.player.stats.max_health,
        damage: session.player.stats.damage,
        healing_power: session.player.healing_power,
        selected_enemy: session.selected_enemy,
        buttons_enabled: session.input_enabled(),
    }
}

/// Render the player panel (health bar, stats, action buttons)
pub fn draw_player_panel(
    ctx: &egui::Context,
    data: &PlayerPanelData,
    icons: Option<&SheetIcons>,
    actions: &mut UiActions,
) {
    let viewport = ctx.screen_rect();
    let panel_width = viewport.width() - 36.0;

    egui::Window::new("player_panel")
        .fixed_pos([10.0, viewport.height() - 140.0])
        .fixed_size([panel_width, 120.0])
        .title_bar(false)
        .frame(style::arena_window_frame())
        .show(ctx, |ui| {
            let health_percent = if data.health_max > 0 {
                data.health_current as f32 / data.health_max as f32
            } else {
                0.0
            };

            // HP bar and stat readouts
            ui.horizontal(|ui| {
                if let Some(icons) = icons {
                    let heart_img = egui::Image::new(egui::load::SizedTexture::new(
                        icons.texture_id,
                        egui::vec2(STAT_ICON_SIZE, STAT_ICON_SIZE),
                    ))
                    .uv(icons.heart_uv);
                    ui.add(heart_img);
                }
                ui.add_sized(
                    [200.0, 18.0],
                    egui::ProgressBar::new(health_percent)
                        .fill(style::colors::HP_BAR)
                        .text(format!("{}/{}", data.health_current, data.health_max)),
                );

                ui.add_space(16.0);
                if let Some(icons) = icons {
                    let sword_img = egui::Image::new(egui::load::SizedTexture::new(
                        icons.texture_id,
                        egui::vec2(STAT_ICON_SIZE, STAT_ICON_SIZE),
                    ))
                    .uv(icons.sword_uv);
                    ui.add(sword_img);
                }
                ui.label(format!("Damage: {}", data.damage));

                ui.add_space(16.0);
                if let Some(icons) = icons {
                    let potion_img = egui::Image::new(egui::load::SizedTexture::new(
                        icons.texture_id,
                        egui::vec2(STAT_ICON_SIZE, STAT_ICON_SIZE),
                    ))
                    .uv(icons.potion_uv);
                    ui.add(potion_img);
                }
                ui.label(format!("Healing Power: {}", data.healing_power));

                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new(format!("Selected Enemy = {}", data.selected_enemy + 1))
                        .color(style::colors::TEXT_ACCENT),
                );
            });

            ui.add_space(10.0);

            // Action buttons
            ui.horizontal(|ui| {
                let attack = egui::Button::new(
                    egui::RichText::new("Attack").size(18.0).color(egui::Color32::WHITE),
                )
                .min_size(egui::vec2(120.0, 40.0))
                .fill(style::colors::ARENA_RED);
                if ui
                    .add_enabled(data.buttons_enabled, attack)
                    .on_hover_text("Attack the selected enemy\n\n[A]")
                    .clicked()
                {
                    actions.attack = true;
                }

                let heal = egui::Button::new(
                    egui::RichText::new("Heal").size(18.0).color(egui::Color32::WHITE),
                )
                .min_size(egui::vec2(120.0, 40.0))
                .fill(style::colors::ARENA_GREEN);
                if ui
                    .add_enabled(data.buttons_enabled, heal)
                    .on_hover_text("Restore health\n\n[H]")
                    .clicked()
                {
                    actions.heal = true;
                }

                let quit = egui::Button::new(egui::RichText::new("Quit").size(18.0))
                    .min_size(egui::vec2(120.0, 40.0));
                if ui
                    .add_enabled(data.buttons_enabled, quit)
                    .on_hover_text("End the run and show statistics")
                    .clicked()
                {
                    actions.quit_run = true;
                }
            });
        });
}
