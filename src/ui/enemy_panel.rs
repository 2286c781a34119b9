//! Enemy roster UI component.
//!
//! Draws one card per living enemy across the top of the screen.
//! Clicking a card selects that enemy as the attack target.

use super::icons::SheetIcons;
use super::style;
use super::UiActions;
use crate::constants::*;
use crate::engine::Session;

/// Data needed to render one enemy card
pub struct EnemyCardData {
    pub health: i32,
    pub damage: i32,
    pub selected: bool,
}

/// Extract roster data from the session
pub fn get_roster_data(session: &Session) -> Vec<EnemyCardData> {
    session
        .enemies
        .iter()
        .enumerate()
        .map(|(i, enemy)| EnemyCardData {
            health: enemy.stats.current_health,
            damage: enemy.stats.damage,
            selected: i == session.selected_enemy,
        })
        .collect()
}

/// Render the enemy roster across the top of the screen
pub fn draw_enemy_roster(
    ctx: &egui::Context,
    cards: &[EnemyCardData],
    icons: Option<&SheetIcons>,
    actions: &mut UiActions,
) {
    if cards.is_empty() {
        return;
    }

    let viewport = ctx.screen_rect();

    egui::Window::new("roster")
        .fixed_pos([10.0, 20.0])
        .fixed_size([viewport.width() - 36.0, ENEMY_CARD_HEIGHT + 10.0])
        .title_bar(false)
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Center the row of cards
                let count = cards.len() as f32;
                let total_width = count * ENEMY_CARD_WIDTH + (count - 1.0) * 12.0;
                ui.add_space((ui.available_width() - total_width).max(0.0) / 2.0);

                for (i, card) in cards.iter().enumerate() {
                    let (response, painter) = ui.allocate_painter(
                        egui::vec2(ENEMY_CARD_WIDTH, ENEMY_CARD_HEIGHT),
                        egui::Sense::click(),
                    );

                    // Background
                    let bg_color = if card.selected {
                        style::colors::SELECTED.gamma_multiply(0.4)
                    } else if response.hovered() {
                        style::colors::HOVERED
                    } else {
                        style::colors::PANEL_BG
                    };
                    painter.rect_filled(response.rect, 0.0, bg_color);

                    // Border
                    let border_color = if card.selected {
                        style::colors::ARENA_GOLD
                    } else {
                        style::colors::PANEL_BORDER
                    };
                    painter.rect_stroke(
                        response.rect,
                        0.0,
                        egui::Stroke::new(2.0, border_color),
                    );

                    // Name and stat lines
                    let top = response.rect.min;
                    painter.text(
                        egui::pos2(response.rect.center().x, top.y + 16.0),
                        egui::Align2::CENTER_CENTER,
                        format!("Name: Enemy {}", i + 1),
                        egui::FontId::proportional(14.0),
                        style::colors::TEXT_PRIMARY,
                    );
                    painter.text(
                        egui::pos2(response.rect.center().x, top.y + 38.0),
                        egui::Align2::CENTER_CENTER,
                        format!("Health: {}", card.health),
                        egui::FontId::proportional(13.0),
                        style::colors::TEXT_PRIMARY,
                    );
                    painter.text(
                        egui::pos2(response.rect.center().x, top.y + 56.0),
                        egui::Align2::CENTER_CENTER,
                        format!("Damage: {}", card.damage),
                        egui::FontId::proportional(13.0),
                        style::colors::TEXT_PRIMARY,
                    );

                    // Portrait
                    if let Some(icons) = icons {
                        let portrait_rect = egui::Rect::from_center_size(
                            egui::pos2(response.rect.center().x, top.y + 116.0),
                            egui::vec2(ENEMY_PORTRAIT_SIZE, ENEMY_PORTRAIT_SIZE),
                        );
                        painter.image(
                            icons.texture_id,
                            portrait_rect,
                            icons.enemy_uv,
                            egui::Color32::WHITE,
                        );
                    }

                    if response.clicked() {
                        actions.select_enemy = Some(i);
                    }

                    ui.add_space(12.0);
                }
            });
        });
}
