//! UI icon texture handles.
//!
//! Pre-computed UV coordinates for the sprites drawn in panels.

use crate::sprites::SpriteSheet;

/// Helper struct containing pre-computed UV coordinates for UI icons
pub struct SheetIcons {
    pub texture_id: egui::TextureId,
    pub enemy_uv: egui::Rect,
    pub heart_uv: egui::Rect,
    pub sword_uv: egui::Rect,
    pub potion_uv: egui::Rect,
}

impl SheetIcons {
    pub fn new(sheet: &SpriteSheet, sheet_egui_id: egui::TextureId) -> Result<Self, String> {
        let uv = |name: &str| {
            sheet
                .sprite_id(name)
                .map(|id| sheet.get_egui_uv(id))
                .ok_or_else(|| format!("Sprite sheet has no \"{}\" entry", name))
        };

        Ok(Self {
            texture_id: sheet_egui_id,
            enemy_uv: uv("enemy")?,
            heart_uv: uv("heart")?,
            sword_uv: uv("sword")?,
            potion_uv: uv("potion")?,
        })
    }
}
