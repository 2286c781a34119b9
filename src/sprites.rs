//! Sprite sheet loading.
//!
//! The sheet is a grid of fixed-size cells described by a JSON file
//! sitting next to the PNG. Cells are looked up by name and handed to
//! egui as UV rects on the registered texture.

use glow::HasContext;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Raw descriptor format
#[derive(Deserialize)]
struct SheetFile {
    image: String,
    tile_size: u32,
    columns: u32,
    /// Map from sprite name to cell index
    sprites: HashMap<String, u32>,
}

pub struct SpriteSheet {
    pub texture: glow::Texture,
    pub tile_size: u32,
    pub columns: u32,
    image_width: u32,
    image_height: u32,
    name_to_id: HashMap<String, u32>,
}

impl SpriteSheet {
    /// Load a sprite sheet from a JSON descriptor and its associated PNG
    pub fn load(gl: Arc<glow::Context>, descriptor_path: &Path) -> Result<Self, String> {
        let json_str = std::fs::read_to_string(descriptor_path)
            .map_err(|e| format!("Failed to read {}: {}", descriptor_path.display(), e))?;
        let sheet: SheetFile = serde_json::from_str(&json_str)
            .map_err(|e| format!("Failed to parse {}: {}", descriptor_path.display(), e))?;

        // Load the PNG (relative to the descriptor)
        let png_path = descriptor_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(&sheet.image);
        let mut img = image::open(&png_path)
            .map_err(|e| format!("Failed to load {}: {}", png_path.display(), e))?
            .into_rgba8();

        // Convert to premultiplied alpha (required by egui)
        for pixel in img.pixels_mut() {
            let a = pixel[3] as f32 / 255.0;
            pixel[0] = (pixel[0] as f32 * a) as u8;
            pixel[1] = (pixel[1] as f32 * a) as u8;
            pixel[2] = (pixel[2] as f32 * a) as u8;
        }

        let (width, height) = img.dimensions();

        // Create OpenGL texture
        let texture = unsafe {
            let tex = gl
                .create_texture()
                .map_err(|e| format!("Failed to create texture: {}", e))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(tex));

            // Use NEAREST for crisp pixel art
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(img.as_raw()),
            );

            gl.bind_texture(glow::TEXTURE_2D, None);
            tex
        };

        Ok(Self {
            texture,
            tile_size: sheet.tile_size,
            columns: sheet.columns,
            image_width: width,
            image_height: height,
            name_to_id: sheet.sprites,
        })
    }

    /// Get the cell index for a sprite by name
    pub fn sprite_id(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    /// Get UV rect for egui (egui uses top-left origin like PNG)
    pub fn get_egui_uv(&self, sprite_id: u32) -> egui::Rect {
        let col = sprite_id % self.columns;
        let row = sprite_id / self.columns;

        let u0 = (col * self.tile_size) as f32 / self.image_width as f32;
        let u1 = ((col + 1) * self.tile_size) as f32 / self.image_width as f32;
        let v0 = (row * self.tile_size) as f32 / self.image_height as f32;
        let v1 = ((row + 1) * self.tile_size) as f32 / self.image_height as f32;

        egui::Rect::from_min_max(egui::pos2(u0, v0), egui::pos2(u1, v1))
    }
}
