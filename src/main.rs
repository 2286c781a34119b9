#![allow(dead_code)]

mod actors;
mod app;
mod constants;
mod engine;
mod events;
mod spawning;
mod sprites;
mod timeline;
mod ui;

use std::sync::Arc;
use std::time::Instant;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use constants::*;
use engine::GameEngine;
use sprites::SpriteSheet;
use ui::SheetIcons;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Sprite icons - None when the sheet is missing, panels fall back to text
    icons: Option<SheetIcons>,

    // Game state
    engine: GameEngine,

    // Keys pressed since the last frame
    pending_keys: Vec<KeyCode>,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        // Create window and GL context
        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            mut egui_glow,
        } = app::create_window(event_loop);

        // Load the sprite sheet and register it with egui
        let icons = match SpriteSheet::load(gl.clone(), std::path::Path::new("assets/sprites.json"))
        {
            Ok(sheet) => {
                let sheet_egui_id = egui_glow.painter.register_native_texture(sheet.texture);
                match SheetIcons::new(&sheet, sheet_egui_id) {
                    Ok(icons) => Some(icons),
                    Err(err) => {
                        eprintln!("Sprite sheet incomplete: {}", err);
                        None
                    }
                }
            }
            Err(err) => {
                eprintln!("Failed to load sprite sheet: {}", err);
                None
            }
        };

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            icons,
            engine: GameEngine::new(),
            pending_keys: Vec::new(),
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed && !event.repeat;
                if !egui_consumed.consumed && pressed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        if key == KeyCode::Escape {
                            event_loop.exit();
                        }
                        state.pending_keys.push(key);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt so a stalled frame cannot collapse several combat beats
        let dt = raw_dt.min(MAX_FRAME_DT);

        self.engine.tick(dt);

        // Run UI and fold in keyboard shortcuts
        let mut actions = ui::run_ui(
            &mut self.egui_glow,
            &self.window,
            &self.engine,
            self.icons.as_ref(),
        );
        apply_hotkeys(&mut actions, self.pending_keys.drain(..));

        let mut rng = rand::thread_rng();
        self.engine.process_ui_actions(&actions, &mut rng);

        // Render
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.08, 0.09, 0.11, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.egui_glow.paint(&self.window);

        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }
}

/// Map pressed keys onto UI actions. The engine ignores whatever does
/// not apply to the current phase, so no gating happens here.
fn apply_hotkeys(actions: &mut ui::UiActions, keys: impl Iterator<Item = KeyCode>) {
    for key in keys {
        match key {
            KeyCode::KeyA => actions.attack = true,
            KeyCode::KeyH => actions.heal = true,
            KeyCode::Digit1 => actions.select_enemy = Some(0),
            KeyCode::Digit2 => actions.select_enemy = Some(1),
            KeyCode::Digit3 => actions.select_enemy = Some(2),
            KeyCode::Digit4 => actions.select_enemy = Some(3),
            KeyCode::Digit5 => actions.select_enemy = Some(4),
            KeyCode::Digit6 => actions.select_enemy = Some(5),
            KeyCode::Digit7 => actions.select_enemy = Some(6),
            KeyCode::Digit8 => actions.select_enemy = Some(7),
            KeyCode::Digit9 => actions.select_enemy = Some(8),
            _ => {}
        }
    }
}
