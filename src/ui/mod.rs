//! UI rendering using egui.
//!
//! One draw module per screen element, each split into data extraction
//! (pure, reads the session) and a draw function (egui only). Player
//! intent is collected into [`UiActions`] and handed back to the engine,
//! so nothing in here mutates game state.

pub mod enemy_panel;
pub mod game_over;
pub mod hud;
pub mod icons;
pub mod messages;
pub mod start_screen;
pub mod style;
pub mod upgrade;

pub use icons::SheetIcons;
pub use messages::{MessageFeed, draw_message_feed};

use crate::engine::{GameEngine, GameMode, Phase, Session, StatUpgrade};

use egui_glow::EguiGlow;
use winit::window::Window;

/// Actions the UI wants to perform (returned to game logic)
#[derive(Default)]
pub struct UiActions {
    pub start_game: bool,
    pub show_tutorial: bool,
    pub back_to_menu: bool,
    pub attack: bool,
    pub heal: bool,
    pub quit_run: bool,
    /// Roster index of the enemy card the player clicked
    pub select_enemy: Option<usize>,
    /// Stat chosen in the upgrade prompt
    pub upgrade: Option<StatUpgrade>,
}

/// Lay out the screen for the current mode and collect player intent.
pub fn run_ui(
    egui_glow: &mut EguiGlow,
    window: &Window,
    engine: &GameEngine,
    icons: Option<&SheetIcons>,
) -> UiActions {
    puffin::profile_function!();

    let mut actions = UiActions::default();

    egui_glow.run(window, |ctx| match engine.mode {
        GameMode::MainMenu => start_screen::draw_main_menu(ctx, &mut actions),
        GameMode::Tutorial => start_screen::draw_tutorial(ctx, &mut actions),
        GameMode::Playing => {
            if let Some(session) = engine.session.as_ref() {
                draw_combat_screen(ctx, session, &engine.messages, icons, &mut actions);
            }
        }
        GameMode::GameOver => {
            let stats = engine.last_run.unwrap_or_default();
            game_over::draw_game_over(ctx, &stats, &mut actions);
        }
    });

    actions
}

/// Compose the in-run screen: roster on top, messages in the middle,
/// player panel along the bottom, upgrade prompt when a wave falls.
fn draw_combat_screen(
    ctx: &egui::Context,
    session: &Session,
    messages: &MessageFeed,
    icons: Option<&SheetIcons>,
    actions: &mut UiActions,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(style::colors::PANEL_BG))
        .show(ctx, |_ui| {});

    let cards = enemy_panel::get_roster_data(session);
    enemy_panel::draw_enemy_roster(ctx, &cards, icons, actions);

    draw_message_feed(ctx, messages);

    let panel_data = hud::get_player_panel_data(session);
    hud::draw_player_panel(ctx, &panel_data, icons, actions);

    if session.phase == Phase::AwaitingUpgrade {
        upgrade::draw_upgrade_prompt(ctx, actions);
    }
}
