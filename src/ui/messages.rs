//! Transient combat messages.
//!
//! Every combat beat pushes a line ("You dealt 3 damage to the enemy!")
//! that lives on screen for a fixed time and then drops out. Separate
//! from game state - the feed is presentation only.

use super::style;

/// How long a message spends fading out at the end of its life
const MESSAGE_FADE_TIME: f32 = 0.4;

/// A single on-screen message
pub struct Message {
    pub text: String,
    /// Time remaining
    pub timer: f32,
}

impl Message {
    pub fn new(text: String, duration: f32) -> Self {
        Self {
            text,
            timer: duration,
        }
    }

    /// Opacity for the fade-out at the end of the lifetime
    pub fn alpha(&self) -> f32 {
        (self.timer / MESSAGE_FADE_TIME).clamp(0.0, 1.0)
    }

    /// Update the message, returns true if still alive
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        self.timer > 0.0
    }
}

/// All currently visible messages, oldest first
#[derive(Default)]
pub struct MessageFeed {
    pub messages: Vec<Message>,
}

impl MessageFeed {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Add a message with a lifetime in seconds
    pub fn push(&mut self, text: String, duration: f32) {
        self.messages.push(Message::new(text, duration));
    }

    /// Age all messages, removing expired ones
    pub fn update(&mut self, dt: f32) {
        self.messages.retain_mut(|message| message.update(dt));
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Render the message feed between the roster and the player panel
pub fn draw_message_feed(ctx: &egui::Context, feed: &MessageFeed) {
    if feed.is_empty() {
        return;
    }

    let center_x = ctx.screen_rect().center().x;
    egui::Window::new("messages")
        .fixed_pos([center_x - 180.0, 250.0])
        .fixed_size([360.0, 90.0])
        .title_bar(false)
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            for message in &feed.messages {
                let color = style::colors::TEXT_PRIMARY.gamma_multiply(message.alpha());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&message.text).size(16.0).color(color));
                });
            }
        });
}
