//! Terminal rendering for room pages.
//!
//! Extension trait adding colored output to eshoku-core types using owo_colors.

use eshoku_core::{ActionState, Affordance, RoomPage};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ActionState {
    fn render(&self) -> String {
        match self {
            ActionState::CanJoin => "can join".green().to_string(),
            ActionState::CanCancel => "can cancel".yellow().to_string(),
            ActionState::CanEdit => "can edit".cyan().to_string(),
            ActionState::Disabled => "sign-in required".dimmed().to_string(),
        }
    }
}

impl Render for Affordance {
    fn render(&self) -> String {
        match self {
            Affordance::Link { label, href } => format!("[{}] -> {}", label.bold(), href),
            Affordance::RoomAction {
                label,
                disabled: true,
                ..
            } => format!("[{}]", label.dimmed()),
            Affordance::RoomAction { label, mode, .. } => {
                format!("[{}] ({:?})", label.bold(), mode)
            }
        }
    }
}

impl Render for RoomPage {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("🍽  {}", self.room.room_name.bold()));
        lines.push(format!(
            "   {}  {}",
            self.schedule,
            format!("({})", self.attendance).dimmed()
        ));

        let hosts: Vec<String> = self
            .room
            .hosts()
            .iter()
            .map(|h| format!("@{}", h.username))
            .collect();
        if !hosts.is_empty() {
            lines.push(format!("   主催者: {}", hosts.join(" ")));
        }

        if !self.room.description.is_empty() {
            lines.push(String::new());
            lines.push(format!("   {}", self.room.description));
        }

        lines.push(String::new());
        lines.push(format!("   {}  {}", self.action.render(), self.affordance.render()));

        if !self.share_text.is_empty() {
            lines.push(format!("   {} {}", "share:".dimmed(), self.share_text));
        }
        lines.push(format!("   {}", self.room_url.dimmed()));

        lines.join("\n")
    }
}
