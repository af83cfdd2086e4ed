//! Presentation capability the battle core talks to.
//!
//! The core only pushes notifications; it never reads anything back.
//! Positions are fractions of the viewport (0-1), so the page decides
//! the actual pixel placement.

use nalgebra::Point2;

use crate::tracking::Side;

/// Normalized viewport position
pub type ScreenPoint = Point2<f32>;

/// Color hint for text, particles and feedback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    Red,
    Purple,
    Cyan,
    Orange,
    Blue,
    Black,
    Gold,
    /// Slap hit sparks
    Blood,
    /// Slap damage numbers
    Crimson,
}

impl Tint {
    pub fn as_css(&self) -> &'static str {
        match self {
            Tint::Red => "red",
            Tint::Purple => "purple",
            Tint::Cyan => "cyan",
            Tint::Orange => "orange",
            Tint::Blue => "blue",
            Tint::Black => "black",
            Tint::Gold => "gold",
            Tint::Blood => "#e74c3c",
            Tint::Crimson => "#ff4757",
        }
    }
}

pub trait Presenter {
    fn update_health(&mut self, player: i32, enemy: i32, enemy_max: i32);
    fn update_combo(&mut self, count: u32);
    fn update_boss_name(&mut self, name: &str);
    fn set_boss_image(&mut self, id: &str);
    fn show_feedback(&mut self, text: &str, tint: Tint);
    fn show_damage_text(&mut self, text: &str, at: ScreenPoint, tint: Tint);
    fn play_slap_sound(&mut self, pitch: f32);
    fn play_whoosh_sound(&mut self);
    fn trigger_flash(&mut self);
    fn trigger_screen_shake(&mut self);
    fn spawn_particles(&mut self, at: ScreenPoint, tint: Tint);
    fn spawn_shockwave(&mut self, at: ScreenPoint);
    fn spawn_typhoon(&mut self);
    fn trigger_ultimate_visuals(&mut self);
    fn play_boss_slap_animation(&mut self, show_hand: bool);
    fn play_boss_dodge_animation(&mut self, side: Side);
    fn show_victory_screen(&mut self);
    fn show_defeat_screen(&mut self);
    /// First face seen while preparing; the fight may be started
    fn camera_ready(&mut self);
}
