//! Background music control.

/// Which loop is playing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicMode {
    Prep,
    Battle,
}

impl MusicMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicMode::Prep => "PREP",
            MusicMode::Battle => "BATTLE",
        }
    }
}

pub trait MusicPlayer {
    fn start(&mut self, mode: MusicMode);
    fn stop(&mut self);
}
