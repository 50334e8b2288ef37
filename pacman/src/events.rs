use strum_macros::{EnumIter, IntoStaticStr};

/// Something that happened during a frame.
///
/// The update functions return these instead of reaching into shared state;
/// the session forwards them to audio, rendering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    FruitEaten,
    PowerPelletEaten,
    /// Every ghost turned frightened.
    GhostsFrightened,
    /// The frightened window ran out.
    GhostsCalmed,
    SuperPelletEaten,
    SuperModeEnded,
    KeyCollected,
    WallUnlocked(usize),
    StarShown,
    StarCollected { bonus: u32 },
    /// Index of the ghost that was eaten.
    GhostEaten(usize),
    LifeLost { remaining: u8 },
    GameWon,
    GameOver,
}

impl GameEvent {
    /// The audio cue for this event, if it has one.
    pub fn sound(&self) -> Option<Sound> {
        match self {
            GameEvent::FruitEaten
            | GameEvent::PowerPelletEaten
            | GameEvent::SuperPelletEaten
            | GameEvent::StarCollected { .. } => Some(Sound::Pellet),
            GameEvent::KeyCollected => Some(Sound::Key),
            GameEvent::GhostEaten(_) => Some(Sound::GhostEaten),
            GameEvent::LifeLost { .. } => Some(Sound::LifeLost),
            GameEvent::GameWon => Some(Sound::Win),
            GameEvent::GameOver => Some(Sound::Lose),
            GameEvent::GhostsFrightened
            | GameEvent::GhostsCalmed
            | GameEvent::SuperModeEnded
            | GameEvent::WallUnlocked(_)
            | GameEvent::StarShown => None,
        }
    }
}

/// Audio cues. The static string is the name the audio backend plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Sound {
    Pellet,
    Key,
    GhostEaten,
    LifeLost,
    Win,
    Lose,
}

impl Sound {
    pub fn name(self) -> &'static str {
        self.into()
    }
}
