//! Player-facing message output.
//!
//! Actions report what happened as short sentences tagged with a colour hint.
//! The engine writes them into a [`MessageSink`] owned by the caller.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ColorHint {
    Neutral,
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
    HealthRecovered,
    StatusApplied,
    StatusEnded,
    Descend,
    Portal,
    Impossible,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: ColorHint,
}

impl Message {
    pub fn new(text: impl Into<String>, color: ColorHint) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub trait MessageSink {
    fn emit(&mut self, text: String, color: ColorHint);
}

impl MessageSink for Vec<Message> {
    fn emit(&mut self, text: String, color: ColorHint) {
        self.push(Message { text, color });
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn emit(&mut self, _text: String, _color: ColorHint) {}
}
