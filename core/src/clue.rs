use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// How far a clue has been revealed. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Text for the current state, `None` while hidden.
    pub fn showing(&self) -> Option<&str> {
        match self.state {
            RevealState::Hidden => None,
            RevealState::Question => Some(&self.question),
            RevealState::Answer => Some(&self.answer),
        }
    }

    /// Moves one step along `Hidden -> Question -> Answer`, returns the new state if it changed.
    pub(crate) fn advance(&mut self) -> Option<RevealState> {
        let next = self.state.next()?;
        self.state = next;
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn clue_mut(&mut self, row: usize) -> Option<&mut Clue> {
        self.clues.get_mut(row)
    }
}
