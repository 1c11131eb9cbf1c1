#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// Review operations need every card to have been swiped.
    NotExhausted { index: usize, count: usize },
    /// The id is not part of this deck. Carries the id's debug rendering.
    UnknownItem { id: String },
    /// The selection was already confirmed; the deck is final.
    AlreadyConfirmed,
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::NotExhausted { index, count } => {
                write!(f, "deck not exhausted: at card {index} of {count}")
            }
            DeckError::UnknownItem { id } => write!(f, "item {id} is not in this deck"),
            DeckError::AlreadyConfirmed => write!(f, "deck selection already confirmed"),
        }
    }
}

impl std::error::Error for DeckError {}
