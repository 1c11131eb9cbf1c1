/// Outcome recorded for a swiped card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Accepted,
    Rejected,
}

impl Decision {
    pub fn toggled(self) -> Self {
        match self {
            Decision::Accepted => Decision::Rejected,
            Decision::Rejected => Decision::Accepted,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Decision::Accepted
    }
}

/// One row of the post-swipe review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem<Id> {
    pub id: Id,
    pub decision: Decision,
}

/// Final result of a confirmed deck, in deck order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id> {
    pub accepted: Vec<Id>,
    pub rejected: Vec<Id>,
}

impl<Id> Selection<Id> {
    pub fn len(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }
}
