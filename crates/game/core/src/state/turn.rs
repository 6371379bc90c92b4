/// Turn bookkeeping.
///
/// One turn is one player action followed by one pass over every living
/// non-player actor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Number of completed turns.
    pub number: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
