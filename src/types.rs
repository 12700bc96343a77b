use std::collections::HashMap;

pub type PlayerId = uuid::Uuid;
// Match ids are handed out sequentially by the schedule, starting at 1.
pub type MatchId = u64;
pub type Round = u32;

pub type AppResult<T> = Result<T, anyhow::Error>;

/// Unordered pair of players, stored with the smaller id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(PlayerId, PlayerId);

impl PairKey {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn players(&self) -> (PlayerId, PlayerId) {
        (self.0, self.1)
    }
}

pub type PairCountMap = HashMap<PairKey, u32>;
