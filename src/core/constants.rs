pub const DEFAULT_WIN_POINTS: u32 = 3;
pub const DEFAULT_DRAW_POINTS: u32 = 1;
pub const DEFAULT_LOSS_POINTS: u32 = 0;

// Swiss stops after this many rounds unless every pair has already met.
pub const DEFAULT_SWISS_ROUNDS: u32 = 5;

pub const FIRST_ROUND: u32 = 1;
