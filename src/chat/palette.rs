//! Message color palette

use rand::seq::SliceRandom;
use rand::Rng;

/// Colors assigned to new users
pub const PALETTE: [&str; 8] = [
    "#3B82F6", // blue
    "#10B981", // green
    "#F59E0B", // yellow
    "#EF4444", // red
    "#8B5CF6", // purple
    "#EC4899", // pink
    "#06B6D4", // cyan
    "#F97316", // orange
];

/// Bubble color for users without one
pub const DEFAULT_MESSAGE_COLOR: &str = PALETTE[0];

/// Pick a palette color uniformly at random
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PALETTE.choose(rng).copied().unwrap_or(DEFAULT_MESSAGE_COLOR)
}
