use crate::*;
pub use random::*;

mod random;

/// Source of fresh boards. Implementations own their randomness, so a fixed
/// seed yields a reproducible mine layout.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
