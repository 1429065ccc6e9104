//! Single rolls

use rand::Rng;

use crate::core::error::Result;
use crate::dice::pool::DicePool;
use crate::resolution::result::RollResult;

/// Roll every die in the pool once and resolve the faces
///
/// Dice are rolled in canonical order, one independent draw per die.
pub fn roll<R: Rng + ?Sized>(pool: &DicePool, rng: &mut R) -> Result<RollResult> {
    let mut result = RollResult::new();

    for kind in pool.dice() {
        result.add_rolled(kind, kind.roll(rng))?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::die::DieKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seeded_rolls_repeat() {
        let pool = DicePool::parse("PPAACDS%").unwrap();

        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(roll(&pool, &mut a).unwrap(), roll(&pool, &mut b).unwrap());
        }
    }

    #[test]
    fn test_details_cover_every_die() {
        let pool = DicePool::parse("PAAD%").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = roll(&pool, &mut rng).unwrap();

        let rolled: usize = result.details().iter().map(|(_, faces)| faces.len()).sum();
        assert_eq!(rolled, 5);
        assert_eq!(result.details()[0].0, DieKind::Proficiency);
        assert_eq!(result.percentile().len(), 1);
    }

    #[test]
    fn test_positive_pool_never_fails() {
        let pool = DicePool::parse("PAB").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let result = roll(&pool, &mut rng).unwrap();
            assert_ne!(result.success(), Some(false));
        }
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = roll(&DicePool::new(), &mut rng).unwrap();
        assert_eq!(result, RollResult::new());
    }
}
