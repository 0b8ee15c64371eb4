//! Family-name allocation for AI characters.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a family name from the pool that no existing character carries.
///
/// The pool is scanned in shuffled order and the first unused name wins.
/// When every pool name is already taken, the last name in the shuffled
/// order is returned anyway: a duplicate name beats blocking the game flow.
/// An empty pool yields an empty name.
pub fn free_family_name(pool: &[String], taken: &[String], rng: &mut impl Rng) -> String {
    let mut order: Vec<&String> = pool.iter().collect();
    order.shuffle(rng);

    for name in &order {
        if !taken.iter().any(|t| t == *name) {
            return (*name).clone();
        }
    }

    // Every name is in use; hand out a duplicate.
    order.last().map(|n| (*n).clone()).unwrap_or_default()
}
