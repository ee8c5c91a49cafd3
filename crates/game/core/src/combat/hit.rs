//! Attack roll checks.

/// Sides on the attack die.
pub const ATTACK_DIE_SIDES: u32 = 20;

/// A natural roll of this value is a critical hit.
pub const CRITICAL_ROLL: u32 = 20;

pub fn is_critical(die: u32) -> bool {
    die >= CRITICAL_ROLL
}

/// A non-critical attack lands when the roll plus penetration meets defense.
pub fn check_hit(die: u32, pen: i32, defense: i32) -> bool {
    die as i32 + pen >= defense
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_hit() {
        assert!(check_hit(5, 1, 6));
        assert!(!check_hit(4, 1, 6));
    }

    #[test]
    fn only_twenty_is_critical() {
        assert!(is_critical(20));
        assert!(!is_critical(19));
    }
}
