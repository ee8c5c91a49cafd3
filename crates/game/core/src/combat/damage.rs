//! Damage calculation.

/// Critical hits multiply the rolled damage.
pub const CRITICAL_MULTIPLIER: u32 = 2;

/// Base power plus the rolled weapon bonus. Negative power deals nothing.
pub fn calculate_damage(power: i32, weapon_bonus: u32) -> u32 {
    (power + weapon_bonus as i32).max(0) as u32
}

pub fn critical_damage(damage: u32) -> u32 {
    damage.saturating_mul(CRITICAL_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_bonus_adds_to_power() {
        assert_eq!(calculate_damage(2, 3), 5);
        assert_eq!(calculate_damage(-4, 1), 0);
        assert_eq!(critical_damage(5), 10);
    }
}
