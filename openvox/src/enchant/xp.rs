//! Experience and liquid experience conversions, following the vanilla level curve.


/// Liquid units for a single experience point.
pub const LIQUID_PER_XP: u32 = 20;
/// Maximum number of levels stored in the table's tank.
pub const MAX_STORED_LEVELS: u32 = 30;


/// Experience points held by the given amount of liquid, rounded down.
#[inline]
pub fn liquid_to_xp(liquid: u32) -> u32 {
    liquid / LIQUID_PER_XP
}

/// Liquid units needed to hold the given experience points.
#[inline]
pub fn xp_to_liquid(xp: u32) -> u32 {
    xp.saturating_mul(LIQUID_PER_XP)
}

/// Experience points needed to go from the given level to the next one.
pub fn xp_bar_capacity(level: u32) -> u32 {
    if level >= 30 {
        112 + (level - 30) * 9
    } else if level >= 15 {
        37 + (level - 15) * 5
    } else {
        7 + level * 2
    }
}

/// Total experience points needed to reach the given level from zero.
pub fn get_experience_for_level(level: u32) -> u32 {
    let level = level as u64;
    let xp = if level < 17 {
        level * level + 6 * level
    } else if level < 32 {
        (5 * level * level + 720 - 81 * level) / 2
    } else {
        (9 * level * level + 4440 - 325 * level) / 2
    };
    xp.min(u32::MAX as u64) as u32
}

/// Level reached with the given total experience points.
pub fn get_level_for_experience(mut xp: u32) -> u32 {
    let mut level = 0;
    loop {
        let capacity = xp_bar_capacity(level);
        if xp < capacity {
            return level;
        }
        xp -= capacity;
        level += 1;
    }
}

/// Capacity of the table's tank, in liquid units.
pub fn tank_capacity() -> u32 {
    xp_to_liquid(get_experience_for_level(MAX_STORED_LEVELS))
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn curve_consistency() {
        for level in 0..60 {
            let xp = get_experience_for_level(level);
            assert_eq!(get_level_for_experience(xp), level, "level {level}");
            assert_eq!(get_experience_for_level(level + 1) - xp, xp_bar_capacity(level), "level {level}");
            if xp > 0 {
                assert_eq!(get_level_for_experience(xp - 1), level - 1);
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(get_experience_for_level(1), 7);
        assert_eq!(get_experience_for_level(16), 352);
        assert_eq!(get_experience_for_level(30), 1395);
        assert_eq!(tank_capacity(), 27900);
        assert_eq!(liquid_to_xp(39), 1);
    }

    #[test]
    fn high_levels() {
        assert_eq!(get_experience_for_level(31), 1507);
        assert_eq!(get_experience_for_level(32), 1628);
        assert_eq!(get_experience_for_level(36), 2202);
        assert_eq!(get_level_for_experience(1628), 32);
    }

}
