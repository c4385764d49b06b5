//! Java-compatible linear congruential pseudo-random number generator.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{UNIX_EPOCH, SystemTime};
use std::num::Wrapping;

use glam::Vec3;


const MULTIPLIER: Wrapping<i64> = Wrapping(0x5DEECE66D);
const ADDEND: Wrapping<i64> = Wrapping(0xB);
const MASK: Wrapping<i64> = Wrapping((1 << 48) - 1);

const FLOAT_DIV: f32 = (1u32 << 24) as f32;
const DOUBLE_DIV: f64 = (1u64 << 53) as f64;


#[inline]
fn initial_scramble(seed: i64) -> Wrapping<i64> {
    (Wrapping(seed) ^ MULTIPLIER) & MASK
}

/// Generate a new seed from a global seed uniquifier and the system clock.
fn gen_seed() -> i64 {
    static UNIQUIFIER: AtomicI64 = AtomicI64::new(8682522807148012);
    let mut current = UNIQUIFIER.load(Ordering::Relaxed);
    loop {
        let next = current.wrapping_mul(181783497276652981);
        match UNIQUIFIER.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => {
                return match SystemTime::now().duration_since(UNIX_EPOCH) {
                    Ok(d) => next ^ (d.as_nanos() as i64),
                    Err(_) => next
                };
            }
            Err(old) => current = old
        }
    }
}


/// The world random number generator, every random draw made by block entities goes
/// through this type so that seeded worlds are reproducible.
#[derive(Debug, Clone)]
pub struct JavaRandom {
    seed: Wrapping<i64>
}

impl Default for JavaRandom {
    fn default() -> Self {
        Self::new_seeded()
    }
}

impl JavaRandom {

    #[inline]
    pub fn new(seed: i64) -> JavaRandom {
        JavaRandom { seed: initial_scramble(seed) }
    }

    #[inline]
    pub fn new_seeded() -> JavaRandom {
        Self::new(gen_seed())
    }

    #[inline]
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = initial_scramble(seed);
    }

    #[inline]
    fn next(&mut self, bits: u8) -> i32 {
        self.seed = (self.seed * MULTIPLIER + ADDEND) & MASK;
        (self.seed.0 as u64 >> (48 - bits)) as i32
    }

    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Get the next integer in range `0..bound`, the bound must be strictly positive.
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {

        debug_assert!(bound > 0, "bound must be positive");

        if (bound & -bound) == bound {
            return (((bound as i64).wrapping_mul(self.next(31) as i64)) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let val = bits.rem_euclid(bound);
            if bits - val + (bound - 1) >= 0 {
                break val;
            }
        }

    }

    /// Get the next pseudo-random single-precision float in `0.0..1.0`.
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 / FLOAT_DIV
    }

    /// Get the next pseudo-random double-precision float in `0.0..1.0`.
    pub fn next_double(&mut self) -> f64 {
        let high = (self.next(26) as i64) << 27;
        let low = self.next(27) as i64;
        (high.wrapping_add(low) as f64) / DOUBLE_DIV
    }

    /// Get the next pseudo-random single-precision float vector, x, y and z.
    pub fn next_float_vec(&mut self) -> Vec3 {
        Vec3 {
            x: self.next_float(),
            y: self.next_float(),
            z: self.next_float(),
        }
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn java_sequence() {
        // Reference values from `new java.util.Random(0)`.
        let mut rand = JavaRandom::new(0);
        assert_eq!(rand.next_int(), -1155484576);
        assert_eq!(rand.next_int(), -723955400);
    }

    #[test]
    fn unit_ranges() {
        let mut rand = JavaRandom::new(42);
        for _ in 0..1000 {
            let d = rand.next_double();
            assert!((0.0..1.0).contains(&d));
            let f = rand.next_float();
            assert!((0.0..1.0).contains(&f));
            let i = rand.next_int_bounded(7);
            assert!((0..7).contains(&i));
        }
    }

}
