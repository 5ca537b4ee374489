//! GF(2^8) arithmetic with primitive polynomial 0x11D.
//!
//! The log/antilog tables are built once and treated as read-only process
//! state thereafter (spec's "global mutable tables" design note: here
//! re-expressed as a lazily-initialized, immutable static).

use crate::constants::GF_PRIM_POLY;
use once_cell::sync::Lazy;

/// Process-wide GF(2^8) table, built once on first access.
pub static GF: Lazy<GfTable> = Lazy::new(GfTable::new);

/// Log/antilog tables for GF(2^8) multiplication without modular reduction.
#[derive(Debug, Clone)]
pub struct GfTable {
    exp: [u8; 512],
    log: [u8; 256],
}

impl GfTable {
    /// Builds the exp/log tables by walking the multiplicative group
    /// generated by `x = 2` under the primitive polynomial 0x11D.
    pub fn new() -> Self {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];

        let mut x: u32 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= GF_PRIM_POLY as u32;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        // log[0] is a sentinel; callers must short-circuit on a zero operand
        // before consulting it.
        log[0] = 0;

        GfTable { exp, log }
    }

    /// `exp[i mod 255]`, normalised into `[0, 255)` for any `i`.
    pub fn exp_at(&self, i: i32) -> u8 {
        let idx = ((i % 255) + 255) % 255;
        self.exp[idx as usize]
    }

    /// `a * b` in GF(2^8); 0 if either operand is 0.
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[sum]
    }

    /// `a / b` in GF(2^8). Caller's responsibility that `b != 0`.
    pub fn div(&self, a: u8, b: u8) -> u8 {
        if a == 0 {
            return 0;
        }
        let la = self.log[a as usize] as i32;
        let lb = self.log[b as usize] as i32;
        self.exp_at(la - lb)
    }

    /// `base^e` in GF(2^8); 0 if `base == 0`.
    pub fn pow(&self, base: u8, e: i32) -> u8 {
        if base == 0 {
            return 0;
        }
        let l = self.log[base as usize] as i64 * e as i64;
        self.exp_at((l.rem_euclid(255)) as i32)
    }
}

impl Default for GfTable {
    fn default() -> Self {
        Self::new()
    }
}
