//! GF(256) arithmetic over the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D)
//!
//! The exponent table holds 512 entries, the second half repeating the first
//! 255 values, so the sum of two logarithms indexes it without reduction.

use std::sync::OnceLock;

const PRIMITIVE: u16 = 0x11D;

struct Tables {
    exp: [u8; 512],
    log: [u8; 256],
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn build_tables() -> Tables {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];

    let mut x: u16 = 1;
    for i in 0..255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
    }
    for i in 255..512 {
        exp[i] = exp[i - 255];
    }

    Tables { exp, log }
}

fn tables() -> &'static Tables {
    TABLES.get_or_init(build_tables)
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = tables();
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// alpha^i; the multiplicative group has order 255
    pub fn exp(i: usize) -> u8 {
        tables().exp[i % 255]
    }

    /// Discrete logarithm of a nonzero element; `None` for 0
    pub fn log(a: u8) -> Option<u8> {
        if a == 0 {
            None
        } else {
            Some(tables().log[a as usize])
        }
    }

    pub fn pow(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = tables().log[a as usize] as usize;
        tables().exp[(log_a * (n % 255)) % 255]
    }
}
