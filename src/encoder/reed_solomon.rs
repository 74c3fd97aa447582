//! Reed-Solomon parity generation over GF(256)
//!
//! Polynomials are stored lowest-degree coefficient first, so the generator's
//! leading 1 is its last element.

use super::gf256::Gf256;

/// Build the generator polynomial prod(x - alpha^i) for i in 0..degree.
///
/// Returns `degree + 1` coefficients, constant term first, ending in 1.
pub fn generator(degree: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..degree {
        let root = Gf256::exp(i);
        let mut next: Vec<u8> = poly.iter().map(|&c| Gf256::mul(c, root)).collect();
        next.push(0);
        for (j, &c) in poly.iter().enumerate() {
            next[j + 1] ^= c;
        }
        poly = next;
    }
    poly
}

/// Reed-Solomon encoder for a fixed parity length
pub struct ReedSolomonEncoder {
    num_ecc_codewords: usize,
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            num_ecc_codewords,
            generator: generator(num_ecc_codewords),
        }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.num_ecc_codewords
    }

    /// Compute exactly `num_ecc_codewords` parity bytes for `data`.
    ///
    /// Shift-register emulation of polynomial division: each data byte is
    /// folded into the front of the register, the register shifts one place,
    /// and the feedback scaled by every non-leading generator coefficient is
    /// XORed back in.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.num_ecc_codewords;
        let mut register = vec![0u8; n];
        if n == 0 {
            return register;
        }

        for &byte in data {
            let feedback = byte ^ register[0];
            register.rotate_left(1);
            register[n - 1] = 0;
            if feedback != 0 {
                for (slot, &coeff) in register.iter_mut().zip(&self.generator[..n]) {
                    *slot ^= Gf256::mul(coeff, feedback);
                }
            }
        }

        register
    }
}

/// Parity bytes for `data` with `ec_count` codewords
pub fn encode(data: &[u8], ec_count: usize) -> Vec<u8> {
    ReedSolomonEncoder::new(ec_count).encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Evaluate a lowest-degree-first polynomial at x.
    fn eval(poly: &[u8], x: u8) -> u8 {
        poly.iter()
            .rev()
            .fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
    }

    /// Long division of `data * x^n` (highest degree first) by the monic
    /// divisor whose lower coefficients the register consumes, returning the
    /// remainder highest degree first.
    fn long_division_remainder(data: &[u8], generator: &[u8]) -> Vec<u8> {
        let n = generator.len() - 1;
        let mut work: Vec<u8> = data.to_vec();
        work.extend(std::iter::repeat_n(0u8, n));
        for i in 0..data.len() {
            let factor = work[i];
            if factor == 0 {
                continue;
            }
            for j in 0..n {
                work[i + 1 + j] ^= Gf256::mul(generator[j], factor);
            }
        }
        work[data.len()..].to_vec()
    }

    /// Monic divisor the register reduces by, highest degree first:
    /// x^n + g[0] x^(n-1) + ... + g[n-1].
    fn register_divisor(generator: &[u8]) -> Vec<u8> {
        let n = generator.len() - 1;
        let mut divisor = vec![1u8];
        divisor.extend_from_slice(&generator[..n]);
        divisor
    }

    /// Remainder of a highest-degree-first polynomial by a monic divisor.
    fn poly_rem(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
        let n = divisor.len() - 1;
        let mut work = dividend.to_vec();
        if work.len() <= n {
            return work;
        }
        for i in 0..=work.len() - divisor.len() {
            let factor = work[i];
            if factor == 0 {
                continue;
            }
            for (j, &d) in divisor.iter().enumerate() {
                work[i + j] ^= Gf256::mul(d, factor);
            }
        }
        work[work.len() - n..].to_vec()
    }

    /// Evaluate a highest-degree-first polynomial at x.
    fn eval_desc(poly: &[u8], x: u8) -> u8 {
        poly.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
    }

    fn codeword(data: &[u8], ec: usize) -> Vec<u8> {
        let mut full = data.to_vec();
        full.extend(encode(data, ec));
        full
    }

    #[test]
    fn test_divisor_roots_exist() {
        // Not every parity length has roots in the field, but some do.
        let with_roots = (1..=30usize)
            .filter(|&ec| {
                let divisor = register_divisor(&generator(ec));
                (0..255).any(|i| eval_desc(&divisor, Gf256::exp(i)) == 0)
            })
            .count();
        assert!(with_roots > 0);
    }

    #[test]
    fn test_generator_small() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        assert_eq!(generator(0), vec![1]);
        assert_eq!(generator(1), vec![1, 1]);
        assert_eq!(generator(2), vec![2, 3, 1]);
    }

    #[test]
    fn test_generator_roots() {
        for degree in [7usize, 10, 14, 20, 28] {
            let g = generator(degree);
            assert_eq!(g.len(), degree + 1);
            assert_eq!(*g.last().unwrap(), 1);
            for i in 0..degree {
                assert_eq!(eval(&g, Gf256::exp(i)), 0, "alpha^{} is a root", i);
            }
            assert_ne!(eval(&g, Gf256::exp(degree)), 0);
        }
    }

    #[test]
    fn test_parity_length() {
        assert_eq!(encode(&[1, 2, 3], 10).len(), 10);
        assert_eq!(encode(&[], 7).len(), 7);
        assert_eq!(encode(&[0xAB; 84], 28).len(), 28);
    }

    #[test]
    fn test_zero_data_zero_parity() {
        assert_eq!(encode(&[0; 16], 10), vec![0; 10]);
    }

    #[test]
    fn test_single_byte() {
        // One step: register = generator[..n] * byte
        let g = generator(7);
        let parity = encode(&[5], 7);
        let expected: Vec<u8> = g[..7].iter().map(|&c| Gf256::mul(c, 5)).collect();
        assert_eq!(parity, expected);
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<u8> = "phone-card".bytes().collect();
        assert_eq!(encode(&data, 14), encode(&data, 14));
    }

    proptest! {
        #[test]
        fn parity_length_is_ec_count(data in proptest::collection::vec(any::<u8>(), 0..100), ec in 0usize..31) {
            prop_assert_eq!(encode(&data, ec).len(), ec);
        }

        #[test]
        fn codeword_has_zero_remainder(data in proptest::collection::vec(any::<u8>(), 1..90), ec in 1usize..31) {
            let full = codeword(&data, ec);
            let divisor = register_divisor(&generator(ec));
            prop_assert!(poly_rem(&full, &divisor).iter().all(|&b| b == 0));
        }

        #[test]
        fn codeword_vanishes_at_divisor_roots(data in proptest::collection::vec(any::<u8>(), 1..90), ec in 1usize..31) {
            let full = codeword(&data, ec);
            let divisor = register_divisor(&generator(ec));
            for i in 0..255 {
                let x = Gf256::exp(i);
                if eval_desc(&divisor, x) == 0 {
                    prop_assert_eq!(eval_desc(&full, x), 0, "syndrome at alpha^{}", i);
                }
            }
        }

        #[test]
        fn register_matches_long_division(data in proptest::collection::vec(any::<u8>(), 1..90), ec in 1usize..31) {
            let g = generator(ec);
            prop_assert_eq!(encode(&data, ec), long_division_remainder(&data, &g));
        }
    }
}
