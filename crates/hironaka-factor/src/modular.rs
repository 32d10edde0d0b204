//! Polynomials over a prime field F_p.
//!
//! Residues are `u64` values below `p < 2^32`, so a product of two fits
//! without overflow. A polynomial is its coefficient vector in ascending
//! degree order with no trailing zeros; the zero polynomial is empty.
//!
//! Factoring a monic squarefree polynomial runs distinct-degree
//! factorization followed by Cantor-Zassenhaus equal-degree splitting with
//! a fixed pseudo-random sequence, so results are reproducible.

use hironaka_integers::Integer;

/// Coefficients in ascending degree order, no trailing zeros.
pub(crate) type ModPoly = Vec<u64>;

/// Splitting attempts per polynomial before giving up on it.
const MAX_SPLIT_ATTEMPTS: usize = 64;

/// Arithmetic modulo an odd prime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PrimeField {
    p: u64,
}

impl PrimeField {
    pub(crate) fn new(p: u64) -> Self {
        debug_assert!(p > 2 && p < 1 << 32 && is_prime(p));
        Self { p }
    }

    pub(crate) fn modulus(self) -> u64 {
        self.p
    }

    /// The residue of an integer.
    pub(crate) fn reduce(self, c: &Integer) -> u64 {
        c.rem_euclid(&Integer::from(self.p as i64))
            .to_i64()
            .and_then(|r| u64::try_from(r).ok())
            .unwrap_or(0)
    }

    fn add(self, a: u64, b: u64) -> u64 {
        (a + b) % self.p
    }

    fn sub(self, a: u64, b: u64) -> u64 {
        (a + self.p - b) % self.p
    }

    fn mul(self, a: u64, b: u64) -> u64 {
        a * b % self.p
    }

    fn pow(self, mut base: u64, mut exp: u64) -> u64 {
        let mut result = 1;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }

    /// Inverse of a nonzero residue.
    fn inv(self, a: u64) -> u64 {
        self.pow(a, self.p - 2)
    }

    #[cfg(test)]
    fn poly_add(self, a: &[u64], b: &[u64]) -> ModPoly {
        let len = a.len().max(b.len());
        trim(
            (0..len)
                .map(|i| self.add(coeff(a, i), coeff(b, i)))
                .collect(),
        )
    }

    pub(crate) fn poly_sub(self, a: &[u64], b: &[u64]) -> ModPoly {
        let len = a.len().max(b.len());
        trim(
            (0..len)
                .map(|i| self.sub(coeff(a, i), coeff(b, i)))
                .collect(),
        )
    }

    pub(crate) fn poly_mul(self, a: &[u64], b: &[u64]) -> ModPoly {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let mut result = vec![0; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                result[i + j] = self.add(result[i + j], self.mul(x, y));
            }
        }
        trim(result)
    }

    fn poly_scale(self, a: &[u64], c: u64) -> ModPoly {
        trim(a.iter().map(|&x| self.mul(x, c)).collect())
    }

    /// Quotient and remainder; `b` must be nonzero.
    pub(crate) fn div_rem(self, a: &[u64], b: &[u64]) -> (ModPoly, ModPoly) {
        debug_assert!(!b.is_empty(), "division by zero polynomial");
        if a.len() < b.len() {
            return (Vec::new(), a.to_vec());
        }

        let d = b.len() - 1;
        let lead_inv = self.inv(b[d]);
        let mut rem = a.to_vec();
        let mut quot = vec![0; a.len() - d];

        for i in (0..quot.len()).rev() {
            let c = self.mul(rem[i + d], lead_inv);
            if c == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                rem[i + j] = self.sub(rem[i + j], self.mul(c, y));
            }
            quot[i] = c;
        }

        rem.truncate(d);
        (trim(quot), trim(rem))
    }

    pub(crate) fn rem(self, a: &[u64], b: &[u64]) -> ModPoly {
        self.div_rem(a, b).1
    }

    fn monic(self, a: &[u64]) -> ModPoly {
        match a.last() {
            Some(&lead) => self.poly_scale(a, self.inv(lead)),
            None => Vec::new(),
        }
    }

    /// Monic gcd.
    pub(crate) fn gcd(self, a: &[u64], b: &[u64]) -> ModPoly {
        let (mut a, mut b) = (a.to_vec(), b.to_vec());
        while !b.is_empty() {
            let r = self.rem(&a, &b);
            a = std::mem::replace(&mut b, r);
        }
        self.monic(&a)
    }

    /// `(g, s, t)` with `s * a + t * b = g`, `g` the monic gcd.
    pub(crate) fn xgcd(self, a: &[u64], b: &[u64]) -> (ModPoly, ModPoly, ModPoly) {
        let (mut r0, mut r1) = (a.to_vec(), b.to_vec());
        let (mut s0, mut s1) = (vec![1], Vec::new());
        let (mut t0, mut t1) = (Vec::new(), vec![1]);

        while !r1.is_empty() {
            let (q, r) = self.div_rem(&r0, &r1);
            let s = self.poly_sub(&s0, &self.poly_mul(&q, &s1));
            let t = self.poly_sub(&t0, &self.poly_mul(&q, &t1));
            r0 = std::mem::replace(&mut r1, r);
            s0 = std::mem::replace(&mut s1, s);
            t0 = std::mem::replace(&mut t1, t);
        }

        match r0.last() {
            Some(&lead) => {
                let inv = self.inv(lead);
                (
                    self.poly_scale(&r0, inv),
                    self.poly_scale(&s0, inv),
                    self.poly_scale(&t0, inv),
                )
            }
            None => (r0, s0, t0),
        }
    }

    fn derivative(self, a: &[u64]) -> ModPoly {
        trim(
            a.iter()
                .enumerate()
                .skip(1)
                .map(|(i, &c)| self.mul(c, i as u64 % self.p))
                .collect(),
        )
    }

    /// `base^exp mod modulus`.
    fn pow_mod(self, base: &[u64], mut exp: u64, modulus: &[u64]) -> ModPoly {
        let mut result = self.rem(&[1], modulus);
        let mut base = self.rem(base, modulus);
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.rem(&self.poly_mul(&result, &base), modulus);
            }
            base = self.rem(&self.poly_mul(&base, &base), modulus);
            exp >>= 1;
        }
        result
    }

    pub(crate) fn is_squarefree(self, a: &[u64]) -> bool {
        degree(&self.gcd(a, &self.derivative(a))) == 0
    }

    /// Monic irreducible factors of a monic squarefree polynomial.
    pub(crate) fn factor_squarefree(self, f: &[u64]) -> Vec<ModPoly> {
        let mut seed = 0x853c_49e6_748f_ea9b_u64;
        let mut factors = Vec::new();
        for (d, part) in self.distinct_degree(f) {
            if degree(&part) == d {
                factors.push(part);
            } else {
                factors.extend(self.equal_degree(&part, d, &mut seed));
            }
        }
        factors
    }

    /// Groups the irreducible factors of `f` by degree: each entry is `d`
    /// and the product of all factors of degree `d`.
    fn distinct_degree(self, f: &[u64]) -> Vec<(usize, ModPoly)> {
        let x: ModPoly = vec![0, 1];
        let mut result = Vec::new();
        let mut rest = f.to_vec();
        // x^(p^d) mod rest
        let mut frobenius = x.clone();
        let mut d = 0;

        while degree(&rest) >= 2 * (d + 1) {
            d += 1;
            frobenius = self.pow_mod(&frobenius, self.p, &rest);
            let part = self.gcd(&rest, &self.poly_sub(&frobenius, &x));
            if degree(&part) > 0 {
                rest = self.div_rem(&rest, &part).0;
                frobenius = self.rem(&frobenius, &rest);
                result.push((d, part));
            }
        }

        if degree(&rest) > 0 {
            result.push((degree(&rest), rest));
        }
        result
    }

    /// Splits a product of distinct irreducibles of degree `d`.
    fn equal_degree(self, f: &[u64], d: usize, seed: &mut u64) -> Vec<ModPoly> {
        let n = degree(f);
        if n <= d {
            return vec![f.to_vec()];
        }

        for _ in 0..MAX_SPLIT_ATTEMPTS {
            let r = trim((0..n).map(|_| next_residue(seed, self.p)).collect());
            if degree(&r) == 0 {
                continue;
            }

            // r^((p^d - 1) / 2) = (r * r^p * ... * r^(p^(d-1)))^((p - 1) / 2)
            let mut conjugate = r.clone();
            let mut norm = r;
            for _ in 1..d {
                conjugate = self.pow_mod(&conjugate, self.p, f);
                norm = self.rem(&self.poly_mul(&norm, &conjugate), f);
            }
            let w = self.pow_mod(&norm, (self.p - 1) / 2, f);

            let g = self.gcd(f, &self.poly_sub(&w, &[1]));
            if degree(&g) > 0 && degree(&g) < n {
                let cofactor = self.div_rem(f, &g).0;
                let mut out = self.equal_degree(&g, d, seed);
                out.extend(self.equal_degree(&cofactor, d, seed));
                return out;
            }
        }

        vec![f.to_vec()]
    }
}

/// Degree of a polynomial (0 for zero).
pub(crate) fn degree(a: &[u64]) -> usize {
    a.len().saturating_sub(1)
}

fn coeff(a: &[u64], i: usize) -> u64 {
    a.get(i).copied().unwrap_or(0)
}

pub(crate) fn trim(mut a: ModPoly) -> ModPoly {
    while a.last() == Some(&0) {
        a.pop();
    }
    a
}

fn next_residue(state: &mut u64, p: u64) -> u64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    (*state >> 33) % p
}

/// Trial division, enough for word-sized candidates.
pub(crate) fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: PrimeField = PrimeField { p: 10_007 };

    /// Coefficients given from low to high degree, negatives allowed.
    fn poly(coeffs: &[i64]) -> ModPoly {
        trim(
            coeffs
                .iter()
                .map(|&c| F.reduce(&Integer::new(c)))
                .collect(),
        )
    }

    fn product(factors: &[ModPoly]) -> ModPoly {
        factors.iter().fold(vec![1], |acc, f| F.poly_mul(&acc, f))
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(10_007));
        assert!(is_prime(2));
        assert!(!is_prime(10_001)); // 73 * 137
        assert!(!is_prime(1));
    }

    #[test]
    fn test_reduce_negative() {
        assert_eq!(F.reduce(&Integer::new(-1)), 10_006);
        assert_eq!(F.reduce(&Integer::new(20_015)), 1);
    }

    #[test]
    fn test_div_rem_and_xgcd() {
        let a = poly(&[-1, 0, 1]); // x^2 - 1
        let b = poly(&[1, 1]); // x + 1
        let (q, r) = F.div_rem(&a, &b);
        assert_eq!(q, poly(&[-1, 1]));
        assert!(r.is_empty());

        let c = poly(&[2, 1]);
        let (g, s, t) = F.xgcd(&a, &c);
        assert_eq!(g, vec![1]);
        assert_eq!(F.poly_add(&F.poly_mul(&s, &a), &F.poly_mul(&t, &c)), vec![1]);
    }

    #[test]
    fn test_factor_linear_factors() {
        // (x - 1)(x - 2)(x - 3)
        let f = product(&[poly(&[-1, 1]), poly(&[-2, 1]), poly(&[-3, 1])]);
        let factors = F.factor_squarefree(&f);
        assert_eq!(factors.len(), 3);
        assert!(factors.iter().all(|g| degree(g) == 1));
        assert_eq!(product(&factors), f);
    }

    #[test]
    fn test_factor_mixed_degrees() {
        // 10007 = 3 mod 4, so x^2 + 1 stays irreducible.
        let f = product(&[poly(&[1, 0, 1]), poly(&[-1, 1]), poly(&[-5, 0, 0, 1])]);
        assert!(F.is_squarefree(&f));

        let factors = F.factor_squarefree(&f);
        assert!(factors.iter().all(|g| g.last() == Some(&1)));
        assert!(factors.contains(&poly(&[1, 0, 1])));
        assert_eq!(product(&factors), f);
    }

    #[test]
    fn test_repeated_factor_is_not_squarefree() {
        let f = F.poly_mul(&poly(&[1, 1]), &poly(&[1, 1]));
        assert!(!F.is_squarefree(&f));
    }
}
