//! Factorization of univariate polynomials over Q.
//!
//! Zassenhaus' method. The polynomial is made primitive over Z and then
//! monic by the substitution `x -> x / lc`. It is factored modulo a prime
//! that keeps it squarefree, and the modular factors are Hensel lifted to
//! a power `p^k` exceeding twice the coefficient bound of any true factor.
//! True factors are then found as products of lifted factors that divide
//! over Z, trying subsets in order of size.

use hironaka_integers::{Integer, Rational};
use hironaka_poly::DensePoly;
use hironaka_rings::{Ring, Q, Z};

use crate::modular::{is_prime, trim, ModPoly, PrimeField};

const FIRST_PRIME: u64 = 10_007;
const MAX_PRIMES: usize = 64;

/// Irreducible factors of a squarefree polynomial over Q.
///
/// Every factor has coprime integer coefficients and a positive leading
/// coefficient, and their product is `f` up to a constant. A constant
/// input has no factors.
#[must_use]
pub(crate) fn factor_squarefree(f: &DensePoly<Q>) -> Vec<DensePoly<Q>> {
    if f.degree() == 0 {
        return vec![];
    }

    let primitive = primitive_integer(f);
    let n = primitive.degree();
    if n == 1 {
        return vec![to_rational(&primitive)];
    }

    // F(x) = lc^(n-1) f(x / lc) is monic with integer coefficients.
    let lead = primitive.leading_coeff().0.clone();
    let monic = DensePoly::new(
        primitive
            .coeffs()
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == n {
                    Z::one()
                } else {
                    Z(c.0.clone() * lead.pow(exponent(n - 1 - i)))
                }
            })
            .collect(),
    );

    factor_monic(&monic)
        .into_iter()
        .map(|g| {
            let scaled = DensePoly::new(
                g.coeffs()
                    .iter()
                    .enumerate()
                    .map(|(j, c)| Z(c.0.clone() * lead.pow(exponent(j))))
                    .collect(),
            );
            to_rational(&primitive_part(&scaled))
        })
        .collect()
}

fn factor_monic(f: &DensePoly<Z>) -> Vec<DensePoly<Z>> {
    if f.degree() <= 1 {
        return vec![f.clone()];
    }
    let Some((field, image)) = choose_prime(f) else {
        return vec![f.clone()];
    };

    let modular = field.factor_squarefree(&image);
    if modular.len() == 1 {
        return vec![f.clone()];
    }

    let bound = coefficient_bound(f);
    let p = prime(field);
    let mut modulus = p.clone();
    let mut k = 1;
    while modulus <= bound.clone() + bound.clone() {
        modulus = modulus * p.clone();
        k += 1;
    }

    let lifted = hensel_lift(f, &modular, field, k, &modulus);
    recombine(f, lifted, &modulus)
}

/// The first prime from [`FIRST_PRIME`] on that keeps `f` squarefree.
fn choose_prime(f: &DensePoly<Z>) -> Option<(PrimeField, ModPoly)> {
    (FIRST_PRIME..)
        .step_by(2)
        .filter(|&p| is_prime(p))
        .take(MAX_PRIMES)
        .find_map(|p| {
            let field = PrimeField::new(p);
            let image = trim(f.coeffs().iter().map(|c| field.reduce(&c.0)).collect());
            field.is_squarefree(&image).then_some((field, image))
        })
}

/// Bounds every coefficient of every monic factor of monic `f`:
/// `2^n * sum |f_i|`.
fn coefficient_bound(f: &DensePoly<Z>) -> Integer {
    let norm = f
        .coeffs()
        .iter()
        .fold(Integer::new(0), |acc, c| acc + c.0.abs());
    Integer::new(2).pow(exponent(f.degree())) * norm
}

/// Lifts `f = prod factors (mod p)` to monic factors modulo `p^k`,
/// splitting the factor list in halves.
fn hensel_lift(
    f: &DensePoly<Z>,
    factors: &[ModPoly],
    field: PrimeField,
    k: u32,
    modulus: &Integer,
) -> Vec<DensePoly<Z>> {
    if factors.len() == 1 {
        return vec![symmetric(f, modulus)];
    }

    let (left, right) = factors.split_at(factors.len() / 2);
    let g0 = left.iter().fold(vec![1], |acc, g| field.poly_mul(&acc, g));
    let h0 = right.iter().fold(vec![1], |acc, h| field.poly_mul(&acc, h));
    let (g, h) = lift_pair(f, &g0, &h0, field, k);

    let mut lifted = hensel_lift(&symmetric(&g, modulus), left, field, k, modulus);
    lifted.extend(hensel_lift(&symmetric(&h, modulus), right, field, k, modulus));
    lifted
}

/// Linear lifting of `f = g0 * h0 (mod p)` to `f = g * h (mod p^k)`.
///
/// `g0` and `h0` are monic and coprime modulo `p`; `g` and `h` stay monic
/// of the same degrees.
fn lift_pair(
    f: &DensePoly<Z>,
    g0: &[u64],
    h0: &[u64],
    field: PrimeField,
    k: u32,
) -> (DensePoly<Z>, DensePoly<Z>) {
    let (_, s, t) = field.xgcd(g0, h0);
    let p = prime(field);
    let mut g = from_modular(g0);
    let mut h = from_modular(h0);
    let mut power = p.clone();

    for _ in 1..k {
        // f - g*h is divisible by p^j; solve g0*sigma + h0*tau = e (mod p).
        let error = f.sub(&g.mul(&h));
        let e = trim(
            error
                .coeffs()
                .iter()
                .map(|c| field.reduce(&(c.0.clone() / power.clone())))
                .collect(),
        );
        let sigma = field.rem(&field.poly_mul(&s, &e), h0);
        let tau = field.rem(&field.poly_mul(&t, &e), g0);

        let step = Z(power.clone());
        g = g.add(&from_modular(&tau).scale(&step));
        h = h.add(&from_modular(&sigma).scale(&step));
        power = power * p.clone();
    }

    (g, h)
}

/// Combines lifted factors into true factors of `f`.
fn recombine(
    f: &DensePoly<Z>,
    mut lifted: Vec<DensePoly<Z>>,
    modulus: &Integer,
) -> Vec<DensePoly<Z>> {
    let mut target = f.clone();
    let mut found = Vec::new();
    let mut size = 1;

    while 2 * size <= lifted.len() {
        let hit = combinations(lifted.len(), size).into_iter().find_map(|subset| {
            let candidate = subset.iter().fold(DensePoly::one(), |acc, &i| {
                symmetric(&acc.mul(&lifted[i]), modulus)
            });
            divide_monic(&target, &candidate).map(|quotient| (subset, candidate, quotient))
        });

        match hit {
            Some((subset, factor, quotient)) => {
                for &i in subset.iter().rev() {
                    lifted.remove(i);
                }
                found.push(factor);
                target = quotient;
            }
            None => size += 1,
        }
    }

    if target.degree() > 0 {
        found.push(target);
    }
    found
}

/// All `size`-element subsets of `0..m` as increasing index lists, in
/// lexicographic order.
pub(crate) fn combinations(m: usize, size: usize) -> Vec<Vec<usize>> {
    if size == 0 || size > m {
        return vec![];
    }

    let mut out = Vec::new();
    let mut indices: Vec<usize> = (0..size).collect();
    loop {
        out.push(indices.clone());
        let Some(i) = (0..size).rev().find(|&i| indices[i] < m - size + i) else {
            return out;
        };
        indices[i] += 1;
        for j in i + 1..size {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// `a / b` for monic `b`, if exact.
fn divide_monic(a: &DensePoly<Z>, b: &DensePoly<Z>) -> Option<DensePoly<Z>> {
    let d = b.degree();
    if a.degree() < d {
        return None;
    }

    let mut rem = a.coeffs().to_vec();
    let mut quot = vec![Z::zero(); a.degree() - d + 1];
    for i in (0..quot.len()).rev() {
        let c = rem[i + d].clone();
        if c.is_zero() {
            continue;
        }
        for (j, y) in b.coeffs().iter().enumerate() {
            rem[i + j] = rem[i + j].clone() - c.clone() * y.clone();
        }
        quot[i] = c;
    }

    rem[..d].iter().all(Z::is_zero).then(|| DensePoly::new(quot))
}

/// Coefficients reduced into `(-m/2, m/2]`.
fn symmetric(f: &DensePoly<Z>, m: &Integer) -> DensePoly<Z> {
    f.map_coeffs(|c| {
        let r = c.0.rem_euclid(m);
        if r.clone() + r.clone() > *m {
            Z(r - m.clone())
        } else {
            Z(r)
        }
    })
}

fn from_modular(f: &[u64]) -> DensePoly<Z> {
    DensePoly::new(f.iter().map(|&c| Z(Integer::from(c as i64))).collect())
}

fn prime(field: PrimeField) -> Integer {
    Integer::from(field.modulus() as i64)
}

fn exponent(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Clears denominators and content, leading coefficient positive.
fn primitive_integer(f: &DensePoly<Q>) -> DensePoly<Z> {
    let denominator = f
        .coeffs()
        .iter()
        .fold(Integer::new(1), |l, c| l.lcm(&c.0.denominator()));
    primitive_part(&f.map_coeffs(|c| {
        Z(c.0.numerator() * (denominator.clone() / c.0.denominator()))
    }))
}

fn primitive_part(f: &DensePoly<Z>) -> DensePoly<Z> {
    let mut content = f
        .coeffs()
        .iter()
        .fold(Integer::new(0), |g, c| g.gcd(&c.0));
    if f.leading_coeff().0.is_negative() {
        content = -content;
    }
    if content.to_i64() == Some(0) {
        return f.clone();
    }
    f.map_coeffs(|c| Z(c.0.clone() / content.clone()))
}

fn to_rational(f: &DensePoly<Z>) -> DensePoly<Q> {
    f.map_coeffs(|c| Q(Rational::from_integer(c.0.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Integer coefficients from low to high degree.
    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&c| Q::from_integer(c)).collect())
    }

    fn sorted(factors: Vec<DensePoly<Q>>) -> Vec<String> {
        let mut names: Vec<String> = factors.iter().map(ToString::to_string).collect();
        names.sort();
        names
    }

    fn assert_divides_out(f: &DensePoly<Q>, factors: &[DensePoly<Q>]) {
        let product = factors.iter().fold(DensePoly::one(), |acc, g| acc.mul(g));
        assert_eq!(product.degree(), f.degree());
        assert!(f.rem(&product).is_zero());
    }

    #[test]
    fn test_irreducible_quadratic() {
        let f = poly(&[1, 0, 1]);
        assert_eq!(factor_squarefree(&f), vec![f]);
    }

    #[test]
    fn test_sophie_germain_quartic() {
        // x^4 + 4 = (x^2 + 2x + 2)(x^2 - 2x + 2)
        let f = poly(&[4, 0, 0, 0, 1]);
        let factors = factor_squarefree(&f);
        assert_eq!(
            sorted(factors.clone()),
            sorted(vec![poly(&[2, 2, 1]), poly(&[2, -2, 1])])
        );
        assert_divides_out(&f, &factors);
    }

    #[test]
    fn test_non_monic_and_rational() {
        // 6x^2 - x - 1 = (2x - 1)(3x + 1)
        let f = poly(&[-1, -1, 6]);
        assert_eq!(
            sorted(factor_squarefree(&f)),
            sorted(vec![poly(&[-1, 2]), poly(&[1, 3])])
        );

        // x^2 - 1/4 = (2x - 1)(2x + 1) / 4
        let g = DensePoly::new(vec![Q::new(-1, 4), Q::zero(), Q::one()]);
        assert_eq!(
            sorted(factor_squarefree(&g)),
            sorted(vec![poly(&[-1, 2]), poly(&[1, 2])])
        );
    }

    #[test]
    fn test_splits_modulo_every_prime_but_irreducible() {
        // x^4 - 10x^2 + 1, the minimal polynomial of sqrt(2) + sqrt(3)
        let f = poly(&[1, 0, -10, 0, 1]);
        assert_eq!(factor_squarefree(&f), vec![f]);
    }

    #[test]
    fn test_many_linear_factors() {
        // (x - 1)(x - 2)(x - 3)(x + 5)(2x + 7)
        let linears = [
            poly(&[-1, 1]),
            poly(&[-2, 1]),
            poly(&[-3, 1]),
            poly(&[5, 1]),
            poly(&[7, 2]),
        ];
        let f = linears.iter().fold(DensePoly::one(), |acc, g| acc.mul(g));

        let factors = factor_squarefree(&f);
        assert_eq!(sorted(factors.clone()), sorted(linears.to_vec()));
        assert_divides_out(&f, &factors);
    }

    #[test]
    fn test_mixed_degrees() {
        // (x^3 - 2)(x^2 + x + 1)(x - 4)
        let parts = [poly(&[-2, 0, 0, 1]), poly(&[1, 1, 1]), poly(&[-4, 1])];
        let f = parts.iter().fold(DensePoly::one(), |acc, g| acc.mul(g));
        assert_eq!(sorted(factor_squarefree(&f)), sorted(parts.to_vec()));
    }

    #[test]
    fn test_constant_has_no_factors() {
        assert!(factor_squarefree(&poly(&[7])).is_empty());
    }

    #[test]
    fn test_combinations() {
        assert_eq!(combinations(4, 2).len(), 6);
        assert_eq!(combinations(3, 3), vec![vec![0, 1, 2]]);
        assert_eq!(combinations(3, 1), vec![vec![0], vec![1], vec![2]]);
        assert!(combinations(2, 3).is_empty());
    }
}
