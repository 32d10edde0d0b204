//! Irreducible factors of squarefree multivariate polynomials.
//!
//! The polynomial is read in a main variable `x` of least degree and made
//! monic in it. The other variables `y` are specialised at an integer point
//! `a` where the image keeps its degree and stays squarefree, and the image
//! is factored over Q. Subsets of image factors are then lifted
//! `(y - a)`-adically up to the total `y`-degree of the polynomial, and a
//! lift is kept when it divides exactly. Subsets are tried by increasing
//! size, so every factor found is irreducible.

use hironaka_poly::algorithms::{primitive_normalization, primitive_part_in};
use hironaka_poly::{DensePoly, Monomial, MonomialOrder, SparsePoly};
use hironaka_rings::{Ring, Q};
use rustc_hash::FxHashMap;

use crate::univariate::{self, combinations};

/// Evaluation points tried before giving up; the sampling radius grows
/// with each attempt.
const MAX_POINTS: i64 = 64;

/// Irreducible factors of a squarefree polynomial that is primitive in
/// every variable it involves.
///
/// Factors come back primitive with positive leading coefficient, paired
/// with whether they are certified irreducible. Only when no usable
/// evaluation point turns up is `f` returned whole and uncertified.
pub(crate) fn irreducible_factors(f: &SparsePoly<Q>) -> Vec<(SparsePoly<Q>, bool)> {
    let f = primitive_normalization(f).1;
    if is_certified_irreducible(&f) {
        return vec![(f, true)];
    }

    let (num_vars, order) = (f.num_vars(), f.order());
    let vars = f.variables();
    let Some(&x) = vars.iter().min_by_key(|&&v| f.degree_in(v)) else {
        return vec![];
    };

    if vars.len() == 1 {
        let Some(dense) = DensePoly::from_sparse(&f, x) else {
            return vec![(f, false)];
        };
        return univariate::factor_squarefree(&dense)
            .into_iter()
            .map(|g| (g.to_sparse(x, num_vars, order), true))
            .collect();
    }

    let (monic, lead) = make_monic(&f, x);
    let others: Vec<usize> = vars.iter().copied().filter(|&v| v != x).collect();
    let Some((point, image)) = choose_point(&monic, x, &others) else {
        return vec![(f, false)];
    };

    let images: Vec<DensePoly<Q>> = univariate::factor_squarefree(&image)
        .iter()
        .map(DensePoly::monic)
        .collect();
    if images.len() <= 1 {
        return vec![(f, true)];
    }

    let shifted = monic.compose(&translation(&point, num_vars, order, true));
    let back = translation(&point, num_vars, order, false);
    let lead_x = SparsePoly::var(x, num_vars, order).mul(&lead);

    lift_factors(&shifted, x, images)
        .into_iter()
        .map(|g| {
            let g = g.compose(&back).substitute(x, &lead_x);
            (primitive_part_in(&g, x), true)
        })
        .collect()
}

/// `a*x + b` with `gcd(a, b) = 1` admits no nontrivial factorization.
pub(crate) fn is_certified_irreducible(f: &SparsePoly<Q>) -> bool {
    f.variables().into_iter().any(|v| f.degree_in(v) == 1)
}

/// `F = L^(d-1) f(x / L)` where `L` is the leading coefficient of `f` in
/// `x`; `F` is monic in `x` and its factors map back under `x -> L*x`.
fn make_monic(f: &SparsePoly<Q>, x: usize) -> (SparsePoly<Q>, SparsePoly<Q>) {
    let coeffs = f.coefficients_in(x);
    let d = coeffs.len() - 1;
    let lead = coeffs[d].clone();
    let xv = SparsePoly::var(x, f.num_vars(), f.order());

    let mut monic = xv.pow(to_u32(d));
    for (i, c) in coeffs.iter().enumerate().take(d) {
        if c.is_zero() {
            continue;
        }
        let scaled = c.mul(&lead.pow(to_u32(d - 1 - i)));
        monic = monic.add(&scaled.mul(&xv.pow(to_u32(i))));
    }
    (monic, lead)
}

/// A point for `others` at which the monic `f` stays squarefree.
fn choose_point(
    f: &SparsePoly<Q>,
    x: usize,
    others: &[usize],
) -> Option<(Vec<(usize, Q)>, DensePoly<Q>)> {
    let (num_vars, order) = (f.num_vars(), f.order());
    let degree = f.degree_in(x) as usize;
    let mut state = 0x9e37_79b9_7f4a_7c15_u64;

    for attempt in 0..MAX_POINTS {
        let radius = 3 + attempt;
        let point: Vec<(usize, Q)> = others
            .iter()
            .map(|&v| (v, Q::from_integer(next_in(&mut state, radius))))
            .collect();

        let mut images: Vec<SparsePoly<Q>> = (0..num_vars)
            .map(|v| SparsePoly::var(v, num_vars, order))
            .collect();
        for (v, a) in &point {
            images[*v] = SparsePoly::constant(a.clone(), num_vars, order);
        }

        let Some(image) = DensePoly::from_sparse(&f.compose(&images), x) else {
            continue;
        };
        if image.degree() == degree && image.is_squarefree() {
            return Some((point, image));
        }
    }
    None
}

/// Images of the variables under `y -> y + a` (or `y - a` backwards).
fn translation(
    point: &[(usize, Q)],
    num_vars: usize,
    order: MonomialOrder,
    forward: bool,
) -> Vec<SparsePoly<Q>> {
    let mut images: Vec<SparsePoly<Q>> = (0..num_vars)
        .map(|v| SparsePoly::var(v, num_vars, order))
        .collect();
    for (v, a) in point {
        let a = if forward { a.clone() } else { -a.clone() };
        images[*v] = images[*v].add(&SparsePoly::constant(a, num_vars, order));
    }
    images
}

/// Splits `target` (monic in `x`, with `target(x, 0)` the product of
/// `images`) into irreducible factors monic in `x`.
fn lift_factors(
    target: &SparsePoly<Q>,
    x: usize,
    mut images: Vec<DensePoly<Q>>,
) -> Vec<SparsePoly<Q>> {
    let mut target = target.clone();
    let mut found = Vec::new();
    let mut size = 1;

    while 2 * size <= images.len() {
        let hit = combinations(images.len(), size).into_iter().find_map(|subset| {
            let (g0, h0) = images.iter().enumerate().fold(
                (DensePoly::one(), DensePoly::one()),
                |(g, h), (i, u)| {
                    if subset.contains(&i) {
                        (g.mul(u), h)
                    } else {
                        (g, h.mul(u))
                    }
                },
            );
            let (g, h) = lift(&target, x, &g0, &h0)?;
            (g.mul(&h) == target).then_some((subset, g, h))
        });

        match hit {
            Some((subset, g, h)) => {
                for &i in subset.iter().rev() {
                    images.remove(i);
                }
                found.push(g);
                target = h;
            }
            None => size += 1,
        }
    }

    found.push(target);
    found
}

/// Lifts `target(x, 0) = g0 * h0` to `target = g * h` modulo the ideal of
/// `y`-monomials of degree above the `y`-degree of `target`.
///
/// Returns `None` when `g0` and `h0` are not coprime.
fn lift(
    target: &SparsePoly<Q>,
    x: usize,
    g0: &DensePoly<Q>,
    h0: &DensePoly<Q>,
) -> Option<(SparsePoly<Q>, SparsePoly<Q>)> {
    let (gcd, s, t) = g0.xgcd(h0);
    if gcd.degree() != 0 {
        return None;
    }

    let (num_vars, order) = (target.num_vars(), target.order());
    let y_degree = |m: &Monomial| (m.total_degree() - m.exponent(x)) as usize;
    let depth = target
        .terms()
        .iter()
        .map(|(m, _)| y_degree(m))
        .max()
        .unwrap_or(0);

    let mut buckets: Vec<Vec<(Monomial, Q)>> = vec![Vec::new(); depth + 1];
    for (m, c) in target.terms() {
        buckets[y_degree(m)].push((m.clone(), c.clone()));
    }
    let layers: Vec<SparsePoly<Q>> = buckets
        .into_iter()
        .map(|terms| SparsePoly::new(terms, num_vars, order))
        .collect();

    let mut g = vec![g0.to_sparse(x, num_vars, order)];
    let mut h = vec![h0.to_sparse(x, num_vars, order)];
    for d in 1..=depth {
        let error = (1..d).fold(layers[d].clone(), |e, i| e.sub(&g[i].mul(&h[d - i])));
        let (sigma, tau) = solve(&error, x, g0, h0, &s, &t);
        g.push(tau);
        h.push(sigma);
    }

    let sum = |parts: Vec<SparsePoly<Q>>| {
        parts
            .iter()
            .fold(SparsePoly::zero(num_vars, order), |acc, p| acc.add(p))
    };
    Some((sum(g), sum(h)))
}

/// Solves `g0 * sigma + h0 * tau = e` coefficientwise in the `y`-monomials
/// of `e`, with `deg_x sigma < deg h0` and `deg_x tau < deg g0`.
fn solve(
    e: &SparsePoly<Q>,
    x: usize,
    g0: &DensePoly<Q>,
    h0: &DensePoly<Q>,
    s: &DensePoly<Q>,
    t: &DensePoly<Q>,
) -> (SparsePoly<Q>, SparsePoly<Q>) {
    let mut groups: FxHashMap<Monomial, Vec<Q>> = FxHashMap::default();
    for (m, c) in e.terms() {
        let k = m.exponent(x) as usize;
        let coeffs = groups.entry(m.with_exponent(x, 0)).or_default();
        if coeffs.len() <= k {
            coeffs.resize(k + 1, Q::zero());
        }
        coeffs[k] = c.clone();
    }

    let mut sigma = Vec::new();
    let mut tau = Vec::new();
    for (y, coeffs) in groups {
        let slice = DensePoly::new(coeffs);
        push_terms(&mut sigma, &y, x, &s.mul(&slice).rem(h0));
        push_terms(&mut tau, &y, x, &t.mul(&slice).rem(g0));
    }

    let (num_vars, order) = (e.num_vars(), e.order());
    (
        SparsePoly::new(sigma, num_vars, order),
        SparsePoly::new(tau, num_vars, order),
    )
}

fn push_terms(terms: &mut Vec<(Monomial, Q)>, y: &Monomial, x: usize, p: &DensePoly<Q>) {
    terms.extend(
        p.coeffs()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(k, c)| (y.with_exponent(x, to_u32(k)), c.clone())),
    );
}

fn next_in(state: &mut u64, radius: i64) -> i64 {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    let span = u64::try_from(2 * radius + 1).unwrap_or(1);
    i64::try_from((*state >> 33) % span).unwrap_or(0) - radius
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
