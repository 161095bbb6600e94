// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common presentations and reference multiplications shared across
//! integration tests.

#![allow(dead_code)]

use pc_collect::{ExponentVector, Presentation, Word};

/// Two central generators of infinite order.
pub fn free_abelian2() -> Presentation {
    Presentation::builder(2).central(1).central(2).build()
}

/// Z/n on one generator with no power word.
pub fn cyclic(n: i64) -> Presentation {
    Presentation::builder(1).relative_order(1, n).build()
}

/// Z/4 on a = g1, b = a^2 = g2.
pub fn cyclic4() -> Presentation {
    Presentation::builder(2)
        .relative_order(1, 2)
        .relative_order(2, 2)
        .power(1, Word::from_pairs([(2, 1)]))
        .inverse_power(1, Word::from_pairs([(2, 1)]))
        .central(1)
        .central(2)
        .build()
}

/// S3 = <a, b | a^2, b^3, b^a = b^2>.
pub fn s3() -> Presentation {
    Presentation::builder(2)
        .relative_order(1, 2)
        .relative_order(2, 3)
        .conjugate(2, 1, Word::from_pairs([(2, 2)]))
        .inverse_conjugate(2, 1, Word::from_pairs([(2, 1)]))
        .conjugate_by_inverse(2, 1, Word::from_pairs([(2, 2)]))
        .inverse_conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1)]))
        .build()
}

/// Heisenberg group on x = g1, y = g2, z = g3 with y^x = y*z, z central.
pub fn heisenberg() -> Presentation {
    heisenberg_builder().build()
}

/// The Heisenberg group with x marked as commuting with z, so conjugate
/// flushes past x stop at y.
pub fn heisenberg_tight() -> Presentation {
    heisenberg_builder().commute(1, 2).build()
}

fn heisenberg_builder() -> pc_collect::PresentationBuilder {
    Presentation::builder(3)
        .conjugate(2, 1, Word::from_pairs([(2, 1), (3, 1)]))
        .inverse_conjugate(2, 1, Word::from_pairs([(2, -1), (3, -1)]))
        .conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1), (3, -1)]))
        .inverse_conjugate_by_inverse(2, 1, Word::from_pairs([(2, -1), (3, 1)]))
        .central(2)
}

/// Reference normal form in the Heisenberg group:
/// `x^a y^b z^c * x^e = x^(a+e) y^b z^(c+b*e)`.
pub fn heisenberg_reference(word: &[(u32, i64)]) -> ExponentVector {
    let (mut a, mut b, mut c) = (0i64, 0i64, 0i64);
    for &(g, e) in word {
        match g {
            1 => {
                c += b * e;
                a += e;
            }
            2 => b += e,
            3 => c += e,
            _ => unreachable!("generator {}", g),
        }
    }
    ExponentVector::from_i64s(&[a, b, c])
}

/// Dihedral group of order 8 on s = g1, r = g2, r^2 = g3.
pub fn dihedral8() -> Presentation {
    Presentation::builder(3)
        .relative_order(1, 2)
        .relative_order(2, 2)
        .relative_order(3, 2)
        .power(2, Word::from_pairs([(3, 1)]))
        .inverse_power(2, Word::from_pairs([(3, 1)]))
        .conjugate(2, 1, Word::from_pairs([(2, 1), (3, 1)]))
        .inverse_conjugate(2, 1, Word::from_pairs([(2, 1)]))
        .conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1), (3, 1)]))
        .inverse_conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1)]))
        .central(2)
        .build()
}

/// Reference normal form in D8, tracking the element as `s^i r^k`.
pub fn dihedral8_reference(word: &[(u32, i64)]) -> ExponentVector {
    let (mut i, mut k) = (0i64, 0i64);
    for &(g, e) in word {
        match g {
            1 => {
                i += e;
                if e % 2 != 0 {
                    k = -k;
                }
            }
            2 => k += e,
            3 => k += 2 * e,
            _ => unreachable!("generator {}", g),
        }
    }
    let k = k.rem_euclid(4);
    ExponentVector::from_i64s(&[i.rem_euclid(2), k % 2, k / 2])
}

/// Nilpotent group of class 3: `a = g1` acting on the Heisenberg group
/// `x = g2, y = g3, z = g4` by `x -> x*y`, fixing `y` and `z`.
///
/// The conjugate word `x^a = x*y` starts with a generator that does not
/// commute with everything above it, so collecting it takes the slow path
/// inside a nested frame.
pub fn nilpotent_class3() -> Presentation {
    Presentation::builder(4)
        // x^a = x y
        .conjugate(2, 1, Word::from_pairs([(2, 1), (3, 1)]))
        .inverse_conjugate(2, 1, Word::from_pairs([(2, -1), (3, -1), (4, 1)]))
        .conjugate_by_inverse(2, 1, Word::from_pairs([(2, 1), (3, -1)]))
        .inverse_conjugate_by_inverse(2, 1, Word::from_pairs([(2, -1), (3, 1), (4, -1)]))
        // y^x = y z
        .conjugate(3, 2, Word::from_pairs([(3, 1), (4, 1)]))
        .inverse_conjugate(3, 2, Word::from_pairs([(3, -1), (4, -1)]))
        .conjugate_by_inverse(3, 2, Word::from_pairs([(3, 1), (4, -1)]))
        .inverse_conjugate_by_inverse(3, 2, Word::from_pairs([(3, -1), (4, 1)]))
        .commute(1, 3)
        .commute(2, 3)
        .central(3)
        .build()
}

/// Reference normal form in [`nilpotent_class3`].
///
/// The Heisenberg part multiplies as
/// `(b, c, d) * (b', c', d') = (b+b', c+c', d+d'+c*b')` and `a^k` acts by
/// `(b, c, d) -> (b, c + k*b, d + k*b*(b-1)/2)`.
pub fn nilpotent_class3_reference(word: &[(u32, i64)]) -> ExponentVector {
    let (mut a, mut b, mut c, mut d) = (0i64, 0i64, 0i64, 0i64);
    for &(g, e) in word {
        match g {
            1 => {
                d += e * b * (b - 1) / 2;
                c += e * b;
                a += e;
            }
            2 => {
                d += c * e;
                b += e;
            }
            3 => c += e,
            4 => d += e,
            _ => unreachable!("generator {}", g),
        }
    }
    ExponentVector::from_i64s(&[a, b, c, d])
}

/// Frobenius group of order 20, Z/5 by Z/4, on a = g1, b = a^2 = g2, c = g3
/// with `c^a = c^2`.
///
/// The power word of `a` lands on `b`, which does not commute with `c`, so
/// an overflow of `a` has to wait until `c` has been moved past `a`.
pub fn frobenius20() -> Presentation {
    Presentation::builder(3)
        .relative_order(1, 2)
        .relative_order(2, 2)
        .relative_order(3, 5)
        .power(1, Word::from_pairs([(2, 1)]))
        .inverse_power(1, Word::from_pairs([(2, 1)]))
        // c^a = c^2, c^(a^-1) = c^3
        .conjugate(3, 1, Word::from_pairs([(3, 2)]))
        .inverse_conjugate(3, 1, Word::from_pairs([(3, 3)]))
        .conjugate_by_inverse(3, 1, Word::from_pairs([(3, 3)]))
        .inverse_conjugate_by_inverse(3, 1, Word::from_pairs([(3, 2)]))
        // c^b = c^4
        .conjugate(3, 2, Word::from_pairs([(3, 4)]))
        .inverse_conjugate(3, 2, Word::from_pairs([(3, 1)]))
        .conjugate_by_inverse(3, 2, Word::from_pairs([(3, 4)]))
        .inverse_conjugate_by_inverse(3, 2, Word::from_pairs([(3, 1)]))
        .build()
}

/// Reference normal form in [`frobenius20`], tracking the element as
/// `a^i c^k` with `c^(a^e) = c^(2^e)`.
pub fn frobenius20_reference(word: &[(u32, i64)]) -> ExponentVector {
    fn act(k: i64, e: i64) -> i64 {
        (0..e.rem_euclid(4)).fold(k, |k, _| k * 2 % 5)
    }
    let (mut i, mut k) = (0i64, 0i64);
    for &(g, e) in word {
        match g {
            1 => {
                k = act(k, e);
                i += e;
            }
            2 => {
                k = act(k, 2 * e);
                i += 2 * e;
            }
            3 => k = (k + e).rem_euclid(5),
            _ => unreachable!("generator {}", g),
        }
    }
    let i = i.rem_euclid(4);
    ExponentVector::from_i64s(&[i % 2, i / 2, k])
}

pub fn word(pairs: &[(u32, i64)]) -> Word {
    Word::from_pairs(pairs.iter().copied())
}
