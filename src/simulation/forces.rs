//! Lennard-Jones force model for the designated pair
//!
//! Two pure functions evaluate the 12-6 potential and its force at a given
//! separation. The step functions decide what to do with the numbers.
//!
//! Both are undefined at r = 0: the division yields inf/NaN there rather
//! than an error. Scenario setup keeps pairs at positive separation.

/// Lennard-Jones 12-6 potential at separation `r`
///
/// U(r) = 4e [ (a/r)^12 - (a/r)^6 ]
///
/// `a` is the contact distance where U crosses zero, `e` the well depth.
/// The minimum sits at r = a * 2^(1/6) with depth -e.
pub fn lennard_jones_potential(r: f64, a: f64, e: f64) -> f64 {
    // s^6 and s^12 are the attractive and repulsive branches
    let s6 = (a / r).powi(6);
    let s12 = s6 * s6;

    4.0 * e * (s12 - s6)
}

/// Lennard-Jones force at separation `r`
///
/// F(r) = (24e / a) [ 2 (a/r)^13 - (a/r)^7 ]
///
/// Positive is repulsive, negative attractive. At r = a the bracket is
/// 2 - 1, so F(a) = 24e/a; the force crosses zero at r = a * 2^(1/6),
/// the bottom of the potential well.
pub fn intermolecular_force(r: f64, a: f64, e: f64) -> f64 {
    let s = a / r;

    (24.0 * e / a) * (2.0 * s.powi(13) - s.powi(7))
}
