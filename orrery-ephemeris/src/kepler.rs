//! Kepler propagation: mean elements at an instant to a heliocentric
//! position.
//!
//! The chain is the classical one: propagate the elements linearly in
//! Julian centuries, solve Kepler's equation for the eccentric anomaly,
//! convert to true anomaly and radius, place the point in the perifocal
//! plane, rotate through argument of perihelion / inclination / ascending
//! node into heliocentric ecliptic axes, then tilt by the mean obliquity
//! into the J2000 equatorial frame the [`Ephemeris`](orrery_core::Ephemeris)
//! contract promises.

use crate::elements::MeanElements;
use orrery_core::constants::{DEG_TO_RAD, MEAN_OBLIQUITY_RAD, PI, TWO_PI};
use orrery_core::{SimInstant, Vector3};

/// Newton iteration stops when the eccentric-anomaly step falls below this.
const KEPLER_TOLERANCE: f64 = 1e-12;

/// Iteration cap; planetary eccentricities converge in well under ten.
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Heliocentric J2000 equatorial position, in AU.
pub(crate) fn position_au(el: &MeanElements, instant: SimInstant) -> Vector3 {
    let t = instant.julian_centuries();

    let a = el.a0 + el.a_dot * t;
    let e = el.e0 + el.e_dot * t;
    let incl = (el.i0 + el.i_dot * t) * DEG_TO_RAD;
    let mean_lon = (el.l0 + el.l_dot * t) * DEG_TO_RAD;
    let lon_peri = (el.w0 + el.w_dot * t) * DEG_TO_RAD;
    let lon_node = (el.node0 + el.node_dot * t) * DEG_TO_RAD;

    let mean_anomaly = normalize_radians(mean_lon - lon_peri);
    let arg_peri = lon_peri - lon_node;

    let ecc_anomaly = solve_kepler(mean_anomaly, e);
    let (sin_half, cos_half) = libm::sincos(ecc_anomaly / 2.0);
    let true_anomaly = 2.0
        * libm::atan2(
            libm::sqrt(1.0 + e) * sin_half,
            libm::sqrt(1.0 - e) * cos_half,
        );
    let radius = a * (1.0 - e * libm::cos(ecc_anomaly));

    let (sin_nu, cos_nu) = libm::sincos(true_anomaly);
    let x_peri = radius * cos_nu;
    let y_peri = radius * sin_nu;

    let (sin_w, cos_w) = libm::sincos(arg_peri);
    let (sin_node, cos_node) = libm::sincos(lon_node);
    let (sin_i, cos_i) = libm::sincos(incl);

    let x_ecl = (cos_w * cos_node - sin_w * sin_node * cos_i) * x_peri
        + (-sin_w * cos_node - cos_w * sin_node * cos_i) * y_peri;
    let y_ecl = (cos_w * sin_node + sin_w * cos_node * cos_i) * x_peri
        + (-sin_w * sin_node + cos_w * cos_node * cos_i) * y_peri;
    let z_ecl = sin_w * sin_i * x_peri + cos_w * sin_i * y_peri;

    ecliptic_to_equatorial(x_ecl, y_ecl, z_ecl)
}

/// Solves Kepler's equation `M = E - e·sin E` for the eccentric anomaly.
///
/// Newton-Raphson starting from `E = M`; high-eccentricity orbits start
/// from `E = π` instead, where the iteration cannot stall on the shallow
/// slope near perihelion.
pub(crate) fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = if e > 0.8 { PI } else { mean_anomaly };

    for _ in 0..KEPLER_MAX_ITERATIONS {
        let f = ecc_anomaly - e * libm::sin(ecc_anomaly) - mean_anomaly;
        let f_prime = 1.0 - e * libm::cos(ecc_anomaly);
        let delta = f / f_prime;
        ecc_anomaly -= delta;
        if libm::fabs(delta) < KEPLER_TOLERANCE {
            break;
        }
    }

    ecc_anomaly
}

/// Wraps an angle into `(-π, π]`.
fn normalize_radians(angle: f64) -> f64 {
    let wrapped = libm::fmod(angle, TWO_PI);
    if wrapped > PI {
        wrapped - TWO_PI
    } else if wrapped <= -PI {
        wrapped + TWO_PI
    } else {
        wrapped
    }
}

fn ecliptic_to_equatorial(x: f64, y: f64, z: f64) -> Vector3 {
    let (sin_obl, cos_obl) = libm::sincos(MEAN_OBLIQUITY_RAD);
    Vector3::new(x, y * cos_obl - z * sin_obl, y * sin_obl + z * cos_obl)
}
