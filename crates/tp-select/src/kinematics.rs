//! Kinematic helper functions over per-object kinematics.

use std::f64::consts::PI;

/// Difference of azimuthal angles, wrapped into [-pi, pi].
pub fn delta_phi(phi1: f64, phi2: f64) -> f64 {
    let mut res = phi1 - phi2;
    while res > PI {
        res -= 2.0 * PI;
    }
    while res < -PI {
        res += 2.0 * PI;
    }
    res
}

/// Angular separation in the (eta, phi) plane.
pub fn delta_r(eta1: f64, phi1: f64, eta2: f64, phi2: f64) -> f64 {
    let deta = eta1 - eta2;
    let dphi = delta_phi(phi1, phi2);
    (deta * deta + dphi * dphi).sqrt()
}

/// Transverse mass of an object against the missing transverse momentum:
/// `sqrt(2 * pt1 * pt2 * (1 - cos(dphi)))`.
pub fn transverse_mass(pt1: f64, phi1: f64, pt2: f64, phi2: f64) -> f64 {
    (2.0 * pt1 * pt2 * (1.0 - delta_phi(phi1, phi2).cos())).sqrt()
}

/// Unit bisector of the two legs' transverse directions (the zeta axis).
/// Returns the zero vector for back-to-back legs, where the direction sum
/// is zero up to rounding and no bisector is defined.
pub fn zeta_axis(phi1: f64, phi2: f64) -> (f64, f64) {
    let x = phi1.cos() + phi2.cos();
    let y = phi1.sin() + phi2.sin();
    let norm = x.hypot(y);
    if norm < 1e-12 { (0.0, 0.0) } else { (x / norm, y / norm) }
}

/// Projection of both visible legs onto the zeta axis.
pub fn pzeta_vis(pt1: f64, phi1: f64, pt2: f64, phi2: f64) -> f64 {
    let (zx, zy) = zeta_axis(phi1, phi2);
    let vx = pt1 * phi1.cos() + pt2 * phi2.cos();
    let vy = pt1 * phi1.sin() + pt2 * phi2.sin();
    vx * zx + vy * zy
}

/// Projection of the missing transverse momentum onto the zeta axis of the
/// two visible legs.
pub fn pzeta_miss(met: f64, met_phi: f64, phi1: f64, phi2: f64) -> f64 {
    let (zx, zy) = zeta_axis(phi1, phi2);
    met * met_phi.cos() * zx + met * met_phi.sin() * zy
}

/// Dzeta discriminant with the conventional 0.85 visible coefficient.
pub fn dzeta(met: f64, met_phi: f64, pt1: f64, phi1: f64, pt2: f64, phi2: f64) -> f64 {
    pzeta_miss(met, met_phi, phi1, phi2) - 0.85 * pzeta_vis(pt1, phi1, pt2, phi2)
}
