//! Easing and numerical integration helpers for smooth camera paths
//!
//! Provides the Catmull-Rom basis used by the spline curves, the quintic
//! ease used by the speed and rotation models, and fixed-step Simpson's-rule
//! integration for converting the speed profile into displacement.

use glam::DVec3;

/// Linear interpolation between two values
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quintic ease-in-out (smootherstep)
///
/// Zero first and second derivatives at both ends, so eased quantities start
/// and stop without a velocity or acceleration kick.
pub fn smootherstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Cubic Hermite interpolation (Catmull-Rom spline) on 3D points
///
/// Given 4 control points (p0, p1, p2, p3) and parameter t in [0, 1],
/// interpolates between p1 and p2 with tangents derived from neighbors.
/// Exact at the endpoints: t=0 yields p1 and t=1 yields p2.
pub fn cubic_hermite(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> DVec3 {
    let t2 = t * t;
    let t3 = t2 * t;

    // Catmull-Rom basis functions
    let h1 = -0.5 * t3 + t2 - 0.5 * t;
    let h2 = 1.5 * t3 - 2.5 * t2 + 1.0;
    let h3 = -1.5 * t3 + 2.0 * t2 + 0.5 * t;
    let h4 = 0.5 * t3 - 0.5 * t2;

    p0 * h1 + p1 * h2 + p2 * h3 + p3 * h4
}

/// Composite Simpson's rule over [a, b] with n subdivisions
///
/// n is forced even and at least 2. Exact for polynomials up to degree 3;
/// the per-frame speed integrand is a smooth quartic, so a moderate n keeps
/// the displacement error far below visible thresholds.
pub fn simpsons_rule<F: Fn(f64) -> f64>(a: f64, b: f64, n: u32, f: F) -> f64 {
    if b <= a {
        return 0.0;
    }

    let n = {
        let n = n.max(2);
        if n % 2 == 0 {
            n
        } else {
            n + 1
        }
    };

    let h = (b - a) / f64::from(n);
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + h * f64::from(i);
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x);
    }

    sum * h / 3.0
}
