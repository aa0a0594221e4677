//! Great circle heading

/// Initial great circle bearing [deg] from `from` toward `to`, both expressed
/// as (latitude, longitude) in decimal degrees. Result lies within [0, 360).
/// Coincident points have no defined bearing: we return 0. Callers that
/// follow a moving target should rather keep their previous heading,
/// see [Heading].
pub fn bearing_deg(from: (f64, f64), to: (f64, f64)) -> f64 {
    if from == to {
        return 0.0;
    }
    let (phi_a, phi_b) = (from.0.to_radians(), to.0.to_radians());
    let d_lambda = (to.1 - from.1).to_radians();

    let y = d_lambda.sin() * phi_b.cos();
    let x = phi_a.cos() * phi_b.sin() - phi_a.sin() * phi_b.cos() * d_lambda.cos();

    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    if bearing.is_finite() {
        bearing
    } else {
        0.0
    }
}

/// Heading that survives transient coincidence: when two consecutive
/// positions are identical, the previous heading is retained instead of
/// snapping back to north.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Heading {
    deg: f64,
}

impl Heading {
    /// Current heading [deg]
    pub fn deg(&self) -> f64 {
        self.deg
    }
    /// Updates and returns the heading from a new pair of positions
    pub fn update(&mut self, from: (f64, f64), to: (f64, f64)) -> f64 {
        if from != to {
            self.deg = bearing_deg(from, to);
        }
        self.deg
    }
}
