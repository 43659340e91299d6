//! Radial menu geometry.
//!
//! Angles are degrees measured clockwise from 12 o'clock in screen space
//! (y grows downward). Wedge `i` of `n` starts at `i * 360 / n`.

pub const FULL_TURN_DEG: f64 = 360.0;

/// Angular slice of the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub start_deg: f64,
    pub sweep_deg: f64,
}

impl Wedge {
    pub fn end_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg
    }

    /// Center angle, where a label or color swatch goes.
    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    pub fn contains_angle(&self, angle_deg: f64) -> bool {
        angle_deg >= self.start_deg && angle_deg < self.end_deg()
    }
}

/// Sweep of one wedge when `count` wedges share a full turn.
pub fn wedge_sweep(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    FULL_TURN_DEG / count as f64
}

/// Evenly divides the ring into `count` wedges.
pub fn wedges(count: usize) -> Vec<Wedge> {
    let sweep = wedge_sweep(count);
    (0..count)
        .map(|index| Wedge {
            index,
            start_deg: index as f64 * sweep,
            sweep_deg: sweep,
        })
        .collect()
}

/// Angle of offset `(dx, dy)` from the menu center, in `[0, 360)`.
pub fn angle_of(dx: f64, dy: f64) -> f64 {
    let angle = dx.atan2(-dy).to_degrees();
    if angle < 0.0 {
        angle + FULL_TURN_DEG
    } else {
        angle
    }
}

/// Ring dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    /// Radius of the center hole; clicks inside it hit no wedge.
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for RadialGeometry {
    fn default() -> Self {
        Self {
            inner_radius: 36.0,
            outer_radius: 110.0,
        }
    }
}

/// Where a point relative to the anchor lands on the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingHit {
    Hole,
    Wedge(usize),
    Outside,
}

impl RadialGeometry {
    /// Classifies a point relative to the menu anchor.
    pub fn hit_test(&self, dx: f64, dy: f64, count: usize) -> RingHit {
        let distance = dx.hypot(dy);
        if !distance.is_finite() {
            return RingHit::Outside;
        }
        if distance < self.inner_radius {
            return RingHit::Hole;
        }
        if distance > self.outer_radius || count == 0 {
            return RingHit::Outside;
        }

        let index = (angle_of(dx, dy) / wedge_sweep(count)).floor() as usize;
        RingHit::Wedge(index.min(count - 1))
    }

    /// Point at `radius`/`angle_deg` in SVG coordinates with the menu center
    /// at `(outer_radius, outer_radius)`.
    pub fn point_at(&self, radius: f64, angle_deg: f64) -> (f64, f64) {
        let radians = angle_deg.to_radians();
        (
            self.outer_radius + radius * radians.sin(),
            self.outer_radius - radius * radians.cos(),
        )
    }

    /// SVG path for one ring wedge.
    pub fn wedge_path(&self, wedge: &Wedge) -> String {
        if wedge.sweep_deg >= FULL_TURN_DEG {
            return self.full_ring_path();
        }

        let large_arc = u8::from(wedge.sweep_deg > 180.0);
        let (outer_start_x, outer_start_y) = self.point_at(self.outer_radius, wedge.start_deg);
        let (outer_end_x, outer_end_y) = self.point_at(self.outer_radius, wedge.end_deg());
        let (inner_end_x, inner_end_y) = self.point_at(self.inner_radius, wedge.end_deg());
        let (inner_start_x, inner_start_y) = self.point_at(self.inner_radius, wedge.start_deg);

        format!(
            "M {outer_start_x:.3} {outer_start_y:.3} \
             A {r:.3} {r:.3} 0 {large_arc} 1 {outer_end_x:.3} {outer_end_y:.3} \
             L {inner_end_x:.3} {inner_end_y:.3} \
             A {ir:.3} {ir:.3} 0 {large_arc} 0 {inner_start_x:.3} {inner_start_y:.3} Z",
            r = self.outer_radius,
            ir = self.inner_radius,
        )
    }

    // A single arc with identical endpoints draws nothing, so a lone wedge
    // is two half-turn arcs per circle.
    fn full_ring_path(&self) -> String {
        let (top_x, top_y) = self.point_at(self.outer_radius, 0.0);
        let (bottom_x, bottom_y) = self.point_at(self.outer_radius, 180.0);
        let (inner_top_x, inner_top_y) = self.point_at(self.inner_radius, 0.0);
        let (inner_bottom_x, inner_bottom_y) = self.point_at(self.inner_radius, 180.0);

        format!(
            "M {top_x:.3} {top_y:.3} \
             A {r:.3} {r:.3} 0 1 1 {bottom_x:.3} {bottom_y:.3} \
             A {r:.3} {r:.3} 0 1 1 {top_x:.3} {top_y:.3} \
             M {inner_top_x:.3} {inner_top_y:.3} \
             A {ir:.3} {ir:.3} 0 1 0 {inner_bottom_x:.3} {inner_bottom_y:.3} \
             A {ir:.3} {ir:.3} 0 1 0 {inner_top_x:.3} {inner_top_y:.3} Z",
            r = self.outer_radius,
            ir = self.inner_radius,
        )
    }
}
