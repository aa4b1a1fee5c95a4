use crate::algorithm::{cell_of, SpatialIndex};
use crate::error::{Result, SurfaceError};

/// Settings for the probe sweep along an edge's perpendicular bisector.
///
/// Offsets and step are measured in grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeSettings {
    /// Distance the probe advances per iteration.
    pub step: f64,
    /// Offset of the first probe from the edge midpoint.
    pub min_offset: f64,
    /// Largest offset probed before the side is declared a boundary.
    pub max_offset: f64,
    /// Chebyshev radius of the cell block searched around each probe.
    pub search_radius: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            step: 0.01,
            min_offset: 0.001,
            max_offset: 2.0,
            search_radius: 1,
        }
    }
}

impl ProbeSettings {
    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SurfaceError::InvalidConfig(format!(
                "probe step must be positive, got {}",
                self.step
            )));
        }
        if !(self.min_offset >= 0.0 && self.max_offset.is_finite() && self.max_offset > self.min_offset) {
            return Err(SurfaceError::InvalidConfig(format!(
                "probe offsets must satisfy 0 <= min < max, got {}..{}",
                self.min_offset, self.max_offset
            )));
        }
        if self.search_radius == 0 {
            return Err(SurfaceError::InvalidConfig(
                "probe search radius must be at least one cell".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of probe positions tried on one side before exhaustion.
    pub fn max_steps(&self) -> usize {
        ((self.max_offset - self.min_offset) / self.step).floor() as usize + 1
    }
}

/// The two sides of an edge, relative to `(p1 - p0) x Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Right, Side::Left];

    fn sign(self) -> f64 {
        match self {
            Side::Right => 1.0,
            Side::Left => -1.0,
        }
    }
}

/// Planar frame of an edge: midpoint, squared half length and unit perpendicular.
#[derive(Clone, Copy, Debug)]
pub struct EdgeFrame {
    pub midpoint: [f64; 2],
    pub half_len_sq: f64,
    pub normal: [f64; 2],
}

impl EdgeFrame {
    /// Returns `None` for edges without planar extent.
    pub fn new(p0: &[f64; 3], p1: &[f64; 3]) -> Option<Self> {
        let dx = p1[0] - p0[0];
        let dy = p1[1] - p0[1];
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f64::MIN_POSITIVE {
            return None;
        }
        let len = len_sq.sqrt();

        Some(Self {
            midpoint: [(p0[0] + p1[0]) * 0.5, (p0[1] + p1[1]) * 0.5],
            half_len_sq: len_sq * 0.25,
            normal: [dy / len, -dx / len],
        })
    }
}

/// State of the sweep on one side of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeState {
    /// Still growing, the value is the next step to try.
    Probing(usize),
    /// A closing vertex was accepted.
    Found(usize),
    /// The offset bound was passed without a hit.
    Exhausted,
}

/// Sweeps a circle through both edge endpoints away from the edge until it swallows a point.
pub struct Probe<'a, A: SpatialIndex> {
    index: &'a A,
    points: &'a [[f64; 3]],
    edge: [usize; 2],
    frame: &'a EdgeFrame,
    direction: [f64; 2],
    settings: &'a ProbeSettings,
}

impl<'a, A: SpatialIndex> Probe<'a, A> {
    pub fn new(
        index: &'a A,
        points: &'a [[f64; 3]],
        edge: [usize; 2],
        frame: &'a EdgeFrame,
        side: Side,
        settings: &'a ProbeSettings,
    ) -> Self {
        let s = side.sign();
        Self {
            index,
            points,
            edge,
            frame,
            direction: [frame.normal[0] * s, frame.normal[1] * s],
            settings,
        }
    }

    /// Offset of the probe center from the midpoint at `step`.
    pub fn offset(&self, step: usize) -> f64 {
        self.settings.min_offset + step as f64 * self.settings.step
    }

    /// Performs one transition of the sweep.
    pub fn advance(&self, state: ProbeState) -> ProbeState {
        match state {
            ProbeState::Probing(step) => {
                let t = self.offset(step);
                if t > self.settings.max_offset {
                    return ProbeState::Exhausted;
                }
                match self.accept_within(t) {
                    Some(q) => ProbeState::Found(q),
                    None => ProbeState::Probing(step + 1),
                }
            }
            done => done,
        }
    }

    /// Runs the sweep to completion.
    pub fn run(&self) -> Option<usize> {
        let mut state = ProbeState::Probing(0);
        loop {
            state = self.advance(state);
            match state {
                ProbeState::Found(q) => return Some(q),
                ProbeState::Exhausted => return None,
                ProbeState::Probing(_) => {}
            }
        }
    }

    /// Picks the point swallowed by the circle centered at offset `t`, if any.
    ///
    /// Distances are planar: the circle lives in the XY plane and heights take no part.
    /// Only points strictly on the probed side count. When several are inside, the one whose
    /// circumcircle with the edge is reached first wins, then the lowest index.
    fn accept_within(&self, t: f64) -> Option<usize> {
        let [a, b] = self.edge;
        let m = self.frame.midpoint;
        let n = self.direction;
        let center = [m[0] + n[0] * t, m[1] + n[1] * t];

        let p0 = self.points[a];
        let ex = p0[0] - center[0];
        let ey = p0[1] - center[1];
        let radius_sq = ex * ex + ey * ey;

        let mut best: Option<(f64, usize)> = None;
        self.index.visit_neighbors(cell_of(center[0], center[1]), self.settings.search_radius, |j| {
            if j == a || j == b {
                return;
            }
            let q = self.points[j];

            let rx = q[0] - m[0];
            let ry = q[1] - m[1];
            let along = rx * n[0] + ry * n[1];
            if along <= 0.0 {
                return;
            }

            let dx = q[0] - center[0];
            let dy = q[1] - center[1];
            if dx * dx + dy * dy > radius_sq {
                return;
            }

            let circumcenter = (rx * rx + ry * ry - self.frame.half_len_sq) / (2.0 * along);
            match best {
                Some((o, i)) if o < circumcenter || (o == circumcenter && i < j) => {}
                _ => best = Some((circumcenter, j)),
            }
        });

        best.map(|(_, j)| j)
    }
}
