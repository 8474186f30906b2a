#![deny(unsafe_code)]
//! Interactive particle field engine.
//!
//! Simulates a fixed-size collection of drifting points in a bounded 2D
//! canvas. Each frame, every particle advances by its velocity, is pulled
//! toward a live cursor position when close enough, reflects off the canvas
//! edges, and is clamped back into bounds. Rendering draws each particle as
//! a filled circle in a blue-cyan band and connects nearby pairs with lines
//! whose opacity fades with distance, producing a constellation effect.
//!
//! The field knows nothing about the screen: it emits primitives through
//! the [`DrawSurface`] seam and receives cursor position and canvas
//! dimensions as plain values, so it can be driven and asserted on without
//! a rendering environment.

use constellation_core::color::{hsl_to_srgb, Hsl, Srgb};
use constellation_core::error::FieldError;
use constellation_core::params::{param_bool, param_f64, param_usize};
use constellation_core::prng::SplitMix64;
use constellation_core::surface::DrawSurface;
use glam::DVec2;
use serde_json::{json, Value};

/// Default number of particles.
const DEFAULT_COUNT: usize = 50;
/// Default per-axis velocity bound: components are drawn from [-v, v).
const DEFAULT_MAX_SPEED: f64 = 0.25;
/// Default radius of the cursor's influence circle.
const DEFAULT_CURSOR_RADIUS: f64 = 100.0;
/// Default strength of the cursor pull applied to position.
const DEFAULT_CURSOR_STRENGTH: f64 = 0.01;
/// Default distance under which two particles are linked.
const DEFAULT_LINK_RADIUS: f64 = 80.0;
/// Default link opacity at distance zero; fades linearly to 0 at the radius.
const DEFAULT_LINK_ALPHA: f64 = 0.1;
/// Default stroke width for link lines.
const DEFAULT_LINE_WIDTH: f64 = 0.5;

/// Particle radius range [min, max).
const RADIUS_RANGE: (f64, f64) = (1.0, 3.0);
/// Particle opacity range [min, max).
const OPACITY_RANGE: (f64, f64) = (0.2, 0.7);
/// Particle hue range [min, max) in degrees — the blue-cyan band.
const HUE_RANGE: (f64, f64) = (180.0, 240.0);
/// Fixed saturation and lightness of every particle color.
const SATURATION: f64 = 0.7;
const LIGHTNESS: f64 = 0.6;

/// Tunable constants of the particle field.
///
/// Use [`Default`] for the classic look (50 particles, 100-unit cursor
/// circle, 80-unit links).
#[derive(Debug, Clone, Copy)]
pub struct FieldParams {
    /// Number of particles created at construction.
    pub count: usize,
    /// Per-axis velocity bound: components are drawn from [-max_speed, max_speed).
    pub max_speed: f64,
    /// Radius of the cursor's influence circle.
    pub cursor_radius: f64,
    /// Strength of the cursor pull applied directly to position.
    pub cursor_strength: f64,
    /// Distance under which two particles are linked.
    pub link_radius: f64,
    /// Link opacity at distance zero.
    pub link_alpha: f64,
    /// Stroke width for link lines.
    pub line_width: f64,
    /// Accessibility override: when set, the field is created empty and
    /// never animates.
    pub reduced_motion: bool,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            max_speed: DEFAULT_MAX_SPEED,
            cursor_radius: DEFAULT_CURSOR_RADIUS,
            cursor_strength: DEFAULT_CURSOR_STRENGTH,
            link_radius: DEFAULT_LINK_RADIUS,
            link_alpha: DEFAULT_LINK_ALPHA,
            line_width: DEFAULT_LINE_WIDTH,
            reduced_motion: false,
        }
    }
}

impl FieldParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            count: param_usize(params, "count", DEFAULT_COUNT),
            max_speed: param_f64(params, "max_speed", DEFAULT_MAX_SPEED),
            cursor_radius: param_f64(params, "cursor_radius", DEFAULT_CURSOR_RADIUS),
            cursor_strength: param_f64(params, "cursor_strength", DEFAULT_CURSOR_STRENGTH),
            link_radius: param_f64(params, "link_radius", DEFAULT_LINK_RADIUS),
            link_alpha: param_f64(params, "link_alpha", DEFAULT_LINK_ALPHA),
            line_width: param_f64(params, "line_width", DEFAULT_LINE_WIDTH),
            reduced_motion: param_bool(params, "reduced_motion", false),
        }
    }

    /// Schema describing all available parameters, their types, ranges, and defaults.
    pub fn schema() -> Value {
        json!({
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "min": 0,
                "max": 500,
                "description": "Number of particles created at construction"
            },
            "max_speed": {
                "type": "number",
                "default": DEFAULT_MAX_SPEED,
                "min": 0.0,
                "max": 5.0,
                "description": "Per-axis velocity bound for newly created particles"
            },
            "cursor_radius": {
                "type": "number",
                "default": DEFAULT_CURSOR_RADIUS,
                "min": 0.0,
                "max": 1000.0,
                "description": "Radius of the cursor's influence circle"
            },
            "cursor_strength": {
                "type": "number",
                "default": DEFAULT_CURSOR_STRENGTH,
                "min": 0.0,
                "max": 1.0,
                "description": "Strength of the cursor pull applied to position"
            },
            "link_radius": {
                "type": "number",
                "default": DEFAULT_LINK_RADIUS,
                "min": 0.0,
                "max": 1000.0,
                "description": "Distance under which two particles are linked"
            },
            "link_alpha": {
                "type": "number",
                "default": DEFAULT_LINK_ALPHA,
                "min": 0.0,
                "max": 1.0,
                "description": "Link opacity at distance zero"
            },
            "line_width": {
                "type": "number",
                "default": DEFAULT_LINE_WIDTH,
                "min": 0.0,
                "max": 10.0,
                "description": "Stroke width for link lines"
            },
            "reduced_motion": {
                "type": "boolean",
                "default": false,
                "description": "Create the field empty so nothing animates"
            }
        })
    }
}

/// A single simulated point.
///
/// Position and velocity evolve each frame; radius, opacity, and hue are
/// drawn once at creation and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub opacity: f64,
    pub hue: f64,
}

impl Particle {
    /// Draws a fresh particle from `rng`: uniform position within the
    /// canvas, velocity components in [-max_speed, max_speed), and fixed
    /// visual attributes from their creation ranges.
    fn spawn(rng: &mut SplitMix64, width: f64, height: f64, max_speed: f64) -> Self {
        Self {
            pos: DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height)),
            vel: DVec2::new(
                rng.next_range(-max_speed, max_speed),
                rng.next_range(-max_speed, max_speed),
            ),
            radius: rng.next_range(RADIUS_RANGE.0, RADIUS_RANGE.1),
            opacity: rng.next_range(OPACITY_RANGE.0, OPACITY_RANGE.1),
            hue: rng.next_range(HUE_RANGE.0, HUE_RANGE.1),
        }
    }

    /// The particle's fill color: HSL(hue, 70%, 60%) in sRGB.
    pub fn color(&self) -> Srgb {
        hsl_to_srgb(Hsl {
            h: self.hue,
            s: SATURATION,
            l: LIGHTNESS,
        })
    }
}

/// Opacity of a link line between two particles `distance` apart.
///
/// Fades linearly from `max_alpha` at distance 0 to exactly 0 at
/// `link_radius`; any distance at or beyond the radius yields 0.
pub fn link_alpha(distance: f64, link_radius: f64, max_alpha: f64) -> f64 {
    if distance >= link_radius {
        0.0
    } else {
        max_alpha * (1.0 - distance / link_radius)
    }
}

/// The particle field: a bounded canvas full of drifting, linkable points.
///
/// Construction seeds the particle collection deterministically; the count
/// then stays constant for the field's lifetime. The one exception is
/// [`Field::reduce_motion`], which empties the collection for good —
/// `advance` and `draw` on an empty field do nothing, so the caller's frame
/// loop can keep firing at zero cost instead of needing a cancellation
/// signal.
#[derive(Debug, Clone)]
pub struct Field {
    width: f64,
    height: f64,
    params: FieldParams,
    particles: Vec<Particle>,
}

impl Field {
    /// Creates a field of `params.count` particles within a
    /// `width` x `height` canvas, seeded deterministically.
    ///
    /// When `params.reduced_motion` is set the field is created empty;
    /// that is the accessibility override, not an error. Returns
    /// `FieldError::InvalidDimensions` if width or height is zero.
    pub fn new(width: u32, height: u32, seed: u64, params: FieldParams) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let (w, h) = (f64::from(width), f64::from(height));
        let particles = if params.reduced_motion {
            Vec::new()
        } else {
            let mut rng = SplitMix64::new(seed);
            (0..params.count)
                .map(|_| Particle::spawn(&mut rng, w, h, params.max_speed))
                .collect()
        };
        Ok(Self {
            width: w,
            height: h,
            params,
            particles,
        })
    }

    /// Creates a field from a JSON params object, falling back to defaults
    /// for missing keys.
    pub fn from_json(
        width: u32,
        height: u32,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, FieldError> {
        Self::new(width, height, seed, FieldParams::from_json(json_params))
    }

    /// Canvas width in units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Read-only access to the particle collection.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles currently in the field.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the field holds no particles (reduced motion, or count 0).
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current parameter values as a JSON object.
    pub fn params(&self) -> Value {
        json!({
            "count": self.params.count,
            "max_speed": self.params.max_speed,
            "cursor_radius": self.params.cursor_radius,
            "cursor_strength": self.params.cursor_strength,
            "link_radius": self.params.link_radius,
            "link_alpha": self.params.link_alpha,
            "line_width": self.params.line_width,
            "reduced_motion": self.params.reduced_motion,
        })
    }

    /// Advances the simulation by one frame.
    ///
    /// Per particle, in order: position moves by velocity; if the cursor is
    /// within `cursor_radius` the particle is pulled toward it by
    /// `(cursor_radius - d) / cursor_radius * cursor_strength` of the
    /// offset vector, applied to position rather than velocity (the pull
    /// feels like drag, not momentum); velocity components flip sign when
    /// the pre-clamp position has left the canvas on that axis; finally the
    /// position is clamped into bounds.
    ///
    /// The pull skips normalization, so a particle exactly under the cursor
    /// receives a zero impulse rather than NaN.
    pub fn advance(&mut self, cursor: DVec2) {
        let bounds = DVec2::new(self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;

            let to_cursor = cursor - p.pos;
            let d = to_cursor.length();
            if d < self.params.cursor_radius {
                let pull = (self.params.cursor_radius - d) / self.params.cursor_radius;
                p.pos += to_cursor * (pull * self.params.cursor_strength);
            }

            // Reflection is edge-triggered on the pre-clamp position.
            if p.pos.x < 0.0 || p.pos.x > bounds.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > bounds.y {
                p.vel.y = -p.vel.y;
            }

            p.pos = p.pos.clamp(DVec2::ZERO, bounds);
        }
    }

    /// Applies new canvas dimensions.
    ///
    /// Takes effect immediately but does not clamp: particles stranded
    /// outside newly-shrunk bounds are pulled back by the next `advance`,
    /// so one out-of-bounds frame may render. Returns
    /// `FieldError::InvalidDimensions` if width or height is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        self.width = f64::from(width);
        self.height = f64::from(height);
        Ok(())
    }

    /// Empties the particle collection in response to a reduced-motion
    /// preference arriving after startup.
    ///
    /// One-way: re-enabling motion means constructing a new field.
    pub fn reduce_motion(&mut self) {
        self.particles.clear();
    }

    /// Renders one frame: clear, then per particle a filled circle followed
    /// by link lines to every later particle within `link_radius`.
    ///
    /// An empty field emits no commands at all, including the clear. The
    /// pairwise scan is O(n^2); fine at the default count, but switch to a
    /// spatial bucket grid before scaling to hundreds of particles.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        if self.particles.is_empty() {
            return;
        }
        surface.clear();
        for (i, p) in self.particles.iter().enumerate() {
            surface.fill_circle(p.pos, p.radius, p.color(), p.opacity);

            for q in &self.particles[i + 1..] {
                let d = p.pos.distance(q.pos);
                if d < self.params.link_radius {
                    surface.stroke_line(
                        p.pos,
                        q.pos,
                        self.params.line_width,
                        p.color(),
                        link_alpha(d, self.params.link_radius, self.params.link_alpha),
                    );
                }
            }
        }
    }
}
