use crate::constants::{
    DRIFT_MAX_RADIUS, DRIFT_SPEED, MIN_STAR_RADIUS, STAR_COUNT, WARP_MAX_RADIUS, WARP_SPEED,
};
use glam::Vec2;
use rand::prelude::*;

/// One star particle. `x`/`y` are offsets from screen center, `z` is virtual
/// depth in `(0, far_plane]`. Particles are recycled in place at the near
/// clip, never destroyed.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Screen-space placement of one star for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct Projected {
    pub pos: Vec2,
    /// Tail position one tick back, for warp streaks.
    pub tail: Vec2,
    /// Dot radius (drift) or streak width (warp); grows as depth shrinks.
    pub radius: f32,
    /// Streak opacity; approaches 1.0 at the near clip.
    pub alpha: f32,
}

pub struct StarField {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    // Pinhole focal length, fixed at construction.
    focal_length: f32,
    rng: StdRng,
}

impl StarField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cx = width / 2.0;
        let cy = height / 2.0;
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen::<f32>() * width - cx,
                y: rng.gen::<f32>() * height - cy,
                z: rng.gen::<f32>() * width,
            })
            .collect();
        Self {
            stars,
            width,
            height,
            focal_length: width,
            rng,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Depth value a recycled particle is reset to.
    pub fn far_plane(&self) -> f32 {
        self.width
    }

    /// Track the drawing surface. Recenters projection only; existing
    /// particle positions are not renormalized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn speed(warping: bool) -> f32 {
        if warping {
            WARP_SPEED
        } else {
            DRIFT_SPEED
        }
    }

    /// Advance every particle one frame, recycling any that crossed the near
    /// clip back to the far plane with a fresh lateral offset.
    pub fn step(&mut self, warping: bool) {
        let speed = Self::speed(warping);
        let far = self.far_plane();
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        for star in &mut self.stars {
            star.z -= speed;
            if star.z <= 0.0 {
                star.z = far;
                star.x = self.rng.gen::<f32>() * self.width - cx;
                star.y = self.rng.gen::<f32>() * self.height - cy;
            }
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Project a star to screen space at an arbitrary depth.
    fn project_at(&self, star: &Star, z: f32) -> Vec2 {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        Vec2::new(
            (star.x / z) * self.focal_length + cx,
            (star.y / z) * self.focal_length + cy,
        )
    }

    /// Current-frame placement of one star. The tail re-projects at
    /// `z + 2 * speed`, i.e. where the particle was one tick ago.
    pub fn project(&self, star: &Star, warping: bool) -> Projected {
        let speed = Self::speed(warping);
        let max_radius = if warping {
            WARP_MAX_RADIUS
        } else {
            DRIFT_MAX_RADIUS
        };
        let depth_norm = (star.z / self.width).clamp(0.0, 1.0);
        Projected {
            pos: self.project_at(star, star.z),
            tail: self.project_at(star, star.z + speed * 2.0),
            radius: ((1.0 - depth_norm) * max_radius).max(MIN_STAR_RADIUS),
            alpha: 1.0 - depth_norm,
        }
    }
}
