//! Static floor plan of the library hall.
//!
//! The plan is a declarative list of axis-aligned rectangular footprints in
//! the horizontal plane plus an overall bounding rectangle. It is authored
//! once at scene construction and never changes afterwards; the collision
//! predicate is a pure function of it. The renderer draws the same records,
//! so whatever is visible is also what blocks movement.

use glam::Vec3;

use crate::constants::{
    BAY_SPACING, FIRST_BAY_Z, FLOOR_MAX_X, FLOOR_MAX_Z, FLOOR_MIN_X, FLOOR_MIN_Z, HALL_OFFSETS_X,
    NUM_BAYS,
};

/// What a footprint stands for. Only the renderer cares; collision treats
/// every kind the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixtureKind {
    Column,
    Bust,
    Bookshelf,
    Desk,
}

/// Axis-aligned rectangle in the floor plane: center and half extents.
#[derive(Clone, Copy, Debug)]
pub struct Footprint {
    pub kind: FixtureKind,
    pub center_x: f32,
    pub center_z: f32,
    pub half_w: f32,
    pub half_d: f32,
}

impl Footprint {
    pub fn new(kind: FixtureKind, center_x: f32, center_z: f32, width: f32, depth: f32) -> Self {
        Self {
            kind,
            center_x,
            center_z,
            half_w: width / 2.0,
            half_d: depth / 2.0,
        }
    }

    /// Point-in-rectangle test with the footprint grown by `clearance` on
    /// every side.
    #[inline]
    pub fn contains(&self, x: f32, z: f32, clearance: f32) -> bool {
        let hw = self.half_w + clearance;
        let hd = self.half_d + clearance;
        x > self.center_x - hw && x < self.center_x + hw && z > self.center_z - hd && z < self.center_z + hd
    }
}

/// Overall walkable rectangle. Candidates outside it are rejected outright.
#[derive(Clone, Copy, Debug)]
pub struct FloorBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl FloorBounds {
    /// True when the point sits inside the bounds shrunk inward by
    /// `clearance`.
    #[inline]
    pub fn contains(&self, x: f32, z: f32, clearance: f32) -> bool {
        x >= self.min_x + clearance
            && x <= self.max_x - clearance
            && z >= self.min_z + clearance
            && z <= self.max_z - clearance
    }
}

#[derive(Clone, Debug)]
pub struct FloorPlan {
    pub bounds: FloorBounds,
    pub fixtures: Vec<Footprint>,
}

impl FloorPlan {
    /// Build the library hall: two reception desks near the entrance, then
    /// three parallel halls each with eight repeating bays of columns,
    /// busts and bookshelf rows.
    pub fn library() -> Self {
        let mut fixtures = Vec::with_capacity(2 + HALL_OFFSETS_X.len() * NUM_BAYS * 6);

        // Reception and language desks, sized to leave the side aisles open.
        fixtures.push(Footprint::new(FixtureKind::Desk, -5.0, 8.0, 2.5, 1.2));
        fixtures.push(Footprint::new(FixtureKind::Desk, 5.0, 8.0, 1.6, 1.2));

        for &hall_x in &HALL_OFFSETS_X {
            for bay in 0..NUM_BAYS {
                let bay_z = FIRST_BAY_Z - bay as f32 * BAY_SPACING;
                let col_z = bay_z + 3.0;

                // Structural columns at the bay ends.
                let col = 1.1;
                fixtures.push(Footprint::new(FixtureKind::Column, hall_x - 6.0, col_z, col, col));
                fixtures.push(Footprint::new(FixtureKind::Column, hall_x + 6.0, col_z, col, col));

                // Marble busts, aligned with the columns.
                let bust = 0.4;
                fixtures.push(Footprint::new(FixtureKind::Bust, hall_x - 3.5, col_z, bust, bust));
                fixtures.push(Footprint::new(FixtureKind::Bust, hall_x + 3.5, col_z, bust, bust));

                // Bookshelf rows centered in the bay, one per side.
                let (shelf_w, shelf_d) = (0.8, 4.8);
                fixtures.push(Footprint::new(
                    FixtureKind::Bookshelf,
                    hall_x - 7.5,
                    bay_z,
                    shelf_w,
                    shelf_d,
                ));
                fixtures.push(Footprint::new(
                    FixtureKind::Bookshelf,
                    hall_x + 7.5,
                    bay_z,
                    shelf_w,
                    shelf_d,
                ));
            }
        }

        Self {
            bounds: FloorBounds {
                min_x: FLOOR_MIN_X,
                max_x: FLOOR_MAX_X,
                min_z: FLOOR_MIN_Z,
                max_z: FLOOR_MAX_Z,
            },
            fixtures,
        }
    }

    /// Collision predicate for a candidate camera position. Pure with
    /// respect to the plan: the same candidate always yields the same
    /// answer. Height (y) is ignored; the library is a single walkable
    /// level.
    pub fn blocked(&self, candidate: Vec3, clearance: f32) -> bool {
        let (x, z) = (candidate.x, candidate.z);
        if !self.bounds.contains(x, z, clearance) {
            return true;
        }
        self.fixtures.iter().any(|f| f.contains(x, z, clearance))
    }
}
