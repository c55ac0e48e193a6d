//! Pluggable population strategies for [`HexArray`](crate::HexArray).
//!
//! A [`TupleGenerator`] decides which cells exist and the order they are
//! visited in; a [`DataGenerator`] fills a cell's payload from its tuple.
//! Plain closures implement both traits.

use bevy::prelude::*;
use hexx::{Hex, shapes};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::layout::ScreenLayout;
use crate::math;
use crate::orientation::OffsetLayout;
use crate::tuple::Tuple;

/// Produces the finite sequence of cube tuples a container is built from and
/// iterated in.
pub trait TupleGenerator: Send + Sync {
    /// The tuples, in visiting order.
    fn tuples(&self) -> Box<dyn Iterator<Item = Tuple> + '_>;
}

impl<F, I> TupleGenerator for F
where
    F: Fn() -> I + Send + Sync,
    I: IntoIterator<Item = Tuple>,
    I::IntoIter: 'static,
{
    fn tuples(&self) -> Box<dyn Iterator<Item = Tuple> + '_> {
        Box::new(self().into_iter())
    }
}

/// Produces the payload for a generated cell.
pub trait DataGenerator<T>: Send + Sync {
    /// Payload for the cell at `index`.
    fn generate(&self, index: &Tuple) -> T;
}

impl<T, F> DataGenerator<T> for F
where
    F: Fn(&Tuple) -> T + Send + Sync,
{
    fn generate(&self, index: &Tuple) -> T {
        self(index)
    }
}

/// Every cell of a `width` x `height` offset grid, row by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetRectangle {
    /// Maps offset positions to cube tuples.
    pub layout: OffsetLayout,
    /// Columns.
    pub width: i32,
    /// Rows.
    pub height: i32,
}

impl TupleGenerator for OffsetRectangle {
    fn tuples(&self) -> Box<dyn Iterator<Item = Tuple> + '_> {
        let Self {
            layout,
            width,
            height,
        } = *self;
        Box::new((0..height).flat_map(move |y| (0..width).map(move |x| layout.cube_at(x, y))))
    }
}

/// Every hex within `radius` steps of `center`, innermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hexagon {
    /// Middle hex.
    pub center: Tuple,
    /// Largest distance from `center`; 0 is a single hex.
    pub radius: u32,
}

impl TupleGenerator for Hexagon {
    fn tuples(&self) -> Box<dyn Iterator<Item = Tuple> + '_> {
        let [cx, cy, cz] = self.center.cube_entries();
        // Map through hexx's axial coordinates; the disk is symmetric, so the
        // axis assignment does not matter.
        let mut hexes: Vec<Hex> = shapes::hexagon(Hex::ZERO, self.radius).collect();
        hexes.sort_by_key(|h| h.length());
        Box::new(
            hexes
                .into_iter()
                .map(move |h| Tuple::cube(cx + h.x, cy + h.y, cz + h.z())),
        )
    }
}

/// Noise parameters for [`NoiseHeight`].
#[derive(Clone, Debug, Reflect)]
pub struct NoiseSettings {
    /// Seed for the fractal noise.
    pub seed: u32,
    /// Number of noise octaves.
    pub octaves: usize,
    /// Spatial scale divisor applied to world positions before sampling.
    pub scale: f64,
    /// Largest height produced; the smallest is zero.
    pub max_height: f32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            octaves: 4,
            scale: 50.0,
            max_height: 10.0,
        }
    }
}

/// Terrain-style heights sampled from fractal Perlin noise at each hex's world
/// position.
pub struct NoiseHeight {
    fbm: Fbm<Perlin>,
    scale: f64,
    max_height: f32,
    layout: ScreenLayout,
}

impl NoiseHeight {
    /// A height generator sampling at `layout`'s world positions.
    pub fn new(settings: &NoiseSettings, layout: ScreenLayout) -> Self {
        Self {
            fbm: Fbm::new(settings.seed).set_octaves(settings.octaves),
            scale: settings.scale,
            max_height: settings.max_height,
            layout,
        }
    }
}

impl DataGenerator<f32> for NoiseHeight {
    fn generate(&self, index: &Tuple) -> f32 {
        let pos = self.layout.hex_position(index);
        let noise_val = self
            .fbm
            .get([pos.x as f64 / self.scale, pos.y as f64 / self.scale]);
        math::map_noise_to_range(noise_val, 0.0, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;
    use bevy::platform::collections::HashSet;

    #[test]
    fn rectangle_yields_width_times_height_distinct_hexes() {
        let generator = OffsetRectangle {
            layout: OffsetLayout::new(Orientation::FlatTop, 1),
            width: 5,
            height: 4,
        };
        let tuples: Vec<Tuple> = generator.tuples().collect();
        assert_eq!(tuples.len(), 20);
        assert!(tuples.iter().all(|t| t.sum() == 0));
        assert_eq!(tuples.iter().collect::<HashSet<_>>().len(), 20);
    }

    #[test]
    fn rectangle_is_row_major() {
        let layout = OffsetLayout::new(Orientation::PointyTop, 0);
        let generator = OffsetRectangle {
            layout,
            width: 3,
            height: 2,
        };
        let offsets: Vec<Tuple> = generator.tuples().map(|t| layout.offset_of(&t)).collect();
        assert_eq!(offsets[0], Tuple::offset(0, 0));
        assert_eq!(offsets[1], Tuple::offset(1, 0));
        assert_eq!(offsets[3], Tuple::offset(0, 1));
    }

    #[test]
    fn hexagon_has_centered_hex_count() {
        for radius in 0..5u32 {
            let generator = Hexagon {
                center: Tuple::cube(2, -3, 1),
                radius,
            };
            let r = radius as usize;
            assert_eq!(generator.tuples().count(), 3 * r * (r + 1) + 1);
        }
    }

    #[test]
    fn hexagon_starts_at_center_and_stays_in_range() {
        let center = Tuple::cube(2, -3, 1);
        let generator = Hexagon { center, radius: 2 };
        let tuples: Vec<Tuple> = generator.tuples().collect();
        assert_eq!(tuples[0], center);
        for t in tuples {
            let d = t.add(&center.mult(-1)).unwrap();
            let dist = d.entries().iter().map(|c| c.abs()).max().unwrap_or(0);
            assert!(dist <= 2, "{t} too far from {center}");
        }
    }

    #[test]
    fn closures_are_generators() {
        let tuples = || vec![Tuple::cube(0, 0, 0), Tuple::cube(1, -1, 0)];
        assert_eq!(tuples.tuples().count(), 2);
        let data = |t: &Tuple| t.sum() + 7;
        assert_eq!(data.generate(&Tuple::cube(1, -1, 0)), 7);
    }

    #[test]
    fn noise_heights_are_deterministic() {
        let settings = NoiseSettings::default();
        let layout = ScreenLayout::new(Orientation::PointyTop, 4.0);
        let a = NoiseHeight::new(&settings, layout.clone());
        let b = NoiseHeight::new(&settings, layout);
        let disk = Hexagon {
            center: Tuple::cube(0, 0, 0),
            radius: 3,
        };
        for t in disk.tuples() {
            let h = a.generate(&t);
            assert!(h.is_finite());
            assert_eq!(h, b.generate(&t));
        }
    }
}
