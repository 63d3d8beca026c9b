//! Procedural terrain for any dimensionality.
//!
//! Heights come from OpenSimplex2 fBm noise normalized to [0, 1]. One and two
//! axis grids sample the 2-D noise plane; three or more axes sample 3-D noise,
//! with every axis past the third folded into the z coordinate.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::config::{
    TERRAIN_BASE_FREQUENCY, TERRAIN_LACUNARITY, TERRAIN_OCTAVES, TERRAIN_PERSISTENCE,
};
use crate::grid::Grid;

/// Spacing between folded slices of axes beyond the third.
const FOLD_OFFSET: f32 = 1024.0;

fn fbm_noise(seed: u64) -> FastNoiseLite {
    let mut noise = FastNoiseLite::with_seed(seed as i32);
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(TERRAIN_BASE_FREQUENCY));
    noise.set_fractal_type(Some(FractalType::FBm));
    noise.set_fractal_octaves(Some(TERRAIN_OCTAVES));
    noise.set_fractal_gain(Some(TERRAIN_PERSISTENCE));
    noise.set_fractal_lacunarity(Some(TERRAIN_LACUNARITY));
    noise
}

fn sample(noise: &FastNoiseLite, coords: &[usize]) -> f32 {
    let axis = |i: usize| coords.get(i).map_or(0.0, |&c| c as f32);
    let raw = if coords.len() <= 2 {
        noise.get_noise_2d(axis(0), axis(1))
    } else {
        let folded: f32 = coords[3..]
            .iter()
            .enumerate()
            .map(|(i, &c)| (c as f32 + 1.0) * FOLD_OFFSET * (i + 1) as f32)
            .sum();
        noise.get_noise_3d(axis(0), axis(1), axis(2) + folded)
    };
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
}

/// Generate a seeded terrain grid with the given logical sizes.
///
/// Sentinel cells stay at zero. Identical seeds give identical grids.
pub fn generate_heights(sizes: &[usize], seed: u64) -> Grid<f32> {
    let noise = fbm_noise(seed);
    let mut grid = Grid::new(sizes.to_vec());
    for index in grid.real_indices() {
        let Some(coords) = grid.coords_of(index) else {
            continue;
        };
        *grid.height_mut(&coords) = sample(&noise, &coords);
    }
    grid
}
