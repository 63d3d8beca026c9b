//! Cell height values.
//!
//! The solver is generic over the height type so callers can flood integer
//! terrain (exact volumes) or floating-point terrain. Bucket keys need a total
//! order, which floats only provide through `total_cmp`, so every height type
//! exposes one via [`Height::level_cmp`].
//!
//! Volumes are summed in a wider [`Height::Volume`] type. Integer depths and
//! volumes saturate instead of wrapping. Float heights must be finite: grid
//! constructors reject NaN and infinities, and the solver gives no guarantees
//! for non-finite values written into a grid afterwards.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// A value that can be stored per cell and flooded.
pub trait Height:
    Copy + Default + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Debug + Send + Sync + 'static
{
    /// Accumulator for summed depths.
    type Volume: Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static;

    /// Depth of a dry cell.
    const ZERO: Self;

    /// Total order used to key height buckets.
    fn level_cmp(&self, other: &Self) -> Ordering;

    /// Depth of water standing at `level` over ground at `self`.
    fn depth_below(self, level: Self) -> Self;

    /// `volume` plus one cell's `depth`.
    fn accumulate(volume: Self::Volume, depth: Self) -> Self::Volume;

    /// Whether a grid may hold this value.
    fn is_valid(self) -> bool;
}

macro_rules! impl_integer_height {
    ($($t:ty => $volume:ty),*) => {
        $(
            impl Height for $t {
                type Volume = $volume;

                const ZERO: Self = 0;

                #[inline]
                fn level_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn depth_below(self, level: Self) -> Self {
                    level.saturating_sub(self)
                }

                #[inline]
                fn accumulate(volume: $volume, depth: Self) -> $volume {
                    volume.saturating_add(<$volume>::from(depth))
                }

                #[inline]
                fn is_valid(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_float_height {
    ($($t:ty),*) => {
        $(
            impl Height for $t {
                type Volume = f64;

                const ZERO: Self = 0.0;

                #[inline]
                fn level_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                #[inline]
                fn depth_below(self, level: Self) -> Self {
                    level - self
                }

                #[inline]
                fn accumulate(volume: f64, depth: Self) -> f64 {
                    volume + f64::from(depth)
                }

                #[inline]
                fn is_valid(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_integer_height!(i16 => i64, i32 => i64, i64 => i128);
impl_float_height!(f32, f64);

// ---------------------------------------------------------------------------
// Level: ordered bucket key
// ---------------------------------------------------------------------------

/// A height wrapped so it can key a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Level<H>(pub H);

impl<H: Height> PartialEq for Level<H> {
    fn eq(&self, other: &Self) -> bool {
        self.0.level_cmp(&other.0) == Ordering::Equal
    }
}

impl<H: Height> Eq for Level<H> {}

impl<H: Height> PartialOrd for Level<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: Height> Ord for Level<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.level_cmp(&other.0)
    }
}
