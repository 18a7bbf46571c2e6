use std::fmt::Debug;

use rand::Rng;
use thiserror::Error;

/// A numeric element of a dataset.
///
/// `Record` is implemented for every primitive integer type and for `f32` and
/// `f64`. It gives experiments what they need from a dataset element without
/// tying them to one numeric type: a finiteness check, a lossy view as `f64`
/// for statistics, and a way to draw a new element between two existing ones.
pub trait Record: Copy + PartialOrd + Debug {
    /// Returns `true` if the record is a usable number.
    ///
    /// Integers are always finite. Floats reject NaN and infinities.
    fn is_finite(&self) -> bool;

    /// Returns the record as an `f64`, rounding if necessary.
    fn to_f64(self) -> f64;

    /// Draws a record uniformly from the inclusive integer interval `[min, max]`.
    ///
    /// For integer types this is the ordinary inclusive range.
    /// For float types the result is an integer-valued float in
    /// `[ceil(min), floor(max)]`.
    ///
    /// Callers must ensure `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::NoIntegerInRange`] if a float interval contains
    /// no integer, for example `[0.2, 0.8]`.
    fn sample_inclusive<R: Rng + ?Sized>(
        min: Self,
        max: Self,
        rng: &mut R,
    ) -> Result<Self, SampleError>;
}

/// An error returned when a record cannot be drawn from an interval.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error("no integer lies within [{min}, {max}]")]
    NoIntegerInRange { min: f64, max: f64 },
}

macro_rules! impl_integer_record {
    ($($t:ty),* $(,)?) => {$(
        impl Record for $t {
            fn is_finite(&self) -> bool {
                true
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn sample_inclusive<R: Rng + ?Sized>(
                min: Self,
                max: Self,
                rng: &mut R,
            ) -> Result<Self, SampleError> {
                Ok(rng.random_range(min..=max))
            }
        }
    )*};
}

macro_rules! impl_float_record {
    ($($t:ty),* $(,)?) => {$(
        impl Record for $t {
            fn is_finite(&self) -> bool {
                <$t>::is_finite(*self)
            }

            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn sample_inclusive<R: Rng + ?Sized>(
                min: Self,
                max: Self,
                rng: &mut R,
            ) -> Result<Self, SampleError> {
                let lo = min.ceil();
                let hi = max.floor();
                if lo > hi {
                    return Err(SampleError::NoIntegerInRange {
                        min: min as f64,
                        max: max as f64,
                    });
                }

                // Past the mantissa width an integer offset cannot be added
                // exactly, so draw a float across the interval and round down.
                let exact = (2.0 as $t).powi(<$t>::MANTISSA_DIGITS as i32);
                let span = hi - lo;
                if span > exact {
                    let t: $t = rng.random();
                    let value = lo * (1.0 - t) + hi * t;
                    return Ok(value.floor().clamp(lo, hi));
                }

                // Offsets are drawn as integers so every integer in the
                // interval is equally likely.
                let offset = rng.random_range(0..=span as u64);
                Ok(lo + offset as $t)
            }
        }
    )*};
}

impl_integer_record!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

// `rand` has no uniform sampler for `isize`, so draw through `i64`.
impl Record for isize {
    fn is_finite(&self) -> bool {
        true
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sample_inclusive<R: Rng + ?Sized>(
        min: Self,
        max: Self,
        rng: &mut R,
    ) -> Result<Self, SampleError> {
        let value = rng.random_range(min as i64..=max as i64);
        Ok(value as isize)
    }
}
impl_float_record!(f32, f64);
