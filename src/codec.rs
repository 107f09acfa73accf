//! Szudzik pairing of signed coordinates into a single signed key.
//!
//! See <http://szudzik.com/ElegantPairing.pdf>.

use crate::LifeError;

/// Largest supported absolute value of a coordinate.
///
/// Folded values stay below `2^31 + 1`, so the pairing (which squares them)
/// stays below `2^63`.
pub const MAX_COORDINATE: i64 = 1 << 30;

/// Maps a signed integer onto a non-negative one: `0, -1, 1, -2, 2, ...`
/// become `0, 1, 2, 3, 4, ...`.
#[inline]
fn fold(v: i64) -> u64 {
    if v >= 0 {
        (v as u64) << 1
    } else {
        ((-v) as u64 * 2) - 1
    }
}

#[inline]
fn unfold(v: u64) -> i64 {
    if v % 2 == 0 {
        (v / 2) as i64
    } else {
        -(((v / 2) + 1) as i64)
    }
}

/// Floor of the square root, exact for the whole `u64` range.
fn isqrt(z: u64) -> u64 {
    let mut r = (z as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > z) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= z) {
        r += 1;
    }
    r
}

/// Returns `true` if `(x, y)` can be encoded without collisions.
#[inline]
pub fn in_range(x: i64, y: i64) -> bool {
    (-MAX_COORDINATE..=MAX_COORDINATE).contains(&x)
        && (-MAX_COORDINATE..=MAX_COORDINATE).contains(&y)
}

/// Encodes `(x, y)` into a unique non-negative key.
pub fn encode(x: i64, y: i64) -> Result<i64, LifeError> {
    if in_range(x, y) {
        Ok(pair(x, y))
    } else {
        Err(LifeError::CoordinateOutOfRange { x, y })
    }
}

/// [`encode`] without the range check; `(x, y)` must satisfy [`in_range`].
#[inline]
pub fn pair(x: i64, y: i64) -> i64 {
    debug_assert!(in_range(x, y), "({}, {}) cannot be paired", x, y);
    let (a, b) = (fold(x), fold(y));
    let key = if a < b { b * b + a } else { a * a + a + b };
    key as i64
}

/// Inverse of [`encode`].
///
/// Keys that `encode` never produces decode to some coordinate without
/// panicking; the result is meaningless.
pub fn decode(key: i64) -> (i64, i64) {
    let z = key as u64;
    let root = isqrt(z);
    let rem = z - root * root;
    let (a, b) = if rem < root {
        (rem, root)
    } else {
        (root, rem - root)
    };
    (unfold(a), unfold(b))
}
