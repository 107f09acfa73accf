use crate::LifeError;
use anyhow::{anyhow, Context, Result};
use std::{fmt, str::FromStr};

/// Birth/survival rule of a life-like automaton.
///
/// Both sets are stored as bitmasks over neighbor counts `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Rule {
    pub const MAX_COUNT: u8 = 8;

    /// Builds a rule from the neighbor counts that cause birth and survival.
    ///
    /// Fails with [`LifeError::InvalidRule`] if any count exceeds 8.
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self, LifeError> {
        Ok(Self {
            birth: Self::mask(birth)?,
            survival: Self::mask(survival)?,
        })
    }

    fn mask(counts: &[u8]) -> Result<u16, LifeError> {
        counts.iter().try_fold(0u16, |mask, &count| {
            if count > Self::MAX_COUNT {
                Err(LifeError::InvalidRule { count })
            } else {
                Ok(mask | (1 << count))
            }
        })
    }

    /// B3/S23
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// B36/S23, has a small replicator.
    pub const fn highlife() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6),
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// B3678/S34678
    pub const fn day_and_night() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
            survival: (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
        }
    }

    /// B2/S, every live cell dies each generation.
    pub const fn seeds() -> Self {
        Self {
            birth: 1 << 2,
            survival: 0,
        }
    }

    #[inline]
    pub fn is_birth(&self, count: u8) -> bool {
        count <= Self::MAX_COUNT && (self.birth >> count) & 1 != 0
    }

    #[inline]
    pub fn is_survival(&self, count: u8) -> bool {
        count <= Self::MAX_COUNT && (self.survival >> count) & 1 != 0
    }

    /// Birth counts in increasing order.
    pub fn birth_counts(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=Self::MAX_COUNT).filter(|&c| self.is_birth(c))
    }

    /// Survival counts in increasing order.
    pub fn survival_counts(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=Self::MAX_COUNT).filter(|&c| self.is_survival(c))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for Rule {
    /// Formats as a rulestring, e.g. `B3/S23`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for c in self.birth_counts() {
            write!(f, "{}", c)?;
        }
        write!(f, "/S")?;
        for c in self.survival_counts() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = anyhow::Error;

    /// Parses `B3/S23` style rulestrings (case-insensitive, either order).
    fn from_str(s: &str) -> Result<Self> {
        let parse_counts = |part: &str| -> Result<Vec<u8>> {
            part.chars()
                .map(|ch| {
                    ch.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| anyhow!("unexpected symbol {:?}", ch))
                })
                .collect()
        };

        let (mut birth, mut survival) = (None, None);
        for part in s.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next() {
                Some('B' | 'b') => &mut birth,
                Some('S' | 's') => &mut survival,
                _ => return Err(anyhow!("rule section {:?} must start with B or S", part)),
            };
            if slot.is_some() {
                return Err(anyhow!("duplicate section {:?}", part));
            }
            *slot = Some(parse_counts(chars.as_str()).with_context(|| format!("in {:?}", s))?);
        }

        let (birth, survival) = match (birth, survival) {
            (Some(b), Some(s)) => (b, s),
            _ => return Err(anyhow!("rule {:?} must have both B and S sections", s)),
        };
        Ok(Rule::new(&birth, &survival)?)
    }
}
