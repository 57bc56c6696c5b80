//! Typed flag sets for destinations and line metadata
//!
//! A [`FlagSet`] is a small copyable set over a fieldless enum. Members are
//! combined with `|`, tested with [`FlagSet::contains`] and always iterate in
//! declaration order, which is also the order destinations are written in.
//!
//! # Examples
//!
//! ```
//! use daily_logger::{Destination, Destinations};
//!
//! let destinations: Destinations = Destination::Stdout | Destination::File;
//! assert!(destinations.contains(Destination::File));
//! assert!(!destinations.contains(Destination::Stderr));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitOr, BitOrAssign};

/// A fieldless enum usable as a [`FlagSet`] member
pub trait Flag: Copy + Eq + 'static {
    /// Every variant, in iteration order (at most 32)
    const ALL: &'static [Self];

    /// Position of this variant in [`Flag::ALL`]
    fn index(self) -> u32;

    #[inline]
    fn bit(self) -> u32 {
        1 << self.index()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet<T: Flag> {
    bits: u32,
    _marker: PhantomData<T>,
}

impl<T: Flag> FlagSet<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn all() -> Self {
        T::ALL.iter().copied().collect()
    }

    #[inline]
    pub fn contains(&self, flag: T) -> bool {
        self.bits & flag.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub fn with(mut self, flag: T) -> Self {
        self.bits |= flag.bit();
        self
    }

    #[must_use]
    pub fn without(mut self, flag: T) -> Self {
        self.bits &= !flag.bit();
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(move |flag| self.contains(*flag))
    }
}

impl<T: Flag> Default for FlagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> From<T> for FlagSet<T> {
    fn from(flag: T) -> Self {
        Self::empty().with(flag)
    }
}

impl<T: Flag> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), FlagSet::with)
    }
}

impl<T: Flag> BitOr for FlagSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
            _marker: PhantomData,
        }
    }
}

impl<T: Flag> BitOrAssign<T> for FlagSet<T> {
    fn bitor_assign(&mut self, rhs: T) {
        self.bits |= rhs.bit();
    }
}

impl<T: Flag + fmt::Debug> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Flag + Serialize> Serialize for FlagSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Flag + Deserialize<'de>> Deserialize<'de> for FlagSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let flags = Vec::<T>::deserialize(deserializer)?;
        Ok(flags.into_iter().collect())
    }
}

/// Where a log line is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Stdout,
    Stderr,
    /// The current day's log file
    File,
}

impl Flag for Destination {
    const ALL: &'static [Self] = &[Destination::Stdout, Destination::Stderr, Destination::File];

    fn index(self) -> u32 {
        self as u32
    }
}

impl BitOr for Destination {
    type Output = Destinations;

    fn bitor(self, rhs: Self) -> Destinations {
        Destinations::from(self).with(rhs)
    }
}

impl BitOr<Destination> for Destinations {
    type Output = Destinations;

    fn bitor(self, rhs: Destination) -> Destinations {
        self.with(rhs)
    }
}

/// Metadata rendered in front of the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metadata {
    /// `YYYY/MM/DD`
    Date,
    /// `HH:MM:SS`
    Time,
    /// `HH:MM:SS.uuuuuu`, implies [`Metadata::Time`]
    Microseconds,
    /// `file:line` of the call site
    SourceLocation,
    /// Render the full source path instead of its file name
    FullPath,
    /// Render date and time in UTC instead of local time
    Utc,
    /// Put the prefix right before the message instead of at line start
    MsgPrefix,
}

impl Flag for Metadata {
    const ALL: &'static [Self] = &[
        Metadata::Date,
        Metadata::Time,
        Metadata::Microseconds,
        Metadata::SourceLocation,
        Metadata::FullPath,
        Metadata::Utc,
        Metadata::MsgPrefix,
    ];

    fn index(self) -> u32 {
        self as u32
    }
}

impl BitOr for Metadata {
    type Output = MetadataFlags;

    fn bitor(self, rhs: Self) -> MetadataFlags {
        MetadataFlags::from(self).with(rhs)
    }
}

impl BitOr<Metadata> for MetadataFlags {
    type Output = MetadataFlags;

    fn bitor(self, rhs: Metadata) -> MetadataFlags {
        self.with(rhs)
    }
}

pub type Destinations = FlagSet<Destination>;
pub type MetadataFlags = FlagSet<Metadata>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = Destination::Stdout | Destination::File;
        assert!(set.contains(Destination::Stdout));
        assert!(set.contains(Destination::File));
        assert!(!set.contains(Destination::Stderr));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iteration_order_is_declaration_order() {
        let set = Destinations::from(Destination::File) | Destination::Stderr | Destination::Stdout;
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![Destination::Stdout, Destination::Stderr, Destination::File]
        );
    }

    #[test]
    fn test_empty_and_all() {
        assert!(Destinations::empty().is_empty());
        assert_eq!(Destinations::all().len(), 3);
        assert_eq!(MetadataFlags::all().len(), Metadata::ALL.len());
        assert!(Destinations::all().without(Destination::File).contains(Destination::Stdout));
    }

    #[test]
    fn test_serde_as_list() {
        let flags = Metadata::Date | Metadata::Time | Metadata::SourceLocation;
        let json = serde_json::to_string(&flags).unwrap();
        assert_eq!(json, r#"["Date","Time","SourceLocation"]"#);

        let parsed: MetadataFlags = serde_json::from_str(r#"["Time","Date","Time"]"#).unwrap();
        assert_eq!(parsed, Metadata::Date | Metadata::Time);
    }

    #[test]
    fn test_debug_lists_members() {
        let set = Destination::Stdout | Destination::Stderr;
        assert_eq!(format!("{:?}", set), "{Stdout, Stderr}");
    }
}
