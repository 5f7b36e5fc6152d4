use rand::seq::SliceRandom;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Ordering mode for presenting a word/article list. Stored as its numeric
/// discriminant (0/1/2) in user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sort {
    #[default]
    Normal = 0,
    Random = 1,
    Reverse = 2,
}

impl Sort {
    /// Reorders `items` in place according to the mode. `Normal` keeps the
    /// insertion order.
    pub fn apply<T>(&self, items: &mut [T]) {
        match self {
            Sort::Normal => {}
            Sort::Random => items.shuffle(&mut rand::thread_rng()),
            Sort::Reverse => items.reverse(),
        }
    }
}

impl Serialize for Sort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for Sort {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Sort::Normal),
            1 => Ok(Sort::Random),
            2 => Ok(Sort::Reverse),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(other as u64),
                &"a sort mode between 0 and 2",
            )),
        }
    }
}

/// Direction a word-card slide transition moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideType {
    Horizontal = 0,
    Vertical = 1,
}
