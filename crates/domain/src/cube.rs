//! Cube slots: the eight positions of a build and the colour found at each.
//!
//! Slots 1–4 lie on the turntable, starting at the reference sector and
//! going counter-clockwise. Slots 5–8 sit on top of them, one level up.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of positions in a build.
pub const SLOT_COUNT: usize = 8;

/// Number of positions per level.
const SLOTS_PER_LEVEL: usize = 4;

/// Colour of the cube at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CubeColor {
    /// Not recognised yet.
    #[default]
    Unknown,
    /// Known to be an empty space.
    None,
    Red,
    Yellow,
    Blue,
}

impl CubeColor {
    /// Every colour, in display order.
    pub const ALL: [Self; 5] = [Self::Unknown, Self::None, Self::Red, Self::Yellow, Self::Blue];

    /// Interpret a wire value. `""` and `"none"` mean an empty space,
    /// anything unrecognised is [`Unknown`](Self::Unknown).
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "" | "none" => Self::None,
            "red" => Self::Red,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            _ => Self::Unknown,
        }
    }

    /// Value sent over the wire (the backend writes empty spaces as `""`).
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::None => "",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }

    /// CSS class carrying the colour of a slot indicator.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::None => "none",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }
}

impl Serialize for CubeColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for CubeColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Unknown, Self::from_wire))
    }
}

/// Vertical level of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// On the turntable.
    Lower,
    /// On top of the lower cubes.
    Upper,
}

/// One position of the build and its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeSlot {
    /// 1-based position.
    pub position: usize,
    pub color: CubeColor,
}

impl CubeSlot {
    #[must_use]
    pub fn level(&self) -> Level {
        if self.position <= SLOTS_PER_LEVEL {
            Level::Lower
        } else {
            Level::Upper
        }
    }

    /// Element id of the slot indicator.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("cube-{}", self.position)
    }

    /// Full class attribute of the slot indicator.
    ///
    /// Built from scratch each time, so exactly one colour class is present.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("cube {}", self.color.css_class())
    }
}

/// Slots of one level, in position order.
#[must_use = "iterators are lazy"]
pub fn on_level(slots: &[CubeSlot], level: Level) -> impl Iterator<Item = &CubeSlot> {
    slots.iter().filter(move |slot| slot.level() == level)
}

/// Map a reported configuration onto the eight slots.
///
/// Entry `i` lands in slot `i + 1`. Missing entries are unknown, surplus
/// entries are ignored.
#[must_use]
pub fn slots_from_config(config: Option<&[CubeColor]>) -> [CubeSlot; SLOT_COUNT] {
    let config = config.unwrap_or_default();
    std::array::from_fn(|index| CubeSlot {
        position: index + 1,
        color: config.get(index).copied().unwrap_or_default(),
    })
}

/// Whether every slot has been recognised.
#[must_use]
pub fn is_complete(slots: &[CubeSlot]) -> bool {
    slots.iter().all(|slot| slot.color != CubeColor::Unknown)
}
