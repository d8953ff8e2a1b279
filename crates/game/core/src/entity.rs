//! Entity data types and the contest pairing.
//!
//! An [`Entity`] is a randomly fetched competitor with three numeric
//! attributes. Entities are immutable once constructed; a [`Contest`] pairs
//! exactly two of them and enforces that their identifiers differ.

use thiserror::Error;

/// Unique identifier assigned by the entity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three compared attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    Attack,
    Defense,
    Speed,
}

/// Attribute values carried by every entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl AttributeSet {
    pub const fn new(attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
        }
    }

    /// Value of a single attribute.
    pub fn get(&self, kind: AttributeKind) -> u32 {
        match kind {
            AttributeKind::Attack => self.attack,
            AttributeKind::Defense => self.defense,
            AttributeKind::Speed => self.speed,
        }
    }
}

/// A competitor fetched from the entity provider.
///
/// Owned by the session for the duration of one round and discarded when a
/// new contest is fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Reference to display artwork; opaque to the core.
    pub image: String,
    pub attributes: AttributeSet,
}

impl Entity {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        image: impl Into<String>,
        attributes: AttributeSet,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            attributes,
        }
    }
}

/// Which of the two contest slots the user picked as their fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterSlot {
    First,
    Second,
}

impl FighterSlot {
    /// The slot the CPU ends up with.
    pub fn other(self) -> Self {
        match self {
            FighterSlot::First => FighterSlot::Second,
            FighterSlot::Second => FighterSlot::First,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContestError {
    #[error("contest requires two distinct entities, both have id {id}")]
    DuplicateEntity { id: EntityId },
}

/// One matched pair of entities for a round.
///
/// The distinct-id invariant is enforced here so no other layer can expose
/// a contest of an entity against itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contest {
    first: Entity,
    second: Entity,
}

impl Contest {
    /// Pairs two entities, rejecting duplicates.
    pub fn new(first: Entity, second: Entity) -> Result<Self, ContestError> {
        if first.id == second.id {
            return Err(ContestError::DuplicateEntity { id: first.id });
        }
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &Entity {
        &self.first
    }

    pub fn second(&self) -> &Entity {
        &self.second
    }

    /// Entity occupying the given slot.
    pub fn entity(&self, slot: FighterSlot) -> &Entity {
        match slot {
            FighterSlot::First => &self.first,
            FighterSlot::Second => &self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u32) -> Entity {
        Entity::new(
            EntityId(id),
            format!("entity-{id}"),
            "http://example.test/sprite.png",
            AttributeSet::new(10, 20, 30),
        )
    }

    #[test]
    fn contest_rejects_duplicate_ids() {
        let err = Contest::new(entity(7), entity(7)).unwrap_err();
        assert_eq!(err, ContestError::DuplicateEntity { id: EntityId(7) });
    }

    #[test]
    fn contest_slots_resolve_to_entities() {
        let contest = Contest::new(entity(1), entity(2)).unwrap();
        assert_eq!(contest.entity(FighterSlot::First).id, EntityId(1));
        assert_eq!(contest.entity(FighterSlot::Second).id, EntityId(2));
        assert_eq!(FighterSlot::First.other(), FighterSlot::Second);
    }

    #[test]
    fn attribute_set_lookup_matches_fields() {
        let attrs = AttributeSet::new(1, 2, 3);
        assert_eq!(attrs.get(AttributeKind::Attack), 1);
        assert_eq!(attrs.get(AttributeKind::Defense), 2);
        assert_eq!(attrs.get(AttributeKind::Speed), 3);
    }
}
