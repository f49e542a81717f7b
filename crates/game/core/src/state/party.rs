//! Party roster bookkeeping.

use crate::types::CharacterId;

/// One party member's progression record.
///
/// HP is tracked and rendered but no reachable code path damages it; enemy
/// pressure targets the collapse meter instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub character: CharacterId,
    pub level: u32,
    pub hp: u32,
}

/// The fixed three-member party.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyState {
    pub members: Vec<PartyMember>,
}

impl PartyState {
    /// Looks up a member by character id.
    pub fn member(&self, character: &CharacterId) -> Option<&PartyMember> {
        self.members.iter().find(|m| &m.character == character)
    }
}

impl Default for PartyState {
    /// Fresh-run roster: the canonical trio at level 1.
    fn default() -> Self {
        let roster = [("adel", 120), ("estel", 150), ("vanessa", 100)];
        Self {
            members: roster
                .into_iter()
                .map(|(id, hp)| PartyMember {
                    character: CharacterId::new(id),
                    level: 1,
                    hp,
                })
                .collect(),
        }
    }
}
