//! Toggle-button state machines.
//!
//! [`resolve_click`] is the pure re-evaluation of a single slot from its
//! click event and the current styles; every button group folds it into an
//! explicit per-group state. A slot lights up only while it is inactive,
//! the activation budget of its constraint scope has room, and any
//! cross-group prerequisite holds; any other click resolves inactive.
//!
//! Re-click deactivation is asymmetric: clicking an active slot always
//! turns it off, but clicking an inactive slot while a sibling is active
//! leaves the sibling untouched. Switching the active slot of a
//! mutual-exclusion group therefore takes two clicks.

use serde::{Deserialize, Serialize};

/// Rendered state of one toggle slot (white vs. highlighted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotStyle {
    #[default]
    Inactive,
    Active,
}

/// Re-evaluate one slot from its click event and the current styles.
///
/// A zero-click event always resolves inactive. Otherwise the slot
/// activates iff it is currently inactive, the active count elsewhere in
/// its constraint scope is below `capacity`, and the prerequisite holds.
pub fn resolve_click(
    clicks: u32,
    this: SlotStyle,
    active_elsewhere: usize,
    capacity: usize,
    prerequisite: bool,
) -> SlotStyle {
    if clicks == 0 {
        return SlotStyle::Inactive;
    }
    if this == SlotStyle::Inactive && active_elsewhere < capacity && prerequisite {
        SlotStyle::Active
    } else {
        SlotStyle::Inactive
    }
}

/// Descriptor of one mutual-exclusion toggle group.
///
/// `capacity` is the activation budget of the group's constraint scope; a
/// group embedded in a wider scope reports the other members' active count
/// through `active_elsewhere`.
#[derive(Debug, Clone, Copy)]
pub struct ToggleGroup {
    pub id: &'static str,
    pub slots: &'static [&'static str],
    pub capacity: usize,
}

/// At most one active slot per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupState {
    pub active: Option<usize>,
}

impl GroupState {
    pub fn count_active(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn style_of(&self, slot: usize) -> SlotStyle {
        if self.active == Some(slot) {
            SlotStyle::Active
        } else {
            SlotStyle::Inactive
        }
    }
}

impl ToggleGroup {
    /// Apply a click on `slot` and return the new group state.
    pub fn apply(
        &self,
        state: GroupState,
        slot: usize,
        clicks: u32,
        active_elsewhere: usize,
        prerequisite: bool,
    ) -> GroupState {
        let this = state.style_of(slot);
        let siblings_active = usize::from(state.active.is_some() && state.active != Some(slot));
        let resolved = resolve_click(
            clicks,
            this,
            active_elsewhere + siblings_active,
            self.capacity,
            prerequisite,
        );
        match resolved {
            SlotStyle::Active => GroupState { active: Some(slot) },
            SlotStyle::Inactive if state.active == Some(slot) => GroupState { active: None },
            SlotStyle::Inactive => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: ToggleGroup = ToggleGroup {
        id: "dimensión",
        slots: &["a", "b", "c"],
        capacity: 1,
    };

    #[test]
    fn test_first_click_activates() {
        // Three slots all inactive, one click on slot A.
        let state = GROUP.apply(GroupState::default(), 0, 1, 0, true);
        assert_eq!(state.active, Some(0));
    }

    #[test]
    fn test_zero_clicks_resolve_inactive() {
        let state = GROUP.apply(GroupState::default(), 0, 0, 0, true);
        assert_eq!(state.active, None);
    }

    #[test]
    fn test_reclick_deactivates() {
        // Styles [active, inactive, inactive]; clicking slot A again fails
        // the activation test because A is no longer inactive.
        let state = GroupState { active: Some(0) };
        assert_eq!(
            resolve_click(1, SlotStyle::Active, 0, GROUP.capacity, true),
            SlotStyle::Inactive
        );
        let next = GROUP.apply(state, 0, 1, 0, true);
        assert_eq!(next.active, None);
    }

    #[test]
    fn test_click_on_sibling_of_active_slot_changes_nothing() {
        // The budget is spent, so the sibling resolves inactive and the
        // active slot keeps its highlight.
        let state = GroupState { active: Some(0) };
        let next = GROUP.apply(state, 1, 1, 0, true);
        assert_eq!(next.active, Some(0));
    }

    #[test]
    fn test_dependent_group_requires_its_primary_slot() {
        // A four-slot group whose slots may only light up while the
        // matching slot of the primary group is active.
        let dependent = ToggleGroup {
            id: "subdimensión",
            slots: &["w", "x", "y", "z"],
            capacity: 1,
        };
        let primary = GroupState { active: Some(2) };

        let blocked = dependent.apply(GroupState::default(), 0, 1, 0, primary.active == Some(0));
        assert_eq!(blocked.active, None);

        let allowed = dependent.apply(GroupState::default(), 2, 1, 0, primary.active == Some(2));
        assert_eq!(allowed.active, Some(2));
    }

    #[test]
    fn test_wider_scope_budget() {
        // A capacity-2 scope spread over several groups: with two slots
        // already active elsewhere, a third activation is rejected...
        let pair = ToggleGroup {
            id: "urbano",
            slots: &["Hombres", "Mujeres"],
            capacity: 2,
        };
        let first = GroupState { active: Some(0) };
        let second = GroupState { active: Some(1) };
        let spent = first.count_active() + second.count_active();
        let next = pair.apply(GroupState::default(), 1, 1, spent, true);
        assert_eq!(next.active, None);

        // ...while one spent slot elsewhere still leaves room.
        let open = pair.apply(GroupState::default(), 1, 1, first.count_active(), true);
        assert_eq!(open.active, Some(1));
    }
}
