use crate::api::events::models::Participant;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// The roster as it stood when editing began: user id mapped to the
/// participant subdocument id. Removal goes through the subdocument id, so
/// entries that never got one from the server are not recorded here.
#[derive(Debug, Default, Clone)]
pub struct RosterSnapshot {
    entries: HashMap<Uuid, Uuid>,
}

impl RosterSnapshot {
    pub fn of(participants: &[Participant]) -> Self {
        let entries = participants
            .iter()
            .filter_map(|p| Some((p.user_id, p.id?)))
            .collect();
        Self { entries }
    }

    pub fn contains(&self, user_id: Uuid) -> bool {
        self.entries.contains_key(&user_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A removal carries the subdocument id the API needs, not just the user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub user_id: Uuid,
    pub participant_id: Uuid,
}

/// Add/remove operations turning the original roster into the selection.
/// Users present on both sides are left untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RosterDiff {
    pub to_add: Vec<Uuid>,
    pub to_remove: Vec<Removal>,
}

impl RosterDiff {
    pub fn compute(original: &RosterSnapshot, selected: &HashSet<Uuid>) -> Self {
        let mut to_add: Vec<Uuid> = selected
            .iter()
            .copied()
            .filter(|user_id| !original.contains(*user_id))
            .collect();
        to_add.sort();

        let mut to_remove: Vec<Removal> = original
            .entries
            .iter()
            .filter(|(user_id, _)| !selected.contains(user_id))
            .map(|(&user_id, &participant_id)| Removal {
                user_id,
                participant_id,
            })
            .collect();
        to_remove.sort_by_key(|r| r.user_id);

        Self { to_add, to_remove }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    pub fn len(&self) -> usize {
        self.to_add.len() + self.to_remove.len()
    }
}

#[cfg(test)]
mod roster_tests {
    use super::*;
    use uuid::uuid;

    const USER_A: Uuid = uuid!("910e81a9-56df-4c24-965a-13eff739f469");
    const USER_B: Uuid = uuid!("29e40c2a-7595-42d3-98e8-9fe93ce99972");
    const USER_C: Uuid = uuid!("32190025-7c15-4adb-82fd-9acc3dc8e7b6");
    const SUB_A: Uuid = uuid!("a9c5900e-a445-4888-8612-4a5c8cadbd9e");
    const SUB_B: Uuid = uuid!("d63a1036-e59d-4b7c-a009-9b90a0e703d1");

    fn subdoc(user_id: Uuid, id: Uuid) -> Participant {
        Participant {
            id: Some(id),
            ..Participant::new(user_id)
        }
    }

    #[test]
    fn add_and_remove_partition_the_selection() {
        let original = RosterSnapshot::of(&[subdoc(USER_A, SUB_A), subdoc(USER_B, SUB_B)]);
        let selected = HashSet::from([USER_B, USER_C]);

        let diff = RosterDiff::compute(&original, &selected);

        assert_eq!(diff.to_add, vec![USER_C]);
        assert_eq!(
            diff.to_remove,
            vec![Removal {
                user_id: USER_A,
                participant_id: SUB_A,
            }]
        );
    }

    #[test]
    fn unchanged_selection_yields_no_operations() {
        let original = RosterSnapshot::of(&[subdoc(USER_A, SUB_A), subdoc(USER_B, SUB_B)]);
        let selected = HashSet::from([USER_A, USER_B]);

        let diff = RosterDiff::compute(&original, &selected);
        assert!(diff.is_empty());
    }

    #[test]
    fn add_and_remove_are_disjoint() {
        let original = RosterSnapshot::of(&[subdoc(USER_A, SUB_A), subdoc(USER_B, SUB_B)]);
        let selected = HashSet::from([USER_A, USER_C]);

        let diff = RosterDiff::compute(&original, &selected);
        let removed: HashSet<Uuid> = diff.to_remove.iter().map(|r| r.user_id).collect();
        assert!(diff.to_add.iter().all(|id| !removed.contains(id)));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let original = RosterSnapshot::of(&[subdoc(USER_A, SUB_A)]);
        let selected = HashSet::from([USER_B]);

        let first = RosterDiff::compute(&original, &selected);
        let second = RosterDiff::compute(&original, &selected);
        assert_eq!(first, second);
    }

    #[test]
    fn entries_without_subdocument_id_are_not_removable() {
        let original = RosterSnapshot::of(&[Participant::new(USER_A), subdoc(USER_B, SUB_B)]);
        let selected = HashSet::new();

        let diff = RosterDiff::compute(&original, &selected);
        assert_eq!(
            diff.to_remove,
            vec![Removal {
                user_id: USER_B,
                participant_id: SUB_B,
            }]
        );
    }

    #[test]
    fn empty_roster_only_adds() {
        let original = RosterSnapshot::default();
        let selected = HashSet::from([USER_A, USER_B]);

        let diff = RosterDiff::compute(&original, &selected);
        assert_eq!(diff.len(), 2);
        assert!(diff.to_remove.is_empty());
    }
}
