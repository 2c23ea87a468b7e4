//! Placing a person into a preferred group, evicting a member when full.

use crate::model::{GroupId, PersonId};

use super::Trial;

/// A member of a full group that can move on to a later preference.
#[derive(Debug, Clone, Copy)]
struct Eviction {
    slot: usize,
    target: GroupId,
    score: isize,
}

/// Tries to put `person` into `group`.
///
/// A full group makes room by moving one member to a later preference with
/// spare capacity. Among all candidate moves the one with the highest score
/// wins, where the score favours target groups still short of their minimum
/// and penalises low-ranked targets.
pub(super) fn place(trial: &mut Trial<'_>, person: PersonId, group: GroupId) -> bool {
    if trial.group(group).has_room() {
        trial.push(group, person);
        return true;
    }

    let Some(eviction) = best_eviction(trial, group) else {
        return false;
    };
    let evicted = trial.replace(group, eviction.slot, person);
    tracing::trace!(%person, %evicted, from = %group, to = %eviction.target, "evicting member");
    trial.push(eviction.target, evicted);
    true
}

fn best_eviction(trial: &Trial<'_>, group: GroupId) -> Option<Eviction> {
    let mut best: Option<Eviction> = None;

    for (slot, &member) in trial.group(group).members().iter().enumerate() {
        let preferences = trial.instance.person(member).preferences();
        let Some(rank) = preferences.iter().position(|g| *g == group) else {
            continue;
        };

        for (alt_rank, &target) in preferences.iter().enumerate().skip(rank + 1) {
            let alt = trial.group(target);
            if !alt.has_room() {
                continue;
            }
            let score = alt.min_size() as isize - alt.len() as isize - alt_rank as isize;
            if best.map_or(true, |b| score > b.score) {
                best = Some(Eviction {
                    slot,
                    target,
                    score,
                });
            }
        }
    }

    best
}
