//! Assignment of givers to receivers.

use crate::error::{DrawError, Result};
use crate::participant::{Participant, Restrictions};

/// Attempts made by [`run`] when the caller has no preference.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// One giver -> receiver assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    pub giver: &'a Participant,
    pub receiver: &'a Participant,
}

/// Shuffle a copy of `participants` and pair each one with the next,
/// wrapping around, so the whole group forms a single gift cycle.
pub fn pair_cyclic<'a>(participants: &'a [Participant], rng: &mut fastrand::Rng) -> Result<Vec<Pair<'a>>> {
    if participants.len() < 2 {
        return Err(DrawError::NotEnoughParticipants { count: participants.len() });
    }

    let mut order: Vec<&Participant> = participants.iter().collect();
    rng.shuffle(&mut order);

    let n = order.len();
    Ok((0..n)
        .map(|i| Pair {
            giver: order[i],
            receiver: order[(i + 1) % n],
        })
        .collect())
}

/// False if anyone ends up giving to themselves.
///
/// Two entries with the same non-empty name count as the same person.
pub fn no_self_gift(pairs: &[Pair<'_>]) -> bool {
    pairs.iter().all(|pair| {
        let same_entry = std::ptr::eq(pair.giver, pair.receiver);
        let same_name = !pair.giver.nombre.is_empty() && pair.giver.nombre == pair.receiver.nombre;
        !same_entry && !same_name
    })
}

/// False if any pair gives into a group forbidden for the giver's group.
///
/// Pairs where either side has no group are never a violation.
pub fn respects_restrictions(pairs: &[Pair<'_>], restrictions: &Restrictions) -> bool {
    pairs.iter().all(|pair| match (&pair.giver.grupo, &pair.receiver.grupo) {
        (Some(giver), Some(receiver)) => !restrictions.is_forbidden(giver, receiver),
        _ => true,
    })
}

/// Draw until an assignment passes both checks.
///
/// Returns the pairs together with the number of attempts it took.
pub fn run<'a>(
    participants: &'a [Participant],
    restrictions: &Restrictions,
    max_attempts: u32,
    rng: &mut fastrand::Rng,
) -> Result<(Vec<Pair<'a>>, u32)> {
    for attempt in 1..=max_attempts {
        let pairs = pair_cyclic(participants, rng)?;

        if !no_self_gift(&pairs) {
            tracing::trace!(attempt, "Rejected draw: self gift");
            continue;
        }
        if !respects_restrictions(&pairs, restrictions) {
            tracing::trace!(attempt, "Rejected draw: group restriction");
            continue;
        }

        tracing::debug!(attempt, "Valid assignment found");
        return Ok((pairs, attempt));
    }

    Err(DrawError::AttemptsExhausted { attempts: max_attempts })
}
