//! Termination predicate: three independently-enabled targets, AND-combined.

use crate::config::Target;
use crate::eval::Scored;

/// `true` iff every *enabled* criterion holds for `scored`; disabled
/// criteria count as satisfied. If none are enabled the loop must run to
/// `G`, so this always returns `false` in that case.
pub fn satisfied(
    scored: &Scored,
    target_conflicts: &Target<u32>,
    target_continuity: &Target<f64>,
    target_cost: &Target<f64>,
) -> bool {
    let any_enabled = target_conflicts.enabled || target_continuity.enabled || target_cost.enabled;
    if !any_enabled {
        return false;
    }

    let conflicts_ok = !target_conflicts.enabled || scored.conflict_count <= target_conflicts.value;
    let continuity_ok =
        !target_continuity.enabled || scored.continuity_pct >= target_continuity.value;
    let cost_ok = !target_cost.enabled || scored.cost <= target_cost.value;

    conflicts_ok && continuity_ok && cost_ok
}
