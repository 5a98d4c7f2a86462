//! Target resolution for released drags.
//!
//! The resolver replaces first-match scanning with a deterministic
//! rule: among every container other than the run's source whose
//! extent overlaps the run's footprint and whose rule table accepts
//! the run's first card, pick the one with the largest overlap area.
//! Ties go to the earlier container in the declared order (tableaus
//! left-to-right, then foundations in creation order), so resolution
//! never depends on pointer history or scan luck.

use crate::containers::{Container, ContainerId, ContainerKind};
use crate::core::{Layout, Rect};
use crate::interact::drag::DragSession;

/// Select the drop target for a released session, or `None` when no
/// legal candidate overlaps the run's footprint.
///
/// Stock and waste are never targets, and a run of more than one card
/// never resolves to a foundation even when the first card would be
/// accepted.
pub(crate) fn resolve_target(
    session: &DragSession,
    containers: &[Container],
    extents: &[Rect],
    layout: &Layout,
) -> Option<ContainerId> {
    debug_assert_eq!(containers.len(), extents.len());
    let footprint = session.footprint(layout);
    let mut best: Option<(ContainerId, f32)> = None;

    for (index, container) in containers.iter().enumerate() {
        let id = ContainerId::new(index as u8);
        if id == session.source() {
            continue;
        }
        if matches!(container.kind(), ContainerKind::Stock | ContainerKind::Waste) {
            continue;
        }
        if session.run_len() > 1 && container.kind() == ContainerKind::Foundation {
            continue;
        }

        let area = extents[index].overlap_area(&footprint);
        if area <= 0.0 || !container.accepts(session.first_card()) {
            continue;
        }
        // Strict comparison: earlier (higher-priority) containers keep
        // ties.
        if best.map_or(true, |(_, best_area)| area > best_area) {
            best = Some((id, area));
        }
    }

    best.map(|(id, _)| id)
}
