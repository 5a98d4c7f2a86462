//! Atomic move commits.
//!
//! A commit transfers a run from its source container to a resolved
//! target as one synchronous call: remove exactly the run's cards from
//! the source top, append them to the target in captured order, then
//! apply the source's post-move effect. No intermediate state is
//! observable from outside.

use crate::containers::{Container, ContainerId};
use crate::interact::DragSession;

/// Commit `session`'s run to `target`.
///
/// The reveal effect fires at most once per commit: a tableau source
/// left non-empty with a face-down top card flips it face-up.
/// Foundation and waste sources have no post-move effect.
///
/// # Panics
///
/// Panics if the target equals the source or the source no longer
/// holds the captured run (programming defects; the resolver and the
/// one-session rule make both unreachable through the public API).
pub(crate) fn commit_move(
    containers: &mut [Container],
    session: &DragSession,
    target: ContainerId,
) {
    let source = session.source();
    assert_ne!(source, target, "move cannot target its own source");

    let run = containers[source.index()].remove_top_run(session.run_len());
    debug_assert!(
        run.iter()
            .zip(session.cards())
            .all(|(a, b)| a.same_identity(b)),
        "removed run does not match the captured run"
    );
    containers[target.index()].append(run);

    if let Container::Tableau(pile) = &mut containers[source.index()] {
        pile.reveal_top();
    }
}
