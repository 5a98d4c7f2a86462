//! Drag sessions: the ephemeral record of a lifted run.
//!
//! A session is created by a qualifying press and destroyed, committed
//! or cancelled, by the matching release; it never outlives one
//! press/release cycle and never coexists with another. While the
//! session is active the run's cards remain owned by the source
//! container; the session holds their identities, their original
//! on-screen anchors, and the live pointer, so position updates and
//! cancellation touch no container at all.

use smallvec::SmallVec;

use crate::containers::ContainerId;
use crate::core::{Card, Layout, Point, Rect, NUM_RANKS};

/// A run never exceeds a full King..Ace fan.
pub(crate) type RunVec = SmallVec<[Card; NUM_RANKS]>;
pub(crate) type AnchorVec = SmallVec<[Point; NUM_RANKS]>;

/// An active drag of a card run.
#[derive(Clone, Debug)]
pub struct DragSession {
    source: ContainerId,
    start_index: usize,
    cards: RunVec,
    anchors: AnchorVec,
    grab_offset: Point,
    pointer: Point,
}

impl DragSession {
    pub(crate) fn new(
        source: ContainerId,
        start_index: usize,
        cards: RunVec,
        anchors: AnchorVec,
        press: Point,
    ) -> Self {
        assert!(!cards.is_empty(), "drag session with an empty run");
        assert_eq!(cards.len(), anchors.len());
        let first = anchors[0];
        Self {
            source,
            start_index,
            cards,
            anchors,
            grab_offset: Point::new(first.x - press.x, first.y - press.y),
            pointer: press,
        }
    }

    /// The container the run was lifted from.
    #[must_use]
    pub fn source(&self) -> ContainerId {
        self.source
    }

    /// Index of the run's first card within the source container.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// The lifted cards in original (bottom-to-top) order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn run_len(&self) -> usize {
        self.cards.len()
    }

    /// The run's first (lowest) card, the one legality is tested on.
    #[must_use]
    pub fn first_card(&self) -> &Card {
        &self.cards[0]
    }

    /// Original on-screen anchors, for restoring positions on cancel.
    #[must_use]
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// Update the live pointer. Pure presentation math; no container is
    /// touched.
    pub(crate) fn update_position(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Live display position of run card `index`: the pointer plus the
    /// grab offset plus the vertical fan step.
    #[must_use]
    pub fn position(&self, index: usize, fan_step: f32) -> Point {
        self.pointer
            .offset(self.grab_offset.x, self.grab_offset.y + fan_step * index as f32)
    }

    /// Rectangle of the run's first card at the current pointer; the
    /// run's footprint for target resolution.
    #[must_use]
    pub fn footprint(&self, layout: &Layout) -> Rect {
        let origin = self.position(0, layout.fan_step);
        Rect::new(origin.x, origin.y, layout.card_width, layout.card_height)
    }
}

/// Read-only view of the active drag for rendering.
#[derive(Clone, Debug)]
pub struct DragView<'a> {
    /// The container the run was lifted from.
    pub source: ContainerId,
    /// The lifted cards in original order.
    pub cards: &'a [Card],
    /// Live display position of each card.
    pub positions: Vec<Point>,
}
