//! Game state: the single object the presentation layer talks to.
//!
//! `GameState` owns every container and the (at most one) active drag
//! session. Processing is single-threaded and event-driven: each
//! press/move/release is handled to completion before the next, every
//! transition is a synchronous non-suspending call, and the render
//! pass reads current state through shared borrows without mutating
//! anything.
//!
//! Geometry flows inward: container extents and layout metrics are
//! supplied by the presentation layer (they depend on window layout
//! the engine never sees) before presses and releases are forwarded.

use rustc_hash::FxHashMap;

use crate::containers::{Container, ContainerId, ContainerKind, Stock, Waste};
use crate::core::{
    EngineError, GameConfig, GameRng, Layout, Point, Rank, Rect, Suit, CARDS_PER_DECK,
};
use crate::game::deal::{deal, NUM_FOUNDATIONS, NUM_TABLEAUS};
use crate::game::engine::commit_move;
use crate::interact::drag::{AnchorVec, RunVec};
use crate::interact::{resolve_target, DragSession, DragView};

/// What a press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing interactive under the pointer (including a face-down
    /// card); no session was created and no redraw is needed.
    Ignored,
    /// This many cards were drawn from the stock into the waste.
    Drew(usize),
    /// The stock was empty and recycling is disabled (or there was
    /// nothing to recycle). Recoverable; the caller may disable
    /// further draws.
    StockEmpty,
    /// The empty stock was refilled from the waste.
    Recycled,
    /// A drag session began.
    DragStarted,
}

impl PressOutcome {
    /// Does the presentation layer need to redraw after this press?
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, PressOutcome::Ignored | PressOutcome::StockEmpty)
    }
}

/// How a release resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No session was active. Releases are idempotent; this is never
    /// an error.
    Ignored,
    /// The run moved from `source` to `target`.
    Committed {
        source: ContainerId,
        target: ContainerId,
    },
    /// No legal target; the session was discarded and every card kept
    /// its pre-drag position.
    Cancelled,
}

/// Outcome of an explicit stock draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// This many cards moved from the stock to the waste.
    Drew(usize),
    /// The waste was recycled into the stock; the next draw starts the
    /// pass over.
    Recycled,
}

/// The authoritative model of a game in progress.
pub struct GameState {
    containers: Vec<Container>,
    extents: Vec<Rect>,
    layout: Layout,
    config: GameConfig,
    rng: GameRng,
    drag: Option<DragSession>,
}

impl GameState {
    /// Stock slot in the declared container order.
    pub const STOCK_ID: ContainerId = ContainerId((NUM_TABLEAUS + NUM_FOUNDATIONS) as u8);
    /// Waste slot in the declared container order.
    pub const WASTE_ID: ContainerId = ContainerId((NUM_TABLEAUS + NUM_FOUNDATIONS + 1) as u8);

    /// Deal a new game from `seed` with default options.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Deal a new game from `seed` with the given options.
    #[must_use]
    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        assert!(config.draw_count > 0, "draw_count must be positive");
        let mut rng = GameRng::new(seed);
        let containers = deal(&mut rng);
        let state = Self {
            extents: vec![Rect::default(); containers.len()],
            containers,
            layout: Layout::default(),
            config,
            rng,
            drag: None,
        };
        debug_assert!(state.cards_conserved());
        state
    }

    /// Id of tableau pile `index` (0..7, left to right).
    #[must_use]
    pub fn tableau_id(index: usize) -> ContainerId {
        assert!(index < NUM_TABLEAUS);
        ContainerId::new(index as u8)
    }

    /// Id of foundation `index` (0..4, in creation order).
    #[must_use]
    pub fn foundation_id(index: usize) -> ContainerId {
        assert!(index < NUM_FOUNDATIONS);
        ContainerId::new((NUM_TABLEAUS + index) as u8)
    }

    // === Geometry intake ===

    /// Record a container's current extent. Extents depend on window
    /// layout; the presentation layer refreshes them before forwarding
    /// presses and releases.
    pub fn set_extent(&mut self, id: ContainerId, extent: Rect) {
        self.extents[id.index()] = extent;
    }

    /// A container's last known extent.
    #[must_use]
    pub fn extent(&self, id: ContainerId) -> Rect {
        self.extents[id.index()]
    }

    /// Record the presentation layer's card dimensions and fan step.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The rectangle a container assigns to card `index`: tableaus fan
    /// downward by the layout's step, every other container stacks
    /// cards on its extent origin.
    #[must_use]
    pub fn card_rect(&self, id: ContainerId, index: usize) -> Rect {
        let extent = self.extents[id.index()];
        let (w, h) = (self.layout.card_width, self.layout.card_height);
        match self.containers[id.index()].kind() {
            ContainerKind::Tableau => Rect::new(
                extent.x,
                extent.y + self.layout.fan_step * index as f32,
                w,
                h,
            ),
            _ => Rect::new(extent.x, extent.y, w, h),
        }
    }

    // === Queries ===

    /// All containers in the declared order, for drawing.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    #[must_use]
    pub fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id.index()]
    }

    /// The lifted run and its live positions, if a drag is active.
    #[must_use]
    pub fn active_drag(&self) -> Option<DragView<'_>> {
        self.drag.as_ref().map(|session| DragView {
            source: session.source(),
            cards: session.cards(),
            positions: (0..session.run_len())
                .map(|i| session.position(i, self.layout.fan_step))
                .collect(),
        })
    }

    #[must_use]
    pub fn drag_in_progress(&self) -> bool {
        self.drag.is_some()
    }

    /// All four foundations filled Ace through King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.containers.iter().all(|container| match container {
            Container::Foundation(foundation) => foundation.is_complete(),
            _ => true,
        })
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The seed this game was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Every suit/rank identity appears exactly once across all
    /// containers. Holds at every quiescent point; the engine
    /// debug-asserts it after each mutation.
    #[must_use]
    pub fn cards_conserved(&self) -> bool {
        let mut seen: FxHashMap<(Suit, Rank), usize> = FxHashMap::default();
        for container in &self.containers {
            for card in container.cards() {
                *seen.entry((card.suit, card.rank)).or_insert(0) += 1;
            }
        }
        seen.len() == CARDS_PER_DECK && seen.values().all(|&count| count == 1)
    }

    // === Event intake ===

    /// Handle a pointer press. A press on the stock draws (or
    /// recycles); a press on a face-up card starts a drag; anything
    /// else is silently ignored. While a session is active, further
    /// presses are no-ops.
    pub fn on_press(&mut self, point: Point) -> PressOutcome {
        if self.drag.is_some() {
            return PressOutcome::Ignored;
        }

        if self.extents[Self::STOCK_ID.index()].contains(point) {
            return match self.draw_from_stock() {
                Ok(DrawOutcome::Drew(count)) => PressOutcome::Drew(count),
                Ok(DrawOutcome::Recycled) => PressOutcome::Recycled,
                Err(EngineError::StockEmpty) => PressOutcome::StockEmpty,
            };
        }

        for index in 0..self.containers.len() {
            let id = ContainerId::new(index as u8);
            if id == Self::STOCK_ID {
                continue;
            }
            if let Some(card_index) = self.hit_card(id, point) {
                if self.begin_drag(id, card_index, point) {
                    return PressOutcome::DragStarted;
                }
                return PressOutcome::Ignored;
            }
        }

        PressOutcome::Ignored
    }

    /// Handle pointer motion. Returns true when a drag is active and
    /// the lifted cards need redrawing. No container is mutated.
    pub fn on_move(&mut self, point: Point) -> bool {
        match &mut self.drag {
            Some(session) => {
                session.update_position(point);
                true
            }
            None => false,
        }
    }

    /// Handle a pointer release: resolve a target and commit, or
    /// cancel. With no active session this is an idempotent no-op.
    pub fn on_release(&mut self, point: Point) -> ReleaseOutcome {
        let Some(mut session) = self.drag.take() else {
            return ReleaseOutcome::Ignored;
        };
        session.update_position(point);

        match resolve_target(&session, &self.containers, &self.extents, &self.layout) {
            Some(target) => {
                let source = session.source();
                commit_move(&mut self.containers, &session, target);
                debug_assert!(self.cards_conserved());
                ReleaseOutcome::Committed { source, target }
            }
            // Dropping the session is the whole cancel path: no
            // container was touched since the press.
            None => ReleaseOutcome::Cancelled,
        }
    }

    // === Stock / waste ===

    /// Draw up to `draw_count` cards from the stock into the waste.
    ///
    /// On an empty stock: recycles the waste when the config allows
    /// and the waste is non-empty, otherwise reports
    /// [`EngineError::StockEmpty`] and leaves the waste unchanged.
    pub fn draw_from_stock(&mut self) -> Result<DrawOutcome, EngineError> {
        if self.stock().is_empty() {
            if self.config.recycle_waste && !self.waste().is_empty() {
                let cards = self.waste_mut().drain_for_recycle();
                self.stock_mut().refill(cards);
                debug_assert!(self.cards_conserved());
                return Ok(DrawOutcome::Recycled);
            }
            return Err(EngineError::StockEmpty);
        }

        let mut drawn = 0;
        for _ in 0..self.config.draw_count {
            match self.stock_mut().draw() {
                Ok(card) => {
                    self.waste_mut().receive(card);
                    drawn += 1;
                }
                Err(EngineError::StockEmpty) => break,
            }
        }
        debug_assert!(self.cards_conserved());
        Ok(DrawOutcome::Drew(drawn))
    }

    // === Internals ===

    fn stock(&self) -> &Stock {
        match &self.containers[Self::STOCK_ID.index()] {
            Container::Stock(stock) => stock,
            _ => unreachable!("stock slot holds the stock"),
        }
    }

    fn stock_mut(&mut self) -> &mut Stock {
        match &mut self.containers[Self::STOCK_ID.index()] {
            Container::Stock(stock) => stock,
            _ => unreachable!("stock slot holds the stock"),
        }
    }

    fn waste(&self) -> &Waste {
        match &self.containers[Self::WASTE_ID.index()] {
            Container::Waste(waste) => waste,
            _ => unreachable!("waste slot holds the waste"),
        }
    }

    fn waste_mut(&mut self) -> &mut Waste {
        match &mut self.containers[Self::WASTE_ID.index()] {
            Container::Waste(waste) => waste,
            _ => unreachable!("waste slot holds the waste"),
        }
    }

    /// Which card of `id` is under `point`, if any. Tableaus are
    /// scanned topmost-first so the covering card wins; foundations
    /// and the waste expose only their top card.
    fn hit_card(&self, id: ContainerId, point: Point) -> Option<usize> {
        let container = &self.containers[id.index()];
        if container.is_empty() {
            return None;
        }
        match container.kind() {
            ContainerKind::Tableau => (0..container.len())
                .rev()
                .find(|&index| self.card_rect(id, index).contains(point)),
            ContainerKind::Foundation | ContainerKind::Waste => self.extents[id.index()]
                .contains(point)
                .then(|| container.len() - 1),
            ContainerKind::Stock => None,
        }
    }

    /// Start a drag of the run beginning at `card_index`, when legal.
    fn begin_drag(&mut self, source: ContainerId, card_index: usize, press: Point) -> bool {
        debug_assert!(self.drag.is_none());
        let container = &self.containers[source.index()];
        if !container.draggable_at(card_index) {
            return false;
        }
        debug_assert!(container.cards()[card_index].face_up());

        let len = container.len();
        let run: RunVec = container.cards()[card_index..].iter().copied().collect();
        let anchors: AnchorVec = (card_index..len)
            .map(|index| self.card_rect(source, index).origin())
            .collect();

        self.drag = Some(DragSession::new(source, card_index, run, anchors, press));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::deal::NUM_CONTAINERS;

    /// Spread all thirteen extents along one row, wider than a card so
    /// nothing overlaps.
    fn with_test_extents(mut state: GameState) -> GameState {
        for index in 0..NUM_CONTAINERS {
            let id = ContainerId::new(index as u8);
            state.set_extent(id, Rect::new(200.0 * index as f32, 0.0, 105.0, 600.0));
        }
        state
    }

    fn press_point(state: &GameState, id: ContainerId, card_index: usize) -> Point {
        state.card_rect(id, card_index).center()
    }

    #[test]
    fn test_new_game_is_quiescent_and_conserved() {
        let state = GameState::new(42);

        assert!(state.cards_conserved());
        assert!(!state.drag_in_progress());
        assert!(!state.is_won());
        assert_eq!(state.seed(), 42);
        assert_eq!(state.containers().len(), NUM_CONTAINERS);
    }

    #[test]
    fn test_same_seed_deals_identically() {
        let a = GameState::new(1234);
        let b = GameState::new(1234);

        assert_eq!(a.containers(), b.containers());
    }

    #[test]
    fn test_press_on_stock_draws_to_waste() {
        let mut state = with_test_extents(GameState::new(42));
        let stock_before = state.container(GameState::STOCK_ID).len();

        let outcome = state.on_press(state.extent(GameState::STOCK_ID).center());

        assert_eq!(outcome, PressOutcome::Drew(1));
        assert!(outcome.needs_redraw());
        assert_eq!(state.container(GameState::STOCK_ID).len(), stock_before - 1);
        assert_eq!(state.container(GameState::WASTE_ID).len(), 1);
        assert!(state
            .container(GameState::WASTE_ID)
            .top_card()
            .unwrap()
            .face_up());
    }

    #[test]
    fn test_draw_count_three() {
        let config = GameConfig {
            draw_count: 3,
            ..GameConfig::default()
        };
        let mut state = GameState::with_config(42, config);

        assert_eq!(state.draw_from_stock(), Ok(DrawOutcome::Drew(3)));
        assert_eq!(state.container(GameState::WASTE_ID).len(), 3);
    }

    #[test]
    fn test_partial_draw_near_exhaustion() {
        let config = GameConfig {
            draw_count: 5,
            ..GameConfig::default()
        };
        let mut state = GameState::with_config(42, config);

        // 24 stock cards: four full draws, then a partial one.
        for _ in 0..4 {
            assert_eq!(state.draw_from_stock(), Ok(DrawOutcome::Drew(5)));
        }
        assert_eq!(state.draw_from_stock(), Ok(DrawOutcome::Drew(4)));
        assert_eq!(state.draw_from_stock(), Err(EngineError::StockEmpty));
    }

    #[test]
    fn test_empty_stock_without_recycling_reports_and_changes_nothing() {
        let mut state = with_test_extents(GameState::new(42));
        while state.draw_from_stock().is_ok() {}

        let waste_before = state.container(GameState::WASTE_ID).len();
        let outcome = state.on_press(state.extent(GameState::STOCK_ID).center());

        assert_eq!(outcome, PressOutcome::StockEmpty);
        assert!(!outcome.needs_redraw());
        assert_eq!(state.container(GameState::WASTE_ID).len(), waste_before);
        assert!(state.container(GameState::STOCK_ID).is_empty());
    }

    #[test]
    fn test_recycling_restores_draw_order() {
        let config = GameConfig {
            recycle_waste: true,
            ..GameConfig::default()
        };
        let mut state = GameState::with_config(42, config);

        let first_drawn = {
            state.draw_from_stock().unwrap();
            *state.container(GameState::WASTE_ID).top_card().unwrap()
        };
        while !state.stock().is_empty() {
            state.draw_from_stock().unwrap();
        }

        assert_eq!(state.draw_from_stock(), Ok(DrawOutcome::Recycled));
        assert!(state.container(GameState::WASTE_ID).is_empty());
        assert_eq!(state.container(GameState::STOCK_ID).len(), 24);
        assert!(state.cards_conserved());

        // The pass repeats: the first card drawn comes out first again.
        state.draw_from_stock().unwrap();
        assert!(state
            .container(GameState::WASTE_ID)
            .top_card()
            .unwrap()
            .same_identity(&first_drawn));
    }

    #[test]
    fn test_press_on_face_down_card_is_ignored() {
        let mut state = with_test_extents(GameState::new(42));
        // Pile 6 holds seven cards; card 0 is face-down under six more.
        let pile = GameState::tableau_id(6);

        let outcome = state.on_press(press_point(&state, pile, 0));

        assert_eq!(outcome, PressOutcome::Ignored);
        assert!(!state.drag_in_progress());
    }

    #[test]
    fn test_press_on_face_up_top_starts_drag() {
        let mut state = with_test_extents(GameState::new(42));
        let pile = GameState::tableau_id(3);
        let top = state.container(pile).len() - 1;

        let outcome = state.on_press(press_point(&state, pile, top));

        assert_eq!(outcome, PressOutcome::DragStarted);
        let view = state.active_drag().unwrap();
        assert_eq!(view.source, pile);
        assert_eq!(view.cards.len(), 1);
        // The run stays owned by its source until a commit.
        assert!(state.cards_conserved());
    }

    #[test]
    fn test_second_press_during_drag_is_ignored() {
        let mut state = with_test_extents(GameState::new(42));
        let pile = GameState::tableau_id(3);
        let top = state.container(pile).len() - 1;
        state.on_press(press_point(&state, pile, top));

        let outcome = state.on_press(state.extent(GameState::STOCK_ID).center());

        assert_eq!(outcome, PressOutcome::Ignored);
        assert!(state.drag_in_progress());
    }

    #[test]
    fn test_move_tracks_pointer_only_during_drag() {
        let mut state = with_test_extents(GameState::new(42));
        assert!(!state.on_move(Point::new(10.0, 10.0)));

        let pile = GameState::tableau_id(3);
        let top = state.container(pile).len() - 1;
        state.on_press(press_point(&state, pile, top));

        assert!(state.on_move(Point::new(999.0, 999.0)));
        let view = state.active_drag().unwrap();
        assert!(view.positions[0].y > 600.0);
    }

    #[test]
    fn test_release_without_session_is_idempotent() {
        let mut state = with_test_extents(GameState::new(42));

        assert_eq!(
            state.on_release(Point::new(0.0, 0.0)),
            ReleaseOutcome::Ignored
        );
        assert_eq!(
            state.on_release(Point::new(0.0, 0.0)),
            ReleaseOutcome::Ignored
        );
        assert!(state.cards_conserved());
    }

    #[test]
    fn test_release_nowhere_cancels_without_mutation() {
        let mut state = with_test_extents(GameState::new(42));
        let before = state.containers().to_vec();
        let pile = GameState::tableau_id(3);
        let top = state.container(pile).len() - 1;

        state.on_press(press_point(&state, pile, top));
        state.on_move(Point::new(5000.0, 5000.0));
        let outcome = state.on_release(Point::new(5000.0, 5000.0));

        assert_eq!(outcome, ReleaseOutcome::Cancelled);
        assert!(!state.drag_in_progress());
        assert_eq!(state.containers(), &before[..]);
    }

    #[test]
    fn test_waste_top_is_draggable() {
        let mut state = with_test_extents(GameState::new(42));
        state.draw_from_stock().unwrap();

        let outcome = state.on_press(state.extent(GameState::WASTE_ID).center());

        assert_eq!(outcome, PressOutcome::DragStarted);
        assert_eq!(state.active_drag().unwrap().source, GameState::WASTE_ID);
    }

    #[test]
    fn test_card_rect_fans_tableaus_only() {
        let state = with_test_extents(GameState::new(42));
        let pile = GameState::tableau_id(2);
        let fan = state.layout().fan_step;

        assert_eq!(state.card_rect(pile, 0).y, state.extent(pile).y);
        assert_eq!(state.card_rect(pile, 2).y, state.extent(pile).y + 2.0 * fan);

        let waste_rect = state.card_rect(GameState::WASTE_ID, 5);
        assert_eq!(waste_rect.origin(), state.extent(GameState::WASTE_ID).origin());
    }
}
