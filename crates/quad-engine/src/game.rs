//! A game session and its turn state machine.
//!
//! [`Game`] owns everything one session needs: grid, walls, pieces, turn
//! state, clock and the event queue. Hosts drive it through a handful of
//! entry points:
//!
//! 1. [`Game::select_piece`] (or [`Game::on_select_attempt`]) picks one of the
//!    current team's pieces and computes its targets.
//! 2. [`Game::choose_target`] applies the move to the grid at once and asks
//!    the [`Animator`] to show it.
//! 3. [`Game::on_animation_complete`] (or the polling variant
//!    [`Game::on_frame_tick`]) resolves captures, castling and the turn.
//!
//! Calls that do not fit the current [`Phase`] are rejected by returning
//! `false` and leave the game untouched.

use crate::animation::Animator;
use crate::clock::SessionClock;
use crate::config::{BoardConfig, ConfigError};
use crate::events::GameEvent;
use crate::grid::Grid;
use crate::piece::{Piece, PieceId};
use crate::position::Position;
use crate::registry::Registry;
use crate::rules::{castling_partner, legal_targets};
use crate::turn::TurnState;
use crate::walls::WallSet;
use chrono::Utc;
use quad_core::{
    ColorGroup, Coord, LayoutError, LayoutIssue, LayoutParser, ParsedLayout, PieceKind, Placement,
    Team,
};
use std::mem;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// The standard 16x16 four-team layout.
pub const STANDARD_LAYOUT: &str = include_str!("../boards/standard.txt");

/// A move between its start and the end of its animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInFlight {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
    /// Enemy that stood on `to` when the move started.
    pub captured: Option<PieceId>,
    /// Set when this is a rook following its castling king.
    pub castling_king: Option<PieceId>,
}

/// Where the turn state machine stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    AwaitingTarget { piece: PieceId, targets: Vec<Coord> },
    Animating(MoveInFlight),
    Paused { previous: Box<Phase> },
    GameOver { context_team: Team },
}

/// What loading a layout put on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub placed: Vec<Placement>,
    /// Tokens and placements that were skipped.
    pub issues: Vec<LayoutIssue>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// One four-team game session.
#[derive(Debug, Clone)]
pub struct Game {
    config: BoardConfig,
    start: Vec<Placement>,
    grid: Grid,
    walls: WallSet,
    pieces: Registry,
    turn: TurnState,
    phase: Phase,
    clock: SessionClock,
    events: Vec<GameEvent>,
}

impl Game {
    /// Creates a session with an empty board.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the board dimensions are unusable.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Creates a session on the default board with [`STANDARD_LAYOUT`].
    pub fn standard() -> Self {
        let mut game = Self::build(BoardConfig::default());
        game.load_layout(STANDARD_LAYOUT);
        game
    }

    fn build(config: BoardConfig) -> Self {
        let geometry = config.geometry();
        Game {
            grid: Grid::from_config(&config),
            walls: WallSet::from_specs(&config.wall_specs(), config.size, geometry),
            pieces: Registry::new(),
            turn: TurnState::new(),
            phase: Phase::AwaitingSelection,
            clock: SessionClock::start(Utc::now()),
            events: Vec::new(),
            start: Vec::new(),
            config,
        }
    }

    /// Replaces the board with the pieces described by `text` and starts a
    /// fresh session. Tokens that cannot be placed are logged and skipped.
    pub fn load_layout(&mut self, text: &str) -> LoadReport {
        let parsed = LayoutParser::new(self.config.size.max(0) as usize).parse(text);
        self.apply_layout(parsed)
    }

    /// Like [`Game::load_layout`], reading the layout from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Read`] if the file cannot be read. The board is
    /// left empty in that case.
    pub fn load_layout_file(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, LayoutError> {
        let path = path.as_ref();
        let parser = LayoutParser::new(self.config.size.max(0) as usize);
        match parser.read(path) {
            Ok(parsed) => Ok(self.apply_layout(parsed)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "cannot read board layout, board left empty");
                self.start.clear();
                self.reset_session();
                Err(err)
            }
        }
    }

    fn apply_layout(&mut self, parsed: ParsedLayout) -> LoadReport {
        for issue in &parsed.issues {
            warn!(%issue, "skipping layout token");
        }
        self.start = parsed.placements;
        let mut report = self.reset_session();
        self.start.clone_from(&report.placed);
        let mut issues = parsed.issues;
        issues.append(&mut report.issues);
        report.issues = issues;
        info!(
            pieces = report.placed.len(),
            skipped = report.issues.len(),
            "board loaded"
        );
        report
    }

    /// Clears the board and places the starting layout again.
    fn reset_session(&mut self) -> LoadReport {
        self.grid.clear_all();
        self.pieces.clear_all();
        self.turn = TurnState::new();
        self.phase = Phase::AwaitingSelection;
        self.clock = SessionClock::start(Utc::now());
        self.events.clear();

        let mut report = LoadReport::default();
        for &placement in &self.start {
            let Placement { kind, team, at } = placement;
            if !self.grid.is_active(at) {
                let issue = LayoutIssue::InactiveCell { at, kind, team };
                warn!(%issue, "skipping placement");
                report.issues.push(issue);
                continue;
            }
            if !self.grid.is_free(at) {
                let issue = LayoutIssue::OccupiedCell { at, kind, team };
                warn!(%issue, "skipping placement");
                report.issues.push(issue);
                continue;
            }
            let id = self.pieces.spawn(placement);
            self.grid.set_occupant(at, id);
            report.placed.push(placement);
        }
        report
    }

    /// Starts over from the last loaded layout. Walls and configuration are
    /// kept.
    pub fn restart(&mut self) {
        self.reset_session();
        info!("game restarted");
        self.events.push(GameEvent::Restarted);
        self.events.push(GameEvent::TurnChanged {
            team: self.turn.current(),
        });
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn pieces(&self) -> &Registry {
        &self.pieces
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn current_team(&self) -> Team {
        self.turn.current()
    }

    pub fn position(&self) -> Position<'_> {
        Position::new(&self.grid, &self.walls, &self.pieces)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.position().piece_at(at)
    }

    /// The selected piece while a target is awaited.
    pub fn selected(&self) -> Option<PieceId> {
        match &self.phase {
            Phase::AwaitingTarget { piece, .. } => Some(*piece),
            _ => None,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// The winning color group once the game is over.
    pub fn winner_group(&self) -> Option<ColorGroup> {
        match self.phase {
            Phase::GameOver { context_team } => Some(context_team.group()),
            _ => None,
        }
    }

    /// Targets of any live piece, regardless of whose turn it is.
    pub fn legal_targets(&self, id: PieceId) -> Vec<Coord> {
        match self.pieces.get(id) {
            Some(piece) => legal_targets(piece, &self.position()),
            None => Vec::new(),
        }
    }

    /// Takes every event published since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// The current board in layout text form, read off the grid so that a
    /// capture in flight shows the mover on the target cell.
    pub fn layout_text(&self) -> String {
        let placements: Vec<Placement> = self
            .grid
            .occupied()
            .filter_map(|(at, id)| {
                self.pieces
                    .get(id)
                    .map(|p| Placement::new(p.kind, p.team, at))
            })
            .collect();
        LayoutParser::new(self.config.size.max(0) as usize).to_text(&placements)
    }

    /// Selects one of the current team's pieces.
    ///
    /// Accepted while awaiting a selection or a target; picking another own
    /// piece replaces the previous selection.
    pub fn select_piece(&mut self, id: PieceId) -> bool {
        let previous = match &self.phase {
            Phase::AwaitingSelection => None,
            Phase::AwaitingTarget { piece, .. } => Some(*piece),
            phase => {
                trace!(piece = %id, ?phase, "selection rejected");
                return false;
            }
        };

        let Some(piece) = self.pieces.get(id) else {
            trace!(piece = %id, "selection of unknown piece rejected");
            return false;
        };
        if piece.team != self.turn.current() || piece.moving {
            trace!(piece = %id, team = %piece.team, "out of turn selection rejected");
            return false;
        }
        let targets = legal_targets(piece, &self.position());

        if let Some(prev) = previous.and_then(|p| self.pieces.get_mut(p)) {
            prev.selected = false;
        }
        if let Some(piece) = self.pieces.get_mut(id) {
            piece.selected = true;
        }

        self.events.push(GameEvent::Selected {
            piece: id,
            targets: targets.clone(),
        });
        self.phase = Phase::AwaitingTarget { piece: id, targets };
        true
    }

    /// Pointer hook: a press over a piece selects it.
    pub fn on_select_attempt(&mut self, pointer_over: Option<PieceId>, primary_down: bool) -> bool {
        match pointer_over {
            Some(id) if primary_down => self.select_piece(id),
            _ => false,
        }
    }

    /// Drops the current selection.
    pub fn cancel_selection(&mut self) -> bool {
        let Phase::AwaitingTarget { piece, .. } = self.phase else {
            return false;
        };
        if let Some(p) = self.pieces.get_mut(piece) {
            p.selected = false;
        }
        self.phase = Phase::AwaitingSelection;
        true
    }

    /// Moves the selected piece to `to`, which must be one of its targets.
    ///
    /// The grid is updated immediately. An enemy standing on `to` leaves the
    /// grid now and the registry once the animation completes.
    pub fn choose_target(&mut self, to: Coord, animator: &mut dyn Animator) -> bool {
        let Phase::AwaitingTarget { piece: id, targets } = &self.phase else {
            trace!(%to, "target rejected, nothing selected");
            return false;
        };
        if !targets.contains(&to) {
            trace!(piece = %id, %to, "illegal target rejected");
            return false;
        }
        let id = *id;
        let Some(from) = self.pieces.get(id).map(|p| p.cell) else {
            return false;
        };

        let captured = self.grid.occupant(to);
        self.grid.clear_occupant(from);
        self.grid.clear_occupant(to);
        self.grid.set_occupant(to, id);
        if let Some(piece) = self.pieces.get_mut(id) {
            piece.cell = to;
            piece.selected = false;
            piece.moving = true;
        }
        debug!(piece = %id, %from, %to, ?captured, "move started");

        self.phase = Phase::Animating(MoveInFlight {
            piece: id,
            from,
            to,
            captured,
            castling_king: None,
        });
        self.events.push(GameEvent::MoveStarted { piece: id, from, to });
        animator.animate(id, from, to);
        true
    }

    /// Frame hook: finishes the move in flight once the animator is done
    /// with it. Returns true if a move completed.
    pub fn on_frame_tick(&mut self, animator: &mut dyn Animator) -> bool {
        let piece = match &self.phase {
            Phase::Animating(flight) if !animator.is_animating(flight.piece) => flight.piece,
            _ => return false,
        };
        self.on_animation_complete(piece, animator)
    }

    /// Animation hook: `piece` reached its destination.
    pub fn on_animation_complete(&mut self, piece: PieceId, animator: &mut dyn Animator) -> bool {
        let flight = match &self.phase {
            Phase::Animating(flight) if flight.piece == piece => flight.clone(),
            _ => {
                trace!(%piece, "unexpected animation completion ignored");
                return false;
            }
        };

        let Some(mover) = self.pieces.get_mut(piece) else {
            return false;
        };
        mover.moving = false;
        let mover_team = mover.team;
        self.events.push(GameEvent::MoveEnded {
            piece,
            at: flight.to,
        });

        if let Some(victim) = flight.captured {
            self.resolve_capture(victim, mover_team);
            if self.is_game_over() {
                return true;
            }
        }

        if let Some(king) = flight.castling_king {
            for id in [piece, king] {
                if let Some(p) = self.pieces.get_mut(id) {
                    p.first_move = false;
                }
            }
            debug!(%king, rook = %piece, "castling finished");
            self.advance_turn();
            return true;
        }

        if let Some(partner) = self
            .pieces
            .get(piece)
            .and_then(|p| castling_partner(p, &self.position()))
        {
            self.grid.clear_occupant(partner.from);
            self.grid.set_occupant(partner.to, partner.rook);
            if let Some(rook) = self.pieces.get_mut(partner.rook) {
                rook.cell = partner.to;
                rook.moving = true;
            }
            debug!(king = %piece, rook = %partner.rook, to = %partner.to, "castling rook follows");
            self.phase = Phase::Animating(MoveInFlight {
                piece: partner.rook,
                from: partner.from,
                to: partner.to,
                captured: None,
                castling_king: Some(piece),
            });
            self.events.push(GameEvent::MoveStarted {
                piece: partner.rook,
                from: partner.from,
                to: partner.to,
            });
            animator.animate(partner.rook, partner.from, partner.to);
            return true;
        }

        if let Some(mover) = self.pieces.get_mut(piece) {
            mover.first_move = false;
        }
        self.advance_turn();
        true
    }

    fn resolve_capture(&mut self, victim: PieceId, by: Team) {
        let Some(record) = self.pieces.add_captured(victim, by, Utc::now()) else {
            return;
        };
        debug!(piece = %record.piece, %by, "piece captured");
        let eliminated = (record.kind() == PieceKind::King).then(|| record.team());
        self.events.push(GameEvent::FigureCaptured {
            piece: record.piece,
            by,
        });
        if let Some(team) = eliminated {
            self.eliminate(team, by);
        }
    }

    /// Takes `team` out of the game and sweeps its pieces off the board.
    fn eliminate(&mut self, team: Team, by: Team) {
        if !self.turn.eliminate(team) {
            return;
        }
        for piece in self.pieces.clear_for_team(team) {
            if self.grid.occupant(piece.cell) == Some(piece.id) {
                self.grid.clear_occupant(piece.cell);
            }
            self.events.push(GameEvent::FigureCaptured { piece, by });
        }
        info!(%team, %by, "team eliminated");
        self.events.push(GameEvent::TeamEliminated { team, by });

        if let Some(winner) = self.turn.decided_group() {
            let context_team = self.turn.current();
            self.phase = Phase::GameOver { context_team };
            self.clock.stop(Utc::now());
            info!(%winner, %context_team, "game over");
            self.events.push(GameEvent::GameOver {
                context_team,
                winner,
            });
        }
    }

    fn advance_turn(&mut self) {
        let team = self.turn.advance();
        self.phase = Phase::AwaitingSelection;
        debug!(%team, "turn changed");
        self.events.push(GameEvent::TurnChanged { team });
    }

    /// Pauses the game. Only possible while waiting for input.
    pub fn pause(&mut self) -> bool {
        if !matches!(
            self.phase,
            Phase::AwaitingSelection | Phase::AwaitingTarget { .. }
        ) {
            return false;
        }
        let previous = mem::replace(&mut self.phase, Phase::AwaitingSelection);
        self.phase = Phase::Paused {
            previous: Box::new(previous),
        };
        self.clock.pause(Utc::now());
        self.events.push(GameEvent::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.is_paused() {
            return false;
        }
        if let Phase::Paused { previous } = mem::replace(&mut self.phase, Phase::AwaitingSelection) {
            self.phase = *previous;
        }
        self.clock.resume(Utc::now());
        self.events.push(GameEvent::Resumed);
        true
    }
}
