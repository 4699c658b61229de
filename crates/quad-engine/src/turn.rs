//! Whose turn it is and who is still playing.

use quad_core::{ColorGroup, Team};
use serde::Serialize;
use std::collections::BTreeSet;

/// Turn bookkeeping for the four teams.
///
/// Every team is either live or losing, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnState {
    current: Team,
    live: BTreeSet<Team>,
    losing: BTreeSet<Team>,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Team one to move, all four teams live.
    pub fn new() -> Self {
        TurnState {
            current: Team::One,
            live: Team::ALL.into_iter().collect(),
            losing: BTreeSet::new(),
        }
    }

    pub fn current(&self) -> Team {
        self.current
    }

    pub fn live(&self) -> &BTreeSet<Team> {
        &self.live
    }

    pub fn losing(&self) -> &BTreeSet<Team> {
        &self.losing
    }

    pub fn is_live(&self, team: Team) -> bool {
        self.live.contains(&team)
    }

    /// The team that plays after the current one, skipping losing teams.
    ///
    /// The skip is repeated at most four times. With every team losing that
    /// lands back on the current team's direct successor.
    pub fn next_team(&self) -> Team {
        let mut next = self.current.next();
        for _ in 0..4 {
            if !self.losing.contains(&next) {
                break;
            }
            next = next.next();
        }
        next
    }

    /// Hands the turn to [`TurnState::next_team`] and returns it.
    pub fn advance(&mut self) -> Team {
        self.current = self.next_team();
        self.current
    }

    /// Moves `team` from live to losing. Returns false if it was already out.
    pub fn eliminate(&mut self, team: Team) -> bool {
        if !self.live.remove(&team) {
            return false;
        }
        self.losing.insert(team);
        true
    }

    /// The surviving color group, once the game is decided.
    ///
    /// Decided means at least two teams are out and every live team shares
    /// one color group.
    pub fn decided_group(&self) -> Option<ColorGroup> {
        if self.losing.len() < 2 {
            return None;
        }
        let mut groups = self.live.iter().map(|t| t.group());
        let first = groups.next()?;
        groups.all(|g| g == first).then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_from_start() {
        let mut turn = TurnState::new();
        let order: Vec<_> = (0..5).map(|_| turn.advance()).collect();
        assert_eq!(
            order,
            vec![Team::Two, Team::Three, Team::Four, Team::One, Team::Two]
        );
    }

    #[test]
    fn losing_teams_are_skipped() {
        let mut turn = TurnState::new();
        turn.eliminate(Team::Two);
        turn.eliminate(Team::Three);
        assert_eq!(turn.next_team(), Team::Four);
        turn.advance();
        assert_eq!(turn.next_team(), Team::One);
    }

    #[test]
    fn odd_survivors_alternate() {
        let mut turn = TurnState::new();
        turn.eliminate(Team::Two);
        turn.eliminate(Team::Four);
        assert_eq!(turn.current(), Team::One);
        assert_eq!(turn.next_team(), Team::Three);
        turn.advance();
        assert_eq!(turn.next_team(), Team::One);
    }

    #[test]
    fn skipping_stops_when_everyone_is_out() {
        let mut turn = TurnState::new();
        for team in Team::ALL {
            turn.eliminate(team);
        }
        assert_eq!(turn.next_team(), Team::Two);
    }

    #[test]
    fn live_and_losing_partition_the_teams() {
        let mut turn = TurnState::new();
        assert!(turn.eliminate(Team::Four));
        assert!(!turn.eliminate(Team::Four));
        assert_eq!(turn.live().len() + turn.losing().len(), 4);
        assert!(turn.live().is_disjoint(turn.losing()));
        assert!(!turn.is_live(Team::Four));
    }

    #[test]
    fn not_decided_with_one_team_out() {
        let mut turn = TurnState::new();
        turn.eliminate(Team::Two);
        assert_eq!(turn.decided_group(), None);
    }

    #[test]
    fn decided_when_one_group_remains() {
        let mut turn = TurnState::new();
        turn.eliminate(Team::Two);
        turn.eliminate(Team::Four);
        assert_eq!(turn.decided_group(), Some(ColorGroup::White));
    }

    #[test]
    fn mixed_survivors_keep_playing() {
        let mut turn = TurnState::new();
        turn.eliminate(Team::One);
        turn.eliminate(Team::Two);
        assert_eq!(turn.decided_group(), None);
    }
}
