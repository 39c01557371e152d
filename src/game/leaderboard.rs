use std::collections::HashMap;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Best score per player name. A score is the move count a game was won
/// with, so lower is better.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LeaderBoard {
    scores: HashMap<String, u32>,
}

#[derive(Tabled)]
struct LeaderBoardRow {
    place: usize,
    player: String,
    moves: u32,
}

impl LeaderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a win. An existing entry only changes when `score` beats it.
    pub fn add_player(&mut self, name: &str, score: u32) {
        self.scores
            .entry(name.to_string())
            .and_modify(|best| *best = (*best).min(score))
            .or_insert(score);
    }

    pub fn score(&self, name: &str) -> Option<u32> {
        self.scores.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries ordered by score, ties by name.
    pub fn entries(&self) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self.scores.iter().map(|(n, s)| (n.clone(), *s)).collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    pub fn render_table(&self) -> String {
        let rows = self
            .entries()
            .into_iter()
            .enumerate()
            .map(|(i, (player, moves))| LeaderBoardRow {
                place: i + 1,
                player,
                moves,
            });
        Table::new(rows).with(Style::modern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_lowest_score() {
        let mut leaderboard = LeaderBoard::new();
        leaderboard.add_player("Alice", 20);
        leaderboard.add_player("Alice", 25);
        assert_eq!(leaderboard.score("Alice"), Some(20));

        leaderboard.add_player("Alice", 12);
        assert_eq!(leaderboard.score("Alice"), Some(12));
        assert_eq!(leaderboard.entries().len(), 1);
    }

    #[test]
    fn test_entries_sorted_ascending() {
        let mut leaderboard = LeaderBoard::new();
        leaderboard.add_player("Carol", 30);
        leaderboard.add_player("Alice", 18);
        leaderboard.add_player("Bob", 18);
        leaderboard.add_player("Dave", 9);

        assert_eq!(
            leaderboard.entries(),
            vec![
                ("Dave".to_string(), 9),
                ("Alice".to_string(), 18),
                ("Bob".to_string(), 18),
                ("Carol".to_string(), 30),
            ]
        );
        assert_eq!(leaderboard.score("Bob"), Some(18));
        assert_eq!(leaderboard.score("Eve"), None);
    }

    #[test]
    fn test_render_table() {
        let mut leaderboard = LeaderBoard::new();
        leaderboard.add_player("Alice", 18);
        leaderboard.add_player("Dave", 9);

        let table = leaderboard.render_table();
        assert!(table.contains("player"));
        let dave = table.find("Dave").unwrap();
        let alice = table.find("Alice").unwrap();
        assert!(dave < alice);
    }
}
