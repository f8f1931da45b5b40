//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The static evaluation is always taken from the root player's side; the
//! maximizing and minimizing roles carry the sign. Every branch is searched
//! on its own copy of the board.
//!
//! A move that leaves a capture chain pending does not hand the turn over:
//! the resulting node is searched at the same depth and role, restricted to
//! the continuation jumps of the capturing piece.

use tracing::debug;

use crate::agent::Agent;
use crate::board::{Board, Move, Player, Square};
use crate::eval::evaluate_material;
use crate::movegen::{capture_continuations, legal_moves_for};
use crate::resolve::{apply_move, MoveOutcome};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 5;

/// Initial alpha/beta window. Material scores never come close.
pub const SCORE_BOUND: i32 = 1000;

/// Result of a search: the best move and associated info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

struct Searcher {
    root: Player,
    nodes: u64,
}

impl Searcher {
    fn new(root: Player) -> Self {
        Searcher { root, nodes: 0 }
    }

    fn mover(&self, maximizing: bool) -> Player {
        if maximizing {
            self.root
        } else {
            self.root.opponent()
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        chain_from: Option<Square>,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            return (evaluate_material(board, self.root), None);
        }

        let mover = self.mover(maximizing);
        let moves = match chain_from {
            Some(from) => capture_continuations(board, mover, from),
            None => legal_moves_for(board, mover),
        };
        if moves.is_empty() {
            return (evaluate_material(board, self.root), None);
        }

        let capture_only = chain_from.is_some();
        let mut best_move = None;

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                // One below alpha so a child equal to the best so far comes
                // back exact rather than as a cutoff bound.
                let eval = self.child(
                    board,
                    mv,
                    mover,
                    capture_only,
                    depth,
                    alpha.saturating_sub(1),
                    beta,
                    maximizing,
                );
                if eval >= max_eval {
                    max_eval = eval;
                    best_move = Some(mv);
                }
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let eval = self.child(
                    board,
                    mv,
                    mover,
                    capture_only,
                    depth,
                    alpha,
                    beta.saturating_add(1),
                    maximizing,
                );
                if eval <= min_eval {
                    min_eval = eval;
                    best_move = Some(mv);
                }
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            (min_eval, best_move)
        }
    }

    /// Applies `mv` to a copy of `board` and scores the resulting node.
    #[allow(clippy::too_many_arguments)]
    fn child(
        &mut self,
        board: &Board,
        mv: Move,
        mover: Player,
        capture_only: bool,
        depth: u32,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        let mut next = *board;
        match apply_move(&mut next, mv, mover, capture_only) {
            MoveOutcome::ContinueFrom(sq) => self.alpha_beta(&next, depth, alpha, beta, maximizing, Some(sq)).0,
            MoveOutcome::Completed | MoveOutcome::Rejected => {
                self.alpha_beta(&next, depth - 1, alpha, beta, !maximizing, None).0
            }
        }
    }
}

/// Runs alpha-beta from `board` with `player` as the root (maximizing) side.
///
/// Returns the node value and the move achieving it; the move is `None` at
/// depth 0 or when the side to move has no legal move.
pub fn alpha_beta(
    board: &Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    player: Player,
) -> (i32, Option<Move>) {
    Searcher::new(player).alpha_beta(board, depth, alpha, beta, maximizing, None)
}

/// Searches for the best opening move for `player`.
pub fn search(board: &Board, player: Player, depth: u32) -> SearchResult {
    let mut searcher = Searcher::new(player);
    let (score, best) = searcher.alpha_beta(board, depth, -SCORE_BOUND, SCORE_BOUND, true, None);
    SearchResult {
        best,
        score,
        nodes: searcher.nodes,
    }
}

/// Searches for the best continuation jump of the piece on `from`.
pub fn search_continuation(board: &Board, player: Player, depth: u32, from: Square) -> SearchResult {
    let mut searcher = Searcher::new(player);
    let (score, best) = searcher.alpha_beta(board, depth.max(1), -SCORE_BOUND, SCORE_BOUND, true, Some(from));
    SearchResult {
        best,
        score,
        nodes: searcher.nodes,
    }
}

/// Plays one side with a fixed-depth alpha-beta search.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    player: Player,
    depth: u32,
    nodes: u64,
}

impl SearchAgent {
    pub fn new(player: Player, depth: u32) -> Self {
        SearchAgent {
            player,
            depth,
            nodes: 0,
        }
    }

    /// Total nodes visited by this agent since creation.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Agent for SearchAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        let legal = legal_moves_for(board, self.player);
        let first = *legal.first()?;
        let result = search(board, self.player, self.depth);
        self.nodes += result.nodes;
        debug!(
            player = ?self.player,
            depth = self.depth,
            nodes = result.nodes,
            score = result.score,
            "search finished"
        );
        Some(result.best.unwrap_or(first))
    }

    fn continue_capture(&mut self, board: &Board, options: &[Move]) -> Move {
        let result = search_continuation(board, self.player, self.depth, options[0].from);
        self.nodes += result.nodes;
        result.best.unwrap_or(options[0])
    }
}
