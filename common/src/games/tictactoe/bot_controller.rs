use std::time::Instant;

use super::board::Board;
use super::error::GameError;
use super::types::{EvaluatedMove, Mark};

/// Picks the optimal move for `mark` by searching the whole game tree.
///
/// `O` maximizes the score and `X` minimizes it. Candidates are scanned in
/// ascending cell order and a later candidate only replaces the current best
/// on strict improvement, so the lowest index wins ties.
///
/// Returns `Ok(None)` when the game is already over.
pub fn calculate_minimax_move(
    board: &Board,
    mark: Mark,
) -> Result<Option<EvaluatedMove>, GameError> {
    if board.is_game_over() {
        return Ok(None);
    }

    let started = Instant::now();
    let candidates = evaluate_moves(board, mark, 0)?;
    let best_move = select_move(mark, &candidates)?;

    if let Some(best) = best_move {
        crate::log!(
            "{:?} evaluated {} candidates, picked cell {} (score {}) in {:?}",
            mark,
            candidates.len(),
            best.index,
            best.score,
            started.elapsed()
        );
    }

    Ok(best_move)
}

fn minimax(board: &Board, mark: Mark, depth: usize) -> Result<i32, GameError> {
    if board.is_game_over() {
        return Ok(board.evaluate(depth));
    }

    let candidates = evaluate_moves(board, mark, depth)?;
    let best_move = select_move(mark, &candidates)?;

    Ok(best_move.map_or_else(|| board.evaluate(depth), |best| best.score))
}

fn evaluate_moves(
    board: &Board,
    mark: Mark,
    depth: usize,
) -> Result<Vec<EvaluatedMove>, GameError> {
    let opponent_mark = mark.opponent().ok_or(GameError::InvalidCell)?;

    board
        .available_moves()
        .into_iter()
        .map(|index| {
            let next = board.with_mark(index, mark)?;
            let score = minimax(&next, opponent_mark, depth + 1)?;
            Ok(EvaluatedMove::new(index, score))
        })
        .collect()
}

fn select_move(
    mark: Mark,
    candidates: &[EvaluatedMove],
) -> Result<Option<EvaluatedMove>, GameError> {
    let improves: fn(i32, i32) -> bool = match mark {
        Mark::O => |score: i32, best: i32| score > best,
        Mark::X => |score: i32, best: i32| score < best,
        Mark::Empty => return Err(GameError::InvalidCell),
    };

    let mut best_move: Option<EvaluatedMove> = None;

    for &candidate in candidates {
        match best_move {
            Some(best) if !improves(candidate.score, best.score) => {}
            _ => best_move = Some(candidate),
        }
    }

    Ok(best_move)
}
