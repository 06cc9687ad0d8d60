use crate::board::{Board, apply_move, get_available_moves, undo_move};
use crate::session_rng::SessionRng;
use crate::types::{BotType, Mark};
use crate::win_detector::check_win;

/// Score scale of the search: the human side minimizes, the bot side
/// maximizes, regardless of which side the search is invoked for.
const HUMAN_WIN_SCORE: i32 = -10;
const BOT_WIN_SCORE: i32 = 10;
const DRAW_SCORE: i32 = 0;

/// Sentinels outside the reachable score range.
const MIN_SCORE_BOUND: i32 = -10_000;
const MAX_SCORE_BOUND: i32 = 10_000;

/// Everything the bot needs to pick a move. The human/bot role tags are
/// carried explicitly so the search stays a pure function of its input.
pub struct BotInput {
    pub board: Board,
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub max_depth: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen cell; `None` at terminal positions where no move was picked.
    pub cell: Option<usize>,
    pub score: i32,
}

pub fn calculate_move(
    bot_type: BotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(input, rng),
        BotType::Minimax => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

/// Game-theoretically optimal move for the bot under the depth limit.
/// `max_depth >= 9` is perfect play; smaller limits score unresolved
/// branches as draws and play only locally safe moves.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board;
    let result = minimax(
        &mut board,
        input.bot_mark,
        input.human_mark,
        input.bot_mark,
        0,
        input.max_depth,
    );
    result.cell
}

/// Depth-first minimax over a working board with mutate-then-undo
/// backtracking. Candidate cells are visited in ascending index order and
/// only a strictly better score replaces the current best, so ties keep
/// the earliest candidate and the result is fully deterministic.
///
/// When the human side is to move, a child score of exactly
/// `HUMAN_WIN_SCORE` is multiplied by a running count of how many such
/// winning continuations this node has already seen: the first scores -10,
/// the second -20, and so on. More forced losses weigh heavier.
fn minimax(
    board: &mut Board,
    current_mark: Mark,
    human_mark: Mark,
    bot_mark: Mark,
    depth: u32,
    max_depth: u32,
) -> SearchResult {
    let available_moves = get_available_moves(board);

    if check_win(board, human_mark) {
        return SearchResult {
            cell: None,
            score: HUMAN_WIN_SCORE,
        };
    }
    if check_win(board, bot_mark) {
        return SearchResult {
            cell: None,
            score: BOT_WIN_SCORE,
        };
    }
    if available_moves.is_empty() || depth == max_depth {
        return SearchResult {
            cell: None,
            score: DRAW_SCORE,
        };
    }

    if current_mark == human_mark {
        let mut human_win_branches = 0;
        let mut best = SearchResult {
            cell: None,
            score: MAX_SCORE_BOUND,
        };

        for cell in available_moves {
            apply_move(board, cell, current_mark);
            let child = minimax(board, bot_mark, human_mark, bot_mark, depth + 1, max_depth);
            undo_move(board, cell);

            let mut score = child.score;
            if score == HUMAN_WIN_SCORE {
                human_win_branches += 1;
                score *= human_win_branches;
            }

            if score < best.score {
                best = SearchResult {
                    cell: Some(cell),
                    score,
                };
            }
        }

        best
    } else {
        let mut best = SearchResult {
            cell: None,
            score: MIN_SCORE_BOUND,
        };

        for cell in available_moves {
            apply_move(board, cell, current_mark);
            let child = minimax(board, human_mark, human_mark, bot_mark, depth + 1, max_depth);
            undo_move(board, cell);

            if child.score > best.score {
                best = SearchResult {
                    cell: Some(cell),
                    score: child.score,
                };
            }
        }

        best
    }
}
