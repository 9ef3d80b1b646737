//! The game catalogue and per-family dispatch: Tic-Tac-Toe, Maze Runner, Memory Match,
//! Word Search, Pattern Fill, and the three code challenges.

pub mod code;
pub mod grid;
pub mod maze;
pub mod memory;
pub mod tictactoe;
pub mod word_search;

use crate::constants::FULL_CREDIT_PERCENT;
use crate::levels::{Level, LevelContent};
use code::{CodeState, Evaluator};
use grid::GridState;
use maze::{Direction, MazeState};
use memory::{FlipResult, PairsState};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tictactoe::BoardState;
use word_search::{PickResult, SearchState};

/// Game families. Every game shares its validator, working state, and hint rules
/// with the other games of its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// Equality grid
    Grid,
    /// Path / reachability
    Maze,
    /// Memory pairing
    Pairs,
    /// Word search
    Search,
    /// Code output
    Code,
    /// Two-player board against the engine
    Board,
}

/// The eight games in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    TicTacToe,
    MazeRunner,
    MemoryMatch,
    WordSearch,
    PatternFill,
    BugFix,
    SyntaxFix,
    AlgorithmRace,
}

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::TicTacToe,
        GameKind::MazeRunner,
        GameKind::MemoryMatch,
        GameKind::WordSearch,
        GameKind::PatternFill,
        GameKind::BugFix,
        GameKind::SyntaxFix,
        GameKind::AlgorithmRace,
    ];

    /// Stable identifier used by the content provider and progress store.
    pub fn id(&self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::MazeRunner => "maze-runner",
            GameKind::MemoryMatch => "memory-match",
            GameKind::WordSearch => "word-search",
            GameKind::PatternFill => "pattern-fill",
            GameKind::BugFix => "bug-fix",
            GameKind::SyntaxFix => "syntax-fix",
            GameKind::AlgorithmRace => "algorithm-race",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::MazeRunner => "Maze Runner",
            GameKind::MemoryMatch => "Memory Match",
            GameKind::WordSearch => "Word Search",
            GameKind::PatternFill => "Pattern Fill",
            GameKind::BugFix => "Bug Fix",
            GameKind::SyntaxFix => "Syntax Fix",
            GameKind::AlgorithmRace => "Algorithm Race",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            GameKind::TicTacToe => Family::Board,
            GameKind::MazeRunner => Family::Maze,
            GameKind::MemoryMatch => Family::Pairs,
            GameKind::WordSearch => Family::Search,
            GameKind::PatternFill => Family::Grid,
            GameKind::BugFix | GameKind::SyntaxFix | GameKind::AlgorithmRace => Family::Code,
        }
    }

    /// Gate shown once per session before the first level.
    pub fn rules_gate(&self) -> Option<RulesGate> {
        match self {
            GameKind::TicTacToe => Some(RulesGate::Acknowledge {
                rules: "Get three in a row before the engine does. A draw may still count."
                    .to_string(),
            }),
            GameKind::AlgorithmRace => Some(RulesGate::Question {
                prompt: "Your program is judged on what it prints. What must match?".to_string(),
                options: vec![
                    "The source code".to_string(),
                    "The printed output".to_string(),
                    "The running time".to_string(),
                ],
                answer: 1,
            }),
            _ => None,
        }
    }
}

/// A one-time modal or gating question shown before play starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulesGate {
    Acknowledge {
        rules: String,
    },
    Question {
        prompt: String,
        options: Vec<String>,
        /// Index into `options`
        answer: usize,
    },
}

impl RulesGate {
    pub fn accepts(&self, choice: Option<usize>) -> bool {
        match self {
            RulesGate::Acknowledge { .. } => true,
            RulesGate::Question { answer, .. } => choice == Some(*answer),
        }
    }
}

/// Classification of a working state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    InProgress,
    /// Level cleared for `credit_percent` of its reward
    Solved { credit_percent: u32 },
    /// The submission could not be judged (e.g. it crashed); carries a player-facing message
    Invalid(String),
    /// The round is lost (engine won, or a draw on a level that needs a win)
    Failed,
}

impl Verdict {
    pub fn solved() -> Self {
        Verdict::Solved {
            credit_percent: FULL_CREDIT_PERCENT,
        }
    }
}

/// A player input, already translated from whatever the UI uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    SetCell { row: usize, col: usize, value: u8 },
    ClearCell { row: usize, col: usize },
    Step(Direction),
    Flip(usize),
    Pick { row: usize, col: usize },
    ClearSelection,
    Submit(String),
    Place(usize),
}

/// Mutable in-progress representation of the current level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkingState {
    Grid(GridState),
    Maze(MazeState),
    Pairs(PairsState),
    Search(SearchState),
    Code(CodeState),
    Board(BoardState),
}

impl WorkingState {
    /// Fresh state for `level`; a pure function of its content.
    pub fn for_level(level: &Level) -> Self {
        match &level.content {
            LevelContent::Grid(c) => WorkingState::Grid(GridState::new(c)),
            LevelContent::Maze(c) => WorkingState::Maze(MazeState::new(c)),
            LevelContent::Pairs(c) => WorkingState::Pairs(PairsState::deal(c)),
            LevelContent::Search(c) => WorkingState::Search(SearchState::new(c)),
            LevelContent::Code(c) => WorkingState::Code(CodeState::new(c)),
            LevelContent::Board(c) => WorkingState::Board(BoardState::new(c)),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            WorkingState::Grid(_) => Family::Grid,
            WorkingState::Maze(_) => Family::Maze,
            WorkingState::Pairs(_) => Family::Pairs,
            WorkingState::Search(_) => Family::Search,
            WorkingState::Code(_) => Family::Code,
            WorkingState::Board(_) => Family::Board,
        }
    }
}

/// Something an accepted action did beyond plain mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    PairMatched(usize, usize),
    PairMismatched(usize, usize),
    WordFound(String),
    SelectionCleared,
    EngineMoved(usize),
}

/// Collaborators an action may need.
pub struct ActionContext<'a> {
    pub evaluator: Option<&'a dyn Evaluator>,
    pub rng: &'a mut ChaCha8Rng,
    pub revert_ticks: u32,
}

/// Apply `action` to the working state using the family rules.
///
/// `Err` carries a player-facing reason; the state is left exactly as it was.
pub fn apply_action(
    working: &mut WorkingState,
    level: &Level,
    action: &PlayerAction,
    ctx: &mut ActionContext<'_>,
) -> Result<Vec<ActionEffect>, String> {
    let mut effects = Vec::new();
    match (working, &level.content, action) {
        (WorkingState::Grid(s), _, PlayerAction::SetCell { row, col, value }) => {
            grid::set_cell(s, *row, *col, *value)?;
        }
        (WorkingState::Grid(s), _, PlayerAction::ClearCell { row, col }) => {
            grid::clear_cell(s, *row, *col)?;
        }
        (WorkingState::Maze(s), LevelContent::Maze(c), PlayerAction::Step(dir)) => {
            maze::step(s, c, *dir)?;
        }
        (WorkingState::Pairs(s), _, PlayerAction::Flip(index)) => {
            match memory::flip(s, *index, ctx.revert_ticks)? {
                FlipResult::FirstPick => {}
                FlipResult::Matched(a, b) => effects.push(ActionEffect::PairMatched(a, b)),
                FlipResult::Mismatched(a, b) => effects.push(ActionEffect::PairMismatched(a, b)),
            }
        }
        (WorkingState::Search(s), _, PlayerAction::Pick { row, col }) => {
            match word_search::pick(s, *row, *col)? {
                PickResult::Extended => {}
                PickResult::WordFound(word) => effects.push(ActionEffect::WordFound(word)),
                PickResult::Overflowed => effects.push(ActionEffect::SelectionCleared),
            }
        }
        (WorkingState::Search(s), _, PlayerAction::ClearSelection) => {
            word_search::clear_selection(s)?;
            effects.push(ActionEffect::SelectionCleared);
        }
        (WorkingState::Code(s), _, PlayerAction::Submit(source)) => {
            let evaluator = ctx
                .evaluator
                .ok_or_else(|| "Code evaluation is not available".to_string())?;
            code::submit(s, evaluator, source);
        }
        (WorkingState::Board(s), _, PlayerAction::Place(cell)) => {
            tictactoe::place(s, *cell)?;
            if let Some(reply) = tictactoe::engine_turn(s, ctx.rng) {
                effects.push(ActionEffect::EngineMoved(reply));
            }
        }
        _ => return Err("That action does not apply to this game".to_string()),
    }
    Ok(effects)
}

/// Moves the engine makes when a level opens (engine plays first).
pub fn open_level(working: &mut WorkingState, level: &Level, rng: &mut ChaCha8Rng) -> Option<usize> {
    match (working, &level.content) {
        (WorkingState::Board(s), LevelContent::Board(c)) if c.engine_moves_first => {
            tictactoe::engine_turn(s, rng)
        }
        _ => None,
    }
}

/// Advance per-tick family state. Returns a mismatched pair that was turned back over.
pub fn tick_working(working: &mut WorkingState) -> Option<(usize, usize)> {
    match working {
        WorkingState::Pairs(s) => memory::tick(s),
        _ => None,
    }
}

/// Move the working state one unit toward the solution. False when there is
/// nothing a hint may reveal.
pub fn apply_hint(working: &mut WorkingState, level: &Level) -> bool {
    match (working, &level.content) {
        (WorkingState::Grid(s), LevelContent::Grid(c)) => grid::reveal_cell(s, c),
        (WorkingState::Maze(s), LevelContent::Maze(c)) => maze::reveal_next_step(s, c),
        (WorkingState::Pairs(s), _) => memory::reveal_pair(s),
        (WorkingState::Search(s), _) => word_search::reveal_word(s),
        (WorkingState::Code(s), LevelContent::Code(c)) => code::reveal_hint(s, c),
        (WorkingState::Board(s), _) => tictactoe::suggest_move(s),
        _ => false,
    }
}

/// Per-family validator, chosen once from the game kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Grid,
    Maze,
    Pairs,
    Search,
    Code,
    Board,
}

impl Validator {
    pub fn for_kind(kind: GameKind) -> Self {
        match kind.family() {
            Family::Grid => Validator::Grid,
            Family::Maze => Validator::Maze,
            Family::Pairs => Validator::Pairs,
            Family::Search => Validator::Search,
            Family::Code => Validator::Code,
            Family::Board => Validator::Board,
        }
    }

    /// Classify `working` against `level`. Pure; never panics.
    pub fn validate(&self, working: &WorkingState, level: &Level) -> Verdict {
        match (self, working, &level.content) {
            (Validator::Grid, WorkingState::Grid(s), LevelContent::Grid(c)) => grid::validate(s, c),
            (Validator::Maze, WorkingState::Maze(s), LevelContent::Maze(c)) => maze::validate(s, c),
            (Validator::Pairs, WorkingState::Pairs(s), LevelContent::Pairs(_)) => {
                memory::validate(s)
            }
            (Validator::Search, WorkingState::Search(s), LevelContent::Search(_)) => {
                word_search::validate(s)
            }
            (Validator::Code, WorkingState::Code(s), LevelContent::Code(c)) => code::validate(s, c),
            (Validator::Board, WorkingState::Board(s), LevelContent::Board(_)) => {
                tictactoe::validate(s, &level.win_condition)
            }
            _ => Verdict::Invalid("Puzzle state does not belong to this game".to_string()),
        }
    }
}
