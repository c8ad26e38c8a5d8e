use crate::utils::error::{Result, TallyError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 每個檢查點允許的學分值
pub const CREDIT_RANGE: [u32; 7] = [0, 20, 40, 60, 80, 100, 120];

/// 三個檢查點的學分總和必須等於此值
pub const CREDIT_TOTAL: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Progress,
    ProgressWithTrailer,
    NoProgressRetriever,
    Exclude,
}

impl Category {
    /// Display order of the histogram bars.
    pub const ALL: [Category; 4] = [
        Category::Progress,
        Category::ProgressWithTrailer,
        Category::NoProgressRetriever,
        Category::Exclude,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Category::Progress => "Progress",
            Category::ProgressWithTrailer => "Progress (module trailer)",
            Category::NoProgressRetriever => "Do not progress - module retriever",
            Category::Exclude => "Exclude",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Progress => "Progress",
            Category::ProgressWithTrailer => "Trailer",
            Category::NoProgressRetriever => "Retriever",
            Category::Exclude => "Exclude",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Category::Progress => Color::Green,
            Category::ProgressWithTrailer => Color::Yellow,
            Category::NoProgressRetriever => Color::Red,
            Category::Exclude => Color::Red,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Progress => 0,
            Category::ProgressWithTrailer => 1,
            Category::NoProgressRetriever => 2,
            Category::Exclude => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Grey,
    Green,
    Yellow,
    Red,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Grey => "grey",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

/// The three credit checkpoints, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Pass,
    Defer,
    Fail,
}

impl Checkpoint {
    pub const ALL: [Checkpoint; 3] = [Checkpoint::Pass, Checkpoint::Defer, Checkpoint::Fail];

    pub fn name(&self) -> &'static str {
        match self {
            Checkpoint::Pass => "pass",
            Checkpoint::Defer => "defer",
            Checkpoint::Fail => "fail",
        }
    }
}

/// A validated (pass, defer, fail) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Credits {
    pass: u32,
    defer: u32,
    fail: u32,
}

impl Credits {
    /// 驗證每個值都在允許範圍內，且總和為 120
    pub fn new(pass: u32, defer: u32, fail: u32) -> Result<Self> {
        for (checkpoint, value) in Checkpoint::ALL.iter().zip([pass, defer, fail]) {
            if !CREDIT_RANGE.contains(&value) {
                return Err(TallyError::CreditOutOfRange {
                    checkpoint: checkpoint.name().to_string(),
                    value,
                });
            }
        }

        let total = pass + defer + fail;
        if total != CREDIT_TOTAL {
            return Err(TallyError::IncorrectTotal {
                expected: CREDIT_TOTAL,
                actual: total,
            });
        }

        Ok(Self { pass, defer, fail })
    }

    pub fn pass(&self) -> u32 {
        self.pass
    }

    pub fn defer(&self) -> u32 {
        self.defer
    }

    pub fn fail(&self) -> u32 {
        self.fail
    }

    /// Every triple drawn from the allowed range that sums to the total.
    pub fn all_valid() -> impl Iterator<Item = Credits> {
        CREDIT_RANGE.into_iter().flat_map(|pass| {
            CREDIT_RANGE.into_iter().flat_map(move |defer| {
                CREDIT_RANGE
                    .into_iter()
                    .filter_map(move |fail| Credits::new(pass, defer, fail).ok())
            })
        })
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.pass, self.defer, self.fail)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub credits: Credits,
    pub category: Category,
    pub recorded_at: DateTime<Local>,
}

impl RoundResult {
    pub fn new(credits: Credits, category: Category) -> Self {
        Self {
            credits,
            category,
            recorded_at: Local::now(),
        }
    }

    /// `<message> - <pass>, <defer>, <fail>`
    pub fn summary_line(&self) -> String {
        format!("{} - {}", self.category.message(), self.credits)
    }
}

/// Append-only record of the rounds entered during one run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    rounds: Vec<RoundResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, round: RoundResult) {
        self.rounds.push(round);
    }

    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// 依顯示順序回傳每個類別的數量
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for round in &self.rounds {
            counts[round.category.index()] += 1;
        }
        counts
    }

    pub fn count_of(&self, category: Category) -> usize {
        self.counts()[category.index()]
    }
}

/// A drawing primitive in canvas coordinates (origin top-left, y grows down).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        fill: Color,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        color: Color,
        size: u32,
        bold: bool,
    },
}
