//! Arrow directions: the unit of display and input.

use serde::{Deserialize, Serialize};

const UP_ARROW: &str = r"
-------------------
-------------------
---------x---------
--------/ \--------
-------/   \-------
------/     \------
-----/—+   +—\-----
-------|   |-------
-------+———+-------
-------------------
-------------------
";

const DOWN_ARROW: &str = r"
-------------------
-------------------
-------+———+-------
-------|   |-------
-----\—+   +—/-----
------\     /------
-------\   /-------
------- \ /--------
---------x---------
-------------------
-------------------
";

const LEFT_ARROW: &str = r"
-------------------
-----x-------------
----/|-------------
---/ |-------------
--/  +——————————+--
-x              |--
--\  +——————————+--
---\ |-------------
----\|-------------
-----x-------------
-------------------
";

const RIGHT_ARROW: &str = r"
-------------------
-------------x-----
-------------|\----
-------------| \---
--+——————————+  \--
--|              x-
--+——————————+  /-
-------------| /---
-------------|/----
-------------x-----
-------------------
";

/// One of the four arrows the game can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a fixed order. This is the sampling domain
    /// for sequence generation.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a single-character answer token.
    ///
    /// Only the exact uppercase codes `U`, `D`, `L`, `R` are recognized;
    /// anything else returns `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "U" => Some(Direction::Up),
            "D" => Some(Direction::Down),
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            _ => None,
        }
    }

    /// The answer token for this direction (inverse of [`from_token`]).
    ///
    /// [`from_token`]: Direction::from_token
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Fixed-width ASCII art block for this arrow.
    #[must_use]
    pub const fn arrow_art(self) -> &'static str {
        match self {
            Direction::Up => UP_ARROW,
            Direction::Down => DOWN_ARROW,
            Direction::Left => LEFT_ARROW,
            Direction::Right => RIGHT_ARROW,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        write!(f, "{}", name)
    }
}
