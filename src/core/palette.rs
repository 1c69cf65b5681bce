use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};

pub const BUDGET_COLORS: [Color; 6] = [
    Color::rgb(0x34, 0x98, 0xdb),
    Color::rgb(0x2e, 0xcc, 0x71),
    Color::rgb(0xf3, 0x9c, 0x12),
    Color::rgb(0xe7, 0x4c, 0x3c),
    Color::rgb(0x9b, 0x59, 0xb6),
    Color::rgb(0x1a, 0xbc, 0x9c),
];

/// First five budget colors.
pub const EXPENSE_COLORS: [Color; 5] = [
    BUDGET_COLORS[0],
    BUDGET_COLORS[1],
    BUDGET_COLORS[2],
    BUDGET_COLORS[3],
    BUDGET_COLORS[4],
];

/// Ordered, non-empty color list assigned positionally to categories.
///
/// Lookups wrap around, so category `i` always gets `colors[i % len]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn budget() -> Self {
        Self {
            colors: BUDGET_COLORS.to_vec(),
        }
    }

    #[must_use]
    pub fn expense() -> Self {
        Self {
            colors: EXPENSE_COLORS.to_vec(),
        }
    }

    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Colors for `count` consecutive categories, wrapping as needed.
    #[must_use]
    pub fn colors_for(&self, count: usize) -> Vec<Color> {
        (0..count).map(|index| self.color_at(index)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ChartError;

    fn try_from(colors: Vec<Color>) -> ChartResult<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
