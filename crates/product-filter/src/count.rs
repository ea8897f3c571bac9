//! Results Counter
//!
//! Label shown above the grid after each filter pass.

/// Styling of the results label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Error,
    Success,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Neutral => "results-neutral",
            Tone::Error => "results-error",
            Tone::Success => "results-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsCount {
    /// Nothing filtered out
    All(usize),
    None,
    /// Some, but not all, products visible
    Found(usize),
}

impl ResultsCount {
    pub fn from_counts(visible: usize, total: usize) -> Self {
        if visible == total {
            ResultsCount::All(total)
        } else if visible == 0 {
            ResultsCount::None
        } else {
            ResultsCount::Found(visible)
        }
    }

    pub fn text(&self) -> String {
        match self {
            ResultsCount::All(total) => format!("showing all products ({})", total),
            ResultsCount::None => "no products found".to_string(),
            ResultsCount::Found(1) => "1 product found".to_string(),
            ResultsCount::Found(n) => format!("{} products found", n),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ResultsCount::All(_) => Tone::Neutral,
            ResultsCount::None => Tone::Error,
            ResultsCount::Found(_) => Tone::Success,
        }
    }
}
