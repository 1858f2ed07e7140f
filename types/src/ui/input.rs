//! Text state of the points field.

/// Longest accepted entry. Keeps layouts and generation bounded.
pub const MAX_POINT_DIGITS: usize = 4;

/// Digits typed into the points field.
///
/// Invariant: `text` holds only ASCII digits and at most `MAX_POINT_DIGITS`
/// of them. The empty field reads as zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointsDraft {
    text: String,
}

impl PointsDraft {
    /// Field showing `count`, or `None` when it has too many digits to fit.
    #[must_use]
    pub fn from_count(count: u32) -> Option<Self> {
        let text = count.to_string();
        (text.len() <= MAX_POINT_DIGITS).then_some(Self { text })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a character if it is a digit and there is room.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() || self.text.len() >= MAX_POINT_DIGITS {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Numeric value of the field.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.text.parse::<u32>().map(f64::from).unwrap_or(0.0)
    }
}
