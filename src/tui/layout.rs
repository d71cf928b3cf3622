/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered
/// in render code. The keypad always fits; breakpoints decide whether the
/// tape and logs panels get a column next to it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 46 cols: keypad only
    Compact,
    /// 46-89 cols: keypad + tape
    Normal,
    /// 90+ cols: keypad + tape + logs
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=45 => Breakpoint::Compact,
            46..=89 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(30), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(45), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(46), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(89), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(90), Breakpoint::Wide);
    }

    #[test]
    fn at_least_comparisons() {
        let normal = Breakpoint::Normal;
        assert!(normal.at_least(Breakpoint::Compact));
        assert!(normal.at_least(Breakpoint::Normal));
        assert!(!normal.at_least(Breakpoint::Wide));
    }
}
