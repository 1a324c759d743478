use crate::schema::ClassificationResult;

use super::error::FormError;
use super::form::{ClassifierForm, RequestStatus};

/// Severity band derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    Favorable,
    Cautionary,
    Unfavorable,
}

impl ConfidenceBand {
    /// Fixed thresholds: >= 0.8 favorable, >= 0.5 cautionary, below
    /// that unfavorable.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.8 {
            ConfidenceBand::Favorable
        } else if confidence >= 0.5 {
            ConfidenceBand::Cautionary
        } else {
            ConfidenceBand::Unfavorable
        }
    }

    /// Display color for frontends that render the band.
    pub fn color(&self) -> &'static str {
        match self {
            ConfidenceBand::Favorable => "green",
            ConfidenceBand::Cautionary => "yellow",
            ConfidenceBand::Unfavorable => "red",
        }
    }
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            ConfidenceBand::Favorable => "favorable",
            ConfidenceBand::Cautionary => "cautionary",
            ConfidenceBand::Unfavorable => "unfavorable",
        };
        write!(f, "{}", word)
    }
}

/// Formats a confidence score as a percentage with one decimal place,
/// e.g. `0.93` -> `"93.0%"`.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// The single visible render outcome for a form state. Exactly one
/// panel exists per state, fully determined by the request status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Panel<'a> {
    /// Nothing has been submitted yet
    Empty,
    /// A request is outstanding; the trigger shows its busy label
    Busy,
    Error(&'a FormError),
    Result(&'a ClassificationResult),
}

impl ClassifierForm {
    /// Projects the current state onto its panel. Pure: rendering the
    /// same state twice yields the same panel.
    pub fn view(&self) -> Panel<'_> {
        match self.status() {
            RequestStatus::Idle => Panel::Empty,
            RequestStatus::InFlight => Panel::Busy,
            RequestStatus::Failed => match self.error() {
                Some(error) => Panel::Error(error),
                None => Panel::Empty,
            },
            RequestStatus::Succeeded => match self.result() {
                Some(result) => Panel::Result(result),
                None => Panel::Empty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_formatting() {
        assert_eq!(format_confidence(0.93), "93.0%");
        assert_eq!(format_confidence(0.655), "65.5%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(
            ConfidenceBand::from_confidence(0.93),
            ConfidenceBand::Favorable
        );
        assert_eq!(
            ConfidenceBand::from_confidence(0.65),
            ConfidenceBand::Cautionary
        );
        assert_eq!(
            ConfidenceBand::from_confidence(0.2),
            ConfidenceBand::Unfavorable
        );

        // Boundaries are inclusive
        assert_eq!(
            ConfidenceBand::from_confidence(0.8),
            ConfidenceBand::Favorable
        );
        assert_eq!(
            ConfidenceBand::from_confidence(0.5),
            ConfidenceBand::Cautionary
        );
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(ConfidenceBand::Favorable.color(), "green");
        assert_eq!(ConfidenceBand::Cautionary.color(), "yellow");
        assert_eq!(ConfidenceBand::Unfavorable.color(), "red");
    }
}
