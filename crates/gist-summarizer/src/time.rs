//! Date phrase classification
//!
//! Decides which preposition introduces a date phrase when it is spliced
//! back into a mini-sentence: "in 1990", "in the 1990s", "on March 3 1990".

/// Calendar month names, matched case-insensitively
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Date phrase shapes that can be fused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// A bare year, e.g. "1990"
    Year,
    /// A decade, e.g. "1990s"
    Decade,
    /// Month, day and year, e.g. "March 3 1990"
    MonthDayYear,
}

impl DateShape {
    /// Classify already-trimmed date tokens
    pub fn classify(tokens: &[&str]) -> Option<Self> {
        match tokens {
            [token] if is_year(token) => Some(Self::Year),
            [token] if is_decade(token) => Some(Self::Decade),
            [first, _, _] if is_month(first) => Some(Self::MonthDayYear),
            _ => None,
        }
    }

    /// Preposition introducing this shape
    pub fn preposition(&self) -> &'static str {
        match self {
            Self::Year => "in",
            Self::Decade => "in the",
            Self::MonthDayYear => "on",
        }
    }
}

/// Build the `" <preposition> <phrase>"` fragment for a date phrase.
///
/// Returns an empty string when the phrase has no recognised shape.
pub fn date_and_preposition(time_phrase: &str) -> String {
    let tokens: Vec<&str> = time_phrase.split_whitespace().collect();
    let tokens = strip_repeated_months(&tokens);

    match DateShape::classify(tokens) {
        Some(shape) => {
            let mut fragment = format!(" {}", shape.preposition());
            for token in tokens {
                fragment.push(' ');
                fragment.push_str(token);
            }
            fragment
        }
        None => {
            tracing::trace!(time_phrase, "No preposition rule for date phrase");
            String::new()
        }
    }
}

/// Cut the phrase before the second month name.
///
/// Entity aggregation concatenates every date token of a sentence, so a
/// sentence mentioning two dates yields "March 3 1990 April 5 1991"; only
/// the first date is kept.
fn strip_repeated_months<'a, 'b>(tokens: &'a [&'b str]) -> &'a [&'b str] {
    let second_month = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| is_month(token))
        .nth(1)
        .map(|(idx, _)| idx);

    match second_month {
        Some(idx) => &tokens[..idx],
        None => tokens,
    }
}

fn is_month(token: &str) -> bool {
    MONTHS.iter().any(|m| m.eq_ignore_ascii_case(token))
}

fn is_year(token: &str) -> bool {
    token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit())
}

fn is_decade(token: &str) -> bool {
    token.strip_suffix('s').is_some_and(is_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year() {
        assert_eq!(date_and_preposition("1990"), " in 1990");
        assert_eq!(date_and_preposition("  1990 "), " in 1990");
    }

    #[test]
    fn test_decade() {
        assert_eq!(date_and_preposition("1990s"), " in the 1990s");
    }

    #[test]
    fn test_month_day_year() {
        assert_eq!(date_and_preposition("March 3 1990"), " on March 3 1990");
        assert_eq!(date_and_preposition("march 3 1990"), " on march 3 1990");
    }

    #[test]
    fn test_unrecognised_shapes() {
        assert_eq!(date_and_preposition(""), "");
        assert_eq!(date_and_preposition("yesterday"), "");
        assert_eq!(date_and_preposition("199"), "");
        assert_eq!(date_and_preposition("March 1990"), "");
        assert_eq!(date_and_preposition("3 March 1990"), "");
        assert_eq!(date_and_preposition("1990's"), "");
    }

    #[test]
    fn test_repeated_month_trimmed() {
        assert_eq!(
            date_and_preposition("March 3 1990 April 5 1991"),
            " on March 3 1990"
        );
        assert_eq!(date_and_preposition("May June"), "");
    }

    #[test]
    fn test_shape_classification() {
        assert_eq!(DateShape::classify(&["2001"]), Some(DateShape::Year));
        assert_eq!(DateShape::classify(&["1980s"]), Some(DateShape::Decade));
        assert_eq!(
            DateShape::classify(&["December", "25", "2001"]),
            Some(DateShape::MonthDayYear)
        );
        assert_eq!(DateShape::classify(&[]), None);
        assert_eq!(DateShape::Decade.preposition(), "in the");
    }
}
