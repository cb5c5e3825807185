use std::fmt;

use crate::summary::SeriesSummary;

/// Outcome of comparing named series by their mean.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Exactly one series has the highest mean.
    Winner(String),
    /// Two or more series share the highest mean, in input order.
    Tie(Vec<String>),
}

impl Verdict {
    /// Picks the series with the highest mean.
    ///
    /// Means are compared exactly; equal best means produce [`Verdict::Tie`].
    /// Returns `None` if `entries` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfcmp_stats::{comparison::Verdict, summary::summarize};
    ///
    /// let grok = summarize(&[80.0, 90.0]).unwrap();
    /// let gemini = summarize(&[70.0, 85.0]).unwrap();
    /// let verdict = Verdict::by_mean([("GROK", &grok), ("Gemini", &gemini)]).unwrap();
    /// assert_eq!(verdict, Verdict::Winner("GROK".to_owned()));
    /// ```
    pub fn by_mean<'a, I, S>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (S, &'a SeriesSummary)>,
        S: AsRef<str>,
    {
        let entries = entries.into_iter().collect::<Vec<_>>();
        let best = entries
            .iter()
            .map(|(_, summary)| summary.mean)
            .max_by(f64::total_cmp)?;
        let mut leaders = entries
            .iter()
            .filter(|(_, summary)| summary.mean.total_cmp(&best).is_eq())
            .map(|(name, _)| name.as_ref().to_owned())
            .collect::<Vec<_>>();

        if leaders.len() == 1 {
            leaders.pop().map(Self::Winner)
        } else {
            Some(Self::Tie(leaders))
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(name) => f.write_str(name),
            Self::Tie(names) => write!(f, "Tie ({})", names.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;

    #[test]
    fn test_higher_mean_wins_regardless_of_order() {
        let low = summarize(&[1.0, 2.0]).unwrap();
        let high = summarize(&[3.0, 4.0]).unwrap();
        assert_eq!(
            Verdict::by_mean([("low", &low), ("high", &high)]),
            Some(Verdict::Winner("high".to_owned()))
        );
        assert_eq!(
            Verdict::by_mean([("high", &high), ("low", &low)]),
            Some(Verdict::Winner("high".to_owned()))
        );
    }

    #[test]
    fn test_equal_means_tie() {
        let a = summarize(&[1.0, 3.0]).unwrap();
        let b = summarize(&[2.0, 2.0]).unwrap();
        let c = summarize(&[0.0, 1.0]).unwrap();
        let verdict = Verdict::by_mean([("a", &a), ("c", &c), ("b", &b)]).unwrap();
        assert!(verdict.is_tie());
        assert_eq!(verdict, Verdict::Tie(vec!["a".to_owned(), "b".to_owned()]));
        assert_eq!(verdict.to_string(), "Tie (a, b)");
    }

    #[test]
    fn test_single_entry_wins() {
        let only = summarize(&[5.0, 6.0]).unwrap();
        let verdict = Verdict::by_mean([(String::from("only"), &only)]).unwrap();
        assert_eq!(verdict.to_string(), "only");
    }

    #[test]
    fn test_no_entries() {
        let entries: [(&str, &SeriesSummary); 0] = [];
        assert_eq!(Verdict::by_mean(entries), None);
    }

    #[test]
    fn test_serialized_shape() {
        let winner = serde_json::to_value(Verdict::Winner("GROK".to_owned())).unwrap();
        assert_eq!(winner, serde_json::json!({ "winner": "GROK" }));
        let tie = serde_json::to_value(Verdict::Tie(vec!["a".to_owned(), "b".to_owned()])).unwrap();
        assert_eq!(tie, serde_json::json!({ "tie": ["a", "b"] }));
    }
}
