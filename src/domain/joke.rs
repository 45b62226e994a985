//! Joke domain model.
//!
//! A [`Joke`] is either *active* (on screen, waiting to be sorted) or *sorted*
//! (carrying a [`Reaction`]). The serialized field names match the persisted
//! record format (`joke`, `timeShown`, `startTime`).

use serde::{Deserialize, Serialize};

/// Number of milliseconds in one second.
const MILLIS_PER_SECOND: i64 = 1000;

/// The verdict a user gives a joke by dropping it into a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reaction {
    /// Dropped into the "Loved It!" zone.
    Loved,
    /// Dropped into the "Not Funny" zone.
    NotFunny,
}

impl Reaction {
    /// Both reactions, in drop zone display order.
    pub const ALL: [Self; 2] = [Self::Loved, Self::NotFunny];

    /// Short label used in the sorted list ("Loved" / "Not Funny").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loved => "Loved",
            Self::NotFunny => "Not Funny",
        }
    }
}

/// A joke as returned by the provider, before it enters the sorter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawJoke {
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
}

/// A joke tracked by the sorter.
///
/// # Fields
///
/// - `id`: opaque provider id, unique across the active and sorted lists
/// - `text`: display text
/// - `reaction`: present only once the joke has been sorted
/// - `time_shown`: whole seconds the joke was on screen before it was sorted
/// - `start_time`: milliseconds since the epoch when the joke became active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
    #[serde(default)]
    pub time_shown: u64,
    pub start_time: i64,
}

impl Joke {
    /// Creates an active joke from a provider joke, shown from `now_ms`.
    ///
    /// # Examples
    ///
    /// ```
    /// use joke_sorter::domain::{Joke, RawJoke};
    ///
    /// let raw = RawJoke { id: "abc".into(), text: "I'm reading a book on anti-gravity.".into() };
    /// let joke = Joke::activate(raw, 1_000);
    /// assert!(joke.reaction.is_none());
    /// assert_eq!(joke.time_shown, 0);
    /// assert_eq!(joke.start_time, 1_000);
    /// ```
    #[must_use]
    pub fn activate(raw: RawJoke, now_ms: i64) -> Self {
        Self {
            id: raw.id,
            text: raw.text,
            reaction: None,
            time_shown: 0,
            start_time: now_ms,
        }
    }

    /// Returns the sorted copy of this joke, stamped with its viewing time.
    ///
    /// `id`, `text` and `start_time` are kept as is.
    #[must_use]
    pub fn sorted_as(&self, reaction: Reaction, now_ms: i64) -> Self {
        Self {
            reaction: Some(reaction),
            time_shown: seconds_between(self.start_time, now_ms),
            ..self.clone()
        }
    }

    /// Returns this joke back in the active state, with its clock restarted.
    #[must_use]
    pub fn restored(&self, now_ms: i64) -> Self {
        Self {
            reaction: None,
            time_shown: 0,
            start_time: now_ms,
            ..self.clone()
        }
    }

    /// Whole seconds this joke has been on screen at `now_ms`.
    #[must_use]
    pub fn seconds_displayed(&self, now_ms: i64) -> u64 {
        seconds_between(self.start_time, now_ms)
    }
}

/// Whole seconds elapsed from `start_ms` to `now_ms`, floored and never negative.
///
/// # Examples
///
/// ```
/// use joke_sorter::domain::seconds_between;
///
/// assert_eq!(seconds_between(10_000, 17_300), 7);
/// assert_eq!(seconds_between(10_000, 9_000), 0);
/// ```
#[must_use]
pub fn seconds_between(start_ms: i64, now_ms: i64) -> u64 {
    let elapsed = now_ms.saturating_sub(start_ms).max(0);
    u64::try_from(elapsed / MILLIS_PER_SECOND).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joke(start_time: i64) -> Joke {
        Joke {
            id: "j1".to_string(),
            text: "Why did the scarecrow win an award?".to_string(),
            reaction: None,
            time_shown: 0,
            start_time,
        }
    }

    #[test]
    fn sorting_floors_elapsed_time_to_seconds() {
        let sorted = joke(50_000).sorted_as(Reaction::Loved, 57_300);
        assert_eq!(sorted.time_shown, 7);
        assert_eq!(sorted.reaction, Some(Reaction::Loved));
        assert_eq!(sorted.start_time, 50_000);
    }

    #[test]
    fn sorting_before_start_is_clamped_to_zero() {
        let sorted = joke(50_000).sorted_as(Reaction::NotFunny, 49_000);
        assert_eq!(sorted.time_shown, 0);
    }

    #[test]
    fn restoring_clears_reaction_and_restarts_clock() {
        let sorted = joke(0).sorted_as(Reaction::Loved, 4_000);
        let restored = sorted.restored(9_000);
        assert!(restored.reaction.is_none());
        assert_eq!(restored.start_time, 9_000);
        assert_eq!(restored.seconds_displayed(11_999), 2);
    }

    #[test]
    fn serializes_with_record_field_names() {
        let sorted = joke(1).sorted_as(Reaction::NotFunny, 2_001);
        let value = serde_json::to_value(&sorted).unwrap();
        assert_eq!(value["joke"], "Why did the scarecrow win an award?");
        assert_eq!(value["reaction"], "not-funny");
        assert_eq!(value["timeShown"], 2);
        assert_eq!(value["startTime"], 1);
    }

    #[test]
    fn active_jokes_omit_reaction() {
        let value = serde_json::to_value(joke(1)).unwrap();
        assert!(value.get("reaction").is_none());
    }

    #[test]
    fn raw_joke_reads_provider_document() {
        let raw: RawJoke = serde_json::from_str(
            r#"{"id":"R7UfaahVfFd","joke":"My dog used to chase people on a bike a lot.","status":200}"#,
        )
        .unwrap();
        assert_eq!(raw.id, "R7UfaahVfFd");
        assert!(raw.text.starts_with("My dog"));
    }
}
