use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::word::Word;

/// Sentinel for a measurement that has not been recorded yet.
pub const UNRECORDED: i64 = -1;

/// One study session. `spend`, `total` and `wrong` stay at [`UNRECORDED`]
/// until the session actually produces them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    pub start_date: i64, // epoch milliseconds
    pub spend: i64,
    pub total: i64,
    pub wrong: i64,
}

impl Default for Statistics {
    fn default() -> Self {
        Statistics {
            start_date: Utc::now().timestamp_millis(),
            spend: UNRECORDED,
            total: UNRECORDED,
            wrong: UNRECORDED,
        }
    }
}

/// A session record enriched for display with the words the user missed and
/// how many inputs they made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayStatistics {
    #[serde(flatten)]
    pub statistics: Statistics,
    pub wrong_words: Vec<Word>,
    pub input_word_number: i64,
}

impl Default for DisplayStatistics {
    fn default() -> Self {
        DisplayStatistics {
            statistics: Statistics::default(),
            wrong_words: Vec::new(),
            input_word_number: UNRECORDED,
        }
    }
}

/// In-progress practice state: where the user is in the list and which words
/// they have gotten wrong so far.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudyData {
    pub index: usize,
    pub words: Vec<Word>,
    pub wrong_words: Vec<Word>,
}
