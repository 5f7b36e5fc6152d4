use serde::{Deserialize, Serialize};

use crate::word::{ArticleWord, Word};

/// One unit of an article's text, with the token sequence that reconstructs
/// it and the offsets syncing it to the audio/lyric timeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sentence {
    pub text: String,
    pub translate: String,
    pub words: Vec<ArticleWord>,
    pub audio_position: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Question {
    pub stem: String,
    pub options: Vec<String>,
    pub correct_answer: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub title_translate: String,
    pub text: String,
    pub text_translate: String,
    pub new_words: Vec<Word>,
    pub text_all_words: Vec<String>,
    pub sections: Vec<Vec<Sentence>>,
    pub audio_src: String,
    pub lrc_position: Vec<Vec<i64>>,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub title_translate: Option<String>,
    pub text: Option<String>,
    pub text_translate: Option<String>,
    pub new_words: Option<Vec<Word>>,
    pub text_all_words: Option<Vec<String>>,
    pub sections: Option<Vec<Vec<Sentence>>>,
    pub audio_src: Option<String>,
    pub lrc_position: Option<Vec<Vec<i64>>>,
    pub questions: Option<Vec<Question>>,
}

impl Article {
    /// Builds a fully-populated article from a partial one; absent fields
    /// take empty strings and empty sequences.
    pub fn with_defaults(patch: ArticlePatch) -> Article {
        Article {
            id: patch.id.unwrap_or_default(),
            title: patch.title.unwrap_or_default(),
            title_translate: patch.title_translate.unwrap_or_default(),
            text: patch.text.unwrap_or_default(),
            text_translate: patch.text_translate.unwrap_or_default(),
            new_words: patch.new_words.unwrap_or_default(),
            text_all_words: patch.text_all_words.unwrap_or_default(),
            sections: patch.sections.unwrap_or_default(),
            audio_src: patch.audio_src.unwrap_or_default(),
            lrc_position: patch.lrc_position.unwrap_or_default(),
            questions: patch.questions.unwrap_or_default(),
        }
    }
}

/// An article paired with its position in the owning list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleItem {
    pub item: Article,
    pub index: usize,
}
