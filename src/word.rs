use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Word {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
    pub word: String,
    pub phonetic0: String,
    pub phonetic1: String,
    pub trans: Vec<Translation>,
    pub sentences: Vec<ExampleSentence>,
    pub phrases: Vec<Phrase>,
    pub synos: Vec<SynonymGroup>,
    pub rel_words: RelatedWords,
    pub etymology: Vec<EtymologyNote>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub pos: String,
    pub cn: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleSentence {
    pub c: String,  // content
    pub cn: String, // translation
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Phrase {
    pub c: String,
    pub cn: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymGroup {
    pub pos: String,
    pub cn: String,
    pub ws: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedWords {
    pub root: String,
    pub rels: Vec<RelatedGroup>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedGroup {
    pub pos: String,
    pub words: Vec<RelatedWord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedWord {
    pub c: String,
    pub cn: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtymologyNote {
    pub t: String, // title
    pub d: String, // description
}

/// Partial `Word`: fields left `None` fall back to the defaults in
/// [`Word::with_defaults`]. Collections are replaced wholesale, never merged.
#[derive(Debug, Clone, Default)]
pub struct WordPatch {
    pub id: Option<String>,
    pub custom: Option<bool>,
    pub word: Option<String>,
    pub phonetic0: Option<String>,
    pub phonetic1: Option<String>,
    pub trans: Option<Vec<Translation>>,
    pub sentences: Option<Vec<ExampleSentence>>,
    pub phrases: Option<Vec<Phrase>>,
    pub synos: Option<Vec<SynonymGroup>>,
    pub rel_words: Option<RelatedWords>,
    pub etymology: Option<Vec<EtymologyNote>>,
}

impl Word {
    /// Builds a fully-populated word, taking every field present in `patch`
    /// verbatim and every absent field from the documented defaults. Never
    /// fails and performs no validation.
    pub fn with_defaults(patch: WordPatch) -> Word {
        Word {
            id: patch.id,
            custom: patch.custom,
            word: patch.word.unwrap_or_default(),
            phonetic0: patch.phonetic0.unwrap_or_default(),
            phonetic1: patch.phonetic1.unwrap_or_default(),
            trans: patch.trans.unwrap_or_default(),
            sentences: patch.sentences.unwrap_or_default(),
            phrases: patch.phrases.unwrap_or_default(),
            synos: patch.synos.unwrap_or_default(),
            rel_words: patch.rel_words.unwrap_or_default(),
            etymology: patch.etymology.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SymbolPosition {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "end")]
    End,
    #[serde(rename = "")]
    #[default]
    None,
}

/// A word token inside an article, carrying the layout hints needed to
/// reconstruct the original text (trailing space, punctuation handling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleWord {
    #[serde(flatten)]
    pub word: Word,
    pub next_space: bool,
    pub is_symbol: bool,
    pub symbol_position: SymbolPosition,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleWordPatch {
    pub word: WordPatch,
    pub next_space: Option<bool>,
    pub is_symbol: Option<bool>,
    pub symbol_position: Option<SymbolPosition>,
}

impl ArticleWord {
    pub fn with_defaults(patch: ArticleWordPatch) -> ArticleWord {
        ArticleWord {
            word: Word::with_defaults(patch.word),
            next_space: patch.next_space.unwrap_or(true),
            is_symbol: patch.is_symbol.unwrap_or(false),
            symbol_position: patch.symbol_position.unwrap_or_default(),
        }
    }
}

impl Default for ArticleWord {
    fn default() -> Self {
        ArticleWord::with_defaults(ArticleWordPatch::default())
    }
}
