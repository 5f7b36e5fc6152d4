//! Data model for a vocabulary/typing-practice app: words, articles, dicts,
//! study statistics and the default UI shortcut bindings. Purely declarative;
//! loading, persistence and rendering live in the consumers.

mod article;
mod dict;
mod language;
mod shortcut;
mod sort;
mod statistics;
mod word;

pub use article::{Article, ArticleItem, ArticlePatch, Question, Sentence};
pub use dict::{
    Dict, DictPatch, DictResource, DictType, Language, TranslateLanguage,
    DEFAULT_PER_DAY_STUDY_NUMBER,
};
pub use language::{
    pronunciation_url, LanguageCategory, TranslateEngine, LANGUAGE_CATEGORY_OPTIONS,
    PRONUNCIATION_API,
};
pub use shortcut::{default_binding, default_shortcut_key_map, ShortcutKey, SHORTCUT_KEY_MAP};
pub use sort::{SlideType, Sort};
pub use statistics::{DisplayStatistics, Statistics, StudyData, UNRECORDED};
pub use word::{
    ArticleWord, ArticleWordPatch, EtymologyNote, ExampleSentence, Phrase, RelatedGroup,
    RelatedWord, RelatedWords, SymbolPosition, SynonymGroup, Translation, Word, WordPatch,
};
