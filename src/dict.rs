use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::statistics::Statistics;
use crate::word::Word;

/// How a dict's content should be interpreted and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictType {
    Collect,
    Simple,
    Wrong,
    Known,
    #[serde(rename = "collect-word")]
    CollectWord,
    #[default]
    Word,
    Article,
}

/// Content language of a dictionary resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
    De,
    Code,
}

/// Language the translations are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TranslateLanguage {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "common")]
    Common,
    #[serde(rename = "")]
    #[default]
    None,
}

/// Metadata describing a downloadable dictionary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DictResource {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub length: usize,
    pub category: String,
    pub tags: Vec<String>,
    pub translate_language: TranslateLanguage,
    #[serde(rename = "type")]
    pub dict_type: DictType,
    pub language: Language,
}

pub const DEFAULT_PER_DAY_STUDY_NUMBER: usize = 20;

/// A learnable unit (word list or article collection) together with its
/// study metadata and the resource it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dict {
    pub id: String,
    pub name: String,
    pub last_learn_index: usize,
    pub per_day_study_number: usize,
    pub description: String,
    pub words: Vec<Word>,
    pub articles: Vec<Article>,
    pub statistics: Vec<Statistics>,
    pub is_custom: bool,
    pub length: usize,
    // resource metadata
    pub resource_id: String,
    pub category: String,
    pub tags: Vec<String>,
    pub dict_type: DictType,
    pub file_name: String,
    pub lang_type_str: String,
    pub tran_type_str: String,
    pub version: u32,
}

#[derive(Debug, Clone, Default)]
pub struct DictPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub last_learn_index: Option<usize>,
    pub per_day_study_number: Option<usize>,
    pub description: Option<String>,
    pub words: Option<Vec<Word>>,
    pub articles: Option<Vec<Article>>,
    pub statistics: Option<Vec<Statistics>>,
    pub is_custom: Option<bool>,
    pub length: Option<usize>,
    pub resource_id: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub dict_type: Option<DictType>,
    pub file_name: Option<String>,
    pub lang_type_str: Option<String>,
    pub tran_type_str: Option<String>,
    pub version: Option<u32>,
}

impl Dict {
    /// Builds a fully-populated dict; absent patch fields take the documented
    /// defaults (20 words per day, `word` content, en→zh).
    pub fn with_defaults(patch: DictPatch) -> Dict {
        Dict {
            id: patch.id.unwrap_or_default(),
            name: patch.name.unwrap_or_default(),
            last_learn_index: patch.last_learn_index.unwrap_or(0),
            per_day_study_number: patch
                .per_day_study_number
                .unwrap_or(DEFAULT_PER_DAY_STUDY_NUMBER),
            description: patch.description.unwrap_or_default(),
            words: patch.words.unwrap_or_default(),
            articles: patch.articles.unwrap_or_default(),
            statistics: patch.statistics.unwrap_or_default(),
            is_custom: patch.is_custom.unwrap_or(false),
            length: patch.length.unwrap_or(0),
            resource_id: patch.resource_id.unwrap_or_default(),
            category: patch.category.unwrap_or_default(),
            tags: patch.tags.unwrap_or_default(),
            dict_type: patch.dict_type.unwrap_or_default(),
            file_name: patch.file_name.unwrap_or_default(),
            lang_type_str: patch.lang_type_str.unwrap_or_else(|| "en".to_string()),
            tran_type_str: patch.tran_type_str.unwrap_or_else(|| "zh".to_string()),
            version: patch.version.unwrap_or(0),
        }
    }

    /// Count of the primary content collection selected by `dict_type`.
    /// `length` should equal this once the dict is populated.
    pub fn content_len(&self) -> usize {
        match self.dict_type {
            DictType::Article => self.articles.len(),
            _ => self.words.len(),
        }
    }
}

impl Default for Dict {
    fn default() -> Self {
        Dict::with_defaults(DictPatch::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::WordPatch;

    #[test]
    fn dict_defaults() {
        let dict = Dict::default();
        assert_eq!(dict.length, 0);
        assert_eq!(dict.last_learn_index, 0);
        assert_eq!(dict.per_day_study_number, 20);
        assert_eq!(dict.dict_type, DictType::Word);
        assert_eq!(dict.lang_type_str, "en");
        assert_eq!(dict.tran_type_str, "zh");
        assert_eq!(dict.version, 0);
        assert!(!dict.is_custom);
        assert!(dict.words.is_empty());
        assert!(dict.articles.is_empty());
        assert!(dict.statistics.is_empty());
    }

    #[test]
    fn dict_patch_fields_survive_unchanged() {
        let word = Word::with_defaults(WordPatch {
            word: Some("apple".to_string()),
            ..WordPatch::default()
        });
        let dict = Dict::with_defaults(DictPatch {
            name: Some("X".to_string()),
            words: Some(vec![word.clone()]),
            ..DictPatch::default()
        });
        assert_eq!(dict.name, "X");
        assert_eq!(dict.words[0], word);
        // absent fields still default
        assert_eq!(dict.per_day_study_number, 20);
    }

    #[test]
    fn content_len_follows_dict_type() {
        let mut dict = Dict::with_defaults(DictPatch {
            words: Some(vec![Word::default(), Word::default()]),
            articles: Some(vec![Article::default()]),
            ..DictPatch::default()
        });
        assert_eq!(dict.content_len(), 2);
        dict.dict_type = DictType::Article;
        assert_eq!(dict.content_len(), 1);
    }

    #[test]
    fn dict_type_wire_strings() {
        assert_eq!(serde_json::to_string(&DictType::CollectWord).unwrap(), "\"collect-word\"");
        assert_eq!(serde_json::to_string(&DictType::Word).unwrap(), "\"word\"");
        let parsed: DictType = serde_json::from_str("\"known\"").unwrap();
        assert_eq!(parsed, DictType::Known);
    }

    #[test]
    fn translate_language_wire_strings() {
        assert_eq!(serde_json::to_string(&TranslateLanguage::ZhCn).unwrap(), "\"zh-CN\"");
        assert_eq!(serde_json::to_string(&TranslateLanguage::None).unwrap(), "\"\"");
        let parsed: TranslateLanguage = serde_json::from_str("\"common\"").unwrap();
        assert_eq!(parsed, TranslateLanguage::Common);
    }

    #[test]
    fn dict_resource_deserializes_catalog_entry() {
        let resource: DictResource = serde_json::from_str(
            r#"{
                "id": "cet4",
                "name": "CET-4",
                "description": "College English Test band 4",
                "url": "dicts/cet4.json",
                "length": 2607,
                "category": "考试",
                "tags": ["大学"],
                "translateLanguage": "zh-CN",
                "type": "word",
                "language": "en"
            }"#,
        )
        .unwrap();
        assert_eq!(resource.length, 2607);
        assert_eq!(resource.translate_language, TranslateLanguage::ZhCn);
        assert_eq!(resource.dict_type, DictType::Word);
        assert_eq!(resource.language, Language::En);
    }

    #[test]
    fn dict_wire_field_names() {
        let json = serde_json::to_value(Dict::default()).unwrap();
        assert!(json.get("lastLearnIndex").is_some());
        assert!(json.get("perDayStudyNumber").is_some());
        assert!(json.get("langTypeStr").is_some());
        assert!(json.get("tranTypeStr").is_some());
        assert!(json.get("isCustom").is_some());
    }
}
