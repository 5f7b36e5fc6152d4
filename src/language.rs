use serde::Serialize;

// Append the target word; the result is a streamable audio location.
pub const PRONUNCIATION_API: &str = "https://dict.youdao.com/dictvoice?audio=";

pub fn pronunciation_url(word: &str) -> String {
    format!("{PRONUNCIATION_API}{word}")
}

/// Supported machine-translation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateEngine {
    Baidu = 0,
}

/// One entry of the language/category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub flag: &'static str, // icon asset path
}

/// Selector entries, in display order.
pub const LANGUAGE_CATEGORY_OPTIONS: [LanguageCategory; 6] = [
    LanguageCategory { id: "article", name: "文章", flag: "flags/book.png" },
    LanguageCategory { id: "en", name: "英语", flag: "flags/en.png" },
    LanguageCategory { id: "ja", name: "日语", flag: "flags/ja.png" },
    LanguageCategory { id: "de", name: "德语", flag: "flags/de.png" },
    LanguageCategory { id: "code", name: "Code", flag: "flags/code.png" },
    LanguageCategory { id: "my", name: "我的", flag: "flags/my.png" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pronunciation_url_appends_the_word() {
        assert_eq!(
            pronunciation_url("apple"),
            "https://dict.youdao.com/dictvoice?audio=apple"
        );
    }

    #[test]
    fn six_category_options_with_ids_and_names() {
        assert_eq!(LANGUAGE_CATEGORY_OPTIONS.len(), 6);
        for option in LANGUAGE_CATEGORY_OPTIONS {
            assert!(!option.id.is_empty());
            assert!(!option.name.is_empty());
        }
        assert_eq!(LANGUAGE_CATEGORY_OPTIONS[0].id, "article");
    }
}
