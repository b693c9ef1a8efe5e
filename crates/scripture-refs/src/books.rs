/*
 * books.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Canonical book codes, display names and the alias table.
//!
//! Every book of the 66-book canon has one [`BookCode`]. The code carries a
//! Chinese and an English display name and a list of aliases that users
//! type in citations. Aliases are collected into a process-wide table the
//! first time [`resolve`] is called; the table is never written afterwards.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Static description of one book.
#[derive(Debug)]
struct BookEntry {
    code: &'static str,
    en: &'static str,
    cn: &'static str,
    cn_short: &'static str,
    /// English abbreviations beyond the code and the full name.
    extra: &'static [&'static str],
}

/// Chinese and English display names of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookNames {
    pub cn: &'static str,
    pub en: &'static str,
}

macro_rules! book_table {
    ($(
        $variant:ident => $code:literal, $en:literal, $cn:literal, $cn_short:literal,
        [$($extra:literal),*];
    )*) => {
        /// Canonical identifier of a scripture book.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BookCode {
            $($variant,)*
        }

        impl BookCode {
            /// All books in canonical order.
            pub const ALL: &'static [BookCode] = &[$(BookCode::$variant,)*];

            fn entry(self) -> &'static BookEntry {
                match self {
                    $(BookCode::$variant => &BookEntry {
                        code: $code,
                        en: $en,
                        cn: $cn,
                        cn_short: $cn_short,
                        extra: &[$($extra),*],
                    },)*
                }
            }
        }
    };
}

book_table! {
    Genesis => "Gen", "Genesis", "创世记", "创", ["ge", "gn"];
    Exodus => "Exo", "Exodus", "出埃及记", "出", ["ex", "exod"];
    Leviticus => "Lev", "Leviticus", "利未记", "利", ["lv"];
    Numbers => "Num", "Numbers", "民数记", "民", ["nu", "nm"];
    Deuteronomy => "Deu", "Deuteronomy", "申命记", "申", ["deut", "dt"];
    Joshua => "Jos", "Joshua", "约书亚记", "书", ["josh"];
    Judges => "Jdg", "Judges", "士师记", "士", ["judg"];
    Ruth => "Rut", "Ruth", "路得记", "得", ["ru"];
    FirstSamuel => "1Sa", "1 Samuel", "撒母耳记上", "撒上", ["1sam"];
    SecondSamuel => "2Sa", "2 Samuel", "撒母耳记下", "撒下", ["2sam"];
    FirstKings => "1Ki", "1 Kings", "列王纪上", "王上", ["1kgs"];
    SecondKings => "2Ki", "2 Kings", "列王纪下", "王下", ["2kgs"];
    FirstChronicles => "1Ch", "1 Chronicles", "历代志上", "代上", ["1chr", "1chron"];
    SecondChronicles => "2Ch", "2 Chronicles", "历代志下", "代下", ["2chr", "2chron"];
    Ezra => "Ezr", "Ezra", "以斯拉记", "拉", [];
    Nehemiah => "Neh", "Nehemiah", "尼希米记", "尼", [];
    Esther => "Est", "Esther", "以斯帖记", "斯", ["esth"];
    Job => "Job", "Job", "约伯记", "伯", [];
    Psalms => "Psa", "Psalms", "诗篇", "诗", ["psalm", "ps"];
    Proverbs => "Pro", "Proverbs", "箴言", "箴", ["prov", "pr"];
    Ecclesiastes => "Ecc", "Ecclesiastes", "传道书", "传", ["eccl"];
    SongOfSongs => "Sng", "Song of Songs", "雅歌", "歌", ["song", "songofsolomon", "ss"];
    Isaiah => "Isa", "Isaiah", "以赛亚书", "赛", [];
    Jeremiah => "Jer", "Jeremiah", "耶利米书", "耶", [];
    Lamentations => "Lam", "Lamentations", "耶利米哀歌", "哀", [];
    Ezekiel => "Ezk", "Ezekiel", "以西结书", "结", ["ezek"];
    Daniel => "Dan", "Daniel", "但以理书", "但", [];
    Hosea => "Hos", "Hosea", "何西阿书", "何", [];
    Joel => "Jol", "Joel", "约珥书", "珥", [];
    Amos => "Amo", "Amos", "阿摩司书", "摩", [];
    Obadiah => "Oba", "Obadiah", "俄巴底亚书", "俄", ["obad"];
    Jonah => "Jon", "Jonah", "约拿书", "拿", [];
    Micah => "Mic", "Micah", "弥迦书", "弥", [];
    Nahum => "Nam", "Nahum", "那鸿书", "鸿", ["nah"];
    Habakkuk => "Hab", "Habakkuk", "哈巴谷书", "哈", [];
    Zephaniah => "Zep", "Zephaniah", "西番雅书", "番", ["zeph"];
    Haggai => "Hag", "Haggai", "哈该书", "该", [];
    Zechariah => "Zec", "Zechariah", "撒迦利亚书", "亚", ["zech"];
    Malachi => "Mal", "Malachi", "玛拉基书", "玛", [];
    Matthew => "Mat", "Matthew", "马太福音", "太", ["matt", "mt"];
    Mark => "Mrk", "Mark", "马可福音", "可", ["mk", "mar"];
    Luke => "Luk", "Luke", "路加福音", "路", ["lk"];
    John => "Jhn", "John", "约翰福音", "约", ["jn", "joh"];
    Acts => "Act", "Acts", "使徒行传", "徒", [];
    Romans => "Rom", "Romans", "罗马书", "罗", [];
    FirstCorinthians => "1Co", "1 Corinthians", "哥林多前书", "林前", ["1cor"];
    SecondCorinthians => "2Co", "2 Corinthians", "哥林多后书", "林后", ["2cor"];
    Galatians => "Gal", "Galatians", "加拉太书", "加", [];
    Ephesians => "Eph", "Ephesians", "以弗所书", "弗", [];
    Philippians => "Php", "Philippians", "腓立比书", "腓", ["phil"];
    Colossians => "Col", "Colossians", "歌罗西书", "西", [];
    FirstThessalonians => "1Th", "1 Thessalonians", "帖撒罗尼迦前书", "帖前", ["1thess"];
    SecondThessalonians => "2Th", "2 Thessalonians", "帖撒罗尼迦后书", "帖后", ["2thess"];
    FirstTimothy => "1Ti", "1 Timothy", "提摩太前书", "提前", ["1tim"];
    SecondTimothy => "2Ti", "2 Timothy", "提摩太后书", "提后", ["2tim"];
    Titus => "Tit", "Titus", "提多书", "多", [];
    Philemon => "Phm", "Philemon", "腓利门书", "门", ["philem"];
    Hebrews => "Heb", "Hebrews", "希伯来书", "来", [];
    James => "Jas", "James", "雅各书", "雅", [];
    FirstPeter => "1Pe", "1 Peter", "彼得前书", "彼前", ["1pet"];
    SecondPeter => "2Pe", "2 Peter", "彼得后书", "彼后", ["2pet"];
    FirstJohn => "1Jn", "1 John", "约翰一书", "约壹", [];
    SecondJohn => "2Jn", "2 John", "约翰二书", "约贰", [];
    ThirdJohn => "3Jn", "3 John", "约翰三书", "约叁", [];
    Jude => "Jud", "Jude", "犹大书", "犹", [];
    Revelation => "Rev", "Revelation", "启示录", "启", [];
}

impl BookCode {
    /// The canonical short code, e.g. `Gen` or `1Co`.
    pub fn code(self) -> &'static str {
        self.entry().code
    }

    /// Chinese and English display names.
    pub fn names(self) -> BookNames {
        let entry = self.entry();
        BookNames {
            cn: entry.cn,
            en: entry.en,
        }
    }

    /// Look a book up by its canonical code. Matching is exact.
    pub fn from_code(code: &str) -> Option<BookCode> {
        BookCode::ALL.iter().copied().find(|book| book.code() == code)
    }

    /// Every alias that resolves to this book.
    fn aliases(self) -> impl Iterator<Item = String> {
        let entry = self.entry();
        [alias_key(entry.code), alias_key(entry.en)]
            .into_iter()
            .chain(entry.extra.iter().map(|alias| alias_key(alias)))
            .chain([entry.cn_short.to_string(), entry.cn.to_string()])
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for BookCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for BookCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        BookCode::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown book code '{}'", code)))
    }
}

/// Lookup key for an alias: whitespace removed, Latin letters lower-cased.
/// Lower-casing leaves CJK characters untouched.
fn alias_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

static ALIASES: LazyLock<HashMap<String, BookCode>> = LazyLock::new(|| {
    BookCode::ALL
        .iter()
        .flat_map(|book| book.aliases().map(move |alias| (alias, *book)))
        .collect()
});

/// Resolve a raw book token to its canonical code.
///
/// Lookup is a single table hit: no prefix or fuzzy matching.
pub fn resolve(raw: &str) -> Option<BookCode> {
    ALIASES.get(&alias_key(raw)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canon_has_66_books() {
        assert_eq!(BookCode::ALL.len(), 66);
        let codes: HashSet<_> = BookCode::ALL.iter().map(|b| b.code()).collect();
        assert_eq!(codes.len(), 66);
    }

    #[test]
    fn test_aliases_are_many_to_one() {
        let mut seen: HashMap<String, BookCode> = HashMap::new();
        for book in BookCode::ALL {
            for alias in book.aliases() {
                if let Some(previous) = seen.insert(alias.clone(), *book) {
                    assert_eq!(
                        previous, *book,
                        "alias '{}' maps to both {} and {}",
                        alias, previous, book
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_chinese() {
        assert_eq!(resolve("创"), Some(BookCode::Genesis));
        assert_eq!(resolve("创世记"), Some(BookCode::Genesis));
        assert_eq!(resolve("出"), Some(BookCode::Exodus));
        assert_eq!(resolve("太"), Some(BookCode::Matthew));
        assert_eq!(resolve("启示录"), Some(BookCode::Revelation));
        assert_eq!(resolve("约壹"), Some(BookCode::FirstJohn));
        assert_eq!(resolve("林前"), Some(BookCode::FirstCorinthians));
    }

    #[test]
    fn test_resolve_english_is_case_insensitive() {
        assert_eq!(resolve("Gen"), Some(BookCode::Genesis));
        assert_eq!(resolve("GENESIS"), Some(BookCode::Genesis));
        assert_eq!(resolve("ex"), Some(BookCode::Exodus));
        assert_eq!(resolve("Rev"), Some(BookCode::Revelation));
        assert_eq!(resolve("Matthew"), Some(BookCode::Matthew));
    }

    #[test]
    fn test_resolve_numbered_books() {
        assert_eq!(resolve("1Cor"), Some(BookCode::FirstCorinthians));
        assert_eq!(resolve("1 Cor"), Some(BookCode::FirstCorinthians));
        assert_eq!(resolve("2 Kings"), Some(BookCode::SecondKings));
        assert_eq!(resolve("3jn"), Some(BookCode::ThirdJohn));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("Xyz"), None);
        assert_eq!(resolve("创世"), None);
        assert_eq!(resolve(""), None);
        // No prefix matching
        assert_eq!(resolve("Gene"), None);
    }

    #[test]
    fn test_names_and_codes() {
        let names = BookCode::Exodus.names();
        assert_eq!(names.cn, "出埃及记");
        assert_eq!(names.en, "Exodus");
        assert_eq!(BookCode::Exodus.code(), "Exo");
        assert_eq!(BookCode::from_code("Rev"), Some(BookCode::Revelation));
        assert_eq!(BookCode::from_code("rev"), None);
    }

    #[test]
    fn test_every_code_round_trips() {
        for book in BookCode::ALL {
            assert_eq!(BookCode::from_code(book.code()), Some(*book));
            assert_eq!(resolve(book.code()), Some(*book));
            assert_eq!(resolve(book.names().cn), Some(*book));
        }
    }
}
