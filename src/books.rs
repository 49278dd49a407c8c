//! Read-only lookup tables for the 66-book Protestant canon: display names,
//! verses per chapter (KJV versification), recognized name/abbreviation
//! patterns, and the fixed order in which books are matched.

/// Canonical display name of each book. Book `n` is index `n - 1`.
const BOOK_NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalm",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Verses in each chapter of each book. Book `n` is index `n - 1`; the
/// slice length is the book's chapter count.
const CHAPTER_VERSE_COUNTS: [&[u16]; 66] = [
    // Genesis
    &[
        31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34, 24,
        20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38, 34, 34,
        28, 34, 31, 22, 33, 26,
    ],
    // Exodus
    &[
        22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36, 31,
        33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
    ],
    // Leviticus
    &[
        17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33,
        44, 23, 55, 46, 34,
    ],
    // Numbers
    &[
        54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35, 41,
        30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13,
    ],
    // Deuteronomy
    &[
        46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23, 30,
        25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
    ],
    // Joshua
    &[
        18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34,
        16, 33,
    ],
    // Judges
    &[
        36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25,
    ],
    // Ruth
    &[22, 23, 18, 22],
    // 1 Samuel
    &[
        28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15, 23,
        29, 22, 44, 25, 12, 25, 11, 31, 13,
    ],
    // 2 Samuel
    &[
        27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22, 51,
        39, 25,
    ],
    // 1 Kings
    &[
        53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29, 53,
    ],
    // 2 Kings
    &[
        18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26, 20,
        37, 20, 30,
    ],
    // 1 Chronicles
    &[
        54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19,
        32, 31, 31, 32, 34, 21, 30,
    ],
    // 2 Chronicles
    &[
        17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20, 12,
        21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
    ],
    // Ezra
    &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
    // Nehemiah
    &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
    // Esther
    &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
    // Job
    &[
        22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34, 30,
        17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
    ],
    // Psalm
    &[
        6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10, 22,
        12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11, 9, 14,
        20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36, 5, 24,
        20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16, 15, 5, 23,
        11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8, 18, 19, 2, 29,
        176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24, 13, 10, 7, 12, 15,
        21, 10, 20, 14, 9, 6,
    ],
    // Proverbs
    &[
        33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31, 29,
        35, 34, 28, 28, 27, 28, 27, 33, 31,
    ],
    // Ecclesiastes
    &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
    // Song of Solomon
    &[17, 17, 11, 16, 16, 13, 13, 14],
    // Isaiah
    &[
        31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18,
        23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25,
        13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24,
    ],
    // Jeremiah
    &[
        19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14, 30,
        40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22, 13, 30,
        5, 28, 7, 47, 39, 46, 64, 34,
    ],
    // Lamentations
    &[22, 22, 66, 22, 22],
    // Ezekiel
    &[
        28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31,
        49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27, 31,
        25, 24, 23, 35,
    ],
    // Daniel
    &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
    // Hosea
    &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
    // Joel
    &[20, 32, 21],
    // Amos
    &[15, 16, 15, 13, 27, 14, 17, 14, 15],
    // Obadiah
    &[21],
    // Jonah
    &[17, 10, 10, 11],
    // Micah
    &[16, 13, 12, 13, 15, 16, 20],
    // Nahum
    &[15, 13, 19],
    // Habakkuk
    &[17, 20, 19],
    // Zephaniah
    &[18, 15, 20],
    // Haggai
    &[15, 23],
    // Zechariah
    &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
    // Malachi
    &[14, 17, 18, 6],
    // Matthew
    &[
        25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46,
        39, 51, 46, 75, 66, 20,
    ],
    // Mark
    &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
    // Luke
    &[
        80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38, 71,
        56, 53,
    ],
    // John
    &[
        51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
    ],
    // Acts
    &[
        26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40, 30,
        35, 27, 27, 32, 44, 31,
    ],
    // Romans
    &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
    // 1 Corinthians
    &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
    // 2 Corinthians
    &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
    // Galatians
    &[24, 21, 29, 31, 26, 18],
    // Ephesians
    &[23, 22, 21, 32, 33, 24],
    // Philippians
    &[30, 30, 21, 23],
    // Colossians
    &[29, 23, 25, 18],
    // 1 Thessalonians
    &[10, 20, 13, 18, 28],
    // 2 Thessalonians
    &[12, 17, 18],
    // 1 Timothy
    &[20, 15, 16, 16, 25, 21],
    // 2 Timothy
    &[18, 26, 17, 22],
    // Titus
    &[16, 15, 15],
    // Philemon
    &[25],
    // Hebrews
    &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
    // James
    &[27, 26, 18, 17, 20],
    // 1 Peter
    &[25, 25, 22, 19, 14],
    // 2 Peter
    &[21, 22, 18],
    // 1 John
    &[10, 29, 24, 21, 21],
    // 2 John
    &[13],
    // 3 John
    &[14],
    // Jude
    &[25],
    // Revelation
    &[
        20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21,
    ],
];

/// Recognized names, abbreviations, and common misspellings for each book,
/// as regex alternation bodies. Book `n` is index `n - 1`. Ordinal-prefixed
/// books (1/2 Samuel and friends) list only the base name here; the ordinal
/// alternation is composed in front when the grammar is assembled.
const BOOK_ALTERNATES: [&str; 66] = [
    "genesis|gen|gn|ge",
    "exodus|exod|exo|exd|ex",
    "leviticus|lev|levi|le|lv",
    "numbers|number|numb|num|nmb|nu|nm",
    "deuteronomy|deut|deu|dt",
    "joshua|josh|jsh|jos",
    "judges|jdgs|judg|jdg",
    "ruth|rut|rth|ru",
    "samuels|samuel|sam|sa|sm",
    "samuels|samuel|sam|sa|sm",
    "kings|king|kngs|kgs|kg|k",
    "kings|king|kngs|kgs|kg|k",
    "chronicles|chronicle|chron|chrn|chr",
    "chronicles|chronicle|chron|chrn|chr",
    "ezra|ezr",
    "nehemiah|neh|ne",
    "esther|esth|est|es",
    "job|jb",
    "psalms|psalm|pslms|pslm|psm|psa|ps",
    "proverbs|proverb|prov|prv|prvb|prvbs|pv",
    "ecclesiastes|eccles|eccl|ecc|ecl",
    r"(?:the\s?)?song\s?of\s?solomon|(?:the\s?)?song\s?of\s?songs|sn?gs?|songs?|so?s|sol?|son|s\s?of\s?s",
    "isaiah|isa|is|ia|isai|isah",
    "jeremiah?|jer?|jr|jere",
    "lamentations?|lam?|lm",
    "ezekiel|ezek|eze|ezk",
    "daniel|dan|dn|dl|da",
    "hosea|hos|ho|hs",
    "joel|jl",
    "amos|amo|ams|am",
    "obadiah|obadia|obad|oba|obd|ob",
    "jonah|jon",
    "micah|mica|mic|mi",
    "nahum|nah|nahu|na",
    "habakk?uk|habk?",
    "zephaniah?|ze?ph?",
    "haggai|ha?gg?",
    "zechariah?|ze?ch?",
    "malachi|mal",
    "matthew|matt|mat|ma|mt",
    "mark|mrk|mk",
    "luke|luk|lk|lu",
    "john|joh|jon|jhn|jh|jo|jn",
    "acts|act|ac",
    "romans|roman|roms|rom|rms|ro|rm",
    "corinthians?|cor?|corint?h?|corth",
    "corinthians?|cor?|corint?h?|corth",
    "galatians|galatian|galat|gala|gal|ga",
    "ephesians?|eph?|ephe?s?",
    "philippians?|phi?l|php|phi|philipp?",
    "colossi?ans?|col?",
    "thessalonians?|thes{1,}|the?s?",
    "thessalonians?|thes{1,}|the?s?",
    "timothy|tim|tm|ti",
    "timothy|tim|tm|ti",
    "titus|tit|ti",
    "philemon|phl?mn?|philem?",
    "hebrews|hebrew|heb",
    "james|jam|jas|jm|js|ja",
    "peter|pete|pet|ptr|pe|pt|pr",
    "peter|pete|pet|ptr|pe|pt|pr",
    "john|joh|jon|jhn|jh|jo|jn",
    "john|joh|jon|jhn|jh|jo|jn",
    "john|joh|jon|jhn|jh|jo|jn",
    "jude",
    "revelations|revelation|revel|rev|rv|re",
];

/// The order in which book alternatives are tried. Ordinal-prefixed forms
/// come before their un-prefixed bases so "2 John 3" never resolves as
/// plain John, and Isaiah is tried early so "is" wins over later books.
pub(crate) const BOOK_MATCH_ORDER: [u8; 66] = [
    64, 10, 12, 14, 63, 47, 53, 55, 61, 9, 11, 13, 62, 46, 52, 54, 60, 1, 2, 3, 4, 5, 6, 7, 8,
    23, 15, 16, 17, 18, 19, 20, 21, 22, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
    38, 39, 40, 41, 42, 43, 44, 45, 48, 49, 50, 51, 56, 57, 58, 59, 65, 66,
];

/// Ordinal prefix (1, 2, or 3) a book's name carries, if any.
pub(crate) fn ordinal(book: u8) -> Option<u8> {
    match book {
        9 | 11 | 13 | 46 | 52 | 54 | 60 | 62 => Some(1),
        10 | 12 | 14 | 47 | 53 | 55 | 61 | 63 => Some(2),
        64 => Some(3),
        _ => None,
    }
}

fn index(book: u8) -> Option<usize> {
    if (1..=66).contains(&book) {
        Some(usize::from(book) - 1)
    } else {
        None
    }
}

/// Canonical display name, e.g. `book_name(45)` is "Romans".
pub fn book_name(book: u8) -> Option<&'static str> {
    index(book).map(|i| BOOK_NAMES[i])
}

/// Number of chapters in a book.
pub fn chapter_count(book: u8) -> Option<u16> {
    index(book).map(|i| CHAPTER_VERSE_COUNTS[i].len() as u16)
}

/// Number of verses in a chapter (1-based).
pub fn max_verse(book: u8, chapter: u16) -> Option<u16> {
    let counts = index(book).map(|i| CHAPTER_VERSE_COUNTS[i])?;
    counts.get(usize::from(chapter).checked_sub(1)?).copied()
}

/// Whether references to this book carry chapter numbers. Single-chapter
/// books (Obadiah, Philemon, ...) are cited by verse alone.
pub fn has_chapters(book: u8) -> bool {
    chapter_count(book).is_some_and(|count| count > 1)
}

/// The recognized name/abbreviation set for a book, as the branches of its
/// alternation pattern. Branches are regex fragments (`cor?` covers both
/// "co" and "cor"), not plain strings.
pub fn name_alternatives(book: u8) -> impl Iterator<Item = &'static str> {
    index(book)
        .map(|i| BOOK_ALTERNATES[i])
        .unwrap_or_default()
        .split('|')
        .filter(|alt| !alt.is_empty())
}

/// Alternation body for a book, ordinal prefix included where the name
/// carries one.
pub(crate) fn alternation_pattern(book: u8) -> Option<String> {
    let base = index(book).map(|i| BOOK_ALTERNATES[i])?;
    let pattern = match ordinal(book) {
        Some(1) => format!(r"(?:1|i|first|1st)\s*(?:{base})"),
        Some(2) => format!(r"(?:2|ii|second|2nd)\s*(?:{base})"),
        Some(3) => format!(r"(?:3|iii|third|3rd)\s*(?:{base})"),
        _ => format!("(?:{base})"),
    };
    Some(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_by_id() {
        assert_eq!(book_name(1), Some("Genesis"));
        assert_eq!(book_name(19), Some("Psalm"));
        assert_eq!(book_name(66), Some("Revelation"));
        assert_eq!(book_name(0), None);
        assert_eq!(book_name(67), None);
    }

    #[test]
    fn verse_counts() {
        assert_eq!(max_verse(1, 9), Some(29));
        assert_eq!(max_verse(19, 119), Some(176));
        assert_eq!(max_verse(43, 13), Some(38));
        assert_eq!(max_verse(57, 1), Some(25));
        assert_eq!(max_verse(1, 51), None);
        assert_eq!(max_verse(1, 0), None);
    }

    #[test]
    fn chapter_counts() {
        assert_eq!(chapter_count(19), Some(150));
        assert_eq!(chapter_count(65), Some(1));
        assert!(has_chapters(41));
        assert!(!has_chapters(57));
        assert!(!has_chapters(31));
    }

    #[test]
    fn canon_totals() {
        let chapters: usize = CHAPTER_VERSE_COUNTS.iter().map(|c| c.len()).sum();
        let verses: u32 = CHAPTER_VERSE_COUNTS
            .iter()
            .flat_map(|c| c.iter())
            .map(|&v| u32::from(v))
            .sum();
        assert_eq!(chapters, 1189);
        assert_eq!(verses, 31_102);
    }

    #[test]
    fn match_order_covers_every_book_once() {
        let mut seen = [false; 66];
        for &book in &BOOK_MATCH_ORDER {
            let i = usize::from(book) - 1;
            assert!(!seen[i], "book {book} listed twice");
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn alternatives_include_common_abbreviations() {
        let genesis: Vec<&str> = name_alternatives(1).collect();
        assert!(genesis.contains(&"gen"));
        let peter: Vec<&str> = name_alternatives(61).collect();
        assert!(peter.contains(&"pet"));
    }
}
