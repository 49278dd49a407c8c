//! Rendering resolved ranges back into display strings.

use crate::books;
use crate::types::VerseRange;

/// Separator and style configuration for rendering.
///
/// The defaults produce the house style: en-dash verse ranges, em-dash
/// chapter ranges ("Psalm 1—8"), comma-joined verse lists and
/// semicolon-joined chapter lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Between the two verses of a same-chapter range. Default "–".
    pub verse_range_separator: String,
    /// Between the two chapters of a chapter-spanning range. Default "—".
    pub chapter_range_separator: String,
    /// Between list items within one chapter. Default ", ".
    pub verse_list_separator: String,
    /// Between list items that change chapter. Default "; ".
    pub chapter_list_separator: String,
    /// Spell out verse bounds even for whole-chapter ranges, so "Psalm 1"
    /// renders as "Psalm 1:1–6". Always in effect for chapterless books,
    /// whose bare numbers read as verses.
    pub always_print_verse_range: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            verse_range_separator: "–".to_string(),
            chapter_range_separator: "—".to_string(),
            verse_list_separator: ", ".to_string(),
            chapter_list_separator: "; ".to_string(),
            always_print_verse_range: false,
        }
    }
}

/// Render the reference tail (everything after the book name).
///
/// Tracks the most recently rendered chapter and verse so later items
/// shed redundant prefixes: "12:1–8, 11" rather than "12:1–12:8, 12:11",
/// and the compact letter form "9:12a, c".
pub(crate) fn format_reference(book: u8, ranges: &[VerseRange], options: &FormatOptions) -> String {
    let chapterless = !books::has_chapters(book);
    let mut recent_chapter: Option<u16> = chapterless.then_some(1);
    let mut recent_verse: Option<u16> = None;

    let mut out = String::new();
    for (i, range) in ranges.iter().enumerate() {
        let begin = range.begin();
        let end = range.end();

        if i > 0 {
            if recent_chapter == Some(begin.chapter()) {
                out.push_str(&options.verse_list_separator);
            } else {
                out.push_str(&options.chapter_list_separator);
            }
        }

        let whole_chapters = begin.verse() == 1
            && !begin.is_partial()
            && !end.is_partial()
            && books::max_verse(book, end.chapter()).is_some_and(|max| end.verse() >= max)
            && !options.always_print_verse_range
            && !chapterless;

        if whole_chapters {
            out.push_str(&begin.chapter().to_string());
            if end.chapter() > begin.chapter() {
                out.push_str(&options.chapter_range_separator);
                out.push_str(&end.chapter().to_string());
            }
            recent_verse = None;
            continue;
        }

        if recent_chapter == Some(begin.chapter()) {
            if begin.is_partial() && recent_verse == Some(begin.verse()) {
                // "9:12a, c" — the verse number is already on the page.
            } else {
                out.push_str(&begin.verse().to_string());
            }
        } else {
            out.push_str(&begin.chapter().to_string());
            out.push(':');
            out.push_str(&begin.verse().to_string());
            recent_chapter = Some(begin.chapter());
        }
        if let Some(letter) = begin.letter() {
            out.push(letter);
        }
        recent_verse = Some(begin.verse());

        if begin == end {
            continue;
        }

        if begin.chapter() == end.chapter() {
            out.push_str(&options.verse_range_separator);
            if !(end.is_partial() && end.verse() == begin.verse()) {
                out.push_str(&end.verse().to_string());
            }
        } else {
            out.push_str(&options.chapter_range_separator);
            out.push_str(&end.chapter().to_string());
            out.push(':');
            out.push_str(&end.verse().to_string());
            recent_chapter = Some(end.chapter());
        }
        if let Some(letter) = end.letter() {
            out.push(letter);
        }
        recent_verse = Some(end.verse());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::grammar::Grammar;
    use crate::resolver;

    fn render(book: u8, reference: &str) -> String {
        let grammar = Grammar::cached(Config::default());
        let ranges = resolver::parse_reference(book, reference, &grammar);
        format_reference(book, &ranges, &FormatOptions::default())
    }

    #[test]
    fn a_point_renders_as_chapter_and_verse() {
        assert_eq!(render(43, "3:16"), "3:16");
    }

    #[test]
    fn whole_chapters_render_bare() {
        assert_eq!(render(1, "1"), "1");
        assert_eq!(render(19, "1-8"), "1—8");
    }

    #[test]
    fn always_print_verse_range_spells_out_the_bounds() {
        let grammar = Grammar::cached(Config::default());
        let ranges = resolver::parse_reference(1, "1", &grammar);
        let options = FormatOptions {
            always_print_verse_range: true,
            ..FormatOptions::default()
        };
        assert_eq!(format_reference(1, &ranges, &options), "1:1–31");
    }

    #[test]
    fn list_items_shed_repeated_chapters() {
        assert_eq!(render(50, "1:1-17, 2:3-5, 17"), "1:1–17; 2:3–5, 17");
    }

    #[test]
    fn chapterless_books_never_print_chapter_digits() {
        assert_eq!(render(57, "8-10"), "8–10");
        assert_eq!(render(57, "1-25"), "1–25");
    }

    #[test]
    fn chapter_spanning_ranges_print_both_coordinates() {
        assert_eq!(render(43, "12:1-13:8"), "12:1—13:8");
    }

    #[test]
    fn letters_render_where_they_resolved() {
        assert_eq!(render(43, "9:12a, c"), "9:12a, c");
        assert_eq!(render(43, "9:12a-b"), "9:12a–b");
        assert_eq!(render(43, "9:12b-13"), "9:12b–13");
    }

    #[test]
    fn custom_separators_apply() {
        let grammar = Grammar::cached(Config::default());
        let ranges = resolver::parse_reference(19, "118:17-18, 23", &grammar);
        let options = FormatOptions {
            verse_range_separator: "-".to_string(),
            verse_list_separator: ",".to_string(),
            ..FormatOptions::default()
        };
        assert_eq!(format_reference(19, &ranges, &options), "118:17-18,23");
    }
}
