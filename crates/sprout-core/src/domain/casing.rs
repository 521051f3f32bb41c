//! String case conversion.
//!
//! Every conversion goes through [`split_words`], so all four output forms
//! agree on where the word boundaries of a name are.
//!
//! | Input           | camel          | Pascal         | kebab           | UPPER_SNAKE     |
//! |-----------------|----------------|----------------|-----------------|-----------------|
//! | `blog-post`     | `blogPost`     | `BlogPost`     | `blog-post`     | `BLOG_POST`     |
//! | `HTTPServer`    | `httpServer`   | `HttpServer`   | `http-server`   | `HTTP_SERVER`   |
//! | `site settings` | `siteSettings` | `SiteSettings` | `site-settings` | `SITE_SETTINGS` |

use std::ops::Range;

/// Convert a string to camelCase.
///
/// | Input | Output |
/// |-------|--------|
/// | "blog-post" | "blogPost" |
/// | "BlogPost" | "blogPost" |
/// | "ITEMS" | "items" |
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in split_words(s).iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

/// Convert a string to PascalCase.
///
/// ## Rules
///
/// 1. Split on word boundaries
/// 2. Capitalize first letter of each word
/// 3. Join without separator
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in split_words(s) {
        push_capitalized(&mut out, &word);
    }
    out
}

/// Convert a string to kebab-case.
///
/// Used for file and directory names.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to UPPER_SNAKE_CASE.
pub fn to_upper_snake_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Split a string into lowercase words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Separators:** any character that is not alphanumeric → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPRequest` → split between `P` and `R`
///    (detected by `Upper Upper Lower` pattern)
/// 4. **Digit then upper:** `v2Api` → split between `2` and `A`, but only
///    when the word so far has lowercase letters or the uppercase letter
///    starts a capitalised word (`V2API` stays one word)
///
/// Digits otherwise stay attached to the word they follow (`item2` is one
/// word). A combining mark belongs to the character before it, so the
/// lowercase of `İzmir` (`i̇zmir`) is still one word.
pub fn split_words(input: &str) -> Vec<String> {
    word_spans(input)
        .into_iter()
        .map(|span| input[span].to_lowercase())
        .collect()
}

/// Byte ranges of the words [`split_words`] finds, in the original text.
pub(crate) fn word_spans(input: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    // Last character of the current word that is not a combining mark.
    let mut base = ' ';
    // Case of the most recent letter in the current word.
    let mut last_letter_lower = false;

    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let in_word = c.is_alphanumeric() || (start.is_some() && is_combining_mark(c));
        if !in_word {
            if let Some(s) = start.take() {
                spans.push(s..i);
            }
            last_letter_lower = false;
            continue;
        }

        let s = *start.get_or_insert(i);
        if !is_combining_mark(c) {
            base = c;
        }
        if base.is_alphabetic() {
            last_letter_lower = base.is_lowercase();
        }

        let Some(&(next_i, next)) = chars.peek() else {
            break;
        };
        let after_next_lower = chars.clone().nth(1).is_some_and(|(_, n)| n.is_lowercase());

        let hump = next.is_uppercase()
            && (base.is_lowercase()
                || (base.is_numeric() && (last_letter_lower || after_next_lower)));
        let acronym_end = base.is_uppercase() && next.is_uppercase() && after_next_lower;

        if hump || acronym_end {
            spans.push(s..next_i);
            start = None;
            last_letter_lower = false;
        }
    }

    if let Some(s) = start {
        spans.push(s..input.len());
    }

    spans
}

/// Marks from the Unicode combining blocks (`U+0307` in `i̇`, for instance).
pub(crate) fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}
