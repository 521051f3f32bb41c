//! Best-effort English pluralisation.
//!
//! The result is only ever offered as an editable default, so the rules aim
//! at the nouns people actually name collections after rather than at
//! linguistic completeness.
//!
//! Only the trailing word of a name is inflected (`blog post` →
//! `blog posts`, `BlogPost` → `BlogPosts`), and the letter case of that word
//! is preserved (`ITEM` → `ITEMS`, `Child` → `Children`). Words are found
//! with the same boundaries as [`crate::domain::casing`], so `HTTPServer`
//! pluralises to `HTTPServers`.

use crate::domain::casing::{is_combining_mark, word_spans};

/// Nouns whose plural is the singular.
const UNCOUNTABLE: &[&str] = &[
    "aircraft",
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "moose",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
    "staff",
    "software",
];

/// Irregular singular → plural pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("cactus", "cacti"),
    ("criterion", "criteria"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("quiz", "quizzes"),
];

/// Stems that take `-ves`.
const F_TO_VES: &[&str] = &[
    "calf", "elf", "half", "knife", "leaf", "life", "loaf", "self", "shelf", "thief", "wife",
    "wolf",
];

/// Stems ending in `o` that take `-oes`.
const O_TO_OES: &[&str] = &["echo", "hero", "potato", "tomato", "torpedo", "veto"];

/// Pluralise a singular noun (or a name ending in one).
///
/// ```
/// use sprout_core::domain::pluralize;
///
/// assert_eq!(pluralize("item"), "items");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("blog-post"), "blog-posts");
/// assert_eq!(pluralize("person"), "people");
/// ```
pub fn pluralize(singular: &str) -> String {
    // The last word containing a letter, with the boundaries case conversion uses.
    let Some(span) = word_spans(singular)
        .into_iter()
        .rev()
        .find(|span| singular[span.clone()].chars().any(char::is_alphabetic))
    else {
        return singular.to_string();
    };

    // Digits after the last letter stay in place: `item2` → `items2`.
    let word = &singular[span.clone()];
    let letters_end = span.start
        + word
            .char_indices()
            .rev()
            .find(|(_, c)| is_letter(*c))
            .map_or(0, |(i, c)| i + c.len_utf8());
    let word_start = span.start
        + singular[span.start..letters_end]
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_letter(*c))
            .last()
            .map_or(0, |(i, _)| i);

    format!(
        "{}{}{}",
        &singular[..word_start],
        pluralize_word(&singular[word_start..letters_end]),
        &singular[letters_end..]
    )
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c)
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) || is_plural_already(&lower) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
        return match_case(word, plural);
    }

    let plural = regular_plural(&lower);
    match_case(word, &plural)
}

fn regular_plural(lower: &str) -> String {
    if F_TO_VES.contains(&lower) {
        let stem = lower
            .strip_suffix("fe")
            .or_else(|| lower.strip_suffix('f'))
            .unwrap_or(lower);
        return format!("{stem}ves");
    }

    if O_TO_OES.contains(&lower) {
        return format!("{lower}es");
    }

    // Latin/Greek -is: analysis → analyses, axis → axes
    if let Some(stem) = lower.strip_suffix("is") {
        if !stem.is_empty() {
            return format!("{stem}es");
        }
    }

    if let Some(stem) = lower.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{lower}es");
    }

    format!("{lower}s")
}

/// Heuristic: `items`, `posts`, `people` are left alone, while `bus`,
/// `class` and `status` still get pluralised.
fn is_plural_already(lower: &str) -> bool {
    if IRREGULAR.iter().any(|(_, p)| *p == lower) {
        return true;
    }

    let mut rev = lower.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('s'), Some(prev)) => !is_vowel(prev) && prev != 's' && lower.chars().count() > 3,
        _ => false,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Apply the casing pattern of `original` to `replacement`.
fn match_case(original: &str, replacement: &str) -> String {
    let has_letters = original.chars().any(char::is_alphabetic);
    if has_letters && original.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase) {
        // Single capital letters ("A") are ambiguous; treat them as capitalised.
        if original.chars().count() > 1 {
            return replacement.to_uppercase();
        }
    }

    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    replacement.to_string()
}
