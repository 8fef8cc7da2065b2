//! English singular/plural forms of identifier names
//!
//! Only the last word of an identifier is inflected: `field_value` becomes
//! `field_values` and `FieldCity` becomes `FieldCities`. The case of that
//! word is preserved (`URL`/`URLs` style acronyms stay upper case).

/// Words whose singular and plural forms are the same
const UNCOUNTABLE: &[&str] = &[
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// (singular, plural) pairs that do not follow the suffix rules
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("appendix", "appendices"),
    ("axis", "axes"),
    ("basis", "bases"),
    ("cache", "caches"),
    ("cactus", "cacti"),
    ("calf", "calves"),
    ("cause", "causes"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("elf", "elves"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("house", "houses"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("ox", "oxen"),
    ("pause", "pauses"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("radius", "radii"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("status", "statuses"),
    ("thesis", "theses"),
    ("thief", "thieves"),
    ("tooth", "teeth"),
    ("use", "uses"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Words ending in `o` that take `-es`
const O_ES: &[&str] = &[
    "buffalo", "echo", "embargo", "hero", "mosquito", "potato", "tomato", "torpedo", "veto",
    "volcano",
];

/// Singular words ending in `s` that no suffix rule covers
const S_SINGULAR: &[&str] = &["bias", "canvas", "lens"];

/// Endings of singular words whose final `s` is not a plural suffix
const S_SINGULAR_ENDINGS: &[&str] = &["alias", "gas", "ris", "tlas", "tmas"];

fn keeps_final_s(word: &str) -> bool {
    S_SINGULAR.contains(&word) || S_SINGULAR_ENDINGS.iter().any(|end| word.ends_with(end))
}

/// Splits an identifier into everything before its last word and the word.
fn split_last_word(name: &str) -> (&str, &str) {
    if let Some(i) = name.rfind('_') {
        return name.split_at(i + 1);
    }
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    for pos in (1..chars.len()).rev() {
        let (i, c) = chars[pos];
        let prev = chars[pos - 1].1;
        if c.is_uppercase() && (prev.is_lowercase() || prev.is_ascii_digit()) {
            return name.split_at(i);
        }
    }
    ("", name)
}

enum Case {
    Lower,
    Upper,
    Title,
}

fn case_of(word: &str) -> Case {
    // URLs counts as an upper-case word
    let core = word
        .strip_suffix('s')
        .filter(|stem| stem.chars().count() > 1)
        .unwrap_or(word);
    let mut chars = core.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let letters: Vec<char> = chars.filter(|c| c.is_alphabetic()).collect();
            if !letters.is_empty() && letters.iter().all(|c| c.is_uppercase()) {
                Case::Upper
            } else {
                Case::Title
            }
        }
        _ => Case::Lower,
    }
}

fn restore_case(word: &str, case: &Case) -> String {
    match case {
        Case::Lower => word.to_string(),
        // acronyms keep a lower-case plural suffix: URL -> URLs
        Case::Upper => {
            let upper = word.to_uppercase();
            match word.strip_suffix('s') {
                Some(stem) if !stem.is_empty() && !stem.ends_with('s') => {
                    format!("{}s", stem.to_uppercase())
                }
                _ => upper,
            }
        }
        Case::Title => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

fn plural_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) || IRREGULAR.iter().any(|(_, p)| *p == word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == word) {
        return plural.to_string();
    }
    if ends_with_consonant_y(word) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|end| word.ends_with(end)) {
        return format!("{word}es");
    }
    if O_ES.contains(&word) {
        return format!("{word}es");
    }
    format!("{word}s")
}

fn singular_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) || IRREGULAR.iter().any(|(s, _)| *s == word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == word) {
        return singular.to_string();
    }
    if keeps_final_s(word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if O_ES.contains(&stem) || keeps_final_s(stem) {
            return stem.to_string();
        }
        if ["ss", "x", "z", "ch", "sh"].iter().any(|end| stem.ends_with(end)) {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        let kept = ['s', 'u', 'i'].iter().any(|&c| stem.ends_with(c));
        if !stem.is_empty() && !kept {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn inflect(name: &str, rule: fn(&str) -> String) -> String {
    let (head, word) = split_last_word(name);
    if word.is_empty() {
        return name.to_string();
    }
    let case = case_of(word);
    let inflected = rule(&word.to_lowercase());
    format!("{head}{}", restore_case(&inflected, &case))
}

/// Plural form of an identifier
pub fn plural(name: &str) -> String {
    inflect(name, plural_word)
}

/// Singular form of an identifier
pub fn singular(name: &str) -> String {
    inflect(name, singular_word)
}

fn last_word_lower(name: &str) -> String {
    split_last_word(name).1.to_lowercase()
}

pub fn is_plural(name: &str) -> bool {
    let word = last_word_lower(name);
    if UNCOUNTABLE.contains(&word.as_str()) {
        return true;
    }
    if IRREGULAR.iter().any(|(_, p)| *p == word) {
        return true;
    }
    if IRREGULAR.iter().any(|(s, _)| *s == word) {
        return false;
    }
    singular_word(&word) != word
}

pub fn is_singular(name: &str) -> bool {
    let word = last_word_lower(name);
    if UNCOUNTABLE.contains(&word.as_str()) {
        return true;
    }
    !is_plural(name)
}

#[cfg(test)]
pub(crate) fn is_regular(word: &str) -> bool {
    let word = word.to_lowercase();
    !UNCOUNTABLE.contains(&word.as_str())
        && !IRREGULAR.iter().any(|(s, p)| *s == word || *p == word)
        && !keeps_final_s(&format!("{word}s"))
}
