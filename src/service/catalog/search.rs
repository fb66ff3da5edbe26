use itertools::Itertools;

/// 意图 -> 文件名关键词。查询命中意图后，包含任一关键词的文件都算匹配
pub const INTENT_KEYWORDS: &[(&str, &[&str])] = &[
    ("muster", &["muster", "attendance", "roll"]),
    ("wages", &["wage", "salary", "payment"]),
    ("contractor", &["clra", "contractor"]),
    ("gratuity", &["gratuity"]),
    ("bonus", &["bonus"]),
    ("maternity", &["maternity"]),
    ("shop", &["shop", "establishment"]),
    ("factory", &["factory"]),
    ("register", &["register", "form"]),
];

/// Intents whose key, or one of whose aliases, occurs in the lowercased query.
pub fn triggered_intents(term: &str) -> Vec<&'static str> {
    INTENT_KEYWORDS
        .iter()
        .filter(|(intent, aliases)| {
            term.contains(intent) || aliases.iter().any(|alias| term.contains(alias))
        })
        .map(|(intent, _)| *intent)
        .collect()
}

fn aliases_of(intent: &str) -> &'static [&'static str] {
    INTENT_KEYWORDS
        .iter()
        .find(|(key, _)| *key == intent)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}

/// Filters a state's file list by free text.
///
/// An empty query returns the list untouched. Otherwise direct substring
/// matches come first, then intent matches, with duplicates dropped in
/// first-seen order.
pub fn filter_files<'a>(files: &'a [String], query: &str) -> Vec<&'a String> {
    if query.is_empty() {
        return files.iter().collect();
    }

    let term = query.to_lowercase();
    let intents = triggered_intents(&term);

    let direct = files
        .iter()
        .filter(|file| file.to_lowercase().contains(&term));

    let by_intent = files.iter().filter(|file| {
        let lower = file.to_lowercase();
        intents
            .iter()
            .any(|intent| aliases_of(intent).iter().any(|alias| lower.contains(alias)))
    });

    direct.chain(by_intent).unique().collect()
}
