//! Reference lookups: resolve a free-text query against the record table.

use crate::error::BotError;
use crate::record::{Category, RecordStore};
use regex::Regex;

/// Look up `query` among the records of `category` and format the reply.
///
/// The query is case-folded and compiled as a regex pattern tested against
/// each candidate's name, so `sword` matches both "longsword" and
/// "greatsword". An unparseable pattern simply matches nothing.
pub fn find(store: &RecordStore, category: Category, query: &str) -> Result<String, BotError> {
    let query = query.to_lowercase();

    // Category first; the name filter only runs over a non-empty candidate set.
    let mut results = store.of_category(category);
    if !results.is_empty() {
        let pattern = Regex::new(&query).ok();
        results.retain(|record| {
            pattern
                .as_ref()
                .is_some_and(|p| p.is_match(&record.name.to_lowercase()))
        });
    }

    match results.as_slice() {
        [] => Err(BotError::NotFound { category, query }),
        [entry] => Ok(format!(
            ":book: Found it! {} is on p. {} of {}.",
            title_case(&entry.name),
            entry.page,
            entry.source
        )),
        entries => {
            let mut reply = String::from(":book: I found multiple entries for you!");
            for entry in entries {
                reply.push_str(&format!(
                    "\n{} is on p. {} of {}",
                    title_case(&entry.name),
                    entry.page,
                    entry.source
                ));
            }
            Ok(reply)
        }
    }
}

/// Uppercase the first letter of each whitespace-separated word.
pub(crate) fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    fn store() -> RecordStore {
        let record = |name: &str, category, page: &str, source: &str| Record {
            name: name.to_string(),
            category,
            page: page.to_string(),
            source: source.to_string(),
        };
        RecordStore::new(vec![
            record("elf", Category::Race, "21", "PHB"),
            record("half-elf", Category::Race, "38", "PHB"),
            record("dwarf", Category::Race, "18", "PHB"),
            record("fireball", Category::Spell, "241", "PHB"),
            record("acolyte", Category::Background, "127", "PHB"),
        ])
    }

    #[test]
    fn test_single_match() {
        let reply = find(&store(), Category::Spell, "fireball").unwrap();
        assert_eq!(reply, ":book: Found it! Fireball is on p. 241 of PHB.");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let reply = find(&store(), Category::Spell, "FiReBaLl").unwrap();
        assert!(reply.contains("Fireball is on p. 241"));
    }

    #[test]
    fn test_multiple_matches_list_every_entry() {
        let reply = find(&store(), Category::Race, "elf").unwrap();
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[0], ":book: I found multiple entries for you!");
        assert_eq!(lines[1], "Elf is on p. 21 of PHB");
        assert_eq!(lines[2], "Half-elf is on p. 38 of PHB");
    }

    #[test]
    fn test_no_match_is_not_found() {
        let err = find(&store(), Category::Race, "tabaxi").unwrap_err();
        assert_eq!(
            err,
            BotError::NotFound {
                category: Category::Race,
                query: "tabaxi".to_string()
            }
        );
    }

    #[test]
    fn test_category_filter_applies_before_name_filter() {
        // "fireball" exists, but not as a race
        assert!(find(&store(), Category::Race, "fireball").is_err());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let first = find(&store(), Category::Race, "elf").unwrap();
        let second = find(&store(), Category::Race, "elf").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_pattern_matches_nothing() {
        let err = find(&store(), Category::Race, "(elf").unwrap_err();
        assert!(matches!(err, BotError::NotFound { .. }));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("mage hand"), "Mage Hand");
        assert_eq!(title_case("elf"), "Elf");
        assert_eq!(title_case(""), "");
    }
}
