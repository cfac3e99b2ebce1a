//! Random character generation: a race, class, and background draw plus
//! six 4d6-drop-lowest ability scores.

use crate::dice::RollSpec;
use crate::error::BotError;
use crate::record::{Category, RecordStore};
use rand::Rng;

/// Ability names in presentation order.
const ABILITIES: [&str; 6] = [
    "Strength",
    "Dexterity",
    "Constitution",
    "Intelligence",
    "Wisdom",
    "Charisma",
];

/// Handler for the `generate` command. Takes no arguments; draws one record
/// each from the race, background, and class categories and rolls the stats.
pub fn generate<R: Rng>(store: &RecordStore, rng: &mut R) -> Result<String, BotError> {
    let race = store.pick_random(Category::Race, rng)?;
    let background = store.pick_random(Category::Background, rng)?;
    let class = store.pick_random(Category::Class, rng)?;

    let rolls = RollSpec {
        repeats: 6,
        count: 4,
        sides: 6,
    }
    .roll_with_rng(rng);

    let mut reply = format!(
        ":tada: You are {} {} (p. {}, {}) {} (p. {}, {}), who is (or was) {} {} (p. {}, {}).\nYour vitals (not including racial bonuses/penalties):",
        article_for(&race.name),
        race.name,
        race.page,
        race.source,
        class.name,
        class.page,
        class.source,
        article_for(&background.name),
        background.name,
        background.page,
        background.source,
    );
    for (ability, row) in ABILITIES.iter().zip(&rolls) {
        reply.push_str(&format!("\n{ability}: {}", drop_lowest(row)));
    }
    Ok(reply)
}

/// Format one ability row: the sum of the three highest values, then the
/// kept values in descending order with the dropped lowest struck through.
fn drop_lowest(row: &[u32]) -> String {
    let mut sorted = row.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    match sorted.split_last() {
        Some((lowest, kept)) => {
            let sum: u32 = kept.iter().sum();
            let shown = kept
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{sum}: [{shown}, ~~{lowest}~~]")
        }
        None => "0: []".to_string(),
    }
}

/// "an" before a leading vowel, "a" otherwise.
fn article_for(name: &str) -> &'static str {
    let vowel = name
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
    if vowel {
        "an"
    } else {
        "a"
    }
}
