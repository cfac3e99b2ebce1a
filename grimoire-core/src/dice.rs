//! Dice rolling in `(X)YdZ` notation.
//!
//! X is an optional repeat count, Y the number of dice per roll, and Z the
//! number of sides (it doesn't have to be a real die).

use crate::error::BotError;
use rand::Rng;

/// A parsed roll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSpec {
    /// How many times the whole set of dice is rolled.
    pub repeats: u32,
    /// Dice per roll.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
}

/// Simulated rolls: one row per repeat, one value per die.
pub type RollSet = Vec<Vec<u32>>;

impl RollSpec {
    /// Parse a single `(X)YdZ` / `YdZ` token. The whole token must match;
    /// surrounding junk is a parse error, not ignored.
    pub fn parse(token: &str) -> Result<Self, BotError> {
        let err = || BotError::ParseError(token.to_string());

        let mut rest = token;
        let mut repeats = 1;
        if let Some(inner) = rest.strip_prefix('(') {
            let close = inner.find(')').ok_or_else(err)?;
            let digits = &inner[..close];
            if !is_all_digits(digits) {
                return Err(err());
            }
            // A repeat count of zero (or one too large to represent) falls
            // back to a single set of rolls.
            repeats = digits.parse().ok().filter(|&n| n > 0).unwrap_or(1);
            rest = &inner[close + 1..];
        }

        let d = rest.find('d').ok_or_else(err)?;
        let count = parse_positive(&rest[..d]).ok_or_else(err)?;
        let sides = parse_positive(&rest[d + 1..]).ok_or_else(err)?;

        Ok(RollSpec {
            repeats,
            count,
            sides,
        })
    }

    /// Roll the full set using the provided generator. Every value is an
    /// independent uniform draw from `[1, sides]`.
    pub fn roll_with_rng<R: Rng>(&self, rng: &mut R) -> RollSet {
        (0..self.repeats)
            .map(|_| {
                (0..self.count)
                    .map(|_| rng.gen_range(1..=self.sides))
                    .collect()
            })
            .collect()
    }
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_positive(s: &str) -> Option<u32> {
    if !is_all_digits(s) {
        return None;
    }
    s.parse().ok().filter(|&n| n > 0)
}

/// Handler for the `roll` command: parses the first argument token, rolls,
/// and formats the reply.
pub fn roll<R: Rng>(args: &[&str], rng: &mut R) -> Result<String, BotError> {
    let token = args.first().copied().unwrap_or("");
    let spec = RollSpec::parse(token)?;
    Ok(format_rolls(&spec.roll_with_rng(rng)))
}

/// One line per repeat: the total, then the individual values in roll order.
fn format_rolls(rolls: &RollSet) -> String {
    let mut output = String::from(":game_die: Here's your rolls, as requested.");
    for row in rolls {
        let total: u32 = row.iter().sum();
        let seq = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("\nTotal: {total} [{seq}]"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_simple() {
        let spec = RollSpec::parse("2d6").unwrap();
        assert_eq!(
            spec,
            RollSpec {
                repeats: 1,
                count: 2,
                sides: 6
            }
        );
    }

    #[test]
    fn test_parse_with_repeats() {
        let spec = RollSpec::parse("(3)4d8").unwrap();
        assert_eq!(
            spec,
            RollSpec {
                repeats: 3,
                count: 4,
                sides: 8
            }
        );
    }

    #[test]
    fn test_zero_repeats_defaults_to_one() {
        let spec = RollSpec::parse("(0)1d20").unwrap();
        assert_eq!(spec.repeats, 1);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["abc", "5d", "d6", "", "2x6", "(2)d6", "(a)2d6", "(2", "2d6junk", "x2d6"] {
            let err = RollSpec::parse(input).unwrap_err();
            assert!(
                matches!(err, BotError::ParseError(_)),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_zero_dice() {
        assert!(RollSpec::parse("0d6").is_err());
        assert!(RollSpec::parse("2d0").is_err());
    }

    #[test]
    fn test_roll_shape_and_range() {
        let spec = RollSpec::parse("(5)3d6").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let rolls = spec.roll_with_rng(&mut rng);
        assert_eq!(rolls.len(), 5);
        for row in &rolls {
            assert_eq!(row.len(), 3);
            assert!(row.iter().all(|&v| (1..=6).contains(&v)));
        }
    }

    #[test]
    fn test_reply_lines_and_totals() {
        let mut rng = StdRng::seed_from_u64(42);
        let reply = roll(&["(4)2d10"], &mut rng).unwrap();
        let lines: Vec<&str> = reply.lines().collect();
        // one header line plus one line per repeat
        assert_eq!(lines.len(), 5);
        for line in &lines[1..] {
            let (total, values) = line
                .strip_prefix("Total: ")
                .and_then(|rest| rest.split_once(" ["))
                .unwrap();
            let total: u32 = total.parse().unwrap();
            let sum: u32 = values
                .trim_end_matches(']')
                .split(", ")
                .map(|v| v.parse::<u32>().unwrap())
                .sum();
            assert_eq!(total, sum);
        }
    }

    #[test]
    fn test_roll_without_arguments_is_parse_error() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            roll(&[], &mut rng),
            Err(BotError::ParseError(_))
        ));
    }

    #[test]
    fn test_one_sided_die_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let reply = roll(&["3d1"], &mut rng).unwrap();
        assert!(reply.ends_with("Total: 3 [1, 1, 1]"));
    }
}
