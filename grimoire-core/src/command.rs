//! The command table and the dispatcher that routes input lines through it.

use crate::dice;
use crate::error::BotError;
use crate::generate;
use crate::lookup;
use crate::record::{Category, RecordStore};
use rand::Rng;
use std::collections::BTreeMap;

/// What a registered command does. A closed set, so dispatch is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// List the registered commands.
    Help,
    /// Simulate dice rolls.
    Roll,
    /// Look up a reference record of the given category.
    Find(Category),
    /// Generate a random character.
    Generate,
}

/// One registered command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Icon-name token shown in the help listing, e.g. `game_die`.
    pub emoji: Option<&'static str>,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// The full command table plus the reference data behind it.
///
/// Built once at startup and read-only afterwards; the binary owns exactly
/// one of these and threads every inbound line through [`dispatch`].
///
/// [`dispatch`]: CommandRegistry::dispatch
#[derive(Debug)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandSpec>,
    store: RecordStore,
}

impl CommandRegistry {
    /// Build the registry over the loaded record table.
    ///
    /// `help` and `roll` are always present. The per-category find commands
    /// and `generate` are registered only when the store holds at least one
    /// record; this is decided here, once, not re-checked per call. An empty
    /// registry refuses to start.
    pub fn new(store: RecordStore) -> Result<Self, BotError> {
        let mut commands = BTreeMap::new();
        let mut add = |spec: CommandSpec| {
            commands.insert(spec.name, spec);
        };

        add(CommandSpec {
            name: "help",
            emoji: Some("exclamation"),
            description: "list available commands",
            kind: CommandKind::Help,
        });
        add(CommandSpec {
            name: "roll",
            emoji: Some("game_die"),
            description: "simulate dice rolls",
            kind: CommandKind::Roll,
        });

        if !store.is_empty() {
            for &category in Category::all() {
                add(find_spec(category));
            }
            add(CommandSpec {
                name: "generate",
                emoji: None,
                description: "generate a random character",
                kind: CommandKind::Generate,
            });
        }

        if commands.is_empty() {
            return Err(BotError::EmptyRegistry);
        }
        Ok(Self { commands, store })
    }

    /// Split an input line into its command spec and argument tokens.
    ///
    /// The command token is matched case-insensitively; how the remainder is
    /// interpreted is up to the matched handler.
    pub fn parse<'a>(&self, raw: &'a str) -> Result<(&CommandSpec, Vec<&'a str>), BotError> {
        let mut tokens = raw.split_whitespace();
        let token = tokens.next().unwrap_or("");
        let spec = self
            .commands
            .get(token.to_lowercase().as_str())
            .ok_or_else(|| BotError::UnknownCommand(token.to_string()))?;
        Ok((spec, tokens.collect()))
    }

    /// Route one line of input to its handler and return the reply.
    ///
    /// Handler results propagate unchanged; this is a pure routing layer.
    pub fn dispatch<R: Rng>(&self, raw: &str, rng: &mut R) -> Result<String, BotError> {
        let (spec, args) = self.parse(raw)?;
        match spec.kind {
            CommandKind::Help => Ok(self.list_commands()),
            CommandKind::Roll => dice::roll(&args, rng),
            CommandKind::Find(category) => lookup::find(&self.store, category, &args.join(" ")),
            CommandKind::Generate => generate::generate(&self.store, rng),
        }
    }

    /// One line per registered command, sorted by name.
    pub fn list_commands(&self) -> String {
        let mut output =
            String::from(":information_source: Hey there! Here are the things I know how to do:");
        for (name, spec) in &self.commands {
            output.push('\n');
            if let Some(emoji) = spec.emoji {
                output.push_str(&format!(":{emoji}: "));
            }
            output.push_str(&format!("**{name}**"));
            if !spec.description.is_empty() {
                output.push_str(&format!(": {}", spec.description));
            }
        }
        output
    }

    /// Registered command names in listing order.
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

fn find_spec(category: Category) -> CommandSpec {
    let (emoji, description) = match category {
        Category::Background => ("fleur_de_lis", "find a source book reference for a background"),
        Category::Class => ("bow_and_arrow", "find a source book reference for a class"),
        Category::Item => ("gem", "find a source book reference for an item"),
        Category::Race => ("moyai", "find a source book reference for a race"),
        Category::Rule => ("scales", "find a source book reference for a rule"),
        Category::Spell => ("fire", "find a source book reference for a spell"),
    };
    CommandSpec {
        name: category.name(),
        emoji: Some(emoji),
        description,
        kind: CommandKind::Find(category),
    }
}
