//! Command parsing for player input.

/// A compass or vertical direction with its canonical label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl Direction {
    /// Parse a direction word or abbreviation (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// The label rooms use for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the room through the exit with this label.
    Move {
        /// Direction label, passed to the room as-is.
        direction: String,
    },
    /// Describe the current room again.
    Look,
    /// Talk to whoever is in the room.
    Talk,
    /// Fight whoever is in the room.
    Fight {
        /// Weapon to fight with; asked for when missing.
        weapon: Option<String>,
    },
    /// Pick up the item in the room.
    Take,
    /// List the backpack.
    Inventory,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Anything else.
    Unknown {
        /// The original input.
        input: String,
    },
}

const MOVE_VERBS: &[&str] = &["go", "move", "walk"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const TALK_VERBS: &[&str] = &["talk", "speak", "chat"];
const FIGHT_VERBS: &[&str] = &["fight", "attack", "hit"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i", "backpack"];
const HELP_VERBS: &[&str] = &["help", "h", "?"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Parse a line of player input.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = &words[1..];

    if let (Some(dir), true) = (Direction::parse(&verb), rest.is_empty()) {
        return Command::Move {
            direction: dir.name().to_string(),
        };
    }

    let verb = verb.as_str();
    if MOVE_VERBS.contains(&verb) {
        return parse_move(rest, input);
    }
    if LOOK_VERBS.contains(&verb) {
        return Command::Look;
    }
    if TALK_VERBS.contains(&verb) {
        return Command::Talk;
    }
    if FIGHT_VERBS.contains(&verb) {
        return parse_fight(rest);
    }
    if TAKE_VERBS.contains(&verb) {
        return Command::Take;
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_move(rest: &[&str], input: &str) -> Command {
    match rest {
        [] => Command::Unknown {
            input: input.to_string(),
        },
        [word] => Command::Move {
            direction: Direction::parse(word)
                .map(|d| d.name().to_string())
                .unwrap_or_else(|| word.to_string()),
        },
        words => Command::Move {
            direction: words.join(" "),
        },
    }
}

fn parse_fight(rest: &[&str]) -> Command {
    // Both "fight <item>" and "fight with <item>".
    let rest = match rest {
        ["with", tail @ ..] => tail,
        _ => rest,
    };
    Command::Fight {
        weapon: (!rest.is_empty()).then(|| rest.join(" ")),
    }
}
