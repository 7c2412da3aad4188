//! A single player's run through a world.

use grotto_core::{GrottoError, GrottoResult, Item, RoomId, World};

use crate::parser::{Command, parse_command};

/// A play session: the world, where the player stands, and what they carry.
pub struct Session {
    world: World,
    current: RoomId,
    backpack: Vec<Item>,
    victory_goal: u64,
    awaiting_weapon: bool,
    over: bool,
}

impl Session {
    /// Start a session in `start`, ending in victory after `victory_goal`
    /// defeated enemies.
    pub fn new(world: World, start: RoomId, victory_goal: u64) -> GrottoResult<Self> {
        if world.room(start).is_none() {
            return Err(GrottoError::RoomNotFound(start));
        }
        Ok(Self {
            world,
            current: start,
            backpack: Vec::new(),
            victory_goal,
            awaiting_weapon: false,
            over: false,
        })
    }

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The room the player is in.
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// Items the player has picked up.
    pub fn backpack(&self) -> &[Item] {
        &self.backpack
    }

    /// True once the game has been won, lost, or quit.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// True when the last command was a bare `fight` and the next line names
    /// the weapon.
    pub fn is_awaiting_weapon(&self) -> bool {
        self.awaiting_weapon
    }

    /// Room details followed by whoever and whatever is in the room.
    pub fn look(&self) -> GrottoResult<String> {
        let narrator = self.world.narrator();
        let mut lines = vec![self.world.details(self.current)?];
        let room = self.room()?;
        if let Some(character) = room.character() {
            lines.push(narrator.describe_character(character));
        }
        if let Some(item) = room.item() {
            lines.push(narrator.describe_item(item));
        }
        Ok(lines.join("\n"))
    }

    /// Handle one line of input.
    ///
    /// After a bare `fight`, a line that is not a known command names the
    /// weapon.
    pub fn process(&mut self, input: &str) -> GrottoResult<String> {
        let awaiting_weapon = std::mem::take(&mut self.awaiting_weapon);
        match parse_command(input) {
            Command::Unknown { input } if awaiting_weapon => self.fight(&input),
            command => self.execute(command),
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> GrottoResult<String> {
        match command {
            Command::Move { direction } => self.go(&direction),
            Command::Look => self.look(),
            Command::Talk => self.talk(),
            Command::Fight { weapon: Some(weapon) } => self.fight(&weapon),
            Command::Fight { weapon: None } => {
                if !self.room()?.character().is_some_and(|c| c.is_enemy()) {
                    return self.fight("");
                }
                self.awaiting_weapon = true;
                Ok("What will you fight with?".to_string())
            }
            Command::Take => self.take(),
            Command::Inventory => Ok(self.inventory()),
            Command::Help => Ok(help()),
            Command::Quit => {
                self.over = true;
                Ok("Goodbye!".to_string())
            }
            Command::Unknown { input } => Ok(format!("I don't know how to {input}")),
        }
    }

    fn room(&self) -> GrottoResult<&grotto_core::Room> {
        self.world
            .room(self.current)
            .ok_or(GrottoError::RoomNotFound(self.current))
    }

    fn go(&mut self, direction: &str) -> GrottoResult<String> {
        match self.world.move_from(self.current, direction)? {
            Some(next) => {
                self.current = next;
                self.look()
            }
            None => Ok(self.world.narrator().no_room(direction)),
        }
    }

    fn talk(&self) -> GrottoResult<String> {
        Ok(match self.room()?.character() {
            Some(character) => self.world.narrator().talk(character),
            None => "There is no one here to talk to.".to_string(),
        })
    }

    fn fight(&mut self, weapon: &str) -> GrottoResult<String> {
        let room = self.room()?;
        let Some(enemy) = room.character() else {
            return Ok("There is no one here to fight with".to_string());
        };
        if !enemy.is_enemy() {
            return Ok(format!("{} doesn't want to fight with you", enemy.name()));
        }
        if !self.backpack.iter().any(|i| i.name() == weapon) {
            return Ok(format!("You don't have a {weapon}"));
        }

        let outcome = enemy.fight(weapon)?;
        let mut lines = vec![self.world.narrator().fight_result(enemy, &outcome)];
        if !outcome.is_won() {
            lines.push("Oh dear, you lost the fight.".to_string());
            lines.push("That's the end of the game".to_string());
            self.over = true;
            return Ok(lines.join("\n"));
        }

        lines.push("Hooray, you won the fight!".to_string());
        let total = self.world.defeat(self.current)?.unwrap_or_default();
        if let Some(room) = self.world.room_mut(self.current) {
            room.take_character();
        }
        tracing::info!(total, goal = self.victory_goal, "enemy defeated");
        if total >= self.victory_goal {
            lines.push("Congratulations, you have vanquished the enemy horde!".to_string());
            self.over = true;
        }
        Ok(lines.join("\n"))
    }

    fn take(&mut self) -> GrottoResult<String> {
        let room = self
            .world
            .room_mut(self.current)
            .ok_or(GrottoError::RoomNotFound(self.current))?;
        Ok(match room.take_item() {
            Some(item) => {
                let text = format!("You put the {} in your backpack", item.name());
                self.backpack.push(item);
                text
            }
            None => "There's nothing here to take!".to_string(),
        })
    }

    fn inventory(&self) -> String {
        if self.backpack.is_empty() {
            return "Your backpack is empty.".to_string();
        }
        let mut output = "You are carrying:".to_string();
        for item in &self.backpack {
            output.push_str(&format!("\n  - {}", item.name()));
        }
        output
    }
}

fn help() -> String {
    "Commands\n\
     north, south, east, west, up, down (or n, s, e, w, u, d) - move\n\
     go <exit> - leave through a named exit\n\
     look - describe the room again\n\
     talk - talk to whoever is here\n\
     fight [with <item>] - fight whoever is here\n\
     take - put the item here in your backpack\n\
     inventory (or i) - list your backpack\n\
     help - show this help\n\
     quit - leave the game"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use grotto_core::WorldConfig;

    fn demo_session() -> Session {
        let world = demo::build(WorldConfig::default()).unwrap();
        let start = world.find_room(demo::START_ROOM).unwrap();
        Session::new(world, start, demo::ENEMY_COUNT).unwrap()
    }

    #[test]
    fn look_shows_room_and_occupants() {
        let session = demo_session();
        let output = session.look().unwrap();
        assert!(output.starts_with("Kitchen\n--------------------\n"));
        assert!(output.contains("The Dining Hall is south"));
        assert!(output.contains("Catrina is here!\nA friendly skeleton"));
        assert!(output.ends_with("The [cheese] is here - A large and smelly block of cheese"));
    }

    #[test]
    fn move_and_bad_move() {
        let mut session = demo_session();
        let output = session.process("south").unwrap();
        assert!(output.starts_with("Dining Hall"));
        assert_eq!(session.process("south").unwrap(), "No room in south");
        assert_eq!(
            session.world().room(session.current()).unwrap().name(),
            "Dining Hall"
        );
    }

    #[test]
    fn talk_to_friend_and_empty_room() {
        let mut session = demo_session();
        assert_eq!(session.process("talk").unwrap(), "[Catrina says]: Why hello there.");
        session.process("down").unwrap();
        assert_eq!(
            session.process("talk").unwrap(),
            "There is no one here to talk to."
        );
    }

    #[test]
    fn take_moves_item_into_backpack() {
        let mut session = demo_session();
        assert_eq!(session.process("inventory").unwrap(), "Your backpack is empty.");
        assert_eq!(
            session.process("take").unwrap(),
            "You put the cheese in your backpack"
        );
        assert_eq!(session.backpack().len(), 1);
        assert_eq!(session.process("take").unwrap(), "There's nothing here to take!");
        assert_eq!(session.process("i").unwrap(), "You are carrying:\n  - cheese");
    }

    #[test]
    fn fight_needs_an_enemy_and_the_weapon() {
        let mut session = demo_session();
        assert_eq!(
            session.process("fight cheese").unwrap(),
            "Catrina doesn't want to fight with you"
        );
        session.process("south").unwrap();
        assert_eq!(
            session.process("fight cheese").unwrap(),
            "You don't have a cheese"
        );
        assert_eq!(session.world().tally().count(), 0);
    }

    #[test]
    fn fight_in_empty_room() {
        let mut session = demo_session();
        session.process("down").unwrap();
        assert_eq!(
            session.process("fight").unwrap(),
            "There is no one here to fight with"
        );
        assert!(!session.is_awaiting_weapon());
    }

    #[test]
    fn bare_fight_asks_for_weapon() {
        let mut session = demo_session();
        session.process("take").unwrap();
        session.process("south").unwrap();
        assert_eq!(session.process("fight").unwrap(), "What will you fight with?");
        assert!(session.is_awaiting_weapon());

        let output = session.process("cheese").unwrap();
        assert_eq!(
            output,
            "You fend Dave off with the cheese\nHooray, you won the fight!"
        );
        assert_eq!(session.world().tally().count(), 1);
        assert!(session.world().room(session.current()).unwrap().character().is_none());
        assert!(!session.is_over());
    }

    #[test]
    fn commands_still_work_while_choosing_a_weapon() {
        let mut session = demo_session();
        session.process("south").unwrap();
        assert_eq!(session.process("fight").unwrap(), "What will you fight with?");
        assert_eq!(session.process("quit").unwrap(), "Goodbye!");
        assert!(session.is_over());
        assert!(!session.is_awaiting_weapon());

        let mut session = demo_session();
        session.process("south").unwrap();
        session.process("fight").unwrap();
        let output = session.process("north").unwrap();
        assert!(output.starts_with("Kitchen"));
        assert!(!session.is_awaiting_weapon());
        assert_eq!(session.process("cheese").unwrap(), "I don't know how to cheese");
    }

    #[test]
    fn bare_fight_with_a_friend_refuses_at_once() {
        let mut session = demo_session();
        assert_eq!(
            session.process("fight").unwrap(),
            "Catrina doesn't want to fight with you"
        );
        assert!(!session.is_awaiting_weapon());
    }

    #[test]
    fn losing_ends_the_game() {
        let mut session = demo_session();
        session.process("take").unwrap();
        session.process("s").unwrap();
        session.process("w").unwrap();
        let output = session.process("fight with cheese").unwrap();
        assert_eq!(
            output,
            "Tabitha crushes you, puny adventurer!\n\
             Oh dear, you lost the fight.\n\
             That's the end of the game"
        );
        assert!(session.is_over());
        assert_eq!(session.world().tally().count(), 0);
    }

    #[test]
    fn defeating_every_enemy_wins() {
        let mut session = demo_session();
        for line in ["take", "south", "fight cheese", "take", "west"] {
            session.process(line).unwrap();
        }
        let output = session.process("fight book").unwrap();
        assert!(output.ends_with("Congratulations, you have vanquished the enemy horde!"));
        assert!(session.is_over());
        assert_eq!(session.world().tally().count(), 2);
    }

    #[test]
    fn quit_and_unknown() {
        let mut session = demo_session();
        assert_eq!(session.process("dance").unwrap(), "I don't know how to dance");
        assert!(!session.is_over());
        assert_eq!(session.process("quit").unwrap(), "Goodbye!");
        assert!(session.is_over());
    }

    #[test]
    fn new_rejects_unknown_start() {
        let world = demo::build(WorldConfig::default()).unwrap();
        assert!(Session::new(world, RoomId(99), 1).is_err());
    }
}
