//! The built-in map used by `grotto play` and `grotto map`.

use grotto_core::{Character, GrottoResult, Item, Room, World, WorldConfig};

/// Name of the room the demo starts in.
pub const START_ROOM: &str = "Kitchen";

/// Number of enemies on the demo map.
pub const ENEMY_COUNT: u64 = 2;

/// Build the demo map: a kitchen, dining hall, ballroom, and cellar.
pub fn build(config: WorldConfig) -> GrottoResult<World> {
    let mut world = World::with_config(config);

    let mut kitchen = Room::new("Kitchen");
    kitchen.set_description("A dank and dirty room buzzing with flies.");
    let mut cheese = Item::new("cheese");
    cheese.set_description("A large and smelly block of cheese");
    kitchen.set_item(cheese);
    let mut catrina = Character::friend("Catrina", "A friendly skeleton");
    catrina.set_conversation("Why hello there.");
    kitchen.set_character(catrina);

    let mut dining_hall = Room::new("Dining Hall");
    dining_hall
        .set_description("A large room with ornate golden decorations on every wall.");
    let mut book = Item::new("book");
    book.set_description("A really good book entitled 'Knitting for dummies'");
    dining_hall.set_item(book);
    let mut dave = Character::enemy("Dave", "A smelly zombie");
    dave.set_conversation("Brrlgrh... rgrhl... brains...");
    dave.set_weakness("cheese")?;
    dining_hall.set_character(dave);

    let mut ballroom = Room::new("Ballroom");
    ballroom.set_description(
        "A vast room with a shiny wooden floor. Huge candlesticks guard the entrance.",
    );
    let mut tabitha = Character::enemy(
        "Tabitha",
        "An enormous spider with countless eyes and furry legs.",
    );
    tabitha.set_conversation("Sssss....I'm so bored...");
    tabitha.set_weakness("book")?;
    ballroom.set_character(tabitha);

    let mut cellar = Room::new("Cellar");
    cellar.set_description("A cold stone cellar that smells of old wine.");

    let kitchen = world.add_room(kitchen)?;
    let dining_hall = world.add_room(dining_hall)?;
    let ballroom = world.add_room(ballroom)?;
    let cellar = world.add_room(cellar)?;

    world.link_both(kitchen, dining_hall, "south", "north")?;
    world.link_both(dining_hall, ballroom, "west", "east")?;
    world.link_both(kitchen, cellar, "down", "up")?;

    tracing::debug!(rooms = world.room_count(), "demo map built");
    Ok(world)
}
