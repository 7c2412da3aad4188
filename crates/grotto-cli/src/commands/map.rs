//! Print the demo map.

use grotto_cli::demo;
use grotto_core::World;

/// Print every room's details, or the whole map as JSON.
pub fn run(json: bool, strict: bool) -> Result<(), String> {
    let world = demo::build(super::world_config(strict)).map_err(|e| e.to_string())?;
    let output = if json {
        to_json(&world)?
    } else {
        to_text(&world)?
    };
    println!("{output}");
    Ok(())
}

fn to_text(world: &World) -> Result<String, String> {
    let sections = world
        .rooms()
        .map(|(id, _)| world.details(id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Ok(sections.join("\n\n"))
}

fn to_json(world: &World) -> Result<String, String> {
    let rooms: Vec<_> = world.rooms().map(|(_, room)| room).collect();
    let value = serde_json::json!({
        "rooms": rooms,
        "victories": world.tally().count(),
    });
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}
