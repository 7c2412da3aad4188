use crate::room::RoomId;

/// Alias for `Result<T, GrottoError>`.
pub type GrottoResult<T> = Result<T, GrottoError>;

/// Errors that can occur when building or playing a world.
#[derive(Debug, thiserror::Error)]
pub enum GrottoError {
    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A name was empty or only whitespace.
    #[error("name must not be empty")]
    EmptyName,

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateName(String),

    /// The room already has an exit with this direction label.
    #[error("room \"{room}\" already has an exit labelled \"{direction}\"")]
    DuplicateDirection {
        /// Name of the room the link was added to.
        room: String,
        /// The repeated direction label.
        direction: String,
    },

    /// A combat operation was attempted on a character that is not an enemy.
    #[error("{0} is not an enemy")]
    NotAnEnemy(String),
}
