//! WebSocket relay: JSON `{"event", "data"}` frames, session rooms and
//! progress milestones around each generate/edit request.

pub mod events;
pub mod relay;
pub mod rooms;
pub mod ws;

pub use events::{ClientEvent, ServerEvent};
pub use relay::{Connection, Relay};
pub use rooms::{RoomMap, new_room_map};

/// Upper bound the browser client uses for reconnect attempts.
pub const MAX_RECONNECT_ATTEMPTS: u32 = 5;
