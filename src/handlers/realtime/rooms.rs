use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

/// A socket registered in a room: its connection id and outbound queue.
#[derive(Debug, Clone)]
pub struct Member {
    pub conn_id: String,
    pub sender: mpsc::UnboundedSender<String>,
}

pub type RoomMap = Arc<RwLock<HashMap<String, Vec<Member>>>>;

pub fn new_room_map() -> RoomMap {
    Arc::new(RwLock::new(HashMap::new()))
}

/// Add a connection to a room. Joining twice is a no-op.
pub fn join_room(rooms: &RoomMap, room: &str, conn_id: &str, sender: &mpsc::UnboundedSender<String>) {
    let mut map = match rooms.write() {
        Ok(m) => m,
        Err(_) => return,
    };
    let members = map.entry(room.to_string()).or_default();
    if members.iter().any(|m| m.conn_id == conn_id) {
        return;
    }
    members.push(Member {
        conn_id: conn_id.to_string(),
        sender: sender.clone(),
    });
}

/// Remove a connection from every room, dropping rooms that become empty.
pub fn leave_rooms(rooms: &RoomMap, conn_id: &str) {
    let mut map = match rooms.write() {
        Ok(m) => m,
        Err(_) => return,
    };
    map.retain(|_, members| {
        members.retain(|m| m.conn_id != conn_id);
        !members.is_empty()
    });
}

/// Send a frame to every live member of a room.
pub fn emit_to_room(rooms: &RoomMap, room: &str, frame: &str) {
    let map = match rooms.read() {
        Ok(m) => m,
        Err(_) => return,
    };
    if let Some(members) = map.get(room) {
        for member in members {
            let _ = member.sender.send(frame.to_string());
        }
    }
}

pub fn room_size(rooms: &RoomMap, room: &str) -> usize {
    rooms
        .read()
        .map(|map| map.get(room).map_or(0, Vec::len))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_is_idempotent_and_leave_drops_empty_rooms() {
        let rooms = new_room_map();
        let (tx, _rx) = mpsc::unbounded_channel();
        join_room(&rooms, "s1", "c1", &tx);
        join_room(&rooms, "s1", "c1", &tx);
        join_room(&rooms, "s2", "c1", &tx);
        assert_eq!(room_size(&rooms, "s1"), 1);

        leave_rooms(&rooms, "c1");
        assert_eq!(room_size(&rooms, "s1"), 0);
        assert!(rooms.read().unwrap().is_empty());
    }

    #[test]
    fn emit_reaches_every_member() {
        let rooms = new_room_map();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        let (tx3, mut rx3) = mpsc::unbounded_channel();
        join_room(&rooms, "s1", "c1", &tx1);
        join_room(&rooms, "s1", "c2", &tx2);
        join_room(&rooms, "other", "c3", &tx3);

        emit_to_room(&rooms, "s1", "hello");
        assert_eq!(rx1.try_recv().unwrap(), "hello");
        assert_eq!(rx2.try_recv().unwrap(), "hello");
        assert!(rx3.try_recv().is_err());
    }
}
