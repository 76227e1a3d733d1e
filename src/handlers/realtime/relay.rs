use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;

use super::events::{ClientEvent, ServerEvent};
use super::rooms::{RoomMap, emit_to_room, join_room, leave_rooms, new_room_map};
use crate::llm::PresentationService;
use crate::llm::parser::document_from_value;
use crate::models::presentation::GenerationResult;
use crate::models::progress::{GenerationProgress, ProgressStage};
use crate::storage::PresentationStore;
use crate::templates_structs::{EditRequest, GenerateRequest};

const PROMPT_REQUIRED: &str = "Prompt is required";
const EDIT_REQUIRED: &str = "Edit prompt and current presentation are required";
const GENERATE_FAILED: &str = "Failed to generate presentation. Please try again.";
const EDIT_FAILED: &str = "Failed to edit presentation. Please try again.";

/// One open socket: its id, outbound frame queue and closed flag.
/// Clones share the flag, so work spawned per frame sees the disconnect.
#[derive(Debug, Clone)]
pub struct Connection {
    pub id: String,
    sender: mpsc::UnboundedSender<String>,
    closed: Arc<AtomicBool>,
}

impl Connection {
    pub fn new(sender: mpsc::UnboundedSender<String>) -> Self {
        let bytes: [u8; 8] = rand::random();
        Connection {
            id: format!("conn_{}", hex::encode(bytes)),
            sender,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Send an event to this socket only.
    pub fn send(&self, event: &ServerEvent) {
        if let Some(frame) = event.to_frame() {
            let _ = self.sender.send(frame);
        }
    }
}

/// Drives generate/edit requests arriving over the socket.
#[derive(Clone)]
pub struct Relay {
    service: PresentationService,
    store: PresentationStore,
    rooms: RoomMap,
}

impl Relay {
    pub fn new(service: PresentationService, store: PresentationStore) -> Self {
        Relay {
            service,
            store,
            rooms: new_room_map(),
        }
    }

    pub fn rooms(&self) -> &RoomMap {
        &self.rooms
    }

    /// Decode one client text frame and run it to completion.
    pub async fn handle_text(&self, conn: &Connection, text: &str) {
        match serde_json::from_str::<ClientEvent>(text) {
            Ok(ClientEvent::GeneratePresentation(req)) => self.generate(conn, req).await,
            Ok(ClientEvent::EditPresentation(req)) => self.edit(conn, req).await,
            Err(e) => log::warn!("Ignoring frame from {}: {e}", conn.id),
        }
    }

    pub async fn generate(&self, conn: &Connection, req: GenerateRequest) {
        let Some(prompt) = req.prompt.filter(|p| !p.trim().is_empty()) else {
            conn.send(&ServerEvent::error(PROMPT_REQUIRED));
            return;
        };
        let Some(room) = self.join(conn, req.session_id) else {
            return;
        };

        self.progress(&room, ProgressStage::Analyzing, 10, "Analyzing your request...");
        self.progress(&room, ProgressStage::Generating, 30, "Generating presentation content...");

        let doc = match self.service.generate(&prompt).await {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("Error in generate-presentation: {e}");
                conn.send(&ServerEvent::error(GENERATE_FAILED));
                return;
            }
        };

        self.progress(&room, ProgressStage::Formatting, 60, "Formatting slides...");
        self.progress(&room, ProgressStage::Creating, 80, "Creating PowerPoint file...");

        let filename = match self.store.save_off_thread(doc.clone()).await {
            Ok(f) => f,
            Err(e) => {
                log::error!("Error in generate-presentation: {e}");
                conn.send(&ServerEvent::error(GENERATE_FAILED));
                return;
            }
        };

        self.progress(&room, ProgressStage::Complete, 100, "Presentation ready!");
        conn.send(&ServerEvent::PresentationGenerated(GenerationResult::new(doc, filename)));
    }

    pub async fn edit(&self, conn: &Connection, req: EditRequest) {
        let edit_prompt = req.edit_prompt.filter(|p| !p.trim().is_empty());
        let (Some(edit_prompt), Some(current)) = (edit_prompt, req.current_presentation) else {
            conn.send(&ServerEvent::error(EDIT_REQUIRED));
            return;
        };
        if current.is_null() {
            conn.send(&ServerEvent::error(EDIT_REQUIRED));
            return;
        }
        let Some(room) = self.join(conn, req.session_id) else {
            return;
        };

        self.progress(&room, ProgressStage::Analyzing, 20, "Analyzing edit request...");

        let edited = match document_from_value(&current) {
            Ok(current) => self.service.edit(&current, &edit_prompt).await,
            Err(e) => Err(e.into()),
        };
        let doc = match edited {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("Error in edit-presentation: {e}");
                conn.send(&ServerEvent::error(EDIT_FAILED));
                return;
            }
        };

        self.progress(&room, ProgressStage::Creating, 70, "Updating presentation...");

        let filename = match self.store.save_off_thread(doc.clone()).await {
            Ok(f) => f,
            Err(e) => {
                log::error!("Error in edit-presentation: {e}");
                conn.send(&ServerEvent::error(EDIT_FAILED));
                return;
            }
        };

        self.progress(&room, ProgressStage::Complete, 100, "Presentation updated!");
        conn.send(&ServerEvent::PresentationUpdated(GenerationResult::new(doc, filename)));
    }

    /// Mark the socket closed and remove it from every room. Requests still
    /// in flight for it stop at their next room join.
    pub fn disconnect(&self, conn: &Connection) {
        conn.closed.store(true, Ordering::SeqCst);
        leave_rooms(&self.rooms, &conn.id);
    }

    /// Join the session room; a socket without a session id gets a private room.
    /// `None` once the socket has disconnected.
    fn join(&self, conn: &Connection, session_id: Option<String>) -> Option<String> {
        if conn.is_closed() {
            log::info!("Dropping request from closed connection {}", conn.id);
            return None;
        }
        let room = session_id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| conn.id.clone());
        join_room(&self.rooms, &room, &conn.id, &conn.sender);

        // Disconnect may have run between the check and the join.
        if conn.is_closed() {
            leave_rooms(&self.rooms, &conn.id);
            return None;
        }
        Some(room)
    }

    fn progress(&self, room: &str, stage: ProgressStage, progress: u8, message: &str) {
        let event = ServerEvent::GenerationProgress(GenerationProgress::new(stage, progress, message));
        if let Some(frame) = event.to_frame() {
            emit_to_room(&self.rooms, room, &frame);
        }
    }
}
