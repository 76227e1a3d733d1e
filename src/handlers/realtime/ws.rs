use actix_web::{HttpRequest, HttpResponse, web};
use actix_ws::Message;
use tokio::sync::mpsc;

use super::relay::{Connection, Relay};

/// WebSocket upgrade handler for GET /ws.
pub async fn ws_connect(
    req: HttpRequest,
    body: web::Payload,
    relay: web::Data<Relay>,
) -> Result<HttpResponse, actix_web::Error> {
    let (response, mut ws_session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let conn = Connection::new(tx);
    let relay = relay.into_inner();
    log::info!("Client connected: {}", conn.id);

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                Some(frame) = rx.recv() => {
                    if ws_session.text(frame).await.is_err() {
                        break;
                    }
                }
                msg = msg_stream.recv() => {
                    let Some(Ok(msg)) = msg else { break };
                    match msg {
                        Message::Ping(bytes) => {
                            if ws_session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Message::Text(text) => {
                            // Run off the socket loop so progress frames flush while the request works.
                            let relay = relay.clone();
                            let conn = conn.clone();
                            actix_web::rt::spawn(async move {
                                relay.handle_text(&conn, &text).await;
                            });
                        }
                        Message::Close(_) => break,
                        _ => {}
                    }
                }
            }
        }

        relay.disconnect(&conn);
        let _ = ws_session.close(None).await;
        log::info!("Client disconnected: {}", conn.id);
    });

    Ok(response)
}
