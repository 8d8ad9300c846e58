//! WebSocket session for one open display page.
//!
//! Forwards the player's clicks and start/stop requests to the round
//! scheduler, and serializes every `DisplayUpdate` back to the browser.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, warn};
use uuid::Uuid;

use crate::game::types::{GameConfig, Position};
use crate::server::messages::{
    ClientAction, DisplayUpdate, RegisterDisplay, SelectCell, StartGame, StopGame,
    UnregisterDisplay,
};
use crate::server::scheduler::RoundScheduler;
use crate::server::state::AppState;
use crate::server::ws_error::ws_error_message;

pub struct DisplaySession {
    pub id: Uuid,
    pub config: GameConfig,
    pub scheduler: Addr<RoundScheduler>,
}

impl DisplaySession {
    fn handle_action(&self, action: ClientAction, ctx: &mut ws::WebsocketContext<Self>) {
        match action {
            ClientAction::Start => self.scheduler.do_send(StartGame),
            ClientAction::Stop => self.scheduler.do_send(StopGame),
            ClientAction::Select { row, col } => {
                if !self.config.contains(Position::new(row, col)) {
                    warn!("[DisplaySession] {} selected ({}, {}) outside the grid", self.id, row, col);
                    ctx.text(ws_error_message(
                        "OUT_OF_BOUNDS",
                        "Selected cell is outside the grid.",
                        Some(&format!("{},{}", row, col)),
                    ));
                    return;
                }
                self.scheduler.do_send(SelectCell { row, col });
            }
            ClientAction::Ping => {}
        }
    }
}

impl Actor for DisplaySession {
    type Context = ws::WebsocketContext<Self>;

    /// Registers with the scheduler, which replies with the current state.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.scheduler.do_send(RegisterDisplay {
            id: self.id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.scheduler.do_send(UnregisterDisplay { id: self.id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for DisplaySession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientAction>(&text) {
                Ok(action) => self.handle_action(action, ctx),
                Err(e) => {
                    debug!("[DisplaySession] Unparseable message from {}: {}", self.id, e);
                    ctx.text(ws_error_message("INVALID_COMMAND", "Invalid command", None));
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<DisplayUpdate> for DisplaySession {
    type Result = ();

    fn handle(&mut self, msg: DisplayUpdate, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg.0) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[DisplaySession] Failed to serialize {:?}: {}", msg.0, e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for a display page.
pub async fn ws_display(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(
        DisplaySession {
            id: Uuid::new_v4(),
            config: data.config,
            scheduler: data.scheduler.clone(),
        },
        &req,
        stream,
    )
}
