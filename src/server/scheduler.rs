//! Round scheduler actor.
//!
//! Owns the game and drives its hidden/shown phases with randomized timers.
//! Timer callbacks and player selections both arrive through this actor's
//! mailbox, so a transition can never race a click.

use actix::prelude::*;
use actix::MessageResult;
use std::collections::HashMap;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::game::WINDOW_TITLE;
use crate::game::display::{Display, DisplayEvent};
use crate::game::round::Round;
use crate::game::types::{GameConfig, Position};
use crate::server::messages::{
    DisplayUpdate, GetSnapshot, RegisterDisplay, SelectCell, Snapshot, StartGame, StopGame,
    UnregisterDisplay,
};

type DisplayAddr = Recipient<DisplayUpdate>;

/// Fans display calls out to every registered display as `DisplayUpdate`s.
struct Broadcast<'a>(&'a HashMap<Uuid, DisplayAddr>);

impl Broadcast<'_> {
    fn send(&self, event: DisplayEvent) {
        for addr in self.0.values() {
            addr.do_send(DisplayUpdate(event.clone()));
        }
    }
}

impl Display for Broadcast<'_> {
    fn render_target(&mut self, pos: Position) {
        self.send(DisplayEvent::TargetShown { row: pos.row, col: pos.col });
    }

    fn clear_grid(&mut self) {
        self.send(DisplayEvent::GridCleared);
    }

    fn render_stats(&mut self, score: i64, accuracy: f64) {
        self.send(DisplayEvent::StatsUpdated { score, accuracy });
    }

    fn game_status(&mut self, running: bool) {
        self.send(DisplayEvent::GameStatus { running });
    }
}

pub struct RoundScheduler {
    round: Round,
    rng: StdRng,
    displays: HashMap<Uuid, DisplayAddr>,
    game_id: Option<Uuid>,
    phase_timer: Option<SpawnHandle>,
}

impl Actor for RoundScheduler {
    type Context = Context<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[RoundScheduler] Game loop ended");
    }
}

impl RoundScheduler {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            round: Round::new(config),
            rng,
            displays: HashMap::new(),
            game_id: None,
            phase_timer: None,
        }
    }

    fn start_game(&mut self, ctx: &mut Context<Self>) {
        if !self.round.start(&mut Broadcast(&self.displays)) {
            warn!("[RoundScheduler] Start requested while game {:?} is running", self.game_id);
            return;
        }
        let game_id = Uuid::new_v4();
        self.game_id = Some(game_id);
        info!("[RoundScheduler] Game started: game_id={}", game_id);
        self.schedule_show(ctx);
    }

    fn stop_game(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.phase_timer.take() {
            ctx.cancel_future(handle);
        }
        if !self.round.is_running() {
            return;
        }
        self.round.stop(&mut Broadcast(&self.displays));
        let state = self.round.state();
        info!(
            "[RoundScheduler] Game stopped: game_id={:?} score={} accuracy={}",
            self.game_id, state.score, state.accuracy
        );
    }

    /// Hidden phase: wait, then show the target.
    fn schedule_show(&mut self, ctx: &mut Context<Self>) {
        let wait = self.round.hidden_duration(&mut self.rng);
        debug!("[RoundScheduler] Hidden for {:.2}s", wait.as_secs_f64());
        let handle = ctx.run_later(wait, |act, ctx| {
            act.show_target(ctx);
        });
        self.phase_timer = Some(handle);
    }

    fn show_target(&mut self, ctx: &mut Context<Self>) {
        self.phase_timer = None;
        if self.round.show_target(&mut self.rng, &mut Broadcast(&self.displays)).is_none() {
            return;
        }
        let shown = self.round.shown_duration(&mut self.rng);
        debug!("[RoundScheduler] Shown for {:.2}s", shown.as_secs_f64());
        let handle = ctx.run_later(shown, |act, ctx| {
            act.hide_target(ctx);
        });
        self.phase_timer = Some(handle);
    }

    fn hide_target(&mut self, ctx: &mut Context<Self>) {
        self.phase_timer = None;
        if self.round.hide_target(&mut Broadcast(&self.displays)) {
            self.schedule_show(ctx);
        }
    }

    /// Catch a newly connected display up with the current game.
    fn send_state(&self, addr: &DisplayAddr) {
        let config = self.round.config();
        let state = self.round.state();
        let mut events = vec![
            DisplayEvent::GridInfo {
                rows: config.rows,
                cols: config.cols,
                title: WINDOW_TITLE.to_string(),
            },
            DisplayEvent::GameStatus { running: self.round.is_running() },
            DisplayEvent::StatsUpdated { score: state.score, accuracy: state.accuracy },
        ];
        if state.round.is_target_active {
            let pos = state.round.target_position;
            events.push(DisplayEvent::TargetShown { row: pos.row, col: pos.col });
        }
        for event in events {
            addr.do_send(DisplayUpdate(event));
        }
    }
}

impl Handler<StartGame> for RoundScheduler {
    type Result = ();

    fn handle(&mut self, _: StartGame, ctx: &mut Context<Self>) -> Self::Result {
        self.start_game(ctx);
    }
}

impl Handler<StopGame> for RoundScheduler {
    type Result = ();

    fn handle(&mut self, _: StopGame, ctx: &mut Context<Self>) -> Self::Result {
        self.stop_game(ctx);
    }
}

impl Handler<SelectCell> for RoundScheduler {
    type Result = ();

    fn handle(&mut self, msg: SelectCell, _: &mut Context<Self>) -> Self::Result {
        self.round.select_cell(msg.row, msg.col, &mut Broadcast(&self.displays));
    }
}

impl Handler<RegisterDisplay> for RoundScheduler {
    type Result = ();

    fn handle(&mut self, msg: RegisterDisplay, _: &mut Context<Self>) -> Self::Result {
        debug!("[RoundScheduler] Display registered: {}", msg.id);
        self.send_state(&msg.addr);
        self.displays.insert(msg.id, msg.addr);
    }
}

impl Handler<UnregisterDisplay> for RoundScheduler {
    type Result = ();

    /// Closing the last display ends the running game.
    fn handle(&mut self, msg: UnregisterDisplay, ctx: &mut Context<Self>) -> Self::Result {
        if self.displays.remove(&msg.id).is_none() {
            return;
        }
        debug!("[RoundScheduler] Display unregistered: {}", msg.id);
        if self.displays.is_empty() && self.round.is_running() {
            info!("[RoundScheduler] Last display closed, stopping game {:?}", self.game_id);
            self.stop_game(ctx);
        }
    }
}

impl Handler<GetSnapshot> for RoundScheduler {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(Snapshot {
            phase: self.round.phase(),
            state: self.round.state().clone(),
        })
    }
}
