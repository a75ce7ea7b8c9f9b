use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::games::GameBroadcaster;
use crate::log;
use crate::logger::init_logger;
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::error::GameError;
use super::game_state::{MoveOutcome, TicTacToeGameState};
use super::settings::{GameConfig, TicTacToeSessionSettings};
use super::types::{GameMode, GameView};

type BotTask = JoinHandle<Option<MoveOutcome>>;

/// Drives one game from presentation-layer events and schedules the AI reply.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    game_state: Arc<Mutex<TicTacToeGameState>>,
    settings: TicTacToeSessionSettings,
    broadcaster: B,
    bot_task: Arc<Mutex<Option<BotTask>>>,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, broadcaster: B) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new(settings.initial_mode))),
            settings,
            broadcaster,
            bot_task: Arc::new(Mutex::new(None)),
        }
    }

    /// Installs the process logger from `config` on first use, then builds the session.
    pub fn from_config(config: &GameConfig, broadcaster: B) -> Self {
        init_logger(config.log_prefix.clone(), config.log_level());
        Self::new(TicTacToeSessionSettings::from(config), broadcaster)
    }

    /// Pushes the initial view so the presentation layer can draw the empty board.
    pub async fn start(&self) {
        let game_state = self.game_state.lock().await;
        self.broadcaster.broadcast_view(game_state.view()).await;
    }

    pub async fn view(&self) -> GameView {
        self.game_state.lock().await.view()
    }

    /// Rejected input leaves the game untouched; the error is logged and returned.
    pub async fn on_cell_activated(&self, index: usize) -> Result<MoveOutcome, GameError> {
        let mut game_state = self.game_state.lock().await;
        let outcome = match game_state.place_mark(index) {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("[generation:{}] Ignoring move at {}: {}", game_state.generation(), index, e);
                return Err(e);
            }
        };

        let view = game_state.view();
        let bot_generation = game_state.is_bot_turn().then(|| game_state.generation());
        if outcome.status.is_over() {
            log!("[generation:{}] Game over: {}", game_state.generation(), view.status);
        }
        // Views go out under the lock so they reach the presentation layer in state order.
        self.broadcaster.broadcast_view(view).await;
        drop(game_state);

        if let Some(generation) = bot_generation {
            self.schedule_bot_turn(generation).await;
        }

        Ok(outcome)
    }

    pub async fn on_restart_requested(&self) {
        let mut game_state = self.game_state.lock().await;
        game_state.restart();
        log!("[generation:{}] Game restarted in {:?} mode", game_state.generation(), game_state.mode());
        self.broadcaster.broadcast_view(game_state.view()).await;
    }

    pub async fn on_mode_changed(&self, mode: GameMode) {
        let mut game_state = self.game_state.lock().await;
        game_state.set_mode(mode);
        log!("[generation:{}] Mode changed to {:?}", game_state.generation(), mode);
        self.broadcaster.broadcast_view(game_state.view()).await;
    }

    /// Waits for the most recently scheduled AI move, if any. `None` when it was dropped as stale.
    pub async fn wait_for_bot(&self) -> Option<MoveOutcome> {
        let task = self.bot_task.lock().await.take()?;
        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("Bot task failed: {}", e);
                None
            }
        }
    }

    async fn schedule_bot_turn(&self, generation: u64) {
        let session = self.clone();
        let task = tokio::spawn(async move { session.play_bot_turn(generation).await });
        *self.bot_task.lock().await = Some(task);
    }

    async fn play_bot_turn(&self, generation: u64) -> Option<MoveOutcome> {
        tokio::time::sleep(self.settings.ai_delay).await;

        let bot_input = {
            let game_state = self.game_state.lock().await;
            if game_state.generation() != generation || !game_state.is_bot_turn() {
                log!(
                    "[generation:{}] Dropping bot move scheduled for generation {}",
                    game_state.generation(),
                    generation
                );
                return None;
            }
            BotInput::from_game_state(&game_state)
        };

        let index = match tokio::task::spawn_blocking(move || calculate_minimax_move(&bot_input)).await {
            Ok(Ok(index)) => index,
            Ok(Err(e)) => {
                log!("[generation:{}] Bot found no move: {}", generation, e);
                return None;
            }
            Err(e) => {
                log!("[generation:{}] Bot search panicked: {}", generation, e);
                return None;
            }
        };

        let mut game_state = self.game_state.lock().await;
        match game_state.apply_bot_move(generation, index) {
            Ok(outcome) => {
                let view = game_state.view();
                if outcome.status.is_over() {
                    log!("[generation:{}] Game over: {}", generation, view.status);
                }
                self.broadcaster.broadcast_view(view).await;
                Some(outcome)
            }
            Err(e) => {
                log!("[generation:{}] Bot failed to place mark at {}: {}", generation, index, e);
                None
            }
        }
    }
}
