use std::future::Future;

use super::tictactoe::GameView;

/// Sink for the presentation layer. Receives a full view after every state change.
/// Views are sent while the game is locked, so implementations must not call back into the session.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_view(&self, view: GameView) -> impl Future<Output = ()> + Send;
}
