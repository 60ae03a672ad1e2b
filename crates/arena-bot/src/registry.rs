use crate::{BotConfig, BotController};

/// Fresh controller instances for a host to choose from.
///
/// Each call builds new instances; nothing is shared between matches or hosts.
pub fn potential_controllers() -> Vec<BotController> {
    vec![BotController::with_config(BotConfig::default())]
}
