use std::collections::HashSet;

use arena_bot::{potential_controllers, BotConfig, BotController, Controller, Tabard};

#[test]
fn equality_and_hash_follow_the_name() {
    let a = BotController::with_config(BotConfig::default().with_seed(1));
    let b = BotController::with_config(BotConfig::default().with_seed(2));
    let c = BotController::with_config(BotConfig::default().with_name("Other"));

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<BotController> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn registry_builds_fresh_instances() {
    let first = potential_controllers();
    let second = potential_controllers();

    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
    assert_eq!(first[0].name(), "BotController");
    assert_eq!(first[0].preferred_tabard(), Tabard::Red);
    assert!(first[0].world().is_empty());
    assert_eq!(first[0].goal(), None);
}
