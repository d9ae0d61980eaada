use crate::modifiers::{Latch, ModifierConfig, ModifierKey, ModifierStateController};
use crate::nav_mode::{NavDirection, NavModeConfig, NavModeController, NavModeEvent};

fn setup(enabled: bool) -> (NavModeController, ModifierStateController) {
    let config = NavModeConfig {
        enabled,
        ..NavModeConfig::default()
    };
    (
        NavModeController::new(config),
        ModifierStateController::new(ModifierConfig { double_tap_ms: 300 }),
    )
}

fn ctrl_tap(
    nav: &NavModeController,
    mods: &mut ModifierStateController,
    now_ms: u64,
) -> Option<NavModeEvent> {
    nav.on_ctrl_down(mods);
    nav.on_ctrl_up(mods, now_ms)
}

#[test]
fn test_double_tap_activates_and_tap_deactivates() {
    let (nav, mut mods) = setup(true);
    assert_eq!(ctrl_tap(&nav, &mut mods, 0), None);
    assert!(!nav.is_active(&mods));

    assert_eq!(ctrl_tap(&nav, &mut mods, 120), Some(NavModeEvent::Activated));
    assert!(nav.is_active(&mods));
    assert!(mods.ctrl_latch_from_nav_mode());

    assert_eq!(ctrl_tap(&nav, &mut mods, 2_000), Some(NavModeEvent::Deactivated));
    assert!(!nav.is_active(&mods));
    assert_eq!(mods.latch(ModifierKey::Ctrl), Latch::Off);
}

#[test]
fn test_map_key_only_while_active() {
    let (nav, mut mods) = setup(true);
    assert_eq!(nav.map_key(&mods, 33), None);

    ctrl_tap(&nav, &mut mods, 0);
    ctrl_tap(&nav, &mut mods, 100);
    assert_eq!(nav.map_key(&mods, 33), Some(NavDirection::Up));
    assert_eq!(nav.map_key(&mods, 47), Some(NavDirection::Left));
    assert_eq!(nav.map_key(&mods, 32), Some(NavDirection::Down));
    assert_eq!(nav.map_key(&mods, 34), Some(NavDirection::Right));
    assert_eq!(nav.map_key(&mods, 29), None);
}

#[test]
fn test_disabled_leaves_ctrl_alone() {
    let (nav, mut mods) = setup(false);
    assert!(!nav.on_ctrl_down(&mut mods));
    assert_eq!(nav.on_ctrl_up(&mut mods, 0), None);
    assert!(!mods.is_pressed(ModifierKey::Ctrl));
    assert_eq!(mods.latch(ModifierKey::Ctrl), Latch::Off);
}

#[test]
fn test_disabled_still_releases_active_latch() {
    let (nav, mut mods) = setup(false);
    mods.set_ctrl_nav_latch(true);
    assert!(nav.handles_keys(&mods));
    assert_eq!(ctrl_tap(&nav, &mut mods, 0), Some(NavModeEvent::Deactivated));
    assert!(!nav.is_active(&mods));
}

#[test]
fn test_exit() {
    let (nav, mut mods) = setup(true);
    assert_eq!(nav.exit(&mut mods), None);
    mods.set_ctrl_nav_latch(true);
    assert_eq!(nav.exit(&mut mods), Some(NavModeEvent::Deactivated));
    assert_eq!(mods.latch(ModifierKey::Ctrl), Latch::Off);
}
