use super::*;

#[test]
fn mount_points_have_distinct_ids() {
    let ids: Vec<_> = MountPoint::ALL.iter().map(|p| p.element_id()).collect();
    assert_eq!(ids, ["theme-switcher", "game-details-app", "game-structure-editor"]);
}

#[test]
fn mount_is_a_noop_without_browser() {
    mount();
}

#[test]
fn card_tilt_is_a_noop_without_browser() {
    crate::util::card_tilt::attach();
}
