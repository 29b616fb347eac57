use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn memory_target_round_trips_class_name() {
    let mut target = MemoryTarget::new("theme-base-08 layout-reverse");
    assert_eq!(target.class_name(), "theme-base-08 layout-reverse");
    target.set_class_name("");
    assert_eq!(target.class_name(), "");
}

#[test]
fn apply_replaces_existing_theme_class_entirely() {
    let palette = Palette::default();
    let mut target = MemoryTarget::new("theme-base-0c");
    let applied = apply_theme(&mut target, &palette, Strategy::Random, &mut rng());

    assert_eq!(applied.from, "theme-base-0c");
    assert_eq!(target.class_name(), applied.to);
    assert!(palette.index_of_class(&target.class_name()).is_some());
    assert!(!target.class_name().contains(' '));
}

#[test]
fn apply_drops_unrelated_classes() {
    let palette = Palette::default();
    let mut target = MemoryTarget::new("layout-reverse sidebar-overlay");
    apply_theme(&mut target, &palette, Strategy::Random, &mut rng());
    assert!(!target.class_name().contains("layout-reverse"));
    assert!(!target.class_name().contains("sidebar-overlay"));
}

#[test]
fn applying_twice_leaves_exactly_one_theme_class() {
    let palette = Palette::default();
    let mut target = MemoryTarget::default();
    let mut rng = rng();
    apply_theme(&mut target, &palette, Strategy::Random, &mut rng);
    let second = apply_theme(&mut target, &palette, Strategy::Random, &mut rng);

    let class = target.class_name();
    assert_eq!(class, second.to);
    assert_eq!(class.matches("theme-base-").count(), 1);
    assert!(palette.index_of_class(&class).is_some());
}

#[test]
fn repeated_cycle_applies_walk_the_palette() {
    let palette = Palette::default();
    let mut target = MemoryTarget::new("theme-base-0e");
    let mut rng = rng();
    let seen: Vec<String> = (0..3)
        .map(|_| apply_theme(&mut target, &palette, Strategy::Cycle, &mut rng).to)
        .collect();
    assert_eq!(seen, ["theme-base-0f", "theme-base-08", "theme-base-09"]);
}

#[test]
fn apply_works_through_trait_object() {
    let palette = Palette::default();
    let mut target = MemoryTarget::new("theme-base-0f");
    let dyn_target: &mut dyn ClassTarget = &mut target;
    apply_theme(dyn_target, &palette, Strategy::Cycle, &mut rng());
    assert_eq!(target.class_name(), "theme-base-08");
}
