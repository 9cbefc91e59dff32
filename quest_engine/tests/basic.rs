use qe::style::GameStyle;
use qe::*;
use quest_data::{ChallengeKind, HEALTH_POTION, StatKind, hero_quest};
use quest_engine as qe;

#[test]
fn test_move_choice_parse() {
    use qe::command::{MoveChoice, parse_move_choice};
    assert_eq!(parse_move_choice("0"), MoveChoice::Backtrack);
    assert_eq!(parse_move_choice("4\n"), MoveChoice::Room(4));
    assert!(parse_move_choice("left").is_invalid());
}

#[test]
fn test_challenge_index_is_keyed_by_room() {
    let world = build_world(&hero_quest(), RulesConfig::full()).unwrap();
    let kinds: Vec<_> = (1..=5).map(|room| world.challenges.lookup(room).map(|c| c.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(ChallengeKind::Trap),
            Some(ChallengeKind::Combat),
            Some(ChallengeKind::Puzzle),
            Some(ChallengeKind::Boss)
        ]
    );
}

#[test]
fn test_room_graph_rejects_unknown_room() {
    let world = build_world(&hero_quest(), RulesConfig::full()).unwrap();
    assert_eq!(world.graph.neighbors(1).unwrap(), &[2, 3]);
    assert!(matches!(world.graph.room(9), Err(RoomError::OutOfRange(9))));
}

#[test]
fn test_inventory_potion_heals_hero() {
    let mut hero = Hero::new(5, 7, 8, true);
    hero.take_damage(15);
    let mut inventory = Inventory::with_items(["Sword", HEALTH_POTION]);
    assert!(inventory.use_health_potion(&mut hero));
    assert_eq!(hero.health(), 15);
    assert!(!inventory.contains_item(HEALTH_POTION));
    assert!(!inventory.use_health_potion(&mut hero));
}

#[test]
fn test_treasure_applies_bonus() {
    let mut hero = Hero::new(5, 7, 8, true);
    let tome = Treasure {
        name: "Ancient Tome".into(),
        stat: StatKind::Intelligence,
        bonus: 5,
    };
    tome.apply(&mut hero);
    assert_eq!(hero.intelligence, 13);
    assert_eq!(tome.effect(), "+5 Intelligence");
}

#[test]
fn test_path_tracker_backtracks_to_start() {
    let mut path = PathTracker::starting_at(1);
    path.visit(3);
    path.visit(5);
    assert_eq!(path.backtrack(), Some(5));
    assert_eq!(path.backtrack(), Some(3));
    assert_eq!(path.backtrack(), None);
    assert_eq!(path.current_path(), &[1]);
}

#[test]
fn test_version_is_set() {
    assert!(!QUEST_VERSION.is_empty());
}

#[test]
fn test_style_trait_keeps_text() {
    let styled = "Room 3".room_titlebar_style().to_string();
    assert!(styled.contains("Room 3"));
}
