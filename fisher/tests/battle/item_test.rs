use assert_matches::assert_matches;
use fisher::battle::{
    ActionReport,
    BattleState,
};
use fisher_data::Id;
use fisher_test_utils::{
    TestGameBuilder,
    assert_invalid_input,
    assert_new_logs_eq,
    static_local_data_store,
};

#[test]
fn item_use_takes_the_turn_before_the_monster() {
    let data = static_local_data_store();
    let builder = TestGameBuilder::new()
        .with_member("swordfish")
        .with_monster("sewer_rat")
        .with_item("potion")
        .with_item("revive");
    let mut game = builder.build_game(data).unwrap();
    game.party[0].hp = 10;
    let mut battle = builder.build_battle(&game, data).unwrap();
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "item 0,0").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Swordfish recovered 12 HP!",
            "Sewer Rat uses Tackle! Deals 1 damage.",
        ]
    );
    assert_matches!(report.actions.first(), Some(ActionReport::Item { target: 0, message }) => {
        assert_eq!(message, "Swordfish recovered 12 HP!");
    });
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "useitem|mon:Swordfish,player|name:Potion|health:22/22",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Swordfish,player|health:21/22",
        ],
    );
    assert_eq!(game.inventory, vec![Id::from("revive")]);
    assert_eq!(battle.state(), &BattleState::Ready);
}

#[test]
fn rejected_item_use_changes_nothing() {
    let (mut game, mut battle) = TestGameBuilder::new()
        .with_member("swordfish")
        .with_monster("sewer_rat")
        .with_item("revive")
        .build(static_local_data_store())
        .unwrap();
    battle.new_logs().count();

    // Reviving a conscious member has no effect.
    assert_invalid_input(battle.make_choice(&mut game, "item 0,0"));
    assert_invalid_input(battle.make_choice(&mut game, "item 3,0"));
    assert_invalid_input(battle.make_choice(&mut game, "item 0,4"));
    assert_eq!(battle.turn(), 0);
    assert!(!battle.has_new_logs());
    assert_eq!(game.inventory, vec![Id::from("revive")]);
    assert_eq!(game.party[0].hp, 22);
}

#[test]
fn revives_benched_member_mid_battle() {
    let data = static_local_data_store();
    let builder = TestGameBuilder::new()
        .with_member("swordfish")
        .with_member("guppy")
        .with_monster("sewer_rat")
        .with_item("revive");
    let mut game = builder.build_game(data).unwrap();
    game.party[1].hp = 0;
    let mut battle = builder.build_battle(&game, data).unwrap();
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "item 0,1").unwrap();
    assert_eq!(report.messages[0], "Guppy was revived!");
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "useitem|mon:Guppy,player|name:Revive|health:15/30",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Swordfish,player|health:21/22",
        ],
    );
    assert!(game.inventory.is_empty());
    assert_eq!(game.active_candidates(), vec![0, 1]);
}
