use assert_matches::assert_matches;
use fisher::battle::{
    BattleOutcome,
    BattleState,
    Request,
    SwitchRequest,
    TurnRequest,
};
use fisher_data::Id;
use fisher_test_utils::{
    TestGameBuilder,
    assert_invalid_input,
    assert_new_logs_eq,
    get_controlled_rng_for_battle,
    setup_test_environment,
    static_local_data_store,
};

#[test]
fn fainted_member_must_be_switched_out_until_party_wipes() {
    setup_test_environment();
    let (mut game, mut battle) = TestGameBuilder::new()
        .with_member("guppy")
        .with_member("pufferfish")
        .with_floor(100)
        .with_camp_floor(90)
        .with_gold(40)
        .with_monster("dungeon_lord")
        .with_controlled_rng(true)
        .build(static_local_data_store())
        .unwrap();
    // Dungeon Lord always picks Deep Strike.
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count((1..=5).map(|i| (i, 0)));
    battle.new_logs().count();

    battle.make_choice(&mut game, "move splash").unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "move|mon:Dungeon Lord,monster|name:Deep Strike",
            "damage|mon:Guppy,player|health:4/30",
            "move|mon:Guppy,player|name:Splash",
            "damage|mon:Dungeon Lord,monster|health:194/195",
        ],
    );

    let report = battle.make_choice(&mut game, "move splash").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Dungeon Lord uses Deep Strike! Deals 26 damage.",
            "Guppy fainted!",
        ]
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:2",
            "move|mon:Dungeon Lord,monster|name:Deep Strike",
            "damage|mon:Guppy,player|health:0/30",
            "faint|mon:Guppy,player",
        ],
    );
    assert_eq!(
        report.outcome,
        Some(BattleOutcome::PartyMemberFainted {
            member: 0,
            options: vec![1],
        })
    );
    assert_eq!(
        report.request,
        Some(Request::Switch(SwitchRequest { options: vec![1] }))
    );
    assert_eq!(battle.state(), &BattleState::AwaitingSwitch);
    assert!(!battle.ended());

    assert_invalid_input(battle.make_choice(&mut game, "move splash"));
    assert_invalid_input(battle.make_choice(&mut game, "switch 0"));
    assert_invalid_input(battle.make_choice(&mut game, "switch 2"));
    assert_eq!(battle.state(), &BattleState::AwaitingSwitch);

    let report = battle.make_choice(&mut game, "switch 1").unwrap();
    assert_eq!(report.messages, vec!["Go, Pufferfish!"]);
    assert_eq!(
        report.request,
        Some(Request::Turn(TurnRequest {
            active: 1,
            moves: vec![Id::from("tackle")],
        }))
    );
    assert_eq!(battle.active(), 1);
    assert_new_logs_eq(&mut battle, &["switch|mon:Pufferfish,player|health:45/45"]);

    battle.make_choice(&mut game, "move tackle").unwrap();
    battle.make_choice(&mut game, "move tackle").unwrap();
    assert_eq!(game.party[1].hp, 1);
    assert_eq!(battle.monster().hp, 192);
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "move tackle").unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:5",
            "move|mon:Dungeon Lord,monster|name:Deep Strike",
            "damage|mon:Pufferfish,player|health:0/45",
            "faint|mon:Pufferfish,player",
            "win|side:monster",
        ],
    );
    assert_eq!(report.outcome, Some(BattleOutcome::PartyWiped { floor: 90 }));
    assert_eq!(report.request, None);
    assert!(battle.ended());

    // The party is restored and sent back to the checkpoint.
    assert_eq!(game.floor, 90);
    assert_eq!(game.gold, 40);
    assert_eq!(game.party[0].hp, 30);
    assert_eq!(game.party[1].hp, 45);
}

#[test]
fn single_member_party_wipes_immediately() {
    let (mut game, mut battle) = TestGameBuilder::new()
        .with_member("guppy")
        .with_floor(100)
        .with_monster("dungeon_lord")
        .with_controlled_rng(true)
        .build(static_local_data_store())
        .unwrap();
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0)]);

    battle.make_choice(&mut game, "move splash").unwrap();
    let report = battle.make_choice(&mut game, "move splash").unwrap();
    assert_matches!(report.outcome, Some(BattleOutcome::PartyWiped { floor: 1 }));
    assert_eq!(
        report.messages.last().map(|message| message.as_str()),
        Some("Your party was wiped out!")
    );
    assert_eq!(game.floor, 1);
    assert_eq!(game.party[0].hp, 30);
}
