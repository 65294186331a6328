use fisher::{
    battle::{
        Request,
        SwitchRequest,
    },
    economy::{
        buy_fish,
        buy_item,
        shop_fish,
    },
};
use fisher_data::Id;
use fisher_test_utils::{
    TestGameBuilder,
    assert_error_message_contains,
    assert_invalid_input,
    get_controlled_rng_for_battle,
    static_local_data_store,
};

#[test]
fn bought_fish_and_items_join_the_next_battle() {
    let data = static_local_data_store();
    let builder = TestGameBuilder::new()
        .with_member("guppy")
        .with_gold(200)
        .with_floor(100)
        .with_monster("dungeon_lord")
        .with_controlled_rng(true);
    let mut game = builder.build_game(data).unwrap();

    assert_eq!(
        shop_fish(&game, data).unwrap(),
        vec![
            Id::from("anglerfish"),
            Id::from("barracuda"),
            Id::from("clownfish"),
            Id::from("golden_koi"),
            Id::from("jellyfish"),
            Id::from("manta_ray"),
            Id::from("seahorse"),
        ]
    );
    assert_eq!(buy_fish(&mut game, data, &Id::from("jellyfish")).unwrap(), 1);
    assert_invalid_input(buy_fish(&mut game, data, &Id::from("jellyfish")));
    assert_error_message_contains(
        buy_fish(&mut game, data, &Id::from("jellyfish")),
        "party already has a Jellyfish",
    );
    assert_invalid_input(buy_fish(&mut game, data, &Id::from("golden_koi")));
    assert_error_message_contains(
        buy_fish(&mut game, data, &Id::from("golden_koi")),
        "Golden Koi costs",
    );
    assert!(!shop_fish(&game, data).unwrap().contains(&Id::from("jellyfish")));
    buy_item(&mut game, data, &Id::from("revive")).unwrap();
    assert_eq!(game.gold, 65);

    let mut battle = builder.build_battle(&game, data).unwrap();
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_values_relative_to_sequence_count([(1, 0), (2, 0), (3, 0)]);
    battle.make_choice(&mut game, "move splash").unwrap();
    let report = battle.make_choice(&mut game, "move splash").unwrap();
    assert_eq!(
        report.request,
        Some(Request::Switch(SwitchRequest { options: vec![1] }))
    );

    // Items cannot be used while a switch is pending.
    assert_invalid_input(battle.make_choice(&mut game, "item 0,0"));
    battle.make_choice(&mut game, "switch 1").unwrap();

    let report = battle.make_choice(&mut game, "item 0,0").unwrap();
    assert_eq!(report.messages[0], "Guppy was revived!");
    assert!(game.inventory.is_empty());
    assert_eq!(game.active_candidates(), vec![0, 1]);
}
