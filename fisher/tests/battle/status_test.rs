use assert_matches::assert_matches;
use fisher::{
    battle::{
        BattleOutcome,
        BattleState,
    },
    combat::Poison,
};
use fisher_data::Id;
use fisher_test_utils::{
    TestGameBuilder,
    assert_new_logs_eq,
    static_local_data_store,
};

#[test]
fn poison_ticks_at_end_of_turn_and_can_defeat_monster() {
    let (mut game, mut battle) = TestGameBuilder::new()
        .with_member("jellyfish")
        .with_monster("sewer_rat")
        .build(static_local_data_store())
        .unwrap();
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "move poison_bite").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Jellyfish uses Poison Bite! Deals 1 damage. Sewer Rat is poisoned!",
            "Sewer Rat uses Tackle! Deals 1 damage.",
            "Sewer Rat takes 5 poison damage!",
        ]
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "move|mon:Jellyfish,player|name:Poison Bite",
            "damage|mon:Sewer Rat,monster|health:15/16",
            "status|mon:Sewer Rat,monster|status:poison",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Jellyfish,player|health:24/25",
            "damage|mon:Sewer Rat,monster|from:poison|health:10/16",
        ],
    );

    // Poison does not stack or refresh.
    battle.make_choice(&mut game, "move poison_bite").unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:2",
            "move|mon:Jellyfish,player|name:Poison Bite",
            "damage|mon:Sewer Rat,monster|health:9/16",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Jellyfish,player|health:23/25",
            "damage|mon:Sewer Rat,monster|from:poison|health:4/16",
        ],
    );

    let report = battle.make_choice(&mut game, "move poison_bite").unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:3",
            "move|mon:Jellyfish,player|name:Poison Bite",
            "damage|mon:Sewer Rat,monster|health:3/16",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Jellyfish,player|health:22/25",
            "damage|mon:Sewer Rat,monster|from:poison|health:0/16",
            "curestatus|mon:Sewer Rat,monster|status:poison",
            "faint|mon:Sewer Rat,monster",
            "gold|amount:5",
            "exp|mon:Jellyfish,player|exp:11",
            "win|side:player",
        ],
    );
    assert_matches!(report.outcome, Some(BattleOutcome::MonsterDefeated(_)));
}

#[test]
fn poison_still_ticks_when_second_actor_knocks_out_first() {
    let (mut game, mut battle) = TestGameBuilder::new()
        .with_member("jellyfish")
        .with_member("pufferfish")
        .with_monster("sewer_rat")
        .build(static_local_data_store())
        .unwrap();
    battle.new_logs().count();
    game.party[0].hp = 1;

    let report = battle.make_choice(&mut game, "move poison_bite").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Jellyfish uses Poison Bite! Deals 1 damage. Sewer Rat is poisoned!",
            "Sewer Rat uses Tackle! Deals 1 damage.",
            "Sewer Rat takes 5 poison damage!",
            "Jellyfish fainted!",
        ]
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "move|mon:Jellyfish,player|name:Poison Bite",
            "damage|mon:Sewer Rat,monster|health:15/16",
            "status|mon:Sewer Rat,monster|status:poison",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Jellyfish,player|health:0/25",
            "damage|mon:Sewer Rat,monster|from:poison|health:10/16",
            "faint|mon:Jellyfish,player",
        ],
    );
    assert_eq!(battle.monster().hp, 10);
    assert_eq!(
        battle.monster().poisoned,
        Some(Poison {
            damage: 5,
            turns_left: 2,
        })
    );
    assert_eq!(battle.state(), &BattleState::AwaitingSwitch);
}

#[test]
fn poison_defeat_wins_over_member_fainting_on_same_turn() {
    let (mut game, mut battle) = TestGameBuilder::new()
        .with_member("jellyfish")
        .with_monster("sewer_rat")
        .build(static_local_data_store())
        .unwrap();
    battle.make_choice(&mut game, "move poison_bite").unwrap();
    battle.make_choice(&mut game, "move poison_bite").unwrap();
    battle.new_logs().count();
    game.party[0].hp = 1;

    let report = battle.make_choice(&mut game, "move poison_bite").unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:3",
            "move|mon:Jellyfish,player|name:Poison Bite",
            "damage|mon:Sewer Rat,monster|health:3/16",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Jellyfish,player|health:0/25",
            "damage|mon:Sewer Rat,monster|from:poison|health:0/16",
            "curestatus|mon:Sewer Rat,monster|status:poison",
            "faint|mon:Sewer Rat,monster",
            "gold|amount:5",
            "exp|mon:Jellyfish,player|exp:11",
            "win|side:player",
        ],
    );
    // Poison reports the HP actually lost.
    assert!(
        report
            .messages
            .contains(&"Sewer Rat takes 3 poison damage!".to_owned())
    );
    assert_matches!(report.outcome, Some(BattleOutcome::MonsterDefeated(_)));
    assert!(battle.ended());
}

#[test]
fn buff_raises_defense_until_it_wears_off() {
    let data = static_local_data_store();
    let builder = TestGameBuilder::new()
        .with_member("pufferfish")
        .with_monster("sewer_rat");
    let mut game = builder.build_game(data).unwrap();
    game.party[0].moves = vec![Id::from("tackle"), Id::from("harden")];
    let mut battle = builder.build_battle(&game, data).unwrap();
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "move harden").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Pufferfish uses Harden! DEF raised!",
            "Sewer Rat uses Tackle! Deals 1 damage.",
        ]
    );
    // Speed ties go to the party member.
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "move|mon:Pufferfish,player|name:Harden",
            "boost|mon:Pufferfish,player|stat:def|by:4|turns:3",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Pufferfish,player|health:44/45",
        ],
    );
    assert_eq!(game.party[0].buffs.len(), 1);

    battle.make_choice(&mut game, "move tackle").unwrap();
    battle.new_logs().count();
    let report = battle.make_choice(&mut game, "move tackle").unwrap();
    assert_eq!(
        report.messages.last().map(|message| message.as_str()),
        Some("Pufferfish's DEF boost wore off.")
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:3",
            "move|mon:Pufferfish,player|name:Tackle",
            "damage|mon:Sewer Rat,monster|health:14/16",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Pufferfish,player|health:42/45",
            "unboost|mon:Pufferfish,player|stat:def|by:4",
        ],
    );
    assert!(game.party[0].buffs.is_empty());
    assert_eq!(game.party[0].def, 9);
}
