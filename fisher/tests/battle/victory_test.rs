use anyhow::Result;
use assert_matches::assert_matches;
use fisher::{
    battle::{
        Battle,
        BattleOutcome,
        BattleState,
    },
    game::GameState,
};
use fisher_data::DataStore;
use fisher_test_utils::{
    TestGameBuilder,
    assert_invalid_input,
    assert_new_logs_eq,
    setup_test_environment,
    static_local_data_store,
};

fn make_battle(data: &dyn DataStore) -> Result<(GameState, Battle<'_>)> {
    TestGameBuilder::new()
        .with_member("swordfish")
        .with_monster("sewer_rat")
        .with_seed(0)
        .build(data)
}

#[test]
fn defeating_monster_awards_gold_and_experience() {
    setup_test_environment();
    let (mut game, mut battle) = make_battle(static_local_data_store()).unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "battle|floor:1",
            "appear|mon:Sewer Rat,monster|health:16/16",
            "switch|mon:Swordfish,player|health:22/22",
        ],
    );

    let report = battle.make_choice(&mut game, "move fin_slash").unwrap();
    assert_eq!(report.turn, 1);
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Swordfish uses Fin Slash! Deals 5 damage.",
            "Sewer Rat uses Tackle! Deals 1 damage.",
        ]
    );
    assert_eq!(report.outcome, None);
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "move|mon:Swordfish,player|name:Fin Slash",
            "damage|mon:Sewer Rat,monster|health:11/16",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Swordfish,player|health:21/22",
        ],
    );

    battle.make_choice(&mut game, "move fin_slash").unwrap();
    battle.make_choice(&mut game, "move fin_slash").unwrap();
    assert_eq!(battle.monster().hp, 1);
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "move Fin Slash").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Swordfish uses Fin Slash! Deals 5 damage.",
            "Sewer Rat was defeated!",
            "Found 5 gold!",
            "Swordfish gained 11 XP!",
        ]
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:4",
            "move|mon:Swordfish,player|name:Fin Slash",
            "damage|mon:Sewer Rat,monster|health:0/16",
            "faint|mon:Sewer Rat,monster",
            "gold|amount:5",
            "exp|mon:Swordfish,player|exp:11",
            "win|side:player",
        ],
    );
    assert_matches!(report.outcome, Some(BattleOutcome::MonsterDefeated(victory)) => {
        assert_eq!(victory.gold, 5);
        assert_eq!(victory.xp, 11);
        assert_eq!(victory.member, 0);
        assert_eq!(victory.experience.levels_gained, 0);
    });
    assert_eq!(report.request, None);
    assert!(battle.ended());
    assert_eq!(battle.request(&game), None);

    assert_eq!(game.gold, 5);
    assert_eq!(game.party[0].xp, 11);
    assert_eq!(game.party[0].hp, 19);
    // The caller moves on to the next floor.
    assert_eq!(game.floor, 1);
    assert!(game.advance_floor());
    assert_eq!(game.floor, 2);
}

#[test]
fn concluded_battle_rejects_further_choices() {
    let (mut game, mut battle) = make_battle(static_local_data_store()).unwrap();
    while !battle.ended() {
        battle.make_choice(&mut game, "move fin_slash").unwrap();
    }
    assert_matches!(battle.state(), BattleState::Concluded(_));
    assert_invalid_input(battle.make_choice(&mut game, "move fin_slash"));
    assert_invalid_input(battle.make_choice(&mut game, "switch 0"));
    assert_invalid_input(battle.make_choice(&mut game, "learnmove skip"));
    assert_eq!(battle.turn(), 4);
    assert_eq!(game.gold, 5);
}

#[test]
fn faster_monster_moves_first() {
    let data = static_local_data_store();
    let builder = TestGameBuilder::new()
        .with_member("pufferfish")
        .with_monster("sewer_rat")
        .with_floor(15);
    let mut game = builder.build_game(data).unwrap();
    let mut battle = builder.build_battle(&game, data).unwrap();
    battle.new_logs().count();

    // Sewer Rat has 5 SPD on floor 15, Pufferfish has 3.
    battle.make_choice(&mut game, "move tackle").unwrap();
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:1",
            "move|mon:Sewer Rat,monster|name:Tackle",
            "damage|mon:Pufferfish,player|health:44/45",
            "move|mon:Pufferfish,player|name:Tackle",
            "damage|mon:Sewer Rat,monster|health:41/42",
        ],
    );
}
