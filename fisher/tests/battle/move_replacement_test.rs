use assert_matches::assert_matches;
use fisher::{
    battle::{
        Battle,
        BattleOutcome,
        BattleState,
        LearnMoveRequest,
        Request,
    },
    game::GameState,
};
use fisher_data::Id;
use fisher_test_utils::{
    TestGameBuilder,
    assert_invalid_input,
    assert_new_logs_eq,
    static_local_data_store,
};

/// A level 2 Guppy close to level 3, strong enough to defeat a floor 15 Sewer Rat in three turns.
fn leveling_battle(moves: &[&str]) -> (GameState, Battle<'static>) {
    let data = static_local_data_store();
    let builder = TestGameBuilder::new()
        .with_member("guppy")
        .with_floor(15)
        .with_monster("sewer_rat");
    let mut game = builder.build_game(data).unwrap();
    let guppy = &mut game.party[0];
    guppy.level = 2;
    guppy.xp = 40;
    guppy.xp_to_next = 50;
    guppy.atk = 100;
    guppy.moves = moves.iter().map(|id| Id::from(*id)).collect();
    let battle = builder.build_battle(&game, data).unwrap();
    (game, battle)
}

#[test]
fn full_move_list_asks_for_replacement() {
    let (mut game, mut battle) = leveling_battle(&["splash", "bubble_shot", "fin_slash"]);
    battle.make_choice(&mut game, "move splash").unwrap();
    battle.make_choice(&mut game, "move splash").unwrap();
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "move splash").unwrap();
    pretty_assertions::assert_eq!(
        report.messages,
        vec![
            "Guppy uses Splash! Deals 15 damage.",
            "Sewer Rat was defeated!",
            "Found 17 gold!",
            "Guppy gained 32 XP!",
            "Guppy grew to level 3!",
            "Guppy wants to learn Tackle!",
        ]
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:3",
            "move|mon:Guppy,player|name:Splash",
            "damage|mon:Sewer Rat,monster|health:0/42",
            "faint|mon:Sewer Rat,monster",
            "gold|amount:17",
            "exp|mon:Guppy,player|exp:32",
            "levelup|mon:Guppy,player|level:3",
            "pendingmove|mon:Guppy,player|move:Tackle",
            "win|side:player",
        ],
    );
    assert_eq!(report.outcome, None);
    assert_eq!(
        report.request,
        Some(Request::LearnMove(LearnMoveRequest {
            member: 0,
            move_id: Id::from("tackle"),
        }))
    );
    assert_matches!(battle.state(), BattleState::AwaitingMoveReplacement(_));
    assert!(!battle.ended());
    assert_eq!(battle.request(&game), report.request);

    let guppy = &game.party[0];
    assert_eq!(guppy.level, 3);
    assert_eq!(guppy.xp, 22);
    assert_eq!(guppy.xp_to_next, 75);
    assert_eq!(guppy.max_hp, 35);
    assert_eq!(guppy.hp, 33);
    assert_eq!(guppy.pending_move, Some(Id::from("tackle")));
    assert_eq!(game.gold, 17);

    assert_invalid_input(battle.make_choice(&mut game, "move splash"));
    assert_invalid_input(battle.make_choice(&mut game, "learnmove 3"));
    assert_eq!(game.party[0].pending_move, Some(Id::from("tackle")));

    let report = battle.make_choice(&mut game, "learnmove 0").unwrap();
    assert_eq!(report.messages, vec!["Guppy forgot Splash and learned Tackle!"]);
    assert_new_logs_eq(
        &mut battle,
        &[
            "forgetmove|mon:Guppy,player|move:Splash",
            "learnmove|mon:Guppy,player|move:Tackle",
        ],
    );
    assert_matches!(report.outcome, Some(BattleOutcome::MonsterDefeated(victory)) => {
        assert_eq!(victory.monster, Id::from("sewer_rat"));
        assert_eq!(victory.experience.pending, Some(Id::from("tackle")));
    });
    assert!(battle.ended());
    assert_eq!(
        game.party[0].moves,
        vec![
            Id::from("tackle"),
            Id::from("bubble_shot"),
            Id::from("fin_slash"),
        ]
    );
    assert_eq!(game.party[0].pending_move, None);
}

#[test]
fn pending_move_can_be_skipped() {
    let (mut game, mut battle) = leveling_battle(&["splash", "bubble_shot", "fin_slash"]);
    while battle.state() == &BattleState::Ready {
        battle.make_choice(&mut game, "move splash").unwrap();
    }
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "learnmove skip").unwrap();
    assert_eq!(report.messages, vec!["Guppy did not learn Tackle."]);
    assert_new_logs_eq(&mut battle, &["skipmove|mon:Guppy,player|move:Tackle"]);
    assert!(battle.ended());
    assert_eq!(
        game.party[0].moves,
        vec![
            Id::from("splash"),
            Id::from("bubble_shot"),
            Id::from("fin_slash"),
        ]
    );
    assert_eq!(game.party[0].pending_move, None);
}

#[test]
fn free_slot_learns_move_directly() {
    let (mut game, mut battle) = leveling_battle(&["splash"]);
    battle.make_choice(&mut game, "move splash").unwrap();
    battle.make_choice(&mut game, "move splash").unwrap();
    battle.new_logs().count();

    let report = battle.make_choice(&mut game, "move splash").unwrap();
    assert_eq!(
        report.messages[4..],
        ["Guppy grew to level 3!", "Guppy learned Tackle!"]
    );
    assert_new_logs_eq(
        &mut battle,
        &[
            "turn|turn:3",
            "move|mon:Guppy,player|name:Splash",
            "damage|mon:Sewer Rat,monster|health:0/42",
            "faint|mon:Sewer Rat,monster",
            "gold|amount:17",
            "exp|mon:Guppy,player|exp:32",
            "levelup|mon:Guppy,player|level:3",
            "learnmove|mon:Guppy,player|move:Tackle",
            "win|side:player",
        ],
    );
    assert_matches!(report.outcome, Some(BattleOutcome::MonsterDefeated(_)));
    assert!(battle.ended());
    assert_eq!(
        game.party[0].moves,
        vec![Id::from("splash"), Id::from("tackle")]
    );
}
