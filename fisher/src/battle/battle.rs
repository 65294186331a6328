use std::str::FromStr;

use anyhow::{
    Error,
    Result,
};
use fisher_choice::Choice;
use fisher_data::{
    DataStore,
    Id,
    MoveData,
    MoveEffect,
};
use fisher_prng::PseudoRandomNumberGenerator;
use log::{
    debug,
    info,
};

use crate::{
    battle::{
        ActionReport,
        BattleEngineOptions,
        BattleOutcome,
        BattleState,
        LearnMoveRequest,
        Request,
        SwitchRequest,
        TurnReport,
        TurnRequest,
        Victory,
        battle_logs::{
            HealthLog,
            MonLog,
        },
    },
    battle_event,
    combat::{
        Combatant,
        Side,
        apply_move,
        determine_turn_order,
        pick_monster_move,
        resolve_end_of_turn,
    },
    economy,
    encounter::{
        Monster,
        generate_monster,
    },
    error::{
        WrapOptionError,
        WrapResultError,
        invalid_input_error,
    },
    game::GameState,
    log::EventLog,
    party::{
        PartyMember,
        award_experience,
        learn_pending_move,
    },
};

fn lookup_move(data: &dyn DataStore, move_id: &Id) -> Result<MoveData> {
    data.get_move(move_id)
        .wrap_error_with_format(format_args!("failed to look up move {move_id}"))?
        .wrap_not_found_error_with_format(format_args!("move {move_id}"))
}

fn active_member(game: &mut GameState, active: usize) -> Result<&mut PartyMember> {
    game.party
        .get_mut(active)
        .wrap_expectation(format!("no party member at index {active}"))
}

/// A single encounter between the active party member and one monster.
///
/// The battle is driven one choice at a time. Every method that accepts a choice returns a
/// [`TurnReport`] describing what happened and what the battle needs next. Choices that are not
/// valid for the current [`BattleState`] are rejected without changing anything.
///
/// The game state is passed into every call rather than owned, so gold, experience, and a party
/// wipe are applied directly to it.
pub struct Battle<'d> {
    data: &'d dyn DataStore,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    monster: Monster,
    active: usize,
    state: BattleState,
    turn: u32,
    log: EventLog,
}

impl<'d> Battle<'d> {
    /// Starts a battle against a monster generated for the current floor.
    pub fn new(
        game: &GameState,
        data: &'d dyn DataStore,
        engine_options: BattleEngineOptions,
    ) -> Result<Self> {
        let mut prng = (engine_options.rng_factory)(engine_options.seed);
        let monster = generate_monster(game.floor, data, prng.as_mut())?;
        Self::start(game, data, prng, monster)
    }

    /// Starts a battle against the given monster.
    pub fn with_monster(
        game: &GameState,
        data: &'d dyn DataStore,
        monster: Monster,
        engine_options: BattleEngineOptions,
    ) -> Result<Self> {
        let prng = (engine_options.rng_factory)(engine_options.seed);
        Self::start(game, data, prng, monster)
    }

    fn start(
        game: &GameState,
        data: &'d dyn DataStore,
        prng: Box<dyn PseudoRandomNumberGenerator>,
        monster: Monster,
    ) -> Result<Self> {
        let active = game
            .active_candidates()
            .first()
            .copied()
            .wrap_expectation("party has no member able to fight")?;
        let mut battle = Self {
            data,
            prng,
            monster,
            active,
            state: BattleState::Ready,
            turn: 0,
            log: EventLog::new(),
        };
        let member = &game.party[active];
        battle.log.push_extend([
            battle_event!("battle", format!("floor:{}", battle.monster.floor)),
            battle_event!(
                "appear",
                MonLog::new(&battle.monster, Side::Monster),
                HealthLog::of(&battle.monster),
            ),
            battle_event!(
                "switch",
                MonLog::new(member, Side::Player),
                HealthLog::of(member),
            ),
        ]);
        info!(
            "battle started on floor {} against {} (seed {})",
            battle.monster.floor,
            battle.monster.id,
            battle.prng.initial_seed()
        );
        Ok(battle)
    }

    /// The current state of the battle.
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Has the battle ended?
    pub fn ended(&self) -> bool {
        matches!(self.state, BattleState::Concluded(_))
    }

    /// The final outcome, once the battle has ended.
    pub fn outcome(&self) -> Option<&BattleOutcome> {
        match &self.state {
            BattleState::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    /// Party index of the member currently fighting.
    pub fn active(&self) -> usize {
        self.active
    }

    /// The number of turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The seed that replays this battle.
    pub fn initial_seed(&self) -> u64 {
        self.prng.initial_seed()
    }

    /// The battle's random number generator.
    pub fn prng_mut(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Does the battle have new logs since the last call to [`Self::new_logs`]?
    pub fn has_new_logs(&self) -> bool {
        self.log.has_new_messages()
    }

    /// Returns all battle logs.
    pub fn all_logs(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    /// Returns new battle logs since the last call to [`Self::new_logs`].
    pub fn new_logs(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    /// The request the player must answer next, if any.
    pub fn request(&self, game: &GameState) -> Option<Request> {
        match &self.state {
            BattleState::Ready => Some(Request::Turn(TurnRequest {
                active: self.active,
                moves: game
                    .party
                    .get(self.active)
                    .map(|member| member.moves.clone())
                    .unwrap_or_default(),
            })),
            BattleState::AwaitingSwitch => Some(Request::Switch(SwitchRequest {
                options: game.active_candidates(),
            })),
            BattleState::AwaitingMoveReplacement(victory) => game
                .party
                .get(victory.member)
                .and_then(|member| member.pending_move.clone())
                .map(|move_id| {
                    Request::LearnMove(LearnMoveRequest {
                        member: victory.member,
                        move_id,
                    })
                }),
            BattleState::ResolvingTurn | BattleState::Concluded(_) => None,
        }
    }

    /// Parses and applies a choice in its text form, such as `move tackle`.
    pub fn make_choice(&mut self, game: &mut GameState, input: &str) -> Result<TurnReport> {
        let choice = Choice::from_str(input)
            .map_err(|error| invalid_input_error(format!("{error:#}")))?;
        self.choose(game, choice)
    }

    /// Applies a choice.
    pub fn choose(&mut self, game: &mut GameState, choice: Choice) -> Result<TurnReport> {
        match choice {
            Choice::Move(choice) => self.take_turn(game, &Id::from(choice.move_id)),
            Choice::Item(choice) => self.use_item(game, choice.slot, choice.target),
            Choice::Switch(choice) => self.switch_member(game, choice.member),
            Choice::LearnMove(choice) => self.learn_move(game, choice.forget_move_slot),
        }
    }

    fn wrong_state_error(&self, action: &str) -> Error {
        invalid_input_error(format!(
            "cannot {action} while the battle is {}",
            self.state
        ))
    }

    /// Resolves a full turn in which the active member uses the given move.
    pub fn take_turn(&mut self, game: &mut GameState, move_id: &Id) -> Result<TurnReport> {
        if self.state != BattleState::Ready {
            return Err(self.wrong_state_error("use a move"));
        }
        let member = active_member(game, self.active)?;
        if !member.knows_move(move_id) {
            return Err(invalid_input_error(format!(
                "{} does not know {move_id}",
                member.name
            )));
        }
        let player_move = lookup_move(self.data, move_id)?;
        let monster_move = self.pick_monster_move()?;

        let mut report = self.begin_turn();
        let order = determine_turn_order(active_member(game, self.active)?, &self.monster);
        debug!("turn {} order: {order:?}", self.turn);
        let mut first_actor_knocked_out = false;
        for (index, side) in order.into_iter().enumerate() {
            let move_data = match side {
                Side::Player => &player_move,
                Side::Monster => &monster_move,
            };
            if self.act(game, side, move_data, &mut report)? {
                first_actor_knocked_out = index == 0;
                break;
            }
        }
        self.finish_turn(game, report, !first_actor_knocked_out)
    }

    /// Resolves a full turn in which the active member uses an item from the inventory.
    ///
    /// The item always takes effect before the monster moves.
    pub fn use_item(
        &mut self,
        game: &mut GameState,
        slot: usize,
        target: usize,
    ) -> Result<TurnReport> {
        if self.state != BattleState::Ready {
            return Err(self.wrong_state_error("use an item"));
        }
        let item_id = game
            .inventory
            .get(slot)
            .cloned()
            .wrap_invalid_input(format!("no item in inventory slot {slot}"))?;
        let item = self
            .data
            .get_item(&item_id)?
            .wrap_not_found_error_with_format(format_args!("item {item_id}"))?;
        let message = economy::use_item(game, self.data, slot, target)?;
        let monster_move = self.pick_monster_move()?;

        let mut report = self.begin_turn();
        let member = &game.party[target];
        self.log.push(battle_event!(
            "useitem",
            MonLog::new(member, Side::Player),
            format!("name:{}", item.name),
            HealthLog::of(member),
        ));
        report.messages.push(message.clone());
        report.actions.push(ActionReport::Item { target, message });

        self.act(game, Side::Monster, &monster_move, &mut report)?;
        self.finish_turn(game, report, true)
    }

    /// Switches a living party member in after the active member fainted.
    pub fn switch_member(&mut self, game: &mut GameState, member: usize) -> Result<TurnReport> {
        if self.state != BattleState::AwaitingSwitch {
            return Err(self.wrong_state_error("switch"));
        }
        let next = game
            .party
            .get(member)
            .wrap_invalid_input(format!("no party member at index {member}"))?;
        if next.is_fainted() {
            return Err(invalid_input_error(format!(
                "{} has fainted and cannot battle",
                next.name
            )));
        }
        self.active = member;
        self.state = BattleState::Ready;
        self.log.push(battle_event!(
            "switch",
            MonLog::new(next, Side::Player),
            HealthLog::of(next),
        ));
        Ok(TurnReport {
            turn: self.turn,
            messages: vec![format!("Go, {}!", next.name)],
            request: self.request(game),
            ..Default::default()
        })
    }

    /// Decides on the move the active member wants to learn after a victory.
    ///
    /// With `Some(slot)`, the move in that slot is replaced. With `None`, the new move is skipped.
    pub fn learn_move(&mut self, game: &mut GameState, replace: Option<usize>) -> Result<TurnReport> {
        let victory = match &self.state {
            BattleState::AwaitingMoveReplacement(victory) => victory.clone(),
            _ => return Err(self.wrong_state_error("learn a move")),
        };
        let member = active_member(game, victory.member)?;
        let learned = learn_pending_move(member, replace)?;
        let new_name = lookup_move(self.data, &learned.move_id)?.name;

        let message = match &learned.forgotten {
            Some(forgotten) => {
                let old_name = lookup_move(self.data, forgotten)?.name;
                self.log.push(battle_event!(
                    "forgetmove",
                    MonLog::new(member, Side::Player),
                    format!("move:{old_name}"),
                ));
                self.log.push(battle_event!(
                    "learnmove",
                    MonLog::new(member, Side::Player),
                    format!("move:{new_name}"),
                ));
                format!("{} forgot {old_name} and learned {new_name}!", member.name)
            }
            None => {
                self.log.push(battle_event!(
                    "skipmove",
                    MonLog::new(member, Side::Player),
                    format!("move:{new_name}"),
                ));
                format!("{} did not learn {new_name}.", member.name)
            }
        };

        let outcome = BattleOutcome::MonsterDefeated(victory);
        self.state = BattleState::Concluded(outcome.clone());
        Ok(TurnReport {
            turn: self.turn,
            messages: vec![message],
            outcome: Some(outcome),
            ..Default::default()
        })
    }

    fn pick_monster_move(&mut self) -> Result<MoveData> {
        let move_id = pick_monster_move(&self.monster, self.prng.as_mut())?;
        lookup_move(self.data, move_id)
    }

    fn begin_turn(&mut self) -> TurnReport {
        self.state = BattleState::ResolvingTurn;
        self.turn += 1;
        self.log
            .push(battle_event!("turn", format!("turn:{}", self.turn)));
        TurnReport {
            turn: self.turn,
            ..Default::default()
        }
    }

    /// Applies one side's move. Returns whether the move knocked out its target.
    fn act(
        &mut self,
        game: &mut GameState,
        side: Side,
        move_data: &MoveData,
        report: &mut TurnReport,
    ) -> Result<bool> {
        let member = active_member(game, self.active)?;
        let (attacker, defender): (&mut Combatant, &mut Combatant) = match side {
            Side::Player => (&mut member.combatant, &mut self.monster.combatant),
            Side::Monster => (&mut self.monster.combatant, &mut member.combatant),
        };
        if attacker.is_fainted() {
            return Ok(false);
        }

        self.log.push(battle_event!(
            "move",
            MonLog::new(attacker, side),
            format!("name:{}", move_data.name),
        ));
        let result = apply_move(attacker, defender, move_data)?;
        match &move_data.effect {
            MoveEffect::Damage { .. } => {
                self.log.push(battle_event!(
                    "damage",
                    MonLog::new(defender, side.opposite()),
                    HealthLog::of(defender),
                ));
                if result.poisoned {
                    self.log.push(battle_event!(
                        "status",
                        MonLog::new(defender, side.opposite()),
                        "status:poison",
                    ));
                }
            }
            MoveEffect::Heal { .. } => {
                self.log.push(battle_event!(
                    "heal",
                    MonLog::new(attacker, side),
                    HealthLog::of(attacker),
                ));
            }
            MoveEffect::Buff { buff } => {
                self.log.push(battle_event!(
                    "boost",
                    MonLog::new(attacker, side),
                    format!("stat:{}", buff.stat),
                    format!("by:{}", buff.amount),
                    format!("turns:{}", buff.turns),
                ));
            }
        }
        debug!("{}", result.message);

        let knocked_out = defender.is_fainted();
        report.messages.push(result.message.clone());
        report.actions.push(ActionReport::Move { side, result });
        Ok(knocked_out)
    }

    fn end_of_turn(&mut self, game: &mut GameState, report: &mut TurnReport) -> Result<()> {
        let member = active_member(game, self.active)?;
        for (combatant, side) in [
            (&mut member.combatant, Side::Player),
            (&mut self.monster.combatant, Side::Monster),
        ] {
            let tick = resolve_end_of_turn(combatant);
            if tick.poison_damage.is_some() {
                self.log.push(battle_event!(
                    "damage",
                    MonLog::new(combatant, side),
                    "from:poison",
                    HealthLog::of(combatant),
                ));
            }
            if tick.poison_cured {
                self.log.push(battle_event!(
                    "curestatus",
                    MonLog::new(combatant, side),
                    "status:poison",
                ));
            }
            for buff in &tick.expired_buffs {
                self.log.push(battle_event!(
                    "unboost",
                    MonLog::new(combatant, side),
                    format!("stat:{}", buff.stat),
                    format!("by:{}", buff.amount),
                ));
            }
            report.messages.extend(tick.messages);
        }
        Ok(())
    }

    /// Runs end-of-turn effects when both actions ran, then settles the turn.
    ///
    /// A knockout by the first actor skips the second action and end-of-turn effects.
    fn finish_turn(
        &mut self,
        game: &mut GameState,
        mut report: TurnReport,
        run_end_of_turn: bool,
    ) -> Result<TurnReport> {
        if run_end_of_turn {
            self.end_of_turn(game, &mut report)?;
        }

        // The monster's defeat takes priority when both sides fall on the same turn.
        if self.monster.is_fainted() {
            self.resolve_victory(game, &mut report)?;
        } else if active_member(game, self.active)?.is_fainted() {
            self.resolve_faint(game, &mut report)?;
        } else {
            self.state = BattleState::Ready;
            report.request = self.request(game);
        }
        Ok(report)
    }

    fn resolve_victory(&mut self, game: &mut GameState, report: &mut TurnReport) -> Result<()> {
        self.log.push(battle_event!(
            "faint",
            MonLog::new(&self.monster, Side::Monster)
        ));
        report
            .messages
            .push(format!("{} was defeated!", self.monster.name));

        let gold = self.monster.gold_reward;
        let xp = self.monster.xp_reward;
        game.gold += gold;
        self.log.push(battle_event!("gold", format!("amount:{gold}")));
        report.messages.push(format!("Found {gold} gold!"));

        let member = active_member(game, self.active)?;
        let species = self
            .data
            .get_species(&member.species_id)?
            .wrap_not_found_error_with_format(format_args!("species {}", member.species_id))?;
        self.log.push(battle_event!(
            "exp",
            MonLog::new(member, Side::Player),
            format!("exp:{xp}"),
        ));
        report
            .messages
            .push(format!("{} gained {xp} XP!", member.name));
        let experience = award_experience(member, &species, self.data, xp)?;
        if experience.levels_gained > 0 {
            self.log.push(battle_event!(
                "levelup",
                MonLog::new(member, Side::Player),
                format!("level:{}", member.level),
            ));
        }
        for learned in &experience.learned {
            self.log.push(battle_event!(
                "learnmove",
                MonLog::new(member, Side::Player),
                format!("move:{}", lookup_move(self.data, &learned.move_id)?.name),
            ));
        }
        if let Some(pending) = &experience.pending {
            self.log.push(battle_event!(
                "pendingmove",
                MonLog::new(member, Side::Player),
                format!("move:{}", lookup_move(self.data, pending)?.name),
            ));
        }
        report.messages.extend(experience.messages.iter().cloned());

        for member in &mut game.party {
            member.clear_combat_state();
        }
        self.log.push(battle_event!("win", "side:player"));
        info!(
            "{} defeated on floor {} after {} turns",
            self.monster.id, self.monster.floor, self.turn
        );

        let pending = experience.pending.clone();
        let victory = Victory {
            monster: self.monster.id.clone(),
            gold,
            xp,
            member: self.active,
            experience,
        };
        match pending {
            Some(move_id) => {
                report.request = Some(Request::LearnMove(LearnMoveRequest {
                    member: victory.member,
                    move_id,
                }));
                self.state = BattleState::AwaitingMoveReplacement(victory);
            }
            None => {
                let outcome = BattleOutcome::MonsterDefeated(victory);
                report.outcome = Some(outcome.clone());
                self.state = BattleState::Concluded(outcome);
            }
        }
        Ok(())
    }

    fn resolve_faint(&mut self, game: &mut GameState, report: &mut TurnReport) -> Result<()> {
        let member = active_member(game, self.active)?;
        self.log.push(battle_event!(
            "faint",
            MonLog::new(member, Side::Player)
        ));
        report.messages.push(format!("{} fainted!", member.name));

        let options = game.active_candidates();
        if options.is_empty() {
            self.log.push(battle_event!("win", "side:monster"));
            report
                .messages
                .push("Your party was wiped out!".to_owned());
            game.wipe_reset();
            let outcome = BattleOutcome::PartyWiped { floor: game.floor };
            report.outcome = Some(outcome.clone());
            self.state = BattleState::Concluded(outcome);
        } else {
            report.outcome = Some(BattleOutcome::PartyMemberFainted {
                member: self.active,
                options: options.clone(),
            });
            report.request = Some(Request::Switch(SwitchRequest { options }));
            self.state = BattleState::AwaitingSwitch;
        }
        Ok(())
    }
}
