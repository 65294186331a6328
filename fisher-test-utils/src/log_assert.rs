use fisher::battle::Battle;

/// Asserts that new logs in the battle are equal to the given logs.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle<'_>, want: &[&str]) {
    let got = battle.new_logs().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want.to_vec())
}
