use super::*;

fn record(id: CompetitorId, wins: u32) -> StandingRecord {
    StandingRecord {
        id,
        name: format!("P{}", id),
        wins,
        matches_played: wins,
    }
}

fn pairs(pairings: &[Pairing]) -> Vec<(CompetitorId, CompetitorId)> {
    pairings.iter().map(Pairing::ids).collect()
}

#[test]
fn test_tied_groups_pair_within_group() {
    let standings = vec![record(1, 1), record(3, 1), record(2, 0), record(4, 0)];
    let pairings = compute_pairings(&standings).unwrap();

    assert_eq!(pairs(&pairings), vec![(1, 3), (2, 4)]);
    assert_eq!(pairings[0].name1, "P1");
    assert_eq!(pairings[0].name2, "P3");
}

#[test]
fn test_everyone_tied_pairs_down_the_list() {
    let standings: Vec<_> = (1..=6).map(|id| record(id, 0)).collect();
    let pairings = compute_pairings(&standings).unwrap();
    assert_eq!(pairs(&pairings), vec![(1, 2), (3, 4), (5, 6)]);
}

#[test]
fn test_lone_leader_bridges_to_next_group() {
    // 1 alone on two wins, 3 alone on one win
    let standings = vec![record(1, 2), record(3, 1), record(2, 0), record(4, 0)];

    let pairings = compute_pairings(&standings).unwrap();
    assert_eq!(pairs(&pairings), vec![(1, 3), (2, 4)]);
}

#[test]
fn test_odd_group_bridges_to_nearest() {
    let standings = vec![
        record(1, 1),
        record(2, 1),
        record(3, 1),
        record(4, 0),
        record(5, 0),
        record(6, 0),
    ];
    let pairings = compute_pairings(&standings).unwrap();
    assert_eq!(pairs(&pairings), vec![(1, 2), (3, 4), (5, 6)]);
}

#[test]
fn test_equal_wins_only_omits_lone_competitors() {
    let standings = vec![record(1, 2), record(3, 1), record(2, 0), record(4, 0)];

    let pairings = pair_round(&standings, PairingMode::EqualWinsOnly).unwrap();
    assert_eq!(pairs(&pairings), vec![(2, 4)]);

    let left: Vec<_> = unpaired(&standings, &pairings).iter().map(|r| r.id).collect();
    assert_eq!(left, vec![1, 3]);
}

#[test]
fn test_equal_wins_only_matches_bridged_when_groups_are_even() {
    let standings = vec![record(1, 1), record(3, 1), record(2, 0), record(4, 0)];
    assert_eq!(
        pair_round(&standings, PairingMode::EqualWinsOnly).unwrap(),
        pair_round(&standings, PairingMode::Bridged).unwrap()
    );
}

#[test]
fn test_unranked_input_is_ranked_first() {
    let standings = vec![record(4, 0), record(2, 0), record(3, 1), record(1, 1)];
    let pairings = compute_pairings(&standings).unwrap();
    assert_eq!(pairs(&pairings), vec![(1, 3), (2, 4)]);
}

#[test]
fn test_odd_field_leaves_last_unpaired() {
    let standings = vec![record(1, 1), record(2, 0), record(3, 0)];
    let pairings = compute_pairings(&standings).unwrap();

    assert_eq!(pairs(&pairings), vec![(1, 2)]);
    let left: Vec<_> = unpaired(&standings, &pairings).iter().map(|r| r.id).collect();
    assert_eq!(left, vec![3]);
}

#[test]
fn test_single_competitor_is_insufficient() {
    let err = compute_pairings(&[record(1, 0)]).unwrap_err();
    assert_eq!(err, CoreError::InsufficientData { count: 1 });
}

#[test]
fn test_empty_is_insufficient() {
    let err = pair_round(&[], PairingMode::EqualWinsOnly).unwrap_err();
    assert_eq!(err, CoreError::InsufficientData { count: 0 });
}

#[test]
fn test_duplicate_id_rejected() {
    let err = compute_pairings(&[record(1, 0), record(1, 0)]).unwrap_err();
    assert_eq!(
        err,
        CoreError::Integrity(IntegrityError::DuplicateCompetitor { id: 1 })
    );
}

#[test]
fn test_mode_parse_and_display() {
    assert_eq!("bridged".parse::<PairingMode>().unwrap(), PairingMode::Bridged);
    assert_eq!(
        "Equal-Wins-Only".parse::<PairingMode>().unwrap(),
        PairingMode::EqualWinsOnly
    );
    assert!("swiss".parse::<PairingMode>().is_err());
    assert_eq!(PairingMode::EqualWinsOnly.to_string(), "equal-wins-only");
    assert_eq!(PairingMode::default(), PairingMode::Bridged);
}
