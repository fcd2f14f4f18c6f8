use seasalt_engine::cards::{Card, CardId, Collector, Color, Duo, Kind, Multiplier};
use seasalt_engine::score;

fn duo(id: CardId, kind: Duo) -> Card {
    Card::new(id, Kind::Duo(kind), Color::Black)
}

fn collector(id: CardId, kind: Collector) -> Card {
    Card::new(id, Kind::Collector(kind), Color::Black)
}

fn multiplier(id: CardId, kind: Multiplier) -> Card {
    Card::new(id, Kind::Multiplier(kind), Color::Black)
}

fn mermaid(id: CardId) -> Card {
    Card::new(id, Kind::Mermaid, Color::White)
}

fn colored(id: CardId, kind: Kind, color: Color) -> Card {
    Card::new(id, kind, color)
}

fn duos(kinds: &[Duo]) -> Vec<Card> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &k)| duo(i as CardId + 1, k))
        .collect()
}

fn collectors(kinds: &[Collector]) -> Vec<Card> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &k)| collector(i as CardId + 1, k))
        .collect()
}

#[test]
fn empty_round_scores_zero() {
    assert_eq!(score::stop_score(&[]), 0);
}

#[test]
fn duo_pairs_score_one_point_per_pair() {
    use Duo::*;
    let cases: &[(&[Duo], i32)] = &[
        (&[Fish, Crab], 0),
        (&[Crab, Crab], 1),
        (&[Ship, Ship], 1),
        (&[Swimmer, Shark], 1),
        (&[Swimmer, Swimmer], 0),
        (&[Shark, Shark], 0),
        (&[Shark, Ship], 0),
        (&[Fish, Crab, Fish], 1),
        (&[Crab, Crab, Ship], 1),
        (&[Shark, Shark, Swimmer], 1),
        (&[Shark, Swimmer, Swimmer], 1),
        (&[Crab, Fish, Ship], 0),
        (&[Crab, Crab, Crab, Crab], 2),
        (&[Shark, Swimmer, Shark, Swimmer], 2),
        (&[Shark, Crab, Shark, Swimmer], 1),
        (&[Shark, Crab, Crab, Swimmer], 2),
        (&[Crab, Crab, Crab, Crab, Crab, Crab], 3),
    ];

    for (kinds, expected) in cases {
        assert_eq!(
            score::duo_score(&duos(kinds)),
            *expected,
            "duos: {kinds:?}"
        );
    }
}

#[test]
fn collector_counts_map_onto_their_tables() {
    use Collector::*;
    let cases: &[(&[Collector], i32)] = &[
        (&[Octopus], 0),
        (&[Shell], 0),
        (&[Penguin], 1),
        (&[Sailor], 0),
        (&[Octopus, Octopus], 3),
        (&[Shell, Shell], 2),
        (&[Penguin, Penguin], 3),
        (&[Sailor, Sailor], 5),
        (&[Octopus, Octopus, Octopus], 6),
        (&[Shell, Shell, Shell], 4),
        (&[Penguin, Penguin, Penguin], 5),
        (&[Octopus, Octopus, Octopus, Octopus], 9),
        (&[Shell, Shell, Shell, Shell], 6),
        (&[Octopus, Octopus, Octopus, Octopus, Octopus], 12),
        (&[Shell, Shell, Shell, Shell, Shell], 8),
        (&[Octopus, Octopus, Shell], 3),
        (&[Shell, Shell, Octopus], 2),
        (&[Penguin, Penguin, Sailor], 3),
        (&[Sailor, Sailor, Penguin], 6),
    ];

    for (kinds, expected) in cases {
        assert_eq!(
            score::collector_score(&collectors(kinds)),
            *expected,
            "collectors: {kinds:?}"
        );
    }
}

#[test]
fn all_four_collections_maxed_out_score_thirty() {
    use Collector::*;
    let hand = collectors(&[
        Sailor, Sailor, // 5
        Penguin, Penguin, Penguin, // 5
        Octopus, Octopus, Octopus, Octopus, Octopus, // 12
        Shell, Shell, Shell, Shell, Shell, // 8
    ]);
    assert_eq!(score::collector_score(&hand), 30);
}

#[test]
fn shell_progression_extrapolates_past_the_tabulated_cap() {
    use Collector::*;
    let hand = collectors(&[Shell, Shell, Shell, Shell, Shell, Shell]);
    assert_eq!(score::collector_score(&hand), 10);
}

#[test]
fn penguin_and_sailor_tables_are_exact_cutoffs() {
    use Collector::*;
    // Counts past the table score nothing; there are only three penguins
    // and two sailors in a legal deck, so these stay theoretical.
    let hand = collectors(&[Penguin, Penguin, Penguin, Penguin]);
    assert_eq!(score::collector_score(&hand), 0);
    let hand = collectors(&[Sailor, Sailor, Sailor]);
    assert_eq!(score::collector_score(&hand), 0);
}

#[test]
fn multipliers_without_matching_cards_score_zero() {
    for kind in [
        Multiplier::Fish,
        Multiplier::Ship,
        Multiplier::Penguin,
        Multiplier::Sailor,
    ] {
        assert_eq!(score::stop_score(&[multiplier(1, kind)]), 0);
    }
}

#[test]
fn multipliers_score_value_times_matching_count() {
    // One matching card each; penguin and sailor collectors also score on
    // their own tables, which the stop score includes.
    let hand = vec![multiplier(1, Multiplier::Fish), duo(2, Duo::Fish)];
    assert_eq!(score::stop_score(&hand), 1);

    let hand = vec![multiplier(1, Multiplier::Ship), duo(2, Duo::Ship)];
    assert_eq!(score::stop_score(&hand), 1);

    let hand = vec![
        multiplier(1, Multiplier::Penguin),
        collector(2, Collector::Penguin),
    ];
    assert_eq!(score::stop_score(&hand), 3);

    let hand = vec![
        multiplier(1, Multiplier::Sailor),
        collector(2, Collector::Sailor),
    ];
    assert_eq!(score::stop_score(&hand), 3);

    // Two matching cards double the bonus (and the pair scores too).
    let hand = vec![
        multiplier(1, Multiplier::Fish),
        duo(2, Duo::Fish),
        duo(3, Duo::Fish),
    ];
    assert_eq!(score::stop_score(&hand), 3);

    let hand = vec![
        multiplier(1, Multiplier::Penguin),
        collector(2, Collector::Penguin),
        collector(3, Collector::Penguin),
    ];
    assert_eq!(score::stop_score(&hand), 7);

    let hand = vec![
        multiplier(1, Multiplier::Sailor),
        collector(2, Collector::Sailor),
        collector(3, Collector::Sailor),
    ];
    assert_eq!(score::stop_score(&hand), 11);
}

#[test]
fn holding_two_of_a_multiplier_doubles_the_bonus() {
    let hand = vec![
        multiplier(1, Multiplier::Penguin),
        multiplier(2, Multiplier::Penguin),
        collector(3, Collector::Penguin),
    ];
    // 2 x (2 * 1) from the multipliers, 1 from the penguin itself.
    assert_eq!(score::multiplier_score(&hand), 4);
    assert_eq!(score::stop_score(&hand), 5);
}

#[test]
fn mermaids_convert_into_the_largest_color_groups() {
    assert_eq!(score::mermaid_score(&[mermaid(1)]), 0);

    let hand = vec![mermaid(1), duo(2, Duo::Crab)];
    assert_eq!(score::mermaid_score(&hand), 1);

    let hand = vec![mermaid(1), duo(2, Duo::Fish), duo(3, Duo::Crab)];
    assert_eq!(score::mermaid_score(&hand), 2);

    let hand = vec![
        mermaid(1),
        duo(2, Duo::Fish),
        duo(3, Duo::Crab),
        duo(4, Duo::Ship),
    ];
    assert_eq!(score::mermaid_score(&hand), 3);
}

#[test]
fn two_mermaids_take_the_two_largest_groups() {
    let hand = vec![
        mermaid(1),
        mermaid(2),
        colored(3, Kind::Collector(Collector::Octopus), Color::Black),
        colored(4, Kind::Duo(Duo::Crab), Color::Black),
        colored(5, Kind::Duo(Duo::Fish), Color::Black),
        colored(6, Kind::Duo(Duo::Ship), Color::Black),
        colored(7, Kind::Collector(Collector::Sailor), Color::Yellow),
        colored(8, Kind::Multiplier(Multiplier::Penguin), Color::Yellow),
        colored(9, Kind::Collector(Collector::Shell), Color::Yellow),
    ];
    assert_eq!(score::mermaid_score(&hand), 7);
    assert_eq!(score::stop_score(&hand), 7);
}

#[test]
fn mermaid_ranks_beyond_available_groups_contribute_nothing() {
    let hand = vec![
        mermaid(1),
        mermaid(2),
        mermaid(3),
        colored(4, Kind::Collector(Collector::Octopus), Color::Black),
        colored(5, Kind::Duo(Duo::Crab), Color::DarkBlue),
        colored(6, Kind::Duo(Duo::Fish), Color::DarkBlue),
        colored(7, Kind::Duo(Duo::Ship), Color::DarkBlue),
        colored(8, Kind::Collector(Collector::Sailor), Color::Yellow),
        colored(9, Kind::Multiplier(Multiplier::Penguin), Color::Yellow),
    ];
    // Groups: dark blue 3, yellow 2, black 1; all three are consumed.
    assert_eq!(score::mermaid_score(&hand), 6);
}

#[test]
fn color_bonus_is_the_single_largest_group() {
    let hand = vec![
        colored(1, Kind::Duo(Duo::Crab), Color::DarkBlue),
        colored(2, Kind::Duo(Duo::Fish), Color::DarkBlue),
        colored(3, Kind::Duo(Duo::Ship), Color::Yellow),
        mermaid(4),
    ];
    assert_eq!(score::color_bonus(&hand), 2);
    assert_eq!(score::color_bonus(&[mermaid(1)]), 0);
}

#[test]
fn hand_combinations_sum_all_four_passes() {
    let hand = vec![duo(1, Duo::Fish), duo(2, Duo::Fish), multiplier(3, Multiplier::Fish)];
    assert_eq!(score::stop_score(&hand), 3);

    let hand = vec![
        collector(1, Collector::Penguin),
        duo(2, Duo::Fish),
        multiplier(3, Multiplier::Penguin),
    ];
    assert_eq!(score::stop_score(&hand), 3);

    let hand = vec![
        collector(1, Collector::Sailor),
        collector(2, Collector::Sailor),
        duo(3, Duo::Crab),
        duo(4, Duo::Crab),
        multiplier(5, Multiplier::Sailor),
    ];
    assert_eq!(score::stop_score(&hand), 12);

    // Everything is black, so the mermaids see one five-card group.
    let hand = vec![
        collector(1, Collector::Sailor),
        collector(2, Collector::Sailor),
        duo(3, Duo::Crab),
        duo(4, Duo::Crab),
        multiplier(5, Multiplier::Sailor),
        mermaid(6),
        mermaid(7),
    ];
    assert_eq!(score::stop_score(&hand), 17);

    // Recoloring the sailors splits the groups to 3/1/1.
    let hand = vec![
        colored(1, Kind::Collector(Collector::Sailor), Color::LightPink),
        colored(2, Kind::Collector(Collector::Sailor), Color::LightOrange),
        duo(3, Duo::Crab),
        duo(4, Duo::Crab),
        multiplier(5, Multiplier::Sailor),
        mermaid(6),
        mermaid(7),
    ];
    assert_eq!(score::stop_score(&hand), 16);
}
