//! Deal integration tests.

use std::collections::HashSet;

use eopdeal::{
    Card, Category, DECK_SIZE, Deal, DealOptions, DealParams, DistributionPolicy, Rank,
    ValidationError, build_deck, distribute_balanced, distribute_simple, hash_seed, host_link,
    player_link, shuffled,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn ids(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::id).collect()
}

fn category_sizes(deck: &[Card]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| (category, deck.iter().filter(|c| c.category == category).count()))
        .collect()
}

#[test]
fn standard_deck_matches_printed_cards() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(
        category_sizes(&deck),
        [
            (Category::Spoofing, 13),
            (Category::Tampering, 12),
            (Category::Repudiation, 13),
            (Category::InformationDisclosure, 13),
            (Category::DenialOfService, 13),
            (Category::ElevationOfPrivilege, 10),
            (Category::Privacy, 0),
        ]
    );

    let unique: HashSet<String> = ids(&deck).into_iter().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert_eq!(deck[0].id(), "D2");
    assert_eq!(deck[13].id(), "E5");
    assert_eq!(deck[DECK_SIZE - 1].id(), "TA");
    assert!(!unique.contains("T2"));
    assert!(!unique.contains("E4"));
}

#[test]
fn shuffle_of_deck_matches_reference_prefix() {
    let deck = build_deck();
    let order = shuffled(&deck, "TestSeed123");
    assert_eq!(
        ids(&order[..10]),
        ["T7", "T10", "S8", "S10", "D4", "I3", "S5", "D9", "TB", "S9"]
    );
}

#[test]
fn shuffle_is_repeatable_and_seed_sensitive() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(shuffled(&items, "same-seed"), shuffled(&items, "same-seed"));
    assert_ne!(shuffled(&items, "seed-A"), shuffled(&items, "seed-B"));
}

#[test]
fn simple_split_for_five_players() {
    let deck = build_deck();
    let hands = distribute_simple(&deck, "TestSeed123", 5);
    let sizes: Vec<usize> = hands.iter().map(Vec::len).collect();
    assert_eq!(sizes, [15, 15, 15, 15, 14]);
    assert_eq!(
        ids(&hands[0][..4]),
        ["T7", "T10", "S8", "S10"],
        "player 1's slice starts at the front of the shuffle"
    );
}

#[test]
fn simple_split_for_thirty_two_players() {
    let deck = build_deck();
    let hands = distribute_simple(&deck, "anything", 32);
    let with_three = hands.iter().filter(|h| h.len() == 3).count();
    let with_two = hands.iter().filter(|h| h.len() == 2).count();
    assert_eq!((with_three, with_two), (10, 22));
    assert!(hands[..10].iter().all(|h| h.len() == 3));
}

#[test]
fn single_player_receives_everything() {
    let deck = build_deck();
    for policy in [DistributionPolicy::Simple, DistributionPolicy::Balanced] {
        let hands = policy.distribute(&deck, "solo", 1);
        assert_eq!(hands.len(), 1);
        assert_eq!(hands[0].len(), DECK_SIZE);
    }
}

#[test]
fn zero_players_is_handled() {
    let deck = build_deck();
    assert!(distribute_simple(&deck, "x", 0).is_empty());
    assert!(distribute_balanced(&deck, "x", 0).is_empty());
}

#[test]
fn balanced_split_spreads_categories() {
    let deck = build_deck();
    let hands = distribute_balanced(&deck, "test", 6);

    for category in Category::ALL {
        let counts: Vec<usize> = hands
            .iter()
            .map(|h| h.iter().filter(|c| c.category == category).count())
            .collect();
        let max = counts.iter().max().copied().unwrap_or(0);
        let min = counts.iter().min().copied().unwrap_or(0);
        assert!(max - min <= 1, "{category:?} spread {counts:?}");
    }

    for (index, hand) in hands.iter().enumerate() {
        let categories: HashSet<Category> = hand.iter().map(|c| c.category).collect();
        assert!(categories.len() >= 4, "player {} has {categories:?}", index + 1);
    }
}

#[test]
fn balanced_split_is_repeatable() {
    let deck = build_deck();
    for (seed, players) in [("test123", 4), ("workshop2026", 6), ("edge", 2)] {
        assert_eq!(
            distribute_balanced(&deck, seed, players),
            distribute_balanced(&deck, seed, players)
        );
    }
    assert_ne!(
        distribute_balanced(&deck, "seed1", 4),
        distribute_balanced(&deck, "seed2", 4)
    );
}

#[test]
fn balanced_split_with_two_players() {
    let deck = build_deck();
    let hands = distribute_balanced(&deck, "test", 2);
    assert_eq!(hands[0].len() + hands[1].len(), DECK_SIZE);
    // Five of the six non-empty categories have an odd size, and each
    // category hands its leftover card to player 1.
    assert_eq!((hands[0].len(), hands[1].len()), (39, 35));
}

#[test]
fn deal_hands_are_sorted_and_complete() {
    let options = DealOptions::default();
    let deal = Deal::new(&options, "Workshop2026", 5).unwrap();
    assert_eq!(deal.player_count(), 5);
    assert_eq!(deal.seed(), "Workshop2026");

    let mut seen = HashSet::new();
    for hand in deal.hands() {
        let cards = hand.cards();
        for pair in cards.windows(2) {
            let key = |c: &Card| (c.category.code(), c.rank);
            assert!(key(&pair[0]) <= key(&pair[1]));
        }
        for card in cards {
            assert!(seen.insert(card.id()), "{} dealt twice", card.id());
        }
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn every_participant_computes_the_same_hand() {
    let options = DealOptions::default();
    let host = Deal::new(&options, "Team Red", 7).unwrap();
    for player in 1..=7 {
        let own = Deal::new(&options, "Team Red", 7).unwrap();
        assert_eq!(own.hand(player).unwrap(), host.hand(player).unwrap());
        assert_eq!(own.hand(player).unwrap().player(), player);
    }
    assert_eq!(
        host.hand(8).unwrap_err(),
        ValidationError::PlayerIndexOutOfRange { player: 8, players: 7 }
    );
    assert!(host.hand(0).is_err());
}

#[test]
fn unsorted_simple_deal_keeps_shuffle_order() {
    let options = DealOptions::default()
        .with_policy(DistributionPolicy::Simple)
        .with_sort_hands(false);
    let deal = Deal::new(&options, "TestSeed123", 5).unwrap();
    let deck = build_deck();
    assert_eq!(deal.hand(1).unwrap().cards(), &distribute_simple(&deck, "TestSeed123", 5)[0][..]);
}

#[test]
fn player_link_drives_the_deal() {
    let link = player_link("https://example.org/eop", "Blue Team", 2, 4);
    let query = link.split_once('?').map(|(_, q)| q).unwrap();
    let params = DealParams::parse(query).unwrap();

    let options = DealOptions::default();
    let deal = Deal::new(&options, &params.seed, params.players).unwrap();
    let hand = deal.hand(params.player.unwrap()).unwrap();
    assert_eq!(hand.player(), 2);
    assert!(!hand.is_empty());

    assert_eq!(
        host_link("https://example.org/eop", "Blue Team", 4),
        "https://example.org/eop/host.html?seed=Blue%20Team&players=4"
    );
}

#[test]
fn random_seed_corpus_hashes_consistently() {
    let mut rng = ChaCha8Rng::seed_from_u64(2026);
    let deck = build_deck();
    let mut distinct_orders = HashSet::new();

    for _ in 0..200 {
        let len = rng.random_range(1..24);
        let seed: String = (0..len)
            .map(|_| char::from(rng.random_range(b'!'..=b'~')))
            .collect();
        assert_eq!(hash_seed(&seed), hash_seed(&seed.clone()));
        assert!(hash_seed(&seed) <= 1 << 31);
        distinct_orders.insert(ids(&shuffled(&deck, &seed)));
    }

    assert!(distinct_orders.len() > 150);
}

#[test]
fn card_lookup_round_trips_ids() {
    for card in build_deck() {
        let id = card.id();
        let (code, symbol) = id.split_at(1);
        let category = Category::from_code(code.chars().next().unwrap()).unwrap();
        let rank = Rank::from_symbol(symbol).unwrap();
        assert_eq!(Card::new(category, rank), card);
    }
}
