//! Deck, shuffle and settings tests.

#![allow(clippy::cast_precision_loss)]

use std::collections::{BTreeMap, HashSet};

use memrs::settings::{CARD_COUNT_KEY, PLAYER_KEY, high_score_key};
use memrs::{
    CardCount, Catalog, ConfigError, Deck, Face, MatchState, MemoryStore, RoundStats, ScoreReport,
    Settings, Store, Symbol, score, shuffle,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

#[test]
fn deck_holds_every_symbol_exactly_twice_for_all_sizes() {
    let catalog = Catalog::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for size in CardCount::ALLOWED {
        let count = CardCount::new(size).unwrap();
        let deck = Deck::build(count, &catalog, &mut rng).unwrap();
        assert_eq!(deck.len(), size);
        assert_eq!(deck.pairs(), size / 2);

        let mut occurrences: BTreeMap<Symbol, usize> = BTreeMap::new();
        for (position, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index, position);
            assert_eq!(card.state(), MatchState::Unmatched);
            assert_eq!(card.face(), Face::Down);
            *occurrences.entry(card.symbol).or_default() += 1;
        }
        assert_eq!(occurrences.len(), size / 2);
        assert!(occurrences.values().all(|&n| n == 2));
    }
}

#[test]
fn deck_is_reproducible_from_seed() {
    let catalog = Catalog::default();
    let count = CardCount::new(24).unwrap();
    let a = Deck::build(count, &catalog, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
    let b = Deck::build(count, &catalog, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();
    let c = Deck::build(count, &catalog, &mut ChaCha8Rng::seed_from_u64(12)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn deck_draws_varied_symbols_from_large_catalog() {
    let catalog = Catalog::default();
    let count = CardCount::new(8).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        let deck = Deck::build(count, &catalog, &mut rng).unwrap();
        seen.extend(deck.cards().iter().map(|card| card.symbol));
    }
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn deck_fails_when_catalog_too_small() {
    let catalog = Catalog::numbered(3);
    let count = CardCount::new(8).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(
        Deck::build(count, &catalog, &mut rng).unwrap_err(),
        ConfigError::CatalogTooSmall {
            required: 4,
            available: 3
        }
    );
    assert!(Catalog::default().ensure_supports(CardCount::DEFAULT).is_ok());
}

#[test]
fn catalog_drops_duplicate_symbols() {
    let catalog = Catalog::from_symbols([1, 2, 2, 3, 1].map(Symbol::new));
    assert_eq!(catalog.symbols(), &[1, 2, 3].map(Symbol::new));
    assert!(Catalog::numbered(0).is_empty());
}

#[test]
fn shuffle_positions_are_uniform() {
    const TRIALS: usize = 48_000;
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut occupancy = [[0_usize; 4]; 4];
    let mut orderings = HashSet::new();

    for _ in 0..TRIALS {
        let mut items = [0_usize, 1, 2, 3];
        shuffle(&mut items, &mut rng);
        for (position, &item) in items.iter().enumerate() {
            occupancy[position][item] += 1;
        }
        orderings.insert(items);
    }

    assert_eq!(orderings.len(), 24);

    let expected = TRIALS as f64 / 4.0;
    let chi_square: f64 = occupancy
        .iter()
        .flatten()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 9 degrees of freedom; p = 0.001 sits near 27.9.
    assert!(chi_square < 40.0, "chi-square {chi_square} too large");
}

#[test]
fn shuffle_handles_short_slices() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut empty: [u8; 0] = [];
    shuffle(&mut empty, &mut rng);
    let mut single = [9];
    shuffle(&mut single, &mut rng);
    assert_eq!(single, [9]);
}

#[test]
fn shuffle_follows_slice_random_for_the_same_seed() {
    let mut ours: Vec<u16> = (0..48).collect();
    let mut theirs = ours.clone();
    shuffle(&mut ours, &mut ChaCha8Rng::seed_from_u64(7));
    theirs.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(ours, theirs);
}

#[test]
fn card_count_validation() {
    assert_eq!(CardCount::new(16).unwrap().get(), 16);
    assert_eq!(CardCount::new(40).unwrap().pairs(), 20);
    assert_eq!(
        CardCount::new(10).unwrap_err(),
        ConfigError::InvalidCardCount(10)
    );
    assert!(CardCount::new(0).is_err());
    assert!(CardCount::try_from(56).is_err());
    assert_eq!(CardCount::default().get(), 48);

    assert_eq!(CardCount::parse_or_default(None).get(), 48);
    assert_eq!(CardCount::parse_or_default(Some("16")).get(), 16);
    assert_eq!(CardCount::parse_or_default(Some("12")).get(), 48);
    assert_eq!(CardCount::parse_or_default(Some("lots")).get(), 48);
}

#[test]
fn settings_defaults_on_empty_store() {
    let settings = Settings::new(MemoryStore::new());
    assert_eq!(settings.player_name(), "");
    assert_eq!(settings.card_count().get(), 48);
    assert_eq!(settings.best_score(""), 0);
    assert_eq!(settings.best_score("sam"), 0);
}

#[test]
fn settings_round_trip_through_store_keys() {
    let mut settings = Settings::new(MemoryStore::new());
    settings.set_player_name("  sam ").unwrap();
    settings.set_card_count(CardCount::new(24).unwrap()).unwrap();
    settings.set_best_score("sam", 75).unwrap();
    settings.set_best_score("", 40).unwrap();

    assert_eq!(settings.player_name(), "sam");
    assert_eq!(settings.card_count().get(), 24);
    assert_eq!(settings.best_score("sam"), 75);
    assert_eq!(settings.best_score(""), 40);

    let store = settings.into_store();
    assert_eq!(store.get(PLAYER_KEY).as_deref(), Some("sam"));
    assert_eq!(store.get(CARD_COUNT_KEY).as_deref(), Some("24"));
    assert_eq!(store.get("mg_highScore_sam").as_deref(), Some("75"));
    assert_eq!(store.get("mg_highScore_guest").as_deref(), Some("40"));
}

#[test]
fn settings_ignore_invalid_stored_values() {
    let mut store = MemoryStore::new();
    store.set(CARD_COUNT_KEY, "20").unwrap();
    store.set(&high_score_key("kim"), "not a number").unwrap();
    let settings = Settings::new(store);

    assert_eq!(settings.card_count().get(), 48);
    assert_eq!(settings.best_score("kim"), 0);
}

#[test]
fn high_score_key_falls_back_to_guest() {
    assert_eq!(high_score_key(""), "mg_highScore_guest");
    assert_eq!(high_score_key("ana"), "mg_highScore_ana");
}

#[test]
fn accuracy_rounds_to_nearest_percent() {
    assert_eq!(score::accuracy(3, 4), 75);
    assert_eq!(score::accuracy(0, 0), 0);
    assert_eq!(score::accuracy(4, 4), 100);
    assert_eq!(score::accuracy(2, 3), 67);
    assert_eq!(score::accuracy(1, 8), 13);
    assert_eq!(score::accuracy(0, 5), 0);
}

#[test]
fn best_score_never_decreases() {
    let stats = |correct, attempts| RoundStats {
        attempts,
        correct,
        matched_pairs: correct,
    };

    let worse = ScoreReport::new(stats(3, 5), 80);
    assert_eq!(worse.accuracy, 60);
    assert_eq!(worse.best, 80);
    assert!(!worse.is_new_best());

    let better = ScoreReport::new(stats(19, 20), 80);
    assert_eq!(better.accuracy, 95);
    assert_eq!(better.best, 95);
    assert!(better.is_new_best());
}
