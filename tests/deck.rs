//! Deck and prediction tests.

use std::collections::HashSet;

use hilo::{Card, DECK_SIZE, Deck, MAX_RANK, MIN_RANK, Prediction, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_by_key(|c| (c.suit, c.rank));
    cards
}

#[test]
fn build_contains_every_card_once() {
    let deck = Deck::build();
    let cards = deck.order();
    assert_eq!(cards.len(), DECK_SIZE);

    let seen: HashSet<Card> = cards.iter().copied().collect();
    let expected: HashSet<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| (MIN_RANK..=MAX_RANK).map(move |rank| card(suit, rank)))
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn build_is_suit_major_rank_ascending() {
    let deck = Deck::build();
    let cards = deck.order();

    assert_eq!(cards[0], card(Suit::Spades, 1));
    assert_eq!(cards[12], card(Suit::Spades, 13));
    assert_eq!(cards[13], card(Suit::Hearts, 1));
    assert_eq!(cards[26], card(Suit::Diamonds, 1));
    assert_eq!(cards[51], card(Suit::Clubs, 13));
    assert_eq!(Deck::build(), deck);
}

#[test]
fn shuffled_is_a_permutation() {
    let deck = Deck::build();

    for seed in 0..200 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shuffled = deck.shuffled(&mut rng);

        assert_eq!(shuffled.remaining(), deck.remaining());
        assert_eq!(sorted(shuffled.order()), sorted(deck.order()));
    }

    assert_eq!(deck, Deck::build());
}

#[test]
fn shuffled_first_card_varies() {
    let deck = Deck::build();
    let firsts: HashSet<Card> = (0..100)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            deck.shuffled(&mut rng).order()[0]
        })
        .collect();

    assert!(firsts.len() > 1);
}

#[test]
fn same_rng_state_gives_same_order() {
    let deck = Deck::build();
    let a = deck.shuffled(&mut ChaCha8Rng::seed_from_u64(5));
    let b = deck.shuffled(&mut ChaCha8Rng::seed_from_u64(5));

    assert_eq!(a, b);
}

#[test]
fn draws_follow_given_order() {
    let mut deck = Deck::from_draws(&[card(Suit::Hearts, 4), card(Suit::Clubs, 12)]);

    assert_eq!(deck.remaining(), 2);
    assert_eq!(deck.draw(), Some(card(Suit::Hearts, 4)));
    assert_eq!(deck.order(), &[card(Suit::Clubs, 12)]);
    assert_eq!(deck.draw(), Some(card(Suit::Clubs, 12)));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), None);
}

#[test]
fn shuffling_a_partly_drawn_deck_keeps_only_remaining_cards() {
    let mut deck = Deck::build();
    let drawn = deck.draw().unwrap();

    let shuffled = deck.shuffled(&mut ChaCha8Rng::seed_from_u64(1));
    assert_eq!(shuffled.remaining(), DECK_SIZE - 1);
    assert!(!shuffled.order().contains(&drawn));
}

#[test]
fn card_display_uses_symbol_and_rank_label() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "♠A");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "♥10");
    assert_eq!(card(Suit::Diamonds, 11).to_string(), "♦J");
    assert_eq!(card(Suit::Clubs, 12).to_string(), "♣Q");
    assert_eq!(card(Suit::Spades, 13).to_string(), "♠K");
    assert_eq!(card(Suit::Hearts, 2).rank_label().to_string(), "2");
}

#[test]
fn resolution_table() {
    let seven = card(Suit::Spades, 7);
    let nine = card(Suit::Hearts, 9);
    let five = card(Suit::Diamonds, 5);
    let other_five = card(Suit::Clubs, 5);

    assert!(Prediction::Higher.is_correct(seven, nine));
    assert!(!Prediction::Lower.is_correct(seven, nine));
    assert!(!Prediction::Equal.is_correct(seven, nine));
    assert!(Prediction::Lower.is_correct(nine, seven));
    assert!(Prediction::Equal.is_correct(five, other_five));
    assert!(!Prediction::Higher.is_correct(five, other_five));
    assert!(!Prediction::Lower.is_correct(five, other_five));
}

#[test]
fn resolve_treats_garbage_as_wrong() {
    let seven = card(Suit::Spades, 7);
    let nine = card(Suit::Hearts, 9);
    let five = card(Suit::Diamonds, 5);

    assert!(Prediction::resolve("h", seven, nine));
    assert!(!Prediction::resolve("l", seven, nine));
    assert!(Prediction::resolve("s", five, five));
    for (current, next) in [(seven, nine), (nine, seven), (five, five)] {
        assert!(!Prediction::resolve("xyz", current, next));
        assert!(!Prediction::resolve("", current, next));
    }
}

#[test]
fn prediction_parsing() {
    assert_eq!("h".parse::<Prediction>(), Ok(Prediction::Higher));
    assert_eq!("higher".parse::<Prediction>(), Ok(Prediction::Higher));
    assert_eq!("l".parse::<Prediction>(), Ok(Prediction::Lower));
    assert_eq!("lower".parse::<Prediction>(), Ok(Prediction::Lower));
    assert_eq!("s".parse::<Prediction>(), Ok(Prediction::Equal));
    assert_eq!("same".parse::<Prediction>(), Ok(Prediction::Equal));
    assert_eq!(" equal\n".parse::<Prediction>(), Ok(Prediction::Equal));
    assert!("H".parse::<Prediction>().is_err());
    assert!("hl".parse::<Prediction>().is_err());
}

#[test]
fn actual_ignores_suit() {
    assert_eq!(
        Prediction::actual(card(Suit::Spades, 13), card(Suit::Hearts, 1)),
        Prediction::Lower
    );
    assert_eq!(
        Prediction::actual(card(Suit::Spades, 3), card(Suit::Clubs, 3)),
        Prediction::Equal
    );
    assert_eq!(Prediction::Equal.key(), "s");
}
