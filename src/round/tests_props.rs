//! Property-based tests for game and countdown invariants

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use crate::config::GameConfig;
use crate::core::{Letter, RoundStatus, Word};
use crate::engine::GameEngine;
use crate::round::{GuessError, Session};
use crate::timer::{CountdownTimer, TickQueue};

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn guesses_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..40)
}

fn letter(c: char) -> Letter {
    Letter::new(c).unwrap()
}

proptest! {
    /// Property: a word is won exactly when each of its distinct letters was guessed
    #[test]
    fn prop_won_iff_all_letters_guessed(word in word_strategy(), guesses in guesses_strategy()) {
        let mut engine = GameEngine::new(Word::new(word.as_str()).unwrap(), 8);
        for &c in &guesses {
            engine.submit_guess(letter(c));
        }

        let expected = word.chars().all(|c| guesses.contains(&c));
        prop_assert_eq!(engine.is_won(), expected);
    }

    /// Property: submitting the same letter twice in a row is the same as once
    #[test]
    fn prop_submit_is_idempotent(word in word_strategy(), guesses in guesses_strategy(), repeat in prop::char::range('a', 'z')) {
        let mut once = GameEngine::new(Word::new(word.as_str()).unwrap(), 8);
        for &c in &guesses {
            once.submit_guess(letter(c));
        }
        let mut twice = once.clone();

        once.submit_guess(letter(repeat));
        twice.submit_guess(letter(repeat));
        twice.submit_guess(letter(repeat));

        prop_assert_eq!(once.guesses(), twice.guesses());
        prop_assert_eq!(once.wrong_guess_count(), twice.wrong_guess_count());
    }

    /// Property: no duplicates ever enter the guess set, and wrong guesses never decrease
    #[test]
    fn prop_guess_set_unique_and_penalty_monotonic(word in word_strategy(), guesses in guesses_strategy()) {
        let mut engine = GameEngine::new(Word::new(word.as_str()).unwrap(), 8);
        let mut previous_wrong = 0;

        for &c in &guesses {
            engine.submit_guess(letter(c.to_ascii_uppercase()));
            let wrong = engine.wrong_guess_count();
            prop_assert!(wrong >= previous_wrong);
            previous_wrong = wrong;
        }

        let mut seen = engine.guesses().as_slice().to_vec();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), engine.guesses().len());
    }

    /// Property: a round is never both won and lost, and terminal rounds refuse guesses
    #[test]
    fn prop_terminal_states_are_exclusive(word in word_strategy(), guesses in guesses_strategy()) {
        let provider_word = word.clone();
        let mut session = Session::new(
            move || Some(provider_word.clone()),
            GameConfig::default(),
        ).unwrap();
        session.start(Instant::now());

        for &c in &guesses {
            let before = session.status();
            let result = session.guess(c);
            if before.is_terminal() {
                prop_assert_eq!(result, Err(GuessError::RoundOver(before)));
            }

            let engine = session.round().engine();
            prop_assert!(!(engine.is_won() && engine.is_lost()));
            match session.status() {
                RoundStatus::Won => prop_assert!(engine.is_won()),
                RoundStatus::Lost => prop_assert!(engine.is_lost() && !engine.is_won()),
                RoundStatus::InProgress => prop_assert!(!engine.is_won() && !engine.is_lost()),
                RoundStatus::TimedOut => prop_assert!(false, "no ticks were delivered"),
            }
        }
    }

    /// Property: a countdown expires once, after exactly its duration, and never goes below zero
    #[test]
    fn prop_countdown_expires_once(duration in 1u32..120, extra in 0u64..300) {
        let start = Instant::now();
        let mut timer = CountdownTimer::new(TickQueue::starting_at(start), duration);
        let fired = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&fired);
        timer.on_expire(move |_| seen.set(seen.get() + 1));
        timer.start(duration);

        let just_before = start + Duration::from_secs(u64::from(duration) - 1);
        timer.advance(just_before);
        prop_assert_eq!(timer.remaining_secs(), 1);
        prop_assert_eq!(fired.get(), 0);

        let after = start + Duration::from_secs(u64::from(duration) + extra);
        timer.advance(after);
        prop_assert!(timer.has_expired());
        prop_assert_eq!(timer.remaining_secs(), 0);
        prop_assert_eq!(fired.get(), 1);
    }

    /// Property: replacing a round mid-countdown gives the new round a full, untouched clock
    #[test]
    fn prop_new_round_isolated_from_old_timer(elapsed in 0u64..59, later in 0u64..59) {
        let start = Instant::now();
        let ticks = Rc::new(std::cell::RefCell::new(TickQueue::starting_at(start)));
        let mut words = ["dog", "cat"].into_iter();
        let mut session = Session::with_queue(
            move || words.next().map(String::from),
            GameConfig::default(),
            ticks,
        ).unwrap();
        session.start(start);
        let reset_at = start + Duration::from_secs(elapsed);
        session.advance(reset_at);

        session.new_round(reset_at).unwrap();
        prop_assert_eq!(session.round().timer().remaining_secs(), 60);

        session.advance(reset_at + Duration::from_secs(later));
        prop_assert_eq!(u64::from(session.round().timer().remaining_secs()), 60 - later);
        prop_assert_eq!(session.status(), RoundStatus::InProgress);
    }
}
