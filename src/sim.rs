// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the Monte Carlo simulations of the course: rolling
//! dice and estimating the odds that people share a birthday. Every function
//! draws from a generator passed explicitly by the caller, so a seeded
//! generator makes any simulation reproducible.

use rand::Rng;
use serde::Serialize;

/// The number of days in a (leap) year
pub const DAYS: usize = 366;

/// The actual and estimated probabilities of some event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub actual: f64,
    pub estimated: f64,
}

/// Rolls a six faced die
pub fn roll_die<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=6)
}

/// Rolls a die `n` times and concatenates the outcomes
pub fn roll_sequence<R: Rng>(n: usize, rng: &mut R) -> String {
    (0..n).map(|_| char::from(b'0' + roll_die(rng))).collect()
}

/// Estimates the probability that rolling a die `goal.len()` times yields
/// exactly the faces of `goal` (e.g. "11111"), by running `trials` attempts.
///
/// # Example
/// ```
/// # use exhaustive::sim::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let odds = run_sim("1", 10_000, &mut rng);
/// assert!((odds.actual - 1.0 / 6.0).abs() < 1e-12);
/// assert!((odds.estimated - odds.actual).abs() < 0.02);
/// ```
pub fn run_sim<R: Rng>(goal: &str, trials: usize, rng: &mut R) -> Estimate {
    let hits = (0..trials)
        .filter(|_| roll_sequence(goal.len(), rng) == goal)
        .count();

    Estimate {
        actual: 1.0 / 6_f64.powi(goal.len() as i32),
        estimated: ratio(hits, trials),
    }
}

/// Every day of the year is equally likely to be someone's birthday
pub fn uniform_possible_dates() -> Vec<usize> {
    (0..DAYS - 1).collect()
}

/// Birthdays are not uniformly distributed over the year: February 29th is
/// four times less likely than the other days while the days of the summer
/// and early autumn (days 180 to 269) are twice as likely.
pub fn non_uniform_possible_dates() -> Vec<usize> {
    let mut dates = vec![];
    for _ in 0..4 {
        dates.extend(0..57);
    }
    dates.push(58);
    for _ in 0..4 {
        dates.extend(59..DAYS);
    }
    for _ in 0..4 {
        dates.extend(180..270);
    }
    dates
}

/// Draws the birthday of `people` persons out of `dates` and tells whether at
/// least `same` of them share the same birthday.
pub fn same_date<R: Rng>(people: usize, same: usize, dates: &[usize], rng: &mut R) -> bool {
    if dates.is_empty() {
        return same == 0;
    }
    let mut birthdays = [0_usize; DAYS];
    for _ in 0..people {
        let date = dates[rng.random_range(0..dates.len())];
        birthdays[date % DAYS] += 1;
    }
    birthdays.iter().copied().max().unwrap_or(0) >= same
}

/// Estimates the probability that at least `same` persons out of `people`
/// share a birthday, by running `trials` simulations.
pub fn birthday_prob<R: Rng>(people: usize, same: usize, trials: usize, dates: &[usize], rng: &mut R) -> f64 {
    let hits = (0..trials)
        .filter(|_| same_date(people, same, dates, rng))
        .count();
    ratio(hits, trials)
}

/// The probability that at least two persons out of `people` share a
/// birthday, assuming uniformly distributed birthdays over 366 days. That is
/// `1 - 366! / (366^people * (366 - people)!)`, evaluated as a running
/// product so that no huge intermediate number is ever formed.
///
/// # Example
/// ```
/// # use exhaustive::sim::shared_birthday_prob;
/// assert_eq!(0.0, shared_birthday_prob(1));
/// assert!((shared_birthday_prob(23) - 0.5063).abs() < 1e-3);
/// assert_eq!(1.0, shared_birthday_prob(367));
/// ```
pub fn shared_birthday_prob(people: usize) -> f64 {
    let days = DAYS as f64;
    let all_distinct: f64 = (0..people.min(DAYS + 1))
        .map(|i| (days - i as f64) / days)
        .product();
    1.0 - all_distinct
}

fn ratio(hits: usize, trials: usize) -> f64 {
    if trials == 0 {
        0.0
    } else {
        hits as f64 / trials as f64
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn a_die_has_six_faces() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = [false; 7];
        for _ in 0..1_000 {
            seen[roll_die(&mut rng) as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|x| *x));
    }
    #[test]
    fn roll_sequence_has_the_requested_length() {
        let mut rng = StdRng::seed_from_u64(0);
        let rolls = roll_sequence(5, &mut rng);
        assert_eq!(5, rolls.len());
        assert!(rolls.chars().all(|c| ('1'..='6').contains(&c)));
    }
    #[test]
    fn simulations_are_reproducible() {
        let a = run_sim("11", 1_000, &mut StdRng::seed_from_u64(3));
        let b = run_sim("11", 1_000, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
    #[test]
    fn possible_dates() {
        assert_eq!(365, uniform_possible_dates().len());
        let skewed = non_uniform_possible_dates();
        assert_eq!(4 * 57 + 1 + 4 * 307 + 4 * 90, skewed.len());
        assert!(skewed.iter().all(|d| *d < DAYS));
    }
    #[test]
    fn nobody_shares_a_birthday_alone() {
        let mut rng = StdRng::seed_from_u64(0);
        let dates = uniform_possible_dates();
        assert_eq!(0.0, birthday_prob(1, 2, 100, &dates, &mut rng));
        assert_eq!(1.0, birthday_prob(400, 2, 10, &dates, &mut rng));
    }
    #[test]
    fn the_estimate_converges_to_the_exact_probability() {
        let mut rng = StdRng::seed_from_u64(0);
        let dates = uniform_possible_dates();
        let estimated = birthday_prob(23, 2, 20_000, &dates, &mut rng);
        assert!((estimated - shared_birthday_prob(23)).abs() < 0.03);
    }
    #[test]
    fn the_exact_probability_grows_with_the_number_of_people() {
        let probs: Vec<f64> = [10, 20, 40, 100].iter().map(|n| shared_birthday_prob(*n)).collect();
        assert!(probs.windows(2).all(|w| w[0] < w[1]));
        assert!(probs[3] > 0.9999);
    }
}
