//! Natural ("human") string order, used to sort API dump entries.
//!
//! `file2` sorts before `file10`. Digit runs compare by value, other runs
//! compare ASCII-case-insensitively. The order is locale-independent and
//! total: strings that tie on those rules fall back to ordinal order.

use std::cmp::Ordering;

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Runs::new(a);
    let mut right = Runs::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_runs(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Sort a slice in natural order. The sort is stable.
pub fn sort_natural<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}

fn compare_runs(x: &str, y: &str) -> Ordering {
    if is_digit_run(x) && is_digit_run(y) {
        compare_numbers(x, y)
    } else {
        compare_text(x, y)
    }
}

/// Numeric comparison of arbitrarily long digit runs.
fn compare_numbers(x: &str, y: &str) -> Ordering {
    let xs = x.trim_start_matches('0');
    let ys = y.trim_start_matches('0');
    xs.len()
        .cmp(&ys.len())
        .then_with(|| xs.cmp(ys))
        .then_with(|| (x.len() - xs.len()).cmp(&(y.len() - ys.len())))
}

fn compare_text(x: &str, y: &str) -> Ordering {
    x.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(y.chars().map(|c| c.to_ascii_lowercase()))
}

#[inline]
fn is_digit_run(run: &str) -> bool {
    run.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

/// Splits a string into alternating digit and non-digit runs.
struct Runs<'a> {
    rest: &'a str,
}

impl<'a> Runs<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = *self.rest.as_bytes().first()?;
        let digits = first.is_ascii_digit();
        // ASCII digits are single bytes, so every boundary is a char boundary
        let end = self
            .rest
            .bytes()
            .position(|b| b.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(run)
    }
}
