// src/utils/calendar.rs

//! Business-day issue numbering for bulletin PDFs.
//!
//! Regional bulletins are published once per weekday with a sequential
//! issue number. The number for an arbitrary date is derived by counting
//! weekdays since a known (date, issue) anchor.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{AppError, Result};

/// Compute the bulletin issue number for `target`.
///
/// Weekend dates are attributed to the preceding weekday's issue; the
/// returned date is the effective publication date the number belongs to,
/// which differs from `target` when a roll-back happened.
///
/// Errors with [`AppError::DateOrder`] when `target` precedes `anchor`.
pub fn issue_number(
    target: NaiveDate,
    anchor: NaiveDate,
    anchor_issue: u32,
) -> Result<(u32, NaiveDate)> {
    if target < anchor {
        return Err(AppError::DateOrder { target, anchor });
    }

    let mut effective = target;
    while is_weekend(effective) {
        effective = effective
            .checked_sub_days(Days::new(1))
            .ok_or(AppError::DateOrder { target, anchor })?;
    }
    if effective < anchor {
        return Err(AppError::DateOrder { target, anchor });
    }

    let mut current = anchor;
    let mut issue = anchor_issue;
    while current < effective {
        current = current
            .checked_add_days(Days::new(1))
            .ok_or_else(|| AppError::validation("date overflow while counting issues"))?;
        if !is_weekend(current) {
            issue += 1;
        }
    }

    Ok((issue, effective))
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
