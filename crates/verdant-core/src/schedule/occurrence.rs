//! Occurrence calculator: the civil dates on which a cadence is due.

use std::iter::FusedIterator;

use jiff::{
    civil::{Date, Weekday},
    tz::TimeZone,
    Timestamp, ToSpan,
};

use crate::models::Frequency;

/// A plan's recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub frequency: Frequency,
    /// Supplies the weekday or day-of-month when neither is set
    pub start_date: Date,
    pub day_of_week: Option<Weekday>,
    pub day_of_month: Option<i8>,
}

impl Cadence {
    /// Weekday used by weekly and biweekly plans.
    pub fn weekday(&self) -> Weekday {
        self.day_of_week.unwrap_or_else(|| self.start_date.weekday())
    }

    /// Day-of-month used by monthly plans.
    pub fn day_of_month(&self) -> i8 {
        self.day_of_month.unwrap_or_else(|| self.start_date.day())
    }

    /// The dates inside `window` on which a visit is due, in increasing
    /// order.
    ///
    /// ```rust
    /// use jiff::civil::{date, Weekday};
    /// use verdant_core::models::Frequency;
    /// use verdant_core::schedule::{Cadence, DateWindow};
    ///
    /// let cadence = Cadence {
    ///     frequency: Frequency::Weekly,
    ///     start_date: date(2025, 3, 5),
    ///     day_of_week: Some(Weekday::Monday),
    ///     day_of_month: None,
    /// };
    /// let window = DateWindow::new(date(2025, 3, 5), date(2025, 3, 19));
    /// let dates: Vec<_> = cadence.occurrences(window).collect();
    /// assert_eq!(dates, vec![date(2025, 3, 10), date(2025, 3, 17)]);
    /// ```
    pub fn occurrences(&self, window: DateWindow) -> Occurrences {
        if window.is_empty() {
            return Occurrences {
                state: State::Done,
            };
        }

        let state = match self.frequency {
            Frequency::Weekly => State::stepped(self.weekday(), 7, window),
            Frequency::Biweekly => State::stepped(self.weekday(), 14, window),
            Frequency::Monthly => State::Monthly {
                year: window.start.year(),
                month: window.start.month(),
                day: self.day_of_month(),
                window,
            },
        };

        Occurrences { state }
    }
}

/// A closed range of civil dates. Empty when `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: Date,
    end: Date,
}

impl DateWindow {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// The UTC calendar dates of two instants.
    pub fn between(start: Timestamp, end: Timestamp) -> Self {
        Self {
            start: start.to_zoned(TimeZone::UTC).date(),
            end: end.to_zoned(TimeZone::UTC).date(),
        }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Lazy sequence of occurrence dates produced by [`Cadence::occurrences`].
#[derive(Debug, Clone)]
pub struct Occurrences {
    state: State,
}

#[derive(Debug, Clone)]
enum State {
    Stepped {
        next: Date,
        step: i64,
        end: Date,
    },
    Monthly {
        year: i16,
        month: i8,
        day: i8,
        window: DateWindow,
    },
    Done,
}

impl State {
    fn stepped(weekday: Weekday, step: i64, window: DateWindow) -> Self {
        let mut date = window.start;
        // At most six days forward to reach the weekday.
        for _ in 0..7 {
            if date.weekday() == weekday {
                return if date <= window.end {
                    State::Stepped {
                        next: date,
                        step,
                        end: window.end,
                    }
                } else {
                    State::Done
                };
            }
            date = match date.tomorrow() {
                Ok(d) => d,
                Err(_) => return State::Done,
            };
        }
        State::Done
    }
}

impl Iterator for Occurrences {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        match self.state {
            State::Done => None,
            State::Stepped { next, step, end } => {
                self.state = match next.checked_add(step.days()) {
                    Ok(following) if following <= end => State::Stepped {
                        next: following,
                        step,
                        end,
                    },
                    _ => State::Done,
                };
                Some(next)
            }
            State::Monthly {
                mut year,
                mut month,
                day,
                window,
            } => loop {
                if (year, month) > (window.end.year(), window.end.month()) {
                    self.state = State::Done;
                    return None;
                }

                let candidate = Date::new(year, month, day);
                if month == 12 {
                    year += 1;
                    month = 1;
                } else {
                    month += 1;
                }

                // Short months have no such day and are skipped.
                if let Ok(date) = candidate {
                    if window.contains(date) {
                        self.state = State::Monthly {
                            year,
                            month,
                            day,
                            window,
                        };
                        return Some(date);
                    }
                }
            },
        }
    }
}

impl FusedIterator for Occurrences {}
