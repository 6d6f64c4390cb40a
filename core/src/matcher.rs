//! Picks which banquet halls of a venue are shown for a search turn, and the
//! capacity figure printed in the card header.
//!
//! Everything here is a derived view: nothing is written back to the venue or
//! to the session, so renderers call it on every draw.

use std::fmt;

use crate::models::{BanquetHall, Venue};

/// How far above the requested guest count a hall may go and still match.
pub const CAPACITY_WINDOW: u32 = 100;

/// The header capacity of a venue card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadlineCapacity {
    /// No guest count was requested: one total for the whole venue.
    Aggregate(u32),
    /// A guest count was requested: the capacities of the matching halls, in order.
    MatchedList(Vec<u32>),
}

impl fmt::Display for HeadlineCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadlineCapacity::Aggregate(total) => write!(f, "{total}"),
            HeadlineCapacity::MatchedList(capacities) => {
                for (i, capacity) in capacities.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{capacity}")?;
                }
                Ok(())
            }
        }
    }
}

fn preference(requested: Option<u32>) -> Option<u32> {
    requested.filter(|&n| n > 0)
}

/// True when `capacity` lies in `[requested, requested + CAPACITY_WINDOW]`.
pub fn fits(capacity: u32, requested: u32) -> bool {
    capacity >= requested && capacity <= requested.saturating_add(CAPACITY_WINDOW)
}

/// Halls to display, in backend order. With no preference every hall is shown.
pub fn matching_banquets(venue: &Venue, requested: Option<u32>) -> Vec<&BanquetHall> {
    match preference(requested) {
        None => venue.banquets.iter().collect(),
        Some(requested) => venue
            .banquets
            .iter()
            .filter(|hall| fits(hall.capacity, requested))
            .collect(),
    }
}

pub fn headline_capacity(venue: &Venue, requested: Option<u32>) -> HeadlineCapacity {
    match preference(requested) {
        None => HeadlineCapacity::Aggregate(
            venue
                .total_capacity
                .or(venue.capacity)
                .unwrap_or_else(|| {
                    venue
                        .banquets
                        .iter()
                        .fold(0u32, |total, hall| total.saturating_add(hall.capacity))
                }),
        ),
        Some(_) => HeadlineCapacity::MatchedList(
            matching_banquets(venue, requested)
                .into_iter()
                .map(|hall| hall.capacity)
                .collect(),
        ),
    }
}

/// Everything a venue card needs, computed from the venue's own requested capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct VenueView<'a> {
    pub venue: &'a Venue,
    pub requested: Option<u32>,
    pub halls: Vec<&'a BanquetHall>,
    pub headline: HeadlineCapacity,
}

impl<'a> VenueView<'a> {
    pub fn new(venue: &'a Venue) -> Self {
        let requested = preference(venue.requested_capacity);
        Self {
            venue,
            requested,
            halls: matching_banquets(venue, requested),
            headline: headline_capacity(venue, requested),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.requested.is_some()
    }

    /// The renderer shows a "no halls" note instead of an empty list.
    pub fn has_no_matching_halls(&self) -> bool {
        self.halls.is_empty()
    }
}
