//! Rule-based reading of a user message: venue search, ceremony questions, or
//! anything else.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::SearchFilter;

static GUEST_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,7})\s*(?:guests?|people|pax|persons?|members)\b").unwrap()
});

static PRICE_CEILING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:under|below|within|less than)\s*(?:rs\.?|inr|₹)?\s*(\d[\d,]*)").unwrap()
});

static VENUE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:venues?|halls?|banquets?|lawns?|ballrooms?)\b").unwrap()
});

static CEREMONY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:ceremon(?:y|ies)|functions?|rituals?)\b").unwrap()
});

pub struct Ceremony {
    pub name: &'static str,
    when: &'static str,
    what: &'static str,
    modern_touch: &'static str,
}

impl Ceremony {
    pub fn summary(&self) -> String {
        format!(
            "🕒 When: {}\n📝 What: {}\n✨ Modern Touch: {}",
            self.when, self.what, self.modern_touch
        )
    }
}

pub static CEREMONIES: [Ceremony; 4] = [
    Ceremony {
        name: "Mehendi",
        when: "One or two days before the wedding",
        what: "Intricate henna designs are applied to the bride's hands and feet while family sings and celebrates.",
        modern_touch: "Themed décor, live henna artists for guests and portrait motifs hidden in the designs.",
    },
    Ceremony {
        name: "Sangeet",
        when: "The evening before the wedding",
        what: "A night of music and dance where both families perform and get to know each other.",
        modern_touch: "Choreographed family performances and professional DJs.",
    },
    Ceremony {
        name: "Haldi",
        when: "The morning of the wedding or the day before",
        what: "Turmeric paste is applied to the couple by relatives to bless them and make their skin glow.",
        modern_touch: "Floral jewellery, yellow dress codes and playful colour fights.",
    },
    Ceremony {
        name: "Baraat",
        when: "Just before the main wedding ceremony",
        what: "The groom's procession to the venue on a horse or vehicle, with family dancing to the dhol.",
        modern_touch: "Luxury cars or themed entries with choreographed dances.",
    },
];

pub const CEREMONY_LIST: &str = "Here are the main Indian wedding ceremonies:

1. Roka/Rokna (Engagement)
2. Mehendi
3. Sangeet
4. Haldi
5. Baraat
6. Main Wedding (Pheras)
7. Reception

Which ceremony would you like to know more about?";

pub const HELP_TEXT: &str = "I can help you with:
1. Finding wedding venues (try \"venues in Delhi for 300 guests\")
2. Indian wedding ceremonies
3. Wedding traditions

What would you like to know about?";

pub enum Intent {
    FindVenue(SearchFilter),
    CeremonyDetail(&'static Ceremony),
    CeremonyList,
    General,
}

/// First catalog location mentioned in `message`, as spelled in the catalog.
pub fn find_location(message: &str, locations: &[&str]) -> Option<String> {
    let message = message.to_lowercase();
    locations
        .iter()
        .find(|location| message.contains(&location.to_lowercase()))
        .map(|location| location.to_string())
}

fn guest_count(message: &str) -> Option<u32> {
    GUEST_COUNT
        .captures(message)
        .and_then(|caps| caps[1].parse().ok())
}

fn price_ceiling(message: &str) -> Option<u32> {
    PRICE_CEILING
        .captures(message)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
}

pub fn parse(message: &str, locations: &[&str]) -> Intent {
    let capacity = guest_count(message);
    if capacity.is_some() || VENUE_WORDS.is_match(message) {
        return Intent::FindVenue(SearchFilter {
            location: find_location(message, locations),
            capacity,
            price_max: price_ceiling(message),
        });
    }

    let lower = message.to_lowercase();
    if let Some(ceremony) = CEREMONIES
        .iter()
        .find(|c| lower.contains(&c.name.to_lowercase()))
    {
        return Intent::CeremonyDetail(ceremony);
    }

    if CEREMONY_WORDS.is_match(message) {
        Intent::CeremonyList
    } else {
        Intent::General
    }
}
