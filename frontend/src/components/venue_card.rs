use dwed_chat_core::display::{capacity_label, format_inr, halls_heading};
use dwed_chat_core::{BanquetHall, Venue, VenueView};
use leptos::prelude::*;

/// Icon, label and facility category for the card's facility grid.
const FACILITY_ROWS: [(&str, &str, &str); 4] = [
    ("🅿️", "Parking", "parking"),
    ("🍽️", "Catering", "catering"),
    ("🎨", "Décor", "decor"),
    ("🛏️", "Rooms", "rooms"),
];

fn hall_row(hall: &BanquetHall) -> impl IntoView + use<> {
    let name = hall.name.clone();
    let image = hall.image.clone().map(|src| {
        let alt = name.clone();
        view! {
            <div class="hall-image">
                <img src=src alt=alt />
            </div>
        }
    });
    let capacity = format!("{} guests", hall.capacity);
    let price = format!("₹{}", format_inr(hall.price));
    let hours = format!("{}hrs min", hall.min_booking_hours);

    view! {
        <div class="hall">
            {image}
            <p class="hall-name">{name}</p>
            <div class="hall-facts">
                <span>"👥 " {capacity}</span>
                <span>"💰 " {price}</span>
                <span>"⏱️ " {hours}</span>
            </div>
        </div>
    }
}

/// Card for one venue; the displayed halls depend on the turn's requested capacity.
#[component]
pub fn VenueCard(venue: Venue) -> impl IntoView {
    let venue_view = VenueView::new(&venue);
    let capacity = capacity_label(&venue_view);
    let heading = halls_heading(&venue_view);

    let halls = if venue_view.has_no_matching_halls() {
        view! { <p class="no-halls">"No banquet halls match this guest count."</p> }.into_any()
    } else {
        venue_view
            .halls
            .iter()
            .map(|hall| hall_row(hall))
            .collect_view()
            .into_any()
    };

    let facilities = FACILITY_ROWS
        .iter()
        .map(|(icon, label, category)| {
            let value = venue.facilities.describe(category).unwrap_or_default();
            view! {
                <div class="facility">
                    <span class="icon">{*icon}</span>
                    <div>
                        <p class="facility-label">{*label}</p>
                        <p class="facility-value">{value}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let amenities = venue
        .facilities
        .amenities()
        .iter()
        .map(|amenity| {
            let amenity = amenity.clone();
            view! { <span class="amenity">{amenity}</span> }
        })
        .collect_view();

    let Venue { name, location, description, .. } = venue;

    view! {
        <div class="venue-card">
            <h3 class="venue-name">{name}</h3>
            <p class="venue-location">"📍 " {location}</p>
            <p class="venue-capacity">"👥 " {capacity}</p>

            <h4>{heading}</h4>
            <div class="halls">{halls}</div>

            <h4>"Facilities:"</h4>
            <div class="facilities">{facilities}</div>

            <h4>"Amenities:"</h4>
            <div class="amenities">{amenities}</div>

            <p class="venue-description">{description}</p>
        </div>
    }
}
