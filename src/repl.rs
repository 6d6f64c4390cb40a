use std::fmt::Write as _;
use std::io::Write as _;

use dwed_chat_core::classify::{styled_lines, LineStyle};
use dwed_chat_core::display::{
    capacity_label, format_inr, halls_heading, NO_MATCH_SUGGESTIONS, NO_MATCH_TITLE,
};
use dwed_chat_core::models::Facilities;
use dwed_chat_core::{ClientConfig, Controller, Message, MessageBody, SessionConfig, Venue, VenueView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::client::ReqwestBackend;
use crate::errors::AppError;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Interactive chat on stdin/stdout against the backend at `config.api_base`.
pub async fn run(config: ClientConfig) -> Result<(), AppError> {
    let backend = ReqwestBackend::new(config)?;
    let mut controller = Controller::new(&SessionConfig::default(), backend);

    for message in controller.session().messages() {
        print!("{}", render_message(message));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\nyou › ");
        std::io::stdout().flush().map_err(AppError::Terminal)?;

        let Some(line) = lines.next_line().await.map_err(AppError::Terminal)? else {
            break;
        };
        if QUIT_COMMANDS.contains(&line.trim()) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let seen = controller.session().messages().len();
        println!("  DWed is thinking…");
        if let Err(e) = controller.submit(&line).await {
            debug!("Submission rejected: {e}");
            continue;
        }

        // The user's own line is already on screen.
        for message in &controller.session().messages()[seen..] {
            if !matches!(message.body(), MessageBody::User(_)) {
                print!("{}", render_message(message));
            }
        }
    }

    Ok(())
}

/// Plain-text rendering of one message, ending with a newline.
pub fn render_message(message: &Message) -> String {
    let mut out = String::new();
    match message.body() {
        MessageBody::User(text) => {
            let _ = writeln!(out, "you › {text}");
        }
        MessageBody::AssistantText { text, .. } => {
            if message.is_welcome() {
                out.push_str("──────────── DWed AI ────────────\n");
            }
            for line in styled_lines(text) {
                let marker = match line.style {
                    LineStyle::Heading => "» ",
                    _ => "",
                };
                let _ = writeln!(out, "  {marker}{}", line.text);
            }
        }
        MessageBody::AssistantVenues(venues) if venues.is_empty() => {
            let _ = writeln!(out, "  {NO_MATCH_TITLE}");
            out.push_str("  Let me help you find some alternatives! Would you like to:\n");
            for suggestion in NO_MATCH_SUGGESTIONS {
                let _ = writeln!(out, "    - {suggestion}");
            }
        }
        MessageBody::AssistantVenues(venues) => {
            for venue in venues {
                render_venue(&mut out, venue);
            }
        }
    }
    out
}

fn render_venue(out: &mut String, venue: &Venue) {
    let view = VenueView::new(venue);

    let _ = writeln!(out, "\n  ■ {}  📍 {}", venue.name, venue.location);
    let _ = writeln!(out, "    👥 {}", capacity_label(&view));
    let _ = writeln!(out, "    {}", halls_heading(&view));
    if view.has_no_matching_halls() {
        out.push_str("      No banquet halls match this guest count.\n");
    }
    for hall in &view.halls {
        let _ = writeln!(
            out,
            "      • {}: {} guests, ₹{}, {}hrs min",
            hall.name,
            hall.capacity,
            format_inr(hall.price),
            hall.min_booking_hours
        );
    }

    for category in Facilities::HEADLINE {
        if let Some(description) = venue.facilities.describe(category) {
            let _ = writeln!(out, "    {category}: {description}");
        }
    }
    let amenities = venue.facilities.amenities();
    if !amenities.is_empty() {
        let _ = writeln!(out, "    amenities: {}", amenities.join(", "));
    }
    if !venue.description.is_empty() {
        let _ = writeln!(out, "    {}", venue.description);
    }
}
