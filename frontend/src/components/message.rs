use dwed_chat_core::classify::{LineStyle, styled_lines};
use dwed_chat_core::display::{NO_MATCH_SUGGESTIONS, NO_MATCH_TITLE};
use dwed_chat_core::{Message, MessageBody, Venue};
use leptos::prelude::*;

use crate::components::venue_card::VenueCard;

fn line_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Heading => "line heading",
        LineStyle::When => "line when",
        LineStyle::What => "line what",
        LineStyle::ModernTouch => "line modern-touch",
        LineStyle::Body => "line",
    }
}

/// One conversation turn, rendered according to its sender.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let welcome = message.is_welcome();

    match message.body().clone() {
        MessageBody::User(text) => view! {
            <div class="message user">
                <p>{text}</p>
            </div>
        }
        .into_any(),
        MessageBody::AssistantText { text, .. } => {
            let class = if welcome { "message assistant welcome" } else { "message assistant" };
            view! {
                <div class=class>
                    <AssistantText text=text />
                </div>
            }
            .into_any()
        }
        MessageBody::AssistantVenues(venues) => view! { <VenueList venues=venues /> }.into_any(),
    }
}

/// Assistant text, laid out as a list, a ceremony card or a plain paragraph.
#[component]
fn AssistantText(text: String) -> impl IntoView {
    styled_lines(&text)
        .into_iter()
        .map(|line| {
            let class = line_class(line.style);
            let content = line.text.to_string();
            view! { <p class=class>{content}</p> }
        })
        .collect_view()
}

#[component]
fn VenueList(venues: Vec<Venue>) -> impl IntoView {
    if venues.is_empty() {
        return view! {
            <div class="no-matches">
                <h3>{NO_MATCH_TITLE}</h3>
                <p>"Let me help you find some alternatives! Would you like to:"</p>
                <ul>
                    {NO_MATCH_SUGGESTIONS
                        .iter()
                        .map(|suggestion| view! { <li>{*suggestion}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="venue-grid">
            {venues
                .into_iter()
                .map(|venue| view! { <VenueCard venue=venue /> })
                .collect_view()}
        </div>
    }
    .into_any()
}
