use crate::constants::{DESCRIPTION_MAX_LEN, NO_IMAGE, READ_MORE, THUMBNAIL_SLOTS};
use crate::external_api::trips_api::models::trip::{Trip, TripId};
use crate::utils::truncate_description;

/// Small image slot under the card
#[derive(Debug, Clone, PartialEq)]
pub enum Thumbnail<'a> {
    Photo(&'a str),
    Placeholder,
}

/// What a card shows for one trip
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub eid: &'a TripId,
    pub title: &'a str,
    pub url: &'a str,
    /// First photo, empty when the trip has none
    pub main_image: &'a str,
    /// Always `THUMBNAIL_SLOTS` long
    pub thumbnails: Vec<Thumbnail<'a>>,
    pub description: String,
    pub tags: &'a [String],
}

impl<'a> CardView<'a> {
    pub fn from_trip(trip: &'a Trip) -> Self {
        let main_image = trip.photos.first().map(String::as_str).unwrap_or_default();
        let mut thumbnails: Vec<Thumbnail<'a>> = trip
            .photos
            .iter()
            .skip(1)
            .take(THUMBNAIL_SLOTS)
            .map(|photo| Thumbnail::Photo(photo.as_str()))
            .collect();
        thumbnails.resize(THUMBNAIL_SLOTS, Thumbnail::Placeholder);

        Self {
            eid: &trip.eid,
            title: &trip.title,
            url: &trip.url,
            main_image,
            thumbnails,
            description: truncate_description(&trip.description, DESCRIPTION_MAX_LEN),
            tags: &trip.tags,
        }
    }
}

/// `[a] [b] and [c]`, the conjunction only shows up with two or more tags
fn render_tags(tags: &[String]) -> String {
    let last = tags.len().saturating_sub(1);
    tags.iter()
        .enumerate()
        .map(|(index, tag)| {
            if index == last && tags.len() > 1 {
                format!("and [{tag}]")
            } else {
                format!("[{tag}]")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_image(src: &str) -> &str {
    if src.is_empty() {
        NO_IMAGE
    } else {
        src
    }
}

/// Card text, `position` is the 1-based number used by `:copy` and `:open`
pub fn render(card: &CardView, position: usize) -> String {
    let thumbnails = card
        .thumbnails
        .iter()
        .map(|thumbnail| match thumbnail {
            Thumbnail::Photo(src) => render_image(src).to_string(),
            Thumbnail::Placeholder => format!("<{NO_IMAGE}>"),
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![
        format!("[{position}] {} (#{})", card.title, card.eid),
        format!("    image: {}", render_image(card.main_image)),
        format!("    {}", card.description),
    ];
    if !card.url.is_empty() {
        lines.push(format!("    {READ_MORE}: {}", card.url));
    }
    lines.push(format!("    tags: {}", render_tags(card.tags)));
    lines.push(format!("    photos: {thumbnails}"));
    lines.join("\n")
}
