use super::single::{DurationInput, SingleFields};

pub const EXAMPLE_ISRC: &str = "USX9P2400001";
pub const EXAMPLE_TITLE: &str = "My Awesome Song";

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

/// The canonical example single, used to seed a fresh server and in tests.
pub fn example_single_fields() -> SingleFields {
    SingleFields {
        title: Some(EXAMPLE_TITLE.to_string()),
        isrc: Some(EXAMPLE_ISRC.to_string()),
        artist_names: strings(&["My Band"]),
        release_date: Some("2024-01-15".to_string()),
        genres: strings(&["Rock", "Indie"]),
        label: Some("Independent Label".to_string()),
        version: Some("Original".to_string()),
        formats: strings(&["Digital", "Vinyl"]),
        duration: Some(DurationInput::Text("PT3M45S".to_string())),
        artwork_url: Some("https://example.com/artwork.jpg".to_string()),
        audio_preview_url: Some("https://example.com/preview.mp3".to_string()),
        catalog_number: Some("MBR001".to_string()),
        subgenres: strings(&["Alternative Rock"]),
        composers: strings(&["John Doe", "Jane Smith"]),
        producers: strings(&["Producer Y"]),
        language: Some("English".to_string()),
        lyrics: Some("Lyrics go here,\nThis is my song,\nThis is a cool song.".to_string()),
        notes: Some("Debut single.".to_string()),
    }
}
