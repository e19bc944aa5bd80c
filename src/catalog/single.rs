use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::duration::{self, format_iso_8601};
use super::isrc::Isrc;
use super::validation::{
    calendar_date, http_url, non_blank, non_empty_entries, non_empty_list, require, time_span,
    ValidationError, ValidationResult,
};

/// A duration as supplied by a caller: seconds, or text in ISO 8601 / clock form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Seconds(f64),
    Text(String),
}

impl DurationInput {
    fn into_duration(self, field: &'static str) -> ValidationResult<Duration> {
        match self {
            DurationInput::Seconds(secs) => {
                Duration::try_from_secs_f64(secs).map_err(|_| ValidationError::InvalidDuration {
                    field,
                    value: secs.to_string(),
                })
            }
            DurationInput::Text(text) => time_span(&text, field),
        }
    }
}

/// Candidate field mapping for a [`MusicSingleRelease`].
///
/// Every field is optional here so that a missing required field surfaces as
/// a [`ValidationError::MissingField`] naming it, rather than as a generic
/// decoding failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleFields {
    pub title: Option<String>,
    pub isrc: Option<String>,
    pub artist_names: Option<Vec<String>>,
    pub release_date: Option<String>,
    pub genres: Option<Vec<String>>,
    pub label: Option<String>,
    pub version: Option<String>,
    pub formats: Option<Vec<String>>,
    pub duration: Option<DurationInput>,
    pub artwork_url: Option<String>,
    pub audio_preview_url: Option<String>,
    pub catalog_number: Option<String>,
    pub subgenres: Option<Vec<String>>,
    pub composers: Option<Vec<String>>,
    pub producers: Option<Vec<String>>,
    pub language: Option<String>,
    pub lyrics: Option<String>,
    pub notes: Option<String>,
}

/// One released music single.
///
/// Instances are immutable and always valid: the only ways to obtain one
/// are [`MusicSingleRelease::construct`], `TryFrom<SingleFields>` and
/// deserialization, all of which run the same checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SingleFields")]
pub struct MusicSingleRelease {
    title: String,
    isrc: Isrc,
    artist_names: Vec<String>,
    release_date: NaiveDate,
    genres: Vec<String>,
    label: Option<String>,
    version: Option<String>,
    formats: Option<Vec<String>>,
    #[serde(serialize_with = "duration::serialize_optional")]
    duration: Option<Duration>,
    artwork_url: Option<Url>,
    audio_preview_url: Option<Url>,
    catalog_number: Option<String>,
    subgenres: Option<Vec<String>>,
    composers: Option<Vec<String>>,
    producers: Option<Vec<String>>,
    language: Option<String>,
    lyrics: Option<String>,
    notes: Option<String>,
}

impl MusicSingleRelease {
    /// Validates `fields` and builds the release.
    ///
    /// Required fields are checked first, in declaration order, then the
    /// optional ones. The first failing check is returned.
    pub fn construct(fields: SingleFields) -> ValidationResult<MusicSingleRelease> {
        let title = non_blank(require(fields.title, "title")?, "title")?;
        let isrc = Isrc::parse(&require(fields.isrc, "isrc")?)?;
        let artist_names = non_empty_entries(
            require(fields.artist_names, "artist_names")?,
            "artist_names",
        )?;
        let release_date = calendar_date(
            &require(fields.release_date, "release_date")?,
            "release_date",
        )?;
        let genres = non_empty_list(require(fields.genres, "genres")?, "genres")?;

        let duration = fields
            .duration
            .map(|d| d.into_duration("duration"))
            .transpose()?;
        let artwork_url = fields
            .artwork_url
            .map(|u| http_url(&u, "artwork_url"))
            .transpose()?;
        let audio_preview_url = fields
            .audio_preview_url
            .map(|u| http_url(&u, "audio_preview_url"))
            .transpose()?;

        Ok(MusicSingleRelease {
            title,
            isrc,
            artist_names,
            release_date,
            genres,
            label: fields.label,
            version: fields.version,
            formats: fields.formats,
            duration,
            artwork_url,
            audio_preview_url,
            catalog_number: fields.catalog_number,
            subgenres: fields.subgenres,
            composers: fields.composers,
            producers: fields.producers,
            language: fields.language,
            lyrics: fields.lyrics,
            notes: fields.notes,
        })
    }

    /// The candidate mapping this release was built from, in normalized form.
    /// Edit it and call [`MusicSingleRelease::construct`] to derive a replacement.
    pub fn to_fields(&self) -> SingleFields {
        SingleFields {
            title: Some(self.title.clone()),
            isrc: Some(self.isrc.to_string()),
            artist_names: Some(self.artist_names.clone()),
            release_date: Some(self.release_date.format("%Y-%m-%d").to_string()),
            genres: Some(self.genres.clone()),
            label: self.label.clone(),
            version: self.version.clone(),
            formats: self.formats.clone(),
            duration: self
                .duration
                .as_ref()
                .map(|d| DurationInput::Text(format_iso_8601(d))),
            artwork_url: self.artwork_url.as_ref().map(|u| u.to_string()),
            audio_preview_url: self.audio_preview_url.as_ref().map(|u| u.to_string()),
            catalog_number: self.catalog_number.clone(),
            subgenres: self.subgenres.clone(),
            composers: self.composers.clone(),
            producers: self.producers.clone(),
            language: self.language.clone(),
            lyrics: self.lyrics.clone(),
            notes: self.notes.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn isrc(&self) -> &Isrc {
        &self.isrc
    }

    pub fn artist_names(&self) -> &[String] {
        &self.artist_names
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn formats(&self) -> Option<&[String]> {
        self.formats.as_deref()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn artwork_url(&self) -> Option<&Url> {
        self.artwork_url.as_ref()
    }

    pub fn audio_preview_url(&self) -> Option<&Url> {
        self.audio_preview_url.as_ref()
    }

    pub fn catalog_number(&self) -> Option<&str> {
        self.catalog_number.as_deref()
    }

    pub fn subgenres(&self) -> Option<&[String]> {
        self.subgenres.as_deref()
    }

    pub fn composers(&self) -> Option<&[String]> {
        self.composers.as_deref()
    }

    pub fn producers(&self) -> Option<&[String]> {
        self.producers.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn lyrics(&self) -> Option<&str> {
        self.lyrics.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl TryFrom<SingleFields> for MusicSingleRelease {
    type Error = ValidationError;

    fn try_from(fields: SingleFields) -> Result<Self, Self::Error> {
        MusicSingleRelease::construct(fields)
    }
}
