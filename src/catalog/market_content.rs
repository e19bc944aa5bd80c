//! Press and marketing material that accompanies a release.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use url::Url;

use super::validation::{http_url, non_blank, ValidationError, ValidationResult};

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .unwrap();
}

fn email(value: String, field: &'static str) -> ValidationResult<String> {
    if !EMAIL_PATTERN.is_match(&value) {
        return Err(ValidationError::InvalidFormat {
            field,
            value,
            expected: "an email address",
        });
    }
    Ok(value)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarketingContact {
    organisation: String,
    name: String,
    email: String,
}

impl MarketingContact {
    pub fn new(
        organisation: impl Into<String>,
        name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> ValidationResult<MarketingContact> {
        Ok(MarketingContact {
            organisation: non_blank(organisation.into(), "organisation")?,
            name: non_blank(name.into(), "name")?,
            email: email(email_address.into(), "email")?,
        })
    }

    pub fn organisation(&self) -> &str {
        &self.organisation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Candidate values for a [`PressCoverage`].
#[derive(Clone, Debug)]
pub struct PressCoverageFields {
    pub subject: String,
    pub publish_date: NaiveDate,
    pub web_link: String,
    /// HTML fragment.
    pub body: String,
    pub images: Vec<String>,
    pub author: String,
    pub marketing_contact: MarketingContact,
}

/// An article or review covering a release.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PressCoverage {
    subject: String,
    publish_date: NaiveDate,
    web_link: Url,
    body: String,
    images: Vec<String>,
    author: String,
    marketing_contact: MarketingContact,
}

impl PressCoverage {
    pub fn new(fields: PressCoverageFields) -> ValidationResult<PressCoverage> {
        Ok(PressCoverage {
            subject: non_blank(fields.subject, "subject")?,
            publish_date: fields.publish_date,
            web_link: http_url(&fields.web_link, "web_link")?,
            body: non_blank(fields.body, "body")?,
            images: fields.images,
            author: non_blank(fields.author, "author")?,
            marketing_contact: fields.marketing_contact,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn publish_date(&self) -> NaiveDate {
        self.publish_date
    }

    pub fn web_link(&self) -> &Url {
        &self.web_link
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn marketing_contact(&self) -> &MarketingContact {
        &self.marketing_contact
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PressKit {
    pub presscoverage: PressCoverage,
}
