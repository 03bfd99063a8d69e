//! Table categories: the four record collections and their known columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::fields::backend;

// ---------------------------------------------------------------------------
// Known columns
// ---------------------------------------------------------------------------

const PROPERTY_COLUMNS: &[&str] = &[
    backend::ID,
    backend::TITLE,
    backend::DESCRIPTION,
    backend::PRICE,
    backend::LOCATION,
    backend::TYPE,
    backend::BEDS,
    backend::BATHS,
    backend::PARKING,
    backend::AREA,
    backend::IMAGE,
    backend::IMAGES,
    backend::FEATURES,
    backend::OWNERSHIP_YEARS,
    backend::TIME_TO_ATTRACTIONS,
    backend::STATUS,
    backend::CREATED_AT,
    backend::UPDATED_AT,
];

const CLIENT_SUBMISSION_COLUMNS: &[&str] = &[
    backend::ID,
    backend::CONTACT_NAME,
    backend::CONTACT_EMAIL,
    backend::CONTACT_PHONE,
    backend::NAME,
    backend::EMAIL,
    backend::PHONE,
    backend::PROPERTY_TYPE,
    backend::BUDGET,
    backend::MESSAGE,
    backend::STATUS,
    backend::CREATED_AT,
    backend::UPDATED_AT,
];

const BLOG_POST_COLUMNS: &[&str] = &[
    backend::ID,
    backend::TITLE,
    backend::CONTENT,
    backend::EXCERPT,
    backend::AUTHOR,
    backend::FEATURED_IMAGE,
    backend::PUBLISHED,
    backend::SLUG,
    backend::STATUS,
    backend::CREATED_AT,
    backend::UPDATED_AT,
];

const PAGE_CONTENT_COLUMNS: &[&str] = &[
    backend::ID,
    backend::PAGE_NAME,
    backend::SECTION_NAME,
    backend::CONTENT,
    backend::CREATED_AT,
    backend::UPDATED_AT,
];

// ---------------------------------------------------------------------------
// TableCategory
// ---------------------------------------------------------------------------

/// A named group of records sharing one field-mapping rule set.
///
/// The string form doubles as the database table name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TableCategory {
    #[default]
    Properties,
    ClientSubmissions,
    BlogPosts,
    PageContent,
}

impl TableCategory {
    /// Every category, in declaration order.
    pub const ALL: [TableCategory; 4] = [
        Self::Properties,
        Self::ClientSubmissions,
        Self::BlogPosts,
        Self::PageContent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::ClientSubmissions => "client_submissions",
            Self::BlogPosts => "blog_posts",
            Self::PageContent => "page_content",
        }
    }

    /// Backend column names known for this category.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Properties => PROPERTY_COLUMNS,
            Self::ClientSubmissions => CLIENT_SUBMISSION_COLUMNS,
            Self::BlogPosts => BLOG_POST_COLUMNS,
            Self::PageContent => PAGE_CONTENT_COLUMNS,
        }
    }

    pub fn has_column(self, name: &str) -> bool {
        self.columns().contains(&name)
    }
}

impl fmt::Display for TableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown table category: '{s}'")))
    }
}
