//! Field-name tables for both naming conventions and the rename rules that
//! connect them.
//!
//! The database uses snake_case (plus a few irregular legacy columns on
//! `client_submissions`); the presentation layer uses camelCase. Most fields
//! share one spelling in both conventions.

use crate::table::TableCategory;

/// Database (snake_case) field names.
pub mod backend {
    // Common
    pub const ID: &str = "id";
    pub const CREATED_AT: &str = "created_at";
    pub const UPDATED_AT: &str = "updated_at";
    pub const STATUS: &str = "status";

    // properties
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const LOCATION: &str = "location";
    pub const TYPE: &str = "type";
    pub const BEDS: &str = "beds";
    pub const BATHS: &str = "baths";
    pub const PARKING: &str = "parking";
    pub const AREA: &str = "area";
    pub const IMAGE: &str = "image";
    pub const IMAGES: &str = "images";
    pub const FEATURES: &str = "features";
    pub const OWNERSHIP_YEARS: &str = "ownership_years";
    pub const TIME_TO_ATTRACTIONS: &str = "time_to_attractions";

    // client_submissions
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PROPERTY_TYPE: &str = "property_type";
    pub const BUDGET: &str = "budget";
    pub const MESSAGE: &str = "message";
    pub const CONTACT_NAME: &str = "contactname";
    pub const CONTACT_EMAIL: &str = "contactemail";
    pub const CONTACT_PHONE: &str = "contactphone";

    // blog_posts
    pub const CONTENT: &str = "content";
    pub const EXCERPT: &str = "excerpt";
    pub const AUTHOR: &str = "author";
    pub const FEATURED_IMAGE: &str = "featured_image";
    pub const PUBLISHED: &str = "published";
    pub const SLUG: &str = "slug";

    // page_content
    pub const PAGE_NAME: &str = "page_name";
    pub const SECTION_NAME: &str = "section_name";
}

/// Presentation (camelCase) field names.
pub mod frontend {
    // Common
    pub const ID: &str = "id";
    pub const CREATED_AT: &str = "createdAt";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const STATUS: &str = "status";

    // properties
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const LOCATION: &str = "location";
    pub const TYPE: &str = "type";
    pub const BEDS: &str = "beds";
    pub const BATHS: &str = "baths";
    pub const PARKING: &str = "parking";
    pub const AREA: &str = "area";
    pub const IMAGE: &str = "image";
    pub const IMAGES: &str = "images";
    pub const FEATURES: &str = "features";
    pub const OWNERSHIP_YEARS: &str = "ownershipYears";
    pub const TIME_TO_ATTRACTIONS: &str = "timeToAttractions";

    // client_submissions
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PROPERTY_TYPE: &str = "propertyType";
    pub const BUDGET: &str = "budget";
    pub const MESSAGE: &str = "message";
    pub const CONTACT_NAME: &str = "contactName";
    pub const CONTACT_EMAIL: &str = "contactEmail";
    pub const CONTACT_PHONE: &str = "contactPhone";

    // blog_posts
    pub const CONTENT: &str = "content";
    pub const EXCERPT: &str = "excerpt";
    pub const AUTHOR: &str = "author";
    pub const FEATURED_IMAGE: &str = "featuredImage";
    pub const PUBLISHED: &str = "published";
    pub const SLUG: &str = "slug";

    // page_content
    pub const PAGE_NAME: &str = "pageName";
    pub const SECTION_NAME: &str = "sectionName";
}

// ---------------------------------------------------------------------------
// Rename rules
// ---------------------------------------------------------------------------

/// One renamed field.
///
/// `legacy` is an older backend spelling that is accepted on read but never
/// written. Rules with a legacy spelling resolve by truthiness (the first
/// non-empty spelling wins); plain rules rename whenever the value is
/// non-null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRename {
    pub backend: &'static str,
    pub frontend: &'static str,
    pub legacy: Option<&'static str>,
}

impl FieldRename {
    const fn plain(backend: &'static str, frontend: &'static str) -> Self {
        Self {
            backend,
            frontend,
            legacy: None,
        }
    }

    const fn with_legacy(
        backend: &'static str,
        legacy: &'static str,
        frontend: &'static str,
    ) -> Self {
        Self {
            backend,
            frontend,
            legacy: Some(legacy),
        }
    }
}

const PROPERTY_RENAMES: &[FieldRename] = &[
    FieldRename::plain(backend::CREATED_AT, frontend::CREATED_AT),
    FieldRename::plain(backend::UPDATED_AT, frontend::UPDATED_AT),
    FieldRename::plain(backend::OWNERSHIP_YEARS, frontend::OWNERSHIP_YEARS),
    FieldRename::plain(backend::TIME_TO_ATTRACTIONS, frontend::TIME_TO_ATTRACTIONS),
];

const CLIENT_SUBMISSION_RENAMES: &[FieldRename] = &[
    FieldRename::plain(backend::CREATED_AT, frontend::CREATED_AT),
    FieldRename::plain(backend::UPDATED_AT, frontend::UPDATED_AT),
    FieldRename::with_legacy(backend::CONTACT_NAME, backend::NAME, frontend::CONTACT_NAME),
    FieldRename::with_legacy(backend::CONTACT_EMAIL, backend::EMAIL, frontend::CONTACT_EMAIL),
    FieldRename::with_legacy(backend::CONTACT_PHONE, backend::PHONE, frontend::CONTACT_PHONE),
    FieldRename::plain(backend::PROPERTY_TYPE, frontend::PROPERTY_TYPE),
];

const BLOG_POST_RENAMES: &[FieldRename] = &[
    FieldRename::plain(backend::CREATED_AT, frontend::CREATED_AT),
    FieldRename::plain(backend::UPDATED_AT, frontend::UPDATED_AT),
    FieldRename::plain(backend::FEATURED_IMAGE, frontend::FEATURED_IMAGE),
];

const PAGE_CONTENT_RENAMES: &[FieldRename] = &[
    FieldRename::plain(backend::CREATED_AT, frontend::CREATED_AT),
    FieldRename::plain(backend::UPDATED_AT, frontend::UPDATED_AT),
];

/// The rename rules applied for `category`, in application order.
pub fn renames(category: TableCategory) -> &'static [FieldRename] {
    match category {
        TableCategory::Properties => PROPERTY_RENAMES,
        TableCategory::ClientSubmissions => CLIENT_SUBMISSION_RENAMES,
        TableCategory::BlogPosts => BLOG_POST_RENAMES,
        TableCategory::PageContent => PAGE_CONTENT_RENAMES,
    }
}

/// Every spelling of the contact name, in display resolution order.
pub const CONTACT_NAME_SPELLINGS: [&str; 3] =
    [frontend::CONTACT_NAME, backend::CONTACT_NAME, backend::NAME];

/// Every spelling of the contact email, in display resolution order.
pub const CONTACT_EMAIL_SPELLINGS: [&str; 3] =
    [frontend::CONTACT_EMAIL, backend::CONTACT_EMAIL, backend::EMAIL];

/// Every spelling of the contact phone, in display resolution order.
pub const CONTACT_PHONE_SPELLINGS: [&str; 3] =
    [frontend::CONTACT_PHONE, backend::CONTACT_PHONE, backend::PHONE];

/// If `field` is one spelling of a contact field, return all of its spellings.
pub fn contact_spellings(field: &str) -> Option<&'static [&'static str; 3]> {
    [
        &CONTACT_NAME_SPELLINGS,
        &CONTACT_EMAIL_SPELLINGS,
        &CONTACT_PHONE_SPELLINGS,
    ]
    .into_iter()
    .find(|spellings| spellings.contains(&field))
}
