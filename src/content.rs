//! Compiled-in copy for both personas.
//!
//! Every section has one record shape shared by the two personas, so a
//! narrative can only differ in wording, never in structure.

mod about;
mod case_studies;
mod contact;
mod footer;
mod hero;
mod landing;
mod stats;
mod testimonials;
mod timeline;

pub use about::{about, About, Highlight, HIGHLIGHTS};
pub use case_studies::{case_studies, CaseStudy, CASE_STUDIES_SUBTITLE, CASE_STUDIES_TITLE};
pub use contact::{contact, Contact, ContactDetail, QuickFact};
pub use footer::{copyright_year, footer, Footer, FOCUS_AREAS};
pub use hero::{hero, nav_tagline, Hero};
pub use landing::{landing, Landing, LANDING_SUBTITLE, LANDING_TITLE};
pub use stats::{stats, Stat};
pub use testimonials::{testimonials, Testimonial, TESTIMONIALS_SUBTITLE, TESTIMONIALS_TITLE};
pub use timeline::{timeline, Achievement, Timeline};

use crate::persona::Persona;

pub const OWNER_NAME: &str = "P.K. Koduri";

/// The independently rendered regions of the portfolio view, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Stats,
    About,
    Timeline,
    CaseStudies,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Stats,
        Section::About,
        Section::Timeline,
        Section::CaseStudies,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Element id the section is mounted under.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Stats => "stats",
            Self::About => "about",
            Self::Timeline => "achievements",
            Self::CaseStudies => "portfolio",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }
}

/// One structured item of persona-specific copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRecord {
    Hero(&'static Hero),
    Stat(&'static Stat),
    Paragraph(&'static str),
    Highlight(&'static Highlight),
    Achievement(&'static Achievement),
    CaseStudy(&'static CaseStudy),
    Testimonial(&'static Testimonial),
    ContactDetail(&'static ContactDetail),
    QuickFact(&'static QuickFact),
}

/// Ordered records a section renders for `persona`.
pub fn get_content(section: Section, persona: Persona) -> Vec<ContentRecord> {
    match section {
        Section::Hero => vec![ContentRecord::Hero(hero(persona))],
        Section::Stats => stats(persona).iter().map(ContentRecord::Stat).collect(),
        Section::About => {
            let about = about(persona);
            about
                .paragraphs
                .iter()
                .copied()
                .map(ContentRecord::Paragraph)
                .chain(HIGHLIGHTS.iter().map(ContentRecord::Highlight))
                .collect()
        }
        Section::Timeline => timeline(persona)
            .entries
            .iter()
            .map(ContentRecord::Achievement)
            .collect(),
        Section::CaseStudies => case_studies(persona)
            .iter()
            .map(ContentRecord::CaseStudy)
            .collect(),
        Section::Testimonials => testimonials(persona)
            .iter()
            .map(ContentRecord::Testimonial)
            .collect(),
        Section::Contact => {
            let contact = contact(persona);
            contact
                .details
                .iter()
                .map(ContentRecord::ContactDetail)
                .chain(contact.quick_facts.iter().map(ContentRecord::QuickFact))
                .collect()
        }
    }
}
