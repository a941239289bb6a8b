use chrono::{DateTime, Datelike, Utc};

use crate::persona::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
}

pub static FOCUS_AREAS: &[&str] = &[
    "Medical Device Marketing",
    "Strategic Product Launch",
    "Global Market Development",
    "Innovation Process Optimization",
];

pub fn footer(persona: Persona) -> &'static Footer {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}

static PROFESSIONAL: Footer = Footer {
    tagline: "Transforming medical technology into life-saving success through patient-focused innovation.",
    location: "Bloomington, Indiana",
    email: "contact@pkoduri.com",
    linkedin: "linkedin.com/in/pkoduri",
};

static DISRUPTOR: Footer = Footer {
    tagline: "Advancing medical innovation through process excellence and organizational efficiency.",
    location: "Bloomington, Indiana",
    email: "contact@pkoduri.com",
    linkedin: "linkedin.com/in/pkoduri",
};

/// Year shown in the copyright line: the year the site was built.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|built| built.year())
        .unwrap_or_else(|_| Utc::now().year())
}
