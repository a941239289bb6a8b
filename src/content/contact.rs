use crate::persona::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: &'static [ContactDetail],
    pub quick_facts: &'static [QuickFact],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickFact {
    pub label: &'static str,
    pub value: &'static str,
}

pub fn contact(persona: Persona) -> &'static Contact {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}

static DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "pkoduri@gmail.com",
        href: Some("mailto:pkoduri@gmail.com"),
    },
    ContactDetail {
        label: "Phone",
        value: "(812) 606-0365",
        href: Some("tel:+18126060365"),
    },
    ContactDetail {
        label: "Location",
        value: "Bloomington, IN",
        href: None,
    },
];

static QUICK_FACTS: &[QuickFact] = &[
    QuickFact {
        label: "Response Time:",
        value: "Within 24 hours",
    },
    QuickFact {
        label: "Availability:",
        value: "Immediate",
    },
    QuickFact {
        label: "Preferred Contact:",
        value: "Email",
    },
];

static PROFESSIONAL: Contact = Contact {
    title: "Let's Connect",
    subtitle: "Ready to discuss how strategic marketing expertise can drive your medical device innovation forward?",
    details: DETAILS,
    quick_facts: QUICK_FACTS,
};

static DISRUPTOR: Contact = Contact {
    title: "Let's Connect",
    subtitle: "Ready to explore how AI-driven marketing transformation can accelerate your medical device innovation?",
    details: DETAILS,
    quick_facts: QUICK_FACTS,
};
