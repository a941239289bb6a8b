use crate::persona::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct About {
    pub subtitle: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn about(persona: Persona) -> &'static About {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}

// the career facts are the same whichever story is told around them
pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Education",
        description: "MBA Marketing & Strategy, Indiana University Kelley School",
    },
    Highlight {
        title: "Experience",
        description: "Cook Medical, Lexmark International, Multiple Startups",
    },
    Highlight {
        title: "Expertise",
        description: "Product Launch, Strategic Marketing, Global Expansion",
    },
    Highlight {
        title: "Impact",
        description: "Worldwide patient outcomes improvement",
    },
];

static PROFESSIONAL: About = About {
    subtitle: "A methodical leader focused on patient outcomes, with 15+ years systematically bringing breakthrough medical technologies to patients who need them most.",
    paragraphs: &[
        "My career centers on ensuring breakthrough medical technologies reach every patient who needs them. From launching the first FDA-approved fenestrated endograft to managing $250M+ portfolios, I focus on systematic execution that delivers 95.5% clinical success rates.",
        "My approach combines rigorous clinical training, from OR support to physician education programs, with strategic marketing expertise gained through my MBA from Indiana University's Kelley School of Business.",
        "Whether developing Advanced Clinical Specialist programs, creating 2-day physician workshops for FDA compliance, or building global market strategies, every initiative serves one goal: improving patient outcomes through proven medical device adoption.",
    ],
};

static DISRUPTOR: About = About {
    subtitle: "A process improvement leader who streamlines organizational efficiency, with 15+ years modernizing medical innovation practices in established healthcare organizations.",
    paragraphs: &[
        "I modernize processes that slow medical innovation. While traditional planning cycles take 90 days, I've streamlined development timelines to 5 days using design sprint methodologies adapted from technology industry best practices.",
        "My dual-role appointments across MedSurg and Vascular divisions improve cross-functional collaboration. I've helped teams transition from traditional processes to more efficient workflows that maintain regulatory compliance while accelerating delivery.",
        "From launching products ahead of schedule to coordinating marketing functions across four separate business units, I create operational advantages through improved efficiency while preserving the clinical excellence patients deserve.",
    ],
};
