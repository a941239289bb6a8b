use crate::persona::Persona;

pub const LANDING_TITLE: &str = "Choose Your Leadership Journey";
pub const LANDING_SUBTITLE: &str = "Two leadership styles, one exceptional professional. Which resonates with your approach to medical device innovation?";

/// Choice card shown on the persona selection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub title: &'static str,
    pub pitch: &'static str,
    pub highlights: &'static [&'static str],
    pub call_to_action: &'static str,
}

pub fn landing(persona: Persona) -> &'static Landing {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}

static PROFESSIONAL: Landing = Landing {
    title: "The Patient-Focused Leader",
    pitch: "The methodical strategist who believes breakthrough medical technologies should reach every patient who needs them.",
    highlights: &[
        "Patient-centered mission",
        "Proven methodology & systems",
        "95.5% clinical success rates",
        "Global market expansion",
    ],
    call_to_action: "Meet Professional P.K.",
};

static DISRUPTOR: Landing = Landing {
    title: "The Innovation Catalyst",
    pitch: "The AI pioneer who transforms traditional marketing workflows through technology innovation and strategic process optimization.",
    highlights: &[
        "Digital Frontier Award recipient",
        "Enterprise AI transformation leader",
        "18x faster AI-powered workflows",
        "Custom AI assistant architect",
    ],
    call_to_action: "Meet AI Pioneer P.K.",
};
