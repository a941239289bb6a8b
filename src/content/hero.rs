use crate::persona::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub fn hero(persona: Persona) -> &'static Hero {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}

/// Short role line shown next to the logo in the navigation bar.
pub fn nav_tagline(persona: Persona) -> &'static str {
    match persona {
        Persona::Professional => "Patient-Focused Innovation Leader",
        Persona::Disruptor => "Innovation Catalyst",
    }
}

static PROFESSIONAL: Hero = Hero {
    badge: "Patient-Focused Innovation Leader",
    title: "Breakthrough medical technologies should reach every patient who needs them",
    subtitle: "Most medical innovations fail not because of the science, but because of the strategy. I architect the bridge between life-saving discoveries and the patients whose lives depend on them.",
};

static DISRUPTOR: Hero = Hero {
    badge: "AI Innovation Pioneer & Digital Transformation Leader",
    title: "Revolutionizing Medical Device Marketing with AI Innovation",
    subtitle: "Digital Frontier Award recipient pioneering enterprise AI adoption. Leading AI transformation across marketing workflows while accelerating medical innovation delivery to patients worldwide.",
};
