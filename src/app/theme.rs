use crate::persona::Persona;

/// Tailwind classes that differ between the two personas.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub page: &'static str,
    pub section: &'static str,
    pub section_alt: &'static str,
    pub card: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub badge: &'static str,
    pub button: &'static str,
    pub button_outline: &'static str,
    pub input: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
}

const PROFESSIONAL: Palette = Palette {
    page: "bg-white text-gray-900",
    section: "bg-white",
    section_alt: "bg-gray-50",
    card: "bg-white border border-gray-200 shadow-sm",
    heading: "text-gray-900",
    body: "text-gray-700",
    muted: "text-gray-500",
    accent: "text-blue-600",
    badge: "bg-blue-50 text-blue-700 border border-blue-200",
    button: "bg-blue-600 hover:bg-blue-700 text-white",
    button_outline: "border border-blue-600 text-blue-600 hover:bg-blue-50",
    input: "bg-white border border-gray-300 text-gray-900 focus:ring-blue-500",
    nav: "bg-white/95 border-gray-200",
    nav_link: "text-gray-600 hover:text-blue-600",
};

const DISRUPTOR: Palette = Palette {
    page: "bg-gray-900 text-white",
    section: "bg-gray-900",
    section_alt: "bg-gray-800",
    card: "bg-gray-800 border border-gray-700",
    heading: "text-white",
    body: "text-gray-300",
    muted: "text-gray-400",
    accent: "text-orange-400",
    badge: "bg-orange-500/10 text-orange-400 border border-orange-500/30",
    button: "bg-orange-500 hover:bg-orange-600 text-white",
    button_outline: "border border-orange-400 text-orange-400 hover:bg-gray-800",
    input: "bg-gray-900 border border-gray-600 text-white focus:ring-orange-400",
    nav: "bg-gray-900/95 border-gray-700",
    nav_link: "text-gray-300 hover:text-orange-400",
};

pub fn palette(persona: Persona) -> &'static Palette {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}
