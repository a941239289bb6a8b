use crate::persona::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn stats(persona: Persona) -> &'static [Stat] {
    match persona {
        Persona::Professional => PROFESSIONAL,
        Persona::Disruptor => DISRUPTOR,
    }
}

static PROFESSIONAL: &[Stat] = &[
    Stat {
        value: "15+",
        label: "Years Patient-Focused Innovation",
    },
    Stat {
        value: "$250M+",
        label: "Portfolio Impact on Patient Care",
    },
    Stat {
        value: "95.5%",
        label: "Clinical Success Rates Achieved",
    },
    Stat {
        value: "Global",
        label: "Patient Access Expansion",
    },
];

static DISRUPTOR: &[Stat] = &[
    Stat {
        value: "Award",
        label: "Digital Frontier AI Leadership",
    },
    Stat {
        value: "$250M+",
        label: "Portfolio Disruption Impact",
    },
    Stat {
        value: "18x",
        label: "Faster AI-Powered Workflows",
    },
    Stat {
        value: "Enterprise",
        label: "AI Adoption Pioneer",
    },
];
