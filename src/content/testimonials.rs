use crate::persona::Persona;

pub const TESTIMONIALS_TITLE: &str = "Key Achievements & Results";
pub const TESTIMONIALS_SUBTITLE: &str =
    "Quantifiable outcomes from P.K. Koduri's strategic marketing leadership at Cook Medical.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub title: &'static str,
    pub metric: &'static str,
    pub description: &'static str,
}

pub fn testimonials(persona: Persona) -> &'static [Testimonial] {
    match persona {
        Persona::Professional => PROFESSIONAL,
        Persona::Disruptor => DISRUPTOR,
    }
}

static PROFESSIONAL: &[Testimonial] = &[
    Testimonial {
        title: "Zenith Fenestrated Program Excellence",
        metric: "95.5% Freedom from Mortality",
        description: "Built comprehensive training ecosystem with 2-day physician workshops and proctor programs for the first FDA-approved fenestrated endograft. Over 90 accounts trained in Phase I with 30% year-over-year EVAR growth.",
    },
    Testimonial {
        title: "Global Patient Access Expansion",
        metric: "High Single-Digit Market Growth",
        description: "Extended fenestrated EVAR therapy globally across Europe, Canada, and Asia-Pacific. Captured significant market share gains in complex AAA segment, making life-saving therapy accessible to thousands of patients worldwide.",
    },
    Testimonial {
        title: "Clinical Training Infrastructure",
        metric: "Custom CRM System Built",
        description: "Developed Quickbase CRM system to track every fenestrated case from initial plan to implant. Monitored physician training status, order lead times, and outcomes to ensure only certified physicians received grafts.",
    },
];

static DISRUPTOR: &[Testimonial] = &[
    Testimonial {
        title: "TeslaTome Strategy Development",
        metric: "Go-to-Market Framework",
        description: "Led multiple design sprints developing comprehensive go-to-market strategy for breakthrough ERCP technology. Orchestrated cross-functional teams using agile methodology while coordinating marketing claims strategy for US, Japan, and EU regulatory pathways.",
    },
    Testimonial {
        title: "Design Sprint Innovation",
        metric: "5-Day Development Cycles",
        description: "Introduced modern design sprint methodology to medical device marketing, adapting 5-day intensive workshops for corporate culture. Created agile deployment teams that efficiently transition between high-priority projects without waiting for annual planning cycles.",
    },
    Testimonial {
        title: "NEST-VT Brand Enhancement",
        metric: "Reproductive Health Innovation",
        description: "Enhanced women's health product branding through creative sprints, developing new messaging and visual identity for oocyte cryopreservation success. Re-engaged sales teams around previously under-marketed reproductive medicine technology.",
    },
];
