use crate::persona::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub entries: &'static [Achievement],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub period: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub fn timeline(persona: Persona) -> &'static Timeline {
    match persona {
        Persona::Professional => &PROFESSIONAL,
        Persona::Disruptor => &DISRUPTOR,
    }
}

static PROFESSIONAL: Timeline = Timeline {
    title: "Career Journey: Patient-Focused Milestones",
    subtitle: "A systematic progression through medical device marketing, with each role building deeper expertise in bringing life-saving technologies to patients worldwide.",
    entries: &[
        Achievement {
            period: "2010-2011",
            title: "Clinical Foundation Building",
            description: "Started as Clinical Specialist conducting in-service training for OR and office staff in vascular surgery departments. Provided technical support in OR, assisted surgeons in planning procedures, and represented Cook Medical at regional conferences.",
            tags: &["Clinical Training", "OR Support", "Medical Education"],
        },
        Achievement {
            period: "2011-2014",
            title: "Zenith Fenestrated FDA Success",
            description: "Successfully launched the first FDA-approved fenestrated abdominal endograft in the US as Product Manager. Met all post-launch objectives including revenue and market share targets for FY2013. Developed Advanced Clinical Specialist program and 2-day physician workshops for FDA compliance.",
            tags: &["FDA Launch", "Clinical Programs", "Patient Outcomes"],
        },
        Achievement {
            period: "2014-2016",
            title: "Strategic Healthcare Planning",
            description: "As Manager of Strategic Projects, developed health economics framework for global product development. Created seal zone education campaigns and conducted cardiothoracic specialty due diligence to expand patient access to life-saving technologies.",
            tags: &["Health Economics", "Patient Access", "Strategic Planning"],
        },
        Achievement {
            period: "2017-2018",
            title: "$250M+ Patient Impact Portfolio",
            description: "Owned global marketing mix for $250+ Million portfolio of life-saving endografts. Achieved high single-digit market share growth, directly expanding patient access to critical vascular interventions worldwide.",
            tags: &["Patient Impact", "Global Reach", "Clinical Success"],
        },
        Achievement {
            period: "2021-Present",
            title: "Dual-Division Patient Impact Leadership",
            description: "Unique joint appointment across MedSurg and Vascular Divisions created in partnership with Cook leadership. Led comprehensive patient-focused initiatives including TeslaTome ERCP go-to-market strategy development, NEST-VT reproductive health improvements, and Account Integration program ensuring unified patient care approach.",
            tags: &[
                "Patient-Centered Care",
                "Cross-Division Leadership",
                "Integrated Patient Solutions",
            ],
        },
    ],
};

static DISRUPTOR: Timeline = Timeline {
    title: "Disruption Timeline: Organizational Breakthroughs",
    subtitle: "A track record of organizational disruption, consistently breaking traditional models to accelerate medical innovation while maintaining regulatory excellence.",
    entries: &[
        Achievement {
            period: "2008-2010",
            title: "Startup Disruption Experience",
            description: "Developed SaaS product GatherWare to harness collective intelligence, successfully implementing for 150+ engineers at global manufacturing company. Improved production efficiency and enabled new product development through innovation management.",
            tags: &["SaaS Innovation", "Process Disruption", "Efficiency Gains"],
        },
        Achievement {
            period: "2010-2014",
            title: "Breaking Traditional Launch Models",
            description: "Shattered conventional medical device launch timelines by pioneering the first FDA-approved fenestrated endograft launch. Disrupted standard training models with intensive 2-day workshops that compressed months of education into accelerated programs.",
            tags: &["Launch Disruption", "Training Revolution", "Speed Innovation"],
        },
        Achievement {
            period: "2014-2018",
            title: "Portfolio Dominance Strategy",
            description: "Owned marketing strategy development for $250M+ endograft portfolio, achieving high single-digit market share growth against entrenched competitors. Pioneered market disruption tactics that positioned organization ahead of traditional device manufacturers.",
            tags: &[
                "Portfolio Strategy",
                "Market Disruption",
                "Competitive Leadership",
            ],
        },
        Achievement {
            period: "2018-2020",
            title: "Strategic Future Planning Leadership",
            description: "Led horizon-scanning project analyzing industry trends to develop future healthcare scenarios. Created strategic playbooks with recommendations for AI, robotics, and additive manufacturing partnerships, positioning the organization ahead of technological advancement.",
            tags: &["Future Planning", "Tech Integration", "Strategic Advantage"],
        },
        Achievement {
            period: "2023-Present",
            title: "AI Innovation Leadership & Digital Transformation",
            description: "Pioneer in enterprise AI adoption, earning Digital Frontier Award (November 2024) for architecting organization-wide AI transformation across marketing workflows. Leading contributor and strategic leader in Marketing Generative AI Workgroup, shaping organizational AI approach. Developed custom AI assistant 'Emma' for personalized marketing content. Finalist in LoopTech CEO Innovation Challenge.",
            tags: &["AI Leadership", "Digital Transformation", "Innovation Awards"],
        },
    ],
};
