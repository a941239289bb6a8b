use crate::persona::Persona;

pub const CASE_STUDIES_TITLE: &str = "Implementation Case Studies";
pub const CASE_STUDIES_SUBTITLE: &str = "Deep-dive analysis of methodologies, frameworks, and systematic approaches that drive measurable results.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub metrics: &'static [&'static str],
}

pub fn case_studies(persona: Persona) -> &'static [CaseStudy] {
    match persona {
        Persona::Professional => PROFESSIONAL,
        Persona::Disruptor => DISRUPTOR,
    }
}

static PROFESSIONAL: &[CaseStudy] = &[
    CaseStudy {
        badge: "Implementation Deep-Dive",
        title: "Clinical Data Management: Fenestrated Program Database Architecture",
        description: "Architected comprehensive case management system tracking every fenestrated procedure from initial planning to patient outcomes. Integrated physician certification status, order processing workflows, and real-time performance metrics, creating scalable foundation for clinical program expansion still operational today.",
        metrics: &[
            "End-to-End Case Tracking",
            "Real-Time Analytics",
            "Scalable Architecture",
        ],
    },
    CaseStudy {
        badge: "Global Expansion Strategy",
        title: "Strategic Market Analysis: EVAR Center Opportunity Mapping",
        description: "Developed systematic approach for identifying high-volume EVAR centers across multiple markets. Created data-driven opportunity mapping methodology that enabled targeted expansion of complex aneurysm treatment access, resulting in strategic market penetration framework adopted company-wide.",
        metrics: &[
            "Data-Driven Targeting",
            "Strategic Framework",
            "Market Intelligence",
        ],
    },
    CaseStudy {
        badge: "Training Innovation",
        title: "Physician Workshop Methodology: Accelerated Competency Model",
        description: "Designed intensive 2-day workshop format that compressed months of traditional training into focused competency development. Recruited leading vascular surgeons as proctors and established certification pathways that became industry standard for complex device education.",
        metrics: &[
            "Accelerated Learning",
            "Industry Standards",
            "Competency Certification",
        ],
    },
];

static DISRUPTOR: &[CaseStudy] = &[
    CaseStudy {
        badge: "Workflow Transformation",
        title: "Content Generation Revolution: From Hours to Minutes",
        description: "Pioneered systematic approach to AI-powered content creation, transforming marketing workflows from multi-hour manual processes to AI-assisted rapid development. Established quality control frameworks ensuring accuracy while achieving 18x speed improvements in campaign material production.",
        metrics: &[
            "18x Speed Improvement",
            "Quality Frameworks",
            "Process Innovation",
        ],
    },
    CaseStudy {
        badge: "Custom Solution Development",
        title: "Emma AI Architecture: Persona-Driven Marketing Engine",
        description: "Engineered custom AI assistant 'Emma' from ground up, designing persona-specific content generation capabilities. Built intelligent system capable of adapting messaging for distinct healthcare buyer personas with consistent brand voice and strategic alignment.",
        metrics: &[
            "Custom AI Engineering",
            "Persona Intelligence",
            "Brand Consistency",
        ],
    },
    CaseStudy {
        badge: "Enterprise Strategy Implementation",
        title: "AI Adoption Framework: From Pilot to Organization-Wide Deployment",
        description: "Architected comprehensive change management framework for enterprise AI transformation, bridging technical capabilities with strategic business applications. Created advanced training methodologies, feedback systems, and success metrics that enabled organization-wide AI adoption achieving 18x workflow acceleration.",
        metrics: &[
            "Change Management",
            "Training Systems",
            "Organizational Impact",
        ],
    },
];
