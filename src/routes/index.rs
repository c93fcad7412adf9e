use axum::{extract::State, response::IntoResponse};
use folio_contact::ProjectType;
use strum::VariantArray;

use crate::routes::AppState;
use crate::template;

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub detail: &'static str,
}

pub struct Achievement {
    pub title: &'static str,
    pub event: &'static str,
    pub year: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

const TECH_STACK: &[&str] = &[
    "Rust",
    "TypeScript",
    "React",
    "Python",
    "PostgreSQL",
    "PyTorch",
    "Docker",
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Ledgerline",
        summary: "Real-time analytics dashboard for a fintech startup, from ingestion to charts.",
        tags: &["Dashboard / Analytics", "API Integration"],
    },
    Project {
        title: "Shopfront",
        summary: "Headless storefront with checkout, inventory sync and order notifications.",
        tags: &["Web App", "Auth & Forms"],
    },
    Project {
        title: "Docguide",
        summary: "Retrieval-augmented chatbot answering questions over product documentation.",
        tags: &["Chatbot (RAG)", "Inference API"],
    },
    Project {
        title: "Atelier",
        summary: "Portfolio and booking site for a photography studio.",
        tags: &["Portfolio / Landing Page", "Website"],
    },
];

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2018 - 2022",
        title: "B.Tech, Computer Science",
        place: "Institute of Technology",
        detail: "Systems programming, databases and a growing obsession with type systems.",
    },
    TimelineEntry {
        period: "2022 - 2023",
        title: "M.Sc, Machine Learning",
        place: "University Graduate School",
        detail: "Applied deep learning, model serving and MLOps coursework.",
    },
    TimelineEntry {
        period: "2023 - present",
        title: "Independent studio",
        place: "Remote",
        detail: "Building websites, dashboards and ML integrations for clients worldwide.",
    },
];

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Winner, national hackathon",
        event: "Smart Infrastructure Challenge",
        year: "2023",
    },
    Achievement {
        title: "Best ML project award",
        event: "Graduate research showcase",
        year: "2023",
    },
    Achievement {
        title: "Open-source maintainer",
        event: "Charting library, 2k+ stars",
        year: "2024",
    },
];

const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        href: "https://github.com/folio-studio",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/company/folio-studio",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/folio.studio",
    },
];

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub owner_name: String,
    pub contact_email: String,
    pub tech_stack: &'static [&'static str],
    pub projects: &'static [Project],
    pub timeline: &'static [TimelineEntry],
    pub achievements: &'static [Achievement],
    pub socials: &'static [SocialLink],
    pub project_types: Vec<&'static str>,
}

pub async fn page(State(app): State<AppState>) -> impl IntoResponse {
    template::render(IndexTemplate {
        owner_name: app.config.site.owner_name.clone(),
        contact_email: app.config.site.contact_email.clone(),
        tech_stack: TECH_STACK,
        projects: PROJECTS,
        timeline: TIMELINE,
        achievements: ACHIEVEMENTS,
        socials: SOCIALS,
        project_types: ProjectType::VARIANTS.iter().map(|t| t.as_ref()).collect(),
    })
}
