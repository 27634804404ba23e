//! Built-in content used to seed an empty store on first read.

use crate::content::{Experience, Project};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Default project showcase.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Financial Dashboard".to_string(),
            category: "Web Application".to_string(),
            description: "A high-performance analytics dashboard for real-time financial data visualization.".to_string(),
            long_description: Some(
                "A comprehensive financial analytics platform designed for high-frequency trading firms. \
                 The challenge was to render thousands of data points in real-time without compromising UI \
                 performance. Utilized Web Workers for data processing and D3.js for canvas-based rendering \
                 to achieve 60fps updates."
                    .to_string(),
            ),
            client: Some("FinTech Global".to_string()),
            year: Some("2023".to_string()),
            image: "https://picsum.photos/800/600?random=1".to_string(),
            gallery: Some(strings(&[
                "https://picsum.photos/800/600?random=10",
                "https://picsum.photos/800/600?random=11",
                "https://picsum.photos/800/600?random=12",
            ])),
            technologies: strings(&["React", "TypeScript", "D3.js", "Tailwind"]),
            link: "#".to_string(),
        },
        Project {
            id: 2,
            title: "E-Commerce Core".to_string(),
            category: "System Architecture".to_string(),
            description: "Headless commerce solution built for scalability and speed.".to_string(),
            long_description: Some(
                "Re-architected the frontend layer for a major fashion retailer. Moved from a monolithic \
                 architecture to a composable commerce setup using Next.js and GraphQL. This resulted in a \
                 40% increase in page load speed and a 15% uplift in conversion rates during the first \
                 quarter of launch."
                    .to_string(),
            ),
            client: Some("Vogue Retail".to_string()),
            year: Some("2022".to_string()),
            image: "https://picsum.photos/800/600?random=2".to_string(),
            gallery: Some(strings(&[
                "https://picsum.photos/800/600?random=20",
                "https://picsum.photos/800/600?random=21",
            ])),
            technologies: strings(&["Next.js", "GraphQL", "Node.js", "Redis"]),
            link: "#".to_string(),
        },
        Project {
            id: 3,
            title: "AI Content Generator".to_string(),
            category: "AI Integration".to_string(),
            description: "Generative text and image platform leveraging large language models.".to_string(),
            long_description: Some(
                "An internal tool developed for a marketing agency to automate ad copy and asset generation. \
                 Integrated an LLM API for text reasoning and stable diffusion models for image placement. \
                 Features include context-aware prompting and a drag-and-drop canvas editor."
                    .to_string(),
            ),
            client: Some("AdCreate Agency".to_string()),
            year: Some("2024".to_string()),
            image: "https://picsum.photos/800/600?random=3".to_string(),
            gallery: Some(strings(&[
                "https://picsum.photos/800/600?random=30",
                "https://picsum.photos/800/600?random=31",
                "https://picsum.photos/800/600?random=32",
                "https://picsum.photos/800/600?random=33",
            ])),
            technologies: strings(&["LLM API", "React", "Python", "FastAPI"]),
            link: "#".to_string(),
        },
        Project {
            id: 4,
            title: "Architectural Portfolio".to_string(),
            category: "Design Implementation".to_string(),
            description: "Minimalist portfolio site focusing on heavy imagery and typography.".to_string(),
            long_description: Some(
                "A portfolio website for an award-winning architect. The design philosophy followed 'Swiss \
                 Style' principles: grid-based layouts, sans-serif typography, and whitespace. Implemented \
                 custom smooth scrolling and complex page transitions using GSAP."
                    .to_string(),
            ),
            client: Some("Studio Archi".to_string()),
            year: Some("2021".to_string()),
            image: "https://picsum.photos/800/600?random=4".to_string(),
            gallery: Some(strings(&[
                "https://picsum.photos/800/600?random=40",
                "https://picsum.photos/800/600?random=41",
            ])),
            technologies: strings(&["Vue.js", "GSAP", "SCSS", "Prismic"]),
            link: "#".to_string(),
        },
    ]
}

/// Default work history.
pub fn default_experiences() -> Vec<Experience> {
    vec![
        Experience {
            id: 1,
            role: "Senior Frontend Engineer".to_string(),
            company: "TechFlow Solutions".to_string(),
            period: "2021 - Present".to_string(),
            description: "Leading the frontend team in migrating legacy architecture to modern React stack. \
                          Improved performance by 40%."
                .to_string(),
            image: None,
        },
        Experience {
            id: 2,
            role: "Frontend Developer".to_string(),
            company: "Creative Pulse".to_string(),
            period: "2019 - 2021".to_string(),
            description: "Developed interactive marketing campaigns and high-fidelity web applications for \
                          global brands."
                .to_string(),
            image: None,
        },
        Experience {
            id: 3,
            role: "UI/UX Designer & Dev".to_string(),
            company: "Freelance".to_string(),
            period: "2017 - 2019".to_string(),
            description: "Bridged the gap between design and code, delivering pixel-perfect implementation \
                          for startups."
                .to_string(),
            image: None,
        },
    ]
}
