// src/modules/content/domain/templates.rs
//! Static content shown before (or instead of) a successful remote fetch.

use super::entities::{
    AboutData, AboutSection, CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry,
    PersonalInfo, PortfolioData, PortfolioItem, Project, Skill, SkillsSection, SocialLink,
    Timeline,
};

pub const PROJECT_CATEGORIES: [&str; 5] = [
    "all",
    "web development",
    "app development",
    "software development",
    "other",
];

fn social(name: &str, icon: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        icon: icon.to_string(),
        url: url.to_string(),
    }
}

fn default_social_links() -> Vec<SocialLink> {
    vec![
        social("GitHub", "github", "https://github.com/"),
        social("LinkedIn", "linkedin", "https://linkedin.com/"),
        social("Twitter", "twitter", "https://twitter.com/"),
    ]
}

pub fn info_template() -> PersonalInfo {
    PersonalInfo {
        name: "Abdullah Ahmad".to_string(),
        designation: "Developer".to_string(),
        email: "abdullah@example.com".to_string(),
        phone: "+1 (234) 567-8900".to_string(),
        whatsapp: "+1 (234) 567-8900".to_string(),
        discord: "abdullah.dev".to_string(),
        social_links: default_social_links(),
    }
}

pub fn contact_template() -> ContactInfo {
    ContactInfo {
        email: "abdullah@example.com".to_string(),
        phone: "+1 (234) 567-8900".to_string(),
        address: "123 Developer Street, Tech City, 12345".to_string(),
        social_links: default_social_links(),
    }
}

pub fn about_template() -> AboutData {
    AboutData {
        about: AboutSection {
            title: "About Me".to_string(),
            content: "I build software for the web and beyond.\n\n\
                      This section is loading; check back in a moment."
                .to_string(),
        },
        skills: SkillsSection {
            title: "Skills".to_string(),
            technical: vec![
                Skill {
                    name: "JavaScript".to_string(),
                    level: 90.0,
                },
                Skill {
                    name: "React".to_string(),
                    level: 85.0,
                },
                Skill {
                    name: "Node.js".to_string(),
                    level: 80.0,
                },
            ],
            soft: vec!["Communication".to_string(), "Teamwork".to_string()],
            languages: vec!["English".to_string()],
        },
        education: Timeline {
            title: "Education".to_string(),
            timeline: vec![EducationEntry {
                degree: "BSc Computer Science".to_string(),
                institution: "University".to_string(),
                year: "2020 - 2024".to_string(),
                description: String::new(),
            }],
        },
        experience: Timeline {
            title: "Experience".to_string(),
            timeline: vec![ExperienceEntry {
                position: "Software Developer".to_string(),
                company: "Company".to_string(),
                year: "2024 - Present".to_string(),
                description: String::new(),
                achievements: Vec::new(),
            }],
        },
        certifications: Timeline {
            title: "Certifications".to_string(),
            timeline: Vec::<CertificationEntry>::new(),
        },
    }
}

pub fn portfolio_template() -> PortfolioData {
    PortfolioData {
        title: "Portfolio".to_string(),
        description: "Selected work.".to_string(),
        items: vec![PortfolioItem {
            title: "Portfolio".to_string(),
            description: "Work samples are loading.".to_string(),
            image: "/api/placeholder/600/400".to_string(),
            category: "web development".to_string(),
            url: None,
        }],
    }
}

fn demo(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    languages: &[&str],
    link: &str,
    read_more: Option<&str>,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        image: "/api/placeholder/600/400".to_string(),
        category: category.to_string(),
        languages: languages.iter().map(|l| l.to_string()).collect(),
        link: Some(link.to_string()).filter(|l| !l.is_empty()),
        read_more: read_more.map(str::to_string),
    }
}

/// Demo data backing the Projects view; it is never fetched.
pub fn demo_projects() -> Vec<Project> {
    vec![
        demo(
            1,
            "E-commerce Platform",
            "A full-featured online shopping platform with user authentication, product catalog, cart, and payment integration.",
            "web development",
            &["JavaScript", "React", "Node.js", "MongoDB"],
            "https://example.com/ecommerce",
            Some("abcd.com"),
        ),
        demo(
            2,
            "Fitness Tracker App",
            "Mobile application for tracking workouts, nutrition, and personal fitness goals with analytics dashboard.",
            "app development",
            &["React Native", "Firebase", "Redux"],
            "https://example.com/fitness-app",
            None,
        ),
        demo(
            3,
            "Inventory Management System",
            "Desktop software for small businesses to manage inventory, sales, and generate reports.",
            "software development",
            &["Python", "SQLite", "PyQt"],
            "",
            Some("abcd.com"),
        ),
        demo(
            4,
            "AI-Driven Chatbot",
            "Intelligent customer service chatbot trained on company-specific data to handle customer inquiries.",
            "other",
            &["Python", "TensorFlow", "NLP"],
            "https://example.com/chatbot",
            Some("abcd.com"),
        ),
        demo(
            5,
            "Projects Website Template",
            "Responsive and customizable projects website template for developers and designers.",
            "web development",
            &["HTML", "CSS", "JavaScript"],
            "https://example.com/projects-template",
            None,
        ),
        demo(
            6,
            "Task Management Mobile App",
            "Cross-platform mobile application for managing tasks, projects, and team collaboration.",
            "app development",
            &["Flutter", "Dart", "Firebase"],
            "https://example.com/task-app",
            Some("abcd.com"),
        ),
        demo(
            7,
            "Data Visualization Dashboard",
            "Interactive dashboard for visualizing complex datasets with filtering and export capabilities.",
            "web development",
            &["React", "D3.js", "Node.js"],
            "",
            Some("abcd.com"),
        ),
        demo(
            8,
            "Point of Sale System",
            "Comprehensive POS system for retail businesses with inventory tracking and sales analytics.",
            "software development",
            &["C#", ".NET", "SQL Server"],
            "https://example.com/pos-system",
            None,
        ),
    ]
}
