// src/modules/sections/about.rs
use tracing::warn;

use crate::content::domain::entities::AboutData;
use crate::content::domain::templates::about_template;
use crate::sections::task::{SectionTask, SectionUpdate};
use crate::shared::markup::{capitalize, escape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    About,
    Skills,
    Education,
    Experience,
    Certificates,
}

impl AboutTab {
    pub const ALL: [AboutTab; 5] = [
        AboutTab::About,
        AboutTab::Skills,
        AboutTab::Education,
        AboutTab::Experience,
        AboutTab::Certificates,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AboutTab::About => "about",
            AboutTab::Skills => "skills",
            AboutTab::Education => "education",
            AboutTab::Experience => "experience",
            AboutTab::Certificates => "certificates",
        }
    }

    /// Unknown keys fall back to the about tab.
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct AboutView {
    data: AboutData,
    active: AboutTab,
}

impl Default for AboutView {
    fn default() -> Self {
        Self::new()
    }
}

impl AboutView {
    pub fn new() -> Self {
        Self {
            data: about_template(),
            active: AboutTab::default(),
        }
    }

    pub fn initial_task(&self) -> SectionTask {
        SectionTask::LoadAbout
    }

    pub fn data(&self) -> &AboutData {
        &self.data
    }

    pub fn active_tab(&self) -> AboutTab {
        self.active
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        if let SectionUpdate::About(result) = update {
            match result {
                Ok(data) => self.data = data,
                Err(e) => warn!(error = %e, "Failed to load about data, keeping template"),
            }
        }
    }

    /// Pure client-side switch; no fetch per tab.
    pub fn select_tab(&mut self, tab: AboutTab) {
        self.active = tab;
    }

    pub fn render(&self) -> String {
        let mut html = String::from(r#"<section class="about"><nav class="about-tabs">"#);
        for tab in AboutTab::ALL {
            let class = if tab == self.active { "active" } else { "" };
            html.push_str(&format!(
                r#"<button class="{}" data-tab="{}">{}</button>"#,
                class,
                tab.key(),
                capitalize(tab.key())
            ));
        }
        html.push_str("</nav>");

        html.push_str(&match self.active {
            AboutTab::About => self.render_about(),
            AboutTab::Skills => self.render_skills(),
            AboutTab::Education => self.render_education(),
            AboutTab::Experience => self.render_experience(),
            AboutTab::Certificates => self.render_certificates(),
        });

        html.push_str("</section>");
        html
    }

    fn render_about(&self) -> String {
        let paragraphs: String = self
            .data
            .about
            .content
            .split("\n\n")
            .map(|p| format!("<p>{}</p>", escape(p)))
            .collect();
        format!("<h3>{}</h3>{}", escape(&self.data.about.title), paragraphs)
    }

    fn render_skills(&self) -> String {
        let skills = &self.data.skills;
        let technical: String = skills
            .technical
            .iter()
            .map(|skill| {
                format!(
                    r#"<div class="skill"><span>{name}</span><span>{level}%</span><div class="bar" style="width: {level}%"></div></div>"#,
                    name = escape(&skill.name),
                    level = skill.level
                )
            })
            .collect();
        let chips = |items: &[String]| -> String {
            items
                .iter()
                .map(|item| format!("<span>{}</span>", escape(item)))
                .collect()
        };

        format!(
            "<h3>{}</h3><h4>Technical Skills</h4>{}<h4>Soft Skills</h4>{}<h4>Languages</h4>{}",
            escape(&skills.title),
            technical,
            chips(&skills.soft),
            chips(&skills.languages)
        )
    }

    fn render_education(&self) -> String {
        let items: String = self
            .data
            .education
            .timeline
            .iter()
            .map(|item| {
                format!(
                    "<article><h4>{}</h4><p>{}</p><p>{}</p><p>{}</p></article>",
                    escape(&item.degree),
                    escape(&item.institution),
                    escape(&item.year),
                    escape(&item.description)
                )
            })
            .collect();
        format!("<h3>{}</h3>{}", escape(&self.data.education.title), items)
    }

    fn render_experience(&self) -> String {
        let items: String = self
            .data
            .experience
            .timeline
            .iter()
            .map(|item| {
                let achievements: String = item
                    .achievements
                    .iter()
                    .map(|a| format!("<li>{}</li>", escape(a)))
                    .collect();
                format!(
                    "<article><h4>{}</h4><p>{}</p><p>{}</p><p>{}</p><p>Key Achievements:</p><ul>{}</ul></article>",
                    escape(&item.position),
                    escape(&item.company),
                    escape(&item.year),
                    escape(&item.description),
                    achievements
                )
            })
            .collect();
        format!("<h3>{}</h3>{}", escape(&self.data.experience.title), items)
    }

    fn render_certificates(&self) -> String {
        let items: String = self
            .data
            .certifications
            .timeline
            .iter()
            .map(|cert| {
                let mut links = String::new();
                if let Some(url) = cert.url.as_deref().filter(|u| !u.is_empty()) {
                    links.push_str(&format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer">View Certificate</a>"#,
                        escape(url)
                    ));
                }
                if let Some(url) = cert.see_more_url.as_deref().filter(|u| !u.is_empty()) {
                    links.push_str(&format!(r#"<a href="{}">See More</a>"#, escape(url)));
                }
                format!(
                    "<article><h4>{}</h4><p>{}</p><p>{}</p><p>{}</p>{}</article>",
                    escape(&cert.name),
                    escape(&cert.institution),
                    escape(&cert.year),
                    escape(&cert.description),
                    links
                )
            })
            .collect();
        format!(
            "<h3>{}</h3>{}",
            escape(&self.data.certifications.title),
            items
        )
    }
}
