// src/modules/sections/info.rs
use tracing::warn;

use crate::content::domain::entities::{Icon, PersonalInfo};
use crate::content::domain::templates::info_template;
use crate::icon::IconResolver;
use crate::sections::task::{SectionEffect, SectionTask, SectionUpdate};
use crate::shared::markup::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Email,
    Phone,
    Whatsapp,
    Discord,
}

impl CopyField {
    pub const ALL: [CopyField; 4] = [
        CopyField::Email,
        CopyField::Phone,
        CopyField::Whatsapp,
        CopyField::Discord,
    ];

    fn key(self) -> &'static str {
        match self {
            CopyField::Email => "email",
            CopyField::Phone => "phone",
            CopyField::Whatsapp => "whatsapp",
            CopyField::Discord => "discord",
        }
    }
}

/// Profile card: identity, contact rows with copy feedback, social links.
#[derive(Debug, Clone)]
pub struct InfoView {
    info: PersonalInfo,
    icons: Vec<Icon>,
    copied: Option<CopyField>,
    copy_seq: u64,
}

impl Default for InfoView {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoView {
    pub fn new() -> Self {
        Self {
            info: info_template(),
            icons: Vec::new(),
            copied: None,
            copy_seq: 0,
        }
    }

    pub fn initial_task(&self) -> SectionTask {
        SectionTask::LoadInfo
    }

    pub fn info(&self) -> &PersonalInfo {
        &self.info
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn copied(&self) -> Option<CopyField> {
        self.copied
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        let SectionUpdate::Info { info, icons } = update else {
            return;
        };

        match info {
            Ok(info) => self.info = info,
            Err(e) => warn!(error = %e, "Failed to load personal info, keeping template"),
        }

        match icons {
            Ok(icons) => self.icons = icons,
            Err(e) => {
                warn!(error = %e, "Failed to load icons");
                self.icons = Vec::new();
            }
        }
    }

    fn field_text(&self, field: CopyField) -> &str {
        match field {
            CopyField::Email => &self.info.email,
            CopyField::Phone => &self.info.phone,
            CopyField::Whatsapp => &self.info.whatsapp,
            CopyField::Discord => &self.info.discord,
        }
    }

    /// Marks `field` as copied and hands its text to the host clipboard.
    pub fn copy(&mut self, field: CopyField) -> SectionEffect {
        self.copy_seq += 1;
        self.copied = Some(field);
        SectionEffect::WriteClipboard {
            text: self.field_text(field).to_string(),
            field,
            seq: self.copy_seq,
        }
    }

    /// Clears the feedback, unless a newer copy superseded the one that scheduled this reset.
    pub fn reset_copied(&mut self, seq: u64) {
        if seq == self.copy_seq {
            self.copied = None;
        }
    }

    pub fn render_identity(&self) -> String {
        format!(
            r#"<div class="identity"><h1>{}</h1><p>{}</p></div>"#,
            escape(&self.info.name),
            escape(&self.info.designation)
        )
    }

    pub fn render(&self) -> String {
        let resolver = IconResolver::new(&self.icons);
        let mut html = String::from(r#"<section class="info">"#);

        html.push_str(&self.render_identity());

        html.push_str(r#"<div class="contact-rows"><h2>Contact Information</h2>"#);
        for field in CopyField::ALL {
            let label = if self.copied == Some(field) {
                "Copied!"
            } else {
                "Copy"
            };
            html.push_str(&format!(
                r#"<div class="contact-row" data-field="{key}"><span>{value}</span><button data-copy="{key}">{label}</button></div>"#,
                key = field.key(),
                value = escape(self.field_text(field)),
                label = label,
            ));
        }
        html.push_str("</div>");

        html.push_str(r#"<div class="social-links"><h2>Connect With Me</h2>"#);
        for link in &self.info.social_links {
            html.push_str(&format!(
                r#"<a href="{url}" target="_blank" rel="noopener noreferrer" title="{name}">{icon}</a>"#,
                url = escape(&link.url),
                name = escape(&link.name),
                icon = resolver.resolve(&link.icon).markup(),
            ));
        }
        html.push_str("</div></section>");

        html
    }
}
