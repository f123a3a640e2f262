// src/modules/sections/contact.rs
use tracing::{info, warn};

use crate::api::application::ports::outgoing::{ApiError, ContactMessage};
use crate::content::domain::entities::{ContactInfo, Icon};
use crate::content::domain::templates::contact_template;
use crate::icon::IconResolver;
use crate::sections::task::{SectionEffect, SectionTask, SectionUpdate};
use crate::shared::markup::escape;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please fill out all required fields.")]
    MissingRequiredFields,

    #[error("{0}")]
    Send(String),
}

impl From<ApiError> for ContactFormError {
    fn from(e: ApiError) -> Self {
        ContactFormError::Send(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStatus {
    pub submitted: bool,
    pub submitting: bool,
    pub error: Option<ContactFormError>,
}

#[derive(Debug, Clone)]
pub struct ContactView {
    contact: ContactInfo,
    icons: Vec<Icon>,
    form: ContactMessage,
    status: FormStatus,
}

impl Default for ContactView {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(form: &ContactMessage) -> Result<(), ContactFormError> {
    if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() {
        return Err(ContactFormError::MissingRequiredFields);
    }
    Ok(())
}

impl ContactView {
    pub fn new() -> Self {
        Self {
            contact: contact_template(),
            icons: Vec::new(),
            form: ContactMessage::default(),
            status: FormStatus::default(),
        }
    }

    pub fn initial_task(&self) -> SectionTask {
        SectionTask::LoadContact
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn form(&self) -> &ContactMessage {
        &self.form
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Subject => self.form.subject = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Validates the form and, when complete, asks the host to send it.
    pub fn submit(&mut self) -> SectionEffect {
        if self.status.submitting {
            return SectionEffect::None;
        }

        if let Err(e) = validate(&self.form) {
            self.status = FormStatus {
                error: Some(e),
                ..FormStatus::default()
            };
            return SectionEffect::None;
        }

        self.status = FormStatus {
            submitting: true,
            ..FormStatus::default()
        };
        SectionEffect::Run(SectionTask::SendMessage(self.form.clone()))
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        match update {
            SectionUpdate::Contact { contact, icons } => {
                match contact {
                    Ok(contact) => self.contact = contact,
                    Err(e) => warn!(error = %e, "Failed to load contact info, keeping template"),
                }
                match icons {
                    Ok(icons) => self.icons = icons,
                    Err(e) => {
                        warn!(error = %e, "Failed to load icons");
                        self.icons = Vec::new();
                    }
                }
            }
            SectionUpdate::MessageSent(result) => match result {
                Ok(_) => {
                    info!("Contact message sent");
                    self.status = FormStatus {
                        submitted: true,
                        ..FormStatus::default()
                    };
                    self.form = ContactMessage::default();
                }
                Err(e) => {
                    self.status = FormStatus {
                        error: Some(e.into()),
                        ..FormStatus::default()
                    };
                }
            },
            _ => {}
        }
    }

    pub fn render(&self) -> String {
        let resolver = IconResolver::new(&self.icons);
        let mut html = String::from(r#"<section class="contact"><h2>Contact Me</h2>"#);

        html.push_str(&format!(
            r#"<div class="contact-info"><h3>Get In Touch</h3><div><h4>Email</h4><a href="mailto:{email}">{email}</a></div><div><h4>Phone</h4><p>{}</p></div><div><h4>Location</h4><p>{}</p></div><div class="social-links">"#,
            escape(&self.contact.phone),
            escape(&self.contact.address),
            email = escape(&self.contact.email),
        ));
        for link in &self.contact.social_links {
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" title="{}">{}</a>"#,
                escape(&link.url),
                escape(&link.name),
                resolver.resolve(&link.icon).markup()
            ));
        }
        html.push_str("</div></div>");

        html.push_str(r#"<div class="contact-form"><h3>Send Message</h3>"#);
        if self.status.submitted {
            html.push_str(r#"<p class="success">Thank you! Your message has been sent.</p>"#);
        } else {
            if let Some(e) = &self.status.error {
                html.push_str(&format!(r#"<p class="error">{}</p>"#, escape(&e.to_string())));
            }
            html.push_str(&format!(
                r#"<form><input name="name" required value="{}"><input name="email" type="email" required value="{}"><input name="subject" value="{}"><textarea name="message" required>{}</textarea><button type="submit"{}>{}</button></form>"#,
                escape(&self.form.name),
                escape(&self.form.email),
                escape(&self.form.subject),
                escape(&self.form.message),
                if self.status.submitting { " disabled" } else { "" },
                if self.status.submitting { "Sending..." } else { "Send Message" },
            ));
        }
        html.push_str("</div></section>");

        html
    }
}
