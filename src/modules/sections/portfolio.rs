// src/modules/sections/portfolio.rs
use tracing::warn;

use crate::content::domain::entities::PortfolioData;
use crate::content::domain::templates::portfolio_template;
use crate::sections::task::{SectionTask, SectionUpdate};
use crate::shared::markup::{capitalize, escape};

#[derive(Debug, Clone)]
pub struct PortfolioView {
    data: PortfolioData,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioView {
    pub fn new() -> Self {
        Self {
            data: portfolio_template(),
        }
    }

    pub fn initial_task(&self) -> SectionTask {
        SectionTask::LoadPortfolio
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn apply(&mut self, update: SectionUpdate) {
        if let SectionUpdate::Portfolio(result) = update {
            match result {
                Ok(data) => self.data = data,
                Err(e) => warn!(error = %e, "Failed to load portfolio, keeping template"),
            }
        }
    }

    pub fn render(&self) -> String {
        let cards: String = self
            .data
            .items
            .iter()
            .map(|item| {
                let link = item
                    .url
                    .as_deref()
                    .map(|url| {
                        format!(
                            r#"<a href="{}" target="_blank" rel="noopener noreferrer">View</a>"#,
                            escape(url)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<article class="portfolio-item"><img src="{}" alt="{}"><span class="category">{}</span><h3>{}</h3><p>{}</p>{}</article>"#,
                    escape(&item.image),
                    escape(&item.title),
                    escape(&capitalize(&item.category)),
                    escape(&item.title),
                    escape(&item.description),
                    link
                )
            })
            .collect();

        format!(
            r#"<section class="portfolio"><h2>{}</h2><p>{}</p><div class="grid">{}</div></section>"#,
            escape(&self.data.title),
            escape(&self.data.description),
            cards
        )
    }
}
