use anyhow::Result;

use super::ViewContext;
use crate::model::{Locale, Statistic};
use crate::remote::ApiResult;
use crate::statistics::{Chart, chart};

pub struct StatisticsView {
    ctx: ViewContext,
    select_lang: String,
    application_locales: Vec<Locale>,
    default_locale: Option<Locale>,
    hidden: bool,
    rows: Vec<Statistic>,
    chart: Option<Chart>,
}

impl StatisticsView {
    /// Application locales first, then the default locale (a failure there
    /// hides the view instead of aborting), then the counts for every
    /// locale.
    pub async fn open(ctx: ViewContext) -> Result<Self> {
        let application_locales = ctx.remote.list_available_locales().await?;
        let (default_locale, hidden) = match ctx.remote.get_default_locale().await {
            Ok(default) => (
                default.and_then(|d| application_locales.iter().find(|l| l.same_locale(&d)).cloned()),
                false,
            ),
            Err(err) => {
                tracing::warn!(error = %err, "default locale unavailable");
                (None, true)
            }
        };

        let mut view = Self {
            ctx,
            select_lang: String::new(),
            application_locales,
            default_locale,
            hidden,
            rows: Vec::new(),
            chart: None,
        };
        view.refresh().await?;
        Ok(view)
    }

    pub fn select_lang(&self) -> &str {
        &self.select_lang
    }

    pub fn application_locales(&self) -> &[Locale] {
        &self.application_locales
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.default_locale.as_ref()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn allow_translate(&self) -> bool {
        self.application_locales.len() > 1 && self.default_locale.is_some()
    }

    pub fn rows(&self) -> &[Statistic] {
        &self.rows
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Narrows the counts to one language; empty means all of them.
    pub async fn set_select_lang(&mut self, lang: &str) -> ApiResult<()> {
        self.select_lang = lang.trim().to_string();
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> ApiResult<()> {
        let rows = self.ctx.remote.statistics(&self.select_lang).await?;
        self.chart = chart(&rows);
        self.rows = rows;
        Ok(())
    }
}
