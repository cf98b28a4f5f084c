use crate::app::gauge::{GaugeRenderer, GaugeView};
use crate::app::page::{render_page, SHOW_NEW_URL};
use crate::app::report::{pages_csv, HypeReport};
use crate::core::counts::CountsByPage;
use crate::domain::model::{DerivedMetrics, OutputFormat};
use crate::domain::ports::{ConfigProvider, GaugeObserver, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Rewrites the gauge files on every update and writes reports at the end.
pub struct FileGaugeSink<S: Storage> {
    storage: S,
    renderer: GaugeRenderer,
    formats: Vec<OutputFormat>,
    sample_size: usize,
}

impl<S: Storage> FileGaugeSink<S> {
    pub fn new(storage: S, renderer: GaugeRenderer, formats: Vec<OutputFormat>, sample_size: usize) -> Self {
        Self {
            storage,
            renderer,
            formats,
            sample_size,
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self::new(
            storage,
            GaugeRenderer::new(config.viewport_width()),
            config.output_formats().to_vec(),
            config.num_pages() * config.page_size(),
        )
    }

    /// Writes the JSON/CSV reports requested in `formats` and returns every
    /// location written during the run.
    pub async fn finish<C: ConfigProvider>(
        &self,
        config: &C,
        counts: &CountsByPage,
        metrics: &DerivedMetrics,
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();
        for format in &self.formats {
            let data = match format {
                OutputFormat::Json => {
                    HypeReport::new(config.api_endpoint(), config.tags(), counts, metrics)
                        .to_json()?
                }
                OutputFormat::Csv => pages_csv(counts)?,
                // 已在每次更新時寫出
                OutputFormat::Svg | OutputFormat::Html => {
                    written.push(self.storage.location(format.file_name()));
                    continue;
                }
            };
            self.storage.write_file(format.file_name(), &data).await?;
            written.push(self.storage.location(format.file_name()));
        }
        Ok(written)
    }
}

#[async_trait]
impl<S: Storage> GaugeObserver for FileGaugeSink<S> {
    async fn on_update(&self, metrics: &DerivedMetrics) -> Result<()> {
        let gauge_formats: Vec<&OutputFormat> =
            self.formats.iter().filter(|f| f.is_gauge()).collect();
        if gauge_formats.is_empty() {
            return Ok(());
        }

        let svg = self.renderer.render(&GaugeView::from_metrics(metrics));
        for format in gauge_formats {
            let data = match format {
                OutputFormat::Html => render_page(&svg, self.sample_size, SHOW_NEW_URL),
                _ => svg.clone(),
            };
            self.storage.write_file(format.file_name(), data.as_bytes()).await?;
        }

        tracing::debug!("Gauge rewritten: {} ({})", metrics.label, metrics.color);
        Ok(())
    }
}
