use headless_chrome::browser::default_executable;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use url::Url;

const LETTER_WIDTH_IN: f64 = 8.5;
const LETTER_HEIGHT_IN: f64 = 11.0;

/// The browser engine could not produce a PDF. Callers treat every variant
/// as the same generic rendering failure; the variants only shape the log.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("browser launch failed: {0}")]
    Launch(String),
    #[error("page render failed: {0}")]
    Render(String),
    #[error("markup staging failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where to find the browser executable. Unset means auto-detection through
/// the engine's own lookup.
#[derive(Debug, Clone, Default)]
pub struct RendererConfig {
    pub browser_path: Option<PathBuf>,
}

impl RendererConfig {
    pub fn from_env() -> Self {
        RendererConfig {
            browser_path: env::var_os("BROWSER_PATH").map(PathBuf::from),
        }
    }
}

/// Prints markup to single-page letter-format PDF bytes through a headless
/// browser. A fresh browser is launched per call and torn down when the
/// handle drops.
pub struct PdfRenderer {
    config: RendererConfig,
}

impl PdfRenderer {
    pub fn new(config: RendererConfig) -> Self {
        PdfRenderer { config }
    }

    pub fn render(&self, markup: &str) -> Result<Vec<u8>, RenderError> {
        let started = Instant::now();

        // The tab needs a navigable URL, so the markup goes through a temp
        // file that must outlive the print call.
        let mut page_file = tempfile::Builder::new()
            .prefix("match-card")
            .suffix(".html")
            .tempfile()?;
        page_file.write_all(markup.as_bytes())?;
        page_file.flush()?;

        let page_url = Url::from_file_path(page_file.path())
            .map_err(|_| RenderError::Render("markup path is not a valid file url".to_string()))?;

        let browser = self.launch()?;

        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        tab.navigate_to(page_url.as_str())
            .map_err(|e| RenderError::Render(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| RenderError::Render(e.to_string()))?;

        let pdf = tab
            .print_to_pdf(Some(Self::print_options()))
            .map_err(|e| RenderError::Render(e.to_string()))?;

        debug!(
            "rendered {} markup bytes into {} pdf bytes in {} ms",
            markup.len(),
            pdf.len(),
            started.elapsed().as_millis()
        );

        Ok(pdf)
    }

    fn launch(&self) -> Result<Browser, RenderError> {
        let path = match &self.config.browser_path {
            Some(path) => path.clone(),
            None => default_executable().map_err(RenderError::Launch)?,
        };

        let options = LaunchOptions::default_builder()
            .path(Some(path))
            .build()
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        Browser::new(options).map_err(|e| RenderError::Launch(e.to_string()))
    }

    // Letter paper, first page only. Overflow past the page boundary is
    // clipped by the range, not reported.
    fn print_options() -> PrintToPdfOptions {
        PrintToPdfOptions {
            paper_width: Some(LETTER_WIDTH_IN),
            paper_height: Some(LETTER_HEIGHT_IN),
            page_ranges: Some("1".to_string()),
            print_background: Some(true),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_options_request_single_letter_page() {
        let options = PdfRenderer::print_options();

        assert_eq!(options.paper_width, Some(8.5));
        assert_eq!(options.paper_height, Some(11.0));
        assert_eq!(options.page_ranges.as_deref(), Some("1"));
        assert_eq!(options.print_background, Some(true));
    }

    #[test]
    fn test_default_config_auto_detects_browser() {
        let config = RendererConfig::default();

        assert!(config.browser_path.is_none());
    }

    #[test]
    fn test_config_from_env_reads_browser_path() {
        unsafe { env::set_var("BROWSER_PATH", "/usr/bin/google-chrome") };

        let config = RendererConfig::from_env();

        unsafe { env::remove_var("BROWSER_PATH") };

        assert_eq!(
            config.browser_path,
            Some(PathBuf::from("/usr/bin/google-chrome"))
        );
    }
}
