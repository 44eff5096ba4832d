//! Per-item processing pipeline.
//!
//! Ties the scanner, providers, and compositor together: for each media
//! folder, look up the catalog record, fetch the poster and ratings, render
//! the overlay, and write `poster.jpg` back into the folder. Item failures
//! are logged and skipped; the batch always runs to completion.

use std::path::Path;

use anyhow::{Context, Result};
use postermark_common::{LayoutStyle, RatingSource, Ratings};
use postermark_overlay::{compose, ComposeOptions};
use tracing::{info, warn};

use crate::providers::{CatalogProvider, CatalogQuery, RatingsProvider};
use crate::scanner::{scan_library, MediaItem, POSTER_FILENAME};

/// How one item ended up after processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// A poster was rendered and written.
    Written,
    /// The folder already had a rendered poster and overwrite is off.
    SkippedExisting,
    /// No catalog record matched the folder's identity.
    NoMatch,
    /// The matched record has no poster image.
    NoPoster,
}

/// Tallies for one library run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSummary {
    pub processed: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Pipeline settings for one run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub style: LayoutStyle,
    pub sources: Vec<RatingSource>,
    pub overwrite: bool,
    pub dry_run: bool,
}

/// The per-item processing pipeline.
pub struct Processor {
    catalog: Box<dyn CatalogProvider>,
    ratings: Box<dyn RatingsProvider>,
    options: ProcessOptions,
}

impl Processor {
    /// Create a processor over the given provider collaborators.
    pub fn new(
        catalog: Box<dyn CatalogProvider>,
        ratings: Box<dyn RatingsProvider>,
        options: ProcessOptions,
    ) -> Self {
        Self {
            catalog,
            ratings,
            options,
        }
    }

    /// Scan one library root and process every item in it.
    pub async fn process_library(&self, root: &Path) -> Result<BatchSummary> {
        let items = scan_library(root)?;
        let mut summary = BatchSummary::default();

        for item in &items {
            summary.processed += 1;
            match self.process_item(item).await {
                Ok(ItemOutcome::Written) => summary.written += 1,
                Ok(outcome) => {
                    info!("Skipping {:?}: {:?}", item.folder_name, outcome);
                    summary.skipped += 1;
                }
                Err(e) => {
                    warn!("Failed to process {:?}: {:#}", item.folder_name, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Library {:?} done: {} written, {} skipped, {} failed",
            root, summary.written, summary.skipped, summary.failed
        );
        Ok(summary)
    }

    /// Process a single media item end to end.
    pub async fn process_item(&self, item: &MediaItem) -> Result<ItemOutcome> {
        if item.has_poster && !self.options.overwrite {
            return Ok(ItemOutcome::SkippedExisting);
        }

        let query = CatalogQuery {
            title: item.title.clone(),
            year: item.year,
            kind: item.kind,
            tmdb_id: item.tmdb_id.as_deref().and_then(|id| id.parse().ok()),
        };
        let matched = self
            .catalog
            .find(&query)
            .await
            .with_context(|| format!("catalog lookup for {:?}", item.title))?;

        let matched = match matched {
            Some(m) => m,
            None => return Ok(ItemOutcome::NoMatch),
        };

        let poster_url = match &matched.poster_url {
            Some(url) => url,
            None => return Ok(ItemOutcome::NoPoster),
        };
        let poster = self
            .catalog
            .poster(poster_url)
            .await
            .with_context(|| format!("poster download for {:?}", item.title))?;

        // A folder-name IMDb tag beats the catalog's answer.
        let imdb_id = item.imdb_id.as_deref().or(matched.imdb_id.as_deref());
        let ratings = match imdb_id {
            Some(id) => self
                .ratings
                .ratings(id)
                .await
                .with_context(|| format!("rating lookup for {id}"))?,
            None => Ratings::default(),
        };

        let compose_options = ComposeOptions {
            style: self.options.style,
            preferred_sources: self.options.sources.clone(),
            tmdb_score: matched.score,
        };
        let rendered = compose(&poster, &ratings, &compose_options)
            .with_context(|| format!("overlay compose for {:?}", item.title))?;

        let output = item.folder_path.join(POSTER_FILENAME);
        if self.options.dry_run {
            info!("[dry run] Would write {:?}", output);
            return Ok(ItemOutcome::Written);
        }

        std::fs::write(&output, &rendered)
            .with_context(|| format!("writing {:?}", output))?;
        info!("Wrote {:?}", output);

        Ok(ItemOutcome::Written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{CatalogMatch, ProviderResult};
    use async_trait::async_trait;
    use postermark_common::{ImdbScore, MediaKind};
    use std::io::Cursor;

    /// Catalog fake with a single canned record.
    struct FakeCatalog {
        matched: Option<CatalogMatch>,
        poster: Vec<u8>,
    }

    #[async_trait]
    impl CatalogProvider for FakeCatalog {
        async fn find(&self, _query: &CatalogQuery) -> ProviderResult<Option<CatalogMatch>> {
            Ok(self.matched.clone())
        }

        async fn poster(&self, _url: &str) -> ProviderResult<Vec<u8>> {
            Ok(self.poster.clone())
        }
    }

    struct FakeRatings {
        ratings: Ratings,
    }

    #[async_trait]
    impl RatingsProvider for FakeRatings {
        async fn ratings(&self, _imdb_id: &str) -> ProviderResult<Ratings> {
            Ok(self.ratings.clone())
        }
    }

    fn test_jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([220, 220, 220]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Jpeg)
            .unwrap();
        buf.into_inner()
    }

    fn item_in(dir: &Path) -> MediaItem {
        MediaItem {
            folder_path: dir.to_path_buf(),
            folder_name: "Heat (1995)".to_string(),
            title: "Heat".to_string(),
            year: Some(1995),
            kind: MediaKind::Movie,
            imdb_id: None,
            tmdb_id: None,
            tvdb_id: None,
            has_poster: false,
        }
    }

    fn processor(matched: Option<CatalogMatch>, ratings: Ratings) -> Processor {
        Processor::new(
            Box::new(FakeCatalog {
                matched,
                poster: test_jpeg(200, 300),
            }),
            Box::new(FakeRatings { ratings }),
            ProcessOptions {
                style: LayoutStyle::BottomBar,
                sources: vec![RatingSource::Imdb, RatingSource::Tmdb],
                overwrite: false,
                dry_run: false,
            },
        )
    }

    fn full_match() -> CatalogMatch {
        CatalogMatch {
            tmdb_id: 949,
            imdb_id: Some("tt0113277".to_string()),
            poster_url: Some("https://example.test/poster.jpg".to_string()),
            score: Some(7.9),
        }
    }

    fn imdb_ratings() -> Ratings {
        Ratings {
            imdb: Some(ImdbScore {
                value: "8.3".to_string(),
                votes: None,
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_item_written_with_poster() {
        let dir = tempfile::tempdir().unwrap();
        let processor = processor(Some(full_match()), imdb_ratings());

        let outcome = processor.process_item(&item_in(dir.path())).await.unwrap();
        assert_eq!(outcome, ItemOutcome::Written);
        assert!(dir.path().join(POSTER_FILENAME).exists());
    }

    #[tokio::test]
    async fn test_no_match_is_skipped_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let processor = processor(None, Ratings::default());

        let outcome = processor.process_item(&item_in(dir.path())).await.unwrap();
        assert_eq!(outcome, ItemOutcome::NoMatch);
        assert!(!dir.path().join(POSTER_FILENAME).exists());
    }

    #[tokio::test]
    async fn test_match_without_poster_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let matched = CatalogMatch {
            poster_url: None,
            ..full_match()
        };
        let processor = processor(Some(matched), imdb_ratings());

        let outcome = processor.process_item(&item_in(dir.path())).await.unwrap();
        assert_eq!(outcome, ItemOutcome::NoPoster);
    }

    #[tokio::test]
    async fn test_existing_poster_skipped_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let processor = processor(Some(full_match()), imdb_ratings());

        let mut item = item_in(dir.path());
        item.has_poster = true;
        let outcome = processor.process_item(&item).await.unwrap();
        assert_eq!(outcome, ItemOutcome::SkippedExisting);
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut processor = processor(Some(full_match()), imdb_ratings());
        processor.options.dry_run = true;

        let outcome = processor.process_item(&item_in(dir.path())).await.unwrap();
        assert_eq!(outcome, ItemOutcome::Written);
        assert!(!dir.path().join(POSTER_FILENAME).exists());
    }

    #[tokio::test]
    async fn test_zero_ratings_still_writes_plain_poster() {
        // No ratings and no positive catalog score: the compositor passes
        // the fetched poster through untouched and it is still written.
        let dir = tempfile::tempdir().unwrap();
        let matched = CatalogMatch {
            imdb_id: None,
            score: None,
            ..full_match()
        };
        let processor = processor(Some(matched), Ratings::default());

        let outcome = processor.process_item(&item_in(dir.path())).await.unwrap();
        assert_eq!(outcome, ItemOutcome::Written);

        let written = std::fs::read(dir.path().join(POSTER_FILENAME)).unwrap();
        assert_eq!(written, test_jpeg(200, 300));
    }
}
