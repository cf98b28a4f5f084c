use crate::core::keywords::KeywordMatcher;
use crate::domain::model::{PageOutcome, PageResult};
use crate::domain::ports::PostSource;
use crate::utils::error::Result;

/// Fetches one page and counts the titles that mention a keyword.
///
/// Titles beyond `page_size` are ignored so the count never exceeds the page.
pub async fn fetch_page<S>(
    source: &S,
    matcher: &KeywordMatcher,
    page: usize,
    page_size: usize,
) -> Result<PageResult>
where
    S: PostSource + ?Sized,
{
    let titles = source.fetch_titles(page).await?;
    let sample = &titles[..titles.len().min(page_size)];
    let match_count = matcher.count_matches(sample);

    tracing::debug!(
        "Page {}: {} of {} titles match",
        page,
        match_count,
        sample.len()
    );

    Ok(PageResult {
        page,
        match_count,
        title_count: sample.len(),
    })
}

/// Same as [`fetch_page`] but never fails: errors become [`PageOutcome::Failed`].
pub async fn fetch_outcome<S>(
    source: &S,
    matcher: &KeywordMatcher,
    page: usize,
    page_size: usize,
) -> PageOutcome
where
    S: PostSource + ?Sized,
{
    match fetch_page(source, matcher, page, page_size).await {
        Ok(result) => PageOutcome::Fetched(result),
        Err(e) => {
            tracing::warn!("⚠️ Page {} failed and will be excluded: {}", page, e);
            PageOutcome::Failed {
                page,
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BoundaryRule, KeywordSet};
    use crate::utils::error::HypeError;
    use async_trait::async_trait;

    struct FixedSource {
        titles: Vec<String>,
    }

    #[async_trait]
    impl PostSource for FixedSource {
        async fn fetch_titles(&self, page: usize) -> Result<Vec<String>> {
            if page == 99 {
                return Err(HypeError::HttpStatus { page, status: 500 });
            }
            Ok(self.titles.clone())
        }
    }

    fn matcher() -> KeywordMatcher {
        KeywordMatcher::new(&KeywordSet::default(), BoundaryRule::SpaceOrHyphen)
    }

    #[tokio::test]
    async fn test_fetch_page_counts_matches() {
        let source = FixedSource {
            titles: vec![
                "Show HN: GPT in a spreadsheet".to_string(),
                "Show HN: A lisp in 500 lines".to_string(),
                "Show HN: Prompt-based test runner".to_string(),
            ],
        };

        let result = fetch_page(&source, &matcher(), 2, 10).await.unwrap();
        assert_eq!(result.page, 2);
        assert_eq!(result.match_count, 2);
        assert_eq!(result.title_count, 3);
    }

    #[tokio::test]
    async fn test_fetch_page_truncates_to_page_size() {
        let source = FixedSource {
            titles: vec!["Show HN: AI thing".to_string(); 15],
        };

        let result = fetch_page(&source, &matcher(), 0, 10).await.unwrap();
        assert_eq!(result.match_count, 10);
        assert_eq!(result.title_count, 10);
    }

    #[tokio::test]
    async fn test_fetch_outcome_wraps_errors() {
        let source = FixedSource { titles: vec![] };
        let outcome = fetch_outcome(&source, &matcher(), 99, 10).await;
        match outcome {
            PageOutcome::Failed { page, reason } => {
                assert_eq!(page, 99);
                assert!(reason.contains("500"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
