//! Customer-facing quote request board: the filtered list plus status counts.

use tokio::sync::watch;

use crate::controller::{ListController, LoadOutcome};
use crate::domain::statistics::StatusCounts;
use crate::repository::errors::RepositoryResult;
use crate::repository::{QuoteRequestSource, StatusCountsReader};

/// Outcome of loading the board.
#[derive(Debug)]
pub struct BoardLoad {
    pub list: LoadOutcome,
    pub status_counts: RepositoryResult<StatusCounts>,
}

/// Quote request list together with the global status counts.
///
/// Counts always cover every request, regardless of the filter applied to
/// the list, and are only re-fetched on [`mount`](Self::mount) and
/// [`refresh`](Self::refresh).
pub struct QuoteRequestBoard<S, C>
where
    S: QuoteRequestSource,
    C: StatusCountsReader,
{
    list: ListController<S>,
    counts_reader: C,
    counts: watch::Sender<Option<StatusCounts>>,
}

impl<S, C> QuoteRequestBoard<S, C>
where
    S: QuoteRequestSource,
    C: StatusCountsReader,
{
    pub fn new(list: ListController<S>, counts_reader: C) -> Self {
        let (counts, _) = watch::channel(None);
        Self {
            list,
            counts_reader,
            counts,
        }
    }

    pub fn list(&self) -> &ListController<S> {
        &self.list
    }

    /// Last successfully fetched counts.
    pub fn status_counts(&self) -> Option<StatusCounts> {
        *self.counts.borrow()
    }

    pub fn subscribe_status_counts(&self) -> watch::Receiver<Option<StatusCounts>> {
        self.counts.subscribe()
    }

    /// Loads the first view of the board.
    pub async fn mount(&self) -> BoardLoad {
        self.refresh().await
    }

    /// Re-fetches the current page and the status counts side by side.
    pub async fn refresh(&self) -> BoardLoad {
        let (list, status_counts) = tokio::join!(self.list.refresh(), self.load_status_counts());
        BoardLoad {
            list,
            status_counts,
        }
    }

    async fn load_status_counts(&self) -> RepositoryResult<StatusCounts> {
        let counts = self
            .counts_reader
            .fetch_status_counts()
            .await
            .map_err(|err| {
                log::error!("Failed to load status counts: {err}");
                err
            })?;

        self.counts.send_replace(Some(counts));
        Ok(counts)
    }
}
