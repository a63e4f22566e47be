use async_trait::async_trait;

use crate::chatbot::application::domain::entities::ChatLog;
use crate::chatbot::application::ports::{
    incoming::use_cases::{ListChatLogsError, ListChatLogsQuery, ListChatLogsUseCase},
    outgoing::ChatLogRepository,
};
use crate::shared::pagination::PageResult;

#[derive(Debug, Clone)]
pub struct ListChatLogsService<R>
where
    R: ChatLogRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListChatLogsService<R>
where
    R: ChatLogRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListChatLogsUseCase for ListChatLogsService<R>
where
    R: ChatLogRepository + Send + Sync,
{
    async fn execute(
        &self,
        query: ListChatLogsQuery,
    ) -> Result<PageResult<ChatLog>, ListChatLogsError> {
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        self.repository
            .list(query.page, search)
            .await
            .map_err(|e| ListChatLogsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::application::ports::outgoing::{ChatLogRepositoryError, NewChatLog};
    use crate::shared::pagination::PageRequest;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SearchRecorder {
        seen: Arc<Mutex<Vec<Option<String>>>>,
    }

    #[async_trait]
    impl ChatLogRepository for SearchRecorder {
        async fn save(&self, _log: NewChatLog) -> Result<ChatLog, ChatLogRepositoryError> {
            unimplemented!()
        }

        async fn list(
            &self,
            page: PageRequest,
            search: Option<&str>,
        ) -> Result<PageResult<ChatLog>, ChatLogRepositoryError> {
            self.seen.lock().unwrap().push(search.map(str::to_string));
            Ok(PageResult {
                items: Vec::new(),
                page: page.page,
                per_page: page.per_page,
                total: 0,
            })
        }
    }

    #[tokio::test]
    async fn test_search_is_trimmed() {
        let repo = SearchRecorder::default();
        let service = ListChatLogsService::new(repo.clone());

        service
            .execute(ListChatLogsQuery {
                search: Some("  rust ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(*repo.seen.lock().unwrap(), vec![Some("rust".to_string())]);
    }

    #[tokio::test]
    async fn test_blank_search_lists_everything() {
        let repo = SearchRecorder::default();
        let service = ListChatLogsService::new(repo.clone());

        service
            .execute(ListChatLogsQuery {
                search: Some("   ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(*repo.seen.lock().unwrap(), vec![None]);
    }
}
