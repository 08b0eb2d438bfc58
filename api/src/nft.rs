use serde::Deserialize;

use crate::address::Address;
use crate::error::{DashError, Result};

/// One page of the NFT indexer's `getNFTs` response.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftPage {
    #[serde(default)]
    pub owned_nfts: Vec<serde_json::Value>,
    #[serde(default)]
    pub page_key: Option<String>,
}

impl NftPage {
    /// Continuation key, treating an empty key as the last page.
    pub fn next_key(&self) -> Option<&str> {
        self.page_key.as_deref().filter(|k| !k.is_empty())
    }
}

#[allow(async_fn_in_trait)]
pub trait NftSource {
    async fn page(&self, owner: &Address, page_key: Option<&str>) -> Result<NftPage>;
}

/// HTTP client for the `getNFTs` indexer endpoint.
#[derive(Clone, Debug)]
pub struct NftClient {
    base_url: String,
    http: reqwest::Client,
}

impl NftClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }
}

impl NftSource for NftClient {
    async fn page(&self, owner: &Address, page_key: Option<&str>) -> Result<NftPage> {
        let url = format!("{}/getNFTs/", self.base_url);
        let mut request = self.http.get(url).query(&[("owner", owner.to_string())]);
        if let Some(key) = page_key {
            request = request.query(&[("pageKey", key)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashError::Network(format!("getNFTs responded with {status}")));
        }
        Ok(response.json().await?)
    }
}

/// Counts every NFT owned by `owner`, following continuation keys one page at a time.
pub async fn count_nfts<S: NftSource>(source: &S, owner: &Address) -> Result<usize> {
    let mut total = 0;
    let mut page_key: Option<String> = None;

    loop {
        let page = source.page(owner, page_key.as_deref()).await?;
        total += page.owned_nfts.len();
        match page.next_key() {
            Some(key) => page_key = Some(key.to_string()),
            None => break,
        }
    }

    tracing::debug!("{} owns {} NFTs", owner, total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::test_helpers::account;

    struct FakePages {
        pages: Vec<NftPage>,
        requested: RefCell<Vec<Option<String>>>,
        fail_at: Option<usize>,
    }

    impl FakePages {
        fn new(pages: Vec<NftPage>) -> Self {
            Self {
                pages,
                requested: RefCell::new(vec![]),
                fail_at: None,
            }
        }
    }

    impl NftSource for FakePages {
        async fn page(&self, _owner: &Address, page_key: Option<&str>) -> Result<NftPage> {
            let index = self.requested.borrow().len();
            self.requested.borrow_mut().push(page_key.map(str::to_string));
            if self.fail_at == Some(index) {
                return Err(DashError::Network("indexer unavailable".to_string()));
            }
            Ok(self.pages[index].clone())
        }
    }

    fn page(count: usize, key: Option<&str>) -> NftPage {
        NftPage {
            owned_nfts: vec![serde_json::json!({}); count],
            page_key: key.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn follows_page_keys_until_exhausted() {
        let source = FakePages::new(vec![page(100, Some("a")), page(100, Some("b")), page(7, None)]);
        assert_eq!(count_nfts(&source, &account()).await.unwrap(), 207);
        assert_eq!(
            *source.requested.borrow(),
            vec![None, Some("a".to_string()), Some("b".to_string())]
        );
    }

    #[tokio::test]
    async fn empty_page_key_ends_pagination() {
        let source = FakePages::new(vec![page(3, Some(""))]);
        assert_eq!(count_nfts(&source, &account()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn a_failed_page_fails_the_count() {
        let mut source = FakePages::new(vec![page(5, Some("a")), page(5, None)]);
        source.fail_at = Some(1);
        assert!(count_nfts(&source, &account()).await.is_err());
    }

    #[test]
    fn parses_indexer_payload() {
        let page: NftPage =
            serde_json::from_str(r#"{"ownedNfts":[{"id":1},{"id":2}],"pageKey":"next","totalCount":2}"#)
                .unwrap();
        assert_eq!(page.owned_nfts.len(), 2);
        assert_eq!(page.next_key(), Some("next"));

        let last: NftPage = serde_json::from_str(r#"{"ownedNfts":[]}"#).unwrap();
        assert_eq!(last.next_key(), None);
    }
}
