#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::tokens::{TokenInfoService, TokenInfoServiceTrait};
    use async_trait::async_trait;
    use explorer_stacks_api::{
        ContractInfo, FtMetadataResponse, FungibleTokenHolderList, NonFungibleTokenHoldingsList,
        StacksApi, StacksApiError, TokenMetadata,
    };
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const TOKEN_ID: &str = "SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-alex";

    // --- Mock StacksApi ---
    #[derive(Default)]
    struct MockStacksApi {
        metadata: Mutex<HashMap<String, FtMetadataResponse>>,
        contracts: Mutex<HashMap<String, ContractInfo>>,
        holders: Mutex<HashMap<String, FungibleTokenHolderList>>,
        holder_calls: Mutex<Vec<String>>,
    }

    impl MockStacksApi {
        fn with_metadata(self, token_id: &str, metadata: FtMetadataResponse) -> Self {
            self.metadata
                .lock()
                .unwrap()
                .insert(token_id.to_string(), metadata);
            self
        }

        fn with_contract(self, contract_id: &str, abi: Option<&str>) -> Self {
            self.contracts.lock().unwrap().insert(
                contract_id.to_string(),
                ContractInfo {
                    contract_id: contract_id.to_string(),
                    abi: abi.map(str::to_string),
                    ..Default::default()
                },
            );
            self
        }

        fn with_holders_supply(self, asset_id: &str, total_supply: &str) -> Self {
            self.holders.lock().unwrap().insert(
                asset_id.to_string(),
                FungibleTokenHolderList {
                    limit: 1,
                    offset: 0,
                    total: 1,
                    total_supply: total_supply.to_string(),
                    results: vec![],
                },
            );
            self
        }
    }

    #[async_trait]
    impl StacksApi for MockStacksApi {
        fn base_url(&self) -> &str {
            "http://mock"
        }

        async fn get_ft_holders(
            &self,
            token: &str,
            _limit: u32,
            _offset: u32,
        ) -> Result<FungibleTokenHolderList, StacksApiError> {
            self.holder_calls.lock().unwrap().push(token.to_string());
            self.holders
                .lock()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or_else(|| StacksApiError::NotFound(token.to_string()))
        }

        async fn get_nft_holdings(
            &self,
            _principal: &str,
            _limit: u32,
            _offset: u32,
            _tx_metadata: bool,
        ) -> Result<NonFungibleTokenHoldingsList, StacksApiError> {
            unimplemented!()
        }

        async fn get_ft_metadata(&self, token: &str) -> Result<FtMetadataResponse, StacksApiError> {
            self.metadata
                .lock()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or_else(|| StacksApiError::NotFound(token.to_string()))
        }

        async fn get_contract_info(
            &self,
            contract_id: &str,
        ) -> Result<ContractInfo, StacksApiError> {
            self.contracts
                .lock()
                .unwrap()
                .get(contract_id)
                .cloned()
                .ok_or_else(|| StacksApiError::Http {
                    status: 500,
                    endpoint: "/extended/v1/contract".to_string(),
                    message: "boom".to_string(),
                })
        }
    }

    fn alex_metadata() -> FtMetadataResponse {
        FtMetadataResponse {
            name: Some("ALEX Token".to_string()),
            symbol: Some("ALEX".to_string()),
            decimals: Some(8),
            total_supply: Some("100000000000000000".to_string()),
            image_uri: Some("https://assets.example/alex.png".to_string()),
            ..Default::default()
        }
    }

    const ALEX_ABI: &str = r#"{"fungible_tokens":[{"name":"alex"}]}"#;

    #[tokio::test]
    async fn test_basic_token_info_with_circulating_supply() {
        let api = MockStacksApi::default()
            .with_metadata(TOKEN_ID, alex_metadata())
            .with_contract(TOKEN_ID, Some(ALEX_ABI))
            .with_holders_supply(&format!("{TOKEN_ID}::alex"), "60000000000000000");
        let api = Arc::new(api);
        let service = TokenInfoService::new(api.clone());

        let info = service.get_basic_token_info(TOKEN_ID).await.unwrap();

        assert_eq!(info.name, "ALEX Token");
        assert_eq!(info.symbol, "ALEX");
        assert_eq!(info.total_supply.unwrap().to_string(), "1000000000");
        assert_eq!(info.circulating_supply.unwrap().to_string(), "600000000");
        assert_eq!(info.image_uri.as_deref(), Some("https://assets.example/alex.png"));
        assert_eq!(
            *api.holder_calls.lock().unwrap(),
            vec![format!("{TOKEN_ID}::alex")]
        );
    }

    #[tokio::test]
    async fn test_nested_metadata_name_wins() {
        let mut metadata = alex_metadata();
        metadata.metadata = Some(TokenMetadata {
            name: Some("Alex Lab Token".to_string()),
            ..Default::default()
        });
        let api = MockStacksApi::default().with_metadata(TOKEN_ID, metadata);
        let service = TokenInfoService::new(Arc::new(api));

        let info = service.get_basic_token_info(TOKEN_ID).await.unwrap();
        assert_eq!(info.name, "Alex Lab Token");
    }

    #[tokio::test]
    async fn test_missing_symbol_is_not_found() {
        let mut metadata = alex_metadata();
        metadata.symbol = None;
        let api = MockStacksApi::default().with_metadata(TOKEN_ID, metadata);
        let service = TokenInfoService::new(Arc::new(api));

        let err = service.get_basic_token_info(TOKEN_ID).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref msg) if msg == "Token not found"));
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_found() {
        let service = TokenInfoService::new(Arc::new(MockStacksApi::default()));
        let err = service.get_basic_token_info(TOKEN_ID).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_token_id_is_rejected() {
        let service = TokenInfoService::new(Arc::new(MockStacksApi::default()));
        let err = service.get_basic_token_info("").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_contract_failure_leaves_circulating_supply_empty() {
        let api = MockStacksApi::default().with_metadata(TOKEN_ID, alex_metadata());
        let service = TokenInfoService::new(Arc::new(api));

        let info = service.get_basic_token_info(TOKEN_ID).await.unwrap();
        assert!(info.circulating_supply.is_none());
        assert!(info.total_supply.is_some());
    }

    #[tokio::test]
    async fn test_abi_without_fungible_tokens() {
        let api = MockStacksApi::default()
            .with_metadata(TOKEN_ID, alex_metadata())
            .with_contract(TOKEN_ID, Some(r#"{"fungible_tokens":[]}"#));
        let api = Arc::new(api);
        let service = TokenInfoService::new(api.clone());

        let info = service.get_basic_token_info(TOKEN_ID).await.unwrap();
        assert!(info.circulating_supply.is_none());
        assert!(api.holder_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_decimals_skips_total_supply() {
        let mut metadata = alex_metadata();
        metadata.decimals = Some(0);
        let api = MockStacksApi::default()
            .with_metadata(TOKEN_ID, metadata)
            .with_contract(TOKEN_ID, Some(ALEX_ABI))
            .with_holders_supply(&format!("{TOKEN_ID}::alex"), "500");
        let service = TokenInfoService::new(Arc::new(api));

        let info = service.get_basic_token_info(TOKEN_ID).await.unwrap();
        assert!(info.total_supply.is_none());
        assert_eq!(info.circulating_supply.unwrap().to_string(), "500");
    }
}
