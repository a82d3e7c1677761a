use async_trait::async_trait;

use super::tokens_model::BasicTokenInfo;
use crate::errors::Result;

#[async_trait]
pub trait TokenInfoServiceTrait: Send + Sync {
    /// Name, symbol, supplies and image of the token defined by `token_id`
    /// (`{principal}.{contract}`).
    async fn get_basic_token_info(&self, token_id: &str) -> Result<BasicTokenInfo>;
}
