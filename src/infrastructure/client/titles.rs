use anyhow::Result;

use super::TubeboostClient;
use crate::domain::titles::{OptimizeTitlesRequest, TitleSuggestion, TitleSuggestionsResponse};

pub struct TitlesClient<'a> {
    client: &'a TubeboostClient,
}

impl<'a> TitlesClient<'a> {
    pub fn new(client: &'a TubeboostClient) -> Self {
        Self { client }
    }

    pub async fn optimize(&self, payload: &OptimizeTitlesRequest) -> Result<Vec<TitleSuggestion>> {
        let response: TitleSuggestionsResponse = self
            .client
            .post_json("api/v1/titles/optimize", payload)
            .await?;
        Ok(response.titles)
    }
}
