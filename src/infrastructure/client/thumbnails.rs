use anyhow::Result;

use super::TubeboostClient;
use crate::domain::thumbnails::{
    AnalyzeThumbnailRequest, EnhanceThumbnailRequest, EnhancementResult, ThumbnailAnalysis,
};

pub struct ThumbnailsClient<'a> {
    client: &'a TubeboostClient,
}

impl<'a> ThumbnailsClient<'a> {
    pub fn new(client: &'a TubeboostClient) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, payload: &AnalyzeThumbnailRequest) -> Result<ThumbnailAnalysis> {
        self.client
            .post_json("api/v1/thumbnails/analyze", payload)
            .await
    }

    pub async fn enhance(&self, payload: &EnhanceThumbnailRequest) -> Result<EnhancementResult> {
        self.client
            .post_json("api/v1/thumbnails/enhance", payload)
            .await
    }
}
