use std::sync::Arc;

use serde_json::Value;

use super::{RpcCall, RpcList};
use crate::errors::AdminError;
use crate::models::{BatchImportParams, BatchImportResult, Channel, ChannelFilter, CreateChannelParams};
use crate::rpc::{RpcClient, methods};

pub struct ChannelClient {
    list: RpcList<Channel>,
    create: RpcCall<Channel>,
    import: RpcCall<BatchImportResult>,
}

impl ChannelClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            list: RpcList::new(rpc.clone(), methods::CHANNEL_LIST),
            create: RpcCall::new(rpc.clone(), methods::CHANNEL_CREATE),
            import: RpcCall::new(rpc.clone(), methods::CHANNEL_BATCH_IMPORT),
        }
    }

    pub async fn fetch(&self, filter: &ChannelFilter) {
        self.list.fetch(filter).await
    }

    pub fn items(&self) -> Vec<Channel> {
        self.list.items()
    }

    pub fn for_campaign(&self, campaign_id: &str) -> Vec<Channel> {
        self.list
            .items()
            .into_iter()
            .filter(|c| c.campaign_id == campaign_id)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Channel> {
        self.list.find(|c| c.id == id)
    }

    pub fn clear(&self) {
        self.list.clear()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub async fn create(&self, params: &CreateChannelParams) -> Result<Channel, AdminError> {
        self.create.execute(params).await
    }

    pub fn is_creating(&self) -> bool {
        self.create.is_loading()
    }

    /// Returns the number of channels the backend imported.
    pub async fn batch_import(&self, channels: Vec<Value>) -> Result<u64, AdminError> {
        let result = self.import.execute(&BatchImportParams { channels }).await?;
        Ok(result.imported)
    }

    pub fn is_importing(&self) -> bool {
        self.import.is_loading()
    }
}
