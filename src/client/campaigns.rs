use std::sync::Arc;

use super::{RpcCall, RpcList};
use crate::errors::AdminError;
use crate::models::{Campaign, CreateCampaignParams, TrackerFilter};
use crate::rpc::{RpcClient, methods};

pub struct CampaignClient {
    list: RpcList<Campaign>,
    create: RpcCall<Campaign>,
}

impl CampaignClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            list: RpcList::new(rpc.clone(), methods::CAMPAIGN_LIST),
            create: RpcCall::new(rpc.clone(), methods::CAMPAIGN_CREATE),
        }
    }

    /// `None` lists campaigns of every tracker.
    pub async fn fetch(&self, tracker_id: Option<String>) {
        self.list.fetch(&TrackerFilter::new(tracker_id)).await
    }

    pub fn items(&self) -> Vec<Campaign> {
        self.list.items()
    }

    /// Loaded campaigns belonging to `tracker_id`.
    pub fn for_tracker(&self, tracker_id: &str) -> Vec<Campaign> {
        self.list
            .items()
            .into_iter()
            .filter(|c| c.tracker_id == tracker_id)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Campaign> {
        self.list.find(|c| c.id == id)
    }

    pub fn clear(&self) {
        self.list.clear()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub async fn create(&self, params: &CreateCampaignParams) -> Result<Campaign, AdminError> {
        self.create.execute(params).await
    }

    pub fn is_creating(&self) -> bool {
        self.create.is_loading()
    }
}
