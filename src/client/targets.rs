use std::sync::Arc;

use super::{RpcCall, RpcList};
use crate::errors::AdminError;
use crate::models::{CreateTargetParams, Target, TrackerFilter};
use crate::rpc::{RpcClient, methods};

pub struct TargetClient {
    list: RpcList<Target>,
    create: RpcCall<Target>,
}

impl TargetClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            list: RpcList::new(rpc.clone(), methods::TARGET_LIST),
            create: RpcCall::new(rpc.clone(), methods::TARGET_CREATE),
        }
    }

    pub async fn fetch(&self, tracker_id: Option<String>) {
        self.list.fetch(&TrackerFilter::new(tracker_id)).await
    }

    pub fn items(&self) -> Vec<Target> {
        self.list.items()
    }

    pub fn for_tracker(&self, tracker_id: &str) -> Vec<Target> {
        self.list
            .items()
            .into_iter()
            .filter(|t| t.tracker_id == tracker_id)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Target> {
        self.list.find(|t| t.id == id)
    }

    pub fn clear(&self) {
        self.list.clear()
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub async fn create(&self, params: &CreateTargetParams) -> Result<Target, AdminError> {
        self.create.execute(params).await
    }

    pub fn is_creating(&self) -> bool {
        self.create.is_loading()
    }
}
