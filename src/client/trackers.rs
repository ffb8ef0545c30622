use std::sync::Arc;

use super::{RpcCall, RpcList};
use crate::errors::AdminError;
use crate::models::{CreateTrackerParams, DeleteResult, IdParams, NoParams, Tracker, UpdateTrackerParams};
use crate::rpc::{RpcClient, methods};

/// Tracker operations: list, create, update, delete
pub struct TrackerClient {
    list: RpcList<Tracker>,
    create: RpcCall<Tracker>,
    update: RpcCall<Tracker>,
    delete: RpcCall<DeleteResult>,
}

impl TrackerClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            list: RpcList::new(rpc.clone(), methods::TRACKER_LIST),
            create: RpcCall::new(rpc.clone(), methods::TRACKER_CREATE),
            update: RpcCall::new(rpc.clone(), methods::TRACKER_UPDATE),
            delete: RpcCall::new(rpc.clone(), methods::TRACKER_DELETE),
        }
    }

    pub async fn fetch(&self) {
        self.list.fetch(&NoParams {}).await
    }

    pub fn items(&self) -> Vec<Tracker> {
        self.list.items()
    }

    pub fn get(&self, id: &str) -> Option<Tracker> {
        self.list.find(|t| t.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub async fn create(&self, params: &CreateTrackerParams) -> Result<Tracker, AdminError> {
        self.create.execute(params).await
    }

    pub fn is_creating(&self) -> bool {
        self.create.is_loading()
    }

    pub async fn update(&self, params: &UpdateTrackerParams) -> Result<Tracker, AdminError> {
        self.update.execute(params).await
    }

    pub fn is_updating(&self) -> bool {
        self.update.is_loading()
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, AdminError> {
        self.delete.execute(&IdParams { id: id.to_string() }).await
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.is_loading()
    }
}
