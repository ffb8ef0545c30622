use std::sync::Arc;

use super::{RpcCall, RpcList};
use crate::errors::AdminError;
use crate::models::{CreateSiteParams, NoParams, Site};
use crate::rpc::{RpcClient, methods};

pub struct SiteClient {
    list: RpcList<Site>,
    create: RpcCall<Site>,
}

impl SiteClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            list: RpcList::new(rpc.clone(), methods::SITE_LIST),
            create: RpcCall::new(rpc.clone(), methods::SITE_CREATE),
        }
    }

    pub async fn fetch(&self) {
        self.list.fetch(&NoParams {}).await
    }

    pub fn items(&self) -> Vec<Site> {
        self.list.items()
    }

    pub fn get(&self, id: &str) -> Option<Site> {
        self.list.find(|s| s.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub async fn create(&self, params: &CreateSiteParams) -> Result<Site, AdminError> {
        self.create.execute(params).await
    }

    pub fn is_creating(&self) -> bool {
        self.create.is_loading()
    }
}
