use std::sync::Arc;

use super::{RpcCall, RpcList};
use crate::errors::AdminError;
use crate::models::{DeleteResult, GenerateTokenParams, IdParams, NoParams, Token};
use crate::rpc::{RpcClient, methods};

pub struct TokenClient {
    list: RpcList<Token>,
    generate: RpcCall<Token>,
    delete: RpcCall<DeleteResult>,
}

impl TokenClient {
    pub fn new(rpc: &Arc<RpcClient>) -> Self {
        Self {
            list: RpcList::new(rpc.clone(), methods::TOKEN_LIST),
            generate: RpcCall::new(rpc.clone(), methods::TOKEN_GENERATE),
            delete: RpcCall::new(rpc.clone(), methods::TOKEN_DELETE),
        }
    }

    pub async fn fetch(&self) {
        self.list.fetch(&NoParams {}).await
    }

    pub fn items(&self) -> Vec<Token> {
        self.list.items()
    }

    pub fn get(&self, id: &str) -> Option<Token> {
        self.list.find(|t| t.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub async fn generate(&self, params: &GenerateTokenParams) -> Result<Token, AdminError> {
        self.generate.execute(params).await
    }

    pub fn is_generating(&self) -> bool {
        self.generate.is_loading()
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResult, AdminError> {
        self.delete.execute(&IdParams { id: id.to_string() }).await
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.is_loading()
    }
}
