//! JSON-RPC layer
//!
//! ```text
//! pages / cells → RpcClient ──(token injection, expiry handling)──→ RpcTransport
//!                                                                   ├→ HttpTransport (ureq)
//!                                                                   └→ MockTransport (tests)
//! ```

mod client;
pub mod mock;
pub mod protocol;
mod transport;

pub use client::RpcClient;
pub use protocol::{RpcErrorObject, RpcRequest, RpcResponse, methods};
pub use transport::{HttpTransport, RpcTransport};
