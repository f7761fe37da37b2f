// src/fetch/mod.rs
// =============================================================================
// This module retrieves pages over HTTP.
//
// Submodules:
// - http: Builds the reqwest client and downloads a page body
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod http;

pub use http::{build_client, fetch_page};
